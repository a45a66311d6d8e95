//! Form DTOs

use serde::Deserialize;

/// Login form (`application/x-www-form-urlencoded`)
///
/// Missing fields deserialize as empty strings and are then rejected as
/// invalid credentials, so the form is re-rendered instead of a 422.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}
