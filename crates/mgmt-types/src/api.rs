use std::fmt;

use serde::{Deserialize, Serialize};

pub const SET_PASSWORD_PATH: &str = "/internal/manage/set-password";
pub const HEALTH_PATH: &str = "/health";
/// Shown instead of secrets in debug output
pub const REDACTED: &str = "[redacted]";

#[derive(Clone, Serialize, Deserialize)]
pub struct SetPasswordRequest {
    pub user_id: i64,
    pub password: String,
}

impl fmt::Debug for SetPasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetPasswordRequest")
            .field("user_id", &self.user_id)
            .field("password", &REDACTED)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetPasswordResponse {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
