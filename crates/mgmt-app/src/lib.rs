pub mod error;
pub mod rest_api;
pub mod set_password;
pub mod state;

pub use set_password::{SetPassword, SetPasswordCommand, SetPasswordError, Step};
