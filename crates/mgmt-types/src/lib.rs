pub mod api;
pub mod config;
pub mod fqid;

pub use fqid::{Fqid, FqidError};
