#![forbid(unsafe_code)]

//! Shared building blocks for the culture workspace: locale identifiers,
//! configuration and the core error type.

pub mod config;
pub mod error;
pub mod types;

pub use config::CultureConfig;
pub use error::{Error, Result};
pub use types::{Lcid, ParseLcidError, MAX_CULTURE_NAME_LEN};
