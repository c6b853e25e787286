//! Installed Go releases and where to find them.
//!
//! - [`config`] - SDK root resolution
//! - [`release`] - A single installed release
//! - [`discovery`] - Listing, probing and ordering releases

pub mod config;
pub mod discovery;
pub mod release;

pub use config::{SdkConfig, DEFAULT_SDK_DIR, SDK_ENV_VAR};
pub use discovery::discover;
pub use release::{go_command, Release, GOROOT_VAR};
