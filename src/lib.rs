//! # twilio-blocks
//!
//! Block-style helpers on top of Twilio-style request and markup builders.
//!
//! ## Features
//!
//! - **Configure-then-execute**: `create_with`, `fetch_with`, `read_with`,
//!   `update_with` and `delete_with` run a configuration block against a
//!   request builder, then invoke its terminal action exactly once
//! - **Transparent errors**: failures from the block or the wrapped API come
//!   back unchanged
//! - **Nested TwiML**: build voice and messaging responses with nested blocks
//!   instead of nested builder calls
//! - **Code generation**: `twiml-codegen` produces the nested layer from a
//!   datafile of classes and their permitted children
//!
//! ## Quick Start
//!
//! ```rust
//! use twilio_blocks::adapter::{CreateWith, Creator};
//!
//! #[derive(Default)]
//! struct SayCreator {
//!     name: Option<String>,
//!     voice: Option<String>,
//! }
//!
//! impl SayCreator {
//!     fn set_name(&mut self, name: &str) -> &mut Self {
//!         self.name = Some(name.to_string());
//!         self
//!     }
//!
//!     fn set_voice(&mut self, voice: &str) -> &mut Self {
//!         self.voice = Some(voice.to_string());
//!         self
//!     }
//! }
//!
//! impl Creator<(String, String)> for SayCreator {
//!     type Error = String;
//!
//!     fn create(self) -> Result<(String, String), String> {
//!         Ok((self.name.ok_or("name")?, self.voice.ok_or("voice")?))
//!     }
//! }
//!
//! let created = SayCreator::default().create_with(|c| {
//!     c.set_name("x").set_voice("GERAINT");
//!     Ok(())
//! });
//! assert_eq!(created, Ok(("x".to_string(), "GERAINT".to_string())));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod codegen;
pub mod config;
pub mod errors;
pub mod twiml;
pub mod utils;

// Re-export main types
pub use adapter::{
    Build, BuildWith, CreateWith, Creator, DeleteWith, Deleter, FetchWith, Fetcher, ReadWith,
    Reader, Resource, ResourceSet, UpdateWith, Updater,
};
pub use config::RenderConfig;
pub use errors::{BlocksError, Result};
pub use twiml::TwiML;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the default stderr logger (`RUST_LOG`, falling back to `info`)
pub fn init() -> Result<bool> {
    utils::logging::init_logger(&utils::logging::LoggingConfig::default())
}
