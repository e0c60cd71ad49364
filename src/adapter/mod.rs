//! Configurable action adapter
//!
//! Lets callers configure a request builder inside a single block and execute
//! its terminal action in the same call:
//!
//! ```rust,ignore
//! use twilio_blocks::adapter::CreateWith;
//!
//! let call = CallCreator::new(to, from).create_with(|c| {
//!     c.set_url("https://example.com/twiml").set_timeout(30);
//!     Ok(())
//! })?;
//! ```
//!
//! The builder is moved into the call, so its in-place configuration is never
//! shared between concurrent calls.

mod blocks;
mod capability;
mod resource_set;


pub use blocks::{
    BuildWith, CreateWith, DeleteWith, FetchWith, ReadWith, UpdateWith, apply, build_with,
    create_with, delete_with, fetch_with, read_with, update_with,
};
pub use capability::{Build, Creator, Deleter, Fetcher, Reader, Resource, Updater};
pub use resource_set::ResourceSet;
