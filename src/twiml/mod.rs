//! TwiML markup builders and the nested-block DSL
//!
//! Documents can be assembled by chaining builders:
//!
//! ```rust
//! use twilio_blocks::adapter::Build;
//! use twilio_blocks::twiml::*;
//!
//! let manual = VoiceResponseBuilder::new()
//!     .add_redirect(RedirectBuilder::new("https://failure").build())
//!     .build();
//! ```
//!
//! or with blocks that receive each builder explicitly:
//!
//! ```rust
//! use twilio_blocks::twiml::*;
//!
//! let nested = voice_response(|r| {
//!     r.gather(|g| {
//!         g.say("Welcome", |s| {
//!             s.voice(Voice::PollyGeraint);
//!         });
//!         g.action("https://success");
//!     });
//!     r.redirect("https://failure", |_| {});
//! });
//! assert!(nested.to_xml().unwrap().contains("<Gather action=\"https://success\">"));
//! ```
//!
//! A parent builder only has methods for the children it accepts, so a verb
//! cannot be attached in the wrong place.

#[macro_use]
mod macros;

mod element;
mod values;
mod verbs;

#[rustfmt::skip]
mod dsl;


pub use dsl::*;
pub use element::Element;
pub use values::{GatherInput, Method, RejectReason, Voice};
pub use verbs::*;

use crate::config::RenderConfig;
use crate::errors::Result;

/// A finished markup element
pub trait TwiML {
    /// Underlying element tree
    fn element(&self) -> &Element;

    /// Render with the default settings (declaration, compact)
    fn to_xml(&self) -> Result<String> {
        self.to_xml_with(&RenderConfig::default())
    }

    fn to_xml_with(&self, config: &RenderConfig) -> Result<String> {
        self.element().render(config)
    }
}
