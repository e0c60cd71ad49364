//! Common test utilities for twilio-blocks
//!
//! - A fake API implementing every builder capability
//! - Helpers for comparing rendered markup


pub use fixtures::{ApiError, CallLog, FakeApi, VoiceRecord};

use twilio_blocks::RenderConfig;

/// Render settings without the XML declaration, for short expected strings
pub fn compact() -> RenderConfig {
    RenderConfig {
        xml_declaration: false,
        indent: None,
    }
}
