//! Integration tests for twilio-blocks
//!
//! These tests drive the public API against the fake builders in `common`.

pub mod adapter_tests;
pub mod codegen_tests;
pub mod config_tests;
pub mod twiml_tests;
