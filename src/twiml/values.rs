//! Typed attribute values

use std::fmt;

use serde::{Deserialize, Serialize};

/// Text-to-speech voice for `<Say>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Voice {
    Man,
    Woman,
    Alice,
    PollyAmy,
    PollyBrian,
    PollyEmma,
    PollyGeraint,
    PollyJoanna,
    PollyMatthew,
    /// Any voice name the API accepts that has no variant here
    Custom(String),
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Voice::Man => "man",
            Voice::Woman => "woman",
            Voice::Alice => "alice",
            Voice::PollyAmy => "Polly.Amy",
            Voice::PollyBrian => "Polly.Brian",
            Voice::PollyEmma => "Polly.Emma",
            Voice::PollyGeraint => "Polly.Geraint",
            Voice::PollyJoanna => "Polly.Joanna",
            Voice::PollyMatthew => "Polly.Matthew",
            Voice::Custom(name) => name.as_str(),
        };
        f.write_str(name)
    }
}

/// HTTP method used for callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// Input types accepted by `<Gather>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatherInput {
    Dtmf,
    Speech,
    DtmfSpeech,
}

impl fmt::Display for GatherInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatherInput::Dtmf => f.write_str("dtmf"),
            GatherInput::Speech => f.write_str("speech"),
            GatherInput::DtmfSpeech => f.write_str("dtmf speech"),
        }
    }
}

/// Reason reported by `<Reject>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    Rejected,
    Busy,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Rejected => f.write_str("rejected"),
            RejectReason::Busy => f.write_str("busy"),
        }
    }
}
