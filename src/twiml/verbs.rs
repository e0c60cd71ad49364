//! Verb and noun builders
//!
//! Every builder exposes chainable `&mut self` setters and closes with
//! [`Build::build`]. Children are attached through the methods declared in
//! [`super::dsl`].

use super::element::Element;
use super::values::{GatherInput, Method, RejectReason, Voice};
use super::TwiML;
use crate::adapter::Build;

twiml_verb! {
    /// Root of a voice response document
    VoiceResponse => VoiceResponseBuilder, "Response"
}

impl VoiceResponseBuilder {
    pub fn new() -> Self {
        Self::blank()
    }
}

impl Default for VoiceResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

twiml_verb! {
    /// Root of a messaging response document
    MessagingResponse => MessagingResponseBuilder, "Response"
}

impl MessagingResponseBuilder {
    pub fn new() -> Self {
        Self::blank()
    }
}

impl Default for MessagingResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

twiml_verb! {
    /// `<Say>`: read text aloud
    Say => SayBuilder, "Say"
}

impl SayBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        let mut builder = Self::blank();
        builder.element.set_body(message);
        builder
    }

    pub fn voice(&mut self, voice: Voice) -> &mut Self {
        self.attr("voice", voice)
    }

    /// BCP-47 language tag, e.g. `en-GB`
    pub fn language(&mut self, language: impl Into<String>) -> &mut Self {
        self.attr("language", language.into())
    }

    /// Repeat count; `0` repeats until the call ends
    pub fn loops(&mut self, count: u32) -> &mut Self {
        self.attr("loop", count)
    }
}

twiml_verb! {
    /// `<Play>`: play an audio file
    Play => PlayBuilder, "Play"
}

impl PlayBuilder {
    pub fn new(url: impl Into<String>) -> Self {
        let mut builder = Self::blank();
        builder.element.set_body(url);
        builder
    }

    pub fn loops(&mut self, count: u32) -> &mut Self {
        self.attr("loop", count)
    }

    /// DTMF tones to play instead of audio
    pub fn digits(&mut self, digits: impl Into<String>) -> &mut Self {
        self.attr("digits", digits.into())
    }
}

twiml_verb! {
    /// `<Pause>`: wait silently
    Pause => PauseBuilder, "Pause"
}

impl PauseBuilder {
    pub fn new() -> Self {
        Self::blank()
    }

    /// Seconds
    pub fn length(&mut self, seconds: u32) -> &mut Self {
        self.attr("length", seconds)
    }
}

impl Default for PauseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

twiml_verb! {
    /// `<Gather>`: collect digits or speech
    Gather => GatherBuilder, "Gather"
}

impl GatherBuilder {
    pub fn new() -> Self {
        Self::blank()
    }

    pub fn action(&mut self, url: impl Into<String>) -> &mut Self {
        self.attr("action", url.into())
    }

    pub fn method(&mut self, method: Method) -> &mut Self {
        self.attr("method", method)
    }

    pub fn timeout(&mut self, seconds: u32) -> &mut Self {
        self.attr("timeout", seconds)
    }

    pub fn num_digits(&mut self, digits: u32) -> &mut Self {
        self.attr("numDigits", digits)
    }

    pub fn finish_on_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.attr("finishOnKey", key.into())
    }

    pub fn input(&mut self, input: GatherInput) -> &mut Self {
        self.attr("input", input)
    }

    /// Seconds, or `auto`
    pub fn speech_timeout(&mut self, timeout: impl Into<String>) -> &mut Self {
        self.attr("speechTimeout", timeout.into())
    }

    pub fn language(&mut self, language: impl Into<String>) -> &mut Self {
        self.attr("language", language.into())
    }

    /// Comma-separated phrases that improve speech recognition
    pub fn hints(&mut self, hints: impl Into<String>) -> &mut Self {
        self.attr("hints", hints.into())
    }
}

impl Default for GatherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

twiml_verb! {
    /// `<Redirect>`: continue with the document at another URL
    Redirect => RedirectBuilder, "Redirect"
}

impl RedirectBuilder {
    pub fn new(url: impl Into<String>) -> Self {
        let mut builder = Self::blank();
        builder.element.set_body(url);
        builder
    }

    pub fn method(&mut self, method: Method) -> &mut Self {
        self.attr("method", method)
    }
}

twiml_verb! {
    /// `<Hangup>`
    Hangup => HangupBuilder, "Hangup"
}

impl HangupBuilder {
    pub fn new() -> Self {
        Self::blank()
    }
}

impl Default for HangupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

twiml_verb! {
    /// `<Reject>`: decline an incoming call without answering
    Reject => RejectBuilder, "Reject"
}

impl RejectBuilder {
    pub fn new() -> Self {
        Self::blank()
    }

    pub fn reason(&mut self, reason: RejectReason) -> &mut Self {
        self.attr("reason", reason)
    }
}

impl Default for RejectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

twiml_verb! {
    /// `<Dial>`: connect the caller to another party
    Dial => DialBuilder, "Dial"
}

impl DialBuilder {
    pub fn new() -> Self {
        Self::blank()
    }

    /// Dial a single number given as body text
    pub fn with_number(number: impl Into<String>) -> Self {
        let mut builder = Self::blank();
        builder.element.set_body(number);
        builder
    }

    pub fn action(&mut self, url: impl Into<String>) -> &mut Self {
        self.attr("action", url.into())
    }

    pub fn method(&mut self, method: Method) -> &mut Self {
        self.attr("method", method)
    }

    pub fn timeout(&mut self, seconds: u32) -> &mut Self {
        self.attr("timeout", seconds)
    }

    pub fn caller_id(&mut self, caller_id: impl Into<String>) -> &mut Self {
        self.attr("callerId", caller_id.into())
    }

    pub fn hangup_on_star(&mut self, enabled: bool) -> &mut Self {
        self.attr("hangupOnStar", enabled)
    }

    /// Seconds
    pub fn time_limit(&mut self, seconds: u32) -> &mut Self {
        self.attr("timeLimit", seconds)
    }

    /// Recording mode, e.g. `record-from-answer`
    pub fn record(&mut self, mode: impl Into<String>) -> &mut Self {
        self.attr("record", mode.into())
    }
}

impl Default for DialBuilder {
    fn default() -> Self {
        Self::new()
    }
}

twiml_verb! {
    /// `<Number>` inside `<Dial>`
    Number => NumberBuilder, "Number"
}

impl NumberBuilder {
    pub fn new(phone_number: impl Into<String>) -> Self {
        let mut builder = Self::blank();
        builder.element.set_body(phone_number);
        builder
    }

    pub fn send_digits(&mut self, digits: impl Into<String>) -> &mut Self {
        self.attr("sendDigits", digits.into())
    }

    /// Document to play to the called party before connecting
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.attr("url", url.into())
    }
}

twiml_verb! {
    /// `<Client>` inside `<Dial>`
    Client => ClientBuilder, "Client"
}

impl ClientBuilder {
    pub fn new(identity: impl Into<String>) -> Self {
        let mut builder = Self::blank();
        builder.element.set_body(identity);
        builder
    }
}

twiml_verb! {
    /// `<Conference>` inside `<Dial>`
    Conference => ConferenceBuilder, "Conference"
}

impl ConferenceBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let mut builder = Self::blank();
        builder.element.set_body(name);
        builder
    }

    pub fn muted(&mut self, muted: bool) -> &mut Self {
        self.attr("muted", muted)
    }

    pub fn start_conference_on_enter(&mut self, enabled: bool) -> &mut Self {
        self.attr("startConferenceOnEnter", enabled)
    }

    pub fn end_conference_on_exit(&mut self, enabled: bool) -> &mut Self {
        self.attr("endConferenceOnExit", enabled)
    }

    pub fn wait_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.attr("waitUrl", url.into())
    }
}

twiml_verb! {
    /// `<Queue>` inside `<Dial>`
    Queue => QueueBuilder, "Queue"
}

impl QueueBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let mut builder = Self::blank();
        builder.element.set_body(name);
        builder
    }

    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.attr("url", url.into())
    }
}

twiml_verb! {
    /// `<Sip>` inside `<Dial>`
    Sip => SipBuilder, "Sip"
}

impl SipBuilder {
    pub fn new(uri: impl Into<String>) -> Self {
        let mut builder = Self::blank();
        builder.element.set_body(uri);
        builder
    }

    pub fn username(&mut self, username: impl Into<String>) -> &mut Self {
        self.attr("username", username.into())
    }

    pub fn password(&mut self, password: impl Into<String>) -> &mut Self {
        self.attr("password", password.into())
    }
}

twiml_verb! {
    /// `<Record>`: record the caller
    Record => RecordBuilder, "Record"
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::blank()
    }

    pub fn action(&mut self, url: impl Into<String>) -> &mut Self {
        self.attr("action", url.into())
    }

    pub fn method(&mut self, method: Method) -> &mut Self {
        self.attr("method", method)
    }

    /// Seconds of silence that end the recording
    pub fn timeout(&mut self, seconds: u32) -> &mut Self {
        self.attr("timeout", seconds)
    }

    /// Seconds
    pub fn max_length(&mut self, seconds: u32) -> &mut Self {
        self.attr("maxLength", seconds)
    }

    pub fn finish_on_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.attr("finishOnKey", key.into())
    }

    pub fn play_beep(&mut self, enabled: bool) -> &mut Self {
        self.attr("playBeep", enabled)
    }

    pub fn transcribe(&mut self, enabled: bool) -> &mut Self {
        self.attr("transcribe", enabled)
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

twiml_verb! {
    /// `<Enqueue>`: place the caller in a queue
    Enqueue => EnqueueBuilder, "Enqueue"
}

impl EnqueueBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let mut builder = Self::blank();
        builder.element.set_body(name);
        builder
    }

    pub fn action(&mut self, url: impl Into<String>) -> &mut Self {
        self.attr("action", url.into())
    }

    pub fn wait_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.attr("waitUrl", url.into())
    }
}

twiml_verb! {
    /// `<Leave>`: take the caller out of its queue
    Leave => LeaveBuilder, "Leave"
}

impl LeaveBuilder {
    pub fn new() -> Self {
        Self::blank()
    }
}

impl Default for LeaveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

twiml_verb! {
    /// `<Message>`: reply with an SMS/MMS
    Message => MessageBuilder, "Message"
}

impl MessageBuilder {
    pub fn new(body: impl Into<String>) -> Self {
        let mut builder = Self::blank();
        builder.element.set_body(body);
        builder
    }

    pub fn to(&mut self, to: impl Into<String>) -> &mut Self {
        self.attr("to", to.into())
    }

    pub fn from(&mut self, from: impl Into<String>) -> &mut Self {
        self.attr("from", from.into())
    }

    pub fn action(&mut self, url: impl Into<String>) -> &mut Self {
        self.attr("action", url.into())
    }

    pub fn method(&mut self, method: Method) -> &mut Self {
        self.attr("method", method)
    }
}

twiml_verb! {
    /// `<Body>` inside `<Message>`
    Body => BodyBuilder, "Body"
}

impl BodyBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        let mut builder = Self::blank();
        builder.element.set_body(message);
        builder
    }
}

twiml_verb! {
    /// `<Media>` inside `<Message>`
    Media => MediaBuilder, "Media"
}

impl MediaBuilder {
    pub fn new(url: impl Into<String>) -> Self {
        let mut builder = Self::blank();
        builder.element.set_body(url);
        builder
    }
}
