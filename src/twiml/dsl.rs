//! Nested-block constructors for TwiML verbs
//!
//! Generated by `twiml-codegen` from `data/twiml.json`.
//! Edit the datafile and regenerate instead of changing this file.

use super::verbs::*;
use crate::adapter::build_with;

/// Configure a `Body` in a block
pub fn body(
    message: impl Into<String>,
    configure: impl FnOnce(&mut BodyBuilder),
) -> Body {
    build_with(BodyBuilder::new(message), configure)
}

/// Configure a `Client` in a block
pub fn client(
    identity: impl Into<String>,
    configure: impl FnOnce(&mut ClientBuilder),
) -> Client {
    build_with(ClientBuilder::new(identity), configure)
}

/// Configure a `Conference` in a block
pub fn conference(
    name: impl Into<String>,
    configure: impl FnOnce(&mut ConferenceBuilder),
) -> Conference {
    build_with(ConferenceBuilder::new(name), configure)
}

/// Configure a `Dial` in a block
pub fn dial(
    configure: impl FnOnce(&mut DialBuilder),
) -> Dial {
    build_with(DialBuilder::new(), configure)
}

/// Configure a `Dial` in a block
pub fn dial_with_number(
    number: impl Into<String>,
    configure: impl FnOnce(&mut DialBuilder),
) -> Dial {
    build_with(DialBuilder::with_number(number), configure)
}

/// Configure a `Enqueue` in a block
pub fn enqueue(
    name: impl Into<String>,
    configure: impl FnOnce(&mut EnqueueBuilder),
) -> Enqueue {
    build_with(EnqueueBuilder::new(name), configure)
}

/// Configure a `Gather` in a block
pub fn gather(
    configure: impl FnOnce(&mut GatherBuilder),
) -> Gather {
    build_with(GatherBuilder::new(), configure)
}

/// Configure a `Hangup` in a block
pub fn hangup(
    configure: impl FnOnce(&mut HangupBuilder),
) -> Hangup {
    build_with(HangupBuilder::new(), configure)
}

/// Configure a `Leave` in a block
pub fn leave(
    configure: impl FnOnce(&mut LeaveBuilder),
) -> Leave {
    build_with(LeaveBuilder::new(), configure)
}

/// Configure a `Media` in a block
pub fn media(
    url: impl Into<String>,
    configure: impl FnOnce(&mut MediaBuilder),
) -> Media {
    build_with(MediaBuilder::new(url), configure)
}

/// Configure a `Message` in a block
pub fn message(
    body: impl Into<String>,
    configure: impl FnOnce(&mut MessageBuilder),
) -> Message {
    build_with(MessageBuilder::new(body), configure)
}

/// Configure a `MessagingResponse` in a block
pub fn messaging_response(
    configure: impl FnOnce(&mut MessagingResponseBuilder),
) -> MessagingResponse {
    build_with(MessagingResponseBuilder::new(), configure)
}

/// Configure a `Number` in a block
pub fn number(
    phone_number: impl Into<String>,
    configure: impl FnOnce(&mut NumberBuilder),
) -> Number {
    build_with(NumberBuilder::new(phone_number), configure)
}

/// Configure a `Pause` in a block
pub fn pause(
    configure: impl FnOnce(&mut PauseBuilder),
) -> Pause {
    build_with(PauseBuilder::new(), configure)
}

/// Configure a `Play` in a block
pub fn play(
    url: impl Into<String>,
    configure: impl FnOnce(&mut PlayBuilder),
) -> Play {
    build_with(PlayBuilder::new(url), configure)
}

/// Configure a `Queue` in a block
pub fn queue(
    name: impl Into<String>,
    configure: impl FnOnce(&mut QueueBuilder),
) -> Queue {
    build_with(QueueBuilder::new(name), configure)
}

/// Configure a `Record` in a block
pub fn record(
    configure: impl FnOnce(&mut RecordBuilder),
) -> Record {
    build_with(RecordBuilder::new(), configure)
}

/// Configure a `Redirect` in a block
pub fn redirect(
    url: impl Into<String>,
    configure: impl FnOnce(&mut RedirectBuilder),
) -> Redirect {
    build_with(RedirectBuilder::new(url), configure)
}

/// Configure a `Reject` in a block
pub fn reject(
    configure: impl FnOnce(&mut RejectBuilder),
) -> Reject {
    build_with(RejectBuilder::new(), configure)
}

/// Configure a `Say` in a block
pub fn say(
    message: impl Into<String>,
    configure: impl FnOnce(&mut SayBuilder),
) -> Say {
    build_with(SayBuilder::new(message), configure)
}

/// Configure a `Sip` in a block
pub fn sip(
    uri: impl Into<String>,
    configure: impl FnOnce(&mut SipBuilder),
) -> Sip {
    build_with(SipBuilder::new(uri), configure)
}

/// Configure a `VoiceResponse` in a block
pub fn voice_response(
    configure: impl FnOnce(&mut VoiceResponseBuilder),
) -> VoiceResponse {
    build_with(VoiceResponseBuilder::new(), configure)
}

twiml_children! {
    DialBuilder {
        add_client: Client as ClientBuilder {
            client(identity: impl Into<String>);
        }
        add_conference: Conference as ConferenceBuilder {
            conference(name: impl Into<String>);
        }
        add_number: Number as NumberBuilder {
            number(phone_number: impl Into<String>);
        }
        add_queue: Queue as QueueBuilder {
            queue(name: impl Into<String>);
        }
        add_sip: Sip as SipBuilder {
            sip(uri: impl Into<String>);
        }
    }
}

twiml_children! {
    GatherBuilder {
        add_pause: Pause as PauseBuilder {
            pause();
        }
        add_play: Play as PlayBuilder {
            play(url: impl Into<String>);
        }
        add_say: Say as SayBuilder {
            say(message: impl Into<String>);
        }
    }
}

twiml_children! {
    MessageBuilder {
        add_body: Body as BodyBuilder {
            body(message: impl Into<String>);
        }
        add_media: Media as MediaBuilder {
            media(url: impl Into<String>);
        }
    }
}

twiml_children! {
    MessagingResponseBuilder {
        add_message: Message as MessageBuilder {
            message(body: impl Into<String>);
        }
        add_redirect: Redirect as RedirectBuilder {
            redirect(url: impl Into<String>);
        }
    }
}

twiml_children! {
    VoiceResponseBuilder {
        add_dial: Dial as DialBuilder {
            dial();
            dial_with_number(number: impl Into<String>);
        }
        add_enqueue: Enqueue as EnqueueBuilder {
            enqueue(name: impl Into<String>);
        }
        add_gather: Gather as GatherBuilder {
            gather();
        }
        add_hangup: Hangup as HangupBuilder {
            hangup();
        }
        add_leave: Leave as LeaveBuilder {
            leave();
        }
        add_pause: Pause as PauseBuilder {
            pause();
        }
        add_play: Play as PlayBuilder {
            play(url: impl Into<String>);
        }
        add_record: Record as RecordBuilder {
            record();
        }
        add_redirect: Redirect as RedirectBuilder {
            redirect(url: impl Into<String>);
        }
        add_reject: Reject as RejectBuilder {
            reject();
        }
        add_say: Say as SayBuilder {
            say(message: impl Into<String>);
        }
    }
}

// MISSING: []
