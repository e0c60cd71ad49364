//! TwiML integration tests
//!
//! Nested-block documents must render exactly like the equivalent manual
//! builder chains.

#[cfg(test)]
mod tests {
    use crate::common::compact;
    use twilio_blocks::twiml::*;
    use twilio_blocks::{Build, BuildWith, RenderConfig};

    #[test]
    fn test_nested_and_manual_documents_render_identically() {
        let with_blocks = voice_response(|r| {
            r.gather(|g| {
                g.say("Welcome to AlphaSights", |s| {
                    s.voice(Voice::PollyGeraint);
                });
                g.action("https://success");
            });
            r.redirect("https://failure", |_| {});
        });

        let without_blocks = VoiceResponseBuilder::new()
            .add_gather(
                GatherBuilder::new()
                    .add_say(
                        SayBuilder::new("Welcome to AlphaSights")
                            .voice(Voice::PollyGeraint)
                            .build(),
                    )
                    .action("https://success")
                    .build(),
            )
            .add_redirect(RedirectBuilder::new("https://failure").build())
            .build();

        assert_eq!(
            with_blocks.to_xml().unwrap(),
            without_blocks.to_xml().unwrap()
        );
    }

    #[test]
    fn test_build_with_on_a_builder() {
        let say = SayBuilder::new("Hold please").build_with(|s| {
            s.loops(2).language("en-GB");
        });

        assert_eq!(
            say.to_xml_with(&compact()).unwrap(),
            r#"<Say loop="2" language="en-GB">Hold please</Say>"#
        );
    }

    #[test]
    fn test_queue_flow() {
        let response = voice_response(|r| {
            r.enqueue("support", |e| {
                e.wait_url("https://example.com/hold");
            });
            r.leave(|_| {});
        });

        assert_eq!(
            response.to_xml_with(&compact()).unwrap(),
            concat!(
                "<Response>",
                r#"<Enqueue waitUrl="https://example.com/hold">support</Enqueue>"#,
                "<Leave/>",
                "</Response>",
            )
        );
    }

    #[test]
    fn test_dial_queue_and_sip() {
        let response = voice_response(|r| {
            r.dial(|d| {
                d.queue("support", |q| {
                    q.url("https://example.com/about");
                });
                d.sip("sip:alice@example.com", |s| {
                    s.username("alice").password("secret");
                });
            });
        });

        let xml = response.to_xml_with(&compact()).unwrap();
        assert!(xml.contains(r#"<Queue url="https://example.com/about">support</Queue>"#));
        assert!(xml.contains(
            r#"<Sip username="alice" password="secret">sip:alice@example.com</Sip>"#
        ));
    }

    #[test]
    fn test_messaging_with_body_child() {
        let response = messaging_response(|r| {
            r.message("", |m| {
                m.body("Store hours: 9-5", |_| {});
            });
            r.redirect("https://example.com/next", |rd| {
                rd.method(Method::Post);
            });
        });

        let xml = response.to_xml_with(&compact()).unwrap();
        assert!(xml.contains("<Body>Store hours: 9-5</Body>"));
        assert!(xml.ends_with(r#"<Redirect method="POST">https://example.com/next</Redirect></Response>"#));
    }

    #[test]
    fn test_pretty_output() {
        let response = voice_response(|r| {
            r.say("Goodbye", |_| {});
            r.hangup(|_| {});
        });
        let config = RenderConfig::builder().build_with(|c| {
            c.xml_declaration(false).indent(2);
        });

        let xml = response.to_xml_with(&config).unwrap();
        assert_eq!(
            xml,
            "<Response>\n  <Say>Goodbye</Say>\n  <Hangup/>\n</Response>"
        );
    }
}
