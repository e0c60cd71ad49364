//! Configure-then-execute integration tests
//!
//! Ordering, call counts and error propagation through the fake API.

#[cfg(test)]
mod tests {
    use crate::common::{ApiError, FakeApi, VoiceRecord};
    use twilio_blocks::adapter::{create_with, delete_with, fetch_with, read_with, update_with};
    use twilio_blocks::{CreateWith, Creator, DeleteWith, FetchWith, ReadWith, UpdateWith};

    // ==================== Create ====================

    #[test]
    fn test_create_with_matches_manual_calls() {
        let api = FakeApi::new();
        let with_block = api
            .creator()
            .create_with(|c| {
                c.set_name("x").set_voice("GERAINT");
                Ok(())
            })
            .unwrap();

        let manual_api = FakeApi::new();
        let mut manual = manual_api.creator();
        manual.set_name("x").set_voice("GERAINT");
        let manual = manual.create().unwrap();

        assert_eq!(
            with_block,
            VoiceRecord {
                name: "x".to_string(),
                voice: "GERAINT".to_string(),
            }
        );
        assert_eq!(with_block, manual);
        assert_eq!(api.log.entries(), manual_api.log.entries());
    }

    #[test]
    fn test_block_completes_before_create() {
        let api = FakeApi::new();
        api.creator()
            .create_with(|c| {
                c.set_voice("Polly.Amy");
                c.set_name("first");
                c.set_name("second");
                assert_eq!(api.log.count("create"), 0);
                Ok(())
            })
            .unwrap();

        assert_eq!(
            api.log.entries(),
            vec![
                "set_voice:Polly.Amy",
                "set_name:first",
                "set_name:second",
                "create"
            ]
        );
    }

    #[test]
    fn test_last_setter_wins_before_terminal_action() {
        let api = FakeApi::new();
        let created: VoiceRecord = create_with(api.creator(), |c| {
            c.set_name("first").set_name("second");
            assert_eq!(c.snapshot().0.as_deref(), Some("second"));
            Ok(())
        })
        .unwrap();

        assert_eq!(created.name, "second");
    }

    #[test]
    fn test_block_error_never_calls_create() {
        let api = FakeApi::new();
        let result = api.creator().create_with(|_| {
            Err(ApiError::Validation("rejected before any setter".to_string()))
        });

        assert_eq!(
            result,
            Err(ApiError::Validation("rejected before any setter".to_string()))
        );
        assert_eq!(api.log.count("create"), 0);
        assert!(api.log.entries().is_empty());
        assert_eq!(api.len(), 0);
    }

    #[test]
    fn test_partial_block_side_effects_remain() {
        let api = FakeApi::new();
        let result = api.creator().create_with(|c| {
            c.set_name("x");
            Err(ApiError::Validation("voice missing".to_string()))
        });

        assert!(result.is_err());
        assert_eq!(api.log.entries(), vec!["set_name:x"]);
    }

    #[test]
    fn test_terminal_validation_error_passes_through() {
        let api = FakeApi::new();
        let err = api.creator().create_with(|_| Ok(())).unwrap_err();
        assert_eq!(err, ApiError::Validation("name is required".to_string()));
        assert_eq!(api.log.count("create"), 1);
    }

    #[test]
    fn test_transport_error_passes_through() {
        let api = FakeApi::offline();
        let err = api
            .creator()
            .create_with(|c| {
                c.set_name("x");
                Ok(())
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "transport failed: connection refused");
    }

    // ==================== Fetch / Read / Update / Delete ====================

    #[test]
    fn test_fetch_with() {
        let api = FakeApi::new();
        api.seed("welcome", "Polly.Geraint");

        let fetched = api.fetcher("welcome").fetch_with(|_| Ok(())).unwrap();
        assert_eq!(fetched.voice, "Polly.Geraint");

        let missing: Result<VoiceRecord, ApiError> = fetch_with(api.fetcher("absent"), |_| Ok(()));
        assert_eq!(missing, Err(ApiError::NotFound("absent".to_string())));
    }

    #[test]
    fn test_read_with_filters_and_limits() {
        let api = FakeApi::new();
        api.seed("a", "alice");
        api.seed("b", "man");
        api.seed("c", "alice");
        api.seed("d", "alice");

        let set = api
            .reader()
            .read_with(|r| {
                r.set_voice("alice").limit(2);
                Ok(())
            })
            .unwrap();

        let names: Vec<_> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(set.limit, Some(2));
        assert_eq!(api.log.entries(), vec!["set_voice:alice", "limit:2", "read"]);
    }

    #[test]
    fn test_read_with_no_matches_is_empty_not_absent() {
        let api = FakeApi::new();
        let set = read_with(api.reader(), |r| {
            r.set_voice("nobody");
            Ok(())
        })
        .unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_update_with() {
        let api = FakeApi::new();
        api.seed("welcome", "alice");

        let updated = api
            .updater("welcome")
            .update_with(|u| {
                u.set_voice("Polly.Brian");
                Ok(())
            })
            .unwrap();
        assert_eq!(updated.voice, "Polly.Brian");

        let refetched = api.fetcher("welcome").fetch_with(|_| Ok(())).unwrap();
        assert_eq!(refetched, updated);
    }

    #[test]
    fn test_update_block_error_leaves_resource_untouched() {
        let api = FakeApi::new();
        api.seed("welcome", "alice");

        let result: Result<VoiceRecord, ApiError> = update_with(api.updater("welcome"), |u| {
            u.set_voice("man");
            Err(ApiError::Validation("stop".to_string()))
        });

        assert!(result.is_err());
        assert_eq!(api.log.count("update"), 0);
        let current = api.fetcher("welcome").fetch_with(|_| Ok(())).unwrap();
        assert_eq!(current.voice, "alice");
    }

    #[test]
    fn test_delete_with() {
        let api = FakeApi::new();
        api.seed("welcome", "alice");

        let () = api.deleter("welcome").delete_with(|_| Ok(())).unwrap();
        assert_eq!(api.len(), 0);

        let again = delete_with(api.deleter("welcome"), |_| Ok(()));
        assert_eq!(again, Err(ApiError::NotFound("welcome".to_string())));
        assert_eq!(api.log.count("delete"), 2);
    }
}
