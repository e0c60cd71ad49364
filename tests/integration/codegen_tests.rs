//! Code generation integration tests
//!
//! Datafiles are written to temporary directories and generated through the
//! file-based entry point.

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use twilio_blocks::BlocksError;
    use twilio_blocks::codegen::{CodegenOptions, generate_file};

    const DATAFILE: &str = r#"{
        "": {
            "VoiceResponse": { "constructors": [[]], "children": ["Say", "Stream"] }
        },
        ".voice": {
            "Say": { "constructors": [["message:String"]], "children": [] }
        }
    }"#;

    #[test]
    fn test_generate_to_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("voice.json");
        let output = dir.path().join("dsl.rs");
        fs::write(&input, DATAFILE).unwrap();

        let generated =
            generate_file(&input, Some(output.as_path()), &CodegenOptions::default()).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, generated.source);
        assert!(written.contains("pub fn voice_response("));
        assert!(written.contains("add_say: Say as SayBuilder {"));
        assert_eq!(generated.missing, vec!["Stream".to_string()]);
    }

    #[test]
    fn test_missing_datafile() {
        let dir = TempDir::new().unwrap();
        let err = generate_file(
            &dir.path().join("absent.json"),
            None,
            &CodegenOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BlocksError::Io(_)));
    }

    #[test]
    fn test_malformed_argument_in_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bad.json");
        fs::write(
            &input,
            r#"{ ".voice": { "Say": { "constructors": [["message"]] } } }"#,
        )
        .unwrap();

        let err = generate_file(&input, None, &CodegenOptions::default()).unwrap_err();
        assert!(matches!(err, BlocksError::InvalidArgument(_)));
    }

    #[test]
    fn test_bundled_datafile_generates() {
        let input = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/twiml.json");
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("dsl.rs");

        let generated =
            generate_file(&input, Some(output.as_path()), &CodegenOptions::default()).unwrap();
        assert!(generated.missing.is_empty());
        assert!(generated.source.contains("pub fn messaging_response("));
        assert!(generated.source.contains("dial_with_number(number: impl Into<String>);"));
    }
}
