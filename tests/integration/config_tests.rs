//! Configuration loading tests

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use twilio_blocks::config::MAX_INDENT;
    use twilio_blocks::twiml::{TwiML, hangup};
    use twilio_blocks::{BlocksError, RenderConfig};

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("render.yaml");
        fs::write(&path, "xml_declaration: false\nindent: 2\n").unwrap();

        let config = RenderConfig::from_file(&path).unwrap();
        assert!(!config.xml_declaration);
        assert_eq!(config.indent, Some(2));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("render.yaml");
        fs::write(&path, "{}\n").unwrap();

        let config = RenderConfig::from_file(&path).unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_indent_limit() {
        let yaml = format!("indent: {}\n", MAX_INDENT + 1);
        let err = RenderConfig::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, BlocksError::Config(_)));
        assert!(RenderConfig::from_yaml_str(&format!("indent: {}\n", MAX_INDENT)).is_ok());
    }

    #[test]
    fn test_loaded_config_drives_rendering() {
        let config = RenderConfig::from_yaml_str("xml_declaration: false\n").unwrap();
        let xml = hangup(|_| {}).to_xml_with(&config).unwrap();
        assert_eq!(xml, "<Hangup/>");
    }
}
