use tfidf_viewer_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a request timeout in whole seconds
pub fn parse_timeout(s: &str) -> std::result::Result<u64, String> {
    match s.parse::<u64>() {
        Ok(0) => Err("timeout must be at least 1 second".to_string()),
        Ok(seconds) => Ok(seconds),
        Err(_) => Err(format!("invalid timeout: {} (expected whole seconds)", s)),
    }
}
