use std::fmt;
use std::path::Path;

use crate::error::{Result, RotaError};

/// Credential triple for the board service.
///
/// Loaded from a plain-text file of exactly three newline-separated
/// tokens, in order: board identifier, API key, API token. Blank lines
/// are ignored. There is no other configuration surface.
#[derive(Clone)]
pub struct Credentials {
    pub board_id: String,
    pub api_key: String,
    pub api_token: String,
}

impl Credentials {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        let mut tokens = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty());

        let mut next = |what: &str| {
            tokens
                .next()
                .map(str::to_string)
                .ok_or_else(|| RotaError::Config(format!("credentials file is missing the {what}")))
        };

        Ok(Self {
            board_id: next("board identifier")?,
            api_key: next("API key")?,
            api_token: next("API token")?,
        })
    }
}

// Key and token are secrets; keep them out of Debug output and logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("board_id", &self.board_id)
            .field("api_key", &"<redacted>")
            .field("api_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_lines() {
        let credentials = Credentials::parse("board-1\nkey-2\ntoken-3\n").unwrap();
        assert_eq!(credentials.board_id, "board-1");
        assert_eq!(credentials.api_key, "key-2");
        assert_eq!(credentials.api_token, "token-3");
    }

    #[test]
    fn ignores_blank_lines() {
        let credentials = Credentials::parse("board-1\n\nkey-2\n\ntoken-3\n\n").unwrap();
        assert_eq!(credentials.api_token, "token-3");
    }

    #[test]
    fn fails_on_missing_tokens() {
        assert!(matches!(
            Credentials::parse("board-1\nkey-2\n"),
            Err(RotaError::Config(message)) if message.contains("API token")
        ));
        assert!(Credentials::parse("").is_err());
    }

    #[test]
    fn debug_redacts_secrets() {
        let credentials = Credentials::parse("board-1\nkey-2\ntoken-3").unwrap();
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("board-1"));
        assert!(!rendered.contains("key-2"));
        assert!(!rendered.contains("token-3"));
    }

    #[test]
    fn loads_from_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials");
        std::fs::write(&path, "board-1\nkey-2\ntoken-3\n").unwrap();
        let credentials = Credentials::load(&path).unwrap();
        assert_eq!(credentials.board_id, "board-1");
    }
}
