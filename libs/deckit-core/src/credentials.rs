//! API key file loading.

use crate::error::{DeckError, Result};
use std::fs;
use std::path::Path;

/// Read the lookup service key from the first line of `path`.
pub fn read_api_key(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| DeckError::from_io(path, e))?;

    let key = content.lines().next().unwrap_or_default().trim();
    if key.is_empty() {
        return Err(DeckError::InvalidCredential(format!(
            "no key on the first line of {}",
            path.display()
        )));
    }
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn key_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_first_line_trimmed() {
        let file = key_file("  abc123 \r\nsecond line\n");
        assert_eq!(read_api_key(file.path()).unwrap(), "abc123");
    }

    #[test]
    fn blank_first_line_is_invalid() {
        let file = key_file("\nabc123\n");
        assert!(matches!(read_api_key(file.path()), Err(DeckError::InvalidCredential(_))));
    }

    #[test]
    fn missing_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_api_key(dir.path().join("key"));
        assert!(matches!(result, Err(DeckError::MissingFile { .. })));
    }
}
