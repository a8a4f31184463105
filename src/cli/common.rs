//! Shared CLI plumbing: error type, exit codes and input/output helpers.

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::Color;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed.
    Success = 0,
    /// Bad input: invalid color, unknown key, malformed JSON.
    ValidationError = 1,
    /// File system or serialization failure.
    IoError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// A command failure with the exit code it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    kind: ExitCode,
    message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        self.kind
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Parses a hex color argument.
pub fn parse_color(hex: &str) -> CliResult<Color> {
    Color::from_hex(hex).map_err(|e| CliError::validation(e.to_string()))
}

/// Reads JSON from a file, or from stdin when the path is `-`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CliError::io(format!("Failed to read stdin: {e}")))?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?
    };

    serde_json::from_str(&content).map_err(|e| {
        CliError::validation(format!("Invalid JSON in {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code(), ExitCode::ValidationError);
        assert_eq!(CliError::io("disk").exit_code(), ExitCode::IoError);
        assert_eq!(CliError::io("disk").to_string(), "disk");
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#FF0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(
            parse_color("red").unwrap_err().exit_code(),
            ExitCode::ValidationError
        );
    }

    #[test]
    fn test_read_json() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        std::fs::write(&good, r#"{"a": 1}"#).unwrap();
        std::fs::write(&bad, "{a:").unwrap();

        let value: serde_json::Value = read_json(&good).unwrap();
        assert_eq!(value["a"], 1);
        assert_eq!(
            read_json::<serde_json::Value>(&bad).unwrap_err().exit_code(),
            ExitCode::ValidationError
        );
        assert_eq!(
            read_json::<serde_json::Value>(&dir.path().join("missing.json"))
                .unwrap_err()
                .exit_code(),
            ExitCode::IoError
        );
    }
}
