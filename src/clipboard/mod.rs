use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;

const WL_COPY_COMMAND: &str = "wl-copy";
const MIME_TEXT_PLAIN_UTF8: &str = "text/plain;charset=utf-8";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to run clipboard command: {command}")]
    CommandIo {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write clipboard payload to {command}")]
    WritePayload {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("{command} exited with non-zero status: {status}")]
    CommandFailed { command: String, status: String },
}

pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

pub trait ClipboardBackend {
    fn copy_text(&self, text: &str) -> ClipboardResult<()>;
}

/// Copies through `wl-copy`, feeding the payload on stdin.
#[derive(Debug, Clone)]
pub struct WlCopyBackend {
    command: String,
}

impl Default for WlCopyBackend {
    fn default() -> Self {
        Self::with_command(WL_COPY_COMMAND)
    }
}

impl WlCopyBackend {
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn io_error(&self, source: io::Error) -> ClipboardError {
        ClipboardError::CommandIo {
            command: self.command.clone(),
            source,
        }
    }
}

impl ClipboardBackend for WlCopyBackend {
    fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        let mut child = Command::new(&self.command)
            .arg("--type")
            .arg(MIME_TEXT_PLAIN_UTF8)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|err| self.io_error(err))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|source| ClipboardError::WritePayload {
                    command: self.command.clone(),
                    source,
                })?;
        }

        let status = child.wait().map_err(|err| self.io_error(err))?;
        if status.success() {
            tracing::debug!(bytes = text.len(), "copied export to clipboard");
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed {
                command: self.command.clone(),
                status: status.to_string(),
            })
        }
    }
}
