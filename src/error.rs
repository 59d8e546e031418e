use std::path::PathBuf;

use thiserror::Error;

use crate::platform::PlatformVersion;

pub type Result<T> = std::result::Result<T, ShellError>;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("unsupported platform {found}, requires {required} or later")]
    UnsupportedPlatform {
        found: PlatformVersion,
        required: PlatformVersion,
    },

    #[error("failed to read the platform version: {0}")]
    PlatformProbe(#[source] std::io::Error),

    #[error("failed to create user data directory {}: {source}", path.display())]
    DataDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid start url {url}: {source}")]
    InvalidStartUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("webview engine error: {0}")]
    Engine(#[from] tauri::Error),
}

impl ShellError {
    pub fn is_unsupported_platform(&self) -> bool {
        matches!(self, ShellError::UnsupportedPlatform { .. })
    }

    /// Full detail for the fatal dialog: the error followed by its source chain.
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !detail.contains(&cause_text) {
                detail.push_str("\n  caused by: ");
                detail.push_str(&cause_text);
            }
            source = cause.source();
        }
        detail
    }
}
