use std::error::Error;

/// Error type for drone_discord_notify operations
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Webhook delivery failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl NotifyError {
    /// This error followed by every underlying cause, e.g. the refused connection.
    pub fn chain(&self) -> String {
        format_chain(self)
    }
}

/// Joins an error and its `source()` chain with `": "`.
/// Causes whose text is already part of the line are skipped.
pub fn format_chain(err: &dyn Error) -> String {
    let mut line = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !line.contains(&text) {
            line.push_str(": ");
            line.push_str(&text);
        }
        source = cause.source();
    }
    line
}

/// Helper type for Results that use NotifyError
pub type Result<T> = std::result::Result<T, NotifyError>;
