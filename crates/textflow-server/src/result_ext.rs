//! Logging helpers for `Result` and `Option`.

use std::fmt::Display;
use tracing::error;

/// Extension trait for logging errors with context.
///
/// The log line carries the caller's source location, so `?` chains stay
/// short while failures remain traceable.
pub trait ResultExt<T, E> {
    /// Log the error with context if this is an `Err` variant, then
    /// return the `Result` unchanged.
    ///
    /// ```ignore
    /// use textflow_server::result_ext::ResultExt;
    ///
    /// let sent = client.post(url).send().await.log("LLM completion request")?;
    /// ```
    fn log<S: ToString>(self, context: S) -> Result<T, E>;
}

impl<T, E: Display> ResultExt<T, E> for Result<T, E> {
    #[track_caller]
    fn log<S: ToString>(self, context: S) -> Result<T, E> {
        if let Err(ref e) = self {
            let caller_location = std::panic::Location::caller();
            error!(
                target: "textflow_server",
                error = %e,
                file = %format!("{}:{}", caller_location.file(), caller_location.line()),
                context = %context.to_string(),
                "Operation failed"
            );
        }
        self
    }
}

/// Extension trait for noting lookups that came back empty.
pub trait OptionResultExt<T> {
    /// Log at debug level if this is `None`.
    fn log_none<S: ToString>(self, context: S) -> Option<T>;
}

impl<T> OptionResultExt<T> for Option<T> {
    #[track_caller]
    fn log_none<S: ToString>(self, context: S) -> Option<T> {
        if self.is_none() {
            let caller_location = std::panic::Location::caller();
            tracing::debug!(
                target: "textflow_server",
                file = %format!("{}:{}", caller_location.file(), caller_location.line()),
                context = %context.to_string(),
                "Lookup found nothing"
            );
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_ext_passes_through() {
        let ok: Result<u32, String> = Ok(7);
        assert_eq!(ok.log("parse step count"), Ok(7));

        let err: Result<u32, String> = Err("Invalid step type: FOO".to_string());
        assert_eq!(
            err.log("parse step count").unwrap_err(),
            "Invalid step type: FOO"
        );
    }

    #[test]
    fn test_option_ext_passes_through() {
        assert_eq!(Some("run-1").log_none("find run"), Some("run-1"));
        assert_eq!(None::<&str>.log_none("find run"), None);
    }
}
