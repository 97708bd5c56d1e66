// src/application/error_handling.rs
//
// Swallow-and-Report Error Handling for Commands
//
// ARCHITECTURE:
// - No error ever crosses the channel boundary as an error
// - Each command has a defined fallback value (false, null, empty list)
// - Every swallowed failure is logged with the method name and a category
// - Logging is best-effort and never itself a source of failure

use log::error;
use serde_json::Value;

use crate::application::dto::MethodResult;
use crate::error::AppError;

/// Error categories for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required structured fields absent or malformed
    InvalidArgument,

    /// UI-tree attach/detach fault
    ViewHost,

    /// Anything else unexpected during a well-formed call
    Internal,
}

impl ErrorKind {
    pub fn of(error: &AppError) -> Self {
        match error {
            AppError::Domain(_) => ErrorKind::InvalidArgument,
            AppError::Host(_) => ErrorKind::ViewHost,
            AppError::Serialization(_) | AppError::Other(_) => ErrorKind::Internal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::ViewHost => "view_host",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Convert a handler result into the command's channel value.
///
/// Success maps through `on_ok`; failure is logged and becomes `fallback`.
pub fn swallow<T>(
    method: &str,
    result: Result<T, AppError>,
    on_ok: impl FnOnce(T) -> Value,
    fallback: Value,
) -> MethodResult {
    match result {
        Ok(value) => MethodResult::ok(on_ok(value)),
        Err(e) => {
            error!("{} failed ({}): {}", method, ErrorKind::of(&e).as_str(), e);
            MethodResult::ok(fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_passes_through() {
        let result: Result<&str, AppError> = Ok("video_path.mp4");
        let response = swallow("stopRecording", result, |v| json!(v), Value::Null);
        assert_eq!(response, MethodResult::ok(json!("video_path.mp4")));
    }

    #[test]
    fn test_failure_becomes_fallback() {
        let result: Result<(), AppError> = Err(AppError::Other("boom".to_string()));
        let response = swallow("startRecording", result, |_| json!(true), json!(false));
        assert_eq!(response, MethodResult::ok(json!(false)));
    }

    #[test]
    fn test_error_kind_categories() {
        let domain: AppError = crate::domain::DomainError::MissingField("scale").into();
        assert_eq!(ErrorKind::of(&domain), ErrorKind::InvalidArgument);

        let host = AppError::Host("detach failed".to_string());
        assert_eq!(ErrorKind::of(&host), ErrorKind::ViewHost);

        let other = AppError::Other("boom".to_string());
        assert_eq!(ErrorKind::of(&other), ErrorKind::Internal);
    }
}
