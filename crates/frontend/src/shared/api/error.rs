use std::borrow::Cow;

/// Failure of a backend request, already reduced to a user-facing message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Response received with a non-2xx status
    #[error("{}", status_message(.0))]
    Status(u16),
    /// Request was sent but nothing came back (network down, timeout)
    #[error("no response from server, check network")]
    NoResponse,
    /// Request could not be built or dispatched
    #[error("{0}")]
    Request(String),
    /// Body did not match the expected shape
    #[error("{0}")]
    Decode(String),
    /// Detail lookup answered with nothing
    #[error("API returned empty data")]
    EmptyPayload,
}

fn status_message(status: &u16) -> Cow<'static, str> {
    match status {
        400 => "request parameter error".into(),
        401 => "unauthorized, please re-authenticate".into(),
        403 => "access denied".into(),
        404 => "resource not found".into(),
        500 => "internal server error, retry later".into(),
        502 => "gateway error".into(),
        503 => "service under maintenance".into(),
        504 => "gateway timeout".into(),
        other => format!("HTTP error, status {}", other).into(),
    }
}
