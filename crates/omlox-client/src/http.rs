//! Status-code checks shared by every hub operation.
//!
//! Maps a status outside the operation's expected set to the matching
//! [`ClientError`] variant so the request machinery stays focused on
//! transport and decoding.

use reqwest::StatusCode;

use crate::error::{ClientError, StatusError};

/// Check a response status against the statuses the operation expects.
///
/// - **404** → [`ClientError::NotFound`]
/// - **400** → [`ClientError::Invalid`]
/// - anything else unexpected → [`ClientError::Status`]
pub(crate) fn check_status(
    status: StatusCode,
    body: &[u8],
    expected: &[StatusCode],
) -> Result<(), ClientError> {
    if expected.contains(&status) {
        return Ok(());
    }
    let error = StatusError::new(status, body);
    Err(match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(error),
        StatusCode::BAD_REQUEST => ClientError::Invalid(error),
        _ => ClientError::Status(error),
    })
}
