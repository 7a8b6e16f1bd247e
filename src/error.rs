use serenity::http::HttpError;
use thiserror::Error;

/// Discord's JSON error code for "Unknown Message".
pub const UNKNOWN_MESSAGE: isize = 10008;

/// Errors returned by [`Pagination::run`](crate::Pagination::run).
///
/// Everything except [`PaginationError::Platform`] is a configuration error and
/// is raised before any request is made to Discord.
#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("Please provide either interaction or message for the pagination to use")]
    MissingContext,
    #[error("Provide only one of interaction or message for the pagination to use")]
    AmbiguousContext,
    #[error("Missing pages")]
    MissingPages,
    #[error("Missing buttons")]
    MissingButtons,
    #[error("Need provide at least 2 buttons, got {0}")]
    NotEnoughButtons(usize),
    #[error("Timeout of {0}ms is less than 1000ms which is not allowed")]
    TimeoutTooShort(u64),
    #[error("You can only use 1 character to represent the progress bar slider, got {0:?}")]
    InvalidSlider(String),
    #[error("You can only use 1 character to represent the progress bar, got {0:?}")]
    InvalidBar(String),
    #[error("Link buttons are not supported, button {0} is a link")]
    LinkButton(usize),
    #[error("Delete buttons are not supported by ephemeral replies")]
    EphemeralDelete,
    #[error("Auto delete is not supported by ephemeral replies")]
    EphemeralAutoDelete,
    #[error("The message to paginate no longer exists")]
    Gone,
    #[error("Discord request failed: {0}")]
    Platform(#[from] serenity::Error),
}

impl From<SurfaceError> for PaginationError {
    fn from(err: SurfaceError) -> Self {
        match err {
            SurfaceError::Gone => PaginationError::Gone,
            SurfaceError::Platform(e) => PaginationError::Platform(e),
        }
    }
}

/// A failed request made while rendering a page.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The message was deleted, by the delete button or by someone else.
    #[error("message no longer exists")]
    Gone,
    #[error("Discord request failed: {0}")]
    Platform(serenity::Error),
}

impl From<serenity::Error> for SurfaceError {
    fn from(err: serenity::Error) -> Self {
        if is_gone(&err) {
            SurfaceError::Gone
        } else {
            SurfaceError::Platform(err)
        }
    }
}

pub type SurfaceResult<T> = Result<T, SurfaceError>;

impl PaginationError {
    /// Whether the error was raised by validation rather than by Discord.
    pub fn is_config(&self) -> bool {
        !matches!(self, PaginationError::Platform(_))
    }
}

/// Whether a serenity error means the message no longer exists.
pub fn is_gone(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            is_gone_response(response.status_code.as_u16(), response.error.code)
        }
        _ => false,
    }
}

/// Whether a Discord error response with `status` and JSON `code` means the message is gone.
pub fn is_gone_response(status: u16, code: isize) -> bool {
    code == UNKNOWN_MESSAGE || status == 404
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_are_flagged() {
        assert!(PaginationError::MissingPages.is_config());
        assert!(PaginationError::TimeoutTooShort(10).is_config());
        assert!(!PaginationError::Platform(serenity::Error::Other("boom")).is_config());
    }

    #[test]
    fn generic_errors_are_not_gone() {
        assert!(!is_gone(&serenity::Error::Other("boom")));
        assert!(matches!(
            SurfaceError::from(serenity::Error::Other("boom")),
            SurfaceError::Platform(_)
        ));
    }

    #[test]
    fn unknown_message_is_gone() {
        assert!(is_gone_response(404, UNKNOWN_MESSAGE));
        assert!(is_gone_response(400, UNKNOWN_MESSAGE));
        assert!(is_gone_response(404, 0));
    }

    #[test]
    fn other_failures_are_not_gone() {
        assert!(!is_gone_response(403, 50013));
        assert!(!is_gone_response(500, 0));
        assert!(!is_gone_response(429, 0));
    }

    #[test]
    fn surface_errors_keep_their_kind() {
        assert!(matches!(
            PaginationError::from(SurfaceError::Gone),
            PaginationError::Gone
        ));
        assert!(matches!(
            PaginationError::from(SurfaceError::Platform(serenity::Error::Other("boom"))),
            PaginationError::Platform(_)
        ));
    }
}
