use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::error::{Error, StoreError};

const UNAVAILABLE_PAGE: &str = "<!DOCTYPE html><html><body>\
<h1>Service unavailable</h1><p>The quote store cannot be reached right now.</p>\
</body></html>";

const INTERNAL_PAGE: &str = "<!DOCTYPE html><html><body>\
<h1>Something went wrong</h1><p>Please try again later.</p>\
</body></html>";

/// Request failure rendered as a short HTML page.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct HttpError(#[from] Error);

impl HttpError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            Error::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!(status = status.as_u16(), error = %self.0, "Request failed");

        let page = if status == StatusCode::SERVICE_UNAVAILABLE {
            UNAVAILABLE_PAGE
        } else {
            INTERNAL_PAGE
        };
        (status, Html(page)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;

    #[test]
    fn unavailable_store_is_503() {
        let err = HttpError::from(Error::Store(StoreError::Unavailable("down".into())));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn malformed_record_is_500() {
        let err = HttpError::from(Error::Store(StoreError::MalformedRecord {
            id: 3,
            reason: "blank".into(),
        }));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn other_failures_are_500() {
        let err = HttpError::from(Error::Generation(GenerationError::Exhausted { attempts: 3 }));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
