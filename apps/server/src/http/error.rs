use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Return `404 Not Found`
    #[error("request path not found")]
    NotFound,

    /// Automatically return `500 Internal Server Error` on an `anyhow::Error`
    ///
    /// Via the generated `From<anyhow::Error> for Error` impl,
    /// this allows using `?` on fallible calls in handler functions without a manual mapping
    /// step.
    ///
    /// The actual error message isn't returned to the client for security reasons.
    /// It should be logged instead
    #[error("an internal server error has occurred")]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> String {
        match self {
            Self::NotFound => "Not Found",
            _ => "Internal Server Error",
        }
        .to_string()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorBody {
    title: String,
    status: u16,
    message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let e = ErrorBody::from(self);
        let status = StatusCode::from_u16(e.status).unwrap();

        (status, Json(e)).into_response()
    }
}

impl From<Error> for ErrorBody {
    fn from(error: Error) -> Self {
        Self {
            title: error.title(),
            message: error.to_string(),
            status: error.status_code().as_u16(),
        }
    }
}
