use axum::http::{header::ALLOW, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Return `404 Not Found`
    #[error("request path not found")]
    NotFound,

    /// Return `405 Method Not Allowed`
    ///
    /// Only `GET` (and the implied `HEAD`) is routed, so this always advertises those two.
    #[error("request method not supported for this path")]
    MethodNotAllowed,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn title(&self) -> String {
        match self {
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
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
        let status = self.status_code();
        let header: HeaderMap = match self {
            Self::MethodNotAllowed => [(ALLOW, HeaderValue::from_static("GET,HEAD"))]
                .into_iter()
                .collect(),
            _ => HeaderMap::new(),
        };

        (status, header, Json(ErrorBody::from(self))).into_response()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_status_and_message() {
        let body = ErrorBody::from(Error::NotFound);

        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({
                "title": "Not Found",
                "status": 404,
                "message": "request path not found",
            })
        );
    }

    #[test]
    fn method_not_allowed_advertises_allowed_methods() {
        let response = Error::MethodNotAllowed.into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[ALLOW], "GET,HEAD");
    }

    #[test]
    fn not_found_has_no_allow_header() {
        let response = Error::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(ALLOW).is_none());
    }
}
