//! Request body extractor for the lobby endpoints.
//!
//! Existing clients post either JSON or urlencoded forms. A body with any
//! other content type (or none) is read as an empty request, so the handler
//! reports the missing field instead of rejecting the body.

use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use super::http::ApiError;

/// A request body decoded from JSON or a urlencoded form.
#[derive(Debug, Clone)]
pub struct LobbyBody<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyFormat {
    Json,
    Form,
    Unsupported,
}

fn body_format(request: &Request) -> BodyFormat {
    let Some(content_type) = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return BodyFormat::Unsupported;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if mime == "application/json" || mime.ends_with("+json") {
        BodyFormat::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyFormat::Form
    } else {
        BodyFormat::Unsupported
    }
}

impl<S, T> FromRequest<S> for LobbyBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_format(&request) {
            BodyFormat::Json => {
                let Json(body) = Json::<T>::from_request(request, state).await?;
                Ok(LobbyBody(body))
            }
            BodyFormat::Form => {
                let Form(body) = Form::<T>::from_request(request, state).await?;
                Ok(LobbyBody(body))
            }
            BodyFormat::Unsupported => {
                tracing::debug!("Request body has no supported content type, reading it as empty");
                Ok(LobbyBody(T::default()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(content_type: Option<&str>) -> Request {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn content_type_picks_the_decoder() {
        assert_eq!(body_format(&request(Some("application/json"))), BodyFormat::Json);
        assert_eq!(
            body_format(&request(Some("Application/JSON; charset=utf-8"))),
            BodyFormat::Json
        );
        assert_eq!(
            body_format(&request(Some("application/x-www-form-urlencoded"))),
            BodyFormat::Form
        );
        assert_eq!(body_format(&request(Some("text/plain"))), BodyFormat::Unsupported);
        assert_eq!(body_format(&request(None)), BodyFormat::Unsupported);
    }
}
