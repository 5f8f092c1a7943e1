//! Request extractors that report rejections with the API's JSON error bodies.
//!
//! The stock axum extractors reply with plain text. These wrappers convert the
//! rejections into [Error] so that every response from the API is JSON.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
};

use crate::Error;

/// A JSON request body.
///
/// Bodies that are not JSON are rejected with [Error::BadRequest]. JSON with
/// the wrong shape is rejected with [Error::InvalidBody].
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(request, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection.into()),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(error) => Error::InvalidBody(error.body_text()),
            rejection => Error::BadRequest(rejection.body_text()),
        }
    }
}

/// A path parameter.
///
/// A segment that does not parse as the expected type, e.g. a letter where an
/// ID should be, cannot name a resource, so it is rejected with [Error::NotFound].
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("Rejected path parameter: {}", rejection.body_text());
                Err(Error::NotFound)
            }
        }
    }
}
