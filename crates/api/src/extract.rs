//! Request extractors that answer with the service's own error bodies.

use axum::extract::path::ErrorKind;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use cosmos_core::error::CoreError;
use cosmos_core::types::DbId;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Like [`axum::Json`], but a missing or wrong content type, malformed JSON,
/// a top-level value other than an object, an unknown key or a mistyped
/// field all reject with [`CoreError::Validation`] instead of axum's
/// plain-text rejections.
///
/// Wrap it in `Result<JsonBody<T>, AppError>` to defer the failure until the
/// handler has done its own lookups.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Derived `Deserialize` would fill a struct from an array by position.
        let Json(object) = Json::<Map<String, Value>>::from_request(req, state)
            .await
            .map_err(|rejection| invalid(rejection.body_text()))?;
        let value = serde_json::from_value(Value::Object(object))
            .map_err(|err| invalid(err.to_string()))?;
        Ok(JsonBody(value))
    }
}

fn invalid(reason: String) -> AppError {
    AppError::Core(CoreError::Validation(reason))
}

/// The `{id}` segment of an entity route.
///
/// Every all-digit segment is accepted. One that does not fit in a [`DbId`]
/// cannot name a stored row and resolves to a 404. Anything else keeps
/// axum's path rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowId {
    Id(DbId),
    OutOfRange,
}

impl RowId {
    pub fn resolve(self, entity: &'static str) -> Result<DbId, AppError> {
        match self {
            RowId::Id(id) => Ok(id),
            RowId::OutOfRange => Err(AppError::IdOutOfRange { entity }),
        }
    }
}

impl<S> FromRequestParts<S> for RowId
where
    S: Send + Sync,
{
    type Rejection = PathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<DbId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(RowId::Id(id)),
            Err(PathRejection::FailedToDeserializePathParams(err)) if is_integer(err.kind()) => {
                Ok(RowId::OutOfRange)
            }
            Err(rejection) => Err(rejection),
        }
    }
}

/// Whether a path parse failure was for a well-formed integer.
fn is_integer(kind: &ErrorKind) -> bool {
    let value = match kind {
        ErrorKind::ParseError { value, .. }
        | ErrorKind::ParseErrorAtKey { value, .. }
        | ErrorKind::ParseErrorAtIndex { value, .. } => value,
        _ => return false,
    };
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
