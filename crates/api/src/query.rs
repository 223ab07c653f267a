//! Query string extraction for the flight endpoints.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::state::AppState;

/// Query parameters decoded into `T`, keeping the first value of a repeated
/// key (`?query=mumbai&query=delhi` reads as `query=mumbai`).
///
/// Rejections are reported as JSON `BAD_REQUEST` bodies rather than axum's
/// plain-text ones.
#[derive(Debug, Clone)]
pub struct FirstValueQuery<T>(pub T);

impl<T> FromRequestParts<AppState> for FirstValueQuery<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let mut first = Map::new();
        for (key, value) in pairs {
            first.entry(key).or_insert(Value::String(value));
        }

        serde_json::from_value(Value::Object(first))
            .map(FirstValueQuery)
            .map_err(|e| AppError::BadRequest(format!("Invalid query string: {e}")))
    }
}
