//! Handlers for the agent-facing tool surface under `/mcp`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use flightmcp_core::error::CoreError;
use flightmcp_core::response::ToolResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body of `POST /mcp/execute`.
#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    pub tool_id: String,
    /// Tool arguments; absent or `null` means no arguments.
    #[serde(default)]
    pub parameters: Value,
}

#[derive(Debug, Serialize)]
pub struct ExecuteSuccess {
    pub success: bool,
    pub tool_id: String,
    pub parameters: Value,
    pub result: ToolResult,
}

#[derive(Debug, Serialize)]
pub struct ExecuteFailure {
    pub success: bool,
    pub tool_id: String,
    pub error: String,
}

/// GET /mcp/manifest
pub async fn manifest(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.service.manifest().clone())
}

/// POST /mcp/execute
///
/// Unknown tool ids are rejected with 400 before anything runs. A failure of
/// the invoked operation is reported as `{success: false, ..}` with that
/// operation's own status code.
pub async fn execute(
    State(state): State<AppState>,
    payload: Result<Json<ExecuteRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let parameters = match request.parameters {
        Value::Null => Value::Object(Map::new()),
        other => other,
    };

    match state
        .service
        .execute_tool(&request.tool_id, &parameters)
        .await
    {
        Ok(result) => Ok(Json(ExecuteSuccess {
            success: true,
            tool_id: request.tool_id,
            parameters,
            result,
        })
        .into_response()),
        Err(err @ CoreError::UnknownTool(_)) => {
            tracing::warn!(tool_id = %request.tool_id, "Rejected unknown tool");
            Err(err.into())
        }
        Err(err) => {
            let error = err.to_string();
            let status = AppError::Core(err).status();
            tracing::warn!(tool_id = %request.tool_id, %status, error = %error, "Tool execution failed");
            Ok((
                status,
                Json(ExecuteFailure {
                    success: false,
                    tool_id: request.tool_id,
                    error,
                }),
            )
                .into_response())
        }
    }
}
