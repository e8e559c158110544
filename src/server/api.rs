use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    OasGuardError, loader,
    validation::{Invalid, Validator},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub document: Arc<Value>,
    pub validator: Validator,
}

impl AppState {
    pub fn new(document: Value, validator: Validator) -> Self {
        Self {
            document: Arc::new(document),
            validator,
        }
    }
}

/// Response for /api/schemas
#[derive(Debug, Serialize, Deserialize)]
pub struct SchemasResponse {
    pub schemas: Vec<String>,
}

/// Response for /api/validate/{schema}
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub invalids: Vec<Invalid>,
}

/// GET /api/schemas - List component schemas
pub async fn get_schemas(State(state): State<AppState>) -> Json<SchemasResponse> {
    Json(SchemasResponse {
        schemas: loader::component_schemas(&state.document),
    })
}

/// POST /api/validate/{schema} - Validate a JSON body against a component schema
pub async fn validate_body(
    State(state): State<AppState>,
    Path(schema_name): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<ValidationResponse>), (StatusCode, String)> {
    let schema = loader::schema_at(&state.document, &schema_name).map_err(|e| match e {
        OasGuardError::SchemaNotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    let invalids = state
        .validator
        .validate(&body, schema, Some(state.document.as_ref()))
        .map_err(|e| {
            tracing::error!(schema = %schema_name, "schema error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    let status = if invalids.is_empty() {
        StatusCode::OK
    } else {
        tracing::info!(
            schema = %schema_name,
            violations = invalids.len(),
            "rejected request body"
        );
        StatusCode::BAD_REQUEST
    };

    Ok((
        status,
        Json(ValidationResponse {
            valid: invalids.is_empty(),
            invalids,
        }),
    ))
}
