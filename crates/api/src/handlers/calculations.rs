//! Handlers for the `/calculations` resource.
//!
//! Creation evaluates the expression with the restricted arithmetic
//! evaluator; evaluation failures are recorded on the row, not surfaced as
//! HTTP errors. `result` is server-derived and never client-suppliable
//! (the create DTO simply has no such field).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use starlus_core::calc::validate_expression;
use starlus_core::error::CoreError;
use starlus_core::types::DbId;
use starlus_db::models::calculation::CreateCalculation;
use starlus_db::repositories::CalculationRepo;

use crate::enrich::evaluate_expression;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/calculations
pub async fn list_calculations(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let calculations = CalculationRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: calculations }))
}

/// POST /api/v1/calculations
pub async fn create_calculation(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateCalculation>,
) -> AppResult<impl IntoResponse> {
    validate_expression(&input.expression).map_err(AppError::BadRequest)?;

    let enriched = evaluate_expression(input.expression);
    let calculation = CalculationRepo::create(&state.pool, auth.user_id, &enriched).await?;

    tracing::info!(
        user_id = auth.user_id,
        calculation_id = calculation.id,
        status = %calculation.status,
        "Calculation created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: calculation })))
}

/// GET /api/v1/calculations/{id}
pub async fn get_calculation(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let calculation = CalculationRepo::find_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Calculation",
                id,
            })
        })?;

    Ok(Json(DataResponse { data: calculation }))
}

/// DELETE /api/v1/calculations/{id}
pub async fn delete_calculation(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CalculationRepo::delete_for_user(&state.pool, id, auth.user_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Calculation",
            id,
        }));
    }

    tracing::info!(user_id = auth.user_id, calculation_id = id, "Calculation deleted");

    Ok(StatusCode::NO_CONTENT)
}
