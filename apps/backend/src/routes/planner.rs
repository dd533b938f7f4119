//! Planner endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;
use prepmate_core::{validate_task, week_range};

/// GET /api/planner/week
pub async fn week(
    State(state): State<AppState>,
    Query(query): Query<WeekPlanQuery>,
) -> Result<Json<WeekPlanResponse>> {
    let range = week_range(query.year, query.month, query.week)?;
    let today = state.today();

    let days = range
        .days()
        .into_iter()
        .map(|date| PlannerDay {
            date,
            day_name: date.format("%a").to_string(),
            day_number: chrono::Datelike::day(&date),
            is_today: date == today,
        })
        .collect();

    Ok(Json(WeekPlanResponse {
        year: query.year,
        month: query.month,
        week: query.week,
        week_range: range.label(),
        days,
    }))
}

/// POST /api/planner/tasks/validate
pub async fn validate(Json(task): Json<PlannedTask>) -> Json<TaskValidationResponse> {
    let errors = validate_task(&task).err().unwrap_or_default();

    Json(TaskValidationResponse {
        valid: errors.is_empty(),
        errors,
    })
}
