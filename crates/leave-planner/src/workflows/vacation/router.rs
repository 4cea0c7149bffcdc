use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::directory::{GroupDirectory, PositionDirectory, RuleStore};
use super::domain::{DepartmentId, EmployeePlan, ManagerId};
use super::service::{ConformanceCheckError, ScheduleConformanceService};

/// Body of a conformance check request: the proposed plans of a batch of
/// employees, scoped to the manager/department whose rules apply.
#[derive(Debug, Deserialize)]
pub(crate) struct ConformanceCheckRequest {
    pub(crate) manager_id: ManagerId,
    pub(crate) department_id: DepartmentId,
    pub(crate) plans: Vec<EmployeePlan>,
}

/// Router builder exposing the conformance check endpoint.
pub fn conformance_router<R, G, P>(service: Arc<ScheduleConformanceService<R, G, P>>) -> Router
where
    R: RuleStore + 'static,
    G: GroupDirectory + 'static,
    P: PositionDirectory + 'static,
{
    Router::new()
        .route(
            "/api/v1/vacation/conformance-checks",
            post(check_handler::<R, G, P>),
        )
        .with_state(service)
}

pub(crate) async fn check_handler<R, G, P>(
    State(service): State<Arc<ScheduleConformanceService<R, G, P>>>,
    axum::Json(request): axum::Json<ConformanceCheckRequest>,
) -> Response
where
    R: RuleStore + 'static,
    G: GroupDirectory + 'static,
    P: PositionDirectory + 'static,
{
    match service.check_schedule(&request.plans, &request.manager_id, &request.department_id) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        // Never answer "no conflicts" when the check could not run.
        Err(error @ ConformanceCheckError::Rules(_)) => {
            let payload = json!({
                "error": "could not verify schedule",
                "detail": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}
