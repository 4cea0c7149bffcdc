use crate::infra::{deserialize_date, AppState, InMemoryRuleStore};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use leave_planner::workflows::vacation::{
    conformance_router, DateSpan, DepartmentId, GroupDirectory, ManagerId, PositionDirectory,
    RuleId, RuleKind, RuleScope, RuleStore, ScheduleConformanceService, VacationRule,
};
use std::sync::Arc;

/// Request body for staging a rule against the running service.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateRuleRequest {
    pub(crate) rule_id: String,
    pub(crate) kind: RuleKind,
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) window_start: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) window_end: NaiveDate,
    #[serde(default)]
    pub(crate) description: String,
    pub(crate) manager_id: String,
    pub(crate) department_id: String,
    pub(crate) scope: RuleScope,
}

impl CreateRuleRequest {
    fn into_rule(self) -> VacationRule {
        VacationRule {
            id: RuleId(self.rule_id),
            kind: self.kind,
            window: DateSpan::new(self.window_start, self.window_end),
            description: self.description,
            scope: self.scope,
            manager: ManagerId(self.manager_id),
            department: DepartmentId(self.department_id),
        }
    }
}

pub(crate) fn with_conformance_routes<R, G, P>(
    service: Arc<ScheduleConformanceService<R, G, P>>,
) -> axum::Router
where
    R: RuleStore + 'static,
    G: GroupDirectory + 'static,
    P: PositionDirectory + 'static,
{
    conformance_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/vacation/rules",
            axum::routing::get(list_rules).post(create_rule),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn list_rules(
    Extension(store): Extension<InMemoryRuleStore>,
) -> Json<Vec<VacationRule>> {
    Json(store.all())
}

pub(crate) async fn create_rule(
    Extension(store): Extension<InMemoryRuleStore>,
    Json(request): Json<CreateRuleRequest>,
) -> impl IntoResponse {
    let rule = request.into_rule();
    let payload = json!({
        "rule_id": rule.id.0,
        "kind": rule.kind.label(),
    });
    store.push(rule);
    (StatusCode::CREATED, Json(payload))
}
