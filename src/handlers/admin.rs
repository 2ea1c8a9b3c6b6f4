//! Admin dashboard.

use crate::extractors::AdminSession;
use crate::models::DashboardSummary;
use crate::response::render;
use crate::service::DashboardService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
pub struct DashboardPage {
    pub admin_email: String,
    #[serde(flatten)]
    pub summary: DashboardSummary,
}

/// Counts and recent exhibitions. A store failure renders zeros rather than an error page.
pub async fn dashboard(admin: AdminSession, State(state): State<AppState>) -> impl IntoResponse {
    let summary = match DashboardService::summary(&state.pool).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "dashboard query failed");
            DashboardSummary::empty()
        }
    };
    render(
        "adminDashboard",
        DashboardPage {
            admin_email: admin.email,
            summary,
        },
    )
}
