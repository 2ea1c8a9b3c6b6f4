//! Admin dashboard report types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Headline counts. `events` counts category exactly "Event"; `exhibitions` counts every other row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, FromRow)]
pub struct DashboardCounts {
    pub exhibitions: i64,
    pub events: i64,
    pub artifacts: i64,
    pub users: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct RecentExhibition {
    pub id: i64,
    pub exhibit_name: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct DashboardSummary {
    pub counts: DashboardCounts,
    pub recent_exhibitions: Vec<RecentExhibition>,
    pub generated_at: DateTime<Utc>,
}

impl DashboardSummary {
    /// What the dashboard shows when the store cannot be read.
    pub fn empty() -> Self {
        DashboardSummary {
            counts: DashboardCounts::default(),
            recent_exhibitions: Vec::new(),
            generated_at: Utc::now(),
        }
    }
}
