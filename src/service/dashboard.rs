//! Admin dashboard reporting. Read-only.

use crate::catalog::ExhibitionKind;
use crate::error::AppError;
use crate::models::{DashboardCounts, DashboardSummary, RecentExhibition};
use chrono::Utc;
use sqlx::SqlitePool;

const COUNTS_SQL: &str = r#"
SELECT
    (SELECT COUNT(*) FROM "exhibitions" WHERE "category" != ?1) AS "exhibitions",
    (SELECT COUNT(*) FROM "exhibitions" WHERE "category" = ?1) AS "events",
    (SELECT COUNT(*) FROM "artifacts") AS "artifacts",
    (SELECT COUNT(*) FROM "users") AS "users"
"#;

const RECENT_SQL: &str = r#"
SELECT "id", "exhibit_name", "location", "start_date", "end_date", "description"
FROM "exhibitions"
WHERE "category" != ?1
ORDER BY "id" DESC
LIMIT ?2
"#;

pub const RECENT_LIMIT: i64 = 5;

pub struct DashboardService;

impl DashboardService {
    pub async fn summary(pool: &SqlitePool) -> Result<DashboardSummary, AppError> {
        let event = ExhibitionKind::EVENT_CATEGORY;
        let counts = sqlx::query_as::<_, DashboardCounts>(COUNTS_SQL)
            .bind(event)
            .fetch_one(pool)
            .await?;
        let recent_exhibitions = sqlx::query_as::<_, RecentExhibition>(RECENT_SQL)
            .bind(event)
            .bind(RECENT_LIMIT)
            .fetch_all(pool)
            .await?;
        Ok(DashboardSummary {
            counts,
            recent_exhibitions,
            generated_at: Utc::now(),
        })
    }
}
