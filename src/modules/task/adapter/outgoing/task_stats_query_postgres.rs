use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, Statement};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::stats::{
    CategoryCount, DailyCompletions, StatsSnapshot, STREAK_WINDOW_DAYS, UPCOMING_DAYS,
};
use crate::modules::task::application::ports::outgoing::{TaskStatsQuery, TaskStatsQueryError};

#[derive(Debug, Default, FromQueryResult)]
struct SummaryRow {
    total: i64,
    completed: i64,
    pending: i64,
    high: i64,
    medium: i64,
    low: i64,
    today_total: i64,
    today_completed: i64,
    upcoming: i64,
    overdue: i64,
}

#[derive(Debug, FromQueryResult)]
struct CategoryRow {
    category: String,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct DayRow {
    day: NaiveDate,
    count: i64,
}

/// Three aggregate reads per snapshot; all day boundaries are UTC midnight.
#[derive(Clone)]
pub struct TaskStatsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TaskStatsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskStatsQuery for TaskStatsQueryPostgres {
    async fn snapshot(
        &self,
        owner: UserId,
        today: NaiveDate,
    ) -> Result<StatsSnapshot, TaskStatsQueryError> {
        let today_start = start_of(today);
        let tomorrow_start = today_start + Duration::days(1);
        let upcoming_end = today_start + Duration::days(UPCOMING_DAYS as i64 + 1);
        let streak_start = today_start - Duration::days(STREAK_WINDOW_DAYS as i64);

        let summary = SummaryRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE done) AS completed,
                COUNT(*) FILTER (WHERE NOT done) AS pending,
                COUNT(*) FILTER (WHERE priority = 'high') AS high,
                COUNT(*) FILTER (WHERE priority = 'medium') AS medium,
                COUNT(*) FILTER (WHERE priority = 'low') AS low,
                COUNT(*) FILTER (WHERE created_at >= $2 AND created_at < $3) AS today_total,
                COUNT(*) FILTER (WHERE created_at >= $2 AND created_at < $3 AND done) AS today_completed,
                COUNT(*) FILTER (WHERE NOT done AND due_date >= $2 AND due_date < $4) AS upcoming,
                COUNT(*) FILTER (WHERE NOT done AND due_date < $2) AS overdue
            FROM tasks
            WHERE user_id = $1
            "#,
            [
                owner.value().into(),
                today_start.into(),
                tomorrow_start.into(),
                upcoming_end.into(),
            ],
        ))
        .one(&*self.db)
        .await
        .map_err(map_db_err)?
        .unwrap_or_default();

        let categories = CategoryRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT category, COUNT(*) AS count
            FROM tasks
            WHERE user_id = $1
            GROUP BY category
            ORDER BY count DESC, category ASC
            "#,
            [owner.value().into()],
        ))
        .all(&*self.db)
        .await
        .map_err(map_db_err)?;

        let days = DayRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT (completed_at AT TIME ZONE 'UTC')::date AS day, COUNT(*) AS count
            FROM tasks
            WHERE user_id = $1 AND done AND completed_at >= $2
            GROUP BY day
            ORDER BY day
            "#,
            [owner.value().into(), streak_start.into()],
        ))
        .all(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(StatsSnapshot {
            total: summary.total,
            completed: summary.completed,
            pending: summary.pending,
            high: summary.high,
            medium: summary.medium,
            low: summary.low,
            today_total: summary.today_total,
            today_completed: summary.today_completed,
            upcoming: summary.upcoming,
            overdue: summary.overdue,
            categories: categories
                .into_iter()
                .map(|row| CategoryCount {
                    category: row.category,
                    count: row.count,
                })
                .collect(),
            daily_completions: days
                .into_iter()
                .map(|row| DailyCompletions {
                    date: row.day,
                    count: row.count,
                })
                .collect(),
        })
    }
}

fn start_of(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

fn map_db_err(e: DbErr) -> TaskStatsQueryError {
    TaskStatsQueryError::DatabaseError(e.to_string())
}
