use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::stats::TaskStats;
use crate::modules::task::application::ports::incoming::use_cases::{
    GetTaskStatsError, GetTaskStatsUseCase,
};
use crate::modules::task::application::ports::outgoing::TaskStatsQuery;

pub struct GetTaskStatsService<Q>
where
    Q: TaskStatsQuery,
{
    query: Q,
    today: fn() -> NaiveDate,
}

impl<Q> GetTaskStatsService<Q>
where
    Q: TaskStatsQuery,
{
    pub fn new(query: Q) -> Self {
        Self {
            query,
            today: || Utc::now().date_naive(),
        }
    }

    #[cfg(test)]
    fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }
}

#[async_trait]
impl<Q> GetTaskStatsUseCase for GetTaskStatsService<Q>
where
    Q: TaskStatsQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<TaskStats, GetTaskStatsError> {
        let today = (self.today)();
        let snapshot = self.query.snapshot(owner, today).await?;
        Ok(TaskStats::from_snapshot(snapshot, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::task::application::domain::stats::{DailyCompletions, StatsSnapshot};
    use crate::modules::task::application::ports::outgoing::TaskStatsQueryError;
    use crate::tests::support::task_fixtures::MockStatsQuery;

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[tokio::test]
    async fn test_stats_use_reference_day() {
        let mut query = MockStatsQuery::new();
        query
            .expect_snapshot()
            .withf(|_, today| *today == fixed_day())
            .returning(|_, today| {
                Ok(StatsSnapshot {
                    total: 2,
                    completed: 1,
                    pending: 1,
                    daily_completions: vec![DailyCompletions {
                        date: today,
                        count: 1,
                    }],
                    ..Default::default()
                })
            });

        let service = GetTaskStatsService::new(query).with_today(fixed_day);
        let stats = service.execute(UserId::from(1)).await.unwrap();

        assert_eq!(stats.completion_rate, 50.0);
        assert_eq!(stats.weekly.last().map(|d| d.count), Some(1));
        assert_eq!(stats.streak_days, 1);
    }

    #[tokio::test]
    async fn test_stats_query_failure() {
        let mut query = MockStatsQuery::new();
        query
            .expect_snapshot()
            .returning(|_, _| Err(TaskStatsQueryError::DatabaseError("down".into())));

        let service = GetTaskStatsService::new(query);
        let result = service.execute(UserId::from(1)).await;

        assert!(matches!(result, Err(GetTaskStatsError::QueryFailed(_))));
    }
}
