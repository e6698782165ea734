use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::task::application::domain::filter::{PageRequest, TaskFilter, TaskPage};
use crate::modules::task::application::ports::incoming::use_cases::{
    FilterTasksError, FilterTasksUseCase,
};
use crate::modules::task::application::ports::outgoing::TaskQuery;

pub struct FilterTasksService<Q>
where
    Q: TaskQuery,
{
    query: Q,
}

impl<Q> FilterTasksService<Q>
where
    Q: TaskQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FilterTasksUseCase for FilterTasksService<Q>
where
    Q: TaskQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        filter: TaskFilter,
        page: PageRequest,
    ) -> Result<TaskPage, FilterTasksError> {
        self.query
            .filter(owner, filter, page)
            .await
            .map_err(FilterTasksError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::task::application::domain::filter::{StatusFilter, TaskSortField};
    use crate::modules::task::application::ports::outgoing::TaskQueryError;
    use crate::tests::support::task_fixtures::{sample_task, MockTaskQuery};

    #[tokio::test]
    async fn test_forwards_filter_and_page() {
        let mut query = MockTaskQuery::new();
        query
            .expect_filter()
            .withf(|owner, filter, page| {
                owner.value() == 3
                    && filter.status == StatusFilter::Pending
                    && filter.sort_by == TaskSortField::Priority
                    && page.page == 2
            })
            .returning(|owner, _, page| {
                Ok(TaskPage::new(vec![sample_task(1, owner.value())], 21, page))
            });

        let service = FilterTasksService::new(query);
        let filter = TaskFilter {
            status: StatusFilter::Pending,
            sort_by: TaskSortField::Priority,
            ..Default::default()
        };
        let page = service
            .execute(UserId::from(3), filter, PageRequest::new(Some(2), Some(20)))
            .await
            .unwrap();

        assert_eq!(page.total, 21);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_query_failure() {
        let mut query = MockTaskQuery::new();
        query
            .expect_filter()
            .returning(|_, _, _| Err(TaskQueryError::DatabaseError("timeout".into())));

        let service = FilterTasksService::new(query);
        let result = service
            .execute(UserId::from(3), TaskFilter::default(), PageRequest::default())
            .await;

        assert!(matches!(result, Err(FilterTasksError::QueryFailed(_))));
    }
}
