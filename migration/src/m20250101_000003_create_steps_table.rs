use sea_orm_migration::prelude::*;

use crate::m20250101_000002_create_tasks_table::Tasks;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(steps_table()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_steps_task_id")
                    .table(Steps::Table)
                    .col(Steps::TaskId)
                    .col(Steps::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Steps::Table).to_owned())
            .await
    }
}

fn steps_table() -> TableCreateStatement {
    Table::create()
        .table(Steps::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Steps::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Steps::TaskId).integer().not_null())
        .col(ColumnDef::new(Steps::Content).text().not_null())
        .col(
            ColumnDef::new(Steps::Completed)
                .boolean()
                .not_null()
                .default(false),
        )
        // Steps never outlive their task
        .foreign_key(
            ForeignKey::create()
                .name("fk_steps_task")
                .from(Steps::Table, Steps::TaskId)
                .to(Tasks::Table, Tasks::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Steps {
    Table,
    Id,
    TaskId,
    Content,
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_deleted_with_their_task() {
        let sql = steps_table().to_string(PostgresQueryBuilder);

        assert!(sql.contains(r#"REFERENCES "tasks""#));
        assert!(sql.contains("ON DELETE CASCADE"));
    }
}
