use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QueryLog::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QueryLog::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(QueryLog::RawQuery).text().not_null())
                    .col(
                        ColumnDef::new(QueryLog::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 历史记录按时间倒序展示
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_query_logs_created_at")
                    .table(QueryLog::Table)
                    .col(QueryLog::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_query_logs_created_at")
                    .table(QueryLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(QueryLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum QueryLog {
    #[sea_orm(iden = "query_logs")]
    Table,
    Id,
    RawQuery,
    CreatedAt,
}
