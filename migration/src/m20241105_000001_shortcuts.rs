use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 shortcuts 表
        manager
            .create_table(
                Table::create()
                    .table(Shortcut::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Shortcut::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Shortcut::Keyword).string().not_null())
                    .col(ColumnDef::new(Shortcut::KeywordLower).string().not_null())
                    .col(ColumnDef::new(Shortcut::Destination).text().not_null())
                    .col(
                        ColumnDef::new(Shortcut::SingleWord)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Shortcut::VisitCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Shortcut::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Shortcut::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 关键字唯一（大小写不敏感）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_shortcuts_keyword_lower")
                    .table(Shortcut::Table)
                    .col(Shortcut::KeywordLower)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_shortcuts_keyword_lower")
                    .table(Shortcut::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Shortcut::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Shortcut {
    #[sea_orm(iden = "shortcuts")]
    Table,
    Id,
    Keyword,
    KeywordLower,
    Destination,
    SingleWord,
    VisitCount,
    CreatedAt,
    UpdatedAt,
}
