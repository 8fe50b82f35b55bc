use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "shortcuts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub keyword: String,
    /// 小写形式，唯一索引，用于大小写不敏感的查找
    #[sea_orm(unique)]
    pub keyword_lower: String,
    #[sea_orm(column_type = "Text")]
    pub destination: String,
    pub single_word: bool,
    pub visit_count: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
