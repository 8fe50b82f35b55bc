pub use sea_orm_migration::prelude::*;

pub mod entities;
mod m20241105_000001_shortcuts;
mod m20241105_000002_query_logs;
mod m20241105_000003_settings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241105_000001_shortcuts::Migration),
            Box::new(m20241105_000002_query_logs::Migration),
            Box::new(m20241105_000003_settings::Migration),
        ]
    }
}
