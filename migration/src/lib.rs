pub use sea_orm_migration::prelude::*;

mod m20141101_000001_create_user_table;
mod m20141101_000002_create_friendship_table;
mod m20141101_000003_create_invitation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20141101_000001_create_user_table::Migration),
            Box::new(m20141101_000002_create_friendship_table::Migration),
            Box::new(m20141101_000003_create_invitation_table::Migration),
        ]
    }
}
