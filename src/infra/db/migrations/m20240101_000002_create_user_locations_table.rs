//! Migration: Create the user_locations table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserLocations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserLocations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserLocations::UserId).integer().not_null())
                    .col(ColumnDef::new(UserLocations::IpAddress).string_len(45).null())
                    .col(ColumnDef::new(UserLocations::Country).string_len(100).null())
                    .col(ColumnDef::new(UserLocations::State).string_len(100).null())
                    .col(ColumnDef::new(UserLocations::Latitude).double().null())
                    .col(ColumnDef::new(UserLocations::Longitude).double().null())
                    .col(
                        ColumnDef::new(UserLocations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_locations_user_id")
                            .from(UserLocations::Table, UserLocations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_locations_user_id")
                    .table(UserLocations::Table)
                    .col(UserLocations::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserLocations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserLocations {
    Table,
    Id,
    UserId,
    IpAddress,
    Country,
    State,
    Latitude,
    Longitude,
    CreatedAt,
}
