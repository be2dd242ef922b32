//! Migration: workshop customers.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clientes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Clientes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Clientes::Nombre).string().not_null())
                    .col(
                        ColumnDef::new(Clientes::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Clientes::Telefono).string().not_null())
                    // Canonical form: 8 padded digits plus uppercase letter
                    .col(
                        ColumnDef::new(Clientes::Dni)
                            .string_len(9)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Clientes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Clientes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clientes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Clientes {
    Table,
    Id,
    Nombre,
    Email,
    Telefono,
    Dni,
    CreatedAt,
    UpdatedAt,
}
