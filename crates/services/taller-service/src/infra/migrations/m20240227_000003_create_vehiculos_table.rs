//! Migration: customer vehicles, removed together with their owner.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehiculos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Vehiculos::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Vehiculos::Marca).string().not_null())
                    .col(ColumnDef::new(Vehiculos::Modelo).string().not_null())
                    .col(ColumnDef::new(Vehiculos::Color).string().not_null())
                    .col(
                        ColumnDef::new(Vehiculos::Placa)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Vehiculos::Anio).integer().not_null())
                    .col(ColumnDef::new(Vehiculos::Kilometraje).integer().not_null())
                    .col(ColumnDef::new(Vehiculos::ClienteId).uuid().not_null())
                    .col(
                        ColumnDef::new(Vehiculos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vehiculos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehiculos_cliente_id")
                            .from(Vehiculos::Table, Vehiculos::ClienteId)
                            .to(Clientes::Table, Clientes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vehiculos_cliente_id")
                    .table(Vehiculos::Table)
                    .col(Vehiculos::ClienteId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehiculos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Clientes {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Vehiculos {
    Table,
    Id,
    Marca,
    Modelo,
    Color,
    Placa,
    Anio,
    Kilometraje,
    ClienteId,
    CreatedAt,
    UpdatedAt,
}
