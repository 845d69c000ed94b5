use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_clientes_table::Clientes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contratos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contratos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contratos::IdCliente).integer().not_null())
                    .col(ColumnDef::new(Contratos::TipoContrato).integer().not_null())
                    .col(ColumnDef::new(Contratos::DataInicio).date().not_null())
                    .col(ColumnDef::new(Contratos::DataFim).date().null())
                    .col(ColumnDef::new(Contratos::Valor).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(Contratos::StatusContrato).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contratos_id_cliente")
                            .from(Contratos::Table, Contratos::IdCliente)
                            .to(Clientes::Table, Clientes::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contratos_id_cliente")
                    .table(Contratos::Table)
                    .col(Contratos::IdCliente)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contratos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Contratos {
    Table,
    Id,
    IdCliente,
    TipoContrato,
    DataInicio,
    DataFim,
    Valor,
    StatusContrato,
}
