use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_clientes_table::Clientes;
use super::m20250301_000002_create_contratos_table::Contratos;
use super::m20250301_000006_create_orcamento_table::Orcamento;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Faturamentos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Faturamentos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Faturamentos::IdOrcamento).integer().null())
                    .col(ColumnDef::new(Faturamentos::IdCliente).integer().not_null())
                    .col(ColumnDef::new(Faturamentos::IdContrato).integer().null())
                    .col(
                        ColumnDef::new(Faturamentos::DataEmissao)
                            .date()
                            .not_null()
                            .default(Expr::current_date()),
                    )
                    .col(ColumnDef::new(Faturamentos::DataVencimento).date().not_null())
                    .col(
                        ColumnDef::new(Faturamentos::ValorTotal)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Faturamentos::Status).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_faturamentos_id_orcamento")
                            .from(Faturamentos::Table, Faturamentos::IdOrcamento)
                            .to(Orcamento::Table, Orcamento::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_faturamentos_id_cliente")
                            .from(Faturamentos::Table, Faturamentos::IdCliente)
                            .to(Clientes::Table, Clientes::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_faturamentos_id_contrato")
                            .from(Faturamentos::Table, Faturamentos::IdContrato)
                            .to(Contratos::Table, Contratos::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_faturamentos_id_orcamento", Faturamentos::IdOrcamento),
            ("idx_faturamentos_id_cliente", Faturamentos::IdCliente),
            ("idx_faturamentos_id_contrato", Faturamentos::IdContrato),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Faturamentos::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Faturamentos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Faturamentos {
    Table,
    Id,
    IdOrcamento,
    IdCliente,
    IdContrato,
    DataEmissao,
    DataVencimento,
    ValorTotal,
    Status,
}
