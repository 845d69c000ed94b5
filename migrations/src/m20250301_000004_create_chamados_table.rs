use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_clientes_table::Clientes;
use super::m20250301_000002_create_contratos_table::Contratos;
use super::m20250301_000003_create_tecnicos_table::Tecnicos;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // A ticket's contract is not checked against the ticket's client.
        manager
            .create_table(
                Table::create()
                    .table(Chamados::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Chamados::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Chamados::IdCliente).integer().not_null())
                    .col(ColumnDef::new(Chamados::IdContrato).integer().null())
                    .col(ColumnDef::new(Chamados::IdTecnico).integer().null())
                    .col(ColumnDef::new(Chamados::Titulo).string_len(150).not_null())
                    .col(ColumnDef::new(Chamados::Descricao).text().not_null())
                    .col(ColumnDef::new(Chamados::Prioridade).integer().not_null())
                    .col(ColumnDef::new(Chamados::Status).integer().not_null())
                    .col(
                        ColumnDef::new(Chamados::DataAbertura)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Chamados::DataFechamento)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Chamados::TempoGasto).decimal_len(5, 2).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chamados_id_cliente")
                            .from(Chamados::Table, Chamados::IdCliente)
                            .to(Clientes::Table, Clientes::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chamados_id_contrato")
                            .from(Chamados::Table, Chamados::IdContrato)
                            .to(Contratos::Table, Contratos::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chamados_id_tecnico")
                            .from(Chamados::Table, Chamados::IdTecnico)
                            .to(Tecnicos::Table, Tecnicos::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_chamados_id_cliente", Chamados::IdCliente),
            ("idx_chamados_id_contrato", Chamados::IdContrato),
            ("idx_chamados_id_tecnico", Chamados::IdTecnico),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Chamados::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chamados::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chamados {
    Table,
    Id,
    IdCliente,
    IdContrato,
    IdTecnico,
    Titulo,
    Descricao,
    Prioridade,
    Status,
    DataAbertura,
    DataFechamento,
    TempoGasto,
}
