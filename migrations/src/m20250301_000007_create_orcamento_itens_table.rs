use sea_orm_migration::prelude::*;

use super::m20250301_000006_create_orcamento_table::Orcamento;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrcamentoItens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrcamentoItens::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OrcamentoItens::IdOrcamento).integer().not_null())
                    .col(ColumnDef::new(OrcamentoItens::Nome).string_len(150).not_null())
                    .col(ColumnDef::new(OrcamentoItens::Quantidade).double().not_null())
                    .col(
                        ColumnDef::new(OrcamentoItens::ValorUnitario)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrcamentoItens::ValorTotal)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orcamento_itens_id_orcamento")
                            .from(OrcamentoItens::Table, OrcamentoItens::IdOrcamento)
                            .to(Orcamento::Table, Orcamento::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_orcamento_itens_id_orcamento")
                    .table(OrcamentoItens::Table)
                    .col(OrcamentoItens::IdOrcamento)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrcamentoItens::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrcamentoItens {
    Table,
    Id,
    IdOrcamento,
    Nome,
    Quantidade,
    ValorUnitario,
    ValorTotal,
}
