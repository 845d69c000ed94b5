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
                    .table(Orcamento::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orcamento::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orcamento::IdCliente).integer().not_null())
                    .col(
                        ColumnDef::new(Orcamento::Data)
                            .date()
                            .not_null()
                            .default(Expr::current_date()),
                    )
                    .col(
                        ColumnDef::new(Orcamento::ValorTotal)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Orcamento::Status).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orcamento_id_cliente")
                            .from(Orcamento::Table, Orcamento::IdCliente)
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
                    .name("idx_orcamento_id_cliente")
                    .table(Orcamento::Table)
                    .col(Orcamento::IdCliente)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orcamento::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orcamento {
    Table,
    Id,
    IdCliente,
    Data,
    ValorTotal,
    Status,
}
