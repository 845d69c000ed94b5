use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_clientes_table::Clientes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // id_cliente is nullable: general costs are not tied to a client.
        manager
            .create_table(
                Table::create()
                    .table(Custos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Custos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Custos::IdCliente).integer().null())
                    .col(ColumnDef::new(Custos::Descricao).string_len(200).not_null())
                    .col(ColumnDef::new(Custos::Valor).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(Custos::Tipo).integer().not_null())
                    .col(
                        ColumnDef::new(Custos::Data)
                            .date()
                            .not_null()
                            .default(Expr::current_date()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_custos_id_cliente")
                            .from(Custos::Table, Custos::IdCliente)
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
                    .name("idx_custos_id_cliente")
                    .table(Custos::Table)
                    .col(Custos::IdCliente)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Custos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Custos {
    Table,
    Id,
    IdCliente,
    Descricao,
    Valor,
    Tipo,
    Data,
}
