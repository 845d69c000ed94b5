use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Catalog table, intentionally unlinked.
        manager
            .create_table(
                Table::create()
                    .table(Servicos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Servicos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Servicos::Descricao).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Servicos::PrecoUnitario)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Servicos::CustoBase).decimal_len(10, 2).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Servicos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Servicos {
    Table,
    Id,
    Descricao,
    PrecoUnitario,
    CustoBase,
}
