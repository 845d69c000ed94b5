use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tecnicos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tecnicos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tecnicos::Nome).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Tecnicos::Cpf)
                            .string_len(14)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Tecnicos::Email)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Tecnicos::Cargo).string_len(50).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tecnicos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tecnicos {
    Table,
    Id,
    Nome,
    Cpf,
    Email,
    Cargo,
}
