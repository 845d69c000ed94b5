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
                    .col(
                        ColumnDef::new(Clientes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Clientes::RazaoSocial).string_len(150).not_null())
                    .col(ColumnDef::new(Clientes::NomeFantasia).string_len(150).null())
                    .col(
                        ColumnDef::new(Clientes::CnpjCpf)
                            .string_len(18)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Clientes::InscricaoEstadual).string_len(20).null())
                    .col(ColumnDef::new(Clientes::Telefone).string_len(20).null())
                    .col(ColumnDef::new(Clientes::Email).string_len(120).null())
                    .col(ColumnDef::new(Clientes::Cep).string_len(9).null())
                    .col(ColumnDef::new(Clientes::Logradouro).string_len(150).null())
                    .col(ColumnDef::new(Clientes::Numero).string_len(10).null())
                    .col(ColumnDef::new(Clientes::Complemento).string_len(100).null())
                    .col(ColumnDef::new(Clientes::Bairro).string_len(100).null())
                    .col(ColumnDef::new(Clientes::Cidade).string_len(100).null())
                    .col(ColumnDef::new(Clientes::Uf).string_len(2).null())
                    .col(ColumnDef::new(Clientes::Responsavel).string_len(100).null())
                    .col(
                        ColumnDef::new(Clientes::DataCadastro)
                            .date()
                            .not_null()
                            .default(Expr::current_date()),
                    )
                    .col(
                        ColumnDef::new(Clientes::Fornecedor)
                            .boolean()
                            .not_null()
                            .default(false),
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
pub enum Clientes {
    Table,
    Id,
    RazaoSocial,
    NomeFantasia,
    CnpjCpf,
    InscricaoEstadual,
    Telefone,
    Email,
    Cep,
    Logradouro,
    Numero,
    Complemento,
    Bairro,
    Cidade,
    Uf,
    Responsavel,
    DataCadastro,
    Fornecedor,
}
