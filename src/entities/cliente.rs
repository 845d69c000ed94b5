use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

/// Customer or supplier. Parent of contracts, tickets, quotes, invoices and
/// client-attributed costs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clientes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub razao_social: String,
    pub nome_fantasia: Option<String>,
    /// CNPJ or CPF, unique across clients.
    #[sea_orm(unique)]
    pub cnpj_cpf: String,
    pub inscricao_estadual: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub uf: Option<String>,
    pub responsavel: Option<String>,
    pub data_cadastro: Date,
    /// Marks the row as a supplier (it may be a customer as well).
    pub fornecedor: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::contrato::Entity")]
    Contratos,
    #[sea_orm(has_many = "super::chamado::Entity")]
    Chamados,
    #[sea_orm(has_many = "super::orcamento::Entity")]
    Orcamentos,
    #[sea_orm(has_many = "super::faturamento::Entity")]
    Faturamentos,
    #[sea_orm(has_many = "super::custo::Entity")]
    Custos,
}

impl Related<super::contrato::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contratos.def()
    }
}

impl Related<super::chamado::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chamados.def()
    }
}

impl Related<super::orcamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orcamentos.def()
    }
}

impl Related<super::faturamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faturamentos.def()
    }
}

impl Related<super::custo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Custos.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;
        active_model.data_cadastro = super::default_today(active_model.data_cadastro, insert);
        if insert && matches!(active_model.fornecedor, ActiveValue::NotSet) {
            active_model.fornecedor = Set(false);
        }
        Ok(active_model)
    }
}
