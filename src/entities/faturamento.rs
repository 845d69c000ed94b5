use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::MONEY;

/// Billing record. The quote and contract references are optional and are
/// not checked against `id_cliente`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "faturamentos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_orcamento: Option<i32>,
    pub id_cliente: i32,
    pub id_contrato: Option<i32>,
    pub data_emissao: Date,
    pub data_vencimento: Date,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub valor_total: Decimal,
    pub status: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orcamento::Entity",
        from = "Column::IdOrcamento",
        to = "super::orcamento::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Orcamento,
    #[sea_orm(
        belongs_to = "super::cliente::Entity",
        from = "Column::IdCliente",
        to = "super::cliente::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Cliente,
    #[sea_orm(
        belongs_to = "super::contrato::Entity",
        from = "Column::IdContrato",
        to = "super::contrato::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Contrato,
}

impl Related<super::orcamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orcamento.def()
    }
}

impl Related<super::cliente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cliente.def()
    }
}

impl Related<super::contrato::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contrato.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;
        active_model.data_emissao = super::default_today(active_model.data_emissao, insert);
        active_model.valor_total =
            MONEY.normalize("faturamentos.valor_total", active_model.valor_total)?;
        Ok(active_model)
    }
}
