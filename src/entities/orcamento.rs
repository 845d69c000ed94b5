use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::MONEY;

/// Priced proposal for a client, made of line items.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orcamento")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_cliente: i32,
    pub data: Date,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub valor_total: Decimal,
    pub status: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cliente::Entity",
        from = "Column::IdCliente",
        to = "super::cliente::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Cliente,
    #[sea_orm(has_many = "super::orcamento_item::Entity")]
    Itens,
    #[sea_orm(has_many = "super::faturamento::Entity")]
    Faturamentos,
}

impl Related<super::cliente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cliente.def()
    }
}

impl Related<super::orcamento_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Itens.def()
    }
}

impl Related<super::faturamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faturamentos.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;
        active_model.data = super::default_today(active_model.data, insert);
        active_model.valor_total =
            MONEY.normalize("orcamento.valor_total", active_model.valor_total)?;
        Ok(active_model)
    }
}
