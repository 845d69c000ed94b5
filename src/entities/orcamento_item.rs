use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::MONEY;

/// Quote line item. `quantidade` is floating point, the amounts are
/// fixed-point.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orcamento_itens")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_orcamento: i32,
    pub nome: String,
    #[sea_orm(column_type = "Double")]
    pub quantidade: f64,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub valor_unitario: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub valor_total: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orcamento::Entity",
        from = "Column::IdOrcamento",
        to = "super::orcamento::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Orcamento,
}

impl Related<super::orcamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orcamento.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;
        active_model.valor_unitario =
            MONEY.normalize("orcamento_itens.valor_unitario", active_model.valor_unitario)?;
        active_model.valor_total =
            MONEY.normalize("orcamento_itens.valor_total", active_model.valor_total)?;
        Ok(active_model)
    }
}
