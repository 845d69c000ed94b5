use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::MONEY;

/// Expense record. Without `id_cliente` it is a general cost.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "custos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_cliente: Option<i32>,
    pub descricao: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub valor: Decimal,
    pub tipo: i32,
    pub data: Date,
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
}

impl Related<super::cliente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cliente.def()
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
        active_model.valor = MONEY.normalize("custos.valor", active_model.valor)?;
        Ok(active_model)
    }
}
