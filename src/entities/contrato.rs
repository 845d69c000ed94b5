use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::MONEY;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contratos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_cliente: i32,
    pub tipo_contrato: i32,
    pub data_inicio: Date,
    pub data_fim: Option<Date>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub valor: Decimal,
    pub status_contrato: i32,
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
    #[sea_orm(has_many = "super::chamado::Entity")]
    Chamados,
    #[sea_orm(has_many = "super::faturamento::Entity")]
    Faturamentos,
}

impl Related<super::cliente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cliente.def()
    }
}

impl Related<super::chamado::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chamados.def()
    }
}

impl Related<super::faturamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faturamentos.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;
        active_model.valor = MONEY.normalize("contratos.valor", active_model.valor)?;
        Ok(active_model)
    }
}
