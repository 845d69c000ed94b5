use async_trait::async_trait;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use super::TIME_SPENT;

/// Service ticket. `id_contrato` and `id_tecnico` are optional and
/// independent of each other; the contract is not required to belong to
/// the ticket's client.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chamados")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_cliente: i32,
    pub id_contrato: Option<i32>,
    pub id_tecnico: Option<i32>,
    pub titulo: String,
    #[sea_orm(column_type = "Text")]
    pub descricao: String,
    pub prioridade: i32,
    pub status: i32,
    pub data_abertura: DateTimeUtc,
    pub data_fechamento: Option<DateTimeUtc>,
    /// Hours spent, `NUMERIC(5,2)`.
    #[sea_orm(column_type = "Decimal(Some((5, 2)))", nullable)]
    pub tempo_gasto: Option<Decimal>,
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
    #[sea_orm(
        belongs_to = "super::contrato::Entity",
        from = "Column::IdContrato",
        to = "super::contrato::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Contrato,
    #[sea_orm(
        belongs_to = "super::tecnico::Entity",
        from = "Column::IdTecnico",
        to = "super::tecnico::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Tecnico,
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

impl Related<super::tecnico::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tecnico.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;

        if insert {
            if let ActiveValue::NotSet = active_model.data_abertura {
                active_model.data_abertura = Set(Utc::now());
            }
        }

        active_model.tempo_gasto =
            TIME_SPENT.normalize_opt("chamados.tempo_gasto", active_model.tempo_gasto)?;

        Ok(active_model)
    }
}
