use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Field technician. Tickets may reference one, but need not.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tecnicos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
    #[sea_orm(unique)]
    pub cpf: String,
    #[sea_orm(unique)]
    pub email: String,
    pub cargo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::chamado::Entity")]
    Chamados,
}

impl Related<super::chamado::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chamados.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
