use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::entities::chamado::{
    ActiveModel as ChamadoActiveModel, Column, Entity as Chamado, Model as ChamadoModel,
};
use crate::errors::AppError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Repository for support ticket operations
#[derive(Debug, Clone)]
pub struct ChamadoRepository {
    base: BaseRepository,
}

impl ChamadoRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Open a ticket. Contract and technician may be left empty;
    /// `data_abertura` defaults to now.
    pub async fn create(&self, chamado: ChamadoActiveModel) -> Result<ChamadoModel, AppError> {
        self.base.insert("chamados", chamado).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ChamadoModel>, AppError> {
        Ok(Chamado::find_by_id(id).one(self.get_db()).await?)
    }

    /// Tickets of a client, most recently opened first
    pub async fn find_by_cliente(&self, id_cliente: i32) -> Result<Vec<ChamadoModel>, AppError> {
        Ok(Chamado::find()
            .filter(Column::IdCliente.eq(id_cliente))
            .order_by_desc(Column::DataAbertura)
            .order_by_desc(Column::Id)
            .all(self.get_db())
            .await?)
    }
}

impl Repository for ChamadoRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
