use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::entities::contrato::{ActiveModel as ContratoActiveModel, Entity as Contrato, Model as ContratoModel};
use crate::errors::AppError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Repository for contract operations
#[derive(Debug, Clone)]
pub struct ContratoRepository {
    base: BaseRepository,
}

impl ContratoRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, contrato: ContratoActiveModel) -> Result<ContratoModel, AppError> {
        self.base.insert("contratos", contrato).await
    }

    /// Find a contract by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ContratoModel>, AppError> {
        Ok(Contrato::find_by_id(id).one(self.get_db()).await?)
    }
}

impl Repository for ContratoRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
