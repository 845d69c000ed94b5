use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::entities::custo::{ActiveModel as CustoActiveModel, Entity as Custo, Model as CustoModel};
use crate::errors::AppError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Repository for cost operations
#[derive(Debug, Clone)]
pub struct CustoRepository {
    base: BaseRepository,
}

impl CustoRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Record a cost. Leave `id_cliente` unset for general costs.
    pub async fn create(&self, custo: CustoActiveModel) -> Result<CustoModel, AppError> {
        self.base.insert("custos", custo).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<CustoModel>, AppError> {
        Ok(Custo::find_by_id(id).one(self.get_db()).await?)
    }
}

impl Repository for CustoRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
