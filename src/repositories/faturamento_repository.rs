use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::entities::faturamento::{ActiveModel as FaturamentoActiveModel, Entity as Faturamento, Model as FaturamentoModel};
use crate::errors::AppError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Repository for invoice operations
#[derive(Debug, Clone)]
pub struct FaturamentoRepository {
    base: BaseRepository,
}

impl FaturamentoRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Issue an invoice. The referenced quote and contract are not checked
    /// against the invoice's client.
    pub async fn create(&self, faturamento: FaturamentoActiveModel) -> Result<FaturamentoModel, AppError> {
        self.base.insert("faturamentos", faturamento).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<FaturamentoModel>, AppError> {
        Ok(Faturamento::find_by_id(id).one(self.get_db()).await?)
    }
}

impl Repository for FaturamentoRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
