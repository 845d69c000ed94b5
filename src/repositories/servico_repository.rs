use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::entities::servico::{ActiveModel as ServicoActiveModel, Entity as Servico, Model as ServicoModel};
use crate::errors::AppError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Repository for catalog service operations
#[derive(Debug, Clone)]
pub struct ServicoRepository {
    base: BaseRepository,
}

impl ServicoRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, servico: ServicoActiveModel) -> Result<ServicoModel, AppError> {
        self.base.insert("servicos", servico).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ServicoModel>, AppError> {
        Ok(Servico::find_by_id(id).one(self.get_db()).await?)
    }
}

impl Repository for ServicoRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
