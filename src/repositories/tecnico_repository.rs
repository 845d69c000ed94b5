use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::entities::tecnico::{
    ActiveModel as TecnicoActiveModel, Column, Entity as Tecnico, Model as TecnicoModel,
};
use crate::errors::AppError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Repository for technician operations
#[derive(Debug, Clone)]
pub struct TecnicoRepository {
    base: BaseRepository,
}

impl TecnicoRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new technician; `cpf` and `email` must both be unused
    pub async fn create(&self, tecnico: TecnicoActiveModel) -> Result<TecnicoModel, AppError> {
        self.base.insert("tecnicos", tecnico).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<TecnicoModel>, AppError> {
        Ok(Tecnico::find_by_id(id).one(self.get_db()).await?)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<TecnicoModel>, AppError> {
        Ok(Tecnico::find()
            .filter(Column::Email.eq(email))
            .one(self.get_db())
            .await?)
    }
}

impl Repository for TecnicoRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
