use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::entities::cliente::{
    ActiveModel as ClienteActiveModel, Column, Entity as Cliente, Model as ClienteModel,
};
use crate::errors::AppError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Repository for client operations
#[derive(Debug, Clone)]
pub struct ClienteRepository {
    base: BaseRepository,
}

impl ClienteRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new client. A repeated `cnpj_cpf` is a unique violation.
    pub async fn create(&self, cliente: ClienteActiveModel) -> Result<ClienteModel, AppError> {
        self.base.insert("clientes", cliente).await
    }

    /// Find a client by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ClienteModel>, AppError> {
        Ok(Cliente::find_by_id(id).one(self.get_db()).await?)
    }

    /// Find a client by tax document
    pub async fn find_by_cnpj_cpf(&self, cnpj_cpf: &str) -> Result<Option<ClienteModel>, AppError> {
        Ok(Cliente::find()
            .filter(Column::CnpjCpf.eq(cnpj_cpf))
            .one(self.get_db())
            .await?)
    }
}

impl Repository for ClienteRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
