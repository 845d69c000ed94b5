use metrics::counter;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel,
};
use std::sync::Arc;
use tracing::warn;

use crate::db::with_transaction;
use crate::errors::{AppError, ServiceError};

pub mod chamado_repository;
pub mod cliente_repository;
pub mod contrato_repository;
pub mod custo_repository;
pub mod faturamento_repository;
pub mod orcamento_repository;
pub mod servico_repository;
pub mod tecnico_repository;

pub use chamado_repository::ChamadoRepository;
pub use cliente_repository::ClienteRepository;
pub use contrato_repository::ContratoRepository;
pub use custo_repository::CustoRepository;
pub use faturamento_repository::FaturamentoRepository;
pub use orcamento_repository::OrcamentoRepository;
pub use servico_repository::ServicoRepository;
pub use tecnico_repository::TecnicoRepository;

/// Repository trait for common database operations
pub trait Repository {
    fn get_db(&self) -> &DatabaseConnection;
}

#[derive(Debug, Clone)]
pub struct BaseRepository {
    db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Inserts a single row in its own transaction and returns it with the
    /// generated id.
    pub async fn insert<A>(
        &self,
        table: &'static str,
        model: A,
    ) -> Result<<A::Entity as EntityTrait>::Model, AppError>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A> + Send + 'static,
    {
        with_transaction(self.get_db(), move |txn| {
            Box::pin(async move { model.insert(txn).await.map_err(|e| write_error(table, e)) })
        })
        .await
    }
}

impl Repository for BaseRepository {
    fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Maps a failed write on `table`, logging integrity violations.
pub(crate) fn write_error(table: &'static str, err: DbErr) -> ServiceError {
    let err = ServiceError::from_db(err);
    if let Some(kind) = err.constraint() {
        warn!(table, constraint = %kind, "Write rejected by constraint");
        counter!(
            "daedalosys_db.constraint_violation",
            1,
            "table" => table,
            "constraint" => kind.to_string()
        );
    }
    err
}
