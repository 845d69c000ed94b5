use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use crate::db::with_transaction;
use crate::entities::orcamento::{
    ActiveModel as OrcamentoActiveModel, Entity as Orcamento, Model as OrcamentoModel,
};
use crate::entities::orcamento_item::{
    self, ActiveModel as OrcamentoItemActiveModel, Entity as OrcamentoItem,
    Model as OrcamentoItemModel,
};
use crate::errors::{AppError, ServiceError};
use crate::repositories::Repository;

use super::{write_error, BaseRepository};

/// Repository for quote operations
#[derive(Debug, Clone)]
pub struct OrcamentoRepository {
    base: BaseRepository,
}

impl OrcamentoRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a quote without items
    pub async fn create(&self, orcamento: OrcamentoActiveModel) -> Result<OrcamentoModel, AppError> {
        self.base.insert("orcamento", orcamento).await
    }

    /// Find a quote by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<OrcamentoModel>, AppError> {
        Ok(Orcamento::find_by_id(id).one(self.get_db()).await?)
    }

    /// Create a quote together with its line items.
    ///
    /// Each item's `id_orcamento` is overwritten with the new quote's id. If
    /// any row is rejected nothing is stored.
    pub async fn create_with_itens(
        &self,
        orcamento: OrcamentoActiveModel,
        itens: Vec<OrcamentoItemActiveModel>,
    ) -> Result<(OrcamentoModel, Vec<OrcamentoItemModel>), AppError> {
        for item in &itens {
            check_quantidade(item)?;
        }

        with_transaction(self.get_db(), move |txn| {
            Box::pin(async move {
                let orcamento = orcamento
                    .insert(txn)
                    .await
                    .map_err(|e| write_error("orcamento", e))?;

                let mut saved = Vec::with_capacity(itens.len());
                for mut item in itens {
                    item.id_orcamento = Set(orcamento.id);
                    let item = item
                        .insert(txn)
                        .await
                        .map_err(|e| write_error("orcamento_itens", e))?;
                    saved.push(item);
                }

                Ok((orcamento, saved))
            })
        })
        .await
    }

    /// Line items of a quote in insertion order
    pub async fn itens(&self, id_orcamento: i32) -> Result<Vec<OrcamentoItemModel>, AppError> {
        Ok(OrcamentoItem::find()
            .filter(orcamento_item::Column::IdOrcamento.eq(id_orcamento))
            .order_by_asc(orcamento_item::Column::Id)
            .all(self.get_db())
            .await?)
    }
}

impl Repository for OrcamentoRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}

// SQLite stores NaN as NULL.
fn check_quantidade(item: &OrcamentoItemActiveModel) -> Result<(), ServiceError> {
    match item.quantidade.try_as_ref() {
        Some(quantidade) if !quantidade.is_finite() => Err(ServiceError::ValidationError(
            format!("quantidade must be a finite number, got {}", quantidade),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_quantidade_is_rejected() {
        let item = OrcamentoItemActiveModel {
            quantidade: Set(f64::NAN),
            ..Default::default()
        };
        assert!(matches!(
            check_quantidade(&item),
            Err(ServiceError::ValidationError(_))
        ));

        let item = OrcamentoItemActiveModel {
            quantidade: Set(2.5),
            ..Default::default()
        };
        assert!(check_quantidade(&item).is_ok());
    }
}
