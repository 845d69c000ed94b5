mod common;

use assert_matches::assert_matches;
use common::{new_item, new_orcamento, sqlite_url, TestApp};
use daedalosys::{
    db,
    entities::{cliente, orcamento},
    errors::{ConstraintKind, ServiceError},
};
use migrations::TABLES;
use rust_decimal_macros::dec;
use sea_orm::EntityTrait;
use tempfile::TempDir;

#[tokio::test]
async fn ensure_schema_creates_every_table() {
    let app = TestApp::without_schema().await;
    assert_eq!(db::missing_tables(&app.db()).await.unwrap().len(), TABLES.len());

    db::ensure_schema(&app.db()).await.unwrap();

    assert!(db::missing_tables(&app.db()).await.unwrap().is_empty());
}

#[tokio::test]
async fn ensure_schema_twice_keeps_existing_rows() {
    let app = TestApp::new().await;
    let cliente = app.cliente("12.345.678/0001-90").await;

    db::ensure_schema(&app.db()).await.unwrap();
    db::ensure_schema(&app.db()).await.unwrap();

    let found = app.clientes().find_by_id(cliente.id).await.unwrap();
    assert_eq!(found, Some(cliente));
    assert!(db::missing_tables(&app.db()).await.unwrap().is_empty());
}

#[tokio::test]
async fn tracked_migrations_build_the_same_schema() {
    let dir = TempDir::new().unwrap();
    let pool = db::establish_connection(&sqlite_url(&dir)).await.unwrap();

    db::run_migrations(&pool).await.unwrap();
    assert!(db::missing_tables(&pool).await.unwrap().is_empty());

    // Creating missing tables on top of a tracked schema is still a no-op.
    db::ensure_schema(&pool).await.unwrap();
    db::close_pool(pool).await.unwrap();
}

#[tokio::test]
async fn concurrent_schema_creation_succeeds() {
    let app = TestApp::without_schema().await;
    let pool = app.db();

    let (a, b) = tokio::join!(db::ensure_schema(&pool), db::ensure_schema(&pool));
    a.unwrap();
    b.unwrap();

    assert!(db::missing_tables(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_a_referenced_client_is_restricted() {
    let app = TestApp::new().await;
    let cliente = app.cliente("111.222.333-44").await;
    app.contrato(cliente.id).await;

    let result = cliente::Entity::delete_by_id(cliente.id)
        .exec(app.db().as_ref())
        .await
        .map_err(ServiceError::from_db);

    assert_matches!(
        result,
        Err(ServiceError::ConstraintViolation {
            kind: ConstraintKind::ForeignKey,
            ..
        })
    );
    assert!(app.clientes().find_by_id(cliente.id).await.unwrap().is_some());
}

#[tokio::test]
async fn deleting_a_quote_removes_its_items() {
    let app = TestApp::new().await;
    let cliente = app.cliente("98.765.432/0001-10").await;
    let (orcamento, itens) = app
        .orcamentos()
        .create_with_itens(
            new_orcamento(cliente.id),
            vec![new_item("Visita técnica", 1.0, dec!(150.00))],
        )
        .await
        .unwrap();
    assert_eq!(itens.len(), 1);

    orcamento::Entity::delete_by_id(orcamento.id)
        .exec(app.db().as_ref())
        .await
        .unwrap();

    assert!(app.orcamentos().itens(orcamento.id).await.unwrap().is_empty());
}
