#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use chrono::NaiveDate;
use daedalosys::{
    config::AppConfig,
    db,
    entities::{chamado, cliente, contrato, custo, faturamento, orcamento, orcamento_item, tecnico},
    errors::ServiceError,
    repositories::{
        ChamadoRepository, ClienteRepository, ContratoRepository, CustoRepository,
        FaturamentoRepository, OrcamentoRepository, ServicoRepository, TecnicoRepository,
    },
    AppState,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{DatabaseConnection, Set};
use tempfile::TempDir;
use tower::ServiceExt;

/// Application backed by a fresh SQLite file in a temporary directory.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    dir: TempDir,
}

impl TestApp {
    /// Fresh database with the schema in place.
    pub async fn new() -> Self {
        Self::build(true, |_, _| {}).await
    }

    /// Fresh database with the schema in place and a customized configuration.
    pub async fn with_config(customize: impl FnOnce(&mut AppConfig, &TempDir)) -> Self {
        Self::build(true, customize).await
    }

    /// Fresh database with no tables at all.
    pub async fn without_schema() -> Self {
        Self::build(false, |_, _| {}).await
    }

    async fn build(ensure_schema: bool, customize: impl FnOnce(&mut AppConfig, &TempDir)) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let mut cfg = AppConfig::new(
            sqlite_url(&dir),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.db_max_connections = 4;
        customize(&mut cfg, &dir);

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        if ensure_schema {
            db::ensure_schema(&pool)
                .await
                .expect("failed to create schema in tests");
        }

        let state = AppState::new(Arc::new(pool), cfg);
        let router = daedalosys::app_router(state.clone());

        Self { router, state, dir }
    }

    pub fn db(&self) -> Arc<DatabaseConnection> {
        self.state.db.clone()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn clientes(&self) -> ClienteRepository {
        ClienteRepository::new(self.db())
    }

    pub fn contratos(&self) -> ContratoRepository {
        ContratoRepository::new(self.db())
    }

    pub fn tecnicos(&self) -> TecnicoRepository {
        TecnicoRepository::new(self.db())
    }

    pub fn chamados(&self) -> ChamadoRepository {
        ChamadoRepository::new(self.db())
    }

    pub fn servicos(&self) -> ServicoRepository {
        ServicoRepository::new(self.db())
    }

    pub fn orcamentos(&self) -> OrcamentoRepository {
        OrcamentoRepository::new(self.db())
    }

    pub fn faturamentos(&self) -> FaturamentoRepository {
        FaturamentoRepository::new(self.db())
    }

    pub fn custos(&self) -> CustoRepository {
        CustoRepository::new(self.db())
    }

    /// Send a request through the full middleware stack.
    pub async fn request(&self, method: Method, uri: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("build request");

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    /// Insert a client with the given tax document.
    pub async fn cliente(&self, cnpj_cpf: &str) -> cliente::Model {
        self.clientes()
            .create(new_cliente(cnpj_cpf))
            .await
            .expect("insert cliente")
    }

    /// Insert an active contract for `id_cliente`.
    pub async fn contrato(&self, id_cliente: i32) -> contrato::Model {
        self.contratos()
            .create(new_contrato(id_cliente))
            .await
            .expect("insert contrato")
    }

    /// Insert a technician.
    pub async fn tecnico(&self, cpf: &str, email: &str) -> tecnico::Model {
        self.tecnicos()
            .create(new_tecnico(cpf, email))
            .await
            .expect("insert tecnico")
    }
}

pub fn sqlite_url(dir: &TempDir) -> String {
    format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("daedalosys_test.db").display()
    )
}

pub async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn new_cliente(cnpj_cpf: &str) -> cliente::ActiveModel {
    cliente::ActiveModel {
        razao_social: Set("Oficina Daedalus Ltda".to_string()),
        nome_fantasia: Set(Some("Daedalus".to_string())),
        cnpj_cpf: Set(cnpj_cpf.to_string()),
        cidade: Set(Some("Curitiba".to_string())),
        uf: Set(Some("PR".to_string())),
        ..Default::default()
    }
}

pub fn new_contrato(id_cliente: i32) -> contrato::ActiveModel {
    contrato::ActiveModel {
        id_cliente: Set(id_cliente),
        tipo_contrato: Set(1),
        data_inicio: Set(date(2025, 1, 1)),
        valor: Set(dec!(1500.00)),
        status_contrato: Set(1),
        ..Default::default()
    }
}

pub fn new_tecnico(cpf: &str, email: &str) -> tecnico::ActiveModel {
    tecnico::ActiveModel {
        nome: Set("Ana Souza".to_string()),
        cpf: Set(cpf.to_string()),
        email: Set(email.to_string()),
        cargo: Set(Some("Suporte N2".to_string())),
        ..Default::default()
    }
}

pub fn new_chamado(id_cliente: i32) -> chamado::ActiveModel {
    chamado::ActiveModel {
        id_cliente: Set(id_cliente),
        titulo: Set("Impressora offline".to_string()),
        descricao: Set("A impressora do financeiro parou de responder.".to_string()),
        prioridade: Set(2),
        status: Set(0),
        ..Default::default()
    }
}

pub fn new_orcamento(id_cliente: i32) -> orcamento::ActiveModel {
    orcamento::ActiveModel {
        id_cliente: Set(id_cliente),
        valor_total: Set(dec!(450.00)),
        status: Set(0),
        ..Default::default()
    }
}

pub fn new_item(nome: &str, quantidade: f64, valor_unitario: Decimal) -> orcamento_item::ActiveModel {
    orcamento_item::ActiveModel {
        nome: Set(nome.to_string()),
        quantidade: Set(quantidade),
        valor_unitario: Set(valor_unitario),
        valor_total: Set(valor_unitario * Decimal::try_from(quantidade).unwrap_or_default()),
        ..Default::default()
    }
}

pub fn new_faturamento(id_cliente: i32) -> faturamento::ActiveModel {
    faturamento::ActiveModel {
        id_cliente: Set(id_cliente),
        data_vencimento: Set(date(2025, 4, 10)),
        valor_total: Set(dec!(450.00)),
        status: Set(0),
        ..Default::default()
    }
}

pub fn new_custo(id_cliente: Option<i32>) -> custo::ActiveModel {
    custo::ActiveModel {
        id_cliente: Set(id_cliente),
        descricao: Set("Deslocamento".to_string()),
        valor: Set(dec!(80.00)),
        tipo: Set(1),
        ..Default::default()
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Constraint kind carried by a failed write, if any.
pub fn constraint_of<T: std::fmt::Debug>(
    result: Result<T, ServiceError>,
) -> Option<daedalosys::errors::ConstraintKind> {
    result.expect_err("write should have been rejected").constraint()
}
