mod common;

use assert_matches::assert_matches;
use common::{
    constraint_of, new_chamado, new_cliente, new_contrato, new_custo, new_faturamento,
    new_orcamento, new_tecnico, TestApp,
};
use daedalosys::{
    entities::{chamado, servico},
    errors::{ConstraintKind, ServiceError},
};
use rstest::rstest;
use rust_decimal_macros::dec;
use sea_orm::{ActiveValue::NotSet, Set};

const MISSING: i32 = 9999;

#[tokio::test]
async fn duplicate_client_document_is_rejected() {
    let app = TestApp::new().await;
    let first = app.cliente("12.345.678/0001-90").await;

    let second = app.clientes().create(new_cliente("12.345.678/0001-90")).await;
    assert_eq!(constraint_of(second), Some(ConstraintKind::Unique));

    let stored = app
        .clientes()
        .find_by_cnpj_cpf("12.345.678/0001-90")
        .await
        .unwrap();
    assert_eq!(stored.map(|c| c.id), Some(first.id));
}

#[tokio::test]
async fn technician_cpf_and_email_are_each_unique() {
    let app = TestApp::new().await;
    let ana = app.tecnico("123.456.789-00", "ana@daedalosys.com.br").await;

    let same_cpf = app
        .tecnicos()
        .create(new_tecnico("123.456.789-00", "outra@daedalosys.com.br"))
        .await;
    assert_eq!(constraint_of(same_cpf), Some(ConstraintKind::Unique));

    let same_email = app
        .tecnicos()
        .create(new_tecnico("987.654.321-00", "ana@daedalosys.com.br"))
        .await;
    assert_eq!(constraint_of(same_email), Some(ConstraintKind::Unique));

    let found = app
        .tecnicos()
        .find_by_email("ana@daedalosys.com.br")
        .await
        .unwrap();
    assert_eq!(found, Some(ana));
}

#[rstest]
#[case::contrato("contratos")]
#[case::chamado("chamados")]
#[case::orcamento("orcamento")]
#[case::faturamento("faturamentos")]
#[case::custo("custos")]
#[tokio::test]
async fn unknown_client_reference_is_rejected(#[case] table: &str) {
    let app = TestApp::new().await;

    let kind = match table {
        "contratos" => constraint_of(app.contratos().create(new_contrato(MISSING)).await),
        "chamados" => constraint_of(app.chamados().create(new_chamado(MISSING)).await),
        "orcamento" => constraint_of(app.orcamentos().create(new_orcamento(MISSING)).await),
        "faturamentos" => {
            constraint_of(app.faturamentos().create(new_faturamento(MISSING)).await)
        }
        "custos" => constraint_of(app.custos().create(new_custo(Some(MISSING))).await),
        other => panic!("unexpected table {other}"),
    };

    assert_eq!(kind, Some(ConstraintKind::ForeignKey));
}

#[tokio::test]
async fn ticket_without_contract_or_technician_is_accepted() {
    let app = TestApp::new().await;
    let cliente = app.cliente("12.345.678/0001-90").await;

    let mut chamado = new_chamado(cliente.id);
    chamado.prioridade = Set(7);
    chamado.status = Set(42);
    let chamado = app.chamados().create(chamado).await.unwrap();

    assert_eq!(chamado.id_cliente, cliente.id);
    assert_eq!((chamado.prioridade, chamado.status), (7, 42));
    assert_eq!(chamado.id_contrato, None);
    assert_eq!(chamado.id_tecnico, None);
    assert_eq!(chamado.tempo_gasto, None);

    let listed = app.chamados().find_by_cliente(cliente.id).await.unwrap();
    assert_eq!(listed, vec![chamado]);
}

#[tokio::test]
async fn ticket_with_unknown_contract_is_rejected() {
    let app = TestApp::new().await;
    let cliente = app.cliente("12.345.678/0001-90").await;

    let mut chamado = new_chamado(cliente.id);
    chamado.id_contrato = Set(Some(MISSING));

    let result = app.chamados().create(chamado).await;
    assert_eq!(constraint_of(result), Some(ConstraintKind::ForeignKey));
    assert!(app.chamados().find_by_cliente(cliente.id).await.unwrap().is_empty());
}

#[rstest]
#[case::chamado_tecnico("chamados.id_tecnico")]
#[case::faturamento_orcamento("faturamentos.id_orcamento")]
#[case::faturamento_contrato("faturamentos.id_contrato")]
#[tokio::test]
async fn unknown_optional_reference_is_rejected(#[case] column: &str) {
    let app = TestApp::new().await;
    let cliente = app.cliente("12.345.678/0001-90").await;

    let kind = match column {
        "chamados.id_tecnico" => {
            let mut chamado = new_chamado(cliente.id);
            chamado.id_tecnico = Set(Some(MISSING));
            constraint_of(app.chamados().create(chamado).await)
        }
        "faturamentos.id_orcamento" => {
            let mut faturamento = new_faturamento(cliente.id);
            faturamento.id_orcamento = Set(Some(MISSING));
            constraint_of(app.faturamentos().create(faturamento).await)
        }
        "faturamentos.id_contrato" => {
            let mut faturamento = new_faturamento(cliente.id);
            faturamento.id_contrato = Set(Some(MISSING));
            constraint_of(app.faturamentos().create(faturamento).await)
        }
        other => panic!("unexpected column {other}"),
    };

    assert_eq!(kind, Some(ConstraintKind::ForeignKey));
}

#[tokio::test]
async fn ticket_may_carry_a_contract_without_a_technician() {
    let app = TestApp::new().await;
    let cliente = app.cliente("12.345.678/0001-90").await;
    let contrato = app.contrato(cliente.id).await;

    let mut chamado = new_chamado(cliente.id);
    chamado.id_contrato = Set(Some(contrato.id));

    let chamado = app.chamados().create(chamado).await.unwrap();
    assert_eq!(
        (chamado.id_contrato, chamado.id_tecnico),
        (Some(contrato.id), None)
    );
}

#[tokio::test]
async fn ticket_may_carry_a_technician_without_a_contract() {
    let app = TestApp::new().await;
    let cliente = app.cliente("12.345.678/0001-90").await;
    let tecnico = app.tecnico("123.456.789-00", "ana@daedalosys.com.br").await;

    let mut chamado = new_chamado(cliente.id);
    chamado.id_tecnico = Set(Some(tecnico.id));

    let chamado = app.chamados().create(chamado).await.unwrap();
    assert_eq!(
        (chamado.id_contrato, chamado.id_tecnico),
        (None, Some(tecnico.id))
    );
}

#[tokio::test]
async fn ticket_contract_may_belong_to_another_client() {
    let app = TestApp::new().await;
    let dono = app.cliente("11.111.111/0001-11").await;
    let outro = app.cliente("22.222.222/0001-22").await;
    let contrato = app.contrato(dono.id).await;
    let tecnico = app.tecnico("123.456.789-00", "ana@daedalosys.com.br").await;

    let mut chamado = new_chamado(outro.id);
    chamado.id_contrato = Set(Some(contrato.id));
    chamado.id_tecnico = Set(Some(tecnico.id));

    let chamado = app.chamados().create(chamado).await.unwrap();
    assert_eq!(chamado.id_contrato, Some(contrato.id));
}

#[tokio::test]
async fn missing_required_column_is_a_not_null_violation() {
    let app = TestApp::new().await;
    let cliente = app.cliente("12.345.678/0001-90").await;

    let chamado = chamado::ActiveModel {
        titulo: NotSet,
        ..new_chamado(cliente.id)
    };

    let result = app.chamados().create(chamado).await;
    assert_matches!(
        result,
        Err(ServiceError::ConstraintViolation {
            kind: ConstraintKind::NotNull,
            ..
        })
    );
}

#[tokio::test]
async fn general_cost_needs_no_client() {
    let app = TestApp::new().await;

    let custo = app.custos().create(new_custo(None)).await.unwrap();

    assert_eq!(custo.id_cliente, None);
    assert_eq!(app.custos().find_by_id(custo.id).await.unwrap(), Some(custo));
}

#[tokio::test]
async fn unset_columns_take_their_defaults() {
    let app = TestApp::new().await;
    let today = daedalosys::entities::today();

    let cliente = app.cliente("12.345.678/0001-90").await;
    assert_eq!(cliente.data_cadastro, today);
    assert!(!cliente.fornecedor);

    let chamado = app.chamados().create(new_chamado(cliente.id)).await.unwrap();
    let age = chrono::Utc::now() - chamado.data_abertura;
    assert!(age.num_seconds().abs() < 60);

    let orcamento = app.orcamentos().create(new_orcamento(cliente.id)).await.unwrap();
    assert_eq!(orcamento.data, today);

    let faturamento = app
        .faturamentos()
        .create(new_faturamento(cliente.id))
        .await
        .unwrap();
    assert_eq!(faturamento.data_emissao, today);
    assert_eq!(faturamento.id_orcamento, None);

    let custo = app.custos().create(new_custo(Some(cliente.id))).await.unwrap();
    assert_eq!(custo.data, today);
}

#[tokio::test]
async fn supplier_flag_is_kept_when_given() {
    let app = TestApp::new().await;
    let mut cliente = new_cliente("55.555.555/0001-55");
    cliente.fornecedor = Set(true);

    let cliente = app.clientes().create(cliente).await.unwrap();
    assert!(cliente.fornecedor);
}

#[tokio::test]
async fn money_is_rounded_to_cents() {
    let app = TestApp::new().await;
    let cliente = app.cliente("12.345.678/0001-90").await;

    let mut contrato = new_contrato(cliente.id);
    contrato.valor = Set(dec!(1234.565));
    let contrato = app.contratos().create(contrato).await.unwrap();
    assert_eq!(contrato.valor.round_dp(2), dec!(1234.57));

    let servico = app
        .servicos()
        .create(servico::ActiveModel {
            descricao: Set("Formatação".to_string()),
            preco_unitario: Set(dec!(99.995)),
            custo_base: Set(None),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(servico.preco_unitario.round_dp(2), dec!(100.00));
    assert_eq!(servico.custo_base, None);
}

#[tokio::test]
async fn money_wider_than_its_column_is_rejected() {
    let app = TestApp::new().await;
    let cliente = app.cliente("12.345.678/0001-90").await;

    let mut contrato = new_contrato(cliente.id);
    contrato.valor = Set(dec!(99999999.99));
    let contrato = app.contratos().create(contrato).await.unwrap();
    assert_eq!(contrato.valor.round_dp(2), dec!(99999999.99));

    let mut contrato = new_contrato(cliente.id);
    contrato.valor = Set(dec!(100000000.00));
    let result = app.contratos().create(contrato).await;
    assert_eq!(constraint_of(result), Some(ConstraintKind::NumericOverflow));
}

#[tokio::test]
async fn time_spent_fits_five_two() {
    let app = TestApp::new().await;
    let cliente = app.cliente("12.345.678/0001-90").await;

    let mut chamado = new_chamado(cliente.id);
    chamado.tempo_gasto = Set(Some(dec!(12.5)));
    let chamado = app.chamados().create(chamado).await.unwrap();
    assert_eq!(chamado.tempo_gasto.map(|t| t.round_dp(2)), Some(dec!(12.50)));

    let mut chamado = new_chamado(cliente.id);
    chamado.tempo_gasto = Set(Some(dec!(1000)));
    let result = app.chamados().create(chamado).await;
    assert_eq!(constraint_of(result), Some(ConstraintKind::NumericOverflow));
}
