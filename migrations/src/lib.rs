pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_clientes_table;
mod m20250301_000002_create_contratos_table;
mod m20250301_000003_create_tecnicos_table;
mod m20250301_000004_create_chamados_table;
mod m20250301_000005_create_servicos_table;
mod m20250301_000006_create_orcamento_table;
mod m20250301_000007_create_orcamento_itens_table;
mod m20250301_000008_create_faturamentos_table;
mod m20250301_000009_create_custos_table;

/// Names of every table the schema owns, in creation order.
pub const TABLES: [&str; 9] = [
    "clientes",
    "contratos",
    "tecnicos",
    "chamados",
    "servicos",
    "orcamento",
    "orcamento_itens",
    "faturamentos",
    "custos",
];

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_clientes_table::Migration),
            Box::new(m20250301_000002_create_contratos_table::Migration),
            Box::new(m20250301_000003_create_tecnicos_table::Migration),
            Box::new(m20250301_000004_create_chamados_table::Migration),
            Box::new(m20250301_000005_create_servicos_table::Migration),
            Box::new(m20250301_000006_create_orcamento_table::Migration),
            Box::new(m20250301_000007_create_orcamento_itens_table::Migration),
            Box::new(m20250301_000008_create_faturamentos_table::Migration),
            Box::new(m20250301_000009_create_custos_table::Migration),
        ]
    }
}
