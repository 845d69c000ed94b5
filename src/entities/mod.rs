//! sea-orm entities, one module per table.
//!
//! Column names follow the stored schema (`clientes.cnpj_cpf`,
//! `chamados.tempo_gasto`, ...). Status, priority and type columns are plain
//! integer codes; no meaning is attached to them here.

pub mod chamado;
pub mod cliente;
pub mod contrato;
pub mod custo;
pub mod faturamento;
pub mod orcamento;
pub mod orcamento_item;
pub mod servico;
pub mod tecnico;

use chrono::{NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::{ActiveValue, DbErr};

/// Precision of every money column: `NUMERIC(10,2)`.
pub const MONEY: FixedPoint = FixedPoint::new(10, 2);

/// Precision of `chamados.tempo_gasto`: `NUMERIC(5,2)`.
pub const TIME_SPENT: FixedPoint = FixedPoint::new(5, 2);

/// Prefix of the error raised when a value does not fit its column.
pub const NUMERIC_OVERFLOW: &str = "numeric overflow";

/// Declared precision and scale of a fixed-point column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPoint {
    pub precision: u32,
    pub scale: u32,
}

impl FixedPoint {
    /// # Panics
    /// Panics if `scale` exceeds `precision` or `precision` exceeds 18.
    pub const fn new(precision: u32, scale: u32) -> Self {
        assert!(scale <= precision, "scale must not exceed precision");
        assert!(precision <= 18, "precision must fit an i64");
        Self { precision, scale }
    }

    /// Rounds `value` to the column scale (half away from zero) and rejects
    /// values whose integer part needs more digits than the column allows.
    ///
    /// SQLite does not enforce `NUMERIC(p,s)`, so this is the check every
    /// backend shares.
    pub fn apply(&self, column: &str, value: Decimal) -> Result<Decimal, DbErr> {
        let rounded = value.round_dp_with_strategy(self.scale, RoundingStrategy::MidpointAwayFromZero);
        let limit = Decimal::from(10_i64.pow(self.precision - self.scale));
        if rounded.abs() >= limit {
            return Err(DbErr::Custom(format!(
                "{}: {} = {} does not fit NUMERIC({},{})",
                NUMERIC_OVERFLOW, column, value, self.precision, self.scale
            )));
        }
        Ok(rounded)
    }

    pub(crate) fn normalize(
        &self,
        column: &str,
        value: ActiveValue<Decimal>,
    ) -> Result<ActiveValue<Decimal>, DbErr> {
        match value {
            ActiveValue::Set(v) => Ok(ActiveValue::Set(self.apply(column, v)?)),
            other => Ok(other),
        }
    }

    pub(crate) fn normalize_opt(
        &self,
        column: &str,
        value: ActiveValue<Option<Decimal>>,
    ) -> Result<ActiveValue<Option<Decimal>>, DbErr> {
        match value {
            ActiveValue::Set(Some(v)) => Ok(ActiveValue::Set(Some(self.apply(column, v)?))),
            other => Ok(other),
        }
    }
}

/// Current UTC date, used for the date columns that default to "today".
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Fills an unset date column on insert.
pub(crate) fn default_today(value: ActiveValue<NaiveDate>, insert: bool) -> ActiveValue<NaiveDate> {
    match value {
        ActiveValue::NotSet if insert => ActiveValue::Set(today()),
        other => other,
    }
}
