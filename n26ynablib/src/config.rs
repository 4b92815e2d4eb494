//! Настройки конвертации. Значения по умолчанию совпадают с поведением
//! утилиты без флагов.

/// Суффикс выходного файла: `statement.csv` -> `statement_YNAB.csv`.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "YNAB";

/// Домашняя валюта счёта N26.
pub const DEFAULT_HOME_CURRENCY: &str = "EUR";

/// Какое поле выписки идёт во вторую часть мемо.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MemoField {
    #[default]
    Reference,
    Category,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_suffix: String,
    pub home_currency: String,
    pub memo_field: MemoField,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            home_currency: DEFAULT_HOME_CURRENCY.to_string(),
            memo_field: MemoField::default(),
        }
    }
}
