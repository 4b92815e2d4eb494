//! Доменные модели: строка выписки N26 и строка импорта YNAB.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Одна операция из CSV-выписки N26.
#[derive(Debug, Clone, PartialEq)]
pub struct N26Transaction {
    pub date: NaiveDate,
    pub recipient: String,
    pub account_number: String,
    pub transaction_type: String,
    pub reference: String,
    pub category: String,
    pub amount: Decimal,
    pub amount_foreign_currency: Option<Decimal>,
    pub foreign_currency: Option<String>,
    pub exchange_rate: Option<Decimal>,
}

/// Строка CSV для YNAB.
///
/// Формат описан в документации YNAB:
/// <https://docs.youneedabudget.com/article/921-formatting-csv-file>
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YnabTransaction {
    pub date: String,
    pub payee: String,
    pub memo: String,
    pub amount: String,
}
