//! Преобразование операций N26 в строки YNAB.
//!
//! Маппер не делает I/O и не пишет логи: на вход записи, на выход записи.

use crate::{
    config::{Config, MemoField, DEFAULT_HOME_CURRENCY},
    model::{N26Transaction, YnabTransaction},
};
use rust_decimal::Decimal;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionMapper {
    home_currency: String,
    memo_field: MemoField,
}

impl Default for TransactionMapper {
    fn default() -> Self {
        Self::new(DEFAULT_HOME_CURRENCY, MemoField::default())
    }
}

impl From<&Config> for TransactionMapper {
    fn from(cfg: &Config) -> Self {
        Self::new(&cfg.home_currency, cfg.memo_field)
    }
}

impl TransactionMapper {
    pub fn new(home_currency: &str, memo_field: MemoField) -> Self {
        Self {
            home_currency: home_currency.trim().to_string(),
            memo_field,
        }
    }

    /// Операция в иностранной валюте: код валюты указан и не совпадает
    /// с домашней (без учёта регистра).
    pub fn is_foreign_currency(&self, tx: &N26Transaction) -> bool {
        match tx.foreign_currency.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => !code.eq_ignore_ascii_case(&self.home_currency),
            _ => false,
        }
    }

    /// `"<тип> - <референс|категория>"`, для валютных операций ещё
    /// `" | FX: <сумма><валюта> @ <курс>"`. Пустые поля выводятся пустой строкой.
    pub fn build_memo(&self, tx: &N26Transaction) -> String {
        let detail = match self.memo_field {
            MemoField::Reference => &tx.reference,
            MemoField::Category => &tx.category,
        };
        let mut memo = format!("{} - {}", tx.transaction_type, detail);

        if self.is_foreign_currency(tx) {
            memo.push_str(&format!(
                " | FX: {}{} @ {}",
                or_blank(tx.amount_foreign_currency),
                tx.foreign_currency.as_deref().unwrap_or_default(),
                or_blank(tx.exchange_rate),
            ));
        }

        memo
    }

    pub fn map(&self, tx: &N26Transaction) -> YnabTransaction {
        YnabTransaction {
            date: tx.date.format(DATE_FORMAT).to_string(),
            payee: tx.recipient.clone(),
            memo: self.build_memo(tx),
            // Display у Decimal: точка, без разделителей групп, масштаб как при разборе.
            amount: tx.amount.to_string(),
        }
    }

    /// Ленивое преобразование с сохранением порядка, одна запись на одну.
    pub fn convert_all<'a, I>(&'a self, records: I) -> impl Iterator<Item = YnabTransaction> + 'a
    where
        I: IntoIterator<Item = &'a N26Transaction>,
        I::IntoIter: 'a,
    {
        records.into_iter().map(move |tx| self.map(tx))
    }
}

fn or_blank(v: Option<Decimal>) -> String {
    v.map(|d| d.to_string()).unwrap_or_default()
}
