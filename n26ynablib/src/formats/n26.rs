//! CSV-выписка N26. Колонки берутся по позиции, названия в заголовке не важны:
//! date,recipient,account_number,transaction_type,reference,category,amount,amount_foreign_currency,foreign_currency,exchange_rate

use crate::{
    error::{ConvertError, Result},
    model::N26Transaction,
};
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use std::io::BufRead;

const DATE_FORMAT: &str = "%Y-%m-%d";

// Время операции отбрасывается.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

#[derive(serde::Deserialize)]
struct CsvRow {
    date: String,
    recipient: String,
    account_number: String,
    transaction_type: String,
    reference: String,
    category: String,
    amount: String,
    amount_foreign_currency: Option<String>,
    foreign_currency: Option<String>,
    exchange_rate: Option<String>,
}

pub struct N26Csv;

impl crate::traits::ReadFormat for N26Csv {
    type Record = N26Transaction;

    fn read<R: BufRead>(r: R) -> Result<Vec<N26Transaction>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .quote(b'"')
            .has_headers(true)
            .from_reader(r);
        let mut out = Vec::new();

        for (idx, rec) in rdr.records().enumerate() {
            let record = idx + 1;
            // без заголовков serde раскладывает поля по порядку
            let row: CsvRow = rec?.deserialize(None)?;
            let bad = |field: &'static str, message: String| ConvertError::Parse { record, field, message };

            out.push(N26Transaction {
                date: parse_date(&row.date).map_err(|e| bad("date", format!("{e}: {:?}", row.date)))?,
                recipient: row.recipient,
                account_number: row.account_number,
                transaction_type: row.transaction_type,
                reference: row.reference,
                category: row.category,
                amount: row
                    .amount
                    .trim()
                    .parse::<Decimal>()
                    .map_err(|e| bad("amount", format!("{e}: {:?}", row.amount)))?,
                amount_foreign_currency: parse_opt_decimal(row.amount_foreign_currency.as_deref())
                    .map_err(|e| bad("amount_foreign_currency", e.to_string()))?,
                foreign_currency: row.foreign_currency,
                exchange_rate: parse_opt_decimal(row.exchange_rate.as_deref())
                    .map_err(|e| bad("exchange_rate", e.to_string()))?,
            });
        }

        Ok(out)
    }
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, chrono::ParseError> {
    let s = s.trim();
    let err = match NaiveDate::parse_from_str(s, DATE_FORMAT) {
        Ok(d) => return Ok(d),
        Err(e) => e,
    };
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .ok_or(err)
}

fn parse_opt_decimal(s: Option<&str>) -> std::result::Result<Option<Decimal>, rust_decimal::Error> {
    match s.map(str::trim) {
        Some(v) if !v.is_empty() => v.parse().map(Some),
        _ => Ok(None),
    }
}
