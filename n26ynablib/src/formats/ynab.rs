//! CSV для импорта в YNAB: Date,Payee,Memo,Amount

use crate::{error::Result, model::YnabTransaction};
use csv::WriterBuilder;
use std::io::Write;

pub const HEADER: [&str; 4] = ["Date", "Payee", "Memo", "Amount"];

pub struct YnabCsv;

impl crate::traits::WriteFormat for YnabCsv {
    type Record = YnabTransaction;

    fn write<W, I>(mut w: W, records: I) -> Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = Self::Record>,
    {
        let mut wrt = WriterBuilder::new()
            .delimiter(b',')
            .quote(b'"')
            .has_headers(false)
            .from_writer(&mut w);

        // заголовок пишем сами, чтобы он был и у пустого файла
        wrt.write_record(HEADER)?;

        let mut n = 0;
        for tx in records {
            wrt.serialize(tx)?;
            n += 1;
        }
        wrt.flush()?;
        Ok(n)
    }
}
