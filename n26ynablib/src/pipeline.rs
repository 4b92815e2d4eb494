//! Конвертация файла целиком: проверка входа, разбор, маппинг, запись.

use crate::{
    config::Config,
    convert::TransactionMapper,
    error::{ConvertError, Result},
    formats::{n26::N26Csv, ynab::YnabCsv},
    model::N26Transaction,
    paths::output_path_for,
    report::Reporter,
    traits::{ReadFormat, WriteFormat},
};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Job {
    pub input: PathBuf,
    /// `None` — файл рядом со входным, см. [`output_path_for`].
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub records: usize,
}

pub fn convert_file(job: &Job, cfg: &Config, reporter: &mut dyn Reporter) -> Result<Summary> {
    reporter.started(&job.input);

    if !job.input.is_file() {
        return Err(ConvertError::InputNotFound(job.input.clone()));
    }
    let records = N26Csv::read(BufReader::new(File::open(&job.input)?))?;
    reporter.parsed(records.len());

    let output = match &job.output {
        Some(p) => p.clone(),
        None => {
            let p = output_path_for(&job.input, &cfg.output_suffix)?;
            reporter.output_defaulted(&p);
            p
        }
    };

    let n = write_ynab(&output, &records, cfg)?;
    reporter.converted(n);
    reporter.finished(&output);

    Ok(Summary { output, records: n })
}

/// То же без файловой системы: N26 CSV из `r`, YNAB CSV в `w`.
pub fn convert_reader<R: BufRead, W: Write>(r: R, w: W, cfg: &Config) -> Result<usize> {
    let records = N26Csv::read(r)?;
    let mapper = TransactionMapper::from(cfg);
    YnabCsv::write(w, mapper.convert_all(&records))
}

fn write_ynab(path: &Path, records: &[N26Transaction], cfg: &Config) -> Result<usize> {
    let mapper = TransactionMapper::from(cfg);
    let mut w = BufWriter::new(File::create(path)?);
    let n = YnabCsv::write(&mut w, mapper.convert_all(records))?;
    w.flush()?;
    Ok(n)
}
