//! Отчёт о ходе конвертации. Конвейер получает `Reporter` параметром и
//! сам ничего не знает о логгере.

use std::path::Path;
use tracing::info;

pub trait Reporter {
    fn started(&mut self, input: &Path);
    fn parsed(&mut self, count: usize);
    fn output_defaulted(&mut self, output: &Path);
    fn converted(&mut self, count: usize);
    fn finished(&mut self, output: &Path);
}

/// Пишет события через `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn started(&mut self, input: &Path) {
        info!(input = %input.display(), "started conversion");
    }

    fn parsed(&mut self, count: usize) {
        info!(count, "found N26 transactions");
    }

    fn output_defaulted(&mut self, output: &Path) {
        info!(output = %output.display(), "no output file specified, using default");
    }

    fn converted(&mut self, count: usize) {
        info!(count, "converted to YNAB transactions");
    }

    fn finished(&mut self, output: &Path) {
        info!(output = %output.display(), "finished conversion");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn started(&mut self, _: &Path) {}
    fn parsed(&mut self, _: usize) {}
    fn output_defaulted(&mut self, _: &Path) {}
    fn converted(&mut self, _: usize) {}
    fn finished(&mut self, _: &Path) {}
}
