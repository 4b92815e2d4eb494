//! n26ynablib — конвертация CSV-выписок N26 в CSV для импорта в YNAB

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod paths;
pub mod pipeline;
pub mod report;
pub mod traits;

pub mod formats {
    pub mod n26;
    pub mod ynab;
}
