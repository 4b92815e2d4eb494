//! Трэйты чтения/записи форматов на основе std::io::{BufRead, Write}.

use crate::error::Result;
use std::io::{BufRead, Write};

pub trait ReadFormat {
    type Record;

    fn read<R: BufRead>(r: R) -> Result<Vec<Self::Record>>;
}

pub trait WriteFormat {
    type Record;

    /// Пишет все записи и возвращает их количество.
    fn write<W, I>(w: W, records: I) -> Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = Self::Record>;
}
