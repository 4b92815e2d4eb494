//! Путь выходного файла по умолчанию: рядом со входным, `<имя>_<суффикс>.csv`.

use crate::error::{ConvertError, Result};
use std::path::{Path, PathBuf};

pub fn output_path_for(input: &Path, suffix: &str) -> Result<PathBuf> {
    if input.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(ConvertError::OutputPath("input path is blank".into()));
    }
    let stem = input
        .file_stem()
        .ok_or_else(|| ConvertError::OutputPath(format!("no file name in {}", input.display())))?;

    let mut name = stem.to_os_string();
    name.push(format!("_{suffix}.csv"));

    Ok(match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    })
}
