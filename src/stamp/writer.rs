use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::utils::debug_enabled;

use super::{BuildStamp, Precision};

/// Overwrite `path` with the generated module for `stamp`.
///
/// The parent directory must already exist; it is never created here.
pub(crate) fn write_stamp(
    path: &Path,
    stamp: &BuildStamp,
    precision: Precision,
) -> Result<(), AppError> {
    let contents = stamp.declaration(precision);
    if debug_enabled() {
        eprintln!(
            "[DEBUG] writing {} bytes to {}",
            contents.len(),
            path.display()
        );
    }
    fs::write(path, contents).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// A stamp read back from disk, with the literal exactly as it was written
#[derive(Debug, Clone)]
pub(crate) struct StoredStamp {
    pub(crate) stamp: BuildStamp,
    pub(crate) literal: String,
}

/// Load and parse a previously generated module
pub(crate) fn read_stamp(path: &Path) -> Result<StoredStamp, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let (stamp, literal) = BuildStamp::parse_declaration(&text, path)?;
    Ok(StoredStamp {
        stamp,
        literal: literal.to_string(),
    })
}
