use std::path::{Path, PathBuf};

use crate::consts::BUILD_TIME_FILE;

/// Directory the default target is relative to: this crate's own directory,
/// which sits next to the front-end's `src/`.
fn anchor_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// `<anchor>/../src/build-time.ts`
pub(crate) fn default_output() -> PathBuf {
    anchor_dir().join("..").join("src").join(BUILD_TIME_FILE)
}

/// Explicit path if one was given (CLI or config), otherwise the default
pub(crate) fn resolve_output(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => default_output(),
    }
}
