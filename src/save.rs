use crate::dialog::SaveDialog;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

// The saved file always holds this single line, overwriting whatever was
// there before.
pub const PLACEHOLDER: &str = "TEST";

pub const DIALOG_TITLE: &str = "Save file";
pub const FILTER_DESC: &str = "Text files";
pub const FILTER_EXTENSIONS: &[&str] = &["txt"];

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not write {}: {}", path.display(), source)]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Cancelled,
}

/// Runs the save flow: prompt for a destination, then overwrite it with the
/// placeholder line. A dismissed dialog (or an empty path) aborts before any
/// filesystem call.
pub fn save_via_dialog(
    dialog: &dyn SaveDialog,
    default_name: &str,
) -> Result<SaveOutcome, SaveError> {
    let Some(path) = dialog.prompt_save(DIALOG_TITLE, default_name, FILTER_DESC, FILTER_EXTENSIONS)
    else {
        log::info!("save dialog cancelled");
        return Ok(SaveOutcome::Cancelled);
    };
    // some backends report cancellation as an empty path
    if path.as_os_str().is_empty() {
        log::info!("save dialog returned an empty path");
        return Ok(SaveOutcome::Cancelled);
    }
    write_placeholder(&path)?;
    log::info!("saved {}", path.display());
    Ok(SaveOutcome::Saved(path))
}

pub fn write_placeholder(path: &Path) -> Result<(), SaveError> {
    let attempt = |path: &Path| -> io::Result<()> {
        let mut file = File::create(path)?;
        writeln!(file, "{}", PLACEHOLDER)?;
        Ok(())
    };
    attempt(path).map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    })
}
