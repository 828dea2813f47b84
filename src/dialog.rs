use std::path::PathBuf;

// The native save dialog is the only platform service the app talks to
// directly; it sits behind a trait so the save flow can be exercised in tests
// without opening a window.
pub trait SaveDialog {
    /// Prompt the user for a destination path. `None` means the dialog was
    /// dismissed without choosing a file.
    fn prompt_save(
        &self,
        title: &str,
        default_name: &str,
        filter_desc: &str,
        extensions: &[&str],
    ) -> Option<PathBuf>;
}

pub struct NativeSaveDialog;

impl SaveDialog for NativeSaveDialog {
    fn prompt_save(
        &self,
        title: &str,
        default_name: &str,
        filter_desc: &str,
        extensions: &[&str],
    ) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .set_file_name(default_name)
            .add_filter(filter_desc, extensions)
            .save_file()
    }
}
