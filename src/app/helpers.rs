//! Async helpers shared by the update handlers

use std::path::PathBuf;

use crate::features::upload_kinds::UPLOAD_KINDS;

/// Open folder dialog
pub async fn open_folder_dialog() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Select Music Folder")
        .pick_folder()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Multi-select picker for uploadable files
///
/// Filters come from the upload kind table, so the dialog never advertises
/// an extension the upload dispatch does not know about. An empty result
/// means the dialog was dismissed.
pub async fn pick_upload_files() -> Vec<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new().set_title("Select Files to Upload");
    for kind in UPLOAD_KINDS {
        dialog = dialog.add_filter(kind.label, kind.extensions);
    }
    dialog
        .pick_files()
        .await
        .map(|handles| {
            handles
                .into_iter()
                .map(|handle| handle.path().to_path_buf())
                .collect()
        })
        .unwrap_or_default()
}

/// Save dialog for a preset download, defaulting to the preset's name
pub async fn save_preset_dialog(preset_name: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_file_name(&preset_name)
        .add_filter("FXP Preset", &["fxp"])
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}
