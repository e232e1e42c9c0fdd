//! Accepted upload kinds
//!
//! Single source of truth for the file picker: the dialog filters and the
//! per-file upload dispatch both derive from this table, so a kind is never
//! advertised with one extension set and handled with another.

use std::path::Path;

/// What to do with a picked file of a given kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadAction {
    /// Forward the file path to the preset metadata upload command
    PresetMetadata,
}

/// One accepted file kind in the upload picker
#[derive(Debug, Clone, Copy)]
pub struct UploadKind {
    /// Filter label shown in the native dialog
    pub label: &'static str,
    /// Extensions (lowercase, no dot) matched by this kind
    pub extensions: &'static [&'static str],
    /// Upload action, if any. Kinds without one are selectable but
    /// produce no backend call.
    pub action: Option<UploadAction>,
}

/// Kinds offered by the upload picker, in filter order
pub const UPLOAD_KINDS: &[UploadKind] = &[
    UploadKind {
        label: "Audio Files",
        extensions: &["mp3", "flac", "wav"],
        action: None,
    },
    UploadKind {
        label: "Preset Files",
        extensions: &["fxp"],
        action: Some(UploadAction::PresetMetadata),
    },
];

/// Resolve the upload action for a picked path by its extension
pub fn action_for_path(path: &Path) -> Option<UploadAction> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    UPLOAD_KINDS
        .iter()
        .find(|kind| kind.extensions.contains(&ext.as_str()))
        .and_then(|kind| kind.action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn preset_files_upload_as_preset_metadata() {
        let path = PathBuf::from("/tmp/lead.fxp");
        assert_eq!(action_for_path(&path), Some(UploadAction::PresetMetadata));
    }

    #[test]
    fn audio_files_are_accepted_but_not_uploaded() {
        for name in ["kick.wav", "loop.mp3", "pad.flac"] {
            let path = PathBuf::from(name);
            assert_eq!(action_for_path(&path), None, "{}", name);
        }
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let path = PathBuf::from("/tmp/LEAD.FXP");
        assert_eq!(action_for_path(&path), Some(UploadAction::PresetMetadata));
    }

    #[test]
    fn unknown_extensions_have_no_action() {
        assert_eq!(action_for_path(&PathBuf::from("notes.txt")), None);
        assert_eq!(action_for_path(&PathBuf::from("no_extension")), None);
    }

    #[test]
    fn every_dialog_filter_comes_from_the_table() {
        // The picker builds its filters by iterating UPLOAD_KINDS, so each
        // kind must carry at least one extension.
        for kind in UPLOAD_KINDS {
            assert!(!kind.extensions.is_empty(), "{}", kind.label);
        }
    }
}
