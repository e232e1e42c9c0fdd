// src/app/update/upload.rs
//! Upload page handlers

use std::path::PathBuf;

use iced::Task;
use tracing::{debug, error, info, warn};

use crate::app::helpers::pick_upload_files;
use crate::app::message::UploadBatch;
use crate::app::{App, Message};
use crate::features::upload_kinds::{UploadAction, action_for_path};

/// Split picked paths into uploadable preset paths and invalid entries
///
/// Paths that are not valid UTF-8 count as invalid but do not stop the scan.
/// Kinds without an upload action are simply skipped.
fn upload_plan(paths: &[PathBuf]) -> (Vec<String>, usize) {
    let mut uploads = Vec::new();
    let mut invalid = 0;
    for path in paths {
        match path.to_str() {
            None => {
                warn!("Invalid file path detected: {}", path.display());
                invalid += 1;
            }
            Some(path_str) => {
                if action_for_path(path) == Some(UploadAction::PresetMetadata) {
                    uploads.push(path_str.to_string());
                }
            }
        }
    }
    (uploads, invalid)
}

/// Status line for a finished upload batch
fn batch_status(batch: &UploadBatch) -> String {
    if batch.error.is_some() {
        "Failed to upload files.".to_string()
    } else if batch.invalid > 0 {
        "Failed to upload some files.".to_string()
    } else {
        "Files uploaded successfully!".to_string()
    }
}

impl App {
    /// Handle upload page messages
    pub fn handle_upload(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UploadTitleChanged(value) => {
                self.ui.upload.title = value.clone();
                Some(Task::none())
            }

            Message::UploadUrlChanged(value) => {
                self.ui.upload.url = value.clone();
                Some(Task::none())
            }

            Message::SubmitSampleUrl => {
                if self.ui.upload.url.is_empty() {
                    self.ui.upload.status = Some("URL is required.".to_string());
                    return Some(Task::none());
                }
                let client = self.core.client.clone();
                let url = self.ui.upload.url.clone();
                // Title falls back to the URL text
                let title = if self.ui.upload.title.is_empty() {
                    url.clone()
                } else {
                    self.ui.upload.title.clone()
                };
                Some(Task::perform(
                    async move { client.upload_sample(&title, &url).await },
                    Message::SampleUploaded,
                ))
            }

            Message::SampleUploaded(result) => {
                match result {
                    Ok(()) => {
                        info!("Sample URL uploaded");
                        self.ui.upload.status =
                            Some("Sample URL uploaded successfully!".to_string());
                        self.ui.upload.title.clear();
                        self.ui.upload.url.clear();
                    }
                    Err(e) => {
                        error!("Failed to upload sample URL: {}", e);
                        self.ui.upload.status = Some("Failed to upload sample URL.".to_string());
                    }
                }
                Some(Task::none())
            }

            Message::PickUploadFiles => Some(Task::perform(
                pick_upload_files(),
                Message::UploadFilesPicked,
            )),

            Message::UploadFilesPicked(files) => {
                if files.is_empty() {
                    debug!("No files selected");
                    return Some(Task::none());
                }
                let (uploads, invalid) = upload_plan(files);
                let client = self.core.client.clone();
                Some(Task::perform(
                    async move {
                        let mut uploaded = 0;
                        for path in &uploads {
                            info!("Uploading preset file: {}", path);
                            if let Err(e) = client.upload_preset(path).await {
                                return UploadBatch {
                                    uploaded,
                                    invalid,
                                    error: Some(e),
                                };
                            }
                            uploaded += 1;
                        }
                        UploadBatch {
                            uploaded,
                            invalid,
                            error: None,
                        }
                    },
                    Message::PresetFilesUploaded,
                ))
            }

            Message::PresetFilesUploaded(batch) => {
                if let Some(e) = &batch.error {
                    error!("Preset upload failed after {} files: {}", batch.uploaded, e);
                }
                self.ui.upload.status = Some(batch_status(batch));
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BridgeError;
    use crate::app::App;

    #[test]
    fn only_preset_files_are_scheduled_for_upload() {
        let paths = vec![PathBuf::from("/tmp/lead.fxp"), PathBuf::from("/tmp/kick.wav")];
        let (uploads, invalid) = upload_plan(&paths);
        assert_eq!(uploads, vec!["/tmp/lead.fxp"]);
        assert_eq!(invalid, 0);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_paths_are_invalid_but_do_not_stop_the_scan() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let bad = PathBuf::from(OsString::from_vec(vec![0x66, 0x6f, 0xff, 0x6f]));
        let paths = vec![bad, PathBuf::from("/tmp/pad.fxp")];
        let (uploads, invalid) = upload_plan(&paths);
        assert_eq!(uploads, vec!["/tmp/pad.fxp"]);
        assert_eq!(invalid, 1);
    }

    #[test]
    fn batch_status_prefers_the_hard_failure() {
        let failed = UploadBatch {
            uploaded: 1,
            invalid: 1,
            error: Some(BridgeError::Backend("boom".into())),
        };
        assert_eq!(batch_status(&failed), "Failed to upload files.");

        let partial = UploadBatch {
            uploaded: 2,
            invalid: 1,
            error: None,
        };
        assert_eq!(batch_status(&partial), "Failed to upload some files.");

        let clean = UploadBatch {
            uploaded: 2,
            invalid: 0,
            error: None,
        };
        assert_eq!(batch_status(&clean), "Files uploaded successfully!");
    }

    #[test]
    fn empty_url_blocks_the_submission() {
        let mut app = App::new().0;
        app.ui.upload.url.clear();
        let _ = app.update(Message::SubmitSampleUrl);
        assert_eq!(app.ui.upload.status.as_deref(), Some("URL is required."));
    }

    #[test]
    fn successful_upload_clears_the_form() {
        let mut app = App::new().0;
        app.ui.upload.title = "Big lead".into();
        app.ui.upload.url = "https://example.com/lead".into();
        let _ = app.update(Message::SampleUploaded(Ok(())));
        assert!(app.ui.upload.title.is_empty());
        assert!(app.ui.upload.url.is_empty());
        assert_eq!(
            app.ui.upload.status.as_deref(),
            Some("Sample URL uploaded successfully!")
        );
    }
}
