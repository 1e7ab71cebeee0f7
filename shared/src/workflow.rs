//! Upload then preprocess: the only multi-step flow of the app.

use crate::error::UploadError;

pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["application/json", "text/json"];
pub const ACCEPTED_EXTENSION: &str = ".json";

/// What the browser tells us about a picked or dropped file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
        }
    }

    /// Browsers leave the MIME type empty for extensions they do not know,
    /// in which case the file name decides.
    pub fn is_accepted(&self) -> bool {
        let mime = self.mime.trim().to_ascii_lowercase();
        if mime.is_empty() {
            return self.name.to_ascii_lowercase().ends_with(ACCEPTED_EXTENSION);
        }
        ACCEPTED_MIME_TYPES.contains(&mime.as_str())
    }
}

/// Checks a drop or picker selection before anything is sent.
pub fn check_upload(files: &[FileMeta]) -> Result<(), UploadError> {
    match files {
        [] => Err(UploadError::NoFile),
        [file] if file.is_accepted() => Ok(()),
        [file] => Err(UploadError::UnsupportedType {
            name: file.name.clone(),
        }),
        many => Err(UploadError::TooManyFiles(many.len())),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    pub uploading: bool,
    pub succeeded: bool,
    /// Set once any upload of this session went through; never cleared.
    pub succeeded_once: bool,
    pub error: Option<String>,
    /// Flips between 0 and 1 on each successful upload so dependants can
    /// tell a new dataset arrived.
    pub reload: u8,
}

impl UploadState {
    pub fn begin(&mut self) {
        self.uploading = true;
        self.succeeded = false;
        self.error = None;
    }

    pub fn record_success(&mut self) {
        self.uploading = false;
        self.succeeded = true;
        self.succeeded_once = true;
        self.error = None;
        self.reload ^= 1;
    }

    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.uploading = false;
        self.succeeded = false;
        self.error = Some(message.into());
    }

    /// Preprocessing works on the last uploaded dataset, so it stays locked
    /// until one made it to the server.
    pub fn can_preprocess(&self) -> bool {
        self.succeeded_once
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreprocessState {
    pub submitting: bool,
    pub processed: bool,
    pub error: Option<String>,
}

impl PreprocessState {
    pub fn begin(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    pub fn record_success(&mut self) {
        self.submitting = false;
        self.processed = true;
        self.error = None;
    }

    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.processed = false;
        self.error = Some(message.into());
    }

    /// A new dataset invalidates the previous preprocessing pass.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_single_json_file_passes() {
        let json = FileMeta::new("capture.json", "application/json");
        let csv = FileMeta::new("capture.csv", "text/csv");
        assert_eq!(check_upload(&[]), Err(UploadError::NoFile));
        assert_eq!(check_upload(std::slice::from_ref(&json)), Ok(()));
        assert_eq!(
            check_upload(&[json.clone(), json.clone()]),
            Err(UploadError::TooManyFiles(2))
        );
        assert_eq!(
            check_upload(&[csv]),
            Err(UploadError::UnsupportedType { name: "capture.csv".into() })
        );
    }

    #[test]
    fn multiple_files_are_rejected_even_if_valid() {
        let files = vec![
            FileMeta::new("a.json", "application/json"),
            FileMeta::new("b.txt", "text/plain"),
            FileMeta::new("c.json", "text/json"),
        ];
        assert_eq!(check_upload(&files), Err(UploadError::TooManyFiles(3)));
    }

    #[test]
    fn mime_wins_over_extension() {
        assert!(FileMeta::new("dump", "text/json").is_accepted());
        assert!(FileMeta::new("DUMP.JSON", "").is_accepted());
        assert!(!FileMeta::new("dump.json", "image/png").is_accepted());
        assert!(!FileMeta::new("dump.txt", "").is_accepted());
    }

    #[test]
    fn upload_outcome_flips_reload_and_unlocks_preprocessing() {
        let mut state = UploadState::default();
        assert!(!state.can_preprocess());

        state.begin();
        state.record_success();
        assert_eq!(state.reload, 1);
        assert!(state.can_preprocess());

        state.begin();
        state.record_failure("Fichier invalide");
        assert!(!state.succeeded);
        assert_eq!(state.error.as_deref(), Some("Fichier invalide"));
        assert!(state.can_preprocess());

        state.begin();
        assert_eq!(state.error, None);
        state.record_success();
        assert_eq!(state.reload, 0);
    }

    #[test]
    fn preprocessing_flag_resets_with_new_dataset() {
        let mut state = PreprocessState::default();
        state.begin();
        state.record_success();
        assert!(state.processed);
        state.reset();
        assert!(!state.processed);
    }
}
