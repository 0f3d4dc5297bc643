//! Upload intake form state.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Sports offered by the intake form as `(query value, label)`.
pub const SPORTS: &[(&str, &str)] = &[
    ("general", "General"),
    ("soccer", "Soccer"),
    ("basketball", "Basketball"),
    ("tennis", "Tennis"),
    ("running", "Running"),
    ("weightlifting", "Weightlifting"),
];

/// Container formats the backend decoder accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv"];

/// `accept` attribute for the file input.
pub const ACCEPT_ATTR: &str = "video/mp4,video/quicktime,video/x-msvideo,video/x-matroska,.mp4,.mov,.avi,.mkv";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadState {
    pub sport: String,
    pub file_name: Option<String>,
    pub uploading: bool,
    pub error: Option<String>,
}

impl Default for UploadState {
    fn default() -> Self {
        Self { sport: SPORTS[0].0.to_owned(), file_name: None, uploading: false, error: None }
    }
}

impl UploadState {
    /// Record the chosen file, rejecting unsupported formats.
    pub fn select_file(&mut self, name: &str) -> bool {
        match validate_file_name(name) {
            Ok(()) => {
                self.file_name = Some(name.to_owned());
                self.error = None;
                true
            }
            Err(message) => {
                self.file_name = None;
                self.error = Some(message);
                false
            }
        }
    }

    pub fn select_sport(&mut self, sport: &str) {
        if SPORTS.iter().any(|(value, _)| *value == sport) {
            sport.clone_into(&mut self.sport);
        }
    }

    /// Mark the upload as started. `false` when no file is chosen or one is in flight.
    pub fn begin(&mut self) -> bool {
        if self.uploading || self.file_name.is_none() {
            return false;
        }
        self.uploading = true;
        self.error = None;
        true
    }

    pub fn fail(&mut self, message: String) {
        self.uploading = false;
        self.error = Some(message);
    }
}

/// Check the extension against [`SUPPORTED_EXTENSIONS`].
///
/// # Errors
///
/// Returns a user-facing message for names without a supported extension.
pub fn validate_file_name(name: &str) -> Result<(), String> {
    let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match extension {
        Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(format!("Unsupported file type. Choose one of: {}", SUPPORTED_EXTENSIONS.join(", "))),
    }
}

/// Route of the analysis page for an uploaded video.
pub fn analysis_route(video_id: &str, sport: &str) -> String {
    format!("/analysis/{video_id}?sport={sport}")
}
