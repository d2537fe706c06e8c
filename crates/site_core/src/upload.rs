use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{NotificationSink, Severity};

pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

pub const ALLOWED_RESUME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Reference to a file chosen in the picker or dropped on the upload area.
/// Contents stay with the browser; only metadata is held here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("File size must be less than 5MB")]
    TooLarge,
    #[error("Please upload a PDF, DOC, or DOCX file")]
    UnsupportedType,
}

/// Size is checked before type, so oversized files are always `TooLarge`.
pub fn check_resume(file: &ResumeFile) -> Result<(), UploadRejection> {
    if file.size_bytes > MAX_RESUME_BYTES {
        return Err(UploadRejection::TooLarge);
    }
    if !ALLOWED_RESUME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(UploadRejection::UnsupportedType);
    }
    Ok(())
}

/// Read access to the currently accepted resume.
pub trait UploadTarget {
    fn selected_resume(&self) -> Option<&ResumeFile>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResumeUpload {
    file: Option<ResumeFile>,
    highlighted: bool,
}

impl ResumeUpload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picker change. `None` means the dialog was cancelled or cleared.
    pub fn select(
        &mut self,
        file: Option<ResumeFile>,
        sink: &mut dyn NotificationSink,
    ) -> Result<(), UploadRejection> {
        let Some(file) = file else {
            self.file = None;
            return Ok(());
        };

        match check_resume(&file) {
            Ok(()) => {
                self.file = Some(file);
                Ok(())
            }
            Err(rejection) => {
                self.file = None;
                sink.notify(&rejection.to_string(), Severity::Error);
                Err(rejection)
            }
        }
    }

    pub fn drag_over(&mut self) {
        self.highlighted = true;
    }

    pub fn drag_leave(&mut self) {
        self.highlighted = false;
    }

    /// Drop on the upload area. The first file goes through the same checks
    /// as the picker; an empty drop only clears the highlight.
    pub fn drop_files(
        &mut self,
        files: Vec<ResumeFile>,
        sink: &mut dyn NotificationSink,
    ) -> Option<Result<(), UploadRejection>> {
        self.highlighted = false;
        let first = files.into_iter().next()?;
        Some(self.select(Some(first), sink))
    }

    pub fn reset(&mut self) {
        self.file = None;
        self.highlighted = false;
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|file| file.name.as_str())
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

impl UploadTarget for ResumeUpload {
    fn selected_resume(&self) -> Option<&ResumeFile> {
        self.file.as_ref()
    }
}
