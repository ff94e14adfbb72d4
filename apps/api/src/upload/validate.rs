use thiserror::Error;

/// Size ceiling for uploads. The check is strictly-greater, so a file of
/// exactly 10 MiB passes.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// One file as received at the upload boundary. Only the name, declared
/// type and size matter — the bytes themselves are never inspected.
#[derive(Debug, Clone)]
pub struct IncomingUpload {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid file type: Please upload a PDF file only.")]
    InvalidFileType,

    #[error("File too large: Please upload a file smaller than 10MB.")]
    FileTooLarge,

    #[error("No file provided: Attach one PDF file to analyze.")]
    MissingFile,
}

/// Type is checked before size, so an oversized non-PDF reports the type
/// mismatch first.
pub fn validate(upload: &IncomingUpload) -> Result<(), ValidationError> {
    if upload.file_name.is_empty() {
        return Err(ValidationError::MissingFile);
    }
    if upload.content_type != PDF_CONTENT_TYPE {
        return Err(ValidationError::InvalidFileType);
    }
    if upload.size_bytes > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    Ok(())
}
