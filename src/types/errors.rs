use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("Project parse error: {0}")]
    Parse(String),
    #[error("Invalid package: {0}")]
    Format(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Operation in progress. Please wait.")]
    Busy,
}

impl From<std::io::Error> for PackError {
    fn from(error: std::io::Error) -> Self {
        PackError::Io(error.to_string())
    }
}

impl From<zip::result::ZipError> for PackError {
    fn from(error: zip::result::ZipError) -> Self {
        use zip::result::ZipError;
        match error {
            ZipError::InvalidArchive(_) | ZipError::UnsupportedArchive(_) => {
                PackError::Format(error.to_string())
            }
            ZipError::Io(e) => PackError::Io(e.to_string()),
            other => PackError::Io(other.to_string()),
        }
    }
}

impl Serialize for PackError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type PackResult<T> = Result<T, PackError>;
