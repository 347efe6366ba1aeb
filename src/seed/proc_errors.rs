use crate::geo_3d::FaceError;
use crate::io::IoError;

/// Seeding process error type.
#[derive(Debug)]
pub enum SeedError {
    /// Face construction error.
    FaceError(FaceError),
    /// IO error.
    IoError(IoError),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::FaceError(error) => write!(f, "Face Error:\n{}", error),
            SeedError::IoError(error) => write!(f, "IO Error:\n{}", error),
            SeedError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<FaceError> for SeedError {
    fn from(error: FaceError) -> Self {
        SeedError::FaceError(error)
    }
}
impl From<IoError> for SeedError {
    fn from(error: IoError) -> Self {
        SeedError::IoError(error)
    }
}
impl From<String> for SeedError {
    fn from(error: String) -> Self {
        SeedError::StringOnly(error)
    }
}

/// Result type for the seeding process.
pub type ProcResult<T> = std::result::Result<T, SeedError>;

/// Create a `SeedError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(SeedError::StringOnly(error_str.to_string()))
}
