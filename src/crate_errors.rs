use crate::{
    io,
    seed,
};

/// Error-type enum for the `faceseed` crate.
/// Wraps the seeding process and IO error types, plus plain-string errors.
#[derive(Debug)]
pub enum FaceseedError {
    SeedError(seed::SeedError),
    IoError(io::IoError),
    StringOnly(String),
}
impl std::fmt::Display for FaceseedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaceseedError::SeedError(error) => write!(f, "! SEEDING ERROR:\n{}", error),
            FaceseedError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            FaceseedError::StringOnly(error) => write!(f, "! FACESEED ERROR:\n- {}", error),
        }
    }
}
impl From<String> for FaceseedError {
    fn from(error: String) -> Self {
        FaceseedError::StringOnly(error)
    }
}
impl From<seed::SeedError> for FaceseedError {
    fn from(error: seed::SeedError) -> Self {
        FaceseedError::SeedError(error)
    }
}
impl From<io::IoError> for FaceseedError {
    fn from(error: io::IoError) -> Self {
        FaceseedError::IoError(error)
    }
}

/// Result type for the `faceseed` crate.
pub type FaceseedResult<T> = std::result::Result<T, FaceseedError>;

/// Create a `FaceseedResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::FaceseedError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> FaceseedResult<T> {
    Err(FaceseedError::StringOnly(error_str.to_string()))
}
