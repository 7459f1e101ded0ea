use thiserror::Error;

#[derive(Error, Debug)]
pub enum PawCareError {
    #[error("Unsupported pet type: '{0}' (expected one of: dog, cat)")]
    UnsupportedPetType(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD or RFC 3339")]
    InvalidDate(String),
}
