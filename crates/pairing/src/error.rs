//! Error types for setup code generation, URI encoding and input validation.

/// Caller input that does not satisfy a pairing format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("category must be a positive number")]
    NonPositiveCategory,

    #[error("invalid category ID: {0}. Use 'list-categories' to see available categories")]
    UnknownCategory(i64),

    #[error("category {0} does not fit in 8 bits")]
    CategoryOutOfRange(u32),

    #[error("invalid password length ({0}). Expected format: XXX-XX-XXX (e.g., 613-80-755)")]
    PasswordLength(usize),

    #[error("invalid password format. Expected format: XXX-XX-XXX (e.g., 613-80-755)")]
    PasswordFormat,

    #[error("invalid setup ID length ({0}). Expected 4 alphanumeric characters (0-9, A-Z)")]
    SetupIdLength(usize),

    #[error(
        "invalid character '{ch}' at position {position}. Setup ID must contain only 0-9 and A-Z"
    )]
    SetupIdChar { ch: char, position: usize },

    #[error(
        "invalid MAC address length ({0}). Expected 12 hexadecimal characters (e.g., 30AEA40506A0)"
    )]
    MacLength(usize),

    #[error(
        "invalid character '{ch}' at position {position}. MAC address must contain only hexadecimal characters (0-9, A-F)"
    )]
    MacChar { ch: char, position: usize },

    #[error("output path cannot be empty")]
    EmptyOutputPath,

    #[error("output file must have .png extension")]
    OutputExtension,
}

#[derive(Debug, thiserror::Error)]
pub enum PairingError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("no acceptable setup code after {attempts} attempts (entropy source exhausted)")]
    EntropyExhausted { attempts: u32 },

    #[error("malformed pairing URI: {0}")]
    MalformedUri(String),
}
