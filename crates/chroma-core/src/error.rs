use thiserror::Error;

pub type ColorResult<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Error)]
pub enum ColorError {
    /// The input string does not match the grammar of the chosen format.
    #[error("invalid color value: {0}")]
    InvalidFormat(String),

    /// A format tag outside the supported set was requested.
    #[error("unsupported color format: {0}")]
    UnsupportedFormat(String),
}
