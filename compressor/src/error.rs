use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CompressorError {
    #[error("cannot decode an empty code sequence")]
    EmptyInput,

    #[error("code {code} at position {position} is out of range (dictionary size {dictionary_size})")]
    MalformedCodeReference {
        code: u32,
        position: usize,
        dictionary_size: usize,
    },

    #[error("character unit {unit:#06x} at position {position} has no seed entry")]
    UnseededCharacter { position: usize, unit: u16 },

    #[error("internal invariant violated: {0}")]
    InvariantViolation(&'static str),

    #[error("decoded text is not valid UTF-16")]
    InvalidText,
}
