use crate::sequence::render_char_list;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Automatic generation was requested without selecting automatic mode.
    #[error("class improperly initialized")]
    InvalidMode,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Rejected custom input. The messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("password length must be in the interval 8 to 32")]
    LengthOutOfRange(i64),

    #[error("entered sequence length exceeds total password length")]
    SequenceTooLong,

    #[error("sequence containing Cyrillic characters is not permitted")]
    CyrillicSequence,

    #[error("{} - invalid characters in sequence.", render_char_list(.0))]
    InvalidCharacters(Vec<char>),
}
