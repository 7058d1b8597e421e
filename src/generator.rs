use crate::entropy::Entropy;
use crate::error::{Error, ValidationError};
use crate::sequence::{has_cyrillic, has_digit, invalid_characters};
use crate::syllable::{BLOCK_LEN, DIGITS, LOWERCASE, syllable_block};
use crate::Result;
use zeroize::Zeroizing;

pub const MIN_LENGTH: i64 = 8;
pub const MAX_LENGTH: i64 = 32;

pub const SEPARATOR: char = '-';

const AUTOMATIC_BLOCKS: usize = 3;
const CUSTOM_BLOCKS: usize = 6;

/// Length of every automatic password: three blocks and two separators.
pub const AUTOMATIC_LENGTH: usize = AUTOMATIC_BLOCKS * BLOCK_LEN + AUTOMATIC_BLOCKS - 1;

/// What the caller asked for.
#[derive(Clone)]
pub enum GenerationRequest {
    Automatic,
    Custom {
        length: i64,
        mnemonic: Zeroizing<String>,
    },
}

impl GenerationRequest {
    pub fn generate<E: Entropy>(&self, entropy: &mut E) -> Result<Zeroizing<String>> {
        match self {
            GenerationRequest::Automatic => Ok(AutomaticGenerator::new().generate(entropy)),
            GenerationRequest::Custom { length, mnemonic } => {
                CustomGenerator::new(*length, mnemonic.as_str()).generate(entropy)
            }
        }
    }
}

/// Joins three syllable blocks into a 20 character password.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutomaticGenerator {
    _private: (),
}

impl AutomaticGenerator {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Accepts the caller's mode flag; anything but an explicit selection
    /// fails with [`Error::InvalidMode`].
    pub fn from_selection(selected: bool) -> Result<Self> {
        if !selected {
            return Err(Error::InvalidMode);
        }
        Ok(Self::new())
    }

    pub fn generate<E: Entropy>(&self, entropy: &mut E) -> Zeroizing<String> {
        let mut password = Zeroizing::new(String::with_capacity(AUTOMATIC_LENGTH));

        for i in 0..AUTOMATIC_BLOCKS {
            if i > 0 {
                password.push(SEPARATOR);
            }
            password.push_str(&syllable_block(entropy));
        }

        tracing::debug!(length = password.len(), "automatic password generated");
        password
    }
}

/// Builds a password of an exact length that starts with the user's mnemonic.
pub struct CustomGenerator {
    length: i64,
    mnemonic: Zeroizing<String>,
}

impl CustomGenerator {
    pub fn new(length: i64, mnemonic: &str) -> Self {
        Self {
            length,
            mnemonic: Zeroizing::new(mnemonic.to_owned()),
        }
    }

    /// Requested length minus the mnemonic length, counted in characters.
    pub fn remaining_length(&self) -> i64 {
        self.length - self.mnemonic.chars().count() as i64
    }

    /// Runs the checks in order and stops at the first failure.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(ValidationError::LengthOutOfRange(self.length));
        }

        if self.remaining_length() < 0 {
            return Err(ValidationError::SequenceTooLong);
        }

        if has_cyrillic(&self.mnemonic) {
            return Err(ValidationError::CyrillicSequence);
        }

        let invalid = invalid_characters(&self.mnemonic);
        if !invalid.is_empty() {
            return Err(ValidationError::InvalidCharacters(invalid));
        }

        Ok(())
    }

    pub fn generate<E: Entropy>(&self, entropy: &mut E) -> Result<Zeroizing<String>> {
        if let Err(e) = self.validate() {
            tracing::warn!(length = self.length, error = %e, "custom input rejected");
            return Err(e.into());
        }

        let length = self.length as usize;
        let remaining = self.remaining_length();

        let mut password = Zeroizing::new(String::with_capacity(
            self.mnemonic.len() + CUSTOM_BLOCKS * (BLOCK_LEN + 1),
        ));
        password.push_str(&self.mnemonic);

        match remaining {
            0 => {}
            1 => password.push(entropy.pick(DIGITS)),
            2 => {
                password.push(entropy.pick(LOWERCASE));
                password.push(entropy.pick(DIGITS));
            }
            3 => {
                password.push(SEPARATOR);
                password.push(entropy.pick(LOWERCASE));
                password.push(entropy.pick(DIGITS));
            }
            _ => {
                for _ in 0..CUSTOM_BLOCKS {
                    password.push(SEPARATOR);
                    password.push_str(&syllable_block(entropy));
                }
                truncate_chars(&mut password, length);
            }
        }

        ensure_digit(&mut password, entropy);

        tracing::debug!(length, remaining, "custom password generated");
        Ok(password)
    }
}

/// Generates a password in automatic mode.
pub fn generate_automatic_password<E: Entropy>(entropy: &mut E) -> Zeroizing<String> {
    AutomaticGenerator::new().generate(entropy)
}

/// Generates a password of `length` characters prefixed by `mnemonic`.
pub fn generate_custom_password<E: Entropy>(
    length: i64,
    mnemonic: &str,
    entropy: &mut E,
) -> Result<Zeroizing<String>> {
    CustomGenerator::new(length, mnemonic).generate(entropy)
}

fn truncate_chars(s: &mut String, max_chars: usize) {
    if let Some((index, _)) = s.char_indices().nth(max_chars) {
        s.truncate(index);
    }
}

/// Swaps the last character for a digit when none is present.
fn ensure_digit<E: Entropy>(password: &mut String, entropy: &mut E) {
    if has_digit(password) {
        return;
    }
    password.pop();
    password.push(entropy.pick(DIGITS));
}
