pub mod entropy;
pub mod error;
pub mod generator;
pub mod sequence;
pub mod syllable;

pub use entropy::{Entropy, Keystream, SystemEntropy};
pub use error::{Error, ValidationError};
pub use generator::{
    AutomaticGenerator, CustomGenerator, GenerationRequest, generate_automatic_password,
    generate_custom_password,
};
pub use sequence::{has_digit, invalid_characters};
pub use syllable::syllable_block;

pub type Result<T> = std::result::Result<T, Error>;
