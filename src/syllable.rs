use crate::entropy::Entropy;

/// Vowels, `y` included.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Consonants, `y` excluded.
pub const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'z',
];

pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub const LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub const BLOCK_LEN: usize = 6;

/// Builds one six character block shaped `CVCCVC`.
///
/// One position is upper-cased, then a digit overwrites either the first or
/// the last position. The digit is written last, so when it lands on the
/// upper-cased letter the block carries no capital.
pub fn syllable_block<E: Entropy>(entropy: &mut E) -> String {
    let mut block = ['\0'; BLOCK_LEN];

    for (index, slot) in block.iter_mut().enumerate() {
        *slot = if index % 3 == 1 {
            entropy.pick(VOWELS)
        } else {
            entropy.pick(CONSONANTS)
        };
    }

    let upper = entropy.below(BLOCK_LEN);
    block[upper] = block[upper].to_ascii_uppercase();

    let digit = entropy.pick(DIGITS);
    let edge = if entropy.coin() { 0 } else { BLOCK_LEN - 1 };
    block[edge] = digit;

    block.iter().collect()
}
