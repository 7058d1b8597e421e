use blake2::{Blake2b512, Digest};
use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use rand::Rng;
use rand::rngs::ThreadRng;
use zeroize::Zeroizing;

const KEY_LEN: usize = 32;
const BUFFER_LEN: usize = 512;

/// Source of uniformly distributed choices.
///
/// Every random decision made while building a password goes through this
/// trait, so a seeded [`Keystream`] reproduces the exact same output.
pub trait Entropy {
    /// Uniform index in `0..bound`. Panics when `bound` is zero.
    fn below(&mut self, bound: usize) -> usize;

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.below(items.len())]
    }

    fn coin(&mut self) -> bool {
        self.below(2) == 0
    }
}

/// Thread-local CSPRNG from `rand`.
pub struct SystemEntropy(ThreadRng);

impl Default for SystemEntropy {
    fn default() -> Self {
        Self(rand::thread_rng())
    }
}

impl Entropy for SystemEntropy {
    fn below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "cannot pick from an empty range");
        self.0.gen_range(0..bound)
    }
}

/// Deterministic ChaCha20 keystream keyed from a seed phrase.
pub struct Keystream {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl Keystream {
    pub fn from_key(key: &[u8; KEY_LEN]) -> Self {
        let mut cipher = ChaCha20::new(key.into(), &[0u8; 12].into());
        let mut buffer = Zeroizing::new(vec![0u8; BUFFER_LEN]);
        cipher.apply_keystream(&mut buffer);

        Self {
            cipher,
            buffer,
            pos: 0,
        }
    }

    /// The key is the first 32 bytes of BLAKE2b-512 over the seed.
    pub fn from_seed(seed: &str) -> Self {
        let mut hasher = Blake2b512::new();
        hasher.update(seed.as_bytes());
        let digest = hasher.finalize();

        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        key.copy_from_slice(&digest[..KEY_LEN]);

        Self::from_key(&key)
    }

    fn next_u32(&mut self) -> u32 {
        if self.pos + 4 > self.buffer.len() {
            self.buffer.fill(0);
            self.cipher.apply_keystream(&mut self.buffer);
            self.pos = 0;
        }

        let word = u32::from_le_bytes([
            self.buffer[self.pos],
            self.buffer[self.pos + 1],
            self.buffer[self.pos + 2],
            self.buffer[self.pos + 3],
        ]);
        self.pos += 4;
        word
    }
}

impl Entropy for Keystream {
    fn below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "cannot pick from an empty range");
        let bound = bound as u64;
        let space = 1u64 << 32;
        assert!(bound <= space, "bound exceeds 32 bits");

        let rejection_threshold = space - (space % bound);

        loop {
            let random_u32 = self.next_u32() as u64;
            if random_u32 < rejection_threshold {
                return (random_u32 % bound) as usize;
            }
        }
    }
}

/// Replays a fixed list of picks; panics when a pick is out of range.
#[cfg(test)]
pub(crate) struct Script(std::collections::VecDeque<usize>);

#[cfg(test)]
impl Script {
    pub(crate) fn new(picks: &[usize]) -> Self {
        Self(picks.iter().copied().collect())
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
impl Entropy for Script {
    fn below(&mut self, bound: usize) -> usize {
        let pick = self.0.pop_front().expect("script exhausted");
        assert!(pick < bound, "scripted pick {} out of range 0..{}", pick, bound);
        pick
    }
}
