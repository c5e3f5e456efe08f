use anyhow::Result;
use blake2::{Blake2b512, Digest};
use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::ChaCha20;
use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

const KEYSTREAM_BUFFER_LEN: usize = 512;

/// A uniformly distributed source of 32-bit words.
pub trait EntropySource {
    fn next_u32(&mut self) -> u32;
}

/// The operating system CSPRNG. Failure to read it aborts the process, there
/// is nothing sensible to generate without it.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_u32(&mut self) -> u32 {
        OsRng.next_u32()
    }
}

/// ChaCha20 keystream under a fixed key. Reproducible, so only for tests and
/// `--seed` demos.
pub struct KeystreamEntropy {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl KeystreamEntropy {
    pub fn new(key: &[u8; 32]) -> Self {
        let cipher = ChaCha20::new(key.into(), &[0u8; 12].into());
        let mut source = Self {
            cipher,
            buffer: Zeroizing::new(vec![0u8; KEYSTREAM_BUFFER_LEN]),
            pos: 0,
        };
        source.refill();
        source
    }

    pub fn from_seed(seed: &[u8]) -> Self {
        let mut hasher = Blake2b512::new();
        hasher.update(seed);
        let digest = hasher.finalize();

        let mut key = Zeroizing::new([0u8; 32]);
        key.copy_from_slice(&digest[..32]);
        Self::new(&key)
    }

    fn refill(&mut self) {
        self.buffer.fill(0);
        self.cipher.apply_keystream(&mut self.buffer);
        self.pos = 0;
    }
}

impl EntropySource for KeystreamEntropy {
    fn next_u32(&mut self) -> u32 {
        if self.pos + 4 > self.buffer.len() {
            self.refill();
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

/// Largest multiple of `max` that fits in the 32-bit draw space. Draws at or
/// above it are rejected so that `draw % max` stays unbiased.
pub fn rejection_limit(max: u64) -> u64 {
    (1u64 << 32) / max * max
}

/// Unbiased integers and permutations over an [`EntropySource`].
pub struct SecureRandom {
    source: Box<dyn EntropySource>,
}

impl SecureRandom {
    pub fn new(source: impl EntropySource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn os() -> Self {
        Self::new(OsEntropy)
    }

    pub fn seeded(seed: &[u8]) -> Self {
        Self::new(KeystreamEntropy::from_seed(seed))
    }

    /// Uniform integer in `[0, max)`. `max` must be in `1..=2^32`.
    pub fn uniform_int(&mut self, max: usize) -> Result<usize> {
        if max == 0 {
            anyhow::bail!("uniform_int: max must be > 0, got {}", max);
        }
        let max = max as u64;
        if max > 1u64 << 32 {
            anyhow::bail!("uniform_int: max {} exceeds the 32-bit draw space", max);
        }

        let limit = rejection_limit(max);
        loop {
            let draw = u64::from(self.source.next_u32());
            if draw < limit {
                return Ok((draw % max) as usize);
            }
        }
    }

    /// True with probability `percent`/100.
    pub fn chance_percent(&mut self, percent: usize) -> Result<bool> {
        Ok(self.uniform_int(100)? < percent)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        let index = self.uniform_int(items.len())?;
        Ok(&items[index])
    }

    /// Fisher-Yates over a copy; the input is left untouched.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Result<Vec<T>> {
        let mut out = items.to_vec();
        for i in (1..out.len()).rev() {
            let j = self.uniform_int(i + 1)?;
            out.swap(i, j);
        }
        Ok(out)
    }
}
