use crate::charset::CharPool;
use crate::random::SecureRandom;
use anyhow::Result;
use zeroize::Zeroizing;

pub const MAX_PATTERN_ATTEMPTS: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Constraints {
    pub starts_with_letter: bool,
    pub no_double_consecutive: bool,
    pub no_triple_consecutive: bool,
    pub no_sequential_run: bool,
}

impl Constraints {
    pub const NONE: Self = Self {
        starts_with_letter: false,
        no_double_consecutive: false,
        no_triple_consecutive: false,
        no_sequential_run: false,
    };

    pub fn is_satisfied_by(&self, password: &[char]) -> bool {
        if self.starts_with_letter && !password.first().is_some_and(|c| c.is_ascii_alphabetic()) {
            return false;
        }
        if self.no_triple_consecutive && has_consecutive(password, 3) {
            return false;
        }
        if self.no_double_consecutive && has_consecutive(password, 2) {
            return false;
        }
        if self.no_sequential_run && has_sequential_run(password) {
            return false;
        }
        true
    }
}

/// True if `count` identical characters sit next to each other anywhere.
pub fn has_consecutive(chars: &[char], count: usize) -> bool {
    if count == 0 {
        return false;
    }
    chars
        .windows(count)
        .any(|w| w.iter().all(|&c| c == w[0]))
}

/// True for three consecutive code points ascending or descending by one,
/// e.g. `abc`, `cba`, `789`.
pub fn has_sequential_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        let (a, b, c) = (w[0] as i64, w[1] as i64, w[2] as i64);
        (b - a == 1 && c - b == 1) || (a - b == 1 && b - c == 1)
    })
}

/// Builds a password of exactly `length` characters from `pool`, with at
/// least one character from every requirement pool.
///
/// Each attempt draws one character per requirement, pads from `pool`, then
/// shuffles. Attempts that break `constraints` are retried up to
/// [`MAX_PATTERN_ATTEMPTS`] times; after that the last attempt is returned
/// as is. For the shipped presets the odds of reaching the fallback are
/// around 10^-80.
pub fn generate_from_pool(
    rng: &mut SecureRandom,
    length: usize,
    pool: &CharPool,
    requirements: &[CharPool],
    constraints: Constraints,
) -> Result<Zeroizing<String>> {
    if pool.is_empty() {
        anyhow::bail!("Sampling pool cannot be empty");
    }
    if requirements.len() > length {
        anyhow::bail!(
            "{} required character classes do not fit in length {}",
            requirements.len(),
            length
        );
    }
    for (i, required) in requirements.iter().enumerate() {
        anyhow::ensure!(!required.is_empty(), "Requirement pool {} is empty", i);
        anyhow::ensure!(
            required.is_subset_of(pool),
            "Requirement pool {} is not part of the sampling pool",
            i
        );
    }

    let mut chars: Zeroizing<Vec<char>> = Zeroizing::new(Vec::with_capacity(length));

    for _ in 0..MAX_PATTERN_ATTEMPTS {
        let mut draft: Zeroizing<Vec<char>> = Zeroizing::new(Vec::with_capacity(length));

        for required in requirements {
            draft.push(*rng.pick(required.as_slice())?);
        }
        while draft.len() < length {
            draft.push(*rng.pick(pool.as_slice())?);
        }

        chars = Zeroizing::new(rng.shuffle(&draft)?);

        if constraints.is_satisfied_by(&chars) {
            return Ok(Zeroizing::new(chars.iter().collect()));
        }
    }

    log::warn!(
        "No candidate met the constraints after {} attempts; returning the last one",
        MAX_PATTERN_ATTEMPTS
    );
    Ok(Zeroizing::new(chars.iter().collect()))
}
