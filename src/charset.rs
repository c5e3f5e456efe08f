use std::collections::BTreeSet;
use std::fmt;

pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";

// Symbol tiers are strictly cumulative: SAFE < MORE < FULL.
pub const TIER1_SYMBOLS: &str = "!@#$%^&*-_";
pub const TIER2_SYMBOLS: &str = "+.=?~(){}[]";
pub const TIER3_SYMBOLS: &str = "\"'`\\/|:;<>,";

/// An ordered, deduplicated set of characters to sample from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharPool(Vec<char>);

impl CharPool {
    pub fn new(chars: &str) -> Self {
        let mut pool = Self::default();
        pool.extend(chars.chars());
        pool
    }

    pub fn concat(pools: &[&CharPool]) -> Self {
        let mut pool = Self::default();
        for other in pools {
            pool.extend(other.0.iter().copied());
        }
        pool
    }

    fn extend(&mut self, chars: impl IntoIterator<Item = char>) {
        for ch in chars {
            if !self.0.contains(&ch) {
                self.0.push(ch);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    pub fn is_subset_of(&self, other: &CharPool) -> bool {
        self.0.iter().all(|&ch| other.contains(ch))
    }

    pub fn filter(&self, keep: impl Fn(char) -> bool) -> Self {
        Self(self.0.iter().copied().filter(|&ch| keep(ch)).collect())
    }
}

impl fmt::Display for CharPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.0 {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

pub fn upper() -> CharPool {
    CharPool::new(UPPER)
}

pub fn lower() -> CharPool {
    CharPool::new(LOWER)
}

pub fn digits() -> CharPool {
    CharPool::new(DIGITS)
}

pub fn symbols_safe() -> CharPool {
    CharPool::new(TIER1_SYMBOLS)
}

pub fn symbols_more() -> CharPool {
    CharPool::concat(&[&symbols_safe(), &CharPool::new(TIER2_SYMBOLS)])
}

pub fn symbols_full() -> CharPool {
    CharPool::concat(&[&symbols_more(), &CharPool::new(TIER3_SYMBOLS)])
}

/// Printable ASCII, codes 33 through 126.
pub fn full_ascii() -> CharPool {
    CharPool((33u8..=126).map(char::from).collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

pub fn char_class(ch: char) -> CharClass {
    match ch {
        'A'..='Z' => CharClass::Upper,
        'a'..='z' => CharClass::Lower,
        '0'..='9' => CharClass::Digit,
        _ => CharClass::Symbol,
    }
}

/// One toggle of the custom generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Charset {
    Upper,
    Lower,
    Digits,
    Safe,
    More,
    Full,
}

impl Charset {
    pub const ALL: [Charset; 6] = [
        Charset::Upper,
        Charset::Lower,
        Charset::Digits,
        Charset::Safe,
        Charset::More,
        Charset::Full,
    ];

    const SYMBOL_TIERS: [Charset; 3] = [Charset::Safe, Charset::More, Charset::Full];

    pub fn pool(self) -> CharPool {
        match self {
            Charset::Upper => upper(),
            Charset::Lower => lower(),
            Charset::Digits => digits(),
            Charset::Safe => symbols_safe(),
            Charset::More => symbols_more(),
            Charset::Full => symbols_full(),
        }
    }

    fn tier(self) -> Option<usize> {
        Self::SYMBOL_TIERS.iter().position(|&c| c == self)
    }
}

/// Enabled toggles of the custom generator. Symbol tiers stay cumulative and
/// at least one toggle is always enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetSelection {
    enabled: BTreeSet<Charset>,
}

impl Default for CharsetSelection {
    fn default() -> Self {
        Self::from_iter([Charset::Upper, Charset::Lower, Charset::Digits, Charset::Safe])
    }
}

impl FromIterator<Charset> for CharsetSelection {
    fn from_iter<I: IntoIterator<Item = Charset>>(iter: I) -> Self {
        let mut selection = Self {
            enabled: BTreeSet::new(),
        };
        for charset in iter {
            selection.enable(charset);
        }
        selection
    }
}

impl CharsetSelection {
    pub fn enable(&mut self, charset: Charset) {
        self.enabled.insert(charset);
        if let Some(tier) = charset.tier() {
            for &lower in &Charset::SYMBOL_TIERS[..tier] {
                self.enabled.insert(lower);
            }
        }
    }

    /// Returns false, leaving the selection unchanged, when `charset` is the
    /// only enabled toggle.
    pub fn disable(&mut self, charset: Charset) -> bool {
        if !self.enabled.contains(&charset) {
            return true;
        }
        if self.enabled.len() <= 1 {
            return false;
        }

        self.enabled.remove(&charset);
        if let Some(tier) = charset.tier() {
            for higher in &Charset::SYMBOL_TIERS[tier + 1..] {
                self.enabled.remove(higher);
            }
        }
        true
    }

    pub fn is_enabled(&self, charset: Charset) -> bool {
        self.enabled.contains(&charset)
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled.len()
    }

    /// Deduplicated union of every enabled toggle.
    pub fn pool(&self) -> CharPool {
        let pools: Vec<CharPool> = self.enabled.iter().map(|c| c.pool()).collect();
        let refs: Vec<&CharPool> = pools.iter().collect();
        CharPool::concat(&refs)
    }
}
