use std::fmt;

/// Offline attack on a fast hash with a GPU rig. Online throttling is not
/// modelled.
pub const GUESSES_PER_SECOND: f64 = 1e10;

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_YEAR: f64 = SECONDS_PER_DAY * 365.0;
const BEYOND_UNIVERSE: &str = "longer than the age of the universe";

/// `round(length * log2(pool_size))`, zero when either input is zero.
pub fn entropy_bits(length: usize, pool_size: usize) -> u32 {
    if length == 0 || pool_size == 0 {
        return 0;
    }
    (length as f64 * (pool_size as f64).log2()).round() as u32
}

/// Seconds to exhaust `2^bits` guesses. Infinite once the power overflows.
pub fn crack_seconds(bits: u32) -> f64 {
    2f64.powf(f64::from(bits)) / GUESSES_PER_SECOND
}

pub fn format_crack_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return BEYOND_UNIVERSE.to_string();
    }
    if seconds < 1.0 {
        return "instant".to_string();
    }
    if seconds < 60.0 {
        return format!("~{} seconds", seconds.round());
    }
    if seconds < 3600.0 {
        return format!("~{} minutes", (seconds / 60.0).round());
    }
    if seconds < SECONDS_PER_DAY {
        return format!("~{} hours", (seconds / 3600.0).round());
    }
    if seconds < SECONDS_PER_YEAR {
        return format!("~{} days", (seconds / SECONDS_PER_DAY).round());
    }

    let years = seconds / SECONDS_PER_YEAR;
    let buckets = [
        (1e3, 1.0, "years"),
        (1e6, 1e3, "thousand years"),
        (1e9, 1e6, "million years"),
        (1e12, 1e9, "billion years"),
        (1e15, 1e12, "trillion years"),
    ];
    for (limit, unit, label) in buckets {
        if years < limit {
            return format!("~{} {}", (years / unit).round(), label);
        }
    }
    BEYOND_UNIVERSE.to_string()
}

/// Strength of one generated password.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub bits: u32,
    pub crack_time: String,
}

impl Estimate {
    pub fn from_bits(bits: u32) -> Self {
        Self {
            bits,
            crack_time: format_crack_time(crack_seconds(bits)),
        }
    }

    /// `None` for an empty pool or zero length.
    pub fn for_pool(length: usize, pool_size: usize) -> Option<Self> {
        if length == 0 || pool_size == 0 {
            return None;
        }
        Some(Self::from_bits(entropy_bits(length, pool_size)))
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "~{} bits \u{00B7} 10B guesses/s = {} (offline GPU attack)",
            self.bits, self.crack_time
        )
    }
}
