//! Number formatting
use std::fmt;

/// Float that switches to exponent notation when very large or very small.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Compact(pub f64);

impl fmt::Display for Compact {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let magnitude = self.0.abs();
        if magnitude != 0.0 && !(1e-4..1e6).contains(&magnitude) {
            fmt::LowerExp::fmt(&self.0, f)
        } else {
            fmt::Display::fmt(&self.0, f)
        }
    }
}

/// Events per second, with a metric prefix.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Rate(pub f64);

impl Rate {
    /// Rate of `count` events over `seconds`.
    pub fn new(count: u64, seconds: f64) -> Self {
        Self(count as f64 / seconds)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (scaled, prefix) = match self.0 {
            r if r >= 1e6 => (r / 1e6, "M"),
            r if r >= 1e3 => (r / 1e3, "k"),
            r => (r, ""),
        };
        fmt::Display::fmt(&Compact(scaled), f)?;
        write!(f, " {}/s", prefix)
    }
}
