use serde::{Deserialize, Serialize};

/// Qualitative grade for a whole trace, derived from the ratio of the
/// accumulated pain score to the persona's expected time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "Excellent (S)")]
    Excellent,
    #[serde(rename = "Good (A)")]
    Good,
    #[serde(rename = "Fair (B)")]
    Fair,
    #[serde(rename = "Poor (C)")]
    Poor,
}

impl Grade {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent (S)",
            Self::Good => "Good (A)",
            Self::Fair => "Fair (B)",
            Self::Poor => "Poor (C)",
        }
    }

    /// Classifies a pain total against the expected-time baseline.
    ///
    /// When `expected_ms` is zero or negative (every step was instrumentation,
    /// or the expectation bias zeroed the baseline) the ratio is undefined;
    /// the grade is then `Excellent` if the pain total is also zero or
    /// negative, `Poor` otherwise.
    pub fn classify(pain_ms: i64, expected_ms: f64) -> Self {
        if expected_ms <= 0.0 {
            return if pain_ms <= 0 {
                Self::Excellent
            } else {
                Self::Poor
            };
        }

        let ratio = pain_ms as f64 / expected_ms;
        if ratio <= 0.8 {
            Self::Excellent
        } else if ratio <= 1.2 {
            Self::Good
        } else if ratio <= 1.5 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}
