use serde::{Deserialize, Serialize};

/// How much of a step's physical duration the user actually experiences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeCategory {
    Perceived,
    PartiallyPerceived,
    NonPerceived,
    ToolOverhead,
    Diagnostic,
}

impl TimeCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Perceived => "Perceived",
            Self::PartiallyPerceived => "Partially Perceived",
            Self::NonPerceived => "Non-Perceived",
            Self::ToolOverhead => "Tool Overhead",
            Self::Diagnostic => "Diagnostic",
        }
    }

    /// Instrumentation categories carry no user-facing expectation and are
    /// skipped when building the expected-time baseline.
    pub const fn is_instrumentation(self) -> bool {
        matches!(self, Self::ToolOverhead | Self::Diagnostic)
    }
}

/// Cognitive complexity of a step. Unrecognized values degrade to
/// [`Complexity::Unknown`] with neutral multipliers instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Complexity {
    Low,
    Medium,
    High,
    Unknown,
}

impl From<String> for Complexity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }
}

impl Complexity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }

    /// Multiplier applied to a persona's baseline think time. Harder steps
    /// need more cognitive processing before the user acts.
    pub const fn think_time_factor(self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 1.2,
            Self::High => 1.5,
            Self::Unknown => 1.0,
        }
    }

    /// Multiplier for broken flow and distraction while waiting.
    pub const fn attention_loss_factor(self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 1.3,
            Self::High => 1.8,
            Self::Unknown => 1.0,
        }
    }

    /// Time (ms) a step of this complexity is expected to take, think time
    /// and system response combined. Unknown falls back to the medium tier.
    pub const fn expected_time_ms(self) -> f64 {
        match self {
            Self::Low => 1000.0,
            Self::Medium => 3000.0,
            Self::High => 6000.0,
            Self::Unknown => 3000.0,
        }
    }
}

/// One observed UI action from a recorded test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    pub name: String,
    /// Raw physical elapsed time in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: f64,
    pub category: TimeCategory,
    pub complexity: Complexity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
}
