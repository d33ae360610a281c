//! Persona resolution: turns a loose descriptor (preset id, key, or partial
//! numeric override) into a complete [`PersonaConfig`].
//!
//! When mapping a natural-language persona description onto parameters:
//!
//! - `human_think_time_ms` tracks cognitive speed: experts 500-1000 ms,
//!   average users around 1500 ms, novices 2000-3000 ms.
//! - `persona_factor` tracks patience and mood: grumpy/impatient 1.2-1.5,
//!   neutral 1.0, patient/forgiving 0.6-0.9. Above 1.0 amplifies pain.
//! - `expectation_bias` tracks performance standards: demanding 0.6-0.8
//!   (expects faster than baseline), standard 1.0, lenient 1.2-1.5.

mod presets;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Numeric model of a hypothetical user. Built once per evaluation and
/// treated as immutable input afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaConfig {
    pub id: String,
    pub name: String,
    /// Baseline cognitive-processing time (ms) added per step.
    pub human_think_time_ms: f64,
    /// Delay sensitivity. Above 1.0 amplifies pain, below 1.0 dampens it.
    pub persona_factor: f64,
    /// Expectation baseline adjustment. Below 1.0 expects faster than
    /// the standard per-complexity times.
    pub expectation_bias: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial persona override. Set fields beat the default preset, unset
/// fields keep the default's value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaOverrides {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub human_think_time_ms: Option<f64>,
    #[serde(default)]
    pub persona_factor: Option<f64>,
    #[serde(default)]
    pub expectation_bias: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Heterogeneous persona descriptor accepted at the boundary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PersonaInput {
    /// Preset id (`"xiao_fang"`) or preset key (`"XIAO_FANG"`, any case).
    Preset(String),
    /// Partial or full config merged onto the default preset.
    Overrides(PersonaOverrides),
}

/// Resolves any persona descriptor into a complete config. Total: unknown
/// preset ids fall back to the default preset with a logged notice, and
/// numeric values are taken as-is without range validation.
pub fn resolve_persona(input: PersonaInput) -> PersonaConfig {
    match input {
        PersonaInput::Preset(id) => {
            if let Some(preset) = presets::find(&id) {
                debug!(preset = preset.key, "resolved persona preset");
                return preset.to_config();
            }
            let fallback = presets::default_preset();
            warn!(
                input = %id,
                fallback = fallback.key,
                "persona preset not found, falling back to default"
            );
            fallback.to_config()
        }
        PersonaInput::Overrides(overrides) => {
            debug!("resolving custom persona from overrides");
            let default = presets::default_preset();
            PersonaConfig {
                id: overrides.id.unwrap_or_else(|| "custom_persona".to_string()),
                name: overrides.name.unwrap_or_else(|| "Custom Persona".to_string()),
                human_think_time_ms: overrides
                    .human_think_time_ms
                    .unwrap_or(default.human_think_time_ms),
                persona_factor: overrides.persona_factor.unwrap_or(default.persona_factor),
                expectation_bias: overrides
                    .expectation_bias
                    .unwrap_or(default.expectation_bias),
                description: overrides
                    .description
                    .or_else(|| Some(default.description.to_string())),
            }
        }
    }
}
