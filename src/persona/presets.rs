use super::PersonaConfig;

/// Static row of the preset table. Converted to an owned config on resolve.
pub(crate) struct PersonaPreset {
    pub key: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub human_think_time_ms: f64,
    pub persona_factor: f64,
    pub expectation_bias: f64,
    pub description: &'static str,
}

impl PersonaPreset {
    pub(crate) fn to_config(&self) -> PersonaConfig {
        PersonaConfig {
            id: self.id.to_string(),
            name: self.name.to_string(),
            human_think_time_ms: self.human_think_time_ms,
            persona_factor: self.persona_factor,
            expectation_bias: self.expectation_bias,
            description: Some(self.description.to_string()),
        }
    }
}

/// Predefined persona configurations. The first entry doubles as the
/// fallback default for unknown ids and partial overrides.
pub(crate) const PRESETS: [PersonaPreset; 2] = [
    PersonaPreset {
        key: "XIAO_FANG",
        id: "xiao_fang",
        name: "Expert Developer (Xiao Fang)",
        human_think_time_ms: 1000.0,
        persona_factor: 1.2,
        expectation_bias: 0.7,
        description: "Highly skilled, impatient with delays, expects high performance.",
    },
    PersonaPreset {
        key: "XIAO_DIU",
        id: "xiao_diu",
        name: "Novice PM (Xiao Diu)",
        human_think_time_ms: 2000.0,
        persona_factor: 0.8,
        expectation_bias: 1.3,
        description: "Learning phase, patient, needs time to read and understand.",
    },
];

pub(crate) fn default_preset() -> &'static PersonaPreset {
    &PRESETS[0]
}

pub(crate) fn find(input: &str) -> Option<&'static PersonaPreset> {
    PRESETS
        .iter()
        .find(|preset| preset.id == input || preset.key.eq_ignore_ascii_case(input))
}
