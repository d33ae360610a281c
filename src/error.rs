/// Boundary failures: payloads that cannot be interpreted as the expected
/// shape at all. The scoring core itself is total and never errors.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("trace steps payload is malformed: {0}")]
    InvalidSteps(#[source] serde_json::Error),
    #[error("persona descriptor is malformed: {0}")]
    InvalidPersona(#[source] serde_json::Error),
}
