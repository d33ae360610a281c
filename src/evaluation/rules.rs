use super::StepBreakdown;
use crate::persona::PersonaConfig;
use crate::trace::{TimeCategory, TraceStep};

/// Share of a partially perceived wait that actually registers with the
/// user; models background/async work the user only glances at.
pub(crate) const COMPRESSION_FACTOR: f64 = 0.4;

/// Unrounded per-step signals fed into the aggregate totals.
pub(crate) struct StepSignals {
    pub base_perceived_ms: f64,
    pub expected_ms: Option<f64>,
    pub is_breakpoint: bool,
}

/// Applies the per-step time-transform pipeline: think-time injection,
/// category-based compression, then persona-weighted pain amplification.
pub(crate) fn transform_step(
    step: &TraceStep,
    persona: &PersonaConfig,
) -> (StepBreakdown, StepSignals) {
    let think_time_ms = persona.human_think_time_ms * step.complexity.think_time_factor();

    let base_perceived_ms = match step.category {
        TimeCategory::Perceived => step.duration_ms + think_time_ms,
        TimeCategory::PartiallyPerceived => {
            step.duration_ms * COMPRESSION_FACTOR + think_time_ms
        }
        TimeCategory::NonPerceived | TimeCategory::ToolOverhead | TimeCategory::Diagnostic => 0.0,
    };

    let attention_loss = step.complexity.attention_loss_factor();
    let final_pain_ms = base_perceived_ms * attention_loss * persona.persona_factor;

    let rule = if base_perceived_ms > 0.0 {
        format!(
            "(Dur + Think[{think_time_ms:.0}]) * Attn[{attention_loss}] * Pers[{}]",
            persona.persona_factor
        )
    } else {
        "Exclude".to_string()
    };

    let expected_ms = if step.category.is_instrumentation() {
        None
    } else {
        Some(step.complexity.expected_time_ms() * persona.expectation_bias)
    };

    let is_breakpoint = step.category == TimeCategory::Diagnostic
        && step
            .description
            .as_deref()
            .is_some_and(|text| text.contains("error"));

    let breakdown = StepBreakdown {
        step: step.name.clone(),
        category: step.category,
        complexity: step.complexity,
        original_ms: step.duration_ms.round() as i64,
        think_time_ms: think_time_ms.round() as i64,
        base_perceived_ms: base_perceived_ms.round() as i64,
        final_pain_ms: final_pain_ms.round() as i64,
        rule,
        screenshot: step.screenshot.clone(),
    };

    let signals = StepSignals {
        base_perceived_ms,
        expected_ms,
        is_breakpoint,
    };

    (breakdown, signals)
}
