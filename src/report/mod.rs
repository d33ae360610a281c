//! Markdown rendering for evaluation results. Purely derived from the
//! result value; the only interpretation added here is the suggestion
//! threshold.

use crate::evaluation::{EvaluationResult, StepBreakdown};
use crate::persona::PersonaConfig;
use chrono::NaiveDate;
use std::fmt::Write;

/// Steps whose pain score exceeds this (ms, strict) get an improvement
/// suggestion.
const SUGGESTION_THRESHOLD_MS: i64 = 3000;

fn seconds(ms: f64) -> String {
    format!("{:.2}s", ms / 1000.0)
}

fn screenshot_cell(entry: &StepBreakdown) -> String {
    match entry.screenshot.as_deref() {
        Some(path) => format!("![Step]({path})"),
        None => "-".to_string(),
    }
}

/// Renders a UX experience report for an evaluation. The report date is
/// passed in by the caller to keep rendering deterministic.
pub fn render_report(
    result: &EvaluationResult,
    persona: &PersonaConfig,
    generated_on: NaiveDate,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# UX Experience Test Report");
    let _ = writeln!(out);
    let _ = writeln!(out, "**Date**: {generated_on}");
    let _ = writeln!(
        out,
        "**Persona**: {} (ThinkTime: {}ms, Factor: {})",
        persona.name, persona.human_think_time_ms, persona.persona_factor
    );
    let _ = writeln!(out, "- **Total Steps**: {}", result.complexity.total_steps);
    let _ = writeln!(out, "- **Breakpoints**: {}", result.complexity.breakpoints);
    let _ = writeln!(out);

    let _ = writeln!(out, "## 1. Summary");
    let _ = writeln!(
        out,
        "| Score | Total Physical Time | Total Perceived Time | Total Pain Score |"
    );
    let _ = writeln!(out, "| :--- | :--- | :--- | :--- |");
    let _ = writeln!(
        out,
        "| **{}** | **{}** | **{}** | **{}** |",
        result.score.label(),
        seconds(result.total_physical_time),
        seconds(result.total_base_perceived_time),
        seconds(result.total_pain_score as f64)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "## 2. Step Breakdown");
    let _ = writeln!(
        out,
        "| Step | Physical (s) | Perceived (s) | Pain (s) | Complexity | Screenshot |"
    );
    let _ = writeln!(out, "| :--- | :--- | :--- | :--- | :--- | :--- |");
    for entry in &result.breakdown {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} |",
            entry.step,
            seconds(entry.original_ms as f64),
            seconds(entry.base_perceived_ms as f64),
            seconds(entry.final_pain_ms as f64),
            entry.complexity.label(),
            screenshot_cell(entry)
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## 3. Improvement Suggestions");
    let high_pain: Vec<&StepBreakdown> = result
        .breakdown
        .iter()
        .filter(|entry| entry.final_pain_ms > SUGGESTION_THRESHOLD_MS)
        .collect();
    if high_pain.is_empty() {
        let _ = writeln!(out, "1. Overall experience is good, no significant pain points.");
    } else {
        for (index, entry) in high_pain.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. **Optimize step \"{}\"**: current pain score {}, review loading performance and interaction flow.",
                index + 1,
                entry.step,
                seconds(entry.final_pain_ms as f64)
            );
        }
    }

    out
}
