use perceived_time::{
    evaluate, Complexity, Grade, PersonaConfig, TimeCategory, TraceStep,
};

fn persona(think_ms: f64, factor: f64, bias: f64) -> PersonaConfig {
    PersonaConfig {
        id: "test".to_string(),
        name: "Test Persona".to_string(),
        human_think_time_ms: think_ms,
        persona_factor: factor,
        expectation_bias: bias,
        description: None,
    }
}

fn step(name: &str, duration_ms: f64, category: TimeCategory, complexity: Complexity) -> TraceStep {
    TraceStep {
        name: name.to_string(),
        duration_ms,
        category,
        complexity,
        description: None,
        screenshot: None,
    }
}

fn mixed_trace() -> Vec<TraceStep> {
    vec![
        step("open page", 2400.0, TimeCategory::Perceived, Complexity::Medium),
        step("background sync", 1000.0, TimeCategory::PartiallyPerceived, Complexity::Low),
        step("prefetch", 700.0, TimeCategory::NonPerceived, Complexity::High),
        step("har capture", 300.0, TimeCategory::ToolOverhead, Complexity::Low),
        TraceStep {
            description: Some("network error occurred".to_string()),
            ..step("probe", 50.0, TimeCategory::Diagnostic, Complexity::Low)
        },
    ]
}

#[test]
fn evaluation_is_deterministic() {
    let persona = persona(1000.0, 1.2, 0.7);
    let steps = mixed_trace();

    let first = evaluate(&steps, &persona);
    let second = evaluate(&steps, &persona);

    assert_eq!(first, second);
}

#[test]
fn totals_decompose_into_step_values() {
    let persona = persona(1300.0, 1.1, 0.9);
    let steps = mixed_trace();

    let result = evaluate(&steps, &persona);

    let physical: f64 = steps.iter().map(|s| s.duration_ms).sum();
    assert_eq!(result.total_physical_time, physical);

    let pain: i64 = result.breakdown.iter().map(|e| e.final_pain_ms).sum();
    assert_eq!(result.total_pain_score, pain);

    assert_eq!(result.breakdown.len(), steps.len());
    assert_eq!(result.complexity.total_steps, steps.len());
}

#[test]
fn instrumentation_and_invisible_steps_contribute_no_perception() {
    let persona = persona(1000.0, 1.2, 0.7);
    let steps = vec![
        step("prefetch", 700.0, TimeCategory::NonPerceived, Complexity::High),
        step("har capture", 300.0, TimeCategory::ToolOverhead, Complexity::Medium),
        step("probe", 50.0, TimeCategory::Diagnostic, Complexity::Low),
    ];

    let result = evaluate(&steps, &persona);

    for entry in &result.breakdown {
        assert_eq!(entry.base_perceived_ms, 0, "step {}", entry.step);
        assert_eq!(entry.final_pain_ms, 0, "step {}", entry.step);
        assert_eq!(entry.rule, "Exclude");
    }
    // non_perceived still counts toward expectation, overhead/diagnostic do not
    assert_eq!(result.complexity.valid_steps, 1);
}

#[test]
fn partially_perceived_waits_are_compressed() {
    let persona = persona(1000.0, 1.0, 1.0);
    let steps = vec![step(
        "background sync",
        1000.0,
        TimeCategory::PartiallyPerceived,
        Complexity::Low,
    )];

    let result = evaluate(&steps, &persona);

    let entry = &result.breakdown[0];
    assert_eq!(entry.think_time_ms, 1000);
    assert_eq!(entry.base_perceived_ms, 1400); // 1000 * 0.4 + 1000
}

#[test]
fn pain_is_amplified_by_attention_loss_and_persona_factor() {
    let persona = persona(1000.0, 1.2, 1.0);
    let steps = vec![step(
        "background sync",
        1000.0,
        TimeCategory::PartiallyPerceived,
        Complexity::High,
    )];

    let result = evaluate(&steps, &persona);

    let entry = &result.breakdown[0];
    // think 1000 * 1.5 = 1500, base = 400 + 1500 = 1900
    assert_eq!(entry.think_time_ms, 1500);
    assert_eq!(entry.base_perceived_ms, 1900);
    // pain = 1900 * 1.8 * 1.2
    assert_eq!(entry.final_pain_ms, (1900.0f64 * 1.8 * 1.2).round() as i64);
    assert_eq!(entry.rule, "(Dur + Think[1500]) * Attn[1.8] * Pers[1.2]");
}

#[test]
fn grade_boundary_sits_exactly_at_eighty_percent() {
    let persona = persona(0.0, 1.0, 1.0);

    let steps = vec![step("wait", 800.0, TimeCategory::Perceived, Complexity::Low)];
    let result = evaluate(&steps, &persona);
    assert_eq!(result.complexity.expected_time_ms, 1000.0);
    assert_eq!(result.total_pain_score, 800);
    assert_eq!(result.score, Grade::Excellent);

    let steps = vec![step("wait", 801.0, TimeCategory::Perceived, Complexity::Low)];
    let result = evaluate(&steps, &persona);
    assert_eq!(result.total_pain_score, 801);
    assert_eq!(result.score, Grade::Good);
}

#[test]
fn expectation_baseline_scales_with_bias_and_skips_instrumentation() {
    let persona = persona(0.0, 1.0, 0.7);
    let steps = mixed_trace();

    let result = evaluate(&steps, &persona);

    // medium 3000 + low 1000 + high 6000 (non_perceived counts), bias 0.7
    assert!((result.complexity.expected_time_ms - 7000.0).abs() < 1e-6);
    assert_eq!(result.complexity.valid_steps, 3);
}

#[test]
fn diagnostic_error_descriptions_count_as_breakpoints() {
    let persona = persona(0.0, 1.0, 1.0);
    let steps = vec![
        TraceStep {
            description: Some("network error occurred".to_string()),
            ..step("probe", 50.0, TimeCategory::Diagnostic, Complexity::Low)
        },
        TraceStep {
            description: Some("ok".to_string()),
            ..step("probe", 50.0, TimeCategory::Diagnostic, Complexity::Low)
        },
        // case-sensitive: "Error" does not match
        TraceStep {
            description: Some("Error shown".to_string()),
            ..step("probe", 50.0, TimeCategory::Diagnostic, Complexity::Low)
        },
        TraceStep {
            description: Some("error".to_string()),
            ..step("render", 50.0, TimeCategory::Perceived, Complexity::Low)
        },
    ];

    let result = evaluate(&steps, &persona);

    assert_eq!(result.complexity.breakpoints, 1);
}

#[test]
fn all_instrumentation_trace_grades_excellent_without_dividing() {
    let persona = persona(1000.0, 1.2, 0.7);
    let steps = vec![
        step("har capture", 300.0, TimeCategory::ToolOverhead, Complexity::Low),
        step("probe", 50.0, TimeCategory::Diagnostic, Complexity::High),
    ];

    let result = evaluate(&steps, &persona);

    assert_eq!(result.complexity.expected_time_ms, 0.0);
    assert_eq!(result.total_pain_score, 0);
    assert_eq!(result.score, Grade::Excellent);
}

#[test]
fn empty_trace_is_well_defined() {
    let persona = persona(1000.0, 1.2, 0.7);

    let result = evaluate(&[], &persona);

    assert_eq!(result.total_physical_time, 0.0);
    assert_eq!(result.total_pain_score, 0);
    assert_eq!(result.complexity.total_steps, 0);
    assert!(result.breakdown.is_empty());
    assert_eq!(result.score, Grade::Excellent);
}

#[test]
fn unknown_complexity_evaluates_with_neutral_multipliers() {
    let persona = persona(1000.0, 1.0, 1.0);
    let steps: Vec<TraceStep> = serde_json::from_str(
        r#"[{"name":"odd","duration":500,"category":"perceived","complexity":"weird"}]"#,
    )
    .expect("step with unknown complexity parses");

    let result = evaluate(&steps, &persona);

    let entry = &result.breakdown[0];
    assert_eq!(entry.complexity, Complexity::Unknown);
    assert_eq!(entry.think_time_ms, 1000);
    assert_eq!(entry.base_perceived_ms, 1500);
    assert_eq!(entry.final_pain_ms, 1500);
    // unknown falls back to the medium expectation tier
    assert_eq!(result.complexity.expected_time_ms, 3000.0);
}

#[test]
fn result_serializes_with_original_wire_names() {
    let persona = persona(1000.0, 1.2, 0.7);
    let steps = vec![TraceStep {
        screenshot: Some("shots/open.png".to_string()),
        ..step("open page", 2400.0, TimeCategory::Perceived, Complexity::Medium)
    }];

    let result = evaluate(&steps, &persona);
    let value = serde_json::to_value(&result).expect("result serializes");

    assert!(value.get("totalPhysicalTime").is_some());
    assert!(value.get("totalBasePerceivedTime").is_some());
    assert!(value.get("totalPainScore").is_some());
    assert!(value["complexity"].get("expectedTimeMs").is_some());
    assert!(value["complexity"].get("validSteps").is_some());
    assert_eq!(value["breakdown"][0]["step"], "open page");
    assert!(value["breakdown"][0].get("final_pain_ms").is_some());
    assert_eq!(value["breakdown"][0]["screenshot"], "shots/open.png");
    assert!(value["score"].as_str().expect("score is a string").contains('('));
}
