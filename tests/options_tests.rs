mod common;

use bpquery::prelude::*;
use bpquery::default_breakpoints;
use bpquery::types::BreakpointDefinition;
use common::{TestResult, engine};
use serde_json::json;

#[test]
fn test_replacing_breakpoints() -> TestResult {
    let (mut bp, sink) = engine();
    bp.try_set_options_json(&json!({
        "breakpoints": [
            { "name": "small", "px": 400 },
            { "name": "medium", "px": 800 },
            { "name": "large", "px": 1200 }
        ]
    }))?;

    assert_eq!(bp.get("small", "medium"), "(min-width: 25em) and (max-width: 74.9375em)");
    assert_eq!(bp.get("large", 0), "(min-width: 75em)");
    assert_eq!(bp.get("l", 0), "(min-width: 0em)");
    assert_eq!(sink.len(), 1);
    Ok(())
}

#[test]
fn test_breakpoints_are_sorted() -> TestResult {
    let (mut bp, _) = engine();
    bp.try_set_options_json(&json!({
        "breakpoints": [
            { "name": "wide", "px": "1200px" },
            { "name": "narrow", "px": 400.7 },
            { "name": "mid", "px": 800 }
        ]
    }))?;

    assert_eq!(
        bp.table().ranges(),
        vec![("narrow", 400, Some(799)), ("mid", 800, Some(1199)), ("wide", 1200, None)]
    );
    Ok(())
}

#[test]
fn test_invalid_breakpoints_leave_state_untouched() {
    let (mut bp, sink) = engine();
    let before = bp.options().clone();

    assert!(!bp.set_options_json(&json!({
        "isResponsive": false,
        "baseFontSize": 10,
        "breakpoints": [{ "name": "small", "px": 400 }, { "px": 800 }]
    })));

    assert_eq!(bp.options(), &before);
    assert_eq!(bp.get("l", 0), "(min-width: 64em)");
    assert!(matches!(
        sink.diagnostics().as_slice(),
        [Diagnostic::InvalidBreakpoints { .. }]
    ));
}

#[test]
fn test_try_set_reports_the_offending_entry() {
    let (mut bp, _) = engine();
    let err = bp
        .try_set_options_json(&json!({ "breakpoints": [{ "name": "a", "px": 1 }, "b"] }))
        .unwrap_err();
    assert_eq!(err, ConfigError::NotAnObject { index: 1 });

    let err = bp
        .try_set_options_json(&json!({ "breakpoints": [{ "name": "a", "px": 1 }, { "name": "b" }] }))
        .unwrap_err();
    assert_eq!(err, ConfigError::MissingField { index: 1, field: "px" });
}

#[test]
fn test_entries_with_both_fields_are_accepted() {
    let (mut bp, sink) = engine();
    assert!(bp.set_options_json(&json!({
        "breakpoints": [{ "name": true, "px": 400 }, { "name": "m", "px": 800 }]
    })));
    assert_eq!(bp.get("true", 0), "(min-width: 25em)");
    assert_eq!(bp.get(0, "true"), "(max-width: 49.9375em)");

    assert!(bp.set_options_json(&json!({
        "breakpoints": [{ "name": "s", "px": null }, { "name": "l", "px": "wide" }, { "name": "xl", "px": 1200 }]
    })));
    assert_eq!(bp.get("s", 0), "(min-width: 0em)");
    assert_eq!(bp.get("xl", 0), "(min-width: 75em)");
    assert!(sink.is_empty());
}

#[test]
fn test_restoring_previous_breakpoints_restores_queries() -> TestResult {
    let (mut bp, _) = engine();
    let calls = [("l", ""), ("s", "xl"), ("0", "m"), ("xs,xxl", "")];
    let before: Vec<String> = calls.iter().map(|(min, max)| bp.get(*min, *max)).collect();

    bp.try_set_options_json(&json!({
        "breakpoints": [{ "name": "l", "px": 900 }, { "name": "xl", "px": 1100 }]
    }))?;
    assert_ne!(bp.get("l", ""), before[0]);

    bp.try_set_options_json(&json!({ "breakpoints": default_breakpoints() }))?;
    let after: Vec<String> = calls.iter().map(|(min, max)| bp.get(*min, *max)).collect();
    assert_eq!(after, before);
    Ok(())
}

#[test]
fn test_unrelated_keys_are_ignored() {
    let (mut bp, sink) = engine();
    assert!(bp.set_options_json(&json!({ "theme": "dark", "breakpoints": [] })));
    assert!(bp.set_options_json(&json!("not an object")));
    assert_eq!(bp.options(), &Options::default());
    assert!(sink.is_empty());
}

#[test]
fn test_options_round_trip() -> TestResult {
    let (mut bp, _) = engine();
    bp.set_options(
        OptionsUpdate::new()
            .base_font_size(14.0)
            .breakpoints(vec![
                BreakpointDefinition::new("phone", 360),
                BreakpointDefinition::new("desk", 1280),
            ])
            .static_range(StaticRange::new("phone", "desk")),
    );

    let snapshot = serde_json::to_value(bp.options())?;
    let (mut copy, _) = engine();
    copy.try_set_options_json(&snapshot)?;

    assert_eq!(copy.options(), bp.options());
    assert_eq!(copy.get("phone", "desk"), bp.get("phone", "desk"));
    Ok(())
}

#[test]
fn test_repeated_update_is_idempotent() -> TestResult {
    let (mut bp, _) = engine();
    let update = json!({ "baseFontSize": 20, "breakpoints": default_breakpoints() });
    bp.try_set_options_json(&update)?;
    let once = bp.options().clone();
    bp.try_set_options_json(&update)?;
    assert_eq!(bp.options(), &once);
    assert_eq!(bp.get("l", 0), "(min-width: 51.2em)");
    Ok(())
}

#[test]
fn test_invalid_font_size_is_ignored() {
    let (mut bp, _) = engine();
    bp.set_options(OptionsUpdate::new().base_font_size(0.0));
    bp.set_options_json(&json!({ "baseFontSize": -4 }));
    assert_eq!(bp.options().base_font_size, 16.0);
}
