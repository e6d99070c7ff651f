// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

fn hook(name: &str, event: EventKind) -> HookDefinition {
    HookDefinition::new(name, event, "true")
}

#[test]
fn test_load_empty() {
    let registry = HookRegistry::load(Vec::new()).unwrap();
    assert!(registry.is_empty());
}

#[test]
fn test_load_rejects_duplicate_names() {
    let err = HookRegistry::load(vec![
        hook("fmt", EventKind::ToolAfter),
        hook("fmt", EventKind::ToolAfter),
    ])
    .unwrap_err();
    assert!(matches!(err, ValidationError::DuplicateName { name } if name == "fmt"));
}

#[test]
fn test_load_rejects_zero_timeout() {
    let err = HookRegistry::load(vec![
        hook("fast", EventKind::ToolAfter).with_timeout_secs(0)
    ])
    .unwrap_err();
    assert!(matches!(err, ValidationError::InvalidTimeout { name } if name == "fast"));
}

#[test]
fn test_load_rejects_unknown_dependency() {
    let err = HookRegistry::load(vec![
        hook("b", EventKind::ToolBefore).with_depends_on("missing")
    ])
    .unwrap_err();
    assert!(
        matches!(err, ValidationError::UnknownDependency { hook, depends_on }
            if hook == "b" && depends_on == "missing")
    );
}

#[test]
fn test_load_rejects_cross_event_dependency() {
    let err = HookRegistry::load(vec![
        hook("a", EventKind::ToolAfter),
        hook("b", EventKind::ToolBefore).with_depends_on("a"),
    ])
    .unwrap_err();
    assert!(matches!(err, ValidationError::ScopeMismatch { .. }));
}

#[test]
fn test_load_rejects_disjoint_tool_scopes() {
    let err = HookRegistry::load(vec![
        hook("a", EventKind::ToolBefore).with_tool("git"),
        hook("b", EventKind::ToolBefore)
            .with_tool("bash")
            .with_depends_on("a"),
    ])
    .unwrap_err();
    assert!(matches!(err, ValidationError::ScopeMismatch { .. }));
}

#[test]
fn test_load_accepts_overlapping_tool_scopes() {
    let registry = HookRegistry::load(vec![
        hook("a", EventKind::ToolBefore).with_tool("bash").with_tool("git"),
        hook("b", EventKind::ToolBefore)
            .with_tool("bash")
            .with_depends_on("a"),
    ])
    .unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_load_accepts_empty_filter_dependency() {
    // An empty tool filter overlaps everything.
    let registry = HookRegistry::load(vec![
        hook("a", EventKind::ToolBefore),
        hook("b", EventKind::ToolBefore)
            .with_tool("bash")
            .with_depends_on("a"),
    ])
    .unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_load_rejects_self_dependency() {
    let err =
        HookRegistry::load(vec![hook("a", EventKind::ToolBefore).with_depends_on("a")]).unwrap_err();
    assert!(matches!(err, ValidationError::CyclicDependency { cycle } if cycle == "a -> a"));
}

#[test]
fn test_load_rejects_two_cycle() {
    let err = HookRegistry::load(vec![
        hook("a", EventKind::ToolBefore).with_depends_on("b"),
        hook("b", EventKind::ToolBefore).with_depends_on("a"),
    ])
    .unwrap_err();
    let ValidationError::CyclicDependency { cycle } = err else {
        panic!("expected cycle, got {err:?}");
    };
    assert!(cycle.contains("a") && cycle.contains("b"));
}

#[test]
fn test_load_rejects_long_cycle_behind_chain() {
    // d -> a -> b -> c -> a: the cycle does not include the entry node.
    let err = HookRegistry::load(vec![
        hook("d", EventKind::ToolBefore).with_depends_on("a"),
        hook("a", EventKind::ToolBefore).with_depends_on("b"),
        hook("b", EventKind::ToolBefore).with_depends_on("c"),
        hook("c", EventKind::ToolBefore).with_depends_on("a"),
    ])
    .unwrap_err();
    let ValidationError::CyclicDependency { cycle } = err else {
        panic!("expected cycle, got {err:?}");
    };
    assert!(!cycle.contains('d'), "cycle report should not name d: {cycle}");
}

#[test]
fn test_load_accepts_diamond_free_chain() {
    let registry = HookRegistry::load(vec![
        hook("a", EventKind::ToolBefore),
        hook("b", EventKind::ToolBefore).with_depends_on("a"),
        hook("c", EventKind::ToolBefore).with_depends_on("b"),
    ])
    .unwrap();
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_lookup_never_returns_disabled() {
    let registry = HookRegistry::load(vec![
        hook("on", EventKind::ToolBefore),
        hook("off", EventKind::ToolBefore).with_enabled(false),
    ])
    .unwrap();

    let found = registry.lookup(EventKind::ToolBefore, Some("bash"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "on");
}

#[test]
fn test_lookup_filters_by_event_and_tool() {
    let registry = HookRegistry::load(vec![
        hook("any-tool", EventKind::ToolBefore),
        hook("bash-only", EventKind::ToolBefore).with_tool("bash"),
        hook("git-only", EventKind::ToolBefore).with_tool("git"),
        hook("after", EventKind::ToolAfter),
    ])
    .unwrap();

    let names: Vec<_> = registry
        .lookup(EventKind::ToolBefore, Some("bash"))
        .iter()
        .map(|h| h.name.as_str())
        .collect();
    assert_eq!(names, vec!["any-tool", "bash-only"]);
}

#[test]
fn test_lookup_preserves_insertion_order() {
    let registry = HookRegistry::load(vec![
        hook("third", EventKind::SessionStart),
        hook("first", EventKind::SessionStart),
        hook("second", EventKind::SessionStart),
    ])
    .unwrap();

    let names: Vec<_> = registry
        .lookup(EventKind::SessionStart, None)
        .iter()
        .map(|h| h.name.as_str())
        .collect();
    assert_eq!(names, vec!["third", "first", "second"]);
}

#[test]
fn test_get_and_position() {
    let registry = HookRegistry::load(vec![
        hook("a", EventKind::SessionStart),
        hook("b", EventKind::SessionEnd),
    ])
    .unwrap();
    assert_eq!(registry.get("b").map(|h| h.event), Some(EventKind::SessionEnd));
    assert_eq!(registry.position("b"), Some(1));
    assert!(registry.get("zzz").is_none());
}
