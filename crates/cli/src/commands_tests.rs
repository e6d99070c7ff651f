// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::io::Write;

fn hooks_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_validate_clean_file() {
    let file = hooks_file(r#"{"hooks": [{"name": "fmt", "event": "after", "command": "true"}]}"#);
    assert_eq!(validate(file.path(), None), exit_codes::SUCCESS);
}

#[test]
fn test_validate_missing_file() {
    assert_eq!(
        validate(Path::new("/nonexistent/hooks.json"), None),
        exit_codes::ERROR
    );
}

#[test]
fn test_validate_warnings_only() {
    let file = hooks_file(
        r#"{"hooks": [{"name": "slow", "event": "after", "command": "true", "timeout": 900}]}"#,
    );
    assert_eq!(validate(file.path(), None), exit_codes::WARNINGS);
}

#[test]
fn test_validate_registry_errors() {
    let file = hooks_file(
        r#"{"hooks": [
            {"name": "a", "event": "before", "command": "true", "dependsOn": "b"},
            {"name": "b", "event": "before", "command": "true", "dependsOn": "a"}
        ]}"#,
    );
    assert_eq!(validate(file.path(), None), exit_codes::ERROR);
}

#[test]
fn test_validate_hook_name_lookup() {
    let file = hooks_file(r#"{"hooks": [{"name": "fmt", "event": "after", "command": "true"}]}"#);
    assert_eq!(validate(file.path(), Some("fmt")), exit_codes::SUCCESS);
    assert_eq!(validate(file.path(), Some("missing")), exit_codes::ERROR);
}

#[tokio::test]
async fn test_dispatch_unknown_event() {
    let file = hooks_file(r#"{"hooks": []}"#);
    let code = dispatch(DispatchArgs {
        file: file.path().to_path_buf(),
        event: "during".to_string(),
        tool: None,
        command_text: None,
        file_path: None,
        session_id: None,
        cwd: None,
        env: Vec::new(),
        json: false,
    })
    .await;
    assert_eq!(code, exit_codes::ERROR);
}

#[tokio::test]
async fn test_dispatch_proceed_and_block() {
    let file = hooks_file(
        r#"{"hooks": [{
            "name": "no-force-push",
            "event": "before",
            "tools": ["bash"],
            "command": "exit 1",
            "matchRegex": "^git push.*--force"
        }]}"#,
    );

    let args = |text: &str| DispatchArgs {
        file: file.path().to_path_buf(),
        event: "before".to_string(),
        tool: Some("bash".to_string()),
        command_text: Some(text.to_string()),
        file_path: None,
        session_id: Some("s".to_string()),
        cwd: Some(std::env::temp_dir()),
        env: Vec::new(),
        json: true,
    };

    assert_eq!(
        dispatch(args("git push --force origin main")).await,
        exit_codes::ERROR
    );
    assert_eq!(dispatch(args("git status")).await, exit_codes::SUCCESS);
}

#[tokio::test]
async fn test_dispatch_invalid_env_entry() {
    let file = hooks_file(r#"{"hooks": []}"#);
    let code = dispatch(DispatchArgs {
        file: file.path().to_path_buf(),
        event: "after".to_string(),
        tool: Some("bash".to_string()),
        command_text: None,
        file_path: None,
        session_id: None,
        cwd: Some(std::env::temp_dir()),
        env: vec!["NOEQUALS".to_string()],
        json: false,
    })
    .await;
    assert_eq!(code, exit_codes::ERROR);
}
