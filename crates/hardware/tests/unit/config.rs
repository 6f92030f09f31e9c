//! # Configuration Tests
//!
//! Tests for configuration defaults and JSON deserialization.

use hexsim_core::config::CoreConfig;

#[test]
fn test_defaults() {
    let config = CoreConfig::default();
    assert!(!config.lldb_compat);
    assert_eq!(config.lldb_stack_adjust, 0);
    assert!(!config.privileged);
}

#[test]
fn test_deserialize_full() {
    let json = r#"{"lldb_compat": true, "lldb_stack_adjust": 256, "privileged": false}"#;
    let config: CoreConfig = serde_json::from_str(json).unwrap();
    assert!(config.lldb_compat);
    assert_eq!(config.lldb_stack_adjust, 0x100);
    assert!(!config.privileged);
}

#[test]
fn test_deserialize_missing_fields_use_defaults() {
    let config: CoreConfig = serde_json::from_str("{}").unwrap();
    assert!(!config.lldb_compat);
    assert_eq!(config.lldb_stack_adjust, 0);
    assert!(!config.privileged);
}

#[test]
fn test_deserialize_partial() {
    let config: CoreConfig = serde_json::from_str(r#"{"lldb_stack_adjust": 4096}"#).unwrap();
    assert_eq!(config.lldb_stack_adjust, 4096);
    assert!(!config.lldb_compat);
}
