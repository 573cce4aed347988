use crate::common::{make_temp_dir, write_config_with_start};
use slotwindow::core::context::AppContext;
use slotwindow::engine::SlotEngine;
use std::fs;

#[test]
fn context_wires_config_and_logger() {
    let dir = make_temp_dir("slotwindow-ctx");
    write_config_with_start(&dir, "2024-03-01");

    let ctx = AppContext::new_with_paths(dir.join("config.json"), dir.join("logs")).unwrap();
    assert_eq!(ctx.config.window_size(), 4);
    // file_logging_enabled False in the fixture flows through to the logger.
    assert!(!ctx.logger.file_logging_enabled());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn context_materializes_a_default_config() {
    let dir = make_temp_dir("slotwindow-ctx");
    let config_path = dir.join("config.json");
    assert!(!config_path.exists());

    let ctx = AppContext::new_with_paths(config_path.clone(), dir.join("logs")).unwrap();
    assert!(config_path.exists());
    assert_eq!(ctx.config.window_size(), 4);
    assert_eq!(ctx.config.default_slots().len(), 6);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn engine_from_context_honors_custom_values() {
    let dir = make_temp_dir("slotwindow-ctx");
    let cfg = r#"{
      "window_size": { "value": 3, "description": "Columns per page" },
      "default_slots": { "value": ["8:00 AM", "12:00 PM"], "description": "Template" },
      "start_date": { "value": "2024-06-10", "description": "First visible date" },
      "file_logging_enabled": { "value": "False", "description": "File logging" }
    }"#;
    fs::write(dir.join("config.json"), cfg).unwrap();

    let ctx = AppContext::new_with_paths(dir.join("config.json"), dir.join("logs")).unwrap();
    let engine = SlotEngine::from_context(&ctx);

    let keys: Vec<String> = engine.dates().iter().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["2024-06-10", "2024-06-11", "2024-06-12"]);
    let first = slotwindow::core::types::DateKey::try_from_str(&keys[0]).unwrap();
    let labels: Vec<String> = engine
        .slots_for(&first)
        .unwrap()
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(labels, vec!["8:00 AM", "12:00 PM"]);

    let _ = fs::remove_dir_all(dir);
}
