use slotwindow::core::context::AppContext;
use slotwindow::core::models::SlotChoice;
use slotwindow::core::types::{DateKey, SlotLabel};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub fn write_config_with_start(dir: &PathBuf, start: &str) {
    let cfg = format!(
        r#"{{
      "window_size": {{ "value": 4, "description": "Columns per page" }},
      "default_slots": {{
        "value": ["9:30 AM", "10:30 AM", "11:30 AM", "1:30 PM", "2:30 PM", "3:30 PM"],
        "description": "Template"
      }},
      "start_date": {{ "value": "{start}", "description": "First visible date" }},
      "file_logging_enabled": {{ "value": "False", "description": "File logging" }}
    }}"#
    );
    fs::write(dir.join("config.json"), cfg).unwrap();
}

/// Context anchored at a fixed date so window contents are deterministic.
pub fn make_ctx(start: &str) -> (AppContext, PathBuf) {
    let dir = make_temp_dir("slotwindow-it");
    write_config_with_start(&dir, start);
    let ctx = AppContext::new_with_paths(dir.join("config.json"), dir.join("logs")).unwrap();
    (ctx, dir)
}

pub fn date(s: &str) -> DateKey {
    DateKey::try_from_str(s).unwrap()
}

pub fn slot(s: &str) -> SlotLabel {
    SlotLabel::try_from_str(s).unwrap()
}

pub fn choice(d: &str, t: &str) -> SlotChoice {
    SlotChoice::new(date(d), slot(t))
}
