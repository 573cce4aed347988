use crate::common::make_ctx;
use slotwindow::host::repl::BookingRepl;
use std::fs;
use std::io::Cursor;

fn run_script(start: &str, script: &str) -> String {
    let (ctx, dir) = make_ctx(start);
    let mut repl = BookingRepl::new(&ctx);
    let mut out = Vec::new();
    repl.run_with_io(&ctx, Cursor::new(script.to_string()), &mut out)
        .unwrap();
    let _ = fs::remove_dir_all(dir);
    String::from_utf8(out).unwrap()
}

#[test]
fn repl_renders_the_initial_window() {
    let out = run_script("2024-03-01", "quit\n");
    assert!(out.contains("2024"));
    assert!(out.contains("Fri 1"));
    assert!(out.contains("Mon 4"));
    assert!(out.contains("9:30 AM"));
    assert!(out.contains("Commands:"));
}

#[test]
fn repl_picks_a_slot_and_echoes_the_selection() {
    let out = run_script("2024-03-01", "pick 2024-03-02 11:30 AM\nshow\nquit\n");
    assert!(out.contains("[11:30 AM]"));
    assert!(out.contains("Selected: 02 Mar Sat – 11:30 AM"));
}

#[test]
fn repl_pages_forward_and_back() {
    let out = run_script("2024-03-01", "next\nprev\nquit\n");
    assert!(out.contains("Tue 5"));
    assert!(out.contains("Fri 8"));
    // Round trip lands back on the original window.
    assert!(out.matches("Fri 1").count() >= 2);
}

#[test]
fn repl_date_tap_highlights_without_selecting() {
    let out = run_script("2024-03-01", "date 2024-03-03\nshow\nquit\n");
    assert!(out.contains("[Sun 3"));
    assert!(out.contains("Nothing selected yet."));
}

#[test]
fn repl_reports_errors_and_keeps_running() {
    let out = run_script(
        "2024-03-01",
        "wiggle\npick 2024-03-02\npick 2030-01-01 9:30 AM\nshow\nquit\n",
    );
    assert!(out.contains("Unknown command: 'wiggle'"));
    assert!(out.contains("Usage: pick <date> <time>"));
    assert!(out.contains("Unknown date: '2030-01-01'"));
    assert!(out.contains("Nothing selected yet."));
}

#[test]
fn repl_shows_config_rows() {
    let out = run_script("2024-03-01", "config\nquit\n");
    assert!(out.contains("WINDOW_SIZE"));
    assert!(out.contains("START_DATE"));
}
