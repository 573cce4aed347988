use crate::common::{choice, date, make_ctx, slot};
use slotwindow::core::types::PageDirection;
use slotwindow::engine::SlotEngine;
use slotwindow::host::{ControlledValue, SharedSelection};
use std::fs;

#[test]
fn schedule_flow_pages_and_picks_uncontrolled() {
    let (ctx, dir) = make_ctx("2024-03-01");
    let mirror = SharedSelection::new();
    let mut engine = SlotEngine::from_context(&ctx).with_observer(Box::new(mirror.clone()));

    // Window opens on the configured anchor with default availability.
    let keys: Vec<String> = engine.dates().iter().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["2024-03-01", "2024-03-02", "2024-03-03", "2024-03-04"]);

    // Patient pages forward one week worth of windows, then picks.
    engine.page(PageDirection::Next);
    engine.page(PageDirection::Next);
    assert_eq!(engine.availability().len(), 12);

    engine
        .select_slot(&date("2024-03-09"), &slot("10:30 AM"))
        .unwrap();
    assert_eq!(mirror.get(), Some(choice("2024-03-09", "10:30 AM")));
    assert_eq!(mirror.echo_line().unwrap(), "09 Mar Sat – 10:30 AM");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn waitlist_flow_picks_without_a_prior_date_tap() {
    let (ctx, dir) = make_ctx("2024-03-01");
    let mirror = SharedSelection::new();
    let mut engine = SlotEngine::from_context(&ctx).with_observer(Box::new(mirror.clone()));

    // Default-highlighted date, straight to the slot button.
    engine
        .select_slot(&date("2024-03-01"), &slot("9:30 AM"))
        .unwrap();
    assert!(engine.is_slot_active(&date("2024-03-01"), &slot("9:30 AM")));
    assert_eq!(mirror.get(), Some(choice("2024-03-01", "9:30 AM")));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn compare_flow_date_tap_then_slot_tap() {
    let (ctx, dir) = make_ctx("2024-03-01");
    let mirror = SharedSelection::new();
    let mut engine = SlotEngine::from_context(&ctx).with_observer(Box::new(mirror.clone()));

    engine.select_date(&date("2024-03-03")).unwrap();
    assert!(mirror.get().is_none());

    engine
        .select_slot(&date("2024-03-03"), &slot("2:30 PM"))
        .unwrap();
    assert_eq!(mirror.get(), Some(choice("2024-03-03", "2:30 PM")));

    // Tapping another date header resets the time but keeps the mirror:
    // the host's shadow copy only tracks completed selections.
    engine.select_date(&date("2024-03-04")).unwrap();
    assert!(engine.selected_time().is_none());
    assert_eq!(mirror.get(), Some(choice("2024-03-03", "2:30 PM")));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn in_person_flow_books_in_the_past_window() {
    // Unbounded past navigation: paging back keeps synthesizing slots.
    let (ctx, dir) = make_ctx("2024-03-01");
    let mut engine = SlotEngine::from_context(&ctx);

    for _ in 0..3 {
        engine.page(PageDirection::Prev);
    }
    assert_eq!(engine.window().anchor(), date("2024-02-18").0);
    engine
        .select_slot(&date("2024-02-19"), &slot("11:30 AM"))
        .unwrap();
    assert!(engine.is_date_active(&date("2024-02-19")));

    // Paging back to the start restores the original window with its
    // original entries intact.
    for _ in 0..3 {
        engine.page(PageDirection::Next);
    }
    assert_eq!(engine.window().anchor(), date("2024-03-01").0);
    assert_eq!(engine.availability().len(), 16);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn change_slot_modal_reopens_controlled() {
    let (ctx, dir) = make_ctx("2024-03-01");
    let mirror = SharedSelection::new();
    let mut engine = SlotEngine::from_context(&ctx).with_observer(Box::new(mirror.clone()));

    // Modal reopens onto the existing appointment without interaction.
    let existing = ControlledValue::new(Some(choice("2024-03-10", "2:30 PM")));
    existing.apply(&mut engine).unwrap();

    assert!(engine.window().contains(date("2024-03-10").0));
    assert!(engine.is_slot_active(&date("2024-03-10"), &slot("2:30 PM")));
    assert!(mirror.get().is_none());

    // The user then changes the slot through the same operations.
    let mut value = existing;
    engine
        .select_slot(&date("2024-03-11"), &slot("9:30 AM"))
        .unwrap();
    value.refresh_from(&engine);
    assert_eq!(value.get(), Some(&choice("2024-03-11", "9:30 AM")));
    assert_eq!(mirror.get(), Some(choice("2024-03-11", "9:30 AM")));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn booked_elsewhere_slot_disappears_and_survives_paging() {
    let (ctx, dir) = make_ctx("2024-03-01");
    let mut engine = SlotEngine::from_context(&ctx);

    engine
        .remove_slot(&date("2024-03-02"), &slot("9:30 AM"))
        .unwrap();
    engine.page(PageDirection::Next);
    engine.page(PageDirection::Prev);

    // The mutation is not reverted by re-ensuring the window.
    let labels: Vec<String> = engine
        .slots_for(&date("2024-03-02"))
        .unwrap()
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(labels, vec!["10:30 AM", "11:30 AM", "1:30 PM", "2:30 PM", "3:30 PM"]);

    let _ = fs::remove_dir_all(dir);
}
