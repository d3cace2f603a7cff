// Host-side tests for the selection state machine and announcements.

use galaxy_core::{announcement, sample_skills, Selection, SelectionStateMachine, SkillStore};

fn sel(ids: &[&str]) -> SelectionStateMachine {
    let mut s = SelectionStateMachine::new();
    for id in ids {
        s.compare_toggle(id);
    }
    s
}

#[test]
fn click_selects_from_idle() {
    let mut s = SelectionStateMachine::new();
    s.click("a");
    assert_eq!(s.state(), Selection::Selected("a".into()));
}

#[test]
fn click_same_id_toggles_off() {
    let mut s = SelectionStateMachine::new();
    s.click("a");
    s.click("a");
    assert_eq!(s.state(), Selection::Idle);
}

#[test]
fn click_other_id_replaces_selection() {
    let mut s = SelectionStateMachine::new();
    s.click("a");
    s.click("b");
    assert_eq!(s.state(), Selection::Selected("b".into()));
}

#[test]
fn click_from_comparing_replaces_with_single_selection() {
    let mut s = sel(&["a", "b"]);
    assert_eq!(s.state(), Selection::Comparing("a".into(), "b".into()));
    s.click("c");
    assert_eq!(s.state(), Selection::Selected("c".into()));
}

#[test]
fn compare_toggle_builds_pair() {
    let mut s = SelectionStateMachine::new();
    s.compare_toggle("a");
    assert_eq!(s.state(), Selection::Selected("a".into()));
    s.compare_toggle("b");
    assert_eq!(s.state(), Selection::Comparing("a".into(), "b".into()));
}

#[test]
fn compare_set_evicts_fifo() {
    // Toggling A, B then C keeps the two most recent: {B, C}.
    let s = sel(&["a", "b", "c"]);
    assert_eq!(s.state(), Selection::Comparing("b".into(), "c".into()));
}

#[test]
fn compare_toggle_removes_present_member() {
    let mut s = sel(&["a", "b"]);
    s.compare_toggle("a");
    assert_eq!(s.state(), Selection::Selected("b".into()));
    s.compare_toggle("b");
    assert_eq!(s.state(), Selection::Idle);
}

#[test]
fn escape_returns_to_idle_from_every_state() {
    let mut idle = SelectionStateMachine::new();
    idle.escape();
    assert_eq!(idle.state(), Selection::Idle);

    let mut selected = sel(&["a"]);
    selected.escape();
    assert_eq!(selected.state(), Selection::Idle);

    let mut comparing = sel(&["a", "b"]);
    comparing.escape();
    assert_eq!(comparing.state(), Selection::Idle);
}

#[test]
fn escape_reports_whether_anything_was_cleared() {
    let mut s = SelectionStateMachine::new();
    assert!(!s.escape());

    s.click("a");
    assert!(s.escape());
    assert!(!s.escape());

    let mut comparing = sel(&["a", "b"]);
    assert!(comparing.escape());
}

#[test]
fn membership_flags_track_state() {
    let mut s = SelectionStateMachine::new();
    s.click("a");
    assert!(s.is_selected("a"));
    assert!(!s.is_comparing("a"));
    s.compare_toggle("b");
    assert!(!s.is_selected("a"));
    assert!(s.is_comparing("a"));
    assert!(s.is_comparing("b"));
    assert!(!s.is_comparing("c"));
}

#[test]
fn announcement_uses_skill_names() {
    let store = SkillStore::new(sample_skills()).unwrap();
    assert_eq!(announcement(&Selection::Idle, &store), "Skills overview");
    assert_eq!(
        announcement(&Selection::Selected("react".into()), &store),
        "Selected React"
    );
    assert_eq!(
        announcement(
            &Selection::Comparing("ts".into(), "python".into()),
            &store
        ),
        "Comparing TypeScript and Python Programming"
    );
}

#[test]
fn announcement_falls_back_to_raw_id() {
    let store = SkillStore::new(vec![]).unwrap();
    assert_eq!(
        announcement(&Selection::Selected("ghost".into()), &store),
        "Selected ghost"
    );
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut records = sample_skills();
    records.push(records[0].clone());
    assert!(SkillStore::new(records).is_err());
}
