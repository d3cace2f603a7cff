// Host-side tests for the assembled scene: projection output, resize
// behavior and teardown semantics.

use std::time::Duration;

use galaxy_core::{link_opacity, link_pairs, sample_skills, Galaxy, Selection, SkillStore};

const EPS: f32 = 1e-4;

fn galaxy() -> Galaxy {
    Galaxy::new(SkillStore::new(sample_skills()).unwrap(), 1000.0, 420.0)
}

#[test]
fn projection_formula_is_exact() {
    // The simplified parallax is a compatibility contract: assert the
    // formula verbatim, not geometric accuracy.
    let mut g = galaxy();
    g.key("ArrowRight"); // yaw += 0.12
    g.key("ArrowDown"); // pitch += 0.12

    let items = g.items();
    let positions = g.positions().to_vec();
    for (item, pos) in items.iter().zip(&positions) {
        let expected_x = 500.0 + (pos.x - 500.0) + 0.12 * 30.0;
        let expected_y = 210.0 + (pos.y - 210.0) + 0.12 * 18.0;
        assert!((item.screen_x - expected_x).abs() < EPS);
        assert!((item.screen_y - expected_y).abs() < EPS);
        let expected_scale = 1.0 * (0.6 + 0.8 * pos.depth);
        assert!((item.visual_scale - expected_scale).abs() < EPS);
    }
}

#[test]
fn diameter_floors_at_minimum() {
    let store = SkillStore::new(vec![galaxy_core::SkillRecord::new("tiny", "Tiny")]).unwrap();
    let g = Galaxy::new(store, 1000.0, 420.0);
    let items = g.items();
    assert_eq!(items.len(), 1);
    assert!(items[0].diameter >= 20.0);
}

#[test]
fn diameter_scales_with_percent_and_zoom() {
    let g = galaxy();
    let items = g.items();
    // react has percent 92 at depth(0) = 0.4 -> visual_scale 0.92.
    let expected = 18.0 + 92.0 * 0.18 * items[0].visual_scale;
    assert!((items[0].diameter - expected.max(20.0)).abs() < EPS);
}

#[test]
fn resize_recomputes_layout_but_keeps_view_state() {
    let mut g = galaxy();
    g.key("ArrowRight");
    g.key("+");
    g.click("react");
    let yaw = g.controller.rotation.yaw;
    let scale = g.controller.scale();
    let before = g.positions().to_vec();

    g.resize(600.0, 600.0);
    assert_ne!(g.positions(), before.as_slice());
    assert_eq!(g.controller.rotation.yaw, yaw);
    assert_eq!(g.controller.scale(), scale);
    assert_eq!(g.selection_state(), Selection::Selected("react".into()));
}

#[test]
fn zero_viewport_is_clamped_to_floor() {
    let mut g = galaxy();
    g.resize(0.0, 0.0);
    assert_eq!(g.viewport(), (300.0, 200.0));
    // Layout stays finite.
    for p in g.positions() {
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}

#[test]
fn items_flag_selection_membership() {
    let mut g = galaxy();
    g.click("react");
    let items = g.items();
    for item in &items {
        assert_eq!(item.is_selected, item.id == "react");
        assert!(!item.is_comparing);
    }

    g.compare_toggle("ts");
    let items = g.items();
    for item in &items {
        assert!(!item.is_selected);
        assert_eq!(item.is_comparing, item.id == "react" || item.id == "ts");
    }
}

#[test]
fn click_on_unknown_id_is_ignored() {
    let mut g = galaxy();
    assert!(!g.click("not-a-skill"));
    assert!(!g.compare_toggle("not-a-skill"));
    assert_eq!(g.selection_state(), Selection::Idle);
}

#[test]
fn selection_mutators_report_transitions() {
    // Callers emit analytics only when something actually changed, so the
    // return values must track real transitions.
    let mut g = galaxy();
    assert!(!g.escape()); // already idle
    assert!(g.click("react"));
    assert!(g.click("react")); // toggle off is still a transition
    assert!(g.click("ts"));
    assert!(g.compare_toggle("react"));
    assert!(g.escape());
    assert!(!g.escape());

    g.teardown();
    assert!(!g.click("react"));
    assert!(!g.compare_toggle("react"));
    assert!(!g.escape());
}

#[test]
fn link_pairs_connect_next_two_neighbors() {
    assert!(link_pairs(0).is_empty());
    assert!(link_pairs(1).is_empty());
    assert_eq!(link_pairs(2), vec![(0, 1)]);
    assert_eq!(link_pairs(3), vec![(0, 1), (0, 2), (1, 2)]);

    let pairs = link_pairs(10);
    // Each item links forward to i+1 and i+2 when they exist.
    assert_eq!(pairs.len(), 2 * 10 - 3);
    for (i, j) in pairs {
        assert!(j == i + 1 || j == i + 2);
        assert!(j < 10);
    }
}

#[test]
fn link_opacity_fades_with_depth_gap() {
    assert!((link_opacity(0.7, 0.7) - 0.5).abs() < EPS);
    assert!((link_opacity(0.4, 1.0) - 0.26).abs() < EPS);
    // Symmetric in its endpoints.
    assert_eq!(link_opacity(0.4, 0.9), link_opacity(0.9, 0.4));
}

#[test]
fn escape_key_clears_selection() {
    let mut g = galaxy();
    g.click("react");
    assert!(g.key("Escape"));
    assert_eq!(g.selection_state(), Selection::Idle);
}

#[test]
fn announcement_follows_selection() {
    let mut g = galaxy();
    assert_eq!(g.announcement(), "Skills overview");
    g.click("react");
    assert_eq!(g.announcement(), "Selected React");
    g.compare_toggle("ts");
    assert_eq!(g.announcement(), "Comparing React and TypeScript");
}

#[test]
fn teardown_makes_stale_callbacks_no_ops() {
    let mut g = galaxy();
    g.click("react");
    g.teardown();

    // Selection cleared on teardown.
    assert_eq!(g.selection_state(), Selection::Idle);

    // A queued animation callback firing after teardown changes nothing.
    let before = g.items();
    g.tick(Duration::from_millis(100), false);
    g.pointer_down(1, 0, 0.0, 0.0);
    g.pointer_move(1, 100.0, 100.0);
    g.wheel(-100.0, 0.0);
    g.key("ArrowRight");
    g.click("ts");
    g.resize(800.0, 800.0);
    assert_eq!(g.items(), before);
}
