// Host-side tests for the pure spiral layout.

use galaxy_core::{compute_positions, LAYOUT_RADIUS_FACTOR};

#[test]
fn output_length_matches_count() {
    for n in 0..50 {
        let positions = compute_positions(n, 1000.0, 420.0);
        assert_eq!(positions.len(), n, "expected {n} positions");
    }
}

#[test]
fn zero_count_yields_empty_list() {
    // Must not divide by zero or panic.
    let positions = compute_positions(0, 800.0, 600.0);
    assert!(positions.is_empty());
}

#[test]
fn layout_is_deterministic() {
    // Identical inputs yield bit-identical output; regression tests depend
    // on this contract.
    let a = compute_positions(12, 1024.0, 768.0);
    let b = compute_positions(12, 1024.0, 768.0);
    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!(pa.x.to_bits(), pb.x.to_bits());
        assert_eq!(pa.y.to_bits(), pb.y.to_bits());
        assert_eq!(pa.depth.to_bits(), pb.depth.to_bits());
    }
}

#[test]
fn depth_stays_in_range() {
    for p in compute_positions(40, 1200.0, 500.0) {
        assert!(
            (0.4..=1.0).contains(&p.depth),
            "depth {} out of [0.4, 1.0]",
            p.depth
        );
    }
}

#[test]
fn ten_skills_in_reference_viewport() {
    // 10 skills at 1000x420: all orbs stay near the base radius
    // (0.36 * 420 ~= 151) of center (500, 210). The sinusoidal radius
    // modulation can push the outermost item up to 1.2x the base radius.
    let positions = compute_positions(10, 1000.0, 420.0);
    assert_eq!(positions.len(), 10);

    let base_radius = 420.0 * LAYOUT_RADIUS_FACTOR;
    for p in &positions {
        let dx = p.x - 500.0;
        let dy = p.y - 210.0;
        let dist = (dx * dx + dy * dy).sqrt();
        assert!(
            dist <= base_radius * 1.2 + 1e-3,
            "orb at ({}, {}) is {dist} from center, base radius {base_radius}",
            p.x,
            p.y
        );
    }

    // No two positions coincide.
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let same = (positions[i].x - positions[j].x).abs() < 1e-6
                && (positions[i].y - positions[j].y).abs() < 1e-6;
            assert!(!same, "positions {i} and {j} are identical");
        }
    }
}

#[test]
fn later_items_spiral_outward_on_average() {
    // The spiral factor grows with the index, so the mean distance of the
    // second half should exceed the first half's.
    let positions = compute_positions(20, 1000.0, 1000.0);
    let dist = |i: usize| {
        let dx = positions[i].x - 500.0;
        let dy = positions[i].y - 500.0;
        (dx * dx + dy * dy).sqrt()
    };
    let first: f32 = (0..10).map(dist).sum::<f32>() / 10.0;
    let second: f32 = (10..20).map(dist).sum::<f32>() / 10.0;
    assert!(second > first, "second half {second} <= first half {first}");
}
