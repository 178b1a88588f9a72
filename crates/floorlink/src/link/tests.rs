use super::*;
use crate::layout::fixtures::{blocked_pair, blocker, facing_pair};
use crate::layout::{AccessPoint, Door, Orientation, Side, Unit};
use crate::locks::{derive_locks, Lock};
use crate::params::Params;
use nalgebra::vector;

fn pair_report(units: &[Unit]) -> LinkReport {
    let locks = derive_locks(units);
    assert_eq!(locks.len(), 2);
    evaluate_link(
        Anchor::from(&locks[0]),
        Anchor::from(&locks[1]),
        units,
        &Params::default(),
    )
}

#[test]
fn facing_locks_talk_unobstructed() {
    let r = pair_report(&facing_pair());
    assert!(r.connected);
    assert_eq!(r.crossings, 0);
    assert_eq!(r.penalty_px, 0.0);
    // (37,50) → (13,150)
    assert!((r.distance - (24.0f64.powi(2) + 100.0f64.powi(2)).sqrt()).abs() < 1e-9);
    let ab = r.a_to_b.unwrap();
    let ba = r.b_to_a.unwrap();
    assert_eq!(ab.in_cone, Some(true));
    assert_eq!(ba.in_cone, Some(true));
    assert_eq!(ab.range, 750.0);
}

#[test]
fn own_rooms_do_not_obstruct() {
    let units = facing_pair();
    let locks = derive_locks(&units);
    let eps = endpoint_units(locks[0].pos, locks[1].pos, &units);
    assert_eq!(eps, vec![0, 1]);
    assert_eq!(count_crossings(locks[0].pos, locks[1].pos, &units), 0);
}

#[test]
fn blocker_costs_one_crossing() {
    let r = pair_report(&blocked_pair());
    assert_eq!(r.crossings, 1);
    assert_eq!(r.penalty_px, 250.0);
    assert_eq!(r.a_to_b.unwrap().range, 500.0);
    assert!(r.connected);
}

#[test]
fn triangle_blocker_costs_one_crossing() {
    // Corners (0,75), (50,75), (0,125); the segment enters through the top leg.
    let mut units = facing_pair();
    units.push(Unit::triangle("wedge", Orientation::Nw, 0.0, 75.0, 50.0, 50.0));
    let locks = derive_locks(&units);
    assert_eq!(count_crossings(locks[0].pos, locks[1].pos, &units), 1);
    let r = pair_report(&units);
    assert_eq!(r.crossings, 1);
    assert_eq!(r.penalty_px, 250.0);
    assert!(r.connected);
}

#[test]
fn heavy_penalty_cuts_the_link() {
    let units = blocked_pair();
    let locks = derive_locks(&units);
    let params = Params {
        cross_penalty: 150.0,
        ..Params::default()
    };
    let r = evaluate_link(Anchor::from(&locks[0]), Anchor::from(&locks[1]), &units, &params);
    assert_eq!(r.a_to_b.unwrap().range, 0.0);
    assert!(!r.connected);
}

#[test]
fn same_unit_crossed_twice_counts_once() {
    // A long blocker the segment enters and leaves through different edges.
    let mut units = facing_pair();
    units.push(Unit::rect("wide", -100.0, 70.0, 300.0, 40.0));
    let locks = derive_locks(&units);
    assert_eq!(count_crossings(locks[0].pos, locks[1].pos, &units), 1);
}

#[test]
fn one_sided_cone_is_not_enough() {
    // Upper lock faces down at the lower one; the lower lock faces right, so
    // the upper lock is behind it and only the out-of-cone range applies.
    let units = vec![
        Unit::rect("upper", 0.0, 0.0, 50.0, 50.0).with_door(Door::locked(Side::Bottom)),
        Unit::rect("lower", 0.0, 500.0, 50.0, 50.0).with_door(Door::locked(Side::Right)),
    ];
    let locks = derive_locks(&units);
    let (a, b) = (Anchor::from(&locks[0]), Anchor::from(&locks[1]));
    let r = evaluate_link(a, b, &units, &Params::default());
    assert_eq!(r.a_to_b.unwrap().in_cone, Some(true));
    assert_eq!(r.b_to_a.unwrap().in_cone, Some(false));
    assert!(r.distance > 375.0 && r.distance < 750.0);
    assert!(!r.connected);
    assert!(!can_talk(b, a, &units, &Params::default()));

    // Turning the lower door to face up admits both directions.
    let mut facing = units.clone();
    facing[1].doors[0] = Door::locked(Side::Top);
    let locks = derive_locks(&facing);
    assert!(can_talk(
        Anchor::from(&locks[0]),
        Anchor::from(&locks[1]),
        &facing,
        &Params::default()
    ));
}

#[test]
fn undefined_normal_fails_closed() {
    let units = facing_pair();
    let good = derive_locks(&units)[0];
    let broken = Lock {
        pos: good.pos + vector![0.0, 1.0],
        side: Side::Hypotenuse,
        orientation: None,
        unit: 0,
        door: 0,
    };
    let r = evaluate_link(Anchor::from(&good), Anchor::from(&broken), &units, &Params::default());
    assert!(r.b_to_a.is_none());
    assert!(!r.connected);
    let ap = AccessPoint::new("ap", good.pos.x, good.pos.y, 1000.0);
    assert!(!can_talk(
        Anchor::from(&ap),
        Anchor::from(&broken),
        &units,
        &Params::default()
    ));
}

#[test]
fn access_point_only_checks_the_lock_cone_and_its_range() {
    let units = facing_pair();
    let lock = derive_locks(&units)[0]; // (37,50) facing down
    let p = Params::default();

    let near = AccessPoint::new("near", 25.0, 100.0, 200.0);
    let r = evaluate_link(Anchor::from(&lock), Anchor::from(&near), &units, &p);
    assert!(r.connected);
    assert_eq!(r.b_to_a.unwrap().in_cone, None);

    let short = AccessPoint::new("short", 25.0, 100.0, 10.0);
    assert!(!can_talk(Anchor::from(&short), Anchor::from(&lock), &units, &p));

    // Behind the lock: out-of-cone range (375 px) governs.
    let behind_ok = AccessPoint::new("b1", 37.0, -200.0, 1000.0);
    assert!(can_talk(Anchor::from(&lock), Anchor::from(&behind_ok), &units, &p));
    let behind_far = AccessPoint::new("b2", 37.0, -400.0, 1000.0);
    assert!(!can_talk(Anchor::from(&lock), Anchor::from(&behind_far), &units, &p));
}

#[test]
fn access_points_pair_up_within_penalised_range() {
    let units = vec![blocker()];
    let a = AccessPoint::new("a", 25.0, 40.0, 600.0);
    let b = AccessPoint::new("b", 25.0, 140.0, 600.0);
    let p = Params::default();
    let r = evaluate_link(Anchor::from(&a), Anchor::from(&b), &units, &p);
    assert_eq!(r.crossings, 1);
    assert_eq!(r.a_to_b.unwrap().range, 500.0);
    assert!(r.connected);
    let tight = AccessPoint::new("c", 25.0, 140.0, 50.0);
    assert!(!can_talk(Anchor::from(&a), Anchor::from(&tight), &units, &p));
}

#[test]
fn coincident_anchors_use_out_of_cone_range() {
    let units = facing_pair();
    let lock = derive_locks(&units)[0];
    let r = evaluate_link(Anchor::from(&lock), Anchor::from(&lock), &units, &Params::default());
    assert_eq!(r.distance, 0.0);
    assert_eq!(r.a_to_b.unwrap().in_cone, Some(false));
    assert!(r.connected);
}

#[test]
fn cone_boundary() {
    let n = vector![0.0, 1.0];
    let cos30 = 30f64.to_radians().cos();
    let inside = vector![(29f64).to_radians().sin(), (29f64).to_radians().cos()];
    let outside = vector![(31f64).to_radians().sin(), (31f64).to_radians().cos()];
    assert!(in_cone(n, inside * 10.0, cos30));
    assert!(!in_cone(n, outside * 10.0, cos30));
    assert!(!in_cone(n, vector![0.0, 0.0], cos30));
    // Half-angle 180° still requires a forward component.
    assert!(!in_cone(n, vector![1.0, 0.0], -1.0));
}

mod random_layouts {
    use super::*;
    use crate::layout::rand::{draw_layout, LayoutCfg, ReplayToken};
    use proptest::prelude::*;

    fn cfg() -> LayoutCfg {
        LayoutCfg {
            cols: 4,
            rows: 3,
            access_points: 0,
            ..LayoutCfg::default()
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn predicate_is_symmetric_and_bounded(seed in any::<u64>()) {
            let layout = draw_layout(cfg(), ReplayToken { seed, index: 0 });
            let locks = derive_locks(&layout.units);
            let p = Params::default();
            for i in 0..locks.len() {
                for j in (i + 1)..locks.len() {
                    let (a, b) = (Anchor::from(&locks[i]), Anchor::from(&locks[j]));
                    let ab = evaluate_link(a, b, &layout.units, &p);
                    let ba = evaluate_link(b, a, &layout.units, &p);
                    prop_assert_eq!(ab.connected, ba.connected);
                    prop_assert_eq!(ab.crossings, ba.crossings);
                    if ab.connected {
                        prop_assert!(ab.distance <= (p.base_in_cone_px() - ab.penalty_px).max(0.0));
                    }
                }
            }
        }

        #[test]
        fn extra_unit_never_creates_a_link(
            seed in any::<u64>(),
            x in 0.0..400.0f64,
            y in 0.0..300.0f64,
        ) {
            let layout = draw_layout(cfg(), ReplayToken { seed, index: 1 });
            let locks = derive_locks(&layout.units);
            let mut walled = layout.units.clone();
            walled.push(Unit::rect("wall", x, y, 75.0, 25.0));
            let p = Params::default();
            for i in 0..locks.len() {
                for j in (i + 1)..locks.len() {
                    let (a, b) = (Anchor::from(&locks[i]), Anchor::from(&locks[j]));
                    if can_talk(a, b, &walled, &p) {
                        prop_assert!(can_talk(a, b, &layout.units, &p));
                    }
                }
            }
        }
    }
}
