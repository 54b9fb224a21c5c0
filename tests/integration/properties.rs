//! Property tests for guarantees that hold across the workspace

use proptest::prelude::*;
use toolbox::debug::{
    DEFAULT_COLLECTION_LIMIT, Inspector, ManualClock, SQL_PLACEHOLDER, Timer, ab, compare_ab,
    parse_options,
};
use toolbox::foundation::{ErrorKind, Value};
use toolbox::host::{MemoryCollection, MemoryRegistry, Model, PRODUCT_MODEL};

fn products(n: usize) -> Vec<Model> {
    (0..n)
        .map(|id| Model::new(PRODUCT_MODEL).with("entity_id", id))
        .collect()
}

fn output(inspector: Inspector<Vec<u8>>) -> String {
    String::from_utf8(inspector.into_inner()).unwrap()
}

// =============================================================================
// Options
// =============================================================================

proptest! {
    #[test]
    fn options_parse_is_idempotent(flags in prop::collection::vec("[a-z ]{0,8}", 0..6)) {
        let once = parse_options(flags.clone());
        let twice = parse_options(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.is_parsed());
    }
}

// =============================================================================
// Collections
// =============================================================================

proptest! {
    #[test]
    fn collection_output_is_clamped(n in 0usize..150) {
        let mut ins = Inspector::new(Vec::new());
        let mut collection = MemoryCollection::new(PRODUCT_MODEL, products(n));
        let printed = ins.inspect_collection(&mut collection, ()).unwrap();
        prop_assert_eq!(printed, n.min(DEFAULT_COLLECTION_LIMIT));
    }

    #[test]
    fn broken_query_prints_placeholder_once(n in 0usize..80) {
        let mut ins = Inspector::new(Vec::new());
        let mut collection =
            MemoryCollection::new(PRODUCT_MODEL, products(n)).with_query_failure("bad join");
        ins.inspect_collection(&mut collection, ()).unwrap();
        prop_assert_eq!(output(ins).matches(SQL_PLACEHOLDER).count(), 1);
    }
}

// =============================================================================
// Timers
// =============================================================================

proptest! {
    #[test]
    fn timer_round_trip(elapsed in 0.0f64..1000.0, id in 0u32..100) {
        let clock = ManualClock::new();
        let mut registry = MemoryRegistry::new();
        let mut timer = Timer::with_clock(&mut registry, clock.clone());

        timer.start("job", id).unwrap();
        clock.advance(elapsed);
        prop_assert_eq!(timer.stop("job", id).unwrap(), elapsed);

        let err = timer.stop("job", id).unwrap_err();
        let missing = matches!(err.kind, ErrorKind::MissingTimerStart { .. });
        prop_assert!(missing);
    }

    #[test]
    fn mid_is_monotonic_and_keeps_the_timer(steps in prop::collection::vec(0.0f64..10.0, 1..20)) {
        let clock = ManualClock::new();
        let mut registry = MemoryRegistry::new();
        let mut timer = Timer::with_clock(&mut registry, clock.clone());

        timer.start("job", 1).unwrap();
        let mut last = 0.0;
        for step in steps {
            clock.advance(step);
            let reading = timer.mid("job", 1).unwrap();
            prop_assert!(reading >= last);
            last = reading;
        }
        prop_assert!(timer.stop("job", 1).is_ok());
    }
}

// =============================================================================
// A/B and console output
// =============================================================================

#[test]
fn ab_with_simulated_durations() {
    let clock = ManualClock::new();
    let mut registry = MemoryRegistry::new();
    let mut timer = Timer::with_clock(&mut registry, clock.clone());

    let report = compare_ab(&mut timer, &mut (), |_, registry| {
        if ab(registry, "a") {
            clock.advance(0.01);
        } else if ab(registry, "b") {
            clock.advance(0.02);
        }
    })
    .unwrap();

    assert_eq!(report.fastest, "a");
    assert!((report.ratio - 2.0).abs() < 1e-6);
}

#[test]
fn console_mode_emits_one_statement() {
    let mut ins = Inspector::new(Vec::new());
    ins.inspect(&Value::map([("k", 1)]), ["console"]).unwrap();
    let out = output(ins);
    assert_eq!(out.matches("console.log(").count(), 1);
    assert!(out.contains(r#"{"k":1}"#));
}
