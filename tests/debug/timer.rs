//! Integration tests for registry-backed timers

use toolbox_debug::{DEFAULT_TIMER_ID, ManualClock, Phase, Timer, timer_key};
use toolbox_foundation::{ErrorKind, Value};
use toolbox_host::{MemoryRegistry, Registry};

#[test]
fn timers_survive_separate_timer_handles() {
    let clock = ManualClock::new();
    let mut registry = MemoryRegistry::new();

    Timer::with_clock(&mut registry, clock.clone())
        .start("import", DEFAULT_TIMER_ID)
        .unwrap();
    clock.advance(4.0);
    let elapsed = Timer::with_clock(&mut registry, clock.clone())
        .stop("import", DEFAULT_TIMER_ID)
        .unwrap();

    assert_eq!(elapsed, 4.0);
    assert!(registry.is_empty());
}

#[test]
fn ids_keep_timers_apart() {
    let clock = ManualClock::new();
    let mut registry = MemoryRegistry::new();
    let mut timer = Timer::with_clock(&mut registry, clock.clone());

    timer.start("row", 1).unwrap();
    clock.advance(1.0);
    timer.start("row", 2).unwrap();
    clock.advance(1.0);

    assert_eq!(timer.stop("row", 2).unwrap(), 1.0);
    assert_eq!(timer.stop("row", 1).unwrap(), 2.0);
}

#[test]
fn restart_resets_the_reading() {
    let clock = ManualClock::new();
    let mut registry = MemoryRegistry::new();
    let mut timer = Timer::with_clock(&mut registry, clock.clone());

    timer.start("x", 1).unwrap();
    clock.advance(5.0);
    timer.start("x", 1).unwrap();
    clock.advance(1.0);
    assert_eq!(timer.stop("x", 1).unwrap(), 1.0);
}

#[test]
fn string_phases() {
    let clock = ManualClock::new();
    let mut registry = MemoryRegistry::new();
    let mut timer = Timer::with_clock(&mut registry, clock.clone());

    assert_eq!(timer.mark_str("start", "x", 1).unwrap(), None);
    clock.advance(0.5);
    assert_eq!(timer.mark_str("mid", "x", 1).unwrap(), Some(0.5));
    assert_eq!(timer.mark_str("stop", "x", 1).unwrap(), Some(0.5));

    let err = timer.mark_str("lap", "x", 1).unwrap_err();
    assert!(err.is_timer_misuse());
    assert!(matches!(err.kind, ErrorKind::InvalidTimerPhase(_)));
}

#[test]
fn stop_without_start_names_the_key() {
    let mut registry = MemoryRegistry::new();
    let mut timer = Timer::new(&mut registry);
    let err = timer.mark(Phase::Stop, "checkout", 3).unwrap_err();
    assert!(err.to_string().contains("checkout3"));
}

#[test]
fn foreign_values_are_not_start_times() {
    let mut registry = MemoryRegistry::new();
    registry.set(&timer_key("x", 1), Value::from("yesterday"));
    let mut timer = Timer::new(&mut registry);
    assert!(timer.mid("x", 1).is_err());
}
