//! Two-run A/B timing.
//!
//! [`compare_ab`] runs an operation twice, once with the registry flag `a`
//! set and once with `b` set, and times each run with a [`Timer`]. The
//! operation picks its code path by asking [`ab`] which flag is up.
//!
//! This is a single unreplicated sample per side: no warm-up, no repetition,
//! no confidence interval. Cache effects from the first run land on the
//! second. Treat the ratio as a hint and confirm with a real benchmark.
//!
//! The flags live in the shared registry, so anything else that reads `a` or
//! `b` during the run sees them too. Nothing enforces the contract between
//! caller and operation.

use toolbox_foundation::{Result, Value};
use toolbox_host::Registry;

use crate::timer::{Clock, Timer};

/// Timer name used for both runs.
pub const AB_TIMER: &str = "ab";

/// Flag raised during the first run.
pub const FLAG_A: &str = "a";

/// Flag raised during the second run.
pub const FLAG_B: &str = "b";

/// Report key holding the slow/fast ratio.
pub const RATIO_KEY: &str = "%faster";

/// Returns true while `flag` is raised in `registry`.
#[must_use]
pub fn ab(registry: &dyn Registry, flag: &str) -> bool {
    registry.flag(flag)
}

/// Outcome of [`compare_ab`].
#[derive(Clone, Debug, PartialEq)]
pub struct AbReport {
    /// Label of the faster run.
    pub fastest: &'static str,
    /// Duration of the faster run in seconds.
    pub fastest_secs: f64,
    /// Label of the slower run.
    pub slowest: &'static str,
    /// Duration of the slower run in seconds.
    pub slowest_secs: f64,
    /// `slowest_secs / fastest_secs`.
    pub ratio: f64,
}

impl AbReport {
    /// Ranks the two durations. A tie keeps `a` as the faster run.
    #[must_use]
    pub fn from_durations(a: f64, b: f64) -> Self {
        let (fastest, fastest_secs, slowest, slowest_secs) = if b < a {
            (FLAG_B, b, FLAG_A, a)
        } else {
            (FLAG_A, a, FLAG_B, b)
        };
        let ratio = if fastest_secs > 0.0 {
            slowest_secs / fastest_secs
        } else if slowest_secs > 0.0 {
            f64::INFINITY
        } else {
            1.0
        };
        Self {
            fastest,
            fastest_secs,
            slowest,
            slowest_secs,
            ratio,
        }
    }

    /// Converts to `{"%faster": ratio, <fastest>: secs, <slowest>: secs}`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::map([
            (RATIO_KEY, Value::from(self.ratio)),
            (self.fastest, Value::from(self.fastest_secs)),
            (self.slowest, Value::from(self.slowest_secs)),
        ])
    }
}

/// Times `operation` on `target` once under flag `a` and once under flag `b`.
///
/// Each flag is removed after its run. The operation receives the registry to
/// query with [`ab`].
///
/// # Errors
///
/// Returns a timer error if the `ab` timers are disturbed by the operation.
pub fn compare_ab<T, C, F>(
    timer: &mut Timer<'_, C>,
    target: &mut T,
    mut operation: F,
) -> Result<AbReport>
where
    T: ?Sized,
    C: Clock,
    F: FnMut(&mut T, &dyn Registry),
{
    let a = timed_run(timer, target, &mut operation, FLAG_A)?;
    let b = timed_run(timer, target, &mut operation, FLAG_B)?;

    let report = AbReport::from_durations(a, b);
    tracing::debug!(
        fastest = report.fastest,
        ratio = report.ratio,
        "a/b comparison finished"
    );
    Ok(report)
}

fn timed_run<T, C, F>(
    timer: &mut Timer<'_, C>,
    target: &mut T,
    operation: &mut F,
    flag: &str,
) -> Result<f64>
where
    T: ?Sized,
    C: Clock,
    F: FnMut(&mut T, &dyn Registry),
{
    timer.registry_mut().set(flag, Value::Bool(true));
    timer.start(AB_TIMER, flag)?;
    operation(target, timer.registry());
    let elapsed = timer.stop(AB_TIMER, flag);
    timer.registry_mut().unset(flag);
    elapsed
}
