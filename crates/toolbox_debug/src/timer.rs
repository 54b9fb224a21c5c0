//! Named stopwatches kept in the host registry.
//!
//! A timer is identified by `name + id`. Starting stores the current clock
//! reading under that key; stopping reads and removes it; a mid reading reads
//! it and leaves it in place. The [`Timer`] itself holds no timer state, so
//! readings survive across unrelated calls that share the registry.
//!
//! A start without a matching stop leaves its entry in the registry for the
//! rest of the request. Nothing expires it.
//!
//! # Example
//!
//! ```
//! use toolbox_debug::{ManualClock, Timer};
//! use toolbox_host::MemoryRegistry;
//!
//! let clock = ManualClock::new();
//! let mut registry = MemoryRegistry::new();
//! let mut timer = Timer::with_clock(&mut registry, clock.clone());
//!
//! timer.start("reindex", 1)?;
//! clock.advance(0.25);
//! assert_eq!(timer.stop("reindex", 1)?, 0.25);
//! # Ok::<(), toolbox_foundation::Error>(())
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Instant;

use toolbox_foundation::{Error, ErrorContext, Result, Value};
use toolbox_host::Registry;

/// Id used when a caller runs a single timer per name.
pub const DEFAULT_TIMER_ID: u32 = 1;

// =============================================================================
// Phase
// =============================================================================

/// What a call to [`Timer::mark`] does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Record the start time.
    Start,
    /// Read and clear the start time.
    Stop,
    /// Read the start time and keep it.
    Mid,
}

impl Phase {
    /// Returns the phase keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Mid => "mid",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            "mid" => Ok(Self::Mid),
            other => Err(Error::invalid_timer_phase(other)),
        }
    }
}

// =============================================================================
// Clocks
// =============================================================================

/// Source of timestamps in floating-point seconds.
pub trait Clock {
    /// Current reading. Readings never decrease.
    fn now(&self) -> f64;
}

/// Monotonic wall clock.
///
/// All instances measure from one process-wide origin, so readings taken
/// through different timers are comparable.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same reading.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Creates a clock reading zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock reading `seconds`.
    #[must_use]
    pub fn at(seconds: f64) -> Self {
        let clock = Self::new();
        clock.now.set(seconds);
        clock
    }

    /// Moves the clock forward by `seconds`. Negative amounts are ignored.
    pub fn advance(&self, seconds: f64) {
        if seconds > 0.0 {
            self.now.set(self.now.get() + seconds);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

// =============================================================================
// Timer
// =============================================================================

/// Builds the registry key for a timer.
#[must_use]
pub fn timer_key(name: &str, id: impl fmt::Display) -> String {
    format!("{name}{id}")
}

/// Stopwatch over a host registry.
pub struct Timer<'r, C: Clock = SystemClock> {
    registry: &'r mut dyn Registry,
    clock: C,
}

impl<'r> Timer<'r, SystemClock> {
    /// Creates a timer using the system clock.
    pub fn new(registry: &'r mut dyn Registry) -> Self {
        Self::with_clock(registry, SystemClock)
    }
}

impl<'r, C: Clock> Timer<'r, C> {
    /// Creates a timer using `clock`.
    pub fn with_clock(registry: &'r mut dyn Registry, clock: C) -> Self {
        Self { registry, clock }
    }

    /// The clock behind this timer.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Read access to the registry.
    pub fn registry(&self) -> &dyn Registry {
        &*self.registry
    }

    /// Write access to the registry.
    pub fn registry_mut(&mut self) -> &mut dyn Registry {
        &mut *self.registry
    }

    /// Applies `phase` to the timer `name + id`.
    ///
    /// Returns `None` for [`Phase::Start`] and the elapsed seconds otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingTimerStart`] when stopping or reading a
    /// timer that was never started (or was already stopped).
    ///
    /// [`ErrorKind::MissingTimerStart`]: toolbox_foundation::ErrorKind::MissingTimerStart
    pub fn mark(
        &mut self,
        phase: Phase,
        name: &str,
        id: impl fmt::Display,
    ) -> Result<Option<f64>> {
        let key = timer_key(name, id);
        let now = self.clock.now();

        match phase {
            Phase::Start => {
                self.registry.set(&key, Value::Float(now));
                tracing::debug!(%key, "timer started");
                Ok(None)
            }
            Phase::Mid => {
                let started = self.started_at(&key, phase)?;
                let elapsed = now - started;
                tracing::debug!(%key, elapsed, "timer read");
                Ok(Some(elapsed))
            }
            Phase::Stop => {
                let started = self.started_at(&key, phase)?;
                self.registry.unset(&key);
                let elapsed = now - started;
                tracing::debug!(%key, elapsed, "timer stopped");
                Ok(Some(elapsed))
            }
        }
    }

    /// Parses `phase` and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidTimerPhase`] for anything other than
    /// `start`, `stop` or `mid`, plus everything [`mark`](Self::mark) returns.
    ///
    /// [`ErrorKind::InvalidTimerPhase`]: toolbox_foundation::ErrorKind::InvalidTimerPhase
    pub fn mark_str(
        &mut self,
        phase: &str,
        name: &str,
        id: impl fmt::Display,
    ) -> Result<Option<f64>> {
        self.mark(phase.parse()?, name, id)
    }

    /// Starts the timer `name + id`, restarting it if it is running.
    ///
    /// # Errors
    ///
    /// Never fails today; the signature matches the other phases.
    pub fn start(&mut self, name: &str, id: impl fmt::Display) -> Result<()> {
        self.mark(Phase::Start, name, id).map(|_| ())
    }

    /// Stops the timer `name + id` and returns the elapsed seconds.
    ///
    /// # Errors
    ///
    /// See [`mark`](Self::mark).
    pub fn stop(&mut self, name: &str, id: impl fmt::Display) -> Result<f64> {
        self.mark(Phase::Stop, name, id).map(Option::unwrap_or_default)
    }

    /// Returns the elapsed seconds of the timer `name + id` without stopping it.
    ///
    /// # Errors
    ///
    /// See [`mark`](Self::mark).
    pub fn mid(&mut self, name: &str, id: impl fmt::Display) -> Result<f64> {
        self.mark(Phase::Mid, name, id).map(Option::unwrap_or_default)
    }

    fn started_at(&self, key: &str, phase: Phase) -> Result<f64> {
        self.registry
            .get(key)
            .and_then(Value::as_number)
            .ok_or_else(|| {
                Error::missing_timer_start(key)
                    .with_context(ErrorContext::new().with_source(format!("timer {phase}")))
            })
    }
}
