//! Deterministic runtime ports for tests and local tooling.
//!
//! These doubles replace process-wide mutable state: each test builds its
//! own instances and passes them to the use cases.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::domain::services::{AccessCodeGenerator, Clock, IdGenerator};

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Produces `test-id-001`, `test-id-002`, ...
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: Mutex<u64>,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let mut next = self.next.lock().unwrap_or_else(|e| e.into_inner());
        *next += 1;
        format!("test-id-{:03}", *next)
    }
}

#[derive(Debug, Default)]
struct ScriptState {
    forced: VecDeque<String>,
    sequence: u64,
}

/// Returns forced codes first, then `AC000001`, `AC000002`, ...
///
/// Forcing a code that already exists in storage simulates a collision.
#[derive(Debug, Default)]
pub struct ScriptedAccessCodeGenerator {
    state: Mutex<ScriptState>,
}

impl ScriptedAccessCodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues codes to be returned by the next calls, in order.
    pub fn force_next_codes<I, S>(&self, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.forced = codes.into_iter().map(Into::into).collect();
    }
}

impl AccessCodeGenerator for ScriptedAccessCodeGenerator {
    fn generate(&self) -> String {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(code) = state.forced.pop_front() {
            return code;
        }
        state.sequence += 1;
        format!("AC{:06}", state.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_advance() {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        let clock = FixedClock::new(t0);
        assert_eq!(clock.now(), t0);

        clock.advance(Duration::hours(1));
        assert_eq!(clock.now(), t0 + Duration::hours(1));

        clock.set(t0);
        assert_eq!(clock.now(), t0);
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.generate(), "test-id-001");
        assert_eq!(ids.generate(), "test-id-002");
    }

    #[test]
    fn test_scripted_codes_drain_forced_first() {
        let codes = ScriptedAccessCodeGenerator::new();
        codes.force_next_codes(["DUP", "DUP"]);

        assert_eq!(codes.generate(), "DUP");
        assert_eq!(codes.generate(), "DUP");
        assert_eq!(codes.generate(), "AC000001");
        assert_eq!(codes.generate(), "AC000002");
    }
}
