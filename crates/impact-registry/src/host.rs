//! # Host Collaborators
//!
//! The registry reads two values from its host on every mutating call:
//! who is calling ([`IdentitySource`]) and what time it is
//! ([`ClockSource`]). It never authenticates the caller and never
//! interprets the time; both are recorded verbatim.
//!
//! Stock implementations:
//!
//! - [`FixedIdentity`]: always reports the same principal.
//! - [`ManualClock`]: a host-driven counter, e.g. a block height.
//! - [`SystemClock`]: Unix seconds, clamped so readings never decrease.
//! - [`CallContext`]: a captured `(caller, now)` pair implementing both
//!   traits, built once per request by service hosts.

use std::sync::atomic::{AtomicU64, Ordering};

use impact_core::{LedgerTime, Principal};

/// Supplies the principal of the in-flight call.
pub trait IdentitySource {
    fn current_identity(&self) -> Principal;
}

/// Supplies the current monotonic ledger time.
pub trait ClockSource {
    fn current_time(&self) -> LedgerTime;
}

/// A host providing both collaborators.
pub trait Host: IdentitySource + ClockSource {}

impl<T: IdentitySource + ClockSource + ?Sized> Host for T {}

impl<T: IdentitySource + ?Sized> IdentitySource for &T {
    fn current_identity(&self) -> Principal {
        (**self).current_identity()
    }
}

impl<T: ClockSource + ?Sized> ClockSource for &T {
    fn current_time(&self) -> LedgerTime {
        (**self).current_time()
    }
}

/// An identity source that always reports the same principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedIdentity(pub Principal);

impl IdentitySource for FixedIdentity {
    fn current_identity(&self) -> Principal {
        self.0.clone()
    }
}

/// A clock advanced explicitly by the host.
///
/// Starts at genesis. `set` never moves the clock backwards.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(start: LedgerTime) -> Self {
        Self {
            now: AtomicU64::new(start.value()),
        }
    }

    /// Advance by `delta` units and return the new time.
    pub fn advance(&self, delta: u64) -> LedgerTime {
        let prev = self
            .now
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |t| {
                Some(t.saturating_add(delta))
            })
            .unwrap_or_else(|t| t);
        LedgerTime(prev.saturating_add(delta))
    }

    /// Move the clock to `time`, or leave it if `time` is in the past.
    pub fn set(&self, time: LedgerTime) {
        self.now.fetch_max(time.value(), Ordering::SeqCst);
    }
}

impl ClockSource for ManualClock {
    fn current_time(&self) -> LedgerTime {
        LedgerTime(self.now.load(Ordering::SeqCst))
    }
}

/// Wall-clock time in Unix seconds.
///
/// Wall clocks can step backwards; readings are clamped to the highest
/// value seen so far so the registry always observes non-decreasing time.
#[derive(Debug, Default)]
pub struct SystemClock {
    high_water: AtomicU64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClockSource for SystemClock {
    fn current_time(&self) -> LedgerTime {
        let wall = u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0);
        let prev = self.high_water.fetch_max(wall, Ordering::SeqCst);
        LedgerTime(prev.max(wall))
    }
}

/// The caller and time for one operation, captured up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Principal,
    pub now: LedgerTime,
}

impl CallContext {
    pub fn new(caller: Principal, now: LedgerTime) -> Self {
        Self { caller, now }
    }

    /// Capture the current caller and time from a pair of sources.
    pub fn capture(identity: &impl IdentitySource, clock: &impl ClockSource) -> Self {
        Self {
            caller: identity.current_identity(),
            now: clock.current_time(),
        }
    }
}

impl IdentitySource for CallContext {
    fn current_identity(&self) -> Principal {
        self.caller.clone()
    }
}

impl ClockSource for CallContext {
    fn current_time(&self) -> LedgerTime {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances_and_never_rewinds() {
        let clock = ManualClock::new(LedgerTime(10));
        assert_eq!(clock.advance(5), LedgerTime(15));
        clock.set(LedgerTime(3));
        assert_eq!(clock.current_time(), LedgerTime(15));
        clock.set(LedgerTime(40));
        assert_eq!(clock.current_time(), LedgerTime(40));
    }

    #[test]
    fn system_clock_is_non_decreasing() {
        let clock = SystemClock::new();
        let a = clock.current_time();
        let b = clock.current_time();
        assert!(b >= a);
        assert!(a.value() > 0);
    }

    #[test]
    fn call_context_captures_both_sources() {
        let identity = FixedIdentity(Principal::new("ST1TEST"));
        let clock = ManualClock::new(LedgerTime(7));
        let ctx = CallContext::capture(&identity, &clock);
        assert_eq!(ctx.current_identity(), Principal::new("ST1TEST"));
        assert_eq!(ctx.current_time(), LedgerTime(7));
    }

    #[test]
    fn references_are_hosts() {
        fn takes_host(host: &impl Host) -> LedgerTime {
            host.current_time()
        }
        let ctx = CallContext::new(Principal::new("ST1TEST"), LedgerTime(3));
        assert_eq!(takes_host(&&ctx), LedgerTime(3));
    }
}
