//! Debounce and throttle combinators for high-frequency DOM events.
//!
//! The firing decisions live in plain structs so they can be tested off the
//! browser; `Debounce` and `Throttle` wrap them with gloo timers.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Debounce bookkeeping. Every call arms a new generation and only the
/// newest generation is still allowed to fire when its timer lands.
#[derive(Debug, Default)]
pub struct DebounceCore {
    generation: u64,
}

impl DebounceCore {
    /// Registers a call and returns its generation token.
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// True only for the most recently armed generation.
    pub fn should_fire(&self, armed: u64) -> bool {
        armed == self.generation
    }
}

/// Throttle gate. The first call in a window runs and closes the gate;
/// later calls are dropped until the window elapses.
#[derive(Debug, Default)]
pub struct ThrottleCore {
    cooling: bool,
}

impl ThrottleCore {
    pub fn try_run(&mut self) -> bool {
        if self.cooling {
            false
        } else {
            self.cooling = true;
            true
        }
    }

    pub fn window_elapsed(&mut self) {
        self.cooling = false;
    }
}

/// Defers `action` until `wait_ms` have passed without another call.
pub struct Debounce {
    wait_ms: u32,
    core: Rc<RefCell<DebounceCore>>,
    pending: Rc<RefCell<Option<Timeout>>>,
    action: Rc<dyn Fn()>,
}

impl Debounce {
    pub fn new(wait_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            wait_ms,
            core: Rc::new(RefCell::new(DebounceCore::default())),
            pending: Rc::new(RefCell::new(None)),
            action: Rc::new(action),
        }
    }

    pub fn call(&self) {
        let armed = self.core.borrow_mut().arm();
        let core = self.core.clone();
        let action = self.action.clone();
        let timeout = Timeout::new(self.wait_ms, move || {
            if core.borrow().should_fire(armed) {
                action();
            }
        });
        // Replacing the previous handle drops it, which cancels its timer.
        *self.pending.borrow_mut() = Some(timeout);
    }
}

/// Runs `action` on the leading edge of each `limit_ms` window and drops
/// calls made while the window is still open.
pub struct Throttle {
    limit_ms: u32,
    core: Rc<RefCell<ThrottleCore>>,
    action: Rc<dyn Fn()>,
}

impl Throttle {
    pub fn new(limit_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            limit_ms,
            core: Rc::new(RefCell::new(ThrottleCore::default())),
            action: Rc::new(action),
        }
    }

    pub fn call(&self) {
        if self.core.borrow_mut().try_run() {
            (self.action)();
            let core = self.core.clone();
            Timeout::new(self.limit_ms, move || {
                core.borrow_mut().window_elapsed();
            })
            .forget();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DebounceCore, ThrottleCore};

    #[test]
    fn debounce_fires_only_for_the_last_call() {
        let mut core = DebounceCore::default();
        let first = core.arm();
        let second = core.arm();
        let last = core.arm();
        assert!(!core.should_fire(first));
        assert!(!core.should_fire(second));
        assert!(core.should_fire(last));
    }

    #[test]
    fn debounce_single_call_fires() {
        let mut core = DebounceCore::default();
        let only = core.arm();
        assert!(core.should_fire(only));
    }

    #[test]
    fn debounce_rearms_after_firing() {
        let mut core = DebounceCore::default();
        let first = core.arm();
        assert!(core.should_fire(first));
        let second = core.arm();
        assert!(!core.should_fire(first));
        assert!(core.should_fire(second));
    }

    #[test]
    fn throttle_runs_once_per_window() {
        let mut core = ThrottleCore::default();
        let ran: Vec<bool> = (0..5).map(|_| core.try_run()).collect();
        assert_eq!(ran, vec![true, false, false, false, false]);
    }

    #[test]
    fn throttle_reopens_after_the_window() {
        let mut core = ThrottleCore::default();
        assert!(core.try_run());
        assert!(!core.try_run());
        core.window_elapsed();
        assert!(core.try_run());
        assert!(!core.try_run());
    }
}
