//! Search budgets and cooperative stop conditions.
//!
//! Both engines poll a stop condition between units of work (an MCTS
//! iteration or a GA generation). A unit that has started always finishes.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How much work a single pick may spend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchBudget {
    /// A fixed number of units: MCTS iterations (summed over all workers)
    /// or GA generations.
    Iterations(u64),
    /// Wall-clock limit in milliseconds.
    TimeLimit(u64),
}

impl SearchBudget {
    /// Start tracking this budget. Time limits start counting immediately.
    #[must_use]
    pub fn start(self) -> BudgetTracker {
        match self {
            SearchBudget::Iterations(n) => BudgetTracker::Count(AtomicU64::new(n)),
            SearchBudget::TimeLimit(ms) => {
                BudgetTracker::Deadline(Deadline::after(Duration::from_millis(ms)))
            }
        }
    }
}

/// Live state of a [`SearchBudget`], shared by every worker of one search.
#[derive(Debug)]
pub enum BudgetTracker {
    /// Remaining units of work.
    Count(AtomicU64),
    /// Timer-backed flag.
    Deadline(Deadline),
}

impl BudgetTracker {
    /// Claim one unit of work. Returns `false` once the budget is spent.
    ///
    /// A count budget hands out exactly `n` claims in total across threads.
    pub fn keep_going(&self) -> bool {
        match self {
            BudgetTracker::Count(remaining) => remaining
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
                .is_ok(),
            BudgetTracker::Deadline(deadline) => !deadline.expired(),
        }
    }
}

/// A flag flipped by a one-shot timer thread.
#[derive(Clone, Debug)]
pub struct Deadline {
    expired: Arc<AtomicBool>,
}

impl Deadline {
    /// Arm a timer that expires after `duration`.
    #[must_use]
    pub fn after(duration: Duration) -> Self {
        let expired = Arc::new(AtomicBool::new(duration.is_zero()));
        if !duration.is_zero() {
            let flag = Arc::clone(&expired);
            thread::spawn(move || {
                thread::sleep(duration);
                flag.store(true, Ordering::Release);
            });
        }
        Self { expired }
    }

    /// Has the timer fired?
    #[inline]
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expired.load(Ordering::Acquire)
    }
}
