//! The five scheduling policies and their shared plumbing.
//!
//! Every entry point has the shape `fn(&mut [Process], ...) -> Result<(),
//! SchedError>`: validate, reset scratch state, simulate, finalize metrics
//! in place. Nothing is mutated when validation fails.

mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::fcfs;
pub use priority::{priority, priority_dynamic};
pub use round_robin::{round_robin, round_robin_with_arrival};
pub use sjf::{sjf, sjf_dynamic};
pub use srtf::srtf;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchedError;
use crate::process::Process;

/// Policy selector for callers that pick an algorithm at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Srtf,
    Priority,
    RoundRobin { quantum: usize },
}

impl Algorithm {
    /// Runs the selected policy with its default (legacy) behavior.
    pub fn run(&self, batch: &mut [Process]) -> Result<(), SchedError> {
        match *self {
            Algorithm::Fcfs => fcfs(batch),
            Algorithm::Sjf => sjf(batch),
            Algorithm::Srtf => srtf(batch),
            Algorithm::Priority => priority(batch),
            Algorithm::RoundRobin { quantum } => round_robin(batch, quantum),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Fcfs => write!(f, "FCFS"),
            Algorithm::Sjf => write!(f, "SJF"),
            Algorithm::Srtf => write!(f, "SRTF"),
            Algorithm::Priority => write!(f, "Priority"),
            Algorithm::RoundRobin { quantum } => write!(f, "RR (quantum {})", quantum),
        }
    }
}

/// Rejects invalid batches before anything is touched.
pub(crate) fn validate(batch: &[Process]) -> Result<(), SchedError> {
    for p in batch {
        if p.burst == 0 {
            return Err(SchedError::ZeroBurst {
                name: p.name.clone(),
            });
        }
    }
    Ok(())
}

pub(crate) fn reset(batch: &mut [Process]) {
    for p in batch.iter_mut() {
        p.reset();
    }
}

/// Non-preemptive sequential run over a fixed schedule order, with idle
/// gaps when the next process has not yet arrived.
pub(crate) fn run_in_order(batch: &mut [Process], order: &[usize]) {
    let mut now = 0;
    for &i in order {
        let p = &mut batch[i];
        if now < p.arrival {
            now = p.arrival;
        }
        let completion = now + p.burst;
        p.finalize(completion);
        now = completion;
    }
}

/// Non-preemptive run that re-selects at each decision point among the
/// processes that have arrived, picking the smallest key (ties by input
/// order). Jumps to the earliest pending arrival when nothing is eligible.
pub(crate) fn run_dynamic<K, F>(batch: &mut [Process], key: F)
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let mut now = 0;
    let mut unscheduled: Vec<usize> = (0..batch.len()).collect();
    while !unscheduled.is_empty() {
        let eligible = unscheduled
            .iter()
            .enumerate()
            .filter(|&(_, &i)| batch[i].arrival <= now)
            .min_by_key(|&(_, &i)| key(&batch[i]));
        let pos = match eligible {
            Some((pos, _)) => pos,
            None => {
                // Idle until the earliest pending arrival.
                now = unscheduled.iter().map(|&i| batch[i].arrival).min().unwrap_or(0);
                continue;
            }
        };
        let i = unscheduled.remove(pos);
        let p = &mut batch[i];
        let completion = now + p.burst;
        p.finalize(completion);
        now = completion;
    }
}
