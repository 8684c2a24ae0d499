use serde::{Deserialize, Serialize};

/// A single schedulable unit.
///
/// `burst` is the total CPU demand and never changes after construction;
/// `remaining` is the per-run scratch counter the preemptive policies
/// decrement. Keeping the two apart means waiting time is always derived
/// from the original demand, and a batch can be reused across policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub name: String,
    pub arrival: usize,
    pub burst: usize,
    #[serde(default)]
    pub priority: i32,

    /// Remaining work, reset to `burst` at the start of every run.
    #[serde(default)]
    pub remaining: usize,

    #[serde(default)]
    pub completion: Option<usize>,
    #[serde(default)]
    pub turnaround: Option<usize>,
    #[serde(default)]
    pub waiting: Option<usize>,
}

impl Process {
    pub fn new(name: impl Into<String>, arrival: usize, burst: usize) -> Self {
        Process {
            name: name.into(),
            arrival,
            burst,
            priority: 0,
            remaining: burst,
            completion: None,
            turnaround: None,
            waiting: None,
        }
    }

    pub fn with_priority(name: impl Into<String>, arrival: usize, burst: usize, priority: i32) -> Self {
        Process {
            priority,
            ..Process::new(name, arrival, burst)
        }
    }

    /// Clears metrics and restores `remaining` to the full burst.
    pub fn reset(&mut self) {
        self.remaining = self.burst;
        self.completion = None;
        self.turnaround = None;
        self.waiting = None;
    }

    /// Writes the final completion time and derives turnaround and waiting
    /// from it. Waiting uses the original burst, not `remaining`.
    ///
    /// Saturating subtraction covers the one schedule that can finish a
    /// process before its nominal arrival: legacy Round Robin, which
    /// enqueues everything at time zero. Every arrival-respecting policy
    /// completes at or after arrival and never saturates.
    pub fn finalize(&mut self, completion: usize) {
        self.completion = Some(completion);
        let turnaround = completion.saturating_sub(self.arrival);
        self.turnaround = Some(turnaround);
        self.waiting = Some(turnaround.saturating_sub(self.burst));
    }

    pub fn is_done(&self) -> bool {
        self.waiting.is_some()
    }
}
