//! A CPU scheduling simulator library.
//!
//! This library computes completion, turnaround and waiting times for a
//! static batch of synthetic processes under five scheduling policies:
//! FCFS, SJF, SRTF, Priority and Round Robin. It schedules nothing real;
//! each entry point is an offline calculator that annotates the batch it
//! is given and returns.
//!
//! Each policy is an independent function over the same [`Process`] model.
//! Scratch state (`remaining`) and previously computed metrics are reset at
//! the start of every invocation, so the same batch can be fed to several
//! policies in sequence without manual copying.

pub mod error;
pub mod input;
pub mod metrics;
pub mod process;
pub mod schedulers;

pub use crate::error::SchedError;
pub use crate::metrics::Summary;
pub use crate::process::Process;
pub use crate::schedulers::{
    fcfs, priority, priority_dynamic, round_robin, round_robin_with_arrival, sjf, sjf_dynamic,
    srtf, Algorithm,
};
