use crate::error::SchedError;
use crate::process::Process;

use super::{reset, run_dynamic, run_in_order, validate};

/// Non-preemptive Shortest Job First, legacy static-sort form.
///
/// The whole batch is sorted once by total burst (stable, so equal bursts
/// keep their input order) before any timing happens. Arrival times still
/// open idle gaps but never reorder the schedule, which diverges from
/// textbook SJF when arrivals are staggered; [`sjf_dynamic`] is the
/// corrected form.
pub fn sjf(batch: &mut [Process]) -> Result<(), SchedError> {
    validate(batch)?;
    reset(batch);
    let mut order: Vec<usize> = (0..batch.len()).collect();
    order.sort_by_key(|&i| batch[i].burst);
    run_in_order(batch, &order);
    Ok(())
}

/// Textbook non-preemptive SJF: at each decision point, run the shortest
/// job among those that have already arrived.
pub fn sjf_dynamic(batch: &mut [Process]) -> Result<(), SchedError> {
    validate(batch)?;
    reset(batch);
    run_dynamic(batch, |p| p.burst);
    Ok(())
}
