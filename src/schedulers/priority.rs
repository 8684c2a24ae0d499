use crate::error::SchedError;
use crate::process::Process;

use super::{reset, run_dynamic, run_in_order, validate};

/// Non-preemptive priority scheduling. Lower `priority` runs first.
///
/// Same control flow as legacy SJF: one stable global sort of the whole
/// batch by priority, then a sequential run. Equal priorities keep their
/// input order.
pub fn priority(batch: &mut [Process]) -> Result<(), SchedError> {
    validate(batch)?;
    reset(batch);
    let mut order: Vec<usize> = (0..batch.len()).collect();
    order.sort_by_key(|&i| batch[i].priority);
    run_in_order(batch, &order);
    Ok(())
}

/// Priority scheduling that re-selects among arrived processes at each
/// decision point instead of pre-sorting the whole batch.
pub fn priority_dynamic(batch: &mut [Process]) -> Result<(), SchedError> {
    validate(batch)?;
    reset(batch);
    run_dynamic(batch, |p| p.priority);
    Ok(())
}
