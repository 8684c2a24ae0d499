use crate::error::SchedError;
use crate::process::Process;

use super::{reset, run_in_order, validate};

/// First-Come-First-Served.
///
/// Processes run to completion strictly in the order given. The caller is
/// responsible for supplying arrival order; a batch given out of arrival
/// order is scheduled as given, idle gaps and all.
pub fn fcfs(batch: &mut [Process]) -> Result<(), SchedError> {
    validate(batch)?;
    reset(batch);
    let order: Vec<usize> = (0..batch.len()).collect();
    run_in_order(batch, &order);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_gap_advances_clock() {
        let mut procs = vec![Process::new("A", 0, 2), Process::new("B", 5, 3)];
        fcfs(&mut procs).unwrap();
        assert_eq!(procs[0].completion, Some(2));
        // B arrives at 5, so the CPU sits idle for 3 units.
        assert_eq!(procs[1].completion, Some(8));
        assert_eq!(procs[1].waiting, Some(0));
    }

    #[test]
    fn out_of_arrival_order_is_honored_as_given() {
        let mut procs = vec![Process::new("late", 10, 1), Process::new("early", 0, 1)];
        fcfs(&mut procs).unwrap();
        assert_eq!(procs[0].completion, Some(11));
        assert_eq!(procs[1].completion, Some(12));
        assert_eq!(procs[1].waiting, Some(11));
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let mut procs: Vec<Process> = vec![];
        assert!(fcfs(&mut procs).is_ok());
    }
}
