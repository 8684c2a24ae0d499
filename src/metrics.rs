use serde::Serialize;

use crate::process::Process;

/// Batch-level statistics over a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Latest completion time in the batch.
    pub total_time: usize,
    /// Fraction of `total_time` the CPU spent running, as opposed to idle.
    pub cpu_utilization: f64,
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    pub max_waiting: usize,
}

impl Summary {
    /// Computes the summary from a batch whose metrics have been filled
    /// in. Processes without metrics (an unfinished or never-run batch)
    /// are skipped; an empty batch yields a zeroed summary.
    pub fn from_batch(batch: &[Process]) -> Summary {
        let done: Vec<&Process> = batch.iter().filter(|p| p.is_done()).collect();
        if done.is_empty() {
            return Summary {
                total_time: 0,
                cpu_utilization: 0.0,
                avg_turnaround: 0.0,
                avg_waiting: 0.0,
                max_waiting: 0,
            };
        }

        let n = done.len() as f64;
        let total_time = done.iter().filter_map(|p| p.completion).max().unwrap_or(0);
        let busy: usize = done.iter().map(|p| p.burst).sum();
        Summary {
            total_time,
            cpu_utilization: if total_time == 0 {
                0.0
            } else {
                busy as f64 / total_time as f64
            },
            avg_turnaround: done.iter().filter_map(|p| p.turnaround).sum::<usize>() as f64 / n,
            avg_waiting: done.iter().filter_map(|p| p.waiting).sum::<usize>() as f64 / n,
            max_waiting: done.iter().filter_map(|p| p.waiting).max().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedulers::fcfs;

    #[test]
    fn summarizes_a_finished_batch() {
        let mut procs = vec![Process::new("A", 0, 2), Process::new("B", 0, 2)];
        fcfs(&mut procs).unwrap();
        let s = Summary::from_batch(&procs);
        assert_eq!(s.total_time, 4);
        assert_eq!(s.cpu_utilization, 1.0);
        assert_eq!(s.avg_waiting, 1.0);
        assert_eq!(s.max_waiting, 2);
        assert_eq!(s.avg_turnaround, 3.0);
    }

    #[test]
    fn idle_gap_shows_up_in_utilization() {
        let mut procs = vec![Process::new("A", 0, 2), Process::new("B", 6, 2)];
        fcfs(&mut procs).unwrap();
        let s = Summary::from_batch(&procs);
        assert_eq!(s.total_time, 8);
        assert_eq!(s.cpu_utilization, 0.5);
    }

    #[test]
    fn empty_and_unrun_batches_are_zeroed() {
        assert_eq!(Summary::from_batch(&[]).total_time, 0);
        let procs = vec![Process::new("A", 0, 2)];
        assert_eq!(Summary::from_batch(&procs).total_time, 0);
    }
}
