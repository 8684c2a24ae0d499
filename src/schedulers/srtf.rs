use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::error::SchedError;
use crate::process::Process;

use super::{reset, validate};

/// Preemptive Shortest Remaining Time First.
///
/// Simulates one time unit at a time: pending processes join the ready
/// heap once the clock reaches their arrival, the process with the least
/// remaining work runs for one unit, and a shorter new arrival preempts
/// at the next unit boundary. Ties on remaining work break by earliest
/// arrival, then input order, so the schedule is deterministic.
///
/// `completion` is written provisionally after every unit a process runs;
/// only the write that drains `remaining` to zero finalizes turnaround
/// and waiting. O(total burst x log n) heap traffic, fine for the small
/// synthetic batches this is meant for.
pub fn srtf(batch: &mut [Process]) -> Result<(), SchedError> {
    validate(batch)?;
    reset(batch);

    let mut pending: VecDeque<usize> = {
        let mut order: Vec<usize> = (0..batch.len()).collect();
        order.sort_by_key(|&i| batch[i].arrival);
        order.into()
    };
    // Keyed (remaining, arrival, input index); Reverse makes it a min-heap.
    let mut ready: BinaryHeap<Reverse<(usize, usize, usize)>> = BinaryHeap::new();
    let mut now = 0;

    loop {
        while let Some(&i) = pending.front() {
            if batch[i].arrival > now {
                break;
            }
            ready.push(Reverse((batch[i].remaining, batch[i].arrival, i)));
            pending.pop_front();
        }

        let Some(Reverse((_, _, i))) = ready.pop() else {
            match pending.front() {
                // Idle skip to the next arrival.
                Some(&next) => {
                    now = batch[next].arrival;
                    continue;
                }
                None => break,
            }
        };

        let p = &mut batch[i];
        p.remaining -= 1;
        now += 1;
        p.completion = Some(now);
        if p.remaining > 0 {
            ready.push(Reverse((p.remaining, p.arrival, i)));
        } else {
            p.finalize(now);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorter_arrival_preempts_running_process() {
        let mut procs = vec![Process::new("long", 0, 10), Process::new("short", 2, 2)];
        srtf(&mut procs).unwrap();
        // long runs [0,2), short preempts and runs [2,4), long resumes.
        assert_eq!(procs[1].completion, Some(4));
        assert_eq!(procs[0].completion, Some(12));
        assert_eq!(procs[1].waiting, Some(0));
        assert_eq!(procs[0].waiting, Some(2));
    }

    #[test]
    fn equal_remaining_breaks_by_arrival_then_input_order() {
        let mut procs = vec![
            Process::new("B", 1, 3),
            Process::new("A", 0, 3),
            Process::new("C", 1, 3),
        ];
        srtf(&mut procs).unwrap();
        // A arrived first; B precedes C in the input on the arrival tie.
        assert_eq!(procs[1].completion, Some(3));
        assert_eq!(procs[0].completion, Some(6));
        assert_eq!(procs[2].completion, Some(9));
    }

    #[test]
    fn idle_skips_to_next_arrival() {
        let mut procs = vec![Process::new("A", 4, 2)];
        srtf(&mut procs).unwrap();
        assert_eq!(procs[0].completion, Some(6));
        assert_eq!(procs[0].waiting, Some(0));
    }

    #[test]
    fn drains_every_process_to_zero_remaining() {
        let mut procs = vec![
            Process::new("A", 0, 5),
            Process::new("B", 3, 1),
            Process::new("C", 7, 4),
        ];
        srtf(&mut procs).unwrap();
        assert!(procs.iter().all(|p| p.remaining == 0));
        // A runs [0,3) and [4,6), B preempts at [3,4), the CPU idles one
        // unit until C arrives at 7.
        assert_eq!(procs[0].completion, Some(6));
        assert_eq!(procs[1].completion, Some(4));
        assert_eq!(procs[2].completion, Some(11));
    }
}
