use std::collections::VecDeque;

use crate::error::SchedError;
use crate::process::Process;

use super::{reset, validate};

/// Round Robin with a fixed time slice, legacy form.
///
/// Every process is treated as available at time zero regardless of its
/// arrival time: the whole batch is enqueued in input order and the head
/// of the queue runs for up to one quantum, re-entering at the tail if
/// work remains. Turnaround and waiting are still derived from the real
/// arrival times, so a late-arriving process scheduled this way can look
/// better than any arrival-respecting scheduler could make it.
/// [`round_robin_with_arrival`] is the arrival-enforcing variant.
///
/// Fails with [`SchedError::InvalidQuantum`] before touching the batch if
/// `quantum` is zero.
pub fn round_robin(batch: &mut [Process], quantum: usize) -> Result<(), SchedError> {
    if quantum == 0 {
        return Err(SchedError::InvalidQuantum(quantum));
    }
    validate(batch)?;
    reset(batch);

    let mut queue: VecDeque<usize> = (0..batch.len()).collect();
    let mut now = 0;
    while let Some(i) = queue.pop_front() {
        let p = &mut batch[i];
        if p.remaining > quantum {
            now += quantum;
            p.remaining -= quantum;
            queue.push_back(i);
        } else {
            now += p.remaining;
            p.remaining = 0;
            p.finalize(now);
        }
    }
    Ok(())
}

/// Round Robin that admits a process into the ready queue only once its
/// arrival time has passed. Processes arriving during a slice enter the
/// queue ahead of the preempted process; the clock jumps forward when the
/// queue runs dry before all arrivals are in.
pub fn round_robin_with_arrival(batch: &mut [Process], quantum: usize) -> Result<(), SchedError> {
    if quantum == 0 {
        return Err(SchedError::InvalidQuantum(quantum));
    }
    validate(batch)?;
    reset(batch);

    let mut pending: VecDeque<usize> = {
        let mut order: Vec<usize> = (0..batch.len()).collect();
        order.sort_by_key(|&i| batch[i].arrival);
        order.into()
    };
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut now = 0;

    loop {
        admit(batch, &mut pending, &mut ready, now);
        let Some(i) = ready.pop_front() else {
            match pending.front() {
                Some(&next) => {
                    now = batch[next].arrival;
                    continue;
                }
                None => break,
            }
        };

        let slice = quantum.min(batch[i].remaining);
        now += slice;
        batch[i].remaining -= slice;
        if batch[i].remaining == 0 {
            batch[i].finalize(now);
        } else {
            admit(batch, &mut pending, &mut ready, now);
            ready.push_back(i);
        }
    }
    Ok(())
}

fn admit(
    batch: &[Process],
    pending: &mut VecDeque<usize>,
    ready: &mut VecDeque<usize>,
    now: usize,
) {
    while let Some(&i) = pending.front() {
        if batch[i].arrival > now {
            break;
        }
        ready.push_back(i);
        pending.pop_front();
    }
}
