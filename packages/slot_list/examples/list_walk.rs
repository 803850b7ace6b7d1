//! Basic usage example for the list primitives.
//!
//! This example demonstrates queueing slots in FIFO order, moving them onto a
//! doubly-linked list, and walking that list with a cursor while removing elements.

#![allow(
    clippy::indexing_slicing,
    reason = "example uses plain Vec indexing for clarity"
)]

use slot_list::{Cursor, DoublyLinkedList, FifoQueue, LinkedSlots, Links};

/// A fixed set of job slots; each slot is a label plus its embedded link field.
struct Jobs {
    slots: Vec<(&'static str, Links<usize>)>,
}

impl LinkedSlots for Jobs {
    type Handle = usize;

    fn links(&self, handle: usize) -> &Links<usize> {
        &self.slots[handle].1
    }

    fn links_mut(&mut self, handle: usize) -> &mut Links<usize> {
        &mut self.slots[handle].1
    }
}

fn main() {
    let mut jobs = Jobs {
        slots: vec![
            ("fetch", Links::default()),
            ("parse", Links::default()),
            ("render", Links::default()),
            ("store", Links::default()),
        ],
    };

    // Queue every job in submission order.
    let mut pending = FifoQueue::new();
    for handle in 0..jobs.slots.len() {
        pending.push_back(&mut jobs, handle);
    }

    println!("Queued {} jobs", jobs.slots.len());

    // Start the jobs oldest-first, tracking them on a running list.
    let mut running = DoublyLinkedList::new();
    while let Some(job) = pending.pop_front(&mut jobs) {
        println!("Starting job: {}", jobs.slots[job].0);
        running.push_back(&mut jobs, job);
    }

    assert!(pending.is_empty());

    // Walk the running list and retire every second job. The cursor captures each
    // element's successor before we see it, so removing the current element is safe.
    let mut cursor: Cursor<usize> = running.cursor();
    let mut retire = false;
    while let Some(job) = cursor.advance(&jobs) {
        if retire {
            println!("Retiring job: {}", jobs.slots[job].0);
            running.remove(&mut jobs, job);
        }
        retire = !retire;
    }

    let still_running: Vec<_> = running.iter(&jobs).map(|job| jobs.slots[job].0).collect();
    println!("Still running: {still_running:?}");
    assert_eq!(still_running, vec!["fetch", "render"]);

    // Retire the rest from the back.
    while let Some(job) = running.pop_back(&mut jobs) {
        println!("Retiring job: {}", jobs.slots[job].0);
    }

    assert!(running.is_empty());
    println!("All jobs retired, list walk example completed successfully!");
}
