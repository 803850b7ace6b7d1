//! Tracking in-flight work with a pool and a caller-owned active list.
//!
//! Borrowed records are threaded onto a `DoublyLinkedList` from the `slot_list` crate, with
//! the pool itself serving as the link storage. After the pool is built, the whole workflow
//! runs without a single allocation.

use new_zealand::nz;
use record_pool::{OomPolicy, RecordPool};
use slot_list::DoublyLinkedList;

#[derive(Default)]
struct Connection {
    peer: u32,
    bytes_sent: u64,
}

fn main() {
    let mut pool = RecordPool::<Connection>::builder()
        .initial_capacity(nz!(8))
        .oom_policy(OomPolicy::None)
        .reset_hook(|connection| *connection = Connection::default())
        .build()
        .unwrap();

    let mut active = DoublyLinkedList::new();

    println!(
        "Pool ready with {} free connection records",
        pool.available()
    );

    // Open a few connections and put them on the active list.
    for (peer, bytes_sent) in [(1, 120), (2, 480), (3, 96), (4, 512), (5, 300)] {
        let handle = pool.acquire().expect("the pool was sized for this demo");

        let connection = pool.get_mut(handle);
        connection.peer = peer;
        connection.bytes_sent = bytes_sent;

        active.push_back(&mut pool, handle);
    }

    println!(
        "{} connections active, {} records still free",
        pool.len(),
        pool.available()
    );

    // Walk the active list and close the connections that have sent enough, removing them
    // mid-walk. The cursor tolerates removal of the element it just returned.
    let mut cursor = active.cursor();
    while let Some(handle) = cursor.advance(&pool) {
        let connection = pool.get(handle);

        if connection.bytes_sent >= 300 {
            println!(
                "Closing peer {} after {} bytes",
                connection.peer, connection.bytes_sent
            );
            active.remove(&mut pool, handle);
            pool.release(handle);
        }
    }

    // Drain the connections that are still open.
    while let Some(handle) = active.pop_front(&mut pool) {
        let connection = pool.get(handle);
        println!(
            "Closing peer {} after {} bytes",
            connection.peer, connection.bytes_sent
        );
        pool.release(handle);
    }

    assert!(pool.is_empty());
    assert_eq!(pool.available(), pool.capacity());

    println!("All connection records returned to the pool - example completed successfully!");
}
