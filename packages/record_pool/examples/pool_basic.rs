//! Basic usage example for `RecordPool`.
//!
//! This example demonstrates building a pool, borrowing and returning records, and how the
//! exhaustion policy grows the pool on demand.

use new_zealand::nz;
use record_pool::{OomPolicy, RecordPool};

fn main() {
    let mut pool = RecordPool::<String>::builder()
        .initial_capacity(nz!(4))
        .oom_policy(OomPolicy::Double)
        .reset_hook(String::clear)
        .build()
        .unwrap();

    println!("Created RecordPool with capacity {}", pool.capacity());

    // Borrow a record and fill it in.
    let greeting = pool.acquire().expect("a new pool starts with free records");
    pool.get_mut(greeting).push_str("Hello, World!");

    println!("Borrowed record says: {}", pool.get(greeting));
    println!("{} on loan, {} free", pool.len(), pool.available());

    // Exhaust the pool; the doubling policy grows it instead of refusing.
    let mut drained = Vec::new();
    while pool.available() > 0 {
        drained.push(pool.acquire().unwrap());
    }

    let overflow = pool.acquire().expect("the doubling policy grows the pool");
    println!("Capacity after exhaustion-driven growth: {}", pool.capacity());

    // Return everything. The reset hook clears each record on the way back.
    pool.release(greeting);
    pool.release(overflow);
    for handle in drained {
        pool.release(handle);
    }

    assert!(pool.is_empty());
    println!(
        "All {} records back in the pool - example completed successfully!",
        pool.capacity()
    );
}
