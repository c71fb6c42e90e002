//! Unit tests for environment guards.

use super::*;
use std::sync::{Arc, Barrier};
use std::thread;

fn value_of(key: &str) -> Option<String> {
    env::var(key).ok()
}

#[test]
fn set_var_restores_previous_value() {
    const KEY: &str = "TEST_HELPERS_SET_RESTORES";
    let _outer = set_var(KEY, "original");
    {
        let _inner = set_var(KEY, "temporary");
        assert_eq!(value_of(KEY).as_deref(), Some("temporary"));
    }
    assert_eq!(value_of(KEY).as_deref(), Some("original"));
}

#[test]
fn remove_var_restores_previous_value() {
    const KEY: &str = "TEST_HELPERS_REMOVE_RESTORES";
    let _outer = set_var(KEY, "original");
    {
        let _inner = remove_var(KEY);
        assert_eq!(value_of(KEY), None);
    }
    assert_eq!(value_of(KEY).as_deref(), Some("original"));
}

#[test]
fn guard_removes_keys_that_were_unset() {
    const KEY: &str = "TEST_HELPERS_UNSET_BEFORE";
    let _outer = remove_var(KEY);
    {
        let _inner = set_var(KEY, "temporary");
        assert_eq!(value_of(KEY).as_deref(), Some("temporary"));
    }
    assert_eq!(value_of(KEY), None);
}

#[test]
fn scope_restores_in_reverse_order() {
    const KEY: &str = "TEST_HELPERS_SCOPE_ORDER";
    let _outer = set_var(KEY, "original");
    {
        let mut scope = scope_with(|lock| vec![lock.set_var(KEY, "first")]);
        let second = lock().set_var(KEY, "second");
        scope.push(second);
        assert_eq!(value_of(KEY).as_deref(), Some("second"));
    }
    assert_eq!(value_of(KEY).as_deref(), Some("original"));
}

#[test]
fn scope_blocks_other_threads_until_dropped() {
    const KEY: &str = "TEST_HELPERS_SCOPE_BLOCKS";
    let scope = scope_with(|lock| vec![lock.set_var(KEY, "held")]);
    let barrier = Arc::new(Barrier::new(2));
    let worker_barrier = Arc::clone(&barrier);
    let worker = thread::spawn(move || {
        worker_barrier.wait();
        let _lock = lock();
        value_of(KEY)
    });
    barrier.wait();
    drop(scope);
    let seen = worker.join().expect("worker thread panicked");
    assert_eq!(seen, None, "worker must observe the restored environment");
}
