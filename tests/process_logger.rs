//! Lifecycle of the process-wide logger handle
//!
//! Kept in its own test binary with a single test so the global slot starts
//! out uninitialized and no other test races on it.

use csctrl_logger::prelude::*;
use csctrl_logger::{get_logger, info, init, init_with, logger};
use std::sync::Arc;
use std::thread;

#[test]
fn test_process_logger_lifecycle() {
    // Uninitialized: empty handle, and the strict accessor refuses
    assert!(get_logger().is_none());
    assert!(!csctrl_logger::global::is_initialized());
    assert!(std::panic::catch_unwind(logger).is_err());

    // init() installs the standard logger
    init();
    let first = get_logger().expect("logger installed by init()");
    assert_eq!(first.name(), "CSCTRL");
    assert_eq!(first.min_level(), SinkLevel::Trace);
    assert_eq!(first.build_mode(), BuildMode::current());
    assert_eq!(first.sink_count(), 1);
    info!(first, "CSCTRL Version {}", env!("CARGO_PKG_VERSION"));

    // A second init() replaces the handle with a distinct instance
    init();
    let second = get_logger().expect("logger replaced by second init()");
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.name(), second.name());
    assert!(Arc::ptr_eq(&second, &logger()));

    // The old handle stays usable
    first.info("still alive");

    // Injected logger, shared across threads
    let sink = MemorySink::new();
    let buffer = sink.buffer();
    let installed = init_with(
        Logger::builder()
            .sink(sink)
            .build_mode(BuildMode::Shipping)
            .build(),
    );
    assert!(Arc::ptr_eq(&installed, &logger()));

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            thread::spawn(move || {
                for i in 0..25 {
                    info!(logger(), "worker {} message {}", worker, i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    assert_eq!(buffer.len(), 200);
    assert!(buffer.contains("worker 7 message 24"));
    assert_eq!(installed.metrics().total_logged(), 200);
}
