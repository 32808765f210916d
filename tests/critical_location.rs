//! Where a development-mode critical log reports its panic
//!
//! Installs a panic hook, so it lives in its own test binary.

use csctrl_logger::prelude::*;
use csctrl_logger::critical;
use std::panic;
use std::sync::{Arc, Mutex};

fn reported_location(f: impl FnOnce() + panic::UnwindSafe) -> Option<(String, u32)> {
    let seen: Arc<Mutex<Option<(String, u32)>>> = Arc::new(Mutex::new(None));
    let hook_seen = Arc::clone(&seen);

    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if let Some(location) = info.location() {
            *hook_seen.lock().unwrap() = Some((location.file().to_string(), location.line()));
        }
    }));
    let result = panic::catch_unwind(f);
    panic::set_hook(previous);

    assert!(result.is_err(), "critical log must panic in development mode");
    let location = seen.lock().unwrap().clone();
    location
}

#[test]
fn test_critical_panic_points_at_the_caller() {
    let logger = Logger::builder()
        .build_mode(BuildMode::Development)
        .build();

    let (file, line) = reported_location(panic::AssertUnwindSafe(|| {
        critical!(logger, "round state corrupted");
    }))
    .expect("panic hook saw a location");
    assert_eq!(file, file!());
    assert_eq!(line, line!() - 4);

    let (file, line) = reported_location(panic::AssertUnwindSafe(|| {
        logger.critical("round state corrupted");
    }))
    .expect("panic hook saw a location");
    assert_eq!(file, file!());
    assert_eq!(line, line!() - 4);

    let (file, line) = reported_location(panic::AssertUnwindSafe(|| {
        logger.log(Severity::Critical, "round state corrupted");
    }))
    .expect("panic hook saw a location");
    assert_eq!(file, file!());
    assert_eq!(line, line!() - 4);
}
