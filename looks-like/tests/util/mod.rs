// Common test utilities

use std::panic;

/// Runs `f`, which must panic, and returns the panic message.
pub fn capture_panic_message<F: FnOnce() + panic::UnwindSafe>(f: F) -> String {
    let err = panic::catch_unwind(f).expect_err("expected a panic");
    err.downcast_ref::<String>()
        .map(|s| s.as_str())
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap()
        .to_string()
}
