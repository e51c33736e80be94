//! Shared test scaffolding, included via `#[path]` the way
//! `tycode-core`'s own `tests/fixture.rs` is shared across its test files.

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
