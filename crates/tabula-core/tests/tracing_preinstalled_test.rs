//! `init_tracing` must leave an already-installed global subscriber alone.
//! Lives in its own test binary because `init_tracing` only runs once per
//! process.

use tabula_core::tracing::init_tracing;

#[test]
fn init_keeps_existing_global_subscriber() {
    tracing_subscriber::fmt()
        .with_test_writer()
        .try_init()
        .expect("first subscriber installs");

    init_tracing();
    init_tracing();

    assert!(tracing::dispatcher::has_been_set());
    tracing::info!(target: "tabula_core", "host subscriber still receives events");
}
