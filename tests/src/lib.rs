pub use exec_log::ExecLog;

pub use logging_backend::{BackendOp, LoggingBackend, OpKind};

pub mod models;

use rowbind::{Mapper, Sqlite};
use tracing_subscriber::EnvFilter;

/// A mapper over a fresh in-memory database, with every statement logged.
pub fn setup() -> Mapper<LoggingBackend<Sqlite>> {
    init_tracing();

    let sqlite = Sqlite::in_memory().unwrap();
    Mapper::new(LoggingBackend::new(sqlite))
}

/// Installs a subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
