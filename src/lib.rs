pub mod color;
pub mod ease;
pub mod error;
pub mod math;
pub mod two;

pub use error::{NumkitError, Result};

#[cfg(test)]
pub(crate) mod test_support {
    use tracing_subscriber::EnvFilter;

    /// Routes `tracing` output to the test harness. Filter with `RUST_LOG`.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}
