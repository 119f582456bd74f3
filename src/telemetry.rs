//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! Behavior:
//! - Native targets read the filter from `BEST_UTILS_LOG` (e.g. `debug` or
//!   `info,best_utils::plate=off`) and fall back to `info`.
//! - In the browser, formatted events go to `console.log` without timestamps
//!   (there is no system clock to read).
//!
//! Only the first call installs a subscriber; later calls are no-ops.

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    #[cfg(target_arch = "wasm32")]
    let result = builder
        .without_time()
        .with_ansi(false)
        .with_writer(console::ConsoleWriter::default)
        .try_init();
    #[cfg(not(target_arch = "wasm32"))]
    let result = builder.try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    /// Buffers one formatted event and hands it to `console.log` on drop.
    #[derive(Default)]
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if !self.buffer.is_empty() {
                let line = String::from_utf8_lossy(&self.buffer);
                web_sys::console::log_1(&line.trim_end().into());
                self.buffer.clear();
            }
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = io::Write::flush(self);
        }
    }
}
