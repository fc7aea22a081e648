//! Tracing setup for the browser.
//!
//! Events go through a `fmt` layer whose writer forwards each formatted line
//! to the matching `console` method. The filter sits behind a reload handle
//! so the level from the page config can be applied after startup.

use once_cell::sync::OnceCell;
use std::io;
use tracing::{Level, Metadata, info, warn};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

static RELOAD_HANDLE: OnceCell<ReloadHandle> = OnceCell::new();

/// Install the subscriber once per page; later calls reuse the handle.
pub(crate) fn init_tracing() {
    RELOAD_HANDLE.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let (filter_layer, handle) = reload::Layer::new(env_filter);
        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(ConsoleMakeWriter)
                    .with_ansi(false)
                    .without_time()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(filter_layer),
            )
            .try_init();
        if let Err(err) = installed {
            // Another subscriber owns the global slot; keep going without ours.
            web_sys::console::warn_1(&format!("insight-page logging disabled: {err}").into());
        } else {
            info!("Logging initialized; override level with [logging] log_level");
        }
        handle
    });
}

pub(crate) fn set_log_level(level: &str) {
    let Some(handle) = RELOAD_HANDLE.get() else {
        return;
    };
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }
        let line: wasm_bindgen::JsValue = line.into();
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            Level::DEBUG => web_sys::console::log_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}
