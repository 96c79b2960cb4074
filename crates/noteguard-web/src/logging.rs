//! `tracing` output routed to the browser console.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let directive = if cfg!(debug_assertions) {
        "noteguard=debug"
    } else {
        "noteguard=info"
    };

    // No clock on wasm32-unknown-unknown, so timestamps stay off.
    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        std::panic::set_hook(Box::new(|info| {
            tracing::error!("panic: {}", info);
        }));
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and hands it to the console on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }

    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = self.line();
        if line.is_empty() {
            return;
        }

        let value = JsValue::from_str(&line);
        if self.level == Level::ERROR {
            console::error_1(&value);
        } else if self.level == Level::WARN {
            console::warn_1(&value);
        } else if self.level == Level::INFO {
            console::info_1(&value);
        } else {
            console::debug_1(&value);
        }
    }
}
