//! Copy and download actions for displayed content.
//!
//! Both exporters act on the raw content string, never on its masked
//! projection. Neither returns errors to the caller: collaborator failures are
//! logged through `slog` and otherwise dropped.

mod clipboard;
mod error;
mod file;

pub use clipboard::{Clipboard, ClipboardExporter, MemoryClipboard, DEFAULT_RESET_DELAY};
pub use error::{ExportError, Result};
pub use file::{DirectorySink, FileExporter, FileSink};

/// Root logger used when the caller does not supply one.
fn discard_logger() -> slog::Logger {
    slog::Logger::root(slog::Discard, slog::o!())
}
