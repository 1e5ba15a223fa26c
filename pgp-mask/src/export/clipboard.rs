//! Clipboard export with a self-clearing success indicator.

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use async_trait::async_trait;
use slog::{debug, warn, Logger};
use tokio::sync::watch;

use super::{discard_logger, ExportError, Result};

/// How long the success indicator stays up after a copy.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(2000);

/// A system clipboard, or anything standing in for one.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Places `text` on the clipboard.
    async fn write_text(&self, text: &str) -> Result<()>;
}

#[async_trait]
impl<T> Clipboard for Arc<T>
where
    T: Clipboard + ?Sized,
{
    async fn write_text(&self, text: &str) -> Result<()> {
        (**self).write_text(text).await
    }
}

/// In-process clipboard holding the last written text.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text written, if any.
    ///
    /// A write that panicked mid-way does not hide the last stored value.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| ExportError::ClipboardUnavailable("clipboard lock poisoned".into()))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

/// State shared with the clear timers.
struct Indicator {
    success: watch::Sender<bool>,
    /// Bumped on every successful copy; a timer only clears its own generation.
    /// Held while the flag is raised or cleared so the check and the write
    /// cannot interleave with another copy.
    generation: Mutex<u64>,
}

impl Indicator {
    /// Starts a new generation and raises the flag.
    fn raise(&self) -> u64 {
        let mut current = self.generation.lock().unwrap_or_else(PoisonError::into_inner);
        *current += 1;
        self.success.send_replace(true);
        *current
    }

    /// Lowers the flag if `generation` is still the latest.
    fn clear(&self, generation: u64) {
        let current = self.generation.lock().unwrap_or_else(PoisonError::into_inner);
        if *current == generation {
            self.success.send_replace(false);
        }
    }
}

/// Copies text to a [`Clipboard`] and raises a transient success flag.
///
/// On success the flag turns on and a tokio timer turns it off after the reset
/// delay. A newer success supersedes the pending clear of an older one, so the
/// flag stays on until the newest timer fires. Failures are logged at warning
/// level and leave the flag untouched.
///
/// `copy` must run inside a tokio runtime with the timer enabled.
pub struct ClipboardExporter<C> {
    clipboard: C,
    indicator: Arc<Indicator>,
    reset_delay: Duration,
    logger: Logger,
}

impl<C> ClipboardExporter<C>
where
    C: Clipboard,
{
    /// Wraps `clipboard` with the default reset delay and a discarding logger.
    pub fn new(clipboard: C) -> Self {
        let (success, _) = watch::channel(false);
        Self {
            clipboard,
            indicator: Arc::new(Indicator {
                success,
                generation: Mutex::new(0),
            }),
            reset_delay: DEFAULT_RESET_DELAY,
            logger: discard_logger(),
        }
    }

    #[must_use]
    pub fn with_reset_delay(mut self, reset_delay: Duration) -> Self {
        self.reset_delay = reset_delay;
        self
    }

    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Copies `text`. Never fails from the caller's point of view.
    pub async fn copy(&self, text: &str) {
        match self.clipboard.write_text(text).await {
            Ok(()) => {
                debug!(self.logger, "copied to clipboard"; "bytes" => text.len());
                self.signal_success();
            }
            Err(err) => {
                warn!(self.logger, "failed to copy to clipboard"; "error" => %err);
            }
        }
    }

    /// Whether a copy succeeded within the last reset delay.
    pub fn is_success(&self) -> bool {
        *self.indicator.success.borrow()
    }

    /// Observes the success flag as it turns on and off.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.indicator.success.subscribe()
    }

    /// The wrapped clipboard.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    fn signal_success(&self) {
        let generation = self.indicator.raise();

        let indicator = Arc::clone(&self.indicator);
        let reset_delay = self.reset_delay;
        tokio::spawn(async move {
            tokio::time::sleep(reset_delay).await;
            indicator.clear(generation);
        });
    }
}
