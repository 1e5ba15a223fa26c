//! Display state for one piece of sensitive content.
//!
//! A [`MaskedContent`] keeps the original text next to its masked projection
//! and a [`VisibilityToggle`] deciding which of the two is shown. The
//! projection is always computed from the original, never from a previous
//! projection.

use std::fmt;

use crate::{
    classification::{ArmorType, ContentShape},
    masking::{mask_with_outcome, MaskOptions, MaskOutcome},
};

/// A reveal flag with a configurable starting value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct VisibilityToggle {
    revealed: bool,
    initially_visible: bool,
}

impl VisibilityToggle {
    #[must_use]
    pub fn new(initially_visible: bool) -> Self {
        Self {
            revealed: initially_visible,
            initially_visible,
        }
    }

    /// Flips the reveal flag.
    pub fn toggle(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Restores the starting value.
    pub fn reset(&mut self) {
        self.revealed = self.initially_visible;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn initially_visible(&self) -> bool {
        self.initially_visible
    }
}

/// What a display surface should render right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentView<'a> {
    /// The masked projection, whatever the reveal state.
    pub masked: &'a str,
    /// The text to show: raw content when revealed, else `masked`.
    pub display: &'a str,
    /// True while non-empty content is hidden behind its projection.
    pub is_masked: bool,
}

/// Sensitive content together with its masked projection and reveal state.
///
/// `Debug` output never contains the raw content.
#[derive(Clone)]
pub struct MaskedContent {
    content: String,
    options: MaskOptions,
    toggle: VisibilityToggle,
    outcome: MaskOutcome,
}

impl MaskedContent {
    /// Masks `content` with default options; starts hidden.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_options(content, MaskOptions::default())
    }

    pub fn with_options(content: impl Into<String>, options: MaskOptions) -> Self {
        let content = content.into();
        let outcome = mask_with_outcome(&content, &options);
        Self {
            content,
            options,
            toggle: VisibilityToggle::default(),
            outcome,
        }
    }

    /// Sets whether the content starts revealed, and applies it now.
    #[must_use]
    pub fn initially_visible(mut self, initially_visible: bool) -> Self {
        self.toggle = VisibilityToggle::new(initially_visible);
        self
    }

    /// Flips between the raw content and the projection.
    pub fn toggle(&mut self) {
        self.toggle.toggle();
    }

    pub fn is_revealed(&self) -> bool {
        self.toggle.is_revealed()
    }

    /// True while non-empty content is hidden behind its projection.
    pub fn is_masked(&self) -> bool {
        !self.toggle.is_revealed() && !self.content.is_empty()
    }

    /// Replaces the content. The reveal flag goes back to its starting value.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.outcome = mask_with_outcome(&self.content, &self.options);
        self.toggle.reset();
    }

    /// Re-masks the current content with new options, keeping the reveal flag.
    pub fn set_options(&mut self, options: MaskOptions) {
        self.options = options;
        self.outcome = mask_with_outcome(&self.content, &self.options);
    }

    /// The raw content. Copy and download act on this.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The masked projection.
    pub fn masked(&self) -> &str {
        &self.outcome.text
    }

    pub fn options(&self) -> &MaskOptions {
        &self.options
    }

    /// Lines hidden in the projection.
    pub fn masked_lines(&self) -> usize {
        self.outcome.masked_lines
    }

    pub fn shape(&self) -> ContentShape {
        self.outcome.shape
    }

    /// Armor type named on the opening marker, for armored content.
    pub fn armor_type(&self) -> Option<ArmorType> {
        ArmorType::detect(&self.content)
    }

    /// The text to render.
    pub fn display(&self) -> &str {
        if self.toggle.is_revealed() {
            &self.content
        } else {
            &self.outcome.text
        }
    }

    pub fn view(&self) -> ContentView<'_> {
        ContentView {
            masked: self.masked(),
            display: self.display(),
            is_masked: self.is_masked(),
        }
    }

    /// Copies the raw content, whatever is on screen.
    #[cfg(feature = "export")]
    pub async fn copy_with<C>(&self, exporter: &crate::export::ClipboardExporter<C>)
    where
        C: crate::export::Clipboard,
    {
        exporter.copy(&self.content).await;
    }

    /// Saves the raw content as `filename`, whatever is on screen.
    #[cfg(feature = "export")]
    pub fn download_with<S>(&self, exporter: &crate::export::FileExporter<S>, filename: &str)
    where
        S: crate::export::FileSink,
    {
        exporter.download(&self.content, filename);
    }
}

impl fmt::Debug for MaskedContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskedContent")
            .field("masked", &self.outcome.text)
            .field("revealed", &self.toggle.is_revealed())
            .field("shape", &self.outcome.shape)
            .finish_non_exhaustive()
    }
}
