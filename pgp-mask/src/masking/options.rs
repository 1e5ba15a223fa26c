//! The tunable surface of the masking engine.

use super::policy::{EdgeConfig, InteriorConfig};

/// Default number of characters kept at the start of an edge line.
pub const DEFAULT_VISIBLE_START: usize = 10;

/// Default number of characters kept at the end of an edge line.
pub const DEFAULT_VISIBLE_END: usize = 5;

/// Default substitution character for hidden characters.
pub const DEFAULT_MASK_CHAR: char = '•';

/// Options controlling how content is masked.
///
/// Every field has a default, so `MaskOptions::default()` is the usual starting
/// point and the `with_*` methods override individual settings. With the
/// `serde` feature the options deserialize from camelCase keys
/// (`showHeaders`, `visibleStart`, ...); missing keys take their defaults and
/// unknown keys are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct MaskOptions {
    /// Keep `-----BEGIN` / `-----END` marker lines as they are.
    show_headers: bool,
    /// Characters kept at the start of an edge line.
    visible_start: usize,
    /// Characters kept at the end of an edge line.
    visible_end: usize,
    /// Symbol written in place of hidden characters.
    mask_char: char,
    /// Emit one mask symbol per hidden character instead of a capped run.
    preserve_length: bool,
    /// Append a `[N lines masked]` annotation.
    show_line_count: bool,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            show_headers: true,
            visible_start: DEFAULT_VISIBLE_START,
            visible_end: DEFAULT_VISIBLE_END,
            mask_char: DEFAULT_MASK_CHAR,
            preserve_length: false,
            show_line_count: true,
        }
    }
}

impl MaskOptions {
    #[must_use]
    pub fn with_show_headers(mut self, show_headers: bool) -> Self {
        self.show_headers = show_headers;
        self
    }

    /// Sets how many characters stay visible at each end of an edge line.
    #[must_use]
    pub fn with_visible(mut self, visible_start: usize, visible_end: usize) -> Self {
        self.visible_start = visible_start;
        self.visible_end = visible_end;
        self
    }

    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    #[must_use]
    pub fn with_preserve_length(mut self, preserve_length: bool) -> Self {
        self.preserve_length = preserve_length;
        self
    }

    #[must_use]
    pub fn with_show_line_count(mut self, show_line_count: bool) -> Self {
        self.show_line_count = show_line_count;
        self
    }

    pub fn show_headers(&self) -> bool {
        self.show_headers
    }

    pub fn visible_start(&self) -> usize {
        self.visible_start
    }

    pub fn visible_end(&self) -> usize {
        self.visible_end
    }

    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    pub fn preserve_length(&self) -> bool {
        self.preserve_length
    }

    pub fn show_line_count(&self) -> bool {
        self.show_line_count
    }

    /// Policy for the first and last content lines.
    pub(crate) fn edge_config(&self) -> EdgeConfig {
        EdgeConfig::both(self.visible_start, self.visible_end)
            .with_mask_char(self.mask_char)
            .with_preserve_length(self.preserve_length)
    }

    /// Policy for every other content line.
    pub(crate) fn interior_config(&self) -> InteriorConfig {
        InteriorConfig::new()
            .with_mask_char(self.mask_char)
            .with_preserve_length(self.preserve_length)
    }
}
