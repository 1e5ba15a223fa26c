//! Per-line masking policies.
//!
//! Policies are pure string transformations on a single line. They do not know
//! where the line sits in a block; the redactor picks the policy by position.

use super::options::DEFAULT_MASK_CHAR;

/// Longest masked run written into an edge line when lengths are not preserved.
pub const EDGE_MASK_CAP: usize = 20;

/// Longest masked run written for an interior line when lengths are not preserved.
pub const INTERIOR_MASK_CAP: usize = 40;

/// Keeps a visible prefix and suffix and masks the middle of a line.
///
/// Operates on Unicode scalar values. If the visible spans cover the whole line
/// the line is returned unchanged.
#[derive(Clone, Copy, Debug)]
pub struct EdgeConfig {
    /// Number of leading characters to keep visible.
    visible_start: usize,
    /// Number of trailing characters to keep visible.
    visible_end: usize,
    /// Symbol used to mask the middle.
    mask_char: char,
    /// Upper bound on the masked run; `None` writes one symbol per hidden character.
    cap: Option<usize>,
}

impl EdgeConfig {
    /// Keeps `visible_start` leading and `visible_end` trailing characters.
    #[must_use]
    pub fn both(visible_start: usize, visible_end: usize) -> Self {
        Self {
            visible_start,
            visible_end,
            mask_char: DEFAULT_MASK_CHAR,
            cap: Some(EDGE_MASK_CAP),
        }
    }

    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Drops the run cap so the output keeps the input's length.
    #[must_use]
    pub fn with_preserve_length(mut self, preserve_length: bool) -> Self {
        self.cap = if preserve_length {
            None
        } else {
            Some(EDGE_MASK_CAP)
        };
        self
    }

    /// Applies the policy to one line.
    ///
    /// Lines no longer than `visible_start + visible_end` are returned as-is.
    #[must_use]
    pub fn apply_to(&self, line: &str) -> String {
        let chars: Vec<char> = line.chars().collect();
        let total = chars.len();
        let visible = self.visible_start.saturating_add(self.visible_end);
        if total <= visible {
            return line.to_string();
        }

        let hidden = total - visible;
        let run = self.cap.map_or(hidden, |cap| hidden.min(cap));

        let mut masked = String::with_capacity(line.len() + run * self.mask_char.len_utf8());
        masked.extend(&chars[..self.visible_start]);
        masked.extend(std::iter::repeat(self.mask_char).take(run));
        masked.extend(&chars[total - self.visible_end..]);
        masked
    }
}

/// Replaces a whole line with mask symbols.
#[derive(Clone, Copy, Debug)]
pub struct InteriorConfig {
    /// Symbol written for every hidden character.
    mask_char: char,
    /// Upper bound on the masked run; `None` writes one symbol per character.
    cap: Option<usize>,
}

impl Default for InteriorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl InteriorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mask_char: DEFAULT_MASK_CHAR,
            cap: Some(INTERIOR_MASK_CAP),
        }
    }

    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    #[must_use]
    pub fn with_preserve_length(mut self, preserve_length: bool) -> Self {
        self.cap = if preserve_length {
            None
        } else {
            Some(INTERIOR_MASK_CAP)
        };
        self
    }

    /// Applies the policy to one line.
    #[must_use]
    pub fn apply_to(&self, line: &str) -> String {
        let total = line.chars().count();
        let run = self.cap.map_or(total, |cap| total.min(cap));
        std::iter::repeat(self.mask_char).take(run).collect()
    }
}

/// What happens to a single line of content.
#[derive(Clone, Copy, Debug)]
pub enum LinePolicy {
    /// Emit the line untouched. Markers and blank lines.
    Preserve,
    /// Partially reveal the line. First and last content lines.
    Edge(EdgeConfig),
    /// Hide the line completely.
    Interior(InteriorConfig),
}

impl LinePolicy {
    /// Applies the policy to `line`.
    #[must_use]
    pub fn apply_to(&self, line: &str) -> String {
        match self {
            LinePolicy::Preserve => line.to_string(),
            LinePolicy::Edge(config) => config.apply_to(line),
            LinePolicy::Interior(config) => config.apply_to(line),
        }
    }

    /// Whether lines handled by this policy count toward the masked-line total.
    ///
    /// Edge lines count even when they are too short to change.
    #[must_use]
    pub fn counts_as_masked(&self) -> bool {
        !matches!(self, LinePolicy::Preserve)
    }
}
