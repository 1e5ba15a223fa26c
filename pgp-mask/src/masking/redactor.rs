//! The masking entrypoints.
//!
//! `mask` is a pure function of its inputs. It classifies the content, chooses
//! a [`LinePolicy`] for every line by position, and optionally annotates the
//! result with the number of lines it hid.

use crate::classification::{is_blank, is_marker, ContentShape, END_DELIMITER};

use super::{
    options::MaskOptions,
    policy::{EdgeConfig, LinePolicy},
};

/// Plain text up to this many characters is masked as one string.
pub const SHORT_TEXT_LIMIT: usize = 50;

/// Characters kept at each end of short plain text.
const SHORT_TEXT_VISIBLE: usize = 5;

/// Result of masking, with the bookkeeping the annotation is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskOutcome {
    /// The masked projection.
    pub text: String,
    /// Lines handled as edge or interior lines.
    pub masked_lines: usize,
    /// Shape the content was classified as.
    pub shape: ContentShape,
}

/// Masks `content` for display.
///
/// Empty input yields empty output. Armored blocks keep their marker lines
/// (unless `show_headers` is off) and blank lines; the first and last body
/// lines are partially revealed and the rest are hidden. Plain text of at most
/// 50 characters is masked as a single string, longer text line by line.
///
/// The output is only meaningful for original content. Masking an already
/// masked string is not a supported operation.
#[must_use]
pub fn mask(content: &str, options: &MaskOptions) -> String {
    mask_with_outcome(content, options).text
}

/// Like [`mask`], also reporting how many lines were masked and the content shape.
#[must_use]
pub fn mask_with_outcome(content: &str, options: &MaskOptions) -> MaskOutcome {
    let shape = ContentShape::classify(content);
    if content.is_empty() {
        return MaskOutcome {
            text: String::new(),
            masked_lines: 0,
            shape,
        };
    }

    match shape {
        ContentShape::Armored => mask_armored(content, options),
        ContentShape::Plain => mask_plain(content, options),
    }
}

fn mask_armored(content: &str, options: &MaskOptions) -> MaskOutcome {
    let lines: Vec<&str> = content.split('\n').collect();
    // Body edges sit just inside a single header and footer line.
    let first_edge = 1;
    let last_edge = lines.len().checked_sub(2);

    let (mut masked, masked_lines) = apply_by_position(&lines, |index, line| {
        if is_blank(line) || (options.show_headers() && is_marker(line)) {
            LinePolicy::Preserve
        } else if index == first_edge || Some(index) == last_edge {
            LinePolicy::Edge(options.edge_config())
        } else {
            LinePolicy::Interior(options.interior_config())
        }
    });

    if options.show_line_count() && masked_lines > 0 {
        let annotation = line_count_annotation(masked_lines);
        match masked.iter().rposition(|line| line.contains(END_DELIMITER)) {
            Some(footer) => masked.insert(footer, annotation),
            None => masked.push(annotation),
        }
    }

    MaskOutcome {
        text: masked.join("\n"),
        masked_lines,
        shape: ContentShape::Armored,
    }
}

fn mask_plain(content: &str, options: &MaskOptions) -> MaskOutcome {
    if content.chars().count() <= SHORT_TEXT_LIMIT {
        let short = EdgeConfig::both(SHORT_TEXT_VISIBLE, SHORT_TEXT_VISIBLE)
            .with_mask_char(options.mask_char())
            .with_preserve_length(options.preserve_length());
        return MaskOutcome {
            text: short.apply_to(content),
            masked_lines: 0,
            shape: ContentShape::Plain,
        };
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let last_edge = lines.len() - 1;

    let (mut masked, masked_lines) = apply_by_position(&lines, |index, line| {
        if is_blank(line) {
            LinePolicy::Preserve
        } else if index == 0 || index == last_edge {
            LinePolicy::Edge(options.edge_config())
        } else {
            LinePolicy::Interior(options.interior_config())
        }
    });

    if options.show_line_count() && masked_lines > 0 {
        masked.push(line_count_annotation(masked_lines));
    }

    MaskOutcome {
        text: masked.join("\n"),
        masked_lines,
        shape: ContentShape::Plain,
    }
}

/// Applies the policy chosen for each line and counts the lines it masked.
fn apply_by_position<F>(lines: &[&str], choose: F) -> (Vec<String>, usize)
where
    F: Fn(usize, &str) -> LinePolicy,
{
    let mut masked_lines = 0;
    let masked = lines
        .iter()
        .enumerate()
        .map(|(index, &line)| {
            let policy = choose(index, line);
            if policy.counts_as_masked() {
                masked_lines += 1;
            }
            policy.apply_to(line)
        })
        .collect();
    (masked, masked_lines)
}

fn line_count_annotation(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("[{count} line{plural} masked]")
}
