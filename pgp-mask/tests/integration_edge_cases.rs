//! Edge-case coverage for masking.
//!
//! These tests focus on inputs that do not look like a tidy armored block:
//! hidden headers, missing footers, CRLF line endings, multi-byte characters,
//! and armor embedded in surrounding text.

use pgp_mask::{mask, mask_with_outcome, ContentShape, MaskOptions};

const MESSAGE: &str = "-----BEGIN PGP MESSAGE-----\n\
\n\
wcBMA1234567890abcdefghijABCDEFGHIJ0123456789\n\
AAAABBBBCCCCDDDD\n\
EEEEFFFFGGGGHHHHIIIIJJJJKKKKLLLLMMMMNNNNOOOOPPPP\n\
zz99yy88xx77ww66vv55\n\
=XyZ1\n\
-----END PGP MESSAGE-----";

fn starred() -> MaskOptions {
    MaskOptions::default().with_mask_char('*')
}

#[test]
fn test_hidden_headers_are_masked_like_content() {
    // Without header protection the markers are ordinary lines: both sit on
    // interior positions here, and the annotation moves to the end because no
    // closing marker is left in the output.
    let outcome = mask_with_outcome(MESSAGE, &starred().with_show_headers(false));
    assert_eq!(outcome.masked_lines, 7);
    assert_eq!(
        outcome.text,
        format!(
            "{}\n\n{}\n{}\n{}\n{}\n=XyZ1\n{}\n[7 lines masked]",
            "*".repeat(27),
            "*".repeat(40),
            "*".repeat(16),
            "*".repeat(40),
            "*".repeat(20),
            "*".repeat(25),
        )
    );
}

#[test]
fn test_hidden_headers_never_leak_marker_text() {
    let masked = mask(MESSAGE, &MaskOptions::default().with_show_headers(false));
    assert!(!masked.contains("BEGIN"));
    assert!(!masked.contains("END PGP"));
}

#[test]
fn test_missing_footer_appends_annotation() {
    let truncated = "-----BEGIN PGP SIGNATURE-----\n\
wsBzBAEBCAAnBQJl8mdQCRDc3Q0VcE1v\n\
Xkq8Zb7yX2wqpZ4uQ2nLkL3kTzR5c1xJ";
    let masked = mask(truncated, &starred());
    assert_eq!(
        masked,
        format!(
            "-----BEGIN PGP SIGNATURE-----\nwsBzBAEBCA{}VcE1v\n{}\n[2 lines masked]",
            "*".repeat(17),
            "*".repeat(32),
        )
    );
}

#[test]
fn test_crlf_line_endings_are_kept() {
    let block = "-----BEGIN PGP MESSAGE-----\r\n\
wcBMA1234567890abcdef\r\n   \r\n-----END PGP MESSAGE-----\r";
    let masked = mask(block, &starred());
    assert_eq!(
        masked,
        "-----BEGIN PGP MESSAGE-----\r\nwcBMA12345*******cdef\r\n   \r\n[1 line masked]\n-----END PGP MESSAGE-----\r"
    );
}

#[test]
fn test_blank_lines_are_preserved_and_not_counted() {
    let block = "-----BEGIN PGP MESSAGE-----\n\t\n  \n-----END PGP MESSAGE-----";
    let outcome = mask_with_outcome(block, &starred());
    assert_eq!(outcome.text, block);
    assert_eq!(outcome.masked_lines, 0);
}

#[test]
fn test_multibyte_characters_are_counted_as_scalars() {
    let block = "-----BEGIN PGP MESSAGE-----\n\
秘密数据秘密数据秘密数据秘密数据秘密数据\n\
-----END PGP MESSAGE-----";
    let masked = mask(block, &starred().with_visible(2, 2));
    assert_eq!(
        masked,
        format!(
            "-----BEGIN PGP MESSAGE-----\n秘密{}数据\n[1 line masked]\n-----END PGP MESSAGE-----",
            "*".repeat(16)
        )
    );
}

#[test]
fn test_multibyte_mask_char() {
    let masked = mask("0123456789abcdefghij", &MaskOptions::default());
    assert_eq!(masked, "01234••••••••••fghij");
    assert_eq!(masked.chars().count(), 20);
}

#[test]
fn test_armor_embedded_in_text() {
    let text = "noise before\n\
-----BEGIN PGP MESSAGE-----\n\
wcBMA1234567890abcdef\n\
-----END PGP MESSAGE-----\n\
noise after";
    let outcome = mask_with_outcome(text, &starred());
    assert_eq!(outcome.shape, ContentShape::Armored);
    assert_eq!(
        outcome.text,
        format!(
            "{}\n-----BEGIN PGP MESSAGE-----\n{}\n[3 lines masked]\n-----END PGP MESSAGE-----\n{}",
            "*".repeat(12),
            "*".repeat(21),
            "*".repeat(11),
        )
    );
}

#[test]
fn test_wide_visible_window_leaves_edge_lines_alone() {
    let block = "-----BEGIN PGP MESSAGE-----\nshortline\n-----END PGP MESSAGE-----";
    let outcome = mask_with_outcome(block, &starred().with_visible(40, 40));
    // Too short to mask, but still counted as an edge line.
    assert_eq!(outcome.masked_lines, 1);
    assert!(outcome.text.contains("\nshortline\n"));
}

#[test]
fn test_zero_visible_window_hides_whole_edge_line() {
    let block = "-----BEGIN PGP MESSAGE-----\nabcdef\n-----END PGP MESSAGE-----";
    let masked = mask(block, &starred().with_visible(0, 0).with_show_line_count(false));
    assert_eq!(
        masked,
        "-----BEGIN PGP MESSAGE-----\n******\n-----END PGP MESSAGE-----"
    );
}

#[test]
fn test_very_long_interior_line_is_capped() {
    let body = "Q".repeat(10_000);
    let block = format!("-----BEGIN PGP MESSAGE-----\nfirst-line-of-body\n{body}\nlast-line-of-body\n-----END PGP MESSAGE-----");
    let masked = mask(&block, &starred());
    let interior = masked.split('\n').nth(2).unwrap();
    assert_eq!(interior, "*".repeat(40));
}
