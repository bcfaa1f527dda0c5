//! Assertion helpers for tests.

use palette_extract::Palette;
use pretty_assertions::assert_eq;

/// Assert the palette's colors and shares, in order
pub fn assert_palette(palette: &Palette, expected: &[(&str, f64)]) {
    let actual: Vec<(&str, f64)> = palette
        .iter()
        .map(|c| (c.hex.as_str(), c.percentage))
        .collect();
    assert_eq!(actual, expected);
}

/// Assert shares are sorted largest first and sum to about `total`
pub fn assert_shares(palette: &Palette, total: f64) {
    for pair in palette.windows(2) {
        assert!(
            pair[0].percentage >= pair[1].percentage,
            "Palette not sorted by share: {} before {}",
            pair[0].percentage,
            pair[1].percentage
        );
    }
    let sum = palette.total_percentage();
    assert!(
        (sum - total).abs() <= 0.01 * palette.len() as f64,
        "Expected shares to sum to {total}, got {sum}"
    );
}

/// Assert bytes are a PNG image
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Read a big-endian u16 at `offset`
pub fn be_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([bytes[offset], bytes[offset + 1]])
}
