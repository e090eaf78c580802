//! Font metrics and line wrapping for the standard Helvetica faces.
//!
//! Reports use the two built-in Type1 fonts, so no font program is embedded.
//! Text is encoded as WinAnsi; widths come from the Adobe AFM files for
//! printable ASCII, and non-ASCII Latin letters borrow the width of their
//! base letter.

/// One of the two faces a report uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    /// PostScript name of the standard font.
    pub fn base_font(self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
        }
    }

    /// Resource name used in page content streams.
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            Font::Regular => &HELVETICA_WIDTHS,
            Font::Bold => &HELVETICA_BOLD_WIDTHS,
        }
    }
}

const FIRST_CHAR: u8 = 32;
const MISSING_WIDTH: u16 = 556;
const REPLACEMENT: u8 = b'?';

/// Advance widths for codes 32..=126, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Base letters for WinAnsi codes 0xC0..=0xFF, used for width lookup.
const LATIN1_BASE: &[u8; 64] =
    b"AAAAAAACEEEEIIIIDNOOOOO+OUUUUYPsaaaaaaaceeeeiiiidnooooo+ouuuuypy";

/// Encode one character as a WinAnsi byte, or `?` when it has no code.
pub fn encode_char(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '\u{20ac}' => 0x80,
        '\u{201a}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8a,
        '\u{2039}' => 0x8b,
        '\u{0152}' => 0x8c,
        '\u{017d}' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02dc}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9a,
        '\u{203a}' => 0x9b,
        '\u{0153}' => 0x9c,
        '\u{017e}' => 0x9e,
        '\u{0178}' => 0x9f,
        '\t' => b' ',
        _ => REPLACEMENT,
    }
}

/// Encode text as WinAnsi bytes for a content stream string.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

fn code_width(font: Font, code: u8) -> u16 {
    let widths = font.widths();
    let ascii = |byte: u8| widths[(byte - FIRST_CHAR) as usize];
    match code {
        32..=126 => ascii(code),
        0xa0 => ascii(b' '),
        0x85 | 0x89 | 0x8c | 0x97 | 0x99 | 0xc6 => 1000,
        0x9c | 0xe6 => 889,
        0x82 | 0x91 | 0x92 => ascii(b'\''),
        0x84 | 0x93 | 0x94 => ascii(b'"'),
        0x95 => 350,
        0x8a => ascii(b'S'),
        0x8e => ascii(b'Z'),
        0x9f => ascii(b'Y'),
        0x9a => ascii(b's'),
        0x9e => ascii(b'z'),
        0xc0..=0xff => ascii(LATIN1_BASE[(code - 0xc0) as usize]),
        _ => MISSING_WIDTH,
    }
}

fn char_units(font: Font, ch: char) -> u64 {
    u64::from(code_width(font, encode_char(ch)))
}

fn units_to_points(units: u64, size: f32) -> f32 {
    units as f32 * size / 1000.0
}

/// Width of `text` set in `font` at `size` points.
pub fn text_width(font: Font, size: f32, text: &str) -> f32 {
    let units: u64 = text.chars().map(|ch| char_units(font, ch)).sum();
    units_to_points(units, size)
}

/// Whether `text` fits in `max_width`. Stops measuring at the first
/// character past the limit.
fn fits(font: Font, size: f32, max_width: f32, text: &str) -> bool {
    let mut units = 0u64;
    for ch in text.chars() {
        units += char_units(font, ch);
        if units_to_points(units, size) > max_width {
            return false;
        }
    }
    true
}

/// Break `text` into lines no wider than `max_width`.
///
/// Words are packed greedily; explicit newlines start a new line and a
/// word wider than the whole line is split between characters. Always
/// returns at least one line.
pub fn wrap_lines(font: Font, size: f32, max_width: f32, text: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let mut line = String::new();

        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                if fits(font, size, max_width, word) {
                    line.push_str(word);
                    continue;
                }
            } else {
                let candidate = format!("{line} {word}");
                if fits(font, size, max_width, &candidate) {
                    line = candidate;
                    continue;
                }
                lines.push(std::mem::take(&mut line));
                if fits(font, size, max_width, word) {
                    line.push_str(word);
                    continue;
                }
            }

            let mut units = 0u64;
            for ch in word.chars() {
                let width = char_units(font, ch);
                if !line.is_empty() && units_to_points(units + width, size) > max_width {
                    lines.push(std::mem::take(&mut line));
                    units = 0;
                }
                line.push(ch);
                units += width;
            }
        }

        lines.push(line);
    }

    lines
}
