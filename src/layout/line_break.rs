//! Greedy word-wrapping line breaker
//!
//! Splits a UTF-16 buffer into visual lines against a maximum width.
//! Explicit `\n` breaks are always honored; otherwise the breaker
//! accumulates glyph advances greedily and backtracks to the last word
//! boundary on overflow. A word that cannot fit a full line on its own
//! is broken mid-word instead, so degenerate container widths still
//! terminate with one character per line.

use crate::font::GlyphTable;

const NEWLINE: u16 = b'\n' as u16;
const SPACE: u16 = b' ' as u16;

/// A contiguous run of characters rendered at one vertical position
///
/// `offset` indexes the first UTF-16 unit of the line; the line extends
/// to the next line's offset (or the end of the buffer for the last
/// line). `width` is the accumulated advance in layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLine {
    /// Index of the line's first UTF-16 code unit
    pub offset: usize,
    /// Line width in layout units
    pub width: f32,
}

/// Running state for the line currently being scanned
#[derive(Debug, Default, Clone, Copy)]
struct LineState {
    offset: usize,
    line_width: f32,
    word_width: f32,
    /// Words completed on this line so far
    word_index: u32,
    /// Index of the current word's first code unit, the rewind point
    /// for a word-boundary break. Tracked directly so unmapped units
    /// inside the word cannot shift it.
    word_start: usize,
}

impl LineState {
    fn restart_at(offset: usize) -> Self {
        Self {
            offset,
            word_start: offset,
            ..Self::default()
        }
    }
}

/// Break a text buffer into lines no wider than `max_width`
///
/// `space_multiplier` is the style spacing multiplier applied to every
/// advance, `scale_x` the horizontal canvas scale. Results are appended
/// to `lines` after clearing it; at least one line is always produced,
/// so an empty buffer yields a single zero-width line.
///
/// Unmapped code units contribute no width but stay covered by the line
/// ranges. A glyph whose ink width alone reaches `max_width` is placed
/// on a line of its own, which keeps the scan moving even when the
/// container width is zero or negative.
pub fn break_lines(
    text: &[u16],
    table: &GlyphTable,
    max_width: f32,
    space_multiplier: f32,
    scale_x: f32,
    lines: &mut Vec<TextLine>,
) {
    lines.clear();
    let mut state = LineState::default();
    let mut i = 0;

    while i < text.len() {
        let unit = text[i];

        if unit == NEWLINE {
            lines.push(TextLine {
                offset: state.offset,
                width: state.line_width,
            });
            state = LineState::restart_at(i + 1);
            i += 1;
            continue;
        }

        if unit == SPACE {
            state.word_index += 1;
            state.word_width = 0.0;
            state.word_start = i + 1;
        }

        let Some(glyph) = table.get(unit) else {
            i += 1;
            continue;
        };

        let standalone_width = glyph.metrics.width * space_multiplier * scale_x;
        let advance = glyph.metrics.advance * space_multiplier * scale_x;

        if standalone_width >= max_width {
            // The glyph can never fit a line: close the running line and
            // give the glyph a line of its own.
            if i > state.offset {
                lines.push(TextLine {
                    offset: state.offset,
                    width: state.line_width,
                });
            }
            lines.push(TextLine {
                offset: i,
                width: advance,
            });
            state = LineState::restart_at(i + 1);
            i += 1;
            continue;
        }

        state.line_width += advance;
        state.word_width += advance;

        if state.line_width > max_width {
            if state.word_index != 0 {
                // A complete word already sits on this line: break at the
                // word boundary and rescan the overflowing word from its
                // first character.
                lines.push(TextLine {
                    offset: state.offset,
                    width: state.line_width - state.word_width,
                });
                let word_start = state.word_start;
                state = LineState::restart_at(word_start);
                i = word_start;
                continue;
            }

            // The line's only word is wider than the container: break
            // before the current character and carry it onto a new line.
            if i > state.offset {
                lines.push(TextLine {
                    offset: state.offset,
                    width: state.line_width - advance,
                });
            }
            state = LineState {
                offset: i,
                line_width: advance,
                word_width: advance,
                word_index: 0,
                word_start: i,
            };
            i += 1;
            continue;
        }

        i += 1;
    }

    // The final open line is always emitted, even when empty.
    lines.push(TextLine {
        offset: state.offset,
        width: state.line_width,
    });
}
