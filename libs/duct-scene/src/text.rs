//! # Engraving Glyphs
//!
//! A built-in 3×5 segment font for the cover engraving. Each glyph is five
//! rows of three cells; horizontal runs of set cells become rectangular
//! cut blocks. The character set covers A–Z, 0–9, dash, dot and space;
//! anything else is rejected up front rather than engraved as a blank.

use crate::error::{SceneError, SceneResult};
use crate::solid::Solid;
use config::constants::CUT_OVERSHOOT;
use glam::DVec3;

/// Cells per glyph column.
pub const GLYPH_ROWS: usize = 5;
/// Cells per glyph row.
pub const GLYPH_COLS: usize = 3;
/// Glyph advance in cells (three columns plus one gap).
pub const GLYPH_ADVANCE: usize = GLYPH_COLS + 1;
/// Base cell size in millimetres at `text_scale = 1`.
pub const BASE_CELL: f64 = 1.2;

/// Returns the five rows of a glyph, top to bottom, three bits each
/// (most significant bit first), or `None` for unsupported characters.
pub fn glyph_rows(ch: char) -> Option<[u8; GLYPH_ROWS]> {
    let rows = match ch.to_ascii_uppercase() {
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'N' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => [0b111, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        _ => return None,
    };
    Some(rows)
}

/// Width of a rendered string in millimetres: glyph advances minus the
/// trailing gap.
pub fn text_length(text: &str, cell: f64) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    (text.chars().count() * GLYPH_ADVANCE - 1) as f64 * cell
}

/// Height of the rendered glyphs in millimetres.
pub fn text_height(cell: f64) -> f64 {
    GLYPH_ROWS as f64 * cell
}

/// Builds the cut blocks for a string engraved into a face at `y = face_y`,
/// reading along +Z starting at `z_start`, glyph rows stacked along −X from
/// `x_top`.
///
/// Each horizontal run of set cells becomes one block descending
/// `depth` below the face (overshot above it so the cut always pierces).
///
/// # Errors
///
/// Fails on the first character without a glyph.
pub fn engrave_cuts(
    text: &str,
    cell: f64,
    depth: f64,
    face_y: f64,
    x_top: f64,
    z_start: f64,
) -> SceneResult<Vec<Solid>> {
    let mut cuts = Vec::new();
    let mut pen_z = z_start;

    for ch in text.chars() {
        let rows = glyph_rows(ch).ok_or(SceneError::UnsupportedGlyph { ch })?;
        for (row_idx, &row) in rows.iter().enumerate() {
            let x_hi = x_top - row_idx as f64 * cell;
            let cell_set = |col: usize| (row >> (GLYPH_COLS - 1 - col)) & 1 != 0;
            let mut col = 0;
            while col < GLYPH_COLS {
                if !cell_set(col) {
                    col += 1;
                    continue;
                }
                let run_start = col;
                while col < GLYPH_COLS && cell_set(col) {
                    col += 1;
                }
                cuts.push(Solid::block(
                    DVec3::new(
                        x_hi - cell,
                        face_y - depth,
                        pen_z + run_start as f64 * cell,
                    ),
                    DVec3::new(x_hi, face_y + CUT_OVERSHOOT, pen_z + col as f64 * cell),
                ));
            }
        }
        pen_z += GLYPH_ADVANCE as f64 * cell;
    }

    Ok(cuts)
}
