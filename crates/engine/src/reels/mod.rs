//! Slot-machine reel animation planning
//!
//! Timer-driven replacement for the widget's timeout chains: a 3×3
//! grid of reels scrolls continuously, columns stop left to right, and
//! every strip snaps onto a symbol boundary. Cosmetic, except for the
//! contract that the middle row comes to rest on the winning symbol.

use rand::Rng;

pub const COLUMNS: usize = 3;
pub const ROWS: usize = 3;
/// Strip length before the symbol sequence repeats, px
pub const STRIP_CYCLE_PX: f64 = 3000.0;
/// Continuous scroll speed while spinning, px/s
pub const SCROLL_SPEED_PX_PER_SEC: f64 = 5000.0;
/// Height of one symbol cell, px
pub const SYMBOL_HEIGHT_PX: f64 = 100.0;
/// Vertical nudge centering the symbol in the window, px
pub const SNAP_NUDGE_PX: f64 = 15.0;
/// Time before the first column stops, ms
pub const SPIN_DURATION_MS: u64 = 550;
/// Stagger between column stops, ms
pub const REEL_STOP_DELAY_MS: u64 = 150;
/// Final snap transition, ms
pub const SNAP_MS: u64 = 200;
/// Symbol indices used to fill the non-winning rows
pub const FILLER_SYMBOLS: [usize; 2] = [3, 9];

/// Animation phase of the whole reel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReelPhase {
    Idle,
    Spinning,
    /// Columns 0..=column have been stopped
    Stopping { column: usize },
    Settled,
}

/// Phase of a spin that started `elapsed_ms` ago
pub fn phase_at(elapsed_ms: u64) -> ReelPhase {
    if elapsed_ms < SPIN_DURATION_MS {
        return ReelPhase::Spinning;
    }
    let last_stop = column_stop_at_ms(COLUMNS - 1);
    if elapsed_ms >= last_stop + SNAP_MS {
        return ReelPhase::Settled;
    }
    let mut column = 0;
    while column + 1 < COLUMNS && elapsed_ms >= column_stop_at_ms(column + 1) {
        column += 1;
    }
    ReelPhase::Stopping { column }
}

/// Instant at which the given column stops, ms from spin start
pub fn column_stop_at_ms(column: usize) -> u64 {
    SPIN_DURATION_MS + column as u64 * REEL_STOP_DELAY_MS
}

/// Scroll offset of a strip that started at `start_pos`, normalized
/// into the first cycle
pub fn scroll_position(start_pos: f64, elapsed_ms: u64) -> f64 {
    let travelled = elapsed_ms as f64 / 1000.0 * SCROLL_SPEED_PX_PER_SEC;
    normalize_position(start_pos + travelled)
}

/// Wrap an offset into the `(-STRIP_CYCLE_PX, 0]` range
pub fn normalize_position(mut pos: f64) -> f64 {
    while pos <= -STRIP_CYCLE_PX {
        pos += STRIP_CYCLE_PX;
    }
    while pos > 0.0 {
        pos -= STRIP_CYCLE_PX;
    }
    pos
}

/// Resting offset that shows the symbol at `symbol_index`
pub fn symbol_offset(symbol_index: usize) -> f64 {
    -(symbol_index as f64 * SYMBOL_HEIGHT_PX) - SNAP_NUDGE_PX
}

/// Final symbol for every cell: winning symbol across the middle row,
/// filler symbols elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReelGrid {
    pub cells: [[usize; COLUMNS]; ROWS],
}

pub fn final_grid<R: Rng>(winning_symbol: usize, rng: &mut R) -> ReelGrid {
    let mut cells = [[0usize; COLUMNS]; ROWS];
    for (row, row_cells) in cells.iter_mut().enumerate() {
        for cell in row_cells.iter_mut() {
            *cell = if row == 1 {
                winning_symbol
            } else {
                FILLER_SYMBOLS[rng.gen_range(0..FILLER_SYMBOLS.len())]
            };
        }
    }
    ReelGrid { cells }
}
