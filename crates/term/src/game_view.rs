//! GameView: maps a `core::GameSnapshot` into lines of terminal text.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board frame is the classic terminal look: each row is `<!` followed by
//! one ` .`/` #`/` O` pair per cell and a closing `!>`, below it an all-`=`
//! floor line and a `\/` skirt. The next-piece panel sits to the right of the
//! frame.

use crate::core::{GameSnapshot, Mask};
use crate::types::MASK_SIZE;

/// Gap between the board frame and the next-piece panel.
const PANEL_GUTTER: usize = 3;

/// A lightweight text renderer for the game state.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render a snapshot into displayable lines, top to bottom.
    ///
    /// The active piece overlays the board cells as `O` without touching the
    /// snapshot; locked cells render as `#`, empty cells as `.`.
    pub fn render(&self, snap: &GameSnapshot) -> Vec<String> {
        let mut lines = self.board_lines(snap);
        let frame_width = lines.first().map(String::len).unwrap_or(0);

        // Merge the next-piece panel alongside the top of the frame.
        for (i, panel_line) in next_panel_lines(snap.next_mask).into_iter().enumerate() {
            if i >= lines.len() {
                lines.push(String::new());
            }
            let pad = frame_width + PANEL_GUTTER;
            let line = &mut lines[i];
            while line.len() < pad {
                line.push(' ');
            }
            line.push_str(&panel_line);
        }

        if snap.game_over {
            lines.push(String::new());
            lines.push("GAME OVER - press R to restart, Q to quit".to_string());
        }
        lines
    }

    fn board_lines(&self, snap: &GameSnapshot) -> Vec<String> {
        let width = usize::from(snap.width());
        let mut lines = Vec::with_capacity(usize::from(snap.height()) + 2);

        for (y, row) in snap.rows().enumerate() {
            let mut line = String::with_capacity(2 * width + 4);
            line.push_str("<!");
            for (x, cell) in row.iter().enumerate() {
                line.push(' ');
                if snap.is_active_cell(x as i16, y as i16) {
                    line.push('O');
                } else if cell.is_filled() {
                    line.push('#');
                } else {
                    line.push('.');
                }
            }
            line.push_str("!>");
            lines.push(line);
        }

        let mut floor = String::with_capacity(2 * width + 4);
        floor.push_str("<!");
        for _ in 0..2 * width {
            floor.push('=');
        }
        floor.push_str("!>");
        lines.push(floor);

        let mut skirt = String::with_capacity(2 * width);
        for _ in 0..width {
            skirt.push_str("\\/");
        }
        lines.push(skirt);

        lines
    }
}

/// The next-piece preview panel, occupied mask cells shown as `0`.
fn next_panel_lines(mask: Mask) -> Vec<String> {
    let mut lines = vec![
        "Next Block".to_string(),
        String::new(),
        "^^^^^^^^".to_string(),
    ];
    for row in 0..MASK_SIZE {
        let mut line = String::with_capacity(2 * MASK_SIZE + 2);
        line.push('<');
        for col in 0..MASK_SIZE {
            line.push(' ');
            line.push(if mask.is_occupied(col, row) { '0' } else { ' ' });
        }
        line.push('>');
        lines.push(line);
    }
    lines.push("--------".to_string());
    lines
}
