//! Plain-text board rendering.

use std::fmt;

use crate::board::Geometry;
use crate::core::Color;
use crate::rules::{GameView, Outcome, Reversi};

/// Textual view of a game's board.
///
/// Hex boards render one line per row, indented so the hexagon shows,
/// with no trailing newline. Square boards end every row with a newline.
/// Glyphs are `_` for empty, `X` for black, and `O` for white.
#[derive(Clone, Copy, Debug)]
pub struct TextView<'a, G: Geometry> {
    game: &'a Reversi<G>,
}

impl<'a, G: Geometry> TextView<'a, G> {
    pub fn new(game: &'a Reversi<G>) -> Self {
        Self { game }
    }

    /// One-line status: who is on turn and the disc counts, or the result.
    #[must_use]
    pub fn status(&self) -> String {
        let scores = self.game.scores();
        let (black, white) = (scores[Color::Black], scores[Color::White]);

        match self.game.winner() {
            Ok(Outcome::Winner(color)) => format!("{color} wins {black}-{white}"),
            Ok(Outcome::Draw) => format!("draw {black}-{white}"),
            Err(_) => format!("{} to move, {black}-{white}", self.game.active_player()),
        }
    }
}

impl<G: Geometry> fmt::Display for TextView<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.game.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{HexReversi, SquareReversi};

    #[test]
    fn test_hex_view_matches_render() {
        let game = HexReversi::new(7).unwrap();
        let text = TextView::new(&game).to_string();
        assert_eq!(text, game.render());
        assert_eq!(text.lines().count(), 7);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_square_view_opening() {
        let game = SquareReversi::new(4).unwrap();
        assert_eq!(
            TextView::new(&game).to_string(),
            "_ _ _ _ \n_ X O _ \n_ O X _ \n_ _ _ _ \n"
        );
    }

    #[test]
    fn test_status_lines() {
        let mut game = SquareReversi::new(8).unwrap();
        assert_eq!(TextView::new(&game).status(), "Black to move, 2-2");

        game.skip(Color::Black).unwrap();
        game.skip(Color::White).unwrap();
        assert_eq!(TextView::new(&game).status(), "draw 2-2");
    }
}
