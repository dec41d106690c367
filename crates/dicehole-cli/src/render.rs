//! Plain-text rendering of a [`Frame`].

use dicehole_core::SlotValue;
use dicehole_game::{DrawKind, Frame};

fn hole_label(value: SlotValue) -> String {
    if value.is_empty() {
        "[ ]".to_owned()
    } else {
        format!("[{value}]")
    }
}

/// Renders a frame as a few lines of text.
///
/// The first line shows the expression and its result (`?` while any hole is
/// empty), the second the goal, followed by every drawable item and, once
/// won, a `WINNER` banner.
#[must_use]
pub fn render_frame(frame: &Frame) -> String {
    let labels = &frame.labels;
    let [lhs, op, rhs] = labels.hole_contents.map(hole_label);
    let result = labels
        .result
        .map_or_else(|| "?".to_owned(), |result| result.to_string());

    let mut out = format!("{lhs} {op} {rhs} = {result}\ngoal: {}\n", labels.goal);
    for item in &frame.items {
        let name = match item.kind {
            DrawKind::SquareHole => "square hole".to_owned(),
            DrawKind::CircleHole => "circle hole".to_owned(),
            DrawKind::Token(op) => format!("token {op}"),
            DrawKind::Die(value) => format!("die {value}"),
        };
        let center = item.bounds.center;
        out.push_str(&format!("  {name:<12} at ({}, {})\n", center.x, center.y));
    }
    if labels.winner {
        out.push_str("WINNER\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use dicehole_core::Point;
    use dicehole_game::Puzzle;

    use super::*;

    #[test]
    fn test_render_new_puzzle() {
        let puzzle = Puzzle::with_dice(10, &[3, 5, 2]).unwrap();
        let text = render_frame(&puzzle.frame());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("[ ] [ ] [ ] = ?"));
        assert_eq!(lines.next(), Some("goal: 10"));
        assert_eq!(lines.next(), Some("  square hole  at (100, 500)"));
        assert!(text.contains("  die 5        at (200, 100)\n"));
        assert!(text.contains("  token *      at (200, 200)\n"));
        assert!(!text.contains("WINNER"));
    }

    #[test]
    fn test_render_won_puzzle() {
        let mut puzzle = Puzzle::with_dice(15, &[1, 1, 1]).unwrap();
        for (from, to) in [
            (Point::new(100, 100), Point::new(100, 500)),
            (Point::new(100, 200), Point::new(200, 500)),
            (Point::new(200, 100), Point::new(300, 500)),
        ] {
            puzzle.on_pointer_down(from);
            puzzle.on_pointer_move(to);
            puzzle.on_pointer_up(to);
        }
        puzzle.update().unwrap();

        let text = render_frame(&puzzle.frame());
        assert!(text.starts_with("[1] [+] [1] = 2\ngoal: 15\n"));
        assert!(text.contains("  token +      at (200, 500)\n"));
        assert!(text.ends_with("WINNER\n"));
        // expression, goal, three holes, three tokens, three dice, banner
        assert_eq!(text.lines().count(), 12);
    }
}
