//! The simplified draughts rule set.
//!
//! Rules, in full: a piece steps one square diagonally, or jumps two
//! squares diagonally over an adjacent opposing piece, capturing it. Men
//! move only toward the opposite baseline; kings move either way. A man
//! reaching the opposite baseline is crowned. A side with no pieces left
//! loses. There is no mandatory capture, no capture continuation, and no
//! flying king.

use crate::rules::RuleSet;
use crate::Board;
use checkers_core::{Color, Move, MoveKind, Pos};

/// The eight diagonal offsets a piece can ever reach in one move.
const OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (2, 2),
    (2, -2),
    (-2, 2),
    (-2, -2),
];

/// The simplified checkers variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedDraughts;

impl RuleSet for SimplifiedDraughts {
    fn initial_board(&self) -> Board {
        Board::standard()
    }

    fn validate(&self, board: &Board, mover: Color, from: Pos, to: Pos) -> Option<MoveKind> {
        let piece = match board.get(from) {
            Some(p) if p.color == mover => p,
            _ => return None,
        };
        if board.get(to).is_some() {
            return None;
        }

        let (drow, dcol) = Move::new(from, to).delta();

        // Plain step: one square diagonally, forward unless crowned.
        if drow.abs() == 1 && dcol.abs() == 1 && (piece.king || drow == mover.forward_dir()) {
            return Some(MoveKind::Step);
        }

        // Jump: two squares diagonally over an opposing piece.
        if drow.abs() == 2 && dcol.abs() == 2 {
            let mid = from.offset(drow / 2, dcol / 2)?;
            if let Some(mid_piece) = board.get(mid) {
                if mid_piece.color != mover && (piece.king || drow == 2 * mover.forward_dir()) {
                    return Some(MoveKind::Jump(mid));
                }
            }
        }

        None
    }

    fn moves_for(&self, board: &Board, color: Color) -> Vec<(Move, MoveKind)> {
        let mut moves = Vec::new();
        for (from, _) in board.pieces(color) {
            for (drow, dcol) in OFFSETS {
                if let Some(to) = from.offset(drow, dcol) {
                    if let Some(kind) = self.validate(board, color, from, to) {
                        moves.push((Move::new(from, to), kind));
                    }
                }
            }
        }
        moves
    }

    fn winner(&self, board: &Board) -> Option<Color> {
        let green = board.count(Color::Green);
        let white = board.count(Color::White);
        // Green is checked first, so a board empty of both colors counts
        // as a White win. Unreachable in normal play; kept as-is.
        if green == 0 {
            Some(Color::White)
        } else if white == 0 {
            Some(Color::Green)
        } else {
            None
        }
    }

    fn apply(&self, board: &mut Board, mov: Move, kind: MoveKind) -> bool {
        let mut piece = match board.take(mov.from) {
            Some(p) => p,
            None => return false,
        };
        if let MoveKind::Jump(mid) = kind {
            board.set(mid, None);
        }
        // Crowning keys on the piece's color, not its current king
        // status; an already-crowned king re-evaluates harmlessly.
        let promoted = mov.to.row == piece.color.crowning_row() && !piece.king;
        if promoted {
            piece.promote();
        }
        board.set(mov.to, Some(piece));
        promoted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::Piece;
    use proptest::prelude::*;

    fn pos(row: u8, col: u8) -> Pos {
        Pos::new(row, col).unwrap()
    }

    #[test]
    fn green_man_steps_forward() {
        let board = Board::standard();
        let from = pos(2, 1);
        assert_eq!(
            SimplifiedDraughts.validate(&board, Color::Green, from, pos(3, 2)),
            Some(MoveKind::Step)
        );
        assert_eq!(
            SimplifiedDraughts.validate(&board, Color::Green, from, pos(3, 0)),
            Some(MoveKind::Step)
        );
    }

    #[test]
    fn man_cannot_step_backward() {
        let mut board = Board::empty();
        board.set(pos(4, 3), Some(Piece::man(Color::Green)));
        board.set(pos(3, 4), Some(Piece::man(Color::White)));

        assert_eq!(
            SimplifiedDraughts.validate(&board, Color::Green, pos(4, 3), pos(3, 2)),
            None
        );
        assert_eq!(
            SimplifiedDraughts.validate(&board, Color::White, pos(3, 4), pos(4, 5)),
            None
        );
    }

    #[test]
    fn king_steps_either_way() {
        let mut board = Board::empty();
        board.set(pos(4, 3), Some(Piece::king(Color::White)));
        for to in [pos(3, 2), pos(3, 4), pos(5, 2), pos(5, 4)] {
            assert_eq!(
                SimplifiedDraughts.validate(&board, Color::White, pos(4, 3), to),
                Some(MoveKind::Step)
            );
        }
    }

    #[test]
    fn occupied_destination_is_illegal() {
        let board = Board::standard();
        // a2 to b3 is a forward step onto an occupied square.
        assert_eq!(
            SimplifiedDraughts.validate(&board, Color::Green, pos(1, 0), pos(2, 1)),
            None
        );
    }

    #[test]
    fn non_diagonal_geometry_is_illegal() {
        let mut board = Board::empty();
        let from = pos(4, 3);
        board.set(from, Some(Piece::king(Color::Green)));
        for to in [
            pos(4, 3), // zero delta
            pos(5, 3), // straight
            pos(4, 5),
            pos(6, 4), // |dr| != |dc|
            pos(7, 6), // distance 3
            pos(1, 0),
        ] {
            assert_eq!(
                SimplifiedDraughts.validate(&board, Color::Green, from, to),
                None,
                "expected {} -> {} to be illegal",
                from,
                to
            );
        }
    }

    #[test]
    fn jump_captures_midpoint() {
        let mut board = Board::empty();
        board.set(pos(2, 1), Some(Piece::man(Color::Green)));
        board.set(pos(3, 2), Some(Piece::man(Color::White)));

        assert_eq!(
            SimplifiedDraughts.validate(&board, Color::Green, pos(2, 1), pos(4, 3)),
            Some(MoveKind::Jump(pos(3, 2)))
        );
    }

    #[test]
    fn jump_requires_opposing_midpoint() {
        let mut board = Board::empty();
        board.set(pos(2, 1), Some(Piece::man(Color::Green)));
        // Empty midpoint.
        assert_eq!(
            SimplifiedDraughts.validate(&board, Color::Green, pos(2, 1), pos(4, 3)),
            None
        );
        // Friendly midpoint.
        board.set(pos(3, 2), Some(Piece::man(Color::Green)));
        assert_eq!(
            SimplifiedDraughts.validate(&board, Color::Green, pos(2, 1), pos(4, 3)),
            None
        );
    }

    #[test]
    fn man_cannot_jump_backward() {
        let mut board = Board::empty();
        board.set(pos(4, 3), Some(Piece::man(Color::Green)));
        board.set(pos(3, 2), Some(Piece::man(Color::White)));
        assert_eq!(
            SimplifiedDraughts.validate(&board, Color::Green, pos(4, 3), pos(2, 1)),
            None
        );
    }

    #[test]
    fn king_jumps_either_way() {
        let mut board = Board::empty();
        board.set(pos(4, 3), Some(Piece::king(Color::Green)));
        board.set(pos(3, 2), Some(Piece::man(Color::White)));
        assert_eq!(
            SimplifiedDraughts.validate(&board, Color::Green, pos(4, 3), pos(2, 1)),
            Some(MoveKind::Jump(pos(3, 2)))
        );
    }

    #[test]
    fn wrong_color_source_is_illegal() {
        let board = Board::standard();
        assert_eq!(
            SimplifiedDraughts.validate(&board, Color::White, pos(2, 1), pos(3, 2)),
            None
        );
        // Empty source.
        assert_eq!(
            SimplifiedDraughts.validate(&board, Color::Green, pos(3, 2), pos(4, 3)),
            None
        );
    }

    #[test]
    fn capture_is_never_mandatory() {
        let mut board = Board::empty();
        board.set(pos(2, 1), Some(Piece::man(Color::Green)));
        board.set(pos(3, 2), Some(Piece::man(Color::White)));
        // A jump is available, but the plain step stays legal.
        assert_eq!(
            SimplifiedDraughts.validate(&board, Color::Green, pos(2, 1), pos(3, 0)),
            Some(MoveKind::Step)
        );
    }

    #[test]
    fn moves_for_initial_position() {
        let board = Board::standard();
        let green = SimplifiedDraughts.moves_for(&board, Color::Green);
        assert_eq!(green.len(), 7);
        assert!(green.iter().all(|(_, kind)| !kind.is_jump()));
        let white = SimplifiedDraughts.moves_for(&board, Color::White);
        assert_eq!(white.len(), 7);
    }

    #[test]
    fn moves_for_includes_jumps() {
        let mut board = Board::empty();
        board.set(pos(2, 1), Some(Piece::man(Color::Green)));
        board.set(pos(3, 2), Some(Piece::man(Color::White)));

        let moves = SimplifiedDraughts.moves_for(&board, Color::Green);
        let jump = moves.iter().find(|(_, kind)| kind.is_jump());
        assert_eq!(
            jump,
            Some(&(Move::new(pos(2, 1), pos(4, 3)), MoveKind::Jump(pos(3, 2))))
        );
    }

    #[test]
    fn blocked_piece_has_no_moves() {
        let mut board = Board::empty();
        // White man on the edge with its only forward step occupied by
        // a friendly piece; the jump over it is blocked too.
        board.set(pos(2, 7), Some(Piece::man(Color::White)));
        board.set(pos(1, 6), Some(Piece::man(Color::White)));
        let moves = SimplifiedDraughts.moves_for(&board, Color::White);
        assert!(moves
            .iter()
            .all(|(m, _)| m.from != pos(2, 7)));
    }

    #[test]
    fn winner_by_piece_count() {
        let board = Board::from_placement("8/1g6/8/8/8/8/8/8").unwrap();
        assert_eq!(SimplifiedDraughts.winner(&board), Some(Color::Green));

        let board = Board::from_placement("8/8/8/8/4w3/8/8/8").unwrap();
        assert_eq!(SimplifiedDraughts.winner(&board), Some(Color::White));

        assert_eq!(SimplifiedDraughts.winner(&Board::standard()), None);
    }

    #[test]
    fn empty_board_reports_white() {
        assert_eq!(
            SimplifiedDraughts.winner(&Board::empty()),
            Some(Color::White)
        );
    }

    #[test]
    fn apply_step() {
        let mut board = Board::standard();
        let mov = Move::new(pos(2, 1), pos(3, 2));
        let promoted = SimplifiedDraughts.apply(&mut board, mov, MoveKind::Step);
        assert!(!promoted);
        assert_eq!(board.get(pos(2, 1)), None);
        assert_eq!(board.get(pos(3, 2)), Some(Piece::man(Color::Green)));
    }

    #[test]
    fn apply_jump_removes_captured() {
        let mut board = Board::empty();
        board.set(pos(2, 1), Some(Piece::man(Color::Green)));
        board.set(pos(3, 2), Some(Piece::man(Color::White)));

        let mov = Move::new(pos(2, 1), pos(4, 3));
        SimplifiedDraughts.apply(&mut board, mov, MoveKind::Jump(pos(3, 2)));
        assert_eq!(board.get(pos(3, 2)), None);
        assert_eq!(board.get(pos(4, 3)), Some(Piece::man(Color::Green)));
        assert_eq!(board.count(Color::White), 0);
    }

    #[test]
    fn apply_crowns_on_baseline() {
        let mut board = Board::empty();
        board.set(pos(6, 1), Some(Piece::man(Color::Green)));
        let mov = Move::new(pos(6, 1), pos(7, 2));
        let promoted = SimplifiedDraughts.apply(&mut board, mov, MoveKind::Step);
        assert!(promoted);
        assert_eq!(board.get(pos(7, 2)), Some(Piece::king(Color::Green)));

        // A king landing on the baseline again stays a king; no new
        // promotion is reported.
        let mut board = Board::empty();
        board.set(pos(1, 2), Some(Piece::king(Color::White)));
        let mov = Move::new(pos(1, 2), pos(0, 1));
        let promoted = SimplifiedDraughts.apply(&mut board, mov, MoveKind::Step);
        assert!(!promoted);
        assert_eq!(board.get(pos(0, 1)), Some(Piece::king(Color::White)));
    }

    #[test]
    fn white_crowns_on_row_zero() {
        let mut board = Board::empty();
        board.set(pos(1, 2), Some(Piece::man(Color::White)));
        let mov = Move::new(pos(1, 2), pos(0, 3));
        assert!(SimplifiedDraughts.apply(&mut board, mov, MoveKind::Step));
        assert_eq!(board.get(pos(0, 3)), Some(Piece::king(Color::White)));
    }

    proptest! {
        #[test]
        fn man_step_legal_iff_forward(
            row in 1u8..7,
            col in 1u8..7,
            drow in prop::sample::select(vec![-1i8, 1]),
            dcol in prop::sample::select(vec![-1i8, 1]),
            green in any::<bool>(),
        ) {
            let color = if green { Color::Green } else { Color::White };
            let mut board = Board::empty();
            let from = Pos::new(row, col).unwrap();
            board.set(from, Some(Piece::man(color)));
            let to = from.offset(drow, dcol).unwrap();

            let kind = SimplifiedDraughts.validate(&board, color, from, to);
            prop_assert_eq!(kind.is_some(), drow == color.forward_dir());
        }

        #[test]
        fn king_step_ignores_direction(
            row in 1u8..7,
            col in 1u8..7,
            drow in prop::sample::select(vec![-1i8, 1]),
            dcol in prop::sample::select(vec![-1i8, 1]),
            green in any::<bool>(),
        ) {
            let color = if green { Color::Green } else { Color::White };
            let mut board = Board::empty();
            let from = Pos::new(row, col).unwrap();
            board.set(from, Some(Piece::king(color)));
            let to = from.offset(drow, dcol).unwrap();

            prop_assert_eq!(
                SimplifiedDraughts.validate(&board, color, from, to),
                Some(MoveKind::Step)
            );
        }
    }
}
