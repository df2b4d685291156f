//! Move enumeration

use crate::board::{Board, Player, Pos};

use super::capture::has_capture;
use super::intersection::neighbours;
use super::validate::{validate_move, LegalMove};

/// All legal single steps for a piece at `from`
pub fn moves_from(board: &Board, player: Player, from: Pos) -> Vec<LegalMove> {
    neighbours(from)
        .filter_map(|to| validate_move(board, player, from, to).ok())
        .collect()
}

/// All legal single steps for `player`
pub fn legal_moves(board: &Board, player: Player) -> Vec<LegalMove> {
    board
        .positions_of(player)
        .flat_map(|from| moves_from(board, player, from))
        .collect()
}

/// All capturing steps for `player`
pub fn capturing_moves(board: &Board, player: Player) -> Vec<LegalMove> {
    legal_moves(board, player)
        .into_iter()
        .filter(LegalMove::is_capture)
        .collect()
}

/// Whether `player` has any capturing step at all
pub fn has_any_capture(board: &Board, player: Player) -> bool {
    board.positions_of(player).any(|from| {
        neighbours(from).any(|to| board.is_empty(to) && has_capture(board, player, from, to))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_opening_moves() {
        // Only the centre point is free; White reaches it orthogonally from
        // (2,3) and (3,4) and diagonally from the strong points (3,3), (3,5).
        let board = Board::new();
        let moves = legal_moves(&board, Player::White);
        let mut origins: Vec<Pos> = moves.iter().map(|m| m.from).collect();
        origins.sort();
        assert_eq!(origins, vec![Pos::new(2, 3), Pos::new(3, 3), Pos::new(3, 4), Pos::new(3, 5)]);
        assert!(moves.iter().all(|m| m.to == Pos::new(2, 4)));
        assert!(moves.iter().all(LegalMove::is_capture));
        assert_eq!(capturing_moves(&board, Player::White).len(), 4);
        assert!(has_any_capture(&board, Player::White));
    }

    #[test]
    fn test_no_capture_available() {
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Cell::White);
        board.place(Pos::new(4, 8), Cell::Black);
        assert_eq!(legal_moves(&board, Player::White).len(), 3);
        assert!(capturing_moves(&board, Player::White).is_empty());
        assert!(!has_any_capture(&board, Player::White));
    }

    #[test]
    fn test_moves_from_weak_point() {
        let mut board = Board::empty();
        board.place(Pos::new(1, 2), Cell::White);
        let moves = moves_from(&board, Player::White, Pos::new(1, 2));
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.step.is_orthogonal()));
    }
}
