use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::White.opponent(), Player::Black);
    assert_eq!(Player::Black.opponent(), Player::White);
}

#[test]
fn test_cell_values() {
    assert_eq!(Cell::Black.value(), -1);
    assert_eq!(Cell::Empty.value(), 0);
    assert_eq!(Cell::White.value(), 1);
    assert_eq!(Cell::from_value(1), Some(Cell::White));
    assert_eq!(Cell::from_value(2), None);
    assert_eq!(Cell::from(Player::Black), Cell::Black);
    assert!(Cell::White.is_owned_by(Player::White));
    assert!(!Cell::Empty.is_owned_by(Player::White));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::new(0, 0).is_valid());
    assert!(Pos::new(4, 8).is_valid());
    assert!(Pos::new(2, 4).is_valid());
    assert!(!Pos::new(-1, 0).is_valid());
    assert!(!Pos::new(0, -1).is_valid());
    assert!(!Pos::new(5, 0).is_valid());
    assert!(!Pos::new(0, 9).is_valid());
}

#[test]
fn test_pos_conversion() {
    assert_eq!(Pos::from_index(22), Pos::new(2, 4)); // Center
    assert_eq!(Pos::all().count(), TOTAL_CELLS);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 8) < Pos::new(1, 0));
}

#[test]
fn test_opening_position() {
    let board = Board::new();
    assert_eq!(board.count_pieces(), (22, 22));
    assert!(board.is_empty(Pos::new(2, 4)));
    assert_eq!(board.get(Pos::new(0, 0)), Cell::Black);
    assert_eq!(board.get(Pos::new(4, 8)), Cell::White);
    // Middle row alternates, starting with Black on the left
    assert_eq!(board.get(Pos::new(2, 0)), Cell::Black);
    assert_eq!(board.get(Pos::new(2, 1)), Cell::White);
    assert_eq!(board.get(Pos::new(2, 5)), Cell::Black);
    assert_eq!(board.get(Pos::new(2, 8)), Cell::White);
}

#[test]
fn test_occupant_out_of_bounds() {
    let board = Board::new();
    let off = Pos::new(5, 3);
    assert_eq!(board.occupant(off), Err(BoardError::OutOfBounds(off)));
    assert_eq!(board.get(off), Cell::Empty);
    assert!(!board.is_empty(off));
}

#[test]
fn test_from_values() {
    let mut values = [[0i8; COLS]; ROWS];
    values[1][2] = 1;
    values[3][7] = -1;
    let board = Board::from_values(values).unwrap();
    assert_eq!(board.count_pieces(), (1, 1));
    assert_eq!(board.to_values(), values);

    values[0][0] = 3;
    assert_eq!(Board::from_values(values), Err(BoardError::InvalidCellValue(3)));
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::empty();
    board.place(Pos::new(1, 1), Cell::White);
    board.place(Pos::new(1, 2), Cell::Black);
    board.place(Pos::new(1, 3), Cell::Black);
    assert_eq!(board.count_pieces(), (1, 2));

    board.remove_all(&[Pos::new(1, 2), Pos::new(1, 3)]);
    assert_eq!(board.count_pieces(), (1, 0));

    // Off-board writes are ignored
    board.place(Pos::new(7, 7), Cell::White);
    assert_eq!(board.count_pieces(), (1, 0));
}

#[test]
fn test_positions_of() {
    let board = Board::new();
    let white: Vec<Pos> = board.positions_of(Player::White).collect();
    assert_eq!(white.len(), 22);
    assert!(white.contains(&Pos::new(2, 1)));
    assert!(!white.contains(&Pos::new(2, 0)));
}

#[test]
fn test_display() {
    let text = Board::new().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), ROWS);
    assert_eq!(lines[2], "-1  1 -1  1  0 -1  1 -1  1");
}
