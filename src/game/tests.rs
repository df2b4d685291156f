use super::*;
use crate::rules::legal_moves;

fn p(row: i32, col: i32) -> Pos {
    Pos::new(row, col)
}

fn board_with(white: &[(i32, i32)], black: &[(i32, i32)]) -> Board {
    let mut board = Board::empty();
    for &(r, c) in white {
        board.place(p(r, c), Cell::White);
    }
    for &(r, c) in black {
        board.place(p(r, c), Cell::Black);
    }
    board
}

fn game_with(white: &[(i32, i32)], black: &[(i32, i32)]) -> Game {
    Game::from_board(board_with(white, black), Player::White, GameConfig::default())
}

fn total_pieces(game: &Game) -> u32 {
    let (white, black) = game.piece_counts();
    white + black
}

fn applied(outcome: MoveOutcome) -> StepReport {
    match outcome {
        MoveOutcome::Applied(report) => report,
        other => panic!("expected Applied, got {:?}", other),
    }
}

#[test]
fn test_new_game() {
    let game = Game::new();
    assert_eq!(game.turn(), Player::White);
    assert_eq!(game.phase(), &Phase::AwaitingMove);
    assert_eq!(game.piece_counts(), (22, 22));
    assert!(game.history().is_empty());
    assert_eq!(game.snapshot(), Board::new());
}

#[test]
fn test_config_first_player() {
    let game = Game::with_config(GameConfig::default().with_first_player(Player::Black));
    assert_eq!(game.turn(), Player::Black);
}

#[test]
fn test_opening_destination_occupied() {
    let mut game = Game::new();
    assert_eq!(
        game.attempt_move(p(2, 1), p(1, 1)),
        Err(RejectionKind::DestinationOccupied)
    );
    assert_eq!(game.snapshot(), Board::new());
    assert_eq!(game.turn(), Player::White);
}

#[test]
fn test_plain_move_passes_turn() {
    // White steps orthogonally off a weak point with nothing in line
    let mut game = game_with(&[(2, 1)], &[(4, 8)]);
    let report = applied(game.attempt_move(p(2, 1), p(1, 1)).unwrap());

    assert!(report.captured().is_empty());
    assert!(!report.chain_continues);
    assert_eq!(game.turn(), Player::Black);
    assert_eq!(game.phase(), &Phase::AwaitingMove);
    assert_eq!(game.board().get(p(1, 1)), Cell::White);
    assert!(game.board().is_empty(p(2, 1)));
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.history()[0].capture, None);
}

#[test]
fn test_approach_capture_enters_chain() {
    let mut game = game_with(&[(2, 3)], &[(2, 5), (2, 6), (4, 4)]);
    let report = applied(game.attempt_move(p(2, 3), p(2, 4)).unwrap());

    assert_eq!(report.captured(), &[p(2, 5), p(2, 6)]);
    assert_eq!(
        report.capture.as_ref().map(|c| c.direction),
        Some(CaptureDirection::Approach)
    );
    assert!(report.chain_continues);
    assert!(game.board().is_empty(p(2, 5)));
    assert!(game.board().is_empty(p(2, 6)));
    assert_eq!(game.piece_counts(), (1, 1));

    let chain = game.chain().expect("chain should be active");
    assert_eq!(chain.position(), p(2, 4));
    assert_eq!(chain.visited(), &[p(2, 3), p(2, 4)]);
    assert_eq!(game.chain_targets(), &[p(3, 4)]);
    // The capturing side keeps the turn
    assert_eq!(game.turn(), Player::White);
}

#[test]
fn test_choice_withdrawal_keeps_approach_pieces() {
    let mut game = game_with(&[(1, 3)], &[(1, 2), (1, 5), (1, 6), (4, 8)]);
    let outcome = game.attempt_move(p(1, 3), p(1, 4)).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::AppliedAwaitingDirection {
            approach: vec![p(1, 5), p(1, 6)],
            withdrawal: vec![p(1, 2)],
        }
    );
    assert!(matches!(game.phase(), Phase::AwaitingDirectionChoice(_)));
    // Nothing removed until the choice is made
    assert_eq!(game.piece_counts(), (1, 4));

    let report = applied(game.choose_direction(CaptureDirection::Withdrawal).unwrap());
    assert_eq!(report.captured(), &[p(1, 2)]);
    assert!(game.board().is_empty(p(1, 2)));
    assert_eq!(game.board().get(p(1, 5)), Cell::Black);
    assert_eq!(game.board().get(p(1, 6)), Cell::Black);

    // No further capture from (1,4): the turn passes
    assert!(!report.chain_continues);
    assert_eq!(game.turn(), Player::Black);
    assert_eq!(game.phase(), &Phase::AwaitingMove);
}

#[test]
fn test_choice_approach() {
    let mut game = game_with(&[(1, 3)], &[(1, 2), (1, 5), (1, 6), (4, 8)]);
    game.attempt_move(p(1, 3), p(1, 4)).unwrap();
    let report = applied(game.choose_direction(CaptureDirection::Approach).unwrap());
    assert_eq!(report.captured(), &[p(1, 5), p(1, 6)]);
    assert_eq!(game.board().get(p(1, 2)), Cell::Black);
    assert_eq!(game.piece_counts(), (1, 2));
}

#[test]
fn test_pending_choice_blocks_other_requests() {
    let mut game = game_with(&[(1, 3), (4, 0)], &[(1, 2), (1, 5), (4, 8)]);
    game.attempt_move(p(1, 3), p(1, 4)).unwrap();
    let before = game.snapshot();

    assert_eq!(
        game.attempt_move(p(4, 0), p(3, 0)),
        Err(RejectionKind::DirectionChoicePending)
    );
    assert_eq!(
        game.attempt_recapture(p(0, 4)),
        Err(RejectionKind::DirectionChoicePending)
    );
    assert_eq!(game.stop_chain(), Err(RejectionKind::DirectionChoicePending));
    assert_eq!(game.snapshot(), before);
    assert!(matches!(game.phase(), Phase::AwaitingDirectionChoice(_)));
}

#[test]
fn test_choose_without_pending_choice() {
    let mut game = Game::new();
    assert_eq!(
        game.choose_direction(CaptureDirection::Approach),
        Err(RejectionKind::NoPendingDirectionChoice)
    );
    assert_eq!(game.phase(), &Phase::AwaitingMove);
}

#[test]
fn test_chain_to_game_over() {
    let mut game = game_with(&[(2, 3)], &[(2, 5), (2, 6), (4, 4)]);
    game.attempt_move(p(2, 3), p(2, 4)).unwrap();

    let outcome = game.attempt_recapture(p(3, 4)).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::GameOver {
            winner: Player::White
        }
    );
    assert_eq!(game.winner(), Some(Player::White));
    assert_eq!(game.piece_counts(), (1, 0));

    let before = game.snapshot();
    assert_eq!(
        game.attempt_move(p(3, 4), p(2, 4)),
        Err(RejectionKind::GameAlreadyOver)
    );
    assert_eq!(
        game.attempt_recapture(p(2, 4)),
        Err(RejectionKind::GameAlreadyOver)
    );
    assert_eq!(
        game.choose_direction(CaptureDirection::Approach),
        Err(RejectionKind::GameAlreadyOver)
    );
    assert_eq!(game.stop_chain(), Err(RejectionKind::GameAlreadyOver));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_stop_chain_passes_turn() {
    let mut game = game_with(&[(2, 3)], &[(2, 5), (2, 6), (4, 4)]);
    game.attempt_move(p(2, 3), p(2, 4)).unwrap();
    assert!(game.chain().is_some());

    assert_eq!(game.stop_chain(), Ok(()));
    assert_eq!(game.turn(), Player::Black);
    assert_eq!(game.phase(), &Phase::AwaitingMove);
    assert!(game.chain_targets().is_empty());
    assert_eq!(game.board().get(p(4, 4)), Cell::Black);

    assert_eq!(game.stop_chain(), Err(RejectionKind::NoActiveChain));
    assert_eq!(
        game.attempt_recapture(p(3, 4)),
        Err(RejectionKind::NoActiveChain)
    );
}

/// White on (2,2); Black on (2,1), (2,4), (0,3). Moving right offers
/// both runs; after taking (2,4) by approach, stepping back to (2,2)
/// would capture (2,1) but revisits a point.
fn revisit_setup() -> Game {
    let mut game = game_with(&[(2, 2)], &[(2, 1), (2, 4), (0, 3)]);
    let outcome = game.attempt_move(p(2, 2), p(2, 3)).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::AppliedAwaitingDirection {
            approach: vec![p(2, 4)],
            withdrawal: vec![p(2, 1)],
        }
    );
    let report = applied(game.choose_direction(CaptureDirection::Approach).unwrap());
    assert!(report.chain_continues);
    game
}

#[test]
fn test_chain_rejects_revisit() {
    let mut game = revisit_setup();
    assert_eq!(game.chain_targets(), &[p(1, 3)]);
    let before = game.snapshot();

    assert_eq!(
        game.attempt_recapture(p(2, 2)),
        Err(RejectionKind::SquareAlreadyVisitedInChain)
    );
    assert_eq!(game.snapshot(), before);
    assert!(game.chain().is_some());
}

#[test]
fn test_chain_rejects_non_capture() {
    let mut game = revisit_setup();
    assert_eq!(
        game.attempt_recapture(p(3, 3)),
        Err(RejectionKind::MustCaptureToRecapture)
    );
    // Validator rules still apply to chain steps
    assert_eq!(
        game.attempt_recapture(p(1, 4)),
        Err(RejectionKind::DisallowedDirectionForIntersection)
    );
    assert_eq!(
        game.attempt_recapture(p(2, 5)),
        Err(RejectionKind::NotUnitStep)
    );
    assert!(game.chain().is_some());
}

#[test]
fn test_chain_rejects_other_piece() {
    let mut game = revisit_setup();
    assert_eq!(
        game.attempt_move(p(2, 1), p(3, 1)),
        Err(RejectionKind::NotTheActivePieceInChain)
    );
    assert!(game.chain().is_some());
}

#[test]
fn test_chain_continues_through_attempt_move() {
    let mut game = revisit_setup();
    let report = applied(game.attempt_move(p(2, 3), p(1, 3)).unwrap());
    assert_eq!(report.captured(), &[p(0, 3)]);
    assert!(!report.chain_continues);
    assert_eq!(game.turn(), Player::Black);

    // One turn in history, with the chain step embedded
    assert_eq!(game.history().len(), 1);
    let turn = &game.history()[0];
    assert_eq!(turn.from, p(2, 2));
    assert_eq!(turn.recaptures.len(), 1);
    assert_eq!(turn.recaptures[0].to, p(1, 3));
    assert_eq!(turn.captured_count(), 2);
}

#[test]
fn test_recapture_with_both_runs_awaits_direction() {
    // (2,2)->(2,3) takes (2,4); the chain step up to (1,3) then has
    // (0,3) ahead and (3,3) behind
    let mut game = game_with(&[(2, 2)], &[(2, 4), (0, 3), (3, 3)]);
    let report = applied(game.attempt_move(p(2, 2), p(2, 3)).unwrap());
    assert_eq!(report.captured(), &[p(2, 4)]);
    assert!(report.chain_continues);

    let outcome = game.attempt_recapture(p(1, 3)).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::AppliedAwaitingDirection {
            approach: vec![p(0, 3)],
            withdrawal: vec![p(3, 3)],
        }
    );
    assert!(matches!(game.phase(), Phase::AwaitingDirectionChoice(_)));
    assert_eq!(game.board().get(p(1, 3)), Cell::White);
    assert_eq!(game.stop_chain(), Err(RejectionKind::DirectionChoicePending));

    let report = applied(game.choose_direction(CaptureDirection::Withdrawal).unwrap());
    assert_eq!(report.captured(), &[p(3, 3)]);
    assert!(game.board().is_empty(p(3, 3)));
    assert_eq!(game.board().get(p(0, 3)), Cell::Black);

    // Nothing left to take from (1,3): the turn passes
    assert!(!report.chain_continues);
    assert_eq!(game.turn(), Player::Black);
    assert_eq!(game.history().len(), 1);
    let turn = &game.history()[0];
    assert_eq!(turn.recaptures.len(), 1);
    assert_eq!(
        turn.recaptures[0].capture.as_ref().map(|c| c.direction),
        Some(CaptureDirection::Withdrawal)
    );
    assert_eq!(turn.captured_count(), 2);
}

#[test]
fn test_mandatory_capture() {
    let white = [(2, 3), (0, 0)];
    let black = [(2, 5)];

    let mut free = game_with(&white, &black);
    assert!(free.attempt_move(p(0, 0), p(0, 1)).is_ok());

    let config = GameConfig::default().with_mandatory_capture(true);
    let mut strict = Game::from_board(board_with(&white, &black), Player::White, config);
    assert_eq!(
        strict.attempt_move(p(0, 0), p(0, 1)),
        Err(RejectionKind::CaptureAvailable)
    );
    assert!(strict.attempt_move(p(2, 3), p(2, 4)).is_ok());
}

#[test]
fn test_repeated_direction_rule() {
    let white = [(2, 2)];
    let black = [(2, 1), (2, 5), (0, 3)];

    let mut game = game_with(&white, &black);
    let report = applied(game.attempt_move(p(2, 2), p(2, 3)).unwrap());
    assert_eq!(report.captured(), &[p(2, 1)]);
    let mut targets = game.chain_targets().to_vec();
    targets.sort();
    assert_eq!(targets, vec![p(1, 3), p(2, 4)]);

    let config = GameConfig::default().with_forbid_repeated_direction(true);
    let mut strict = Game::from_board(board_with(&white, &black), Player::White, config);
    strict.attempt_move(p(2, 2), p(2, 3)).unwrap();
    assert_eq!(strict.chain_targets(), &[p(1, 3)]);
    assert_eq!(
        strict.attempt_recapture(p(2, 4)),
        Err(RejectionKind::RepeatedChainDirection)
    );
    assert!(strict.attempt_recapture(p(1, 3)).is_ok());
}

#[test]
fn test_turn_alternation_without_captures() {
    let mut game = game_with(&[(0, 0)], &[(4, 8)]);
    let plies = [
        (p(0, 0), p(1, 0)),
        (p(4, 8), p(3, 8)),
        (p(1, 0), p(1, 1)),
        (p(3, 8), p(3, 7)),
    ];
    let mut expected = Player::White;
    for (from, to) in plies {
        assert_eq!(game.turn(), expected);
        applied(game.attempt_move(from, to).unwrap());
        expected = expected.opponent();
    }
    assert_eq!(game.turn(), Player::White);
    assert_eq!(game.history().len(), 4);
}

#[test]
fn test_wrong_side_cannot_move() {
    let mut game = Game::new();
    assert_eq!(
        game.attempt_move(p(1, 4), p(2, 4)),
        Err(RejectionKind::WrongOwner)
    );
}

#[test]
fn test_from_board_with_finished_position() {
    let game = game_with(&[(0, 0)], &[]);
    assert_eq!(game.winner(), Some(Player::White));
    assert!(game.is_over());
}

#[test]
fn test_self_play_invariants() {
    // Play the first legal move each turn, take every chain to its end,
    // and always pick the approach run when both are offered.
    let mut game = Game::new();

    for _ in 0..200 {
        if game.is_over() {
            break;
        }
        let mover = game.turn();
        let Some(mv) = legal_moves(game.board(), mover).into_iter().next() else {
            break;
        };
        let before = total_pieces(&game);
        let turns_before = game.history().len();

        let mut outcome = game.attempt_move(mv.from, mv.to).unwrap();
        loop {
            if let Some(chain) = game.chain() {
                let visited = chain.visited();
                for (i, pos) in visited.iter().enumerate() {
                    assert!(!visited[i + 1..].contains(pos), "chain revisited {}", pos);
                }
            }
            outcome = match outcome {
                MoveOutcome::AppliedAwaitingDirection {
                    approach,
                    withdrawal,
                } => {
                    let next = game.choose_direction(CaptureDirection::Approach).unwrap();
                    for pos in &approach {
                        assert!(game.board().is_empty(*pos));
                    }
                    for pos in &withdrawal {
                        assert!(game.board().get(*pos).is_owned_by(mover.opponent()));
                    }
                    next
                }
                MoveOutcome::Applied(report) if report.chain_continues => {
                    let target = game.chain_targets()[0];
                    game.attempt_recapture(target).unwrap()
                }
                _ => break,
            };
        }

        let after = total_pieces(&game);
        assert!(after <= before);
        assert_eq!(game.history().len(), turns_before + 1);
        let played = &game.history()[turns_before];
        assert_eq!((before - after) as usize, played.captured_count());

        if !game.is_over() {
            assert_eq!(game.turn(), mover.opponent());
            assert_eq!(game.phase(), &Phase::AwaitingMove);
        }
    }
}
