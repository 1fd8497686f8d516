//! Move selection of the automated players.

use ataxx::strategy::WINNING_VALUE;
use ataxx::{AiConfig, AlphaBeta, Board, MinMax, Move, PieceColor, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Position reached after `plies` random moves from the start.
fn random_position(seed: u64, plies: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    for _ in 0..plies {
        if board.winner().is_some() {
            break;
        }
        let moves = board.legal_moves(board.whose_move());
        let next = if moves.is_empty() {
            Move::Pass
        } else {
            moves[rng.random_range(0..moves.len())]
        };
        board.make_move(next).unwrap();
    }
    board
}

#[test]
fn test_pruning_agrees_with_full_search() {
    for seed in 0..4 {
        for &plies in &[0, 3, 6] {
            let board = random_position(seed, plies);
            for depth in 1..=3 {
                assert_eq!(
                    AlphaBeta::new(depth).evaluate(&board),
                    MinMax(depth).evaluate(&board),
                    "seed {} plies {} depth {}\n{}",
                    seed,
                    plies,
                    depth,
                    board
                );
            }
        }
    }
}

#[test]
fn test_pruning_agrees_near_the_end() {
    let board = Board::from_diagram(
        "r b - X - b r\n\
         b b - X - r r\n\
         X X X X X X X\n\
         - - - X - - -\n\
         X X X X X X X\n\
         r r - X - b b\n\
         r b - X - b r",
        PieceColor::Blue,
    )
    .unwrap();
    for depth in 1..=4 {
        assert_eq!(
            AlphaBeta::new(depth).evaluate(&board),
            MinMax(depth).evaluate(&board),
            "depth {}",
            depth
        );
    }
}

#[test]
fn test_leaves_favour_side_to_move() {
    let mut board = Board::new();
    board.make_move_str("a7-a6").unwrap();
    // Blue then red move, and the leaf counts blue's material: red's best
    // reply is a quiet jump, so blue jumps too rather than extend.
    let (score, mov) = AlphaBeta::new(2).evaluate(&board);
    assert_eq!(score, -1);
    assert_eq!(mov, Some("a1-a3".parse().unwrap()));
    assert_eq!(MinMax(2).evaluate(&board), (score, mov));
}

#[test]
fn test_decided_diagram_gets_no_move() {
    let board = Board::from_diagram(
        "r - - - - - -\n\
         - - - - - - -\n\
         - - - - - - -\n\
         - - - - - - -\n\
         - - - - - - -\n\
         - - - - - - -\n\
         - - - - - - -",
        PieceColor::Blue,
    )
    .unwrap();
    assert_eq!(board.winner(), Some(PieceColor::Red));
    assert_eq!(AlphaBeta::default().find_move(&board), None);
}

#[test]
fn test_search_is_deterministic() {
    let board = random_position(5, 4);
    let mut player = AlphaBeta::from_config(&AiConfig { depth: 3, seed: 5 });
    let first = player.compute_next_move(&board);
    assert!(first.is_some());
    for _ in 0..3 {
        assert_eq!(player.compute_next_move(&board), first);
    }
    let reseeded = AlphaBeta::from_config(&AiConfig { depth: 3, seed: 77 });
    assert_eq!(reseeded.find_move(&board), first);
}

#[test]
fn test_search_leaves_board_untouched() {
    let mut board = Board::new();
    board.make_move_str("a7-b6").unwrap();
    let before = Board::copy_of(&board);
    AlphaBeta::new(3).find_move(&board);
    assert_eq!(board, before);
    assert_eq!(board.all_moves().len(), 1);
}

#[test]
fn test_pass_without_search() {
    let board = Board::from_diagram(
        "r X X - - - -\n\
         X X X - - - -\n\
         X X X - - - -\n\
         - - - - - - -\n\
         - - - - - - -\n\
         - - - - - - -\n\
         - - - - - - b",
        PieceColor::Red,
    )
    .unwrap();
    assert_eq!(AlphaBeta::new(4).find_move(&board), Some(Move::Pass));
    assert_eq!(MinMax(2).compute_next_move(&board), Some(Move::Pass));
}

#[test]
fn test_no_move_once_decided() {
    let mut board = Board::from_diagram(
        "r - - - - - -\n\
         - b - - - - -\n\
         - - - - - - -\n\
         - - - - - - -\n\
         - - - - - - -\n\
         - - - - - - -\n\
         - - - - - - -",
        PieceColor::Red,
    )
    .unwrap();
    board.make_move_str("a7-a6").unwrap();
    assert_eq!(board.winner(), Some(PieceColor::Red));
    assert_eq!(AlphaBeta::default().find_move(&board), None);
}

#[test]
fn test_prefers_fastest_win() {
    // a7 comes first in scan order but only g1 can take e3 right away.
    let board = Board::from_diagram(
        "r - - - - - -\n\
         - - - - - - -\n\
         - - - - - - -\n\
         - - - - - - -\n\
         - - - - b - -\n\
         - - - - - - -\n\
         - - - - - - r",
        PieceColor::Red,
    )
    .unwrap();
    let (score, mov) = AlphaBeta::new(4).evaluate(&board);
    let mov = mov.unwrap();
    assert_eq!(score, WINNING_VALUE + 3);
    assert_eq!(mov.from(), Some("g1".parse().unwrap()));
    let mut after = Board::copy_of(&board);
    after.make_move(mov).unwrap();
    assert_eq!(after.winner(), Some(PieceColor::Red));
}

#[test]
fn test_self_play_reaches_the_end() {
    let mut board = Board::new();
    let mut red = AlphaBeta::new(1);
    let mut blue = AlphaBeta::new(2);
    while board.winner().is_none() && board.num_moves() < 2000 {
        let player: &mut dyn Strategy = if board.whose_move() == PieceColor::Red {
            &mut red
        } else {
            &mut blue
        };
        let next = player.compute_next_move(&board).unwrap();
        assert!(board.legal_move(&next), "{} chose {}", player, next);
        board.make_move(next).unwrap();
    }
    assert!(board.winner().is_some());
}
