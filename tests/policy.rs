use rand::rngs::SmallRng;
use rand::SeedableRng;
use xqbot::board::{Board, Color, PieceKind, Square};
use xqbot::rules::legal_moves;
use xqbot::search::{find_best_move_with_rng, Difficulty};

fn lone_general() -> Board {
    // (3,8) is covered by the chariot, so (4,7) is the only move.
    Board::from_pieces(&[
        (PieceKind::General, Color::Red, (3, 7)),
        (PieceKind::Chariot, Color::Black, (8, 8)),
        (PieceKind::General, Color::Black, (5, 0)),
    ]).unwrap()
}

#[test]
fn random_tier_plays_the_only_move() {
    let b = lone_general();
    for seed in 0..10 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let res = find_best_move_with_rng(&b, Color::Red, Difficulty::Novice, &mut rng);
        assert_eq!(res.best_move.map(|m| m.to), Some(Square::new(4, 7)), "seed {seed}");
    }
}

#[test]
fn random_tier_is_reproducible_and_legal() {
    let b = Board::startpos();
    let legal = legal_moves(&b, Color::Black);
    let pick = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        find_best_move_with_rng(&b, Color::Black, Difficulty::Novice, &mut rng).best_move.unwrap()
    };
    assert_eq!(pick(11), pick(11));
    for seed in 0..20 {
        assert!(legal.contains(&pick(seed)));
    }
}

#[test]
fn greedy_tier_takes_the_most_valuable_piece() {
    let b = Board::from_pieces(&[
        (PieceKind::Chariot, Color::Red, (0, 5)),
        (PieceKind::Horse, Color::Black, (0, 2)),
        (PieceKind::Soldier, Color::Black, (6, 5)),
        (PieceKind::General, Color::Red, (3, 9)),
        (PieceKind::General, Color::Black, (5, 0)),
    ]).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    let res = find_best_move_with_rng(&b, Color::Red, Difficulty::Beginner, &mut rng);
    let mv = res.best_move.unwrap();
    assert_eq!(mv.to, Square::new(0, 2));
    assert_eq!(mv.captured.map(|c| c.kind), Some(PieceKind::Horse));
}

#[test]
fn greedy_tier_without_captures_still_moves() {
    let mut rng = SmallRng::seed_from_u64(5);
    let res = find_best_move_with_rng(&lone_general(), Color::Red, Difficulty::Beginner, &mut rng);
    assert_eq!(res.best_move.map(|m| m.to), Some(Square::new(4, 7)));
}
