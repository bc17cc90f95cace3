use pretty_assertions::assert_eq;
use xqbot::board::{apply_move, Board, Color, PieceKind, Position, Square};
use xqbot::rules::make_move;

fn sq(x: i8, y: i8) -> Square { Square::new(x, y) }

#[test]
fn quiet_move_keeps_identity_and_leaves_input_untouched() {
    let b = Board::startpos();
    let before = b.clone();
    let cannon = b.piece_at(sq(1, 7)).unwrap();
    let after = apply_move(&make_move(&b, cannon, sq(4, 7)), &b);

    assert_eq!(b, before);
    assert!(after.piece_at(sq(1, 7)).is_none());
    let moved = after.piece_at(sq(4, 7)).unwrap();
    assert_eq!(moved.id, cannon.id);
    assert_eq!(moved.square, sq(4, 7));
    assert_eq!(after.piece(cannon.id).map(|p| p.square), Some(sq(4, 7)));
    assert_eq!(after.len(), 32);
}

#[test]
fn capture_removes_the_victim() {
    let b = Board::startpos();
    let cannon = b.piece_at(sq(1, 7)).unwrap();
    let horse = b.piece_at(sq(1, 0)).unwrap();
    let after = b.apply(&make_move(&b, cannon, sq(1, 0)));

    assert_eq!(after.len(), 31);
    assert!(after.piece(horse.id).is_none());
    assert_eq!(after.piece_at(sq(1, 0)).map(|p| (p.id, p.kind, p.color)), Some((cannon.id, PieceKind::Cannon, Color::Red)));
    assert_eq!(after.pieces_of(Color::Black).count(), 15);
    assert_eq!(b.len(), 32);
}

#[test]
fn identities_survive_a_game() {
    let pos = Position::set_from_start_and_moves(&[
        (sq(7, 7), sq(4, 7)),
        (sq(7, 0), sq(6, 2)),
        (sq(7, 9), sq(6, 7)),
        (sq(8, 0), sq(7, 0)),
    ]).unwrap();
    let start = Board::startpos();
    let mut ids: Vec<u8> = pos.board().pieces().map(|p| p.id.0).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..32).collect::<Vec<u8>>());
    for p in pos.board().pieces() {
        let orig = start.piece(p.id).unwrap();
        assert_eq!((orig.kind, orig.color), (p.kind, p.color));
    }
}

#[test]
fn display_draws_the_river() {
    let text = Board::startpos().to_string();
    assert_eq!(text.lines().count(), 12);
    assert!(text.contains('~'));
    assert!(text.lines().nth(1).unwrap().contains('g'));
    assert!(text.lines().last().unwrap().contains('G'));
}

#[test]
fn stale_move_leaves_board_unchanged() {
    let b = Board::startpos();
    let cannon = b.piece_at(sq(1, 7)).unwrap();
    let after = b.apply(&make_move(&b, cannon, sq(4, 7)));

    // Built on the old board; the cannon has since left (1,7).
    let stale = make_move(&b, cannon, sq(2, 7));
    let again = apply_move(&stale, &after);
    assert_eq!(again, after);
    let copies: Vec<Square> = again.pieces().filter(|p| p.id == cannon.id).map(|p| p.square).collect();
    assert_eq!(copies, vec![sq(4, 7)]);
}

#[test]
fn quiet_move_onto_an_occupied_square_is_refused() {
    let b = Board::startpos();
    let cannon = b.piece_at(sq(1, 7)).unwrap();
    let quiet = make_move(&b, cannon, sq(1, 4));
    // A piece arrives on the target after the move was built.
    let mut crowded = b.clone();
    crowded.place(PieceKind::Soldier, Color::Black, sq(1, 4)).unwrap();
    assert_eq!(crowded.apply(&quiet), crowded);

    let capture = make_move(&b, cannon, sq(1, 0));
    let horse_gone = { let mut c = b.clone(); c.remove(sq(1, 0)); c };
    assert_eq!(horse_gone.apply(&capture), horse_gone);
}
