use super::*;

fn sq(rank: u8, file: u8) -> Square {
    Square::new(rank, file)
}

#[test]
fn test_empty_sentinel_has_nothing() {
    let pos = Position::setup();
    let empty = Piece::Empty;
    assert!(empty.is_empty());
    assert_eq!(empty.color(), None);
    assert_eq!(empty.kind(), None);
    assert_eq!(empty.value(), 0.0);
    assert!(empty.pseudo_legal_moves(&pos).is_empty());
    assert!(empty.legal_moves(&pos).is_empty());
    assert!(empty.attacks(&pos).is_empty());
    assert_eq!(Piece::default(), Piece::Empty);
}

#[test]
fn test_values_and_symbols() {
    let at = sq(0, 0);
    assert_eq!(Piece::new(PieceKind::Pawn, Color::White, at).value(), 1.0);
    assert_eq!(Piece::new(PieceKind::Knight, Color::White, at).value(), 3.0);
    assert_eq!(Piece::new(PieceKind::Bishop, Color::Black, at).value(), 3.0);
    assert_eq!(Piece::new(PieceKind::Rook, Color::Black, at).value(), 5.0);
    assert_eq!(Piece::new(PieceKind::Queen, Color::White, at).value(), 9.0);
    assert_eq!(Piece::new(PieceKind::King, Color::White, at).value(), 0.0);

    assert_eq!(Piece::new(PieceKind::King, Color::White, at).symbol(), '♔');
    assert_eq!(Piece::new(PieceKind::King, Color::Black, at).symbol(), '♚');
    assert_eq!(Piece::Empty.symbol(), '·');
    assert_eq!(PieceKind::Queen.symbol(Color::Black), '♛');
    assert_eq!(PieceKind::Pawn.symbol(Color::White), '♙');
}

#[test]
fn test_forward_dir_only_for_pawns() {
    let at = sq(3, 3);
    assert_eq!(Piece::new(PieceKind::Pawn, Color::Black, at).forward_dir(), Some(1));
    assert_eq!(Piece::new(PieceKind::Pawn, Color::White, at).forward_dir(), Some(-1));
    assert_eq!(Piece::new(PieceKind::Rook, Color::White, at).forward_dir(), None);
}

#[test]
fn test_promote_in_place() {
    let mut pawn = Piece::new(PieceKind::Pawn, Color::Black, sq(7, 2));
    pawn.promote();
    assert!(pawn.is(PieceKind::Queen, Color::Black));
    assert_eq!(pawn.square(), Some(sq(7, 2)));

    let mut other = Piece::new(PieceKind::Pawn, Color::White, sq(0, 2));
    other.promote_to(PieceKind::Knight);
    assert!(other.is(PieceKind::Knight, Color::White));

    // only pawns promote
    let mut rook = Piece::new(PieceKind::Rook, Color::White, sq(0, 0));
    rook.promote();
    assert!(rook.is(PieceKind::Rook, Color::White));
}

#[test]
fn test_pinned_piece_legal_moves_stay_on_the_pin() {
    let mut pos = Position::empty();
    pos.place(PieceKind::King, Color::White, sq(7, 4))
        .place(PieceKind::Bishop, Color::White, sq(6, 4))
        .place(PieceKind::Rook, Color::Black, sq(0, 4));

    let bishop = pos.get(sq(6, 4));
    assert!(!bishop.pseudo_legal_moves(&pos).is_empty());
    assert!(bishop.legal_moves(&pos).is_empty());
}

#[test]
fn test_king_attacks_exclude_castling() {
    let mut pos = Position::setup();
    pos.set(sq(7, 5), Piece::Empty);
    pos.set(sq(7, 6), Piece::Empty);
    let king = pos.get(sq(7, 4));
    assert!(king.pseudo_legal_moves(&pos).contains(&sq(7, 6)));
    assert!(!king.attacks(&pos).contains(&sq(7, 6)));
}
