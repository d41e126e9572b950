use super::*;

#[test]
fn test_square_coord_orientation() {
    // Row 0 is rank 8, row 7 is rank 1
    assert_eq!(Square::new(0, 0).coord(), "a8");
    assert_eq!(Square::new(7, 7).coord(), "h1");
    assert_eq!(Square::new(6, 4).coord(), "e2");
}

#[test]
fn test_square_from_coord() {
    assert_eq!(Square::from_coord("e2"), Some(Square::new(6, 4)));
    assert_eq!(Square::from_coord("a8"), Some(Square::new(0, 0)));
    assert_eq!(Square::from_coord("i1"), None);
    assert_eq!(Square::from_coord("a9"), None);
    assert_eq!(Square::from_coord("e"), None);
}

#[test]
fn test_square_offset_stays_on_board() {
    let a1 = Square::from_coord("a1").unwrap();
    assert_eq!(a1.offset((1, 0), 1), None);
    assert_eq!(a1.offset((0, -1), 1), None);
    assert_eq!(a1.offset((-1, 1), 2), Square::from_coord("c3"));
}

#[test]
fn test_square_index_roundtrip() {
    for sq in Square::all() {
        assert_eq!(Square::from_index(sq.idx()), sq);
    }
    assert_eq!(Square::all().count(), 64);
}

#[test]
fn test_color_geometry() {
    assert_eq!(Color::White.forward(), -1);
    assert_eq!(Color::Black.forward(), 1);
    assert_eq!(Color::White.home_row(), 7);
    assert_eq!(Color::Black.promotion_row(), 7);
    assert_eq!(Color::White.other(), Color::Black);
}

#[test]
fn test_piece_symbols() {
    assert_eq!(Piece::new(Color::White, PieceKind::Knight).symbol(), 'N');
    assert_eq!(Piece::new(Color::Black, PieceKind::Queen).symbol(), 'q');
    assert_eq!(PieceKind::from_letter('k'), Some(PieceKind::King));
    assert_eq!(PieceKind::from_letter('x'), None);
}
