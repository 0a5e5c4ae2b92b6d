use rules_chess::{
    is_legal_move, legal_destinations, status, AlphaBeta, Color, Engine, MaterialCount, Move,
    MoveError, Outcome, Piece, PieceKind, Position, SearchConfig, Square, Status,
};

fn sq(row: usize, col: usize) -> Square { Square::new(row, col).unwrap() }

fn mv(from: (usize, usize), to: (usize, usize)) -> Move { Move::new(sq(from.0, from.1), sq(to.0, to.1)) }

#[test]
fn king_pawn_opening() {
    let pos = Position::initial();
    let e4 = mv((6, 4), (4, 4));
    assert!(is_legal_move(&pos, e4));
    assert!(legal_destinations(&pos, sq(6, 4)).contains(&sq(4, 4)));

    let next = pos.play(e4).unwrap();
    assert_eq!(next[sq(4, 4)].map(|p| (p.color, p.kind)), Some((Color::White, PieceKind::Pawn)));
    assert!(next[sq(6, 4)].is_none());
    assert_eq!(next.get_side_to_move(), Color::Black);
    assert_eq!(status(&next), Status::Ongoing);
}

#[test]
fn queen_mates_on_f2() {
    let moves = [
        mv((6, 4), (5, 4)), // e3
        mv((1, 3), (3, 3)), // d5
        mv((7, 5), (4, 2)), // Bc4
        mv((0, 6), (2, 5)), // Nf6
        mv((4, 2), (5, 1)), // Bb3
        mv((1, 4), (3, 4)), // e5
        mv((6, 0), (5, 0)), // a3
        mv((0, 5), (3, 2)), // Bc5
        mv((5, 0), (4, 0)), // a4
        mv((2, 5), (4, 6)), // Ng4
        mv((4, 0), (3, 0)), // a5
        mv((0, 3), (4, 7)), // Qh4
        mv((7, 1), (5, 2)), // Nc3
    ];
    let mut pos = Position::initial();
    for m in moves {
        pos = pos.play(m).unwrap_or_else(|e| panic!("{} rejected: {}", m, e));
        assert!(!status(&pos).is_terminal(), "game ended early after {}", m);
    }

    let mate = mv((4, 7), (6, 5)); // Qxf2#
    let pos = pos.play(mate).unwrap();
    assert_eq!(status(&pos), Status::Checkmate);
    assert_eq!(pos.outcome(), Some(Outcome::Checkmate { winner: Color::Black }));
    assert_eq!(pos.captured_by(Color::Black).last().map(|p| p.kind), Some(PieceKind::Pawn));
    assert!(pos.play(mv((6, 3), (5, 3))).is_err());
}

#[test]
fn cornered_king_is_stalemated() {
    let pos = Position::from_pieces(
        [
            Piece::new(Color::Black, PieceKind::King, 0, 0),
            Piece::new(Color::White, PieceKind::Queen, 3, 1),
            Piece::new(Color::White, PieceKind::King, 7, 7),
        ],
        Color::White,
    );
    assert_eq!(status(&pos), Status::Ongoing);

    let pos = pos.play(mv((3, 1), (2, 1))).unwrap();
    assert_eq!(status(&pos), Status::Stalemate);
    assert_eq!(pos.outcome(), Some(Outcome::Stalemate));
    assert_eq!(pos.outcome().and_then(Outcome::winner), None);
    assert!(legal_destinations(&pos, sq(0, 0)).is_empty());
}

#[test]
fn search_prefers_the_capture() {
    let pos = Position::from_pieces(
        [
            Piece::new(Color::Black, PieceKind::King, 0, 0),
            Piece::new(Color::Black, PieceKind::Queen, 3, 3),
            Piece::new(Color::White, PieceKind::Bishop, 5, 5),
            Piece::new(Color::White, PieceKind::King, 7, 7),
        ],
        Color::Black,
    );
    for seed in 0..5 {
        let config = SearchConfig { depth: 1, seed: Some(seed), log_level: 0 };
        let result = AlphaBeta::new(MaterialCount::default(), config).search(&pos, 1);
        assert_eq!(result.best_move, Some(mv((3, 3), (5, 5))));
        assert_eq!(result.score, 929);
    }
}

#[test]
fn pawn_promotes_to_a_queen() {
    let pos = Position::from_pieces(
        [
            Piece::new(Color::White, PieceKind::Pawn, 1, 3),
            Piece::new(Color::White, PieceKind::King, 7, 4),
            Piece::new(Color::Black, PieceKind::King, 2, 7),
        ],
        Color::White,
    );
    let push = mv((1, 3), (0, 3));
    assert!(pos.is_pawn_promotion(push));
    assert!(pos.play(push).is_err());

    let next = pos
        .play(Move::with_promotion(sq(1, 3), sq(0, 3), PieceKind::Queen))
        .unwrap();
    let queen = next[sq(0, 3)].unwrap();
    assert_eq!(queen.kind, PieceKind::Queen);
    assert_eq!(queen.color, Color::White);
    assert!(queen.promoted);
    assert!(next[sq(1, 3)].is_none());
}

#[test]
fn off_board_requests_are_refused_not_panicked_on() {
    let pos = Position::initial();
    let off = Move::new(sq(6, 4), Square { row: 9, col: 4 });
    assert!(!is_legal_move(&pos, off));
    assert!(legal_destinations(&pos, Square { row: 8, col: 0 }).is_empty());
    assert_eq!(pos.play(off), Err(MoveError::OffBoard(9, 4)));

    let from_json = serde_json::from_str::<Move>(
        r#"{"from":{"row":6,"col":4},"to":{"row":12,"col":4}}"#,
    );
    assert!(from_json.is_err());
}
