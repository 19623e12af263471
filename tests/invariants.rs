use rand::rngs::SmallRng;
use rand::SeedableRng;
use taflbot::policy::select_random_move;
use taflbot::{GameState, Layout, PieceKind, PolicyError, Position, SetupError, Side, TerminalStatus};

fn p(r: u8, c: u8) -> Position { Position::new(r, c) }

#[test]
fn setup_without_a_king_is_rejected() {
    let pieces = [(p(1, 1), PieceKind::Attacker), (p(2, 2), PieceKind::Defender)];
    let err = GameState::from_pieces(Layout::standard(), &pieces, Side::Attacker).unwrap_err();
    assert_eq!(err, SetupError::KingCount(0));
}

#[test]
fn setup_with_two_kings_is_rejected() {
    let pieces = [(p(5, 5), PieceKind::King), (p(2, 2), PieceKind::King)];
    let err = GameState::from_pieces(Layout::standard(), &pieces, Side::Attacker).unwrap_err();
    assert_eq!(err, SetupError::KingCount(2));
}

#[test]
fn setup_with_two_pieces_on_one_square_is_rejected() {
    let pieces = [(p(5, 5), PieceKind::King), (p(1, 1), PieceKind::Attacker), (p(1, 1), PieceKind::Defender)];
    let err = GameState::from_pieces(Layout::standard(), &pieces, Side::Attacker).unwrap_err();
    assert_eq!(err, SetupError::DuplicateSquare(p(1, 1)));
}

#[test]
fn setup_off_the_board_is_rejected() {
    let pieces = [(p(5, 5), PieceKind::King), (p(11, 0), PieceKind::Attacker)];
    let err = GameState::from_pieces(Layout::standard(), &pieces, Side::Attacker).unwrap_err();
    assert_eq!(err, SetupError::OutOfBounds(p(11, 0)));
}

#[test]
fn layout_without_a_throne_is_rejected() {
    let err = Layout::parse(&["x...x", ".....", "..d..", ".....", "x...x"]).unwrap_err();
    assert_eq!(err, SetupError::KingCount(0));
}

#[test]
fn new_uses_the_layout_opening_and_move_ceiling() {
    let layout = Layout::parse(&["x.a.x", ".....", "a.c.a", ".....", "x.a.x"]).unwrap();
    let s = GameState::new(layout, 7).unwrap();
    assert_eq!(s.max_moves(), 7);
    assert_eq!(s.turn(), Side::Attacker);
    assert_eq!(s.status(), TerminalStatus::InProgress);
    assert_eq!(s.piece_count(Side::Attacker), 4);
    assert_eq!(s.king_position(), Some(p(2, 2)));
    s.check_invariants().unwrap();

    let standard = GameState::new(Layout::standard(), 1000).unwrap();
    assert_eq!(standard.snapshot(), GameState::new_game().snapshot());
}

#[test]
fn random_playouts_preserve_board_invariants() {
    for seed in 0..12u64 {
        let mut s = GameState::new_game().with_max_moves(200);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut total = s.all_pieces().count();
        while !s.is_over() {
            let side = s.turn();
            let mv = match select_random_move(&s, &mut rng) {
                Ok(mv) => mv,
                Err(e) => panic!("seed {seed}: {e}"),
            };
            let out = s.apply_move(mv.from, mv.to).unwrap();
            assert_eq!(out.side, side);
            for pos in &out.captured {
                assert!(s.is_empty(*pos), "captured square {pos} still occupied");
            }
            let now = s.all_pieces().count();
            assert_eq!(now + out.captured.len(), total);
            assert!(now <= total);
            total = now;
            s.check_invariants().unwrap();
            assert!(s.piece_at(mv.to).map_or(false, |p| p.side() == side));
        }
        assert_eq!(select_random_move(&s, &mut rng), Err(PolicyError::GameOver));
    }
}

#[test]
fn only_enemy_pieces_are_ever_captured() {
    for seed in 100..110u64 {
        let mut s = GameState::new_game().with_max_moves(150);
        let mut rng = SmallRng::seed_from_u64(seed);
        while !s.is_over() {
            let mover = s.turn();
            let before = s.clone();
            let mv = select_random_move(&s, &mut rng).unwrap();
            let out = s.apply_move(mv.from, mv.to).unwrap();
            for pos in &out.captured {
                let victim = before.piece_at(*pos).unwrap();
                assert_eq!(victim.side(), mover.opposite());
            }
            if out.king_captured { assert_eq!(mover, Side::Attacker); }
        }
    }
}
