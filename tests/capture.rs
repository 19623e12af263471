use pretty_assertions::assert_eq;
use taflbot::game::capture::custodian_captures;
use taflbot::{GameState, Layout, PieceKind, Position, Side, TerminalStatus};

fn p(r: u8, c: u8) -> Position { Position::new(r, c) }

fn state(pieces: &[(Position, PieceKind)], turn: Side) -> GameState {
    GameState::from_pieces(Layout::standard(), pieces, turn).expect("valid position")
}

use PieceKind::{Attacker as A, Defender as D, King as K};

#[test]
fn sandwiched_defender_is_removed() {
    let mut s = state(&[(p(2, 3), A), (p(2, 4), D), (p(2, 8), A), (p(5, 5), K)], Side::Attacker);
    let out = s.apply_move(p(2, 8), p(2, 5)).unwrap();
    assert_eq!(out.captured, vec![p(2, 4)]);
    assert!(s.is_empty(p(2, 4)));
    assert_eq!(s.piece_count(Side::Defender), 1);
    assert_eq!(out.status, TerminalStatus::InProgress);
}

#[test]
fn no_capture_without_an_anvil() {
    let mut s = state(&[(p(2, 4), D), (p(2, 8), A), (p(5, 5), K)], Side::Attacker);
    let out = s.apply_move(p(2, 8), p(2, 5)).unwrap();
    assert!(out.captured.is_empty());
    assert!(s.piece_at(p(2, 4)).is_some());
}

#[test]
fn corner_is_hostile_territory() {
    let mut s = state(&[(p(0, 1), D), (p(3, 2), A), (p(5, 5), K)], Side::Attacker);
    let out = s.apply_move(p(3, 2), p(0, 2)).unwrap();
    assert_eq!(out.captured, vec![p(0, 1)]);
}

#[test]
fn empty_throne_is_hostile_territory() {
    let mut s = state(&[(p(5, 4), D), (p(8, 3), A), (p(8, 8), K)], Side::Attacker);
    let out = s.apply_move(p(8, 3), p(5, 3)).unwrap();
    assert_eq!(out.captured, vec![p(5, 4)]);
}

#[test]
fn occupied_throne_does_not_help_the_attackers() {
    let mut s = state(&[(p(5, 4), D), (p(8, 3), A), (p(5, 5), K)], Side::Attacker);
    let out = s.apply_move(p(8, 3), p(5, 3)).unwrap();
    assert!(out.captured.is_empty());
    assert!(s.piece_at(p(5, 4)).is_some());
}

#[test]
fn king_serves_as_anvil_for_defenders() {
    let mut s = state(&[(p(5, 5), K), (p(5, 6), A), (p(2, 7), D), (p(0, 3), A)], Side::Defender);
    let out = s.apply_move(p(2, 7), p(5, 7)).unwrap();
    assert_eq!(out.captured, vec![p(5, 6)]);
    assert_eq!(s.piece_count(Side::Attacker), 1);
}

#[test]
fn king_is_never_taken_by_a_two_sided_sandwich() {
    let mut s = state(&[(p(2, 3), A), (p(2, 4), K), (p(2, 8), A)], Side::Attacker);
    let out = s.apply_move(p(2, 8), p(2, 5)).unwrap();
    assert!(out.captured.is_empty());
    assert!(!out.king_captured);
    assert_eq!(s.king_position(), Some(p(2, 4)));
}

#[test]
fn movers_own_pieces_are_never_captured() {
    // Attacker steps between two defenders.
    let mut s = state(&[(p(2, 3), D), (p(2, 5), D), (p(6, 4), A), (p(8, 8), K)], Side::Attacker);
    let out = s.apply_move(p(6, 4), p(2, 4)).unwrap();
    assert!(out.captured.is_empty());
    assert_eq!(s.piece_count(Side::Attacker), 1);
}

#[test]
fn one_move_can_capture_several_pieces() {
    let mut s = state(
        &[(p(3, 4), D), (p(4, 3), D), (p(2, 4), A), (p(4, 2), A), (p(4, 8), A), (p(8, 8), K)],
        Side::Attacker,
    );
    let mut out = s.apply_move(p(4, 8), p(4, 4)).unwrap();
    out.captured.sort();
    assert_eq!(out.captured, vec![p(3, 4), p(4, 3)]);
    assert_eq!(s.piece_count(Side::Defender), 1);
}

#[test]
fn custodian_captures_only_reports_enemies() {
    let s = state(&[(p(2, 3), A), (p(2, 4), D), (p(2, 5), A), (p(5, 5), K)], Side::Attacker);
    assert_eq!(custodian_captures(&s, p(2, 5), Side::Attacker), vec![p(2, 4)]);
    assert!(custodian_captures(&s, p(2, 4), Side::Defender).is_empty());
}
