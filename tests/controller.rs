use taflbot::game::{ClickOutcome, Phase};
use taflbot::{GameState, Layout, MoveError, PieceKind, Position, Side, TerminalStatus, TurnController};

fn p(r: u8, c: u8) -> Position { Position::new(r, c) }

#[test]
fn clicking_an_enemy_piece_is_ignored() {
    let mut tc = TurnController::default();
    assert_eq!(tc.click(p(5, 5)), ClickOutcome::Ignored);
    assert_eq!(tc.click(p(2, 2)), ClickOutcome::Ignored);
    assert_eq!(tc.phase(), &Phase::AwaitingSelection(Side::Attacker));
}

#[test]
fn selecting_caches_legal_destinations() {
    let mut tc = TurnController::default();
    assert_eq!(tc.click(p(3, 0)), ClickOutcome::Selected(p(3, 0)));
    let (from, legal) = tc.selected().expect("selection");
    assert_eq!(from, p(3, 0));
    assert_eq!(legal, &tc.state().legal_moves(p(3, 0)).unwrap());
}

#[test]
fn clicking_the_selected_piece_deselects_it() {
    let mut tc = TurnController::default();
    tc.click(p(3, 0));
    assert_eq!(tc.click(p(3, 0)), ClickOutcome::Deselected);
    assert_eq!(tc.phase(), &Phase::AwaitingSelection(Side::Attacker));
}

#[test]
fn illegal_destination_keeps_the_selection() {
    let mut tc = TurnController::default();
    tc.click(p(3, 0));
    let out = tc.click(p(2, 2));
    assert_eq!(out, ClickOutcome::Rejected(MoveError::IllegalDestination { from: p(3, 0), to: p(2, 2) }));
    assert_eq!(tc.selected().map(|(f, _)| f), Some(p(3, 0)));
    assert_eq!(tc.state().move_count(), 0);
}

#[test]
fn clicking_another_piece_does_not_switch_selection() {
    let mut tc = TurnController::default();
    tc.click(p(3, 0));
    assert_eq!(tc.click(p(4, 0)), ClickOutcome::Ignored);
    assert_eq!(tc.selected().map(|(f, _)| f), Some(p(3, 0)));
    assert!(tc.select(p(4, 0)).is_err());
}

#[test]
fn committing_a_move_hands_the_turn_over() {
    let mut tc = TurnController::default();
    tc.click(p(3, 0));
    match tc.click(p(1, 0)) {
        ClickOutcome::Moved(out) => {
            assert_eq!(out.side, Side::Attacker);
            assert_eq!(out.status, TerminalStatus::InProgress);
        }
        other => panic!("expected a move, got {other:?}"),
    }
    assert_eq!(tc.phase(), &Phase::AwaitingSelection(Side::Defender));
    assert!(tc.state().piece_at(p(1, 0)).is_some());
    // Attackers can no longer be selected.
    assert_eq!(tc.click(p(4, 0)), ClickOutcome::Ignored);
}

#[test]
fn game_over_accepts_only_a_new_game() {
    let pieces = [(p(4, 0), PieceKind::King), (p(8, 8), PieceKind::Attacker)];
    let start = GameState::from_pieces(Layout::standard(), &pieces, Side::Defender).unwrap();
    let mut tc = TurnController::new(start);
    tc.click(p(4, 0));
    assert!(matches!(tc.click(p(0, 0)), ClickOutcome::Moved(_)));
    assert_eq!(tc.phase(), &Phase::GameOver(TerminalStatus::DefenderWinEscape));
    assert_eq!(tc.click(p(8, 8)), ClickOutcome::Ignored);
    assert_eq!(tc.submit(p(1, 0)), Err(MoveError::GameOver));

    tc.new_game();
    assert_eq!(tc.phase(), &Phase::AwaitingSelection(Side::Defender));
    assert_eq!(tc.state().king_position(), Some(p(4, 0)));
    assert_eq!(tc.state().move_count(), 0);
}
