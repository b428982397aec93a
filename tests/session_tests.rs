//! End-to-end session tests through the public API.
//!
//! These drive whole games (automated and human seats) and check the
//! bookkeeping that ties scores, stones, board and history together.

use std::time::Duration;

use proptest::prelude::*;

use kivi::{
    Command, CommandOutcome, GameConfig, GameSession, IgnoreReason, PlayerConfig, PlayerId,
    SessionView, TurnPhase, SEAT_COLORS,
};

fn cpu_game(players: usize, seed: u64) -> GameSession {
    let mut config = GameConfig::new().with_seed(seed);
    for seat in 0..players {
        config = config.with_player(PlayerConfig::cpu(format!("CPU {}", seat + 1), SEAT_COLORS[seat]));
    }
    GameSession::new(config)
}

/// Scores, stones, board and history must all agree.
fn assert_bookkeeping(session: &GameSession, stones_per_player: u32) {
    let mut total_placed = 0;
    for (id, player) in session.players() {
        let placed: Vec<_> = session
            .history()
            .iter()
            .filter(|r| r.player == id)
            .filter_map(|r| r.placed)
            .collect();
        let points: u32 = placed.iter().map(|p| p.points).sum();

        assert_eq!(player.score, points, "{} score", id);
        assert_eq!(player.stones_left + placed.len() as u32, stones_per_player, "{} stones", id);
        total_placed += placed.len();
    }
    assert_eq!(session.board().occupied_count(), total_placed);
}

#[test]
fn test_automated_games_finish() {
    for players in 1..=4 {
        let mut session = cpu_game(players, 100 + players as u64);
        session.run_automated_turns(10_000);

        assert!(session.is_game_over(), "{} players", players);
        assert_eq!(session.phase(), TurnPhase::GameOver);
        assert!(!session.needs_automated_move());
        assert_bookkeeping(&session, 10);

        let out_of_stones = session.players().any(|(_, p)| p.stones_left == 0);
        assert!(out_of_stones || session.board().is_full());
    }
}

#[test]
fn test_winner_has_top_score() {
    let mut session = cpu_game(3, 9);
    session.run_automated_turns(10_000);

    let outcome = session.outcome().unwrap().clone();
    let best = outcome.final_scores.iter().map(|(_, s)| *s).max().unwrap();
    assert_eq!(outcome.final_scores[outcome.winner.index()].1, best);
    // Earliest seat wins a tie.
    let first_best = outcome.final_scores.iter().position(|(_, s)| *s == best).unwrap();
    assert_eq!(outcome.winner.index(), first_best);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = cpu_game(2, 77);
    let mut b = cpu_game(2, 77);
    a.run_automated_turns(10_000);
    b.run_automated_turns(10_000);

    assert_eq!(a.history(), b.history());
    assert_eq!(a.outcome(), b.outcome());
}

#[test]
fn test_paused_session_plays_nothing() {
    let mut session = cpu_game(2, 4);
    assert_eq!(session.pause(), CommandOutcome::Applied);

    assert!(!session.needs_automated_move());
    assert_eq!(session.run_automated_turns(100), 0);
    assert_eq!(
        session.play_automated_turn(),
        CommandOutcome::Ignored(IgnoreReason::Paused)
    );
    assert_eq!(session.turn_number(), 1);

    session.resume();
    assert_eq!(session.run_automated_turns(1), 1);
    assert_eq!(session.turn_number(), 2);
}

#[test]
fn test_reroll_keeps_selected_die() {
    let config = GameConfig::new()
        .with_player(PlayerConfig::human("Ada", SEAT_COLORS[0]))
        .with_seed(2024);
    let mut session = GameSession::new(config);

    session.roll_dice();
    let kept = session.dice().die(3).face;
    session.toggle_die(3);
    session.roll_dice();

    assert_eq!(session.dice().die(3).face, kept);
    assert!(session.dice().die(3).selected);
    assert_eq!(session.roll_count(), 2);
}

#[test]
fn test_toggle_and_roll_ignored_while_paused() {
    let config = GameConfig::new()
        .with_player(PlayerConfig::human("Ada", SEAT_COLORS[0]))
        .with_seed(5);
    let mut session = GameSession::new(config);
    session.roll_dice();
    session.pause();

    let before = session.view();
    assert_eq!(session.toggle_die(0), CommandOutcome::Ignored(IgnoreReason::Paused));
    assert_eq!(session.roll_dice(), CommandOutcome::Ignored(IgnoreReason::Paused));
    assert_eq!(session.view(), before);
}

#[test]
fn test_human_timeout_hands_over_to_cpu() {
    let config = GameConfig::new()
        .with_player(PlayerConfig::human("Ada", SEAT_COLORS[0]))
        .with_player(PlayerConfig::cpu("CPU", SEAT_COLORS[1]))
        .with_turn_time(5)
        .with_seed(12);
    let mut session = GameSession::new(config);

    for _ in 0..49 {
        session.apply(Command::Tick(Duration::from_millis(100))).unwrap();
    }
    assert_eq!(session.current_player(), PlayerId::new(0));
    assert_eq!(session.time_left().seconds, 0);
    assert_eq!(session.time_left().tenths, 1);

    session.apply(Command::Tick(Duration::from_millis(100))).unwrap();
    assert_eq!(session.current_player(), PlayerId::new(1));
    assert!(session.needs_automated_move());

    assert_eq!(session.run_automated_turns(10), 1);
    assert_eq!(session.current_player(), PlayerId::new(0));
    assert_eq!(session.history().len(), 2);
    assert!(session.history()[0].timed_out);
    assert!(session.history()[0].placed.is_none());
}

#[test]
fn test_view_round_trips_through_json() {
    let mut session = cpu_game(2, 31);
    session.run_automated_turns(5);

    let view = session.view();
    let json = serde_json::to_string(&view).unwrap();
    let back: SessionView = serde_json::from_str(&json).unwrap();
    assert_eq!(view, back);
}

#[test]
#[should_panic(expected = "Must have at least 1 player")]
fn test_no_players_panics() {
    GameSession::new(GameConfig::new());
}

#[test]
#[should_panic(expected = "At most 4 players supported")]
fn test_too_many_players_panics() {
    let mut config = GameConfig::new();
    for _ in 0..5 {
        config = config.with_player(PlayerConfig::cpu("CPU", SEAT_COLORS[0]));
    }
    GameSession::new(config);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_automated_bookkeeping(seed in any::<u64>(), players in 1usize..=4, stones in 1u32..=12) {
        let mut config = GameConfig::new().with_seed(seed).with_stones_per_player(stones);
        for seat in 0..players {
            config = config.with_player(PlayerConfig::cpu("CPU", SEAT_COLORS[seat]));
        }
        let mut session = GameSession::new(config);
        session.run_automated_turns(10_000);

        prop_assert!(session.is_game_over());
        assert_bookkeeping(&session, stones);
        for record in session.history() {
            if let Some(placed) = record.placed {
                prop_assert_eq!(placed.points, placed.category.points());
                prop_assert!(session.board().is_occupied(placed.square));
            }
        }
    }
}
