//! Turn operations on `GameSession`.
//!
//! ```text
//! TurnStart -> AwaitingRoll -> AwaitingPlacement -> AwaitingEndTurn -> TurnEnd
//!     ^                                                                  |
//!     +-------------------------- next seat -----------------------------+
//!                                     (or GameOver)
//! ```
//!
//! UI commands (`roll_dice`, `toggle_die`, `place_attempt`, `end_turn`) act
//! only for human seats; automated seats are played by
//! `play_automated_turn`. Every command is a no-op while paused or after the
//! game has ended. The clock's `tick` can end any turn.
//!
//! Operations take `&mut self`, so a turn can never be ended re-entrantly:
//! callers sharing a session across threads serialise through one owner or a
//! mutex, and the clock's ticks go through the same path as every other command.

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::board::{Board, SquarePos};
use crate::core::{
    Command, CommandOutcome, GameConfig, GameOutcome, GameRng, GameSession, IgnoreReason,
    PlacedStone, Player, PlayerId, PlayerMap, TurnRecord,
};
use crate::cpu::{FirstMatch, MovePolicy};
use crate::dice::{is_valid_placement, DiceSet, DICE_COUNT};

use super::clock::TurnClock;
use super::error::PlaceError;

impl GameSession {
    /// Start a game: every square empty, every player at a full stone pool
    /// and zero score, first seat to move.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (see `GameConfig::validate`).
    pub fn new(config: GameConfig) -> Self {
        config.validate();

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let players = PlayerMap::new(config.player_count(), |id| {
            Player::from_config(&config.players[id.index()], config.stones_per_player)
        });

        let mut session = Self {
            players,
            current: PlayerId::new(0),
            board: Board::new(),
            dice: DiceSet::new(),
            pending: None,
            clock: TurnClock::new(config.turn_budget()),
            paused: false,
            turn_number: 0,
            history: im::Vector::new(),
            outcome: None,
            rng,
        };

        info!(
            players = session.player_count(),
            seed = session.seed(),
            turn_seconds = config.turn_time_seconds,
            "game started"
        );
        session.start_turn();
        session
    }

    /// Dispatch one command. This is the single entry point a UI loop or
    /// command queue needs.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, PlaceError> {
        match command {
            Command::Roll => Ok(self.roll_dice()),
            Command::ToggleDie(index) => Ok(self.toggle_die(index)),
            Command::Place(pos) => self.place_attempt(pos),
            Command::EndTurn => Ok(self.end_turn()),
            Command::Pause => Ok(self.pause()),
            Command::Resume => Ok(self.resume()),
            Command::Tick(elapsed) => Ok(self.tick(elapsed)),
        }
    }

    // === UI commands ===

    /// Roll the dice for the current human seat.
    #[instrument(level = "debug", skip(self))]
    pub fn roll_dice(&mut self) -> CommandOutcome {
        if let Some(reason) = self.blocked_for_human() {
            return CommandOutcome::Ignored(reason);
        }
        self.roll()
    }

    /// Flip the selection of die `index`.
    ///
    /// # Panics
    /// Panics if `index >= 6`.
    #[instrument(level = "debug", skip(self))]
    pub fn toggle_die(&mut self, index: usize) -> CommandOutcome {
        assert!(index < DICE_COUNT, "die index {} out of range", index);
        if let Some(reason) = self.blocked_for_human() {
            return CommandOutcome::Ignored(reason);
        }
        if self.dice.toggle(index) {
            CommandOutcome::Applied
        } else {
            CommandOutcome::Ignored(IgnoreReason::NotRolled)
        }
    }

    /// Put (or move) the tentative stone on `pos`.
    #[instrument(level = "debug", skip(self))]
    pub fn place_attempt(&mut self, pos: SquarePos) -> Result<CommandOutcome, PlaceError> {
        if let Some(reason) = self.blocked_for_human() {
            return Ok(CommandOutcome::Ignored(reason));
        }
        self.place(pos)
    }

    /// End the current human turn, committing the tentative stone.
    ///
    /// Ignored until a stone is down; a human who cannot place waits out the clock.
    #[instrument(level = "debug", skip(self))]
    pub fn end_turn(&mut self) -> CommandOutcome {
        if let Some(reason) = self.blocked_for_human() {
            return CommandOutcome::Ignored(reason);
        }
        if self.pending.is_none() {
            return CommandOutcome::Ignored(IgnoreReason::NoStonePlaced);
        }
        self.finish_turn(false)
    }

    /// Freeze the clock and block play commands.
    pub fn pause(&mut self) -> CommandOutcome {
        if self.is_game_over() {
            return CommandOutcome::Ignored(IgnoreReason::GameOver);
        }
        if self.paused {
            return CommandOutcome::Ignored(IgnoreReason::AlreadyInMode);
        }
        self.paused = true;
        self.clock.stop();
        info!(player = %self.current, "game paused");
        CommandOutcome::Applied
    }

    /// Unfreeze. Time spent paused does not count against the turn.
    pub fn resume(&mut self) -> CommandOutcome {
        if self.is_game_over() {
            return CommandOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !self.paused {
            return CommandOutcome::Ignored(IgnoreReason::AlreadyInMode);
        }
        self.paused = false;
        self.clock.resume();
        info!(player = %self.current, "game resumed");
        CommandOutcome::Applied
    }

    /// Advance the turn clock by the time since the previous tick; force the
    /// turn to end once the budget is spent.
    pub fn tick(&mut self, elapsed: Duration) -> CommandOutcome {
        if let Some(reason) = self.blocked() {
            return CommandOutcome::Ignored(reason);
        }
        if self.clock.advance(elapsed) {
            info!(player = %self.current, "turn timed out");
            return self.finish_turn(true);
        }
        CommandOutcome::Applied
    }

    // === Automated seats ===

    /// Play one full automated turn with the default policy.
    pub fn play_automated_turn(&mut self) -> CommandOutcome {
        self.play_automated_turn_with(&FirstMatch)
    }

    /// Play one full automated turn: roll, search, select, place, end.
    ///
    /// No thinking delay is inserted; a UI that wants one stages it around
    /// this call.
    #[instrument(level = "debug", skip(self, policy))]
    pub fn play_automated_turn_with<P: MovePolicy + ?Sized>(&mut self, policy: &P) -> CommandOutcome {
        if let Some(reason) = self.blocked() {
            return CommandOutcome::Ignored(reason);
        }
        if self.players[self.current].is_human {
            return CommandOutcome::Ignored(IgnoreReason::HumanTurn);
        }

        self.roll();
        match policy.choose(&self.board, &self.dice) {
            Some(chosen) => {
                self.dice.select_only(chosen.dice);
                if let Err(err) = self.place(chosen.square) {
                    warn!(%err, square = %chosen.square, "policy chose an illegal move; passing");
                }
            }
            None => debug!(player = %self.current, "no legal move; passing"),
        }
        self.finish_turn(false)
    }

    /// Keep playing automated turns until a human is to move, the game is
    /// paused or over, or `limit` turns have been played. Returns the number played.
    pub fn run_automated_turns(&mut self, limit: u32) -> u32 {
        let mut played = 0;
        while played < limit && self.needs_automated_move() {
            self.play_automated_turn();
            played += 1;
        }
        played
    }

    // === Internals ===

    fn blocked(&self) -> Option<IgnoreReason> {
        if self.is_game_over() {
            Some(IgnoreReason::GameOver)
        } else if self.paused {
            Some(IgnoreReason::Paused)
        } else {
            None
        }
    }

    fn blocked_for_human(&self) -> Option<IgnoreReason> {
        self.blocked().or_else(|| {
            (!self.players[self.current].is_human).then_some(IgnoreReason::AutomatedTurn)
        })
    }

    fn start_turn(&mut self) {
        self.dice.reset();
        self.pending = None;
        self.clock.restart();
        self.turn_number += 1;

        let player = &self.players[self.current];
        debug!(
            turn = self.turn_number,
            player = %self.current,
            name = %player.name,
            human = player.is_human,
            "turn started"
        );
    }

    fn roll(&mut self) -> CommandOutcome {
        if !self.dice.can_roll() {
            return CommandOutcome::Ignored(IgnoreReason::NoRollsLeft);
        }
        self.pending = None;
        self.dice.roll(&mut self.rng);

        let faces: Vec<_> = self.dice.dice().iter().filter_map(|d| d.face).collect();
        debug!(roll = self.dice.roll_count(), ?faces, "dice rolled");
        CommandOutcome::Applied
    }

    fn place(&mut self, pos: SquarePos) -> Result<CommandOutcome, PlaceError> {
        if !self.dice.is_rolled() {
            return Ok(CommandOutcome::Ignored(IgnoreReason::NotRolled));
        }
        if self.board.is_occupied(pos) {
            return Err(PlaceError::AlreadyOccupied);
        }
        let faces = self.dice.selected_faces();
        if faces.is_empty() {
            return Err(PlaceError::NoDiceSelected);
        }
        if !is_valid_placement(self.board.category(pos), &faces) {
            return Err(PlaceError::InvalidCombination);
        }

        self.pending = Some(pos);
        debug!(square = %pos, category = %self.board.category(pos), "stone placed");
        Ok(CommandOutcome::Applied)
    }

    fn commit(&mut self, square: SquarePos) -> PlacedStone {
        let category = self.board.category(square);
        let points = category.points();
        self.board.occupy(square);

        let player = &mut self.players[self.current];
        debug_assert!(player.stones_left > 0, "committing without stones");
        player.stones_left -= 1;
        player.score += points;

        PlacedStone {
            square,
            category,
            points,
        }
    }

    fn finish_turn(&mut self, timed_out: bool) -> CommandOutcome {
        self.clock.stop();

        let player = self.current;
        let placed = self.pending.take().map(|square| self.commit(square));
        self.history.push_back(TurnRecord {
            turn: self.turn_number,
            player,
            placed,
            timed_out,
        });
        info!(
            turn = self.turn_number,
            player = %player,
            placed = ?placed.map(|p| p.square),
            points = placed.map_or(0, |p| p.points),
            score = self.players[player].score,
            stones_left = self.players[player].stones_left,
            timed_out,
            "turn ended"
        );

        self.dice.reset();
        self.current = self.current.next(self.player_count());

        if self.should_end_game() {
            let outcome = self.final_outcome();
            info!(
                winner = %outcome.winner,
                scores = ?outcome.final_scores,
                "game over"
            );
            self.outcome = Some(outcome);
        } else {
            self.start_turn();
        }
        CommandOutcome::Applied
    }

    fn should_end_game(&self) -> bool {
        self.players.values().any(Player::is_out_of_stones) || self.board.is_full()
    }

    fn final_outcome(&self) -> GameOutcome {
        let mut winner = PlayerId::new(0);
        let mut best = None;
        for (id, player) in self.players.iter() {
            if best.map_or(true, |score| player.score > score) {
                best = Some(player.score);
                winner = id;
            }
        }

        GameOutcome {
            final_scores: self
                .players
                .values()
                .map(|p| (p.name.clone(), p.score))
                .collect(),
            winner,
        }
    }
}
