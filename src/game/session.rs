//! Round and score state machine for one pair of players.
//!
//! A session lives from a successful name submission until the app goes
//! back to name entry. It runs any number of rounds; scores are carried
//! across [`GameSession::reset`].

use super::board::{Board, PlayerRole, WinningLine, CELL_COUNT};
use super::error::GameError;
use super::win::{find_winning_line, is_draw};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingMove { turn: PlayerRole },
    Won { line: WinningLine, winner: PlayerRole },
    Drawn,
}

/// Why a move was ignored. Never shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds,
    Occupied,
    RoundOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Rejected(IllegalMove),
    /// Mark placed, round continues with the other role to move.
    Placed { role: PlayerRole, index: usize },
    Won {
        role: PlayerRole,
        index: usize,
        line: WinningLine,
    },
    Drawn { role: PlayerRole, index: usize },
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    players: [String; 2],
    scores: [u32; 2],
    board: Board,
    state: RoundState,
    rounds_played: u32,
}

impl GameSession {
    /// Validate both names and open the first round. Names are kept exactly
    /// as typed; only empty ones are refused.
    pub fn start(first: &str, second: &str) -> Result<Self, GameError> {
        if first.is_empty() || second.is_empty() {
            return Err(GameError::InvalidInput);
        }
        info!(first, second, "session started");
        Ok(Self {
            players: [first.to_string(), second.to_string()],
            scores: [0, 0],
            board: Board::new(),
            state: RoundState::AwaitingMove {
                turn: PlayerRole::First,
            },
            rounds_played: 0,
        })
    }

    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let outcome = self.try_move(index);
        match outcome {
            MoveOutcome::Rejected(reason) => debug!(index, ?reason, "move rejected"),
            MoveOutcome::Placed { role, .. } => {
                debug!(index, %role, marked = self.board.marked_count(), "move placed")
            }
            MoveOutcome::Won { role, line, .. } => {
                info!(winner = self.player_name(role), line = ?line.indices(), "round won")
            }
            MoveOutcome::Drawn { .. } => info!("round drawn"),
        }
        outcome
    }

    fn try_move(&mut self, index: usize) -> MoveOutcome {
        let role = match self.state {
            RoundState::AwaitingMove { turn } => turn,
            _ => return MoveOutcome::Rejected(IllegalMove::RoundOver),
        };
        if index >= CELL_COUNT {
            return MoveOutcome::Rejected(IllegalMove::OutOfBounds);
        }
        if !self.board.place(index, role) {
            return MoveOutcome::Rejected(IllegalMove::Occupied);
        }

        if let Some(line) = find_winning_line(&self.board) {
            self.scores[role.index()] += 1;
            self.rounds_played += 1;
            self.state = RoundState::Won { line, winner: role };
            MoveOutcome::Won { role, index, line }
        } else if is_draw(&self.board) {
            self.rounds_played += 1;
            self.state = RoundState::Drawn;
            MoveOutcome::Drawn { role, index }
        } else {
            self.state = RoundState::AwaitingMove { turn: role.other() };
            MoveOutcome::Placed { role, index }
        }
    }

    /// Clear the board and hand the first move back to `First`. Scores stay.
    pub fn reset(&mut self) {
        self.board.clear();
        self.state = RoundState::AwaitingMove {
            turn: PlayerRole::First,
        };
        debug!("round reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn turn(&self) -> Option<PlayerRole> {
        match self.state {
            RoundState::AwaitingMove { turn } => Some(turn),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.state {
            RoundState::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    pub fn is_round_over(&self) -> bool {
        !matches!(self.state, RoundState::AwaitingMove { .. })
    }

    pub fn player_name(&self, role: PlayerRole) -> &str {
        &self.players[role.index()]
    }

    pub fn score(&self, role: PlayerRole) -> u32 {
        self.scores[role.index()]
    }

    /// `(name, wins)` for both players, first role first.
    pub fn scoreboard(&self) -> [(&str, u32); 2] {
        PlayerRole::ALL.map(|role| (self.player_name(role), self.score(role)))
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Announcement for a finished round, `None` while it is still running.
    pub fn result_message(&self) -> Option<String> {
        match self.state {
            RoundState::AwaitingMove { .. } => None,
            RoundState::Won { winner, .. } => Some(format!("{} Wins!", self.player_name(winner))),
            RoundState::Drawn => Some("It's a Draw!".to_string()),
        }
    }
}
