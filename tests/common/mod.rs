#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use agora::env::{MultiAgentEnvironment, SimpleEnvironment};
use agora::error::{AgoraError, Result};
use agora::hooks::Hook;
use agora::policy::Policy;
use agora::types::{DynamicStyle, Player, Stage};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn players(names: &[&str]) -> Vec<Player> {
    names.iter().map(|n| Player::from(*n)).collect()
}

/// Take one to three stones; whoever takes the last stone wins.
pub struct Nim {
    pub stones: usize,
    pile: usize,
}

impl Nim {
    pub fn new(stones: usize) -> Self {
        Nim { stones, pile: stones }
    }
}

impl SimpleEnvironment for Nim {
    type Observation = usize;
    type Action = usize;

    fn reset(&mut self) -> usize {
        self.pile = self.stones;
        self.pile
    }

    fn step(&mut self, action: usize) -> (usize, f32, bool) {
        let take = action.min(self.pile);
        self.pile -= take;
        let done = self.pile == 0;
        (self.pile, if done { 1.0 } else { 0.0 }, done)
    }

    fn get_state(&self) -> usize {
        self.pile
    }

    fn legal_actions(&self) -> Vec<usize> {
        (1..=self.pile.min(3)).collect()
    }
}

/// Matching pennies played for a fixed number of rounds per episode.
/// The first player wins a round when both coins match.
pub struct MatchingPennies {
    players: Vec<Player>,
    rounds: usize,
    round: usize,
    rewards: Vec<f32>,
}

impl MatchingPennies {
    pub fn new(rounds: usize) -> Self {
        MatchingPennies {
            players: players(&["even", "odd"]),
            rounds,
            round: 0,
            rewards: vec![0.0, 0.0],
        }
    }
}

impl MultiAgentEnvironment for MatchingPennies {
    type Observation = usize;
    type Action = bool;

    fn players(&self) -> Vec<Player> {
        self.players.clone()
    }

    fn current_player(&self) -> Player {
        self.players[0].clone()
    }

    fn next_player(&mut self) {}

    fn dynamic_style(&self) -> DynamicStyle {
        DynamicStyle::Simultaneous
    }

    fn observation(&self, _player: &Player) -> usize {
        self.round
    }

    fn legal_actions(&self, _player: &Player) -> Vec<bool> {
        if self.is_terminal() {
            Vec::new()
        } else {
            vec![true, false]
        }
    }

    fn reward(&self, player: &Player) -> f32 {
        self.players
            .iter()
            .position(|p| p == player)
            .map(|i| self.rewards[i])
            .unwrap_or(0.0)
    }

    fn is_terminal(&self) -> bool {
        self.round >= self.rounds
    }

    fn reset(&mut self) -> Result<()> {
        self.round = 0;
        self.rewards = vec![0.0, 0.0];
        Ok(())
    }

    fn step_joint(&mut self, actions: Vec<(Player, bool)>) -> Result<()> {
        if actions.len() != 2 {
            return Err(AgoraError::Environment(format!(
                "expected two coins, got {}",
                actions.len()
            )));
        }
        let even_wins = actions[0].1 == actions[1].1;
        self.rewards = if even_wins { vec![1.0, -1.0] } else { vec![-1.0, 1.0] };
        self.round += 1;
        Ok(())
    }
}

/// Round-robin game of fixed length that counts every player's moves
pub struct CountingGame {
    players: Vec<Player>,
    length: usize,
    current: usize,
    moves: usize,
    pub moves_by: Vec<usize>,
    pub resets: usize,
}

impl CountingGame {
    pub fn new(num_players: usize, length: usize) -> Self {
        CountingGame {
            players: (0..num_players).map(|i| Player::new(format!("p{}", i))).collect(),
            length,
            current: 0,
            moves: 0,
            moves_by: vec![0; num_players],
            resets: 0,
        }
    }
}

impl MultiAgentEnvironment for CountingGame {
    type Observation = usize;
    type Action = ();

    fn players(&self) -> Vec<Player> {
        self.players.clone()
    }

    fn current_player(&self) -> Player {
        self.players[self.current].clone()
    }

    fn next_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    fn dynamic_style(&self) -> DynamicStyle {
        DynamicStyle::Sequential
    }

    fn observation(&self, _player: &Player) -> usize {
        self.moves
    }

    fn legal_actions(&self, _player: &Player) -> Vec<()> {
        vec![()]
    }

    fn reward(&self, _player: &Player) -> f32 {
        0.0
    }

    fn is_terminal(&self) -> bool {
        self.moves >= self.length
    }

    fn reset(&mut self) -> Result<()> {
        self.current = 0;
        self.moves = 0;
        self.resets += 1;
        Ok(())
    }

    fn step(&mut self, _action: ()) -> Result<()> {
        self.moves_by[self.current] += 1;
        self.moves += 1;
        Ok(())
    }
}

/// Hook whose state stays reachable after the run loop took ownership
pub struct Shared<H>(pub Rc<RefCell<H>>);

impl<H> Shared<H> {
    pub fn new(hook: H) -> (Self, Rc<RefCell<H>>) {
        let handle = Rc::new(RefCell::new(hook));
        (Shared(handle.clone()), handle)
    }
}

impl<E: MultiAgentEnvironment, H: Hook<E>> Hook<E> for Shared<H> {
    fn notify(&mut self, stage: Stage, policy: &dyn Policy<E>, env: &E, player: &Player) {
        self.0.borrow_mut().notify(stage, policy, env, player)
    }
}
