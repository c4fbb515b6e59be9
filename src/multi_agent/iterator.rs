use crate::env::MultiAgentEnvironment;
use crate::types::Player;

/// Produces the acting players of a sequential environment.
///
/// The iterator holds no turn state of its own: the first call reads the
/// environment's current player, every later call advances the
/// environment's cursor and reads it again. It never runs out. The run loop
/// decides when to stop asking, and a fresh iterator is needed after every
/// environment reset.
#[derive(Clone, Debug, Default)]
pub struct CurrentPlayerIterator {
    started: bool,
}

impl CurrentPlayerIterator {
    pub fn new() -> Self {
        CurrentPlayerIterator { started: false }
    }

    /// The player acting first
    pub fn start<E: MultiAgentEnvironment>(&mut self, env: &E) -> Player {
        self.started = true;
        env.current_player()
    }

    /// Hand the turn to the next player and return them
    pub fn advance<E: MultiAgentEnvironment>(&mut self, env: &mut E) -> Player {
        self.started = true;
        env.next_player();
        env.current_player()
    }

    /// `start` on the first call, `advance` on every later one
    pub fn next_player<E: MultiAgentEnvironment>(&mut self, env: &mut E) -> Player {
        if self.started {
            self.advance(env)
        } else {
            self.start(env)
        }
    }

    /// Borrow `env` as a plain [`Iterator`] of acting players
    pub fn over<E: MultiAgentEnvironment>(env: &mut E) -> PlayerTurns<'_, E> {
        PlayerTurns {
            env,
            cursor: CurrentPlayerIterator::new(),
        }
    }
}

/// Unbounded iterator over the acting players of a borrowed environment
pub struct PlayerTurns<'a, E> {
    env: &'a mut E,
    cursor: CurrentPlayerIterator,
}

impl<E: MultiAgentEnvironment> Iterator for PlayerTurns<'_, E> {
    type Item = Player;

    fn next(&mut self) -> Option<Player> {
        Some(self.cursor.next_player(&mut *self.env))
    }
}
