use crate::env::MultiAgentEnvironment;
use crate::error::{AgoraError, Result};
use crate::types::{DynamicStyle, Player};

/// Single-agent environment that a [`TurnBasedWrapper`] shares between players
pub trait SimpleEnvironment {
    type Observation;
    type Action;

    fn reset(&mut self) -> Self::Observation;
    fn step(&mut self, action: Self::Action) -> (Self::Observation, f32, bool);
    fn get_state(&self) -> Self::Observation;
    fn legal_actions(&self) -> Vec<Self::Action>;
}

/// Wrapper to use single-agent environments in a sequential multi-agent setting.
///
/// Players take turns in the order given at construction. Every player sees
/// the same underlying state; only the acting player is credited with the
/// reward of its move.
pub struct TurnBasedWrapper<E> {
    env: E,
    players: Vec<Player>,
    current: usize,
    rewards: Vec<f32>,
    episode_done: bool,
}

impl<E> TurnBasedWrapper<E> {
    pub fn new(env: E, players: Vec<Player>) -> Result<Self> {
        if players.is_empty() {
            return Err(AgoraError::invalid_parameter(
                "players",
                "at least one player is required",
            ));
        }
        let rewards = vec![0.0; players.len()];
        Ok(Self {
            env,
            players,
            current: 0,
            rewards,
            episode_done: false,
        })
    }

    pub fn inner(&self) -> &E {
        &self.env
    }

    fn index_of(&self, player: &Player) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }
}

impl<E> MultiAgentEnvironment for TurnBasedWrapper<E>
where
    E: SimpleEnvironment,
{
    type Observation = E::Observation;
    type Action = E::Action;

    fn players(&self) -> Vec<Player> {
        self.players.clone()
    }

    fn num_players(&self) -> usize {
        self.players.len()
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

    fn observation(&self, _player: &Player) -> Self::Observation {
        self.env.get_state()
    }

    fn legal_actions(&self, _player: &Player) -> Vec<Self::Action> {
        if self.episode_done {
            Vec::new()
        } else {
            self.env.legal_actions()
        }
    }

    fn reward(&self, player: &Player) -> f32 {
        self.index_of(player)
            .map(|i| self.rewards[i])
            .unwrap_or(0.0)
    }

    fn is_terminal(&self) -> bool {
        self.episode_done
    }

    fn reset(&mut self) -> Result<()> {
        self.current = 0;
        self.episode_done = false;
        self.rewards.iter_mut().for_each(|r| *r = 0.0);
        self.env.reset();
        Ok(())
    }

    fn step(&mut self, action: Self::Action) -> Result<()> {
        if self.episode_done {
            return Err(AgoraError::Environment(
                "step called on a finished episode".to_string(),
            ));
        }
        let (_, reward, done) = self.env.step(action);
        self.rewards.iter_mut().for_each(|r| *r = 0.0);
        self.rewards[self.current] = reward;
        self.episode_done = done;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DummyEnv {
        state: i32,
        max_steps: i32,
    }

    impl SimpleEnvironment for DummyEnv {
        type Observation = i32;
        type Action = i32;

        fn reset(&mut self) -> Self::Observation {
            self.state = 0;
            self.state
        }

        fn step(&mut self, action: Self::Action) -> (Self::Observation, f32, bool) {
            self.state += action;
            let done = self.state >= self.max_steps;
            (self.state, action as f32, done)
        }

        fn get_state(&self) -> Self::Observation {
            self.state
        }

        fn legal_actions(&self) -> Vec<Self::Action> {
            vec![1, 2, 3]
        }
    }

    fn wrapper() -> TurnBasedWrapper<DummyEnv> {
        let env = DummyEnv { state: 0, max_steps: 10 };
        TurnBasedWrapper::new(env, vec![Player::from("a"), Player::from("b")]).unwrap()
    }

    #[test]
    fn test_turn_based_wrapper() {
        let mut wrapper = wrapper();
        let (a, b) = (Player::from("a"), Player::from("b"));

        assert_eq!(wrapper.num_players(), 2);
        assert_eq!(wrapper.current_player(), a);

        wrapper.step(3).unwrap();
        assert_eq!(wrapper.reward(&a), 3.0);
        assert_eq!(wrapper.reward(&b), 0.0);
        assert!(!wrapper.is_terminal());

        // The wrapper never moves the cursor on its own
        assert_eq!(wrapper.current_player(), a);
        wrapper.next_player();
        assert_eq!(wrapper.current_player(), b);

        wrapper.step(7).unwrap();
        assert_eq!(wrapper.reward(&a), 0.0);
        assert_eq!(wrapper.reward(&b), 7.0);
        assert!(wrapper.is_terminal()); // 3 + 7 = 10, reached max_steps
        assert!(wrapper.legal_actions(&a).is_empty());
        assert!(wrapper.step(1).is_err());
    }

    #[test]
    fn test_reset_restores_first_player() {
        let mut wrapper = wrapper();
        wrapper.next_player();
        wrapper.step(10).unwrap();
        assert!(wrapper.is_terminal());

        wrapper.reset().unwrap();
        assert!(!wrapper.is_terminal());
        assert_eq!(wrapper.current_player(), Player::from("a"));
        assert_eq!(wrapper.observation(&Player::from("b")), 0);
    }

    #[test]
    fn test_cursor_wraps_around() {
        let mut wrapper = wrapper();
        wrapper.next_player();
        wrapper.next_player();
        assert_eq!(wrapper.current_player(), Player::from("a"));
    }

    #[test]
    fn test_empty_player_list_rejected() {
        let env = DummyEnv { state: 0, max_steps: 10 };
        assert!(TurnBasedWrapper::new(env, Vec::new()).is_err());
    }
}
