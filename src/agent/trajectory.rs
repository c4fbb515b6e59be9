use std::collections::VecDeque;

/// One complete entry of a [`Trajectory`]
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryStep<'a, O, A> {
    pub observation: &'a O,
    pub action: &'a A,
    pub reward: f32,
    pub terminal: bool,
}

/// Bounded per-agent trace of observations, actions, rewards and
/// termination flags.
///
/// Each trace is filled independently as the run loop delivers it, so the
/// traces may briefly differ in length (an observation is pushed before the
/// matching action is planned). Once a trace holds `capacity` entries the
/// oldest one is dropped.
#[derive(Clone, Debug)]
pub struct Trajectory<O, A> {
    observations: VecDeque<O>,
    actions: VecDeque<A>,
    rewards: VecDeque<f32>,
    terminals: VecDeque<bool>,
    capacity: usize,
}

fn push_bounded<T>(buffer: &mut VecDeque<T>, capacity: usize, value: T) {
    if buffer.len() == capacity {
        buffer.pop_front();
    }
    buffer.push_back(value);
}

impl<O, A> Trajectory<O, A> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Trajectory {
            observations: VecDeque::with_capacity(capacity),
            actions: VecDeque::with_capacity(capacity),
            rewards: VecDeque::with_capacity(capacity),
            terminals: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push_observation(&mut self, observation: O) {
        push_bounded(&mut self.observations, self.capacity, observation);
    }

    pub fn push_action(&mut self, action: A) {
        push_bounded(&mut self.actions, self.capacity, action);
    }

    pub fn push_reward(&mut self, reward: f32) {
        push_bounded(&mut self.rewards, self.capacity, reward);
    }

    pub fn push_terminal(&mut self, terminal: bool) {
        push_bounded(&mut self.terminals, self.capacity, terminal);
    }

    /// Number of complete (observation, action, reward, terminal) entries
    pub fn len(&self) -> usize {
        self.observations
            .len()
            .min(self.actions.len())
            .min(self.rewards.len())
            .min(self.terminals.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn observations(&self) -> &VecDeque<O> {
        &self.observations
    }

    pub fn actions(&self) -> &VecDeque<A> {
        &self.actions
    }

    pub fn rewards(&self) -> &VecDeque<f32> {
        &self.rewards
    }

    pub fn terminals(&self) -> &VecDeque<bool> {
        &self.terminals
    }

    /// Iterate over complete entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = TrajectoryStep<'_, O, A>> {
        self.observations
            .iter()
            .zip(self.actions.iter())
            .zip(self.rewards.iter())
            .zip(self.terminals.iter())
            .map(|(((observation, action), &reward), &terminal)| TrajectoryStep {
                observation,
                action,
                reward,
                terminal,
            })
    }

    pub fn clear(&mut self) {
        self.observations.clear();
        self.actions.clear();
        self.rewards.clear();
        self.terminals.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_entries() {
        let mut trajectory: Trajectory<i32, usize> = Trajectory::new(10);
        trajectory.push_observation(1);
        trajectory.push_action(0);
        assert_eq!(trajectory.len(), 0);

        trajectory.push_reward(0.5);
        trajectory.push_terminal(false);
        assert_eq!(trajectory.len(), 1);

        let step = trajectory.iter().next().unwrap();
        assert_eq!(*step.observation, 1);
        assert_eq!(*step.action, 0);
        assert_eq!(step.reward, 0.5);
        assert!(!step.terminal);
    }

    #[test]
    fn test_capacity() {
        let mut trajectory: Trajectory<usize, usize> = Trajectory::new(3);

        for i in 0..5 {
            trajectory.push_observation(i);
            trajectory.push_action(i);
            trajectory.push_reward(i as f32);
            trajectory.push_terminal(false);
        }

        // Should only keep last 3
        assert_eq!(trajectory.len(), 3);
        let kept: Vec<usize> = trajectory.iter().map(|s| *s.observation).collect();
        assert_eq!(kept, vec![2, 3, 4]);
    }

    #[test]
    fn test_clear() {
        let mut trajectory: Trajectory<u8, u8> = Trajectory::new(0);
        assert_eq!(trajectory.capacity(), 1);
        trajectory.push_observation(1);
        trajectory.clear();
        assert!(trajectory.observations().is_empty());
    }
}
