use std::cell::RefCell;
use std::rc::Rc;

use crate::env::MultiAgentEnvironment;
use crate::error::{AgoraError, Result};
use crate::hooks::Hook;
use crate::multi_agent::{MultiAgentHook, MultiAgentPolicy};
use crate::policy::Policy;
use crate::types::{DynamicStyle, Player, Stage};

/// Everything the scripted game and its observers record
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    StyleQueried,
    Reset,
    Step(Player),
    JointStep(usize),
    Policy(Stage, Player),
    Optimise(Stage, Player),
    Hook(Stage, Player),
    Plan(Player),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn count(log: &Log, event: &Event) -> usize {
    log.borrow().iter().filter(|e| *e == event).count()
}

pub fn p(name: &str) -> Player {
    Player::from(name)
}

/// Game whose episodes end after a fixed number of moves. The acting player
/// earns 1.0 per move; every player earns 1.0 per joint move.
pub struct ScriptedGame {
    pub players: Vec<Player>,
    pub style: DynamicStyle,
    pub episode_length: usize,
    pub fail_on_move: Option<usize>,
    current: usize,
    moves: usize,
    total_moves: usize,
    rewards: Vec<f32>,
    log: Log,
}

impl ScriptedGame {
    pub fn new(names: &[&str], style: DynamicStyle, episode_length: usize, log: Log) -> Self {
        ScriptedGame {
            players: names.iter().map(|n| p(n)).collect(),
            style,
            episode_length,
            fail_on_move: None,
            current: 0,
            moves: 0,
            total_moves: 0,
            rewards: vec![0.0; names.len()],
            log,
        }
    }

    fn record(&self, event: Event) {
        self.log.borrow_mut().push(event);
    }
}

impl MultiAgentEnvironment for ScriptedGame {
    type Observation = usize;
    type Action = usize;

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
        self.record(Event::StyleQueried);
        self.style
    }

    fn observation(&self, _player: &Player) -> usize {
        self.moves
    }

    fn legal_actions(&self, _player: &Player) -> Vec<usize> {
        if self.is_terminal() {
            Vec::new()
        } else {
            vec![0, 1]
        }
    }

    fn reward(&self, player: &Player) -> f32 {
        self.players
            .iter()
            .position(|q| q == player)
            .map(|i| self.rewards[i])
            .unwrap_or(0.0)
    }

    fn is_terminal(&self) -> bool {
        self.moves >= self.episode_length
    }

    fn reset(&mut self) -> Result<()> {
        self.record(Event::Reset);
        self.current = 0;
        self.moves = 0;
        self.rewards.iter_mut().for_each(|r| *r = 0.0);
        Ok(())
    }

    fn step(&mut self, _action: usize) -> Result<()> {
        self.total_moves += 1;
        if self.fail_on_move == Some(self.total_moves) {
            return Err(AgoraError::Environment("scripted failure".to_string()));
        }
        self.record(Event::Step(self.current_player()));
        self.moves += 1;
        self.rewards.iter_mut().for_each(|r| *r = 0.0);
        self.rewards[self.current] = 1.0;
        Ok(())
    }

    fn step_joint(&mut self, actions: Vec<(Player, usize)>) -> Result<()> {
        self.total_moves += 1;
        self.record(Event::JointStep(actions.len()));
        self.moves += 1;
        self.rewards.iter_mut().for_each(|r| *r = 1.0);
        Ok(())
    }
}

pub struct RecordingPolicy {
    name: Player,
    log: Log,
}

impl RecordingPolicy {
    pub fn new(name: Player, log: Log) -> Self {
        RecordingPolicy { name, log }
    }
}

impl Policy<ScriptedGame> for RecordingPolicy {
    fn plan(&mut self, _env: &ScriptedGame, player: &Player) -> Result<usize> {
        self.log.borrow_mut().push(Event::Plan(player.clone()));
        Ok(0)
    }

    fn notify(&mut self, stage: Stage, _env: &ScriptedGame, player: &Player) {
        self.log.borrow_mut().push(Event::Policy(stage, player.clone()));
    }

    fn optimise(&mut self, stage: Stage) {
        self.log.borrow_mut().push(Event::Optimise(stage, self.name.clone()));
    }
}

pub struct RecordingHook {
    log: Log,
}

impl RecordingHook {
    pub fn new(log: Log) -> Self {
        RecordingHook { log }
    }
}

impl Hook<ScriptedGame> for RecordingHook {
    fn notify(&mut self, stage: Stage, _policy: &dyn Policy<ScriptedGame>, _env: &ScriptedGame, player: &Player) {
        self.log.borrow_mut().push(Event::Hook(stage, player.clone()));
    }
}

/// Lets a test keep a handle on a policy or hook the run loop owns
pub struct Shared<T>(pub Rc<RefCell<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> (Self, Rc<RefCell<T>>) {
        let handle = Rc::new(RefCell::new(value));
        (Shared(handle.clone()), handle)
    }
}

impl<P: Policy<ScriptedGame>> Policy<ScriptedGame> for Shared<P> {
    fn plan(&mut self, env: &ScriptedGame, player: &Player) -> Result<usize> {
        self.0.borrow_mut().plan(env, player)
    }

    fn notify(&mut self, stage: Stage, env: &ScriptedGame, player: &Player) {
        self.0.borrow_mut().notify(stage, env, player)
    }

    fn optimise(&mut self, stage: Stage) {
        self.0.borrow_mut().optimise(stage)
    }
}

impl<H: Hook<ScriptedGame>> Hook<ScriptedGame> for Shared<H> {
    fn notify(&mut self, stage: Stage, policy: &dyn Policy<ScriptedGame>, env: &ScriptedGame, player: &Player) {
        self.0.borrow_mut().notify(stage, policy, env, player)
    }
}

pub struct Fixture {
    pub env: ScriptedGame,
    pub policy: MultiAgentPolicy<ScriptedGame>,
    pub hook: MultiAgentHook<ScriptedGame>,
    pub log: Log,
}

impl Fixture {
    pub fn new(names: &[&str], style: DynamicStyle, episode_length: usize) -> Self {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let env = ScriptedGame::new(names, style, episode_length, log.clone());

        let policy = MultiAgentPolicy::from_entries(names.iter().map(|n| {
            let policy: Box<dyn Policy<ScriptedGame>> =
                Box::new(RecordingPolicy::new(p(n), log.clone()));
            (p(n), policy)
        }))
        .unwrap();

        let hook = MultiAgentHook::from_entries(names.iter().map(|n| {
            let hook: Box<dyn Hook<ScriptedGame>> = Box::new(RecordingHook::new(log.clone()));
            (p(n), hook)
        }))
        .unwrap();

        Fixture {
            env,
            policy,
            hook,
            log,
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn count(&self, event: &Event) -> usize {
        count(&self.log, event)
    }
}
