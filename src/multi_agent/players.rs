use std::collections::{HashMap, HashSet};

use crate::error::{AgoraError, Result};
use crate::types::Player;

/// Fixed, insertion-ordered mapping from player to a per-player value.
///
/// The set of players is decided at construction and never changes; only
/// the values can be mutated afterwards.
#[derive(Clone, Debug)]
pub struct PlayerMap<T> {
    players: Vec<Player>,
    values: Vec<T>,
    index: HashMap<Player, usize>,
}

impl<T> PlayerMap<T> {
    /// Build from `(player, value)` pairs. Fails on a repeated player.
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Player, T)>,
    {
        let mut players = Vec::new();
        let mut values = Vec::new();
        let mut index = HashMap::new();

        for (player, value) in entries {
            if index.contains_key(&player) {
                return Err(AgoraError::DuplicatePlayer { player });
            }
            index.insert(player.clone(), players.len());
            players.push(player);
            values.push(value);
        }

        Ok(PlayerMap {
            players,
            values,
            index,
        })
    }

    pub fn get(&self, player: &Player) -> Result<&T> {
        self.index
            .get(player)
            .map(|&i| &self.values[i])
            .ok_or_else(|| AgoraError::key_not_found(player))
    }

    pub fn get_mut(&mut self, player: &Player) -> Result<&mut T> {
        match self.index.get(player) {
            Some(&i) => Ok(&mut self.values[i]),
            None => Err(AgoraError::key_not_found(player)),
        }
    }

    pub fn contains(&self, player: &Player) -> bool {
        self.index.contains_key(player)
    }

    /// Players in insertion order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Player, &T)> {
        self.players.iter().zip(self.values.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Player, &mut T)> {
        self.players.iter().zip(self.values.iter_mut())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.values.iter_mut()
    }

    /// Whether `other` addresses exactly the same set of players
    pub fn same_players<U>(&self, other: &PlayerMap<U>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mine: HashSet<&Player> = self.players.iter().collect();
        other.players.iter().all(|p| mine.contains(p))
    }

    /// Transform every value, keeping the players and their order
    pub fn map<U, F>(self, mut f: F) -> PlayerMap<U>
    where
        F: FnMut(&Player, T) -> U,
    {
        let values = self
            .players
            .iter()
            .zip(self.values)
            .map(|(player, value)| f(player, value))
            .collect();
        PlayerMap {
            players: self.players,
            values,
            index: self.index,
        }
    }
}
