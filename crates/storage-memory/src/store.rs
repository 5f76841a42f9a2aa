//! Shared record tables behind the repositories.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use familysaver_core::contributions::Contribution;
use familysaver_core::goals::Goal;
use familysaver_core::rewards::NftReward;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::StorageError;

/// In-memory record store.
///
/// Every goal sits behind its own mutex, so read-modify-write cycles on one
/// goal are serialized while different goals proceed in parallel. Lock order
/// is always goal first, then the contribution or reward table.
///
/// Share one store between repositories through an `Arc`; there is no
/// process-wide instance.
#[derive(Default)]
pub struct MemoryStore {
    goals: DashMap<String, Arc<Mutex<Goal>>>,
    contributions: RwLock<Vec<Contribution>>,
    /// Transaction hash -> contribution id, for idempotent mirroring.
    contribution_hashes: DashMap<String, String>,
    rewards: RwLock<Vec<NftReward>>,
    /// Token id -> reward id.
    reward_tokens: DashMap<i64, String>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn goal_cell(&self, goal_id: &str) -> Result<Arc<Mutex<Goal>>, StorageError> {
        self.goals
            .get(goal_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| StorageError::NotFound(format!("Goal {goal_id}")))
    }

    pub(crate) fn lock_goal<'a>(
        cell: &'a Mutex<Goal>,
    ) -> Result<MutexGuard<'a, Goal>, StorageError> {
        cell.lock().map_err(StorageError::poisoned("goal"))
    }

    pub(crate) fn read_goal(&self, goal_id: &str) -> Result<Goal, StorageError> {
        let cell = self.goal_cell(goal_id)?;
        let goal = Self::lock_goal(&cell)?;
        Ok(goal.clone())
    }

    /// All goals, oldest first.
    pub(crate) fn all_goals(&self) -> Result<Vec<Goal>, StorageError> {
        let cells: Vec<Arc<Mutex<Goal>>> = self
            .goals
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();

        let mut goals = cells
            .iter()
            .map(|cell| Self::lock_goal(cell).map(|goal| goal.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        goals.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(goals)
    }

    pub(crate) fn insert_goal(&self, goal: Goal) -> Result<(), StorageError> {
        match self.goals.entry(goal.id.clone()) {
            Entry::Occupied(_) => {
                Err(StorageError::Duplicate(format!("Goal {}", goal.id)))
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(goal)));
                Ok(())
            }
        }
    }

    /// Claims a contribution transaction hash. Fails if it was already used.
    ///
    /// Hex hashes are compared case-insensitively.
    pub(crate) fn claim_hash(&self, hash: &str, contribution_id: &str) -> Result<(), StorageError> {
        match self.contribution_hashes.entry(hash.to_ascii_lowercase()) {
            Entry::Occupied(existing) => Err(StorageError::Duplicate(
                format!("Transaction {hash} already recorded as {}", existing.get()),
            )),
            Entry::Vacant(slot) => {
                slot.insert(contribution_id.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn release_hash(&self, hash: &str) {
        self.contribution_hashes.remove(&hash.to_ascii_lowercase());
    }

    pub(crate) fn contributions(
        &self,
    ) -> Result<RwLockReadGuard<'_, Vec<Contribution>>, StorageError> {
        self.contributions
            .read()
            .map_err(StorageError::poisoned("contributions"))
    }

    pub(crate) fn contributions_mut(
        &self,
    ) -> Result<RwLockWriteGuard<'_, Vec<Contribution>>, StorageError> {
        self.contributions
            .write()
            .map_err(StorageError::poisoned("contributions"))
    }

    pub(crate) fn claim_token(&self, token_id: i64, reward_id: &str) -> Result<(), StorageError> {
        match self.reward_tokens.entry(token_id) {
            Entry::Occupied(_) => Err(StorageError::Duplicate(format!(
                "Reward token {token_id}"
            ))),
            Entry::Vacant(slot) => {
                slot.insert(reward_id.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn release_token(&self, token_id: i64) {
        self.reward_tokens.remove(&token_id);
    }

    pub(crate) fn rewards(&self) -> Result<RwLockReadGuard<'_, Vec<NftReward>>, StorageError> {
        self.rewards.read().map_err(StorageError::poisoned("rewards"))
    }

    pub(crate) fn rewards_mut(
        &self,
    ) -> Result<RwLockWriteGuard<'_, Vec<NftReward>>, StorageError> {
        self.rewards.write().map_err(StorageError::poisoned("rewards"))
    }
}
