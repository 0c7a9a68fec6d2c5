//! Concurrent in-memory user store.
//!
//! - `records`: `id -> User`, sharded by `DashMap`. A value is only ever
//!   replaced whole under its shard's write lock.
//! - `next_id`: allocated with a single `fetch_add` after validation passes,
//!   so rejected candidates never consume an id and ids are never reused.
//! - `live`: record count kept next to the map; backs the `users.count` gauge.
//!   Incremented before insert and decremented after remove, so it may
//!   briefly run ahead of the map but never behind it.
//!
//! No shard guard is held while calling into the metrics sink.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

use crate::error::{Result, StoreError};
use crate::metrics::{
    MetricsSink, NoopMetrics, USERS_COUNT, USERS_CREATED, USERS_DELETED, USERS_NOT_FOUND,
    USERS_RETRIEVED, USERS_UPDATED,
};
use crate::model::{User, UserDraft, UserId};
use crate::search;

pub struct RecordStore {
    records: DashMap<UserId, User>,
    next_id: AtomicU64,
    live: Arc<AtomicUsize>,
    metrics: Arc<dyn MetricsSink>,
}

impl RecordStore {
    /// Build an empty store and register its size gauge with `metrics`.
    pub fn new(metrics: Arc<dyn MetricsSink>) -> Self {
        let live = Arc::new(AtomicUsize::new(0));

        let gauge = Arc::clone(&live);
        metrics.register_gauge(
            USERS_COUNT,
            Arc::new(move || i64::try_from(gauge.load(Ordering::Relaxed)).unwrap_or(i64::MAX)),
        );

        Self {
            records: DashMap::new(),
            next_id: AtomicU64::new(1),
            live,
            metrics,
        }
    }

    /// Validate `draft`, assign it the next id and store it.
    pub fn create(&self, draft: UserDraft) -> Result<User> {
        if let Err(v) = draft.validate() {
            tracing::warn!(email = %draft.email, reason = %v, "rejected invalid user on create");
            return Err(StoreError::InvalidInput(v));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = draft.into_user(id);
        // Raised before the record is visible: a remove can only find it
        // after this, so `live` never drops below zero.
        self.live.fetch_add(1, Ordering::Relaxed);
        self.records.insert(id, user.clone());

        tracing::info!(id, email = %user.email, "user created");
        self.metrics.increment_counter(USERS_CREATED);
        Ok(user)
    }

    pub fn get_by_id(&self, id: UserId) -> Result<User> {
        tracing::debug!(id, "looking up user");
        let found = self.records.get(&id).map(|r| r.value().clone());

        match found {
            Some(user) => {
                self.metrics.increment_counter(USERS_RETRIEVED);
                Ok(user)
            }
            None => {
                tracing::warn!(id, "user not found");
                self.metrics.increment_counter(USERS_NOT_FOUND);
                Err(StoreError::NotFound(id))
            }
        }
    }

    /// Snapshot of every stored user, ordered by id.
    pub fn get_all(&self) -> Vec<User> {
        let mut users: Vec<User> = self.records.iter().map(|r| r.value().clone()).collect();
        users.sort_unstable_by_key(|u| u.id);
        tracing::info!(total = users.len(), "listing users");
        users
    }

    /// Replace every field of user `id` with `draft`. The id is kept.
    ///
    /// Validation runs first, so an invalid draft fails with `InvalidInput`
    /// whether or not `id` exists.
    pub fn update(&self, id: UserId, draft: UserDraft) -> Result<User> {
        if let Err(v) = draft.validate() {
            tracing::warn!(id, reason = %v, "rejected invalid user on update");
            return Err(StoreError::InvalidInput(v));
        }

        let Some(mut slot) = self.records.get_mut(&id) else {
            tracing::warn!(id, "cannot update missing user");
            return Err(StoreError::NotFound(id));
        };
        let user = draft.into_user(id);
        *slot = user.clone();
        drop(slot);

        tracing::info!(id, "user updated");
        self.metrics.increment_counter(USERS_UPDATED);
        Ok(user)
    }

    pub fn delete(&self, id: UserId) -> Result<()> {
        if self.records.remove(&id).is_none() {
            tracing::warn!(id, "cannot delete missing user");
            return Err(StoreError::NotFound(id));
        }
        self.live.fetch_sub(1, Ordering::Relaxed);

        tracing::info!(id, "user deleted");
        self.metrics.increment_counter(USERS_DELETED);
        Ok(())
    }

    /// Users whose name contains `query`, ignoring case and Latin accents.
    /// An empty query returns everyone. Ordered by id.
    pub fn search_by_name(&self, query: &str) -> Vec<User> {
        tracing::info!(query, "searching users by name");
        let needle = search::fold(query);

        let mut users: Vec<User> = self
            .records
            .iter()
            .filter(|r| search::name_matches(&r.value().name, &needle))
            .map(|r| r.value().clone())
            .collect();
        users.sort_unstable_by_key(|u| u.id);
        users
    }

    /// Number of stored users (O(1)).
    pub fn len(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(Arc::new(NoopMetrics))
    }
}
