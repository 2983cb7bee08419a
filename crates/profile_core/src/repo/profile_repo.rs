//! Profile repository over a [`LocalStore`].
//!
//! # Invariants
//! - Ids are unique within the collection for its whole lifetime.
//! - `created_at` is written once; `updated_at` is bumped on every update.
//! - Insertion order is the collection order.

use crate::clock::Clock;
use crate::model::profile::{Feeling, Profile, ProfileFormData, ProfileId};
use crate::observer::{Observers, SubscriptionId};
use crate::search::query::{filter_profiles, search_profiles, ProfileQuery};
use crate::search::stats::ProfileStats;
use crate::store::{KeyValueStore, LocalStore, StoreResult};
use log::{debug, error, info};
use std::rc::Rc;

/// Change emitted after a committed mutation.
///
/// Added and updated records travel with the event, so listeners never need
/// to read back through the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileChange {
    Added(Profile),
    Updated(Profile),
    Removed(ProfileId),
}

pub struct ProfileRepository<K: KeyValueStore> {
    store: LocalStore<K>,
    clock: Rc<dyn Clock>,
    profiles: Vec<Profile>,
    observers: Observers<ProfileChange>,
}

impl<K: KeyValueStore> ProfileRepository<K> {
    /// Loads the stored collection; corrupt or missing data starts empty.
    pub fn load(store: LocalStore<K>, clock: Rc<dyn Clock>) -> Self {
        let profiles = store.load_profiles();
        info!(
            "event=profiles_load module=repo status=ok count={}",
            profiles.len()
        );
        Self {
            store,
            clock,
            profiles,
            observers: Observers::new(),
        }
    }

    /// Creates a profile with a fresh id and `created_at == updated_at == now`.
    ///
    /// The form is expected to have been validated by the caller.
    pub fn add(&mut self, data: ProfileFormData) -> StoreResult<Profile> {
        let profile = Profile::from_form(self.fresh_id(), data, self.clock.now());
        self.profiles.push(profile.clone());

        if let Err(err) = self.persist("profile_add") {
            self.profiles.pop();
            return Err(err);
        }

        debug!(
            "event=profile_add module=repo status=ok count={}",
            self.profiles.len()
        );
        self.observers.notify(&ProfileChange::Added(profile.clone()));
        Ok(profile)
    }

    /// Replaces every editable field of `id` and bumps `updated_at`.
    ///
    /// An unknown id is ignored.
    pub fn update(&mut self, id: &ProfileId, data: ProfileFormData) -> StoreResult<()> {
        let Some(index) = self.position(id) else {
            debug!("event=profile_update module=repo status=skipped reason=not_found");
            return Ok(());
        };

        let now = self.clock.now();
        let previous = self.profiles[index].clone();
        self.profiles[index].apply_form(data, now);

        if let Err(err) = self.persist("profile_update") {
            self.profiles[index] = previous;
            return Err(err);
        }

        let updated = self.profiles[index].clone();
        self.observers.notify(&ProfileChange::Updated(updated));
        Ok(())
    }

    /// Deletes `id`. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: &ProfileId) -> StoreResult<()> {
        let Some(index) = self.position(id) else {
            debug!("event=profile_remove module=repo status=skipped reason=not_found");
            return Ok(());
        };

        let removed = self.profiles.remove(index);
        if let Err(err) = self.persist("profile_remove") {
            self.profiles.insert(index, removed);
            return Err(err);
        }

        self.observers.notify(&ProfileChange::Removed(removed.id));
        Ok(())
    }

    pub fn get(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|profile| &profile.id == id)
    }

    /// Current collection in insertion order.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// See [`search_profiles`].
    pub fn search(&self, query: &str) -> Vec<Profile> {
        search_profiles(&self.profiles, query)
    }

    /// See [`filter_profiles`].
    pub fn filter(&self, feeling: Option<Feeling>, min_rating: Option<u8>) -> Vec<Profile> {
        filter_profiles(&self.profiles, feeling, min_rating)
    }

    pub fn query(&self, query: &ProfileQuery) -> Vec<Profile> {
        query.apply(&self.profiles)
    }

    pub fn stats(&self) -> ProfileStats {
        ProfileStats::collect(&self.profiles)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ProfileChange) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn position(&self, id: &ProfileId) -> Option<usize> {
        self.profiles.iter().position(|profile| &profile.id == id)
    }

    fn fresh_id(&self) -> ProfileId {
        loop {
            let id = ProfileId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&self, event: &str) -> StoreResult<()> {
        self.store.save_profiles(&self.profiles).map_err(|err| {
            error!(
                "event={event} module=repo status=error error_code=persist_failed error={err}"
            );
            err
        })
    }
}
