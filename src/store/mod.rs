// ABOUTME: Storage-agnostic repository interface for the profile and plan cache
// ABOUTME: Async ProfileStore trait with an in-memory reference implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! # Profile Repository
//!
//! The planning core is storage-agnostic: callers hand it a
//! [`ProfileStore`] and the core never assumes where records live. The
//! store holds the single user profile and a keyed diet-plan cache.
//!
//! Cache semantics mirror the product behavior: a generated diet plan is
//! cached under the composite key `{country}:{goal}:{diet-preference}`;
//! changing the profile invalidates the cache, and entries never expire
//! by age.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::{DietPlan, UserProfile};

/// A persisted profile record
#[derive(Debug, Clone, PartialEq)]
pub struct StoredProfile {
    /// Stable record identity, assigned on first save
    pub id: Uuid,
    /// The profile payload
    pub profile: UserProfile,
    /// Last save time
    pub updated_at: DateTime<Utc>,
}

/// A cached diet plan with its generation stamp
#[derive(Debug, Clone, PartialEq)]
pub struct CachedDietPlan {
    /// Composite cache key the plan was generated for
    pub key: String,
    /// The plan payload
    pub plan: DietPlan,
    /// Generation time
    pub cached_at: DateTime<Utc>,
}

/// Composite cache key for a profile's diet plan
///
/// Only the fields that shape the plan participate; biometric-only edits
/// produce the same key.
#[must_use]
pub fn diet_cache_key(profile: &UserProfile) -> String {
    format!(
        "{}:{}:{}",
        profile.country,
        profile.goal.label(),
        profile.diet_preference.label()
    )
}

/// Repository contract for profile and plan-cache persistence
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Save (create or replace) the user profile
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backing store fails.
    async fn save_profile(&self, profile: UserProfile) -> AppResult<StoredProfile>;

    /// Load the stored profile, if any
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backing store fails.
    async fn load_profile(&self) -> AppResult<Option<StoredProfile>>;

    /// Cache a diet plan under its composite key
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backing store fails.
    async fn save_diet_plan(&self, key: &str, plan: DietPlan) -> AppResult<()>;

    /// Load the cached diet plan for a key, if present
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backing store fails.
    async fn load_diet_plan(&self, key: &str) -> AppResult<Option<CachedDietPlan>>;

    /// Drop all cached diet plans (profile changed)
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backing store fails.
    async fn invalidate_diet_plans(&self) -> AppResult<()>;

    /// Full reset: drop the profile and every cached plan
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backing store fails.
    async fn clear(&self) -> AppResult<()>;
}

#[async_trait]
impl<T> ProfileStore for &T
where
    T: ProfileStore + ?Sized,
{
    async fn save_profile(&self, profile: UserProfile) -> AppResult<StoredProfile> {
        (**self).save_profile(profile).await
    }

    async fn load_profile(&self) -> AppResult<Option<StoredProfile>> {
        (**self).load_profile().await
    }

    async fn save_diet_plan(&self, key: &str, plan: DietPlan) -> AppResult<()> {
        (**self).save_diet_plan(key, plan).await
    }

    async fn load_diet_plan(&self, key: &str) -> AppResult<Option<CachedDietPlan>> {
        (**self).load_diet_plan(key).await
    }

    async fn invalidate_diet_plans(&self) -> AppResult<()> {
        (**self).invalidate_diet_plans().await
    }

    async fn clear(&self) -> AppResult<()> {
        (**self).clear().await
    }
}

#[async_trait]
impl<T> ProfileStore for std::sync::Arc<T>
where
    T: ProfileStore + ?Sized,
{
    async fn save_profile(&self, profile: UserProfile) -> AppResult<StoredProfile> {
        (**self).save_profile(profile).await
    }

    async fn load_profile(&self) -> AppResult<Option<StoredProfile>> {
        (**self).load_profile().await
    }

    async fn save_diet_plan(&self, key: &str, plan: DietPlan) -> AppResult<()> {
        (**self).save_diet_plan(key, plan).await
    }

    async fn load_diet_plan(&self, key: &str) -> AppResult<Option<CachedDietPlan>> {
        (**self).load_diet_plan(key).await
    }

    async fn invalidate_diet_plans(&self) -> AppResult<()> {
        (**self).invalidate_diet_plans().await
    }

    async fn clear(&self) -> AppResult<()> {
        (**self).clear().await
    }
}

/// In-memory reference implementation of [`ProfileStore`]
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profile: RwLock<Option<StoredProfile>>,
    plans: DashMap<String, CachedDietPlan>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn save_profile(&self, profile: UserProfile) -> AppResult<StoredProfile> {
        let mut slot = self.profile.write().await;
        // Keep the record identity stable across updates
        let id = slot.as_ref().map_or_else(Uuid::new_v4, |stored| stored.id);
        let stored = StoredProfile {
            id,
            profile,
            updated_at: Utc::now(),
        };
        *slot = Some(stored.clone());
        Ok(stored)
    }

    async fn load_profile(&self) -> AppResult<Option<StoredProfile>> {
        Ok(self.profile.read().await.clone())
    }

    async fn save_diet_plan(&self, key: &str, plan: DietPlan) -> AppResult<()> {
        self.plans.insert(
            key.to_owned(),
            CachedDietPlan {
                key: key.to_owned(),
                plan,
                cached_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn load_diet_plan(&self, key: &str) -> AppResult<Option<CachedDietPlan>> {
        Ok(self.plans.get(key).map(|entry| entry.value().clone()))
    }

    async fn invalidate_diet_plans(&self) -> AppResult<()> {
        self.plans.clear();
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        self.plans.clear();
        *self.profile.write().await = None;
        Ok(())
    }
}
