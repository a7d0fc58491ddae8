//! User profile kept as JSON on the device.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::storage::{KeyValueStore, keys};

/// Personal details shown on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Postal address.
    pub address: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+1 234 567 8900".to_string(),
            address: "123 Main St, City, Country".to_string(),
        }
    }
}

impl UserProfile {
    /// First and last name joined.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns a copy with the present fields of `update` applied.
    #[must_use]
    pub fn merged(&self, update: ProfileUpdate) -> Self {
        Self {
            first_name: update.first_name.unwrap_or_else(|| self.first_name.clone()),
            last_name: update.last_name.unwrap_or_else(|| self.last_name.clone()),
            email: update.email.unwrap_or_else(|| self.email.clone()),
            phone: update.phone.unwrap_or_else(|| self.phone.clone()),
            address: update.address.unwrap_or_else(|| self.address.clone()),
        }
    }
}

/// Partial profile edit; `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New postal address.
    pub address: Option<String>,
}

/// Loads and saves the [`UserProfile`] under the `userData` key.
pub struct ProfileStore<S: KeyValueStore> {
    store: Arc<S>,
    profile: UserProfile,
}

impl<S: KeyValueStore> ProfileStore<S> {
    /// Loads the saved profile, falling back to the placeholder profile.
    pub async fn load(store: Arc<S>) -> Self {
        let profile = match store.get(keys::USER_DATA).await {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "Ignoring corrupt saved profile");
                UserProfile::default()
            }),
            Ok(None) => UserProfile::default(),
            Err(e) => {
                error!(key = keys::USER_DATA, error = %e, "Failed to load profile");
                UserProfile::default()
            }
        };
        Self { store, profile }
    }

    /// The current profile.
    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Applies `update` and saves the result.
    ///
    /// The profile only changes once the save succeeds; failures are logged.
    pub async fn update(&mut self, update: ProfileUpdate) -> &UserProfile {
        let merged = self.profile.merged(update);
        let saved = match serde_json::to_string(&merged) {
            Ok(json) => self
                .store
                .set(keys::USER_DATA, &json)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match saved {
            Ok(()) => {
                self.profile = merged;
                info!("Profile updated");
            }
            Err(e) => error!(key = keys::USER_DATA, error = %e, "Failed to save profile"),
        }
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::KvStore;
    use crate::storage::testing::FlakyStore;

    #[tokio::test]
    async fn test_placeholder_profile_on_first_run() {
        let profiles = ProfileStore::load(Arc::new(KvStore::memory().unwrap())).await;
        assert_eq!(profiles.profile(), &UserProfile::default());
        assert_eq!(profiles.profile().full_name(), "John Doe");
    }

    #[tokio::test]
    async fn test_update_merges_and_persists() {
        let store = Arc::new(KvStore::memory().unwrap());
        let mut profiles = ProfileStore::load(Arc::clone(&store)).await;

        let updated = profiles
            .update(ProfileUpdate {
                first_name: Some("Asha".to_string()),
                phone: Some("+91 98765 43210".to_string()),
                ..ProfileUpdate::default()
            })
            .await
            .clone();
        assert_eq!(updated.first_name, "Asha");
        assert_eq!(updated.last_name, "Doe");
        assert_eq!(updated.phone, "+91 98765 43210");

        let raw = store.get(keys::USER_DATA).await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["firstName"], "Asha");

        let reloaded = ProfileStore::load(store).await;
        assert_eq!(reloaded.profile(), &updated);
    }

    #[tokio::test]
    async fn test_corrupt_json_falls_back_to_default() {
        let store = Arc::new(KvStore::memory().unwrap());
        store.set(keys::USER_DATA, "{not json").await.unwrap();
        let profiles = ProfileStore::load(store).await;
        assert_eq!(profiles.profile(), &UserProfile::default());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_previous_profile() {
        let store = Arc::new(FlakyStore::new());
        let mut profiles = ProfileStore::load(Arc::clone(&store)).await;
        store.fail_writes(true);

        let profile = profiles
            .update(ProfileUpdate {
                email: Some("asha@example.com".to_string()),
                ..ProfileUpdate::default()
            })
            .await;
        assert_eq!(profile.email, "john.doe@example.com");
    }

    #[test]
    fn test_update_deserializes_partial_json() {
        let update: ProfileUpdate = serde_json::from_str(r#"{"lastName":"Rao"}"#).unwrap();
        assert_eq!(update.last_name.as_deref(), Some("Rao"));
        assert!(update.first_name.is_none());
    }
}
