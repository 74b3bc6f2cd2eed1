//! JSON-file profile store.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use draft_core::{ConversationTurn, PriorDraftSummary, UserProfile};

use crate::error::Result;

/// On-disk shape of the store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProfileCollection {
    #[serde(default)]
    profiles: Vec<UserProfile>,
}

/// Stores user profiles in a single JSON file.
///
/// Every mutation reads the whole file, edits it in memory and writes
/// it back. Unknown user ids get a fresh profile on first append.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Create a store backed by the given file path. The file is
    /// created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<ProfileCollection> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(ProfileCollection::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write_all(&self, collection: &ProfileCollection) -> Result<()> {
        let contents = serde_json::to_string_pretty(collection)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, contents).await?;
        debug!("Wrote {} profiles to {}", collection.profiles.len(), self.path.display());
        Ok(())
    }

    /// Load one profile, or `None` when the user is unknown.
    pub async fn load(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let collection = self.read_all().await?;
        Ok(collection.profiles.into_iter().find(|p| p.id == user_id))
    }

    /// Insert or replace a profile by id.
    pub async fn save(&self, profile: UserProfile) -> Result<()> {
        let mut collection = self.read_all().await?;
        match collection.profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile,
            None => collection.profiles.push(profile),
        }
        self.write_all(&collection).await
    }

    /// Append a draft summary to a user's history, creating the profile
    /// when the id is unknown. History bounds are enforced by the
    /// profile itself.
    pub async fn append_draft(
        &self,
        user_id: &str,
        subject: &str,
        intent: &str,
        tone: &str,
    ) -> Result<()> {
        let mut collection = self.read_all().await?;
        let profile = find_or_create(&mut collection, user_id);
        profile.push_draft(PriorDraftSummary {
            subject: subject.to_string(),
            intent: intent.to_string(),
            tone: tone.to_string(),
        });
        self.write_all(&collection).await
    }

    /// Append a full exchange to a user's conversation history,
    /// creating the profile when the id is unknown.
    pub async fn append_conversation(
        &self,
        user_id: &str,
        prompt: &str,
        subject: &str,
        body: &str,
        intent: &str,
        tone: &str,
    ) -> Result<()> {
        let mut collection = self.read_all().await?;
        let profile = find_or_create(&mut collection, user_id);
        profile.push_conversation(ConversationTurn {
            prompt: prompt.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            intent: intent.to_string(),
            tone: tone.to_string(),
        });
        self.write_all(&collection).await
    }

    /// Clear both history sequences for a user. A no-op when the user
    /// has no profile.
    pub async fn clear_history(&self, user_id: &str) -> Result<()> {
        let mut collection = self.read_all().await?;
        let Some(profile) = collection.profiles.iter_mut().find(|p| p.id == user_id) else {
            return Ok(());
        };
        profile.clear_history();
        self.write_all(&collection).await
    }
}

fn find_or_create<'a>(
    collection: &'a mut ProfileCollection,
    user_id: &str,
) -> &'a mut UserProfile {
    let idx = match collection.profiles.iter().position(|p| p.id == user_id) {
        Some(idx) => idx,
        None => {
            collection.profiles.push(UserProfile::new(user_id));
            collection.profiles.len() - 1
        }
    };
    &mut collection.profiles[idx]
}

#[cfg(test)]
mod tests {
    use super::*;
    use draft_core::{MAX_CONVERSATION_TURNS, MAX_PRIOR_DRAFTS};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ProfileStore {
        ProfileStore::new(dir.path().join("profiles.json"))
    }

    #[tokio::test]
    async fn test_load_missing_user_is_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.load("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut profile = UserProfile::new("u1");
        profile.name = Some("Charlie".to_string());
        profile.company = Some("Acme".to_string());
        store.save(profile.clone()).await.unwrap();

        let loaded = store.load("u1").await.unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[tokio::test]
    async fn test_save_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(UserProfile::new("u1")).await.unwrap();

        let mut updated = UserProfile::new("u1");
        updated.name = Some("Charlie".to_string());
        store.save(updated).await.unwrap();

        let loaded = store.load("u1").await.unwrap().unwrap();
        assert_eq!(loaded.name.as_deref(), Some("Charlie"));
    }

    #[tokio::test]
    async fn test_append_draft_creates_profile() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .append_draft("u1", "Q3 report", "info_request", "formal")
            .await
            .unwrap();

        let loaded = store.load("u1").await.unwrap().unwrap();
        assert_eq!(loaded.prior_drafts.len(), 1);
        assert_eq!(loaded.prior_drafts[0].subject, "Q3 report");
        assert_eq!(loaded.prior_drafts[0].intent, "info_request");
    }

    #[tokio::test]
    async fn test_prior_drafts_bounded_across_appends() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        for i in 0..25 {
            store
                .append_draft("u1", &format!("draft {i}"), "other", "professional")
                .await
                .unwrap();
        }

        let loaded = store.load("u1").await.unwrap().unwrap();
        assert_eq!(loaded.prior_drafts.len(), MAX_PRIOR_DRAFTS);
        assert_eq!(loaded.prior_drafts[0].subject, "draft 5");
        assert_eq!(loaded.prior_drafts.last().unwrap().subject, "draft 24");
    }

    #[tokio::test]
    async fn test_conversation_history_bounded_across_appends() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        for i in 0..15 {
            store
                .append_conversation(
                    "u1",
                    &format!("prompt {i}"),
                    "Subject",
                    "Body",
                    "other",
                    "professional",
                )
                .await
                .unwrap();
        }

        let loaded = store.load("u1").await.unwrap().unwrap();
        assert_eq!(loaded.conversation_history.len(), MAX_CONVERSATION_TURNS);
        assert_eq!(loaded.conversation_history[0].prompt, "prompt 5");
        assert_eq!(
            loaded.conversation_history.last().unwrap().prompt,
            "prompt 14"
        );
    }

    #[tokio::test]
    async fn test_appends_preserve_other_profiles() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut other = UserProfile::new("u2");
        other.name = Some("Dana".to_string());
        store.save(other).await.unwrap();

        store
            .append_draft("u1", "Hello", "outreach", "casual")
            .await
            .unwrap();

        let loaded = store.load("u2").await.unwrap().unwrap();
        assert_eq!(loaded.name.as_deref(), Some("Dana"));
    }

    #[tokio::test]
    async fn test_clear_history_keeps_preferences() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut profile = UserProfile::new("u1");
        profile.name = Some("Charlie".to_string());
        store.save(profile).await.unwrap();
        store
            .append_draft("u1", "Hello", "outreach", "casual")
            .await
            .unwrap();
        store
            .append_conversation("u1", "p", "s", "b", "outreach", "casual")
            .await
            .unwrap();

        store.clear_history("u1").await.unwrap();

        let loaded = store.load("u1").await.unwrap().unwrap();
        assert_eq!(loaded.name.as_deref(), Some("Charlie"));
        assert!(loaded.prior_drafts.is_empty());
        assert!(loaded.conversation_history.is_empty());
    }

    #[tokio::test]
    async fn test_clear_history_unknown_user_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.clear_history("nobody").await.unwrap();
        assert!(!store.path().exists());
    }
}
