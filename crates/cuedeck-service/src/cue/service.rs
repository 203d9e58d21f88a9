//! Cue CRUD over the key-value store.
//!
//! The whole collection lives under one key as a JSON array. Mutations are
//! full read-modify-write cycles; a per-process write lock serializes them
//! so two concurrent writers in the same instance cannot lose each other's
//! updates. Cross-instance racing is out of scope (single-node deployment).

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use cuedeck_core::error::AppError;
use cuedeck_core::result::AppResult;
use cuedeck_core::traits::kv::KvStore;
use cuedeck_core::types::cue::{CreateCuePayload, Cue, UpdateCuePayload};

use cuedeck_store::keys::CUES_KEY;
use cuedeck_store::StoreManager;

/// Cue repository service.
#[derive(Debug, Clone)]
pub struct CueService {
    /// Backing store.
    store: StoreManager,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Arc<Mutex<()>>,
}

impl CueService {
    /// Create a new cue service over the given store.
    pub fn new(store: StoreManager) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Fetch the full cue collection. A missing key is an empty collection.
    pub async fn list(&self) -> AppResult<Vec<Cue>> {
        let cues: Option<Vec<Cue>> = self.store.get_json(CUES_KEY).await?;
        Ok(cues.unwrap_or_default())
    }

    /// Persist the full cue collection.
    async fn save_all(&self, cues: &[Cue]) -> AppResult<()> {
        self.store.set_json(CUES_KEY, &cues).await
    }

    /// Create a cue with a server-assigned id and append it to the
    /// collection.
    pub async fn create(&self, payload: CreateCuePayload) -> AppResult<Cue> {
        let _guard = self.write_lock.lock().await;

        let mut cues = self.list().await?;
        let cue = Cue::from_payload(payload);
        cues.push(cue.clone());
        self.save_all(&cues).await?;

        info!(cue_id = %cue.id, name = %cue.name, "Cue created");
        Ok(cue)
    }

    /// Update an existing cue in place. Fails with NotFound if no cue has
    /// the given id; the collection is left unchanged in that case.
    pub async fn update(&self, cue_id: &str, payload: UpdateCuePayload) -> AppResult<Cue> {
        let _guard = self.write_lock.lock().await;

        let mut cues = self.list().await?;
        let target = cues
            .iter_mut()
            .find(|cue| cue.id == cue_id)
            .ok_or_else(|| AppError::not_found("Cue not found"))?;

        target.name = payload.name;
        target.kind = payload.kind;
        target.value = payload.value;
        let updated = target.clone();

        self.save_all(&cues).await?;

        info!(cue_id = %cue_id, "Cue updated");
        Ok(updated)
    }

    /// Delete a cue by id. Fails with NotFound if no cue has the given id;
    /// the collection is left unchanged in that case.
    pub async fn delete(&self, cue_id: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut cues = self.list().await?;
        let before = cues.len();
        cues.retain(|cue| cue.id != cue_id);

        if cues.len() == before {
            return Err(AppError::not_found("Cue not found"));
        }

        self.save_all(&cues).await?;

        info!(cue_id = %cue_id, "Cue deleted");
        Ok(())
    }
}
