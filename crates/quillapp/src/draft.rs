//! # Draft Buffer
//!
//! Autosave/restore of an in-progress editor form. Drafts are keyed per
//! entity: a brand-new post uses the `postDraft` slot, an existing post uses
//! `postDraft-<id>`. Keying by entity means a draft abandoned while editing
//! post A can never populate the editor opened for post B, since the editor
//! only ever restores its own slot. A successful commit clears the slot it
//! came from.

use crate::error::Result;
use crate::keys;
use crate::model::PostInput;
use crate::store::KvBackend;

/// Which draft slot an editor session owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftSlot {
    /// Creating a post that has no id yet.
    New,
    /// Editing an existing post.
    Post(u64),
}

impl DraftSlot {
    fn key(&self) -> String {
        match self {
            DraftSlot::New => keys::DRAFT.to_string(),
            DraftSlot::Post(id) => keys::draft(*id),
        }
    }
}

/// Keyed table view over the shared backend. Construct one on demand via
/// [`crate::api::BlogApi::drafts`].
pub struct DraftTable<'a, B: KvBackend> {
    backend: &'a B,
}

impl<'a, B: KvBackend> DraftTable<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Overwrite the slot's draft. Saving is unconditional: the buffer holds
    /// at most one draft per slot.
    pub fn save(&self, slot: DraftSlot, input: &PostInput) -> Result<()> {
        let document = serde_json::to_string(input)?;
        self.backend.write(&slot.key(), &document)
    }

    /// Restore the slot's draft, if any. An unsaved draft takes precedence
    /// over the stored post when opening an editor; a malformed draft is
    /// logged and discarded.
    pub fn load(&self, slot: DraftSlot) -> Result<Option<PostInput>> {
        match self.backend.read(&slot.key())? {
            None => Ok(None),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(input) => Ok(Some(input)),
                Err(err) => {
                    log::warn!("draft in slot {:?} is malformed ({}), discarding", slot, err);
                    Ok(None)
                }
            },
        }
    }

    /// Clear the slot, called on successful commit (or explicit discard).
    pub fn clear(&self, slot: DraftSlot) -> Result<()> {
        self.backend.remove(&slot.key())
    }
}
