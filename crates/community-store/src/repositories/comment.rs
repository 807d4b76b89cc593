//! Comment repository
//!
//! Same authorship gate as posts: edit/delete with a mismatched actor id
//! is rejected inside the operation.

use tracing::instrument;

use community_core::entities::{Comment, CommentPatch};
use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapterExt;

use crate::{keys, SharedAdapter};

/// Repository for `Comment` rows
#[derive(Clone)]
pub struct CommentRepository {
    adapter: SharedAdapter,
}

impl CommentRepository {
    /// Create a new CommentRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<Comment>> {
        self.adapter.read_collection(keys::COMMENTS)
    }

    fn store(&self, rows: &[Comment]) -> DomainResult<()> {
        self.adapter.write_collection(keys::COMMENTS, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<Comment>> {
        self.load()
    }

    #[instrument(skip(self))]
    pub fn find(&self, id: &str) -> DomainResult<Option<Comment>> {
        Ok(self.load()?.into_iter().find(|c| c.id == id))
    }

    #[instrument(skip(self))]
    pub fn list_by_post(&self, post_id: &str) -> DomainResult<Vec<Comment>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|c| c.post_id == post_id)
            .collect())
    }

    #[instrument(skip(self, comment))]
    pub fn add(&self, comment: Comment) -> DomainResult<()> {
        let mut rows = self.load()?;
        rows.push(comment);
        self.store(&rows)
    }

    #[instrument(skip(self, patch))]
    pub fn update(&self, id: &str, actor_id: &str, patch: CommentPatch) -> DomainResult<Comment> {
        let mut rows = self.load()?;
        let comment = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::CommentNotFound(id.to_string()))?;
        if !comment.is_authored_by(actor_id) {
            return Err(DomainError::NotAuthor);
        }
        comment.apply(patch);
        let updated = comment.clone();
        self.store(&rows)?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn remove(&self, id: &str, actor_id: &str) -> DomainResult<()> {
        let mut rows = self.load()?;
        let Some(index) = rows.iter().position(|c| c.id == id) else {
            return Err(DomainError::CommentNotFound(id.to_string()));
        };
        if !rows[index].is_authored_by(actor_id) {
            return Err(DomainError::NotAuthor);
        }
        rows.remove(index);
        self.store(&rows)
    }
}
