//! Post repository
//!
//! Edit and delete are gated on authorship: the supplied actor id must
//! match the stored author or the mutation is rejected, inside the
//! operation itself rather than left to the caller.

use tracing::instrument;

use community_core::entities::{Post, PostPatch};
use community_core::error::{DomainError, DomainResult};
use community_core::StorageAdapterExt;

use crate::{keys, SharedAdapter};

/// Repository for `Post` rows
#[derive(Clone)]
pub struct PostRepository {
    adapter: SharedAdapter,
}

impl PostRepository {
    /// Create a new PostRepository
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    fn load(&self) -> DomainResult<Vec<Post>> {
        self.adapter.read_collection(keys::POSTS)
    }

    fn store(&self, rows: &[Post]) -> DomainResult<()> {
        self.adapter.write_collection(keys::POSTS, rows)
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> DomainResult<Vec<Post>> {
        self.load()
    }

    #[instrument(skip(self))]
    pub fn find(&self, id: &str) -> DomainResult<Option<Post>> {
        Ok(self.load()?.into_iter().find(|p| p.id == id))
    }

    #[instrument(skip(self))]
    pub fn list_by_author(&self, author_id: &str) -> DomainResult<Vec<Post>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|p| p.author_id == author_id)
            .collect())
    }

    #[instrument(skip(self, post))]
    pub fn add(&self, post: Post) -> DomainResult<()> {
        let mut rows = self.load()?;
        rows.push(post);
        self.store(&rows)
    }

    #[instrument(skip(self, patch))]
    pub fn update(&self, id: &str, actor_id: &str, patch: PostPatch) -> DomainResult<Post> {
        let mut rows = self.load()?;
        let post = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::PostNotFound(id.to_string()))?;
        if !post.is_authored_by(actor_id) {
            return Err(DomainError::NotAuthor);
        }
        post.apply(patch);
        let updated = post.clone();
        self.store(&rows)?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn remove(&self, id: &str, actor_id: &str) -> DomainResult<()> {
        let mut rows = self.load()?;
        let Some(index) = rows.iter().position(|p| p.id == id) else {
            return Err(DomainError::PostNotFound(id.to_string()));
        };
        if !rows[index].is_authored_by(actor_id) {
            return Err(DomainError::NotAuthor);
        }
        rows.remove(index);
        self.store(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryAdapter;
    use std::sync::Arc;

    fn repo() -> PostRepository {
        let repo = PostRepository::new(Arc::new(MemoryAdapter::new()));
        repo.add(Post::new("p1", "u1", "hello")).unwrap();
        repo
    }

    #[test]
    fn test_author_can_edit() {
        let repo = repo();
        let updated = repo
            .update(
                "p1",
                "u1",
                PostPatch {
                    body: Some("edited".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.body, "edited");
    }

    #[test]
    fn test_non_author_is_rejected() {
        let repo = repo();
        let err = repo.update("p1", "u2", PostPatch::default()).unwrap_err();
        assert!(matches!(err, DomainError::NotAuthor));

        let err = repo.remove("p1", "u2").unwrap_err();
        assert!(err.is_forbidden());
        assert!(repo.find("p1").unwrap().is_some());
    }

    #[test]
    fn test_author_can_remove() {
        let repo = repo();
        repo.remove("p1", "u1").unwrap();
        assert!(repo.find("p1").unwrap().is_none());
    }
}
