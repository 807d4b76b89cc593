//! Content service
//!
//! Post and comment flows. Ownership enforcement lives in the
//! repositories; this layer adds validation, id generation, and the
//! cache-invalidation hook after post mutations.

use tracing::{info, instrument};
use validator::Validate;

use community_core::entities::{CommentPatch, PostPatch};
use community_core::{Comment, Post};

use crate::dto::{CreateCommentRequest, CreatePostRequest};

use super::context::StoreContext;
use super::error::{ServiceError, ServiceResult};

/// Content service for posts and comments
pub struct ContentService<'a> {
    ctx: &'a StoreContext,
}

impl<'a> ContentService<'a> {
    /// Create a new ContentService
    pub fn new(ctx: &'a StoreContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request))]
    pub fn create_post(&self, request: CreatePostRequest) -> ServiceResult<Post> {
        request.validate()?;

        let mut post = Post::new(self.ctx.generate_id(), &request.author_id, &request.body);
        post.pet_id = request.pet_id;
        post.tags = request.tags;

        self.ctx.posts().add(post.clone())?;
        self.ctx.notify_invalidation();
        info!(post_id = %post.id, author_id = %post.author_id, "post created");
        Ok(post)
    }

    /// Edit a post; rejected unless `actor_id` is the author
    #[instrument(skip(self, patch))]
    pub fn edit_post(&self, post_id: &str, actor_id: &str, patch: PostPatch) -> ServiceResult<Post> {
        let updated = self.ctx.posts().update(post_id, actor_id, patch)?;
        self.ctx.notify_invalidation();
        info!(post_id, "post edited");
        Ok(updated)
    }

    /// Delete a post; rejected unless `actor_id` is the author
    #[instrument(skip(self))]
    pub fn delete_post(&self, post_id: &str, actor_id: &str) -> ServiceResult<()> {
        self.ctx.posts().remove(post_id, actor_id)?;
        self.ctx.notify_invalidation();
        info!(post_id, "post deleted");
        Ok(())
    }

    #[instrument(skip(self, request))]
    pub fn create_comment(&self, request: CreateCommentRequest) -> ServiceResult<Comment> {
        request.validate()?;

        self.ctx
            .posts()
            .find(&request.post_id)?
            .ok_or_else(|| ServiceError::not_found("Post", request.post_id.clone()))?;

        let comment = Comment::new(
            self.ctx.generate_id(),
            &request.post_id,
            &request.author_id,
            &request.body,
        );
        self.ctx.comments().add(comment.clone())?;
        info!(comment_id = %comment.id, post_id = %comment.post_id, "comment created");
        Ok(comment)
    }

    /// Edit a comment; rejected unless `actor_id` is the author
    #[instrument(skip(self, patch))]
    pub fn edit_comment(
        &self,
        comment_id: &str,
        actor_id: &str,
        patch: CommentPatch,
    ) -> ServiceResult<Comment> {
        Ok(self.ctx.comments().update(comment_id, actor_id, patch)?)
    }

    /// Delete a comment; rejected unless `actor_id` is the author
    #[instrument(skip(self))]
    pub fn delete_comment(&self, comment_id: &str, actor_id: &str) -> ServiceResult<()> {
        Ok(self.ctx.comments().remove(comment_id, actor_id)?)
    }
}
