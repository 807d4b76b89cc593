//! Group service
//!
//! Group lifecycle and group-content creation flows. The creator becomes
//! the owner member as part of group creation. The cache-invalidation
//! hook fires after every group mutation.

use tracing::{info, instrument};
use validator::Validate;

use community_core::entities::GroupPatch;
use community_core::{
    Group, GroupActivity, GroupMember, GroupResource, GroupRole, GroupTopic,
};

use crate::dto::{is_valid_slug, CreateGroupRequest, CreateResourceRequest, CreateTopicRequest};

use super::context::StoreContext;
use super::error::{ServiceError, ServiceResult};

/// Group service
pub struct GroupService<'a> {
    ctx: &'a StoreContext,
}

impl<'a> GroupService<'a> {
    /// Create a new GroupService
    pub fn new(ctx: &'a StoreContext) -> Self {
        Self { ctx }
    }

    /// Create a group; the creator joins as owner
    #[instrument(skip(self, request))]
    pub fn create_group(&self, request: CreateGroupRequest) -> ServiceResult<Group> {
        request.validate()?;
        if !is_valid_slug(&request.slug) {
            return Err(ServiceError::validation(
                "slug must be lowercase alphanumerics and hyphens",
            ));
        }

        let mut group = Group::new(
            self.ctx.generate_id(),
            &request.slug,
            &request.name,
            &request.category_id,
            request.group_type,
        );
        group.description = request.description.unwrap_or_default();
        group.tags = request.tags;

        // Duplicate slug surfaces as a conflict from the repository
        self.ctx.groups().add(group.clone())?;

        self.ctx.members().add(GroupMember::new(
            self.ctx.generate_id(),
            &group.id,
            &request.owner_id,
            GroupRole::Owner,
        ))?;

        self.ctx.activities().record(
            GroupActivity::new(self.ctx.generate_id(), &group.id, "group_created")
                .with_actor(&request.owner_id),
        )?;

        self.ctx.notify_invalidation();
        info!(group_id = %group.id, slug = %group.slug, "group created");

        // Membership bumped the stored counter after our snapshot
        self.ctx
            .groups()
            .find(&group.id)?
            .ok_or_else(|| ServiceError::internal("group vanished during creation"))
    }

    /// Update group fields; derived counters are not patchable
    #[instrument(skip(self, patch))]
    pub fn update_group(&self, group_id: &str, patch: GroupPatch) -> ServiceResult<Group> {
        let updated = self.ctx.groups().update(group_id, patch)?;
        self.ctx.notify_invalidation();
        info!(group_id, "group updated");
        Ok(updated)
    }

    /// Delete the group row only; dependent rows are not cascade-deleted
    #[instrument(skip(self))]
    pub fn delete_group(&self, group_id: &str) -> ServiceResult<()> {
        self.ctx.groups().remove(group_id)?;
        self.ctx.notify_invalidation();
        info!(group_id, "group deleted");
        Ok(())
    }

    /// Create a topic (or a reply, when `parent_topic_id` is set)
    #[instrument(skip(self, request))]
    pub fn create_topic(&self, request: CreateTopicRequest) -> ServiceResult<GroupTopic> {
        request.validate()?;

        self.ctx
            .groups()
            .find(&request.group_id)?
            .ok_or_else(|| ServiceError::not_found("Group", request.group_id.clone()))?;

        if let Some(parent_id) = &request.parent_topic_id {
            self.ctx
                .topics()
                .find(parent_id)?
                .ok_or_else(|| ServiceError::not_found("Topic", parent_id.clone()))?;
        }

        let mut topic = GroupTopic::new(
            self.ctx.generate_id(),
            &request.group_id,
            &request.author_id,
            &request.title,
            &request.body,
        );
        topic.parent_topic_id = request.parent_topic_id;

        self.ctx.topics().add(topic.clone())?;

        self.ctx.activities().record(
            GroupActivity::new(self.ctx.generate_id(), &request.group_id, "topic_created")
                .with_actor(&request.author_id)
                .with_detail(&request.title),
        )?;

        self.ctx.notify_invalidation();
        info!(topic_id = %topic.id, group_id = %topic.group_id, "topic created");
        Ok(topic)
    }

    /// Share a resource in a group
    #[instrument(skip(self, request))]
    pub fn create_resource(&self, request: CreateResourceRequest) -> ServiceResult<GroupResource> {
        request.validate()?;

        self.ctx
            .groups()
            .find(&request.group_id)?
            .ok_or_else(|| ServiceError::not_found("Group", request.group_id.clone()))?;

        let mut resource = GroupResource::new(
            self.ctx.generate_id(),
            &request.group_id,
            &request.author_id,
            &request.title,
        );
        resource.url = request.url;
        resource.body = request.body;

        self.ctx.resources().add(resource.clone())?;
        self.ctx.notify_invalidation();
        info!(resource_id = %resource.id, group_id = %resource.group_id, "resource shared");
        Ok(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use community_core::GroupType;
    use community_store::MemoryAdapter;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn create_request(slug: &str) -> CreateGroupRequest {
        CreateGroupRequest {
            slug: slug.to_string(),
            name: "Rust Pals".to_string(),
            description: Some("a cozy corner".to_string()),
            category_id: "c1".to_string(),
            group_type: GroupType::Open,
            tags: vec!["rust".to_string()],
            owner_id: "u1".to_string(),
        }
    }

    #[test]
    fn test_create_group_seeds_owner() {
        let ctx = StoreContext::new(Arc::new(MemoryAdapter::new()));
        let group = GroupService::new(&ctx).create_group(create_request("pals")).unwrap();

        assert_eq!(group.member_count, 1);
        let owner = ctx.members().find(&group.id, "u1").unwrap().unwrap();
        assert_eq!(owner.role, GroupRole::Owner);

        let feed = ctx.activities().list_by_group(&group.id).unwrap();
        assert!(feed.iter().any(|a| a.kind == "group_created"));
    }

    #[test]
    fn test_create_topic_bumps_count_and_validates_parent() {
        let ctx = StoreContext::new(Arc::new(MemoryAdapter::new()));
        let service = GroupService::new(&ctx);
        let group = service.create_group(create_request("pals")).unwrap();

        let topic = service
            .create_topic(CreateTopicRequest {
                group_id: group.id.clone(),
                author_id: "u1".to_string(),
                title: "Hello".to_string(),
                body: "first".to_string(),
                parent_topic_id: None,
            })
            .unwrap();
        assert_eq!(ctx.groups().find(&group.id).unwrap().unwrap().topic_count, 1);

        let err = service
            .create_topic(CreateTopicRequest {
                group_id: group.id.clone(),
                author_id: "u2".to_string(),
                title: "Re".to_string(),
                body: "reply".to_string(),
                parent_topic_id: Some("missing".to_string()),
            })
            .unwrap_err();
        assert!(err.is_not_found());

        service
            .create_topic(CreateTopicRequest {
                group_id: group.id.clone(),
                author_id: "u2".to_string(),
                title: "Re".to_string(),
                body: "reply".to_string(),
                parent_topic_id: Some(topic.id.clone()),
            })
            .unwrap();
        assert_eq!(ctx.topics().replies_of(&topic.id).unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_request_rejected() {
        let ctx = StoreContext::new(Arc::new(MemoryAdapter::new()));
        let mut request = create_request("pals");
        request.name = String::new();

        let err = GroupService::new(&ctx).create_group(request).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn test_mutations_fire_invalidation_hook() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let ctx = StoreContext::new(Arc::new(MemoryAdapter::new()))
            .with_invalidation_hook(Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        let service = GroupService::new(&ctx);

        let group = service.create_group(create_request("pals")).unwrap();
        service.delete_group(&group.id).unwrap();

        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}
