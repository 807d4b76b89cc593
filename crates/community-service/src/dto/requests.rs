//! Request DTOs for store operations
//!
//! All creation requests implement `Deserialize` and `Validate`.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use community_core::GroupType;

/// Slugs are lowercase alphanumerics and hyphens, as used in URLs
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.starts_with('-')
        && !slug.ends_with('-')
}

// ============================================================================
// Group Requests
// ============================================================================

/// Create group request; the owner joins as part of creation
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    #[validate(length(min = 2, max = 64, message = "Slug must be 2-64 characters"))]
    pub slug: String,

    #[validate(length(min = 1, max = 100, message = "Group name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub category_id: String,

    #[serde(rename = "type", default)]
    pub group_type: GroupType,

    #[serde(default)]
    pub tags: Vec<String>,

    pub owner_id: String,
}

/// Create topic request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicRequest {
    pub group_id: String,

    pub author_id: String,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Body must be 1-10000 characters"))]
    pub body: String,

    /// Set for replies; one level of threading only
    pub parent_topic_id: Option<String>,
}

/// Create poll request; option labels become poll options in order
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePollRequest {
    pub group_id: String,

    pub topic_id: Option<String>,

    #[validate(length(min = 1, max = 500, message = "Question must be 1-500 characters"))]
    pub question: String,

    #[validate(length(min = 2, max = 20, message = "Polls need 2-20 options"))]
    pub options: Vec<String>,

    pub closes_at: Option<DateTime<Utc>>,
}

/// Create event request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub group_id: String,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    pub location: Option<String>,

    pub start_date: DateTime<Utc>,

    pub end_date: Option<DateTime<Utc>>,
}

/// Share resource request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceRequest {
    pub group_id: String,

    pub author_id: String,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "URL must be 1-2000 characters"))]
    pub url: Option<String>,

    #[validate(length(max = 10000, message = "Body must be at most 10000 characters"))]
    pub body: Option<String>,
}

// ============================================================================
// Content Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub author_id: String,

    pub pet_id: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Body must be 1-5000 characters"))]
    pub body: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub post_id: String,

    pub author_id: String,

    #[validate(length(min = 1, max = 2000, message = "Body must be 1-2000 characters"))]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_validation() {
        assert!(is_valid_slug("rust-pals"));
        assert!(is_valid_slug("pals2"));
        assert!(!is_valid_slug("Rust-Pals"));
        assert!(!is_valid_slug("-pals"));
        assert!(!is_valid_slug("pals-"));
        assert!(!is_valid_slug("rust pals"));
    }

    #[test]
    fn test_poll_request_option_bounds() {
        let request = CreatePollRequest {
            group_id: "g1".to_string(),
            topic_id: None,
            question: "?".to_string(),
            options: vec!["only".to_string()],
            closes_at: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_group_request_deserializes_camel_case() {
        let request: CreateGroupRequest = serde_json::from_str(
            r#"{
                "slug": "rust-pals",
                "name": "Rust Pals",
                "categoryId": "c1",
                "type": "secret",
                "ownerId": "u1"
            }"#,
        )
        .unwrap();
        assert_eq!(request.group_type, GroupType::Secret);
        assert!(request.validate().is_ok());
    }
}
