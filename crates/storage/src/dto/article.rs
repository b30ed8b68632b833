use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::home::MatchSummary;

/// Article as shown in lists: no body, just what a teaser needs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ArticleSummary {
    pub article_id: i64,
    pub title: String,
    pub slug: String,
    pub author_username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_published: bool,
    pub preview_image_url: Option<String>,
}

/// Full article with its resolved relations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailResponse {
    pub article_id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author_id: Option<i64>,
    pub author_username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_published: bool,
    pub preview_image_url: Option<String>,
    #[serde(rename = "match")]
    pub linked_match: Option<MatchSummary>,
    pub teams: Vec<TeamRef>,
    pub athletes: Vec<AthleteRef>,
    pub tags: Vec<TagRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamRef {
    pub team_id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AthleteRef {
    pub athlete_id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TagRef {
    pub tag_id: i64,
    pub name: String,
    pub slug: String,
}

/// Request payload for writing a new article. The author is always the
/// authenticated requester and is not part of the payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateArticleRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    /// Generated from the title when omitted
    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,

    #[serde(default)]
    pub content: String,

    #[serde(default = "default_published")]
    pub is_published: bool,

    #[validate(url)]
    #[validate(length(max = 500))]
    pub preview_image_url: Option<String>,

    pub match_id: Option<i64>,

    #[serde(default)]
    pub team_ids: Vec<i64>,

    #[serde(default)]
    pub athlete_ids: Vec<i64>,

    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

/// Partial update. Relation lists, when present, replace the current set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateArticleRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,

    pub content: Option<String>,

    pub is_published: Option<bool>,

    /// Absent keeps the current image, `null` clears it
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    #[validate(length(max = 500))]
    pub preview_image_url: Option<Option<String>>,

    /// Absent keeps the linked match, `null` unlinks it
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub match_id: Option<Option<i64>>,

    pub team_ids: Option<Vec<i64>>,

    pub athlete_ids: Option<Vec<i64>>,

    pub tag_ids: Option<Vec<i64>>,
}

/// Present fields become `Some`, so an explicit `null` is `Some(None)`
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn default_published() -> bool {
    true
}

pub(crate) fn validate_slug(slug: &str) -> Result<(), validator::ValidationError> {
    let valid = !slug.is_empty()
        && slug.len() <= 200
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_slug"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(title: &str, slug: Option<&str>) -> CreateArticleRequest {
        CreateArticleRequest {
            title: title.to_string(),
            slug: slug.map(str::to_string),
            content: String::new(),
            is_published: true,
            preview_image_url: None,
            match_id: None,
            team_ids: vec![],
            athlete_ids: vec![],
            tag_ids: vec![],
        }
    }

    #[test]
    fn create_request_defaults() {
        let req: CreateArticleRequest = serde_json::from_str(r#"{"title": "Cup final"}"#).unwrap();
        assert!(req.is_published);
        assert!(req.content.is_empty());
        assert!(req.tag_ids.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let errors = create("", None).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn slug_must_be_url_safe() {
        assert!(create("Cup final", Some("cup-final_2025")).validate().is_ok());
        let errors = create("Cup final", Some("Cup Final")).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("slug"));
    }

    #[test]
    fn update_validates_only_present_fields() {
        assert!(UpdateArticleRequest::default().validate().is_ok());
        let req = UpdateArticleRequest {
            preview_image_url: Some(Some("not a url".to_string())),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn update_tells_null_apart_from_absent() {
        let absent: UpdateArticleRequest = serde_json::from_str(r#"{"title": "Edited"}"#).unwrap();
        assert_eq!(absent.preview_image_url, None);
        assert_eq!(absent.match_id, None);

        let cleared: UpdateArticleRequest =
            serde_json::from_str(r#"{"preview_image_url": null, "match_id": null}"#).unwrap();
        assert_eq!(cleared.preview_image_url, Some(None));
        assert_eq!(cleared.match_id, Some(None));
        assert!(cleared.validate().is_ok());

        let linked: UpdateArticleRequest = serde_json::from_str(r#"{"match_id": 7}"#).unwrap();
        assert_eq!(linked.match_id, Some(Some(7)));
    }
}
