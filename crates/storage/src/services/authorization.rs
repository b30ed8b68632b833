use crate::error::{Result, StorageError};
use crate::models::{Article, User};

/// Who is asking to change something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    pub user_id: i64,
    pub is_superuser: bool,
}

impl From<&User> for Requester {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            is_superuser: user.is_superuser,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleAction {
    Update,
    Delete,
}

impl ArticleAction {
    fn verb(&self) -> &'static str {
        match self {
            Self::Update => "edit",
            Self::Delete => "delete",
        }
    }
}

/// Superusers may change any article; everyone else only their own.
/// Articles whose author was removed are therefore superuser-only.
pub fn can_modify_article(requester: Requester, article: &Article) -> bool {
    requester.is_superuser || article.author_id == Some(requester.user_id)
}

pub fn authorize_article(
    requester: Requester,
    article: &Article,
    action: ArticleAction,
) -> Result<()> {
    if can_modify_article(requester, article) {
        Ok(())
    } else {
        tracing::warn!(
            user_id = requester.user_id,
            article_id = article.article_id,
            "Refused to {} article",
            action.verb()
        );
        Err(StorageError::PermissionDenied(format!(
            "You don't have permission to {} this article.",
            action.verb()
        )))
    }
}

pub fn require_superuser(requester: Requester) -> Result<()> {
    if requester.is_superuser {
        Ok(())
    } else {
        Err(StorageError::PermissionDenied(
            "Superuser privileges required".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn article(author_id: Option<i64>) -> Article {
        Article {
            article_id: 7,
            title: "Derby day".to_string(),
            slug: "derby-day".to_string(),
            content: String::new(),
            author_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_published: true,
            preview_image_url: None,
            match_id: None,
        }
    }

    const AUTHOR: Requester = Requester {
        user_id: 1,
        is_superuser: false,
    };
    const OTHER: Requester = Requester {
        user_id: 2,
        is_superuser: false,
    };
    const ADMIN: Requester = Requester {
        user_id: 3,
        is_superuser: true,
    };

    #[test]
    fn author_may_modify_own_article() {
        let a = article(Some(1));
        assert!(authorize_article(AUTHOR, &a, ArticleAction::Update).is_ok());
        assert!(authorize_article(AUTHOR, &a, ArticleAction::Delete).is_ok());
    }

    #[test]
    fn other_user_is_refused() {
        let a = article(Some(1));
        let err = authorize_article(OTHER, &a, ArticleAction::Update).unwrap_err();
        assert!(matches!(err, StorageError::PermissionDenied(ref msg) if msg.contains("edit")));
        let err = authorize_article(OTHER, &a, ArticleAction::Delete).unwrap_err();
        assert!(matches!(err, StorageError::PermissionDenied(ref msg) if msg.contains("delete")));
    }

    #[test]
    fn superuser_may_modify_any_article() {
        assert!(authorize_article(ADMIN, &article(Some(1)), ArticleAction::Update).is_ok());
        assert!(authorize_article(ADMIN, &article(None), ArticleAction::Delete).is_ok());
    }

    #[test]
    fn orphaned_article_is_superuser_only() {
        assert!(!can_modify_article(AUTHOR, &article(None)));
        assert!(can_modify_article(ADMIN, &article(None)));
    }

    #[test]
    fn superuser_gate() {
        assert!(require_superuser(ADMIN).is_ok());
        assert!(matches!(
            require_superuser(OTHER),
            Err(StorageError::PermissionDenied(_))
        ));
    }
}
