//! Explicit admin registrations: one configuration struct per browsable
//! entity, consumed by the generic record browser.

use crate::dto::admin::EntityAdminInfo;

#[derive(Debug, Clone, Copy)]
pub struct EntityAdmin {
    /// Path segment under `/api/admin`
    pub entity: &'static str,
    pub table: &'static str,
    pub primary_key: &'static str,
    pub list_display: &'static [&'static str],
    pub search_fields: &'static [&'static str],
    pub ordering: &'static str,
}

impl EntityAdmin {
    pub fn info(&self) -> EntityAdminInfo {
        EntityAdminInfo {
            entity: self.entity,
            list_display: self.list_display.to_vec(),
            search_fields: self.search_fields.to_vec(),
        }
    }

    pub fn is_searchable(&self) -> bool {
        !self.search_fields.is_empty()
    }
}

pub const ADMIN_SITE: &[EntityAdmin] = &[
    EntityAdmin {
        entity: "sports",
        table: "sports",
        primary_key: "sport_id",
        list_display: &["sport_id", "name", "slug"],
        search_fields: &[],
        ordering: "sport_id",
    },
    EntityAdmin {
        entity: "tournaments",
        table: "tournaments",
        primary_key: "tournament_id",
        list_display: &["tournament_id", "name", "sport_id", "slug", "is_active"],
        search_fields: &[],
        ordering: "tournament_id",
    },
    EntityAdmin {
        entity: "teams",
        table: "teams",
        primary_key: "team_id",
        list_display: &["team_id", "name", "sport_id", "city"],
        search_fields: &["name"],
        ordering: "team_id",
    },
    EntityAdmin {
        entity: "athletes",
        table: "athletes",
        primary_key: "athlete_id",
        list_display: &["athlete_id", "last_name", "first_name", "current_team_id"],
        search_fields: &["last_name", "first_name"],
        ordering: "athlete_id",
    },
    EntityAdmin {
        entity: "matches",
        table: "matches",
        primary_key: "match_id",
        list_display: &[
            "match_id",
            "home_team_id",
            "away_team_id",
            "score_home",
            "score_away",
            "status",
            "tournament_id",
        ],
        search_fields: &[],
        ordering: "date_time DESC",
    },
    EntityAdmin {
        entity: "participations",
        table: "match_participations",
        primary_key: "participation_id",
        list_display: &[
            "participation_id",
            "match_id",
            "athlete_id",
            "goals_scored",
            "minutes_played",
            "yellow_card",
        ],
        search_fields: &[],
        ordering: "participation_id",
    },
    EntityAdmin {
        entity: "articles",
        table: "articles",
        primary_key: "article_id",
        list_display: &["article_id", "title", "created_at", "is_published"],
        search_fields: &["title"],
        ordering: "created_at DESC",
    },
    EntityAdmin {
        entity: "tags",
        table: "tags",
        primary_key: "tag_id",
        list_display: &["tag_id", "name", "slug"],
        search_fields: &[],
        ordering: "tag_id",
    },
    EntityAdmin {
        entity: "users",
        table: "users",
        primary_key: "user_id",
        list_display: &["user_id", "username", "is_superuser", "created_at"],
        search_fields: &["username"],
        ordering: "user_id",
    },
];

pub fn find_entity(entity: &str) -> Option<&'static EntityAdmin> {
    ADMIN_SITE.iter().find(|admin| admin.entity == entity)
}

/// `ILIKE` pattern matching `term` anywhere, with LIKE wildcards in the
/// term taken literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn entities_are_unique_and_findable() {
        let names: HashSet<_> = ADMIN_SITE.iter().map(|a| a.entity).collect();
        assert_eq!(names.len(), ADMIN_SITE.len());
        assert_eq!(find_entity("teams").map(|a| a.table), Some("teams"));
        assert_eq!(
            find_entity("participations").map(|a| a.table),
            Some("match_participations")
        );
        assert!(find_entity("sessions").is_none());
    }

    #[test]
    fn list_display_starts_with_primary_key() {
        for admin in ADMIN_SITE {
            assert_eq!(admin.list_display.first(), Some(&admin.primary_key));
        }
    }

    #[test]
    fn searchable_entities() {
        assert!(find_entity("articles").is_some_and(EntityAdmin::is_searchable));
        assert!(!find_entity("matches").is_some_and(EntityAdmin::is_searchable));
    }

    #[test]
    fn pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("cska"), "%cska%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
    }
}
