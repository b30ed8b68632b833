use serde_json::Value;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::{Result, StorageError};
use crate::services::admin_site::{EntityAdmin, contains_pattern};
use crate::services::pagination::PageWindow;

/// Generic record browser driven by an [`EntityAdmin`] registration.
/// Table and column names only ever come from the static registry.
pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    fn push_search<'q>(query: &mut QueryBuilder<'q, Postgres>, admin: &EntityAdmin, term: &str) {
        if !admin.is_searchable() {
            return;
        }
        let pattern = contains_pattern(term);
        query.push(" AND (");
        for (i, field) in admin.search_fields.iter().enumerate() {
            if i > 0 {
                query.push(" OR ");
            }
            query.push(format!("{field}::TEXT ILIKE "));
            query.push_bind(pattern.clone());
        }
        query.push(")");
    }

    pub async fn count(&self, admin: &EntityAdmin, search: Option<&str>) -> Result<i64> {
        let mut query = QueryBuilder::<Postgres>::new(format!(
            "SELECT COUNT(*) FROM {} WHERE 1=1",
            admin.table
        ));
        if let Some(term) = search {
            Self::push_search(&mut query, admin, term);
        }

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// One page of `list_display` columns as JSON objects
    pub async fn browse(
        &self,
        admin: &EntityAdmin,
        search: Option<&str>,
        token: Option<&str>,
        per_page: u32,
    ) -> Result<(Vec<Value>, PageWindow)> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());
        let total_items = self.count(admin, search).await?;
        let window = PageWindow::resolve(token, total_items, per_page);

        let mut query = QueryBuilder::<Postgres>::new(format!(
            "SELECT row_to_json(r)::JSONB FROM (SELECT {} FROM {} WHERE 1=1",
            admin.list_display.join(", "),
            admin.table
        ));
        if let Some(term) = search {
            Self::push_search(&mut query, admin, term);
        }
        query.push(format!(" ORDER BY {} LIMIT ", admin.ordering));
        query.push_bind(window.limit());
        query.push(" OFFSET ");
        query.push_bind(window.offset());
        query.push(") r");

        let rows = query
            .build_query_scalar::<Value>()
            .fetch_all(self.pool)
            .await?;

        Ok((rows, window))
    }

    /// Delete one record; dependent rows follow the schema's ON DELETE rules
    pub async fn delete(&self, admin: &EntityAdmin, id: i64) -> Result<()> {
        let result = sqlx::query(&format!(
            "DELETE FROM {} WHERE {} = $1",
            admin.table, admin.primary_key
        ))
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tracing::info!(entity = admin.entity, id, "Record deleted through admin");

        Ok(())
    }
}
