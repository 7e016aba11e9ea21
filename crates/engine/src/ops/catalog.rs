//! Read-only catalog lookups. No workflow logic lives here.

use sea_orm::{QueryFilter, QueryOrder, QuerySelect, prelude::*, sea_query::Expr};

use crate::{Engine, Keyword, ResultEngine, Town, keywords, towns};

/// Maximum number of hits returned by a keyword typeahead search.
const KEYWORD_SEARCH_LIMIT: u64 = 10;

impl Engine {
    /// Returns every town ordered by name.
    pub async fn towns(&self) -> ResultEngine<Vec<Town>> {
        let models = towns::Entity::find()
            .order_by_asc(towns::Column::TownName)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Town::from).collect())
    }

    /// Keyword lookup for typeahead.
    ///
    /// A blank or absent query returns the full, untruncated list. Otherwise
    /// the match is a case-insensitive substring search ordered by text and
    /// capped at the 10 best hits.
    pub async fn search_keywords(&self, query: Option<&str>) -> ResultEngine<Vec<Keyword>> {
        let trimmed = query.map(str::trim).filter(|q| !q.is_empty());

        let models = match trimmed {
            None => {
                keywords::Entity::find()
                    .order_by_asc(keywords::Column::KeywordText)
                    .all(&self.database)
                    .await?
            }
            Some(q) => {
                let pattern = format!("%{}%", q.to_lowercase());
                keywords::Entity::find()
                    .filter(Expr::cust("LOWER(keyword_text)").like(pattern))
                    .order_by_asc(keywords::Column::KeywordText)
                    .limit(KEYWORD_SEARCH_LIMIT)
                    .all(&self.database)
                    .await?
            }
        };

        Ok(models.into_iter().map(Keyword::from).collect())
    }
}
