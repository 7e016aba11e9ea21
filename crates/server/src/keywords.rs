//! Keyword catalog and typeahead endpoints.

use api_types::{ApiResponse, keyword::KeywordView};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{ServerError, server::ServerState};
use engine::Keyword;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<ApiResponse<Vec<KeywordView>>>, ServerError> {
    let keywords = state.engine.search_keywords(None).await?;
    Ok(Json(ApiResponse::success(
        "Keywords retrieved successfully",
        views(keywords),
    )))
}

pub async fn search(
    State(state): State<ServerState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<KeywordView>>>, ServerError> {
    let keywords = state.engine.search_keywords(params.q.as_deref()).await?;
    Ok(Json(ApiResponse::success("Keywords found", views(keywords))))
}

fn views(keywords: Vec<Keyword>) -> Vec<KeywordView> {
    keywords
        .into_iter()
        .map(|keyword| KeywordView {
            id: keyword.id,
            keyword_text: keyword.text,
        })
        .collect()
}
