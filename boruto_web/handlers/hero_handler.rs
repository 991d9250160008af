use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use boruto_types::ApiError;

use crate::{http::AppState, responses::ApiResponse};

#[derive(Debug, Deserialize)]
pub struct HeroesQuery {
    /// Kept as a raw string so a non-numeric value reaches our own
    /// validation instead of being rejected by the extractor.
    pub page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}

/// GET /boruto/heroes?page={page}
pub async fn get_all_heroes(
    State(state): State<AppState>,
    Query(params): Query<HeroesQuery>,
) -> Response {
    let page = match parse_page(params.page.as_deref()) {
        Ok(page) => page,
        Err(err) => return api_error(err),
    };

    match state.hero_repository.heroes_page(page).await {
        Ok(result) => {
            Json(ApiResponse::ok(result.heroes, result.prev_page, result.next_page)).into_response()
        }
        Err(err) => api_error(err),
    }
}

/// GET /boruto/heroes/search?name={name}
pub async fn search_heroes(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Response {
    let name = params.name.unwrap_or_default();
    let heroes = state.hero_repository.search_heroes(&name).await;

    Json(ApiResponse::ok(heroes, None, None)).into_response()
}

/// Missing parameter defaults to page 1. Format validation happens before
/// the range check in the repository.
fn parse_page(raw: Option<&str>) -> Result<i32, ApiError> {
    match raw {
        None => Ok(1),
        Some(raw) => raw.parse::<i32>().map_err(|_| ApiError::InvalidPageFormat),
    }
}

fn api_error(err: ApiError) -> Response {
    let status = match err {
        ApiError::InvalidPageFormat => StatusCode::BAD_REQUEST,
        ApiError::PageOutOfRange { .. } => StatusCode::NOT_FOUND,
    };
    tracing::debug!("Rejected heroes request: {}", err);

    (status, Json(ApiResponse::failure(err.to_string()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_defaults_to_one() {
        assert_eq!(parse_page(None), Ok(1));
    }

    #[test]
    fn test_parse_page_accepts_integers() {
        assert_eq!(parse_page(Some("3")), Ok(3));
        assert_eq!(parse_page(Some("-2")), Ok(-2));
    }

    #[test]
    fn test_parse_page_rejects_non_numeric() {
        assert_eq!(parse_page(Some("invalid")), Err(ApiError::InvalidPageFormat));
        assert_eq!(parse_page(Some("")), Err(ApiError::InvalidPageFormat));
        assert_eq!(parse_page(Some("1.5")), Err(ApiError::InvalidPageFormat));
    }
}
