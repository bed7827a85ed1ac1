//! Search route handlers.
//!
//! Each handler maps its path shape onto a [`RouteShape`] and hands off to
//! the resolver. Redirects are `302 Found`, matching the platform.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::WebError;
use crate::render;
use crate::search::{self, QueryArgs, Resolution, RouteShape, SearchQuery};
use crate::state::AppState;

/// `GET /search?q=...`
pub async fn query_param_redirect(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Response, WebError> {
    let args = QueryArgs::parse(raw_query.as_deref());
    let target = search::entry_redirect(&args, &state.config.trending_path);
    found(&target)
}

/// `GET /search/{query}`
pub async fn popular(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    RawQuery(raw_query): RawQuery,
) -> Result<Response, WebError> {
    let Path(query) = path?;
    resolve(&state, &query, RouteShape::default(), raw_query).await
}

/// `GET /search/{query}/recent`
pub async fn recent(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    RawQuery(raw_query): RawQuery,
) -> Result<Response, WebError> {
    let Path(query) = path?;
    let shape = RouteShape {
        recent: true,
        post_filter: None,
    };
    resolve(&state, &query, shape, raw_query).await
}

/// `GET /search/{query}/{post_filter}`
pub async fn filtered(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
    RawQuery(raw_query): RawQuery,
) -> Result<Response, WebError> {
    let Path((query, post_filter)) = path?;
    let shape = RouteShape {
        recent: false,
        post_filter: Some(post_filter),
    };
    resolve(&state, &query, shape, raw_query).await
}

/// `GET /search/{query}/recent/{post_filter}`
pub async fn recent_filtered(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
    RawQuery(raw_query): RawQuery,
) -> Result<Response, WebError> {
    let Path((query, post_filter)) = path?;
    let shape = RouteShape {
        recent: true,
        post_filter: Some(post_filter),
    };
    resolve(&state, &query, shape, raw_query).await
}

/// Redirect or run the search. `query` arrives percent-decoded from the path.
async fn resolve(
    state: &AppState,
    query: &str,
    shape: RouteShape,
    raw_query: Option<String>,
) -> Result<Response, WebError> {
    match search::disambiguate(query, &shape, &state.post_types, raw_query.as_deref()) {
        Resolution::Redirect(target) => found(&target),
        Resolution::Proceed {
            sort,
            post_filter,
            endpoint,
        } => {
            let args = QueryArgs::parse(raw_query.as_deref());
            let request = SearchQuery::new(query, sort, post_filter, &args);
            let ctx = search::dispatch(state.api.as_ref(), request, endpoint, args).await?;
            let markup = render::search::render(&ctx, &state.config.site_name);
            Ok(render::page_response(markup))
        }
    }
}

/// `302 Found` to `target`.
fn found(target: &str) -> Result<Response, WebError> {
    let location = HeaderValue::from_str(target)
        .map_err(|e| anyhow::anyhow!("invalid redirect target {target:?}: {e}"))?;
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
