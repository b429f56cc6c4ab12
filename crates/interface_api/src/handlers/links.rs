//! Link handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use core_kernel::{DateRange, LinkId};
use domain_links::{LinkStatus, ListFilter};

use crate::dto::links::*;
use crate::error::ApiError;
use crate::AppState;

/// Issues a new payment link
pub async fn create_link(
    State(state): State<AppState>,
    Json(request): Json<CreateLinkDto>,
) -> Result<(StatusCode, Json<LinkResponse>), ApiError> {
    let now = Utc::now();
    let link = state.service.create(&request.into_domain(), now)?;
    let status = LinkStatus::resolve(&link, now);
    let url = state.config.link_url(&link.id);
    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(link, status, url)),
    ))
}

/// Lists links, optionally filtered by status and/or created-date range
pub async fn list_links(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<LinkListResponse>, ApiError> {
    let filter = build_filter(&query)?;
    let now = Utc::now();

    let links: Vec<LinkResponse> = state
        .service
        .list(&filter, now)
        .into_iter()
        .map(|(link, status)| {
            let url = state.config.link_url(&link.id);
            LinkResponse::from_link(link, status, url)
        })
        .collect();

    let total = links.len();
    Ok(Json(LinkListResponse { links, total }))
}

/// Returns a single link with freshly derived status
pub async fn get_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LinkResponse>, ApiError> {
    let id = parse_link_id(&id)?;
    let now = Utc::now();
    let (link, status) = state.service.get(&id, now)?;
    let url = state.config.link_url(&link.id);
    Ok(Json(LinkResponse::from_link(link, status, url)))
}

/// Revokes a link before settlement
pub async fn cancel_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LinkResponse>, ApiError> {
    let id = parse_link_id(&id)?;
    let now = Utc::now();
    let link = state.service.cancel(&id, now)?;
    let status = LinkStatus::resolve(&link, now);
    let url = state.config.link_url(&link.id);
    Ok(Json(LinkResponse::from_link(link, status, url)))
}

/// Accepts a settlement confirmation from the payment processor
///
/// Authenticity of the event is the integration layer's responsibility; the
/// store invariants hold regardless of who calls this.
pub async fn settlement_webhook(
    State(state): State<AppState>,
    Json(event): Json<SettlementEventDto>,
) -> Result<Json<LinkResponse>, ApiError> {
    let id = parse_link_id(&event.link_id)?;
    let link = state.service.settle(&id, event.settled_at)?;
    let status = LinkStatus::resolve(&link, Utc::now());
    let url = state.config.link_url(&link.id);
    Ok(Json(LinkResponse::from_link(link, status, url)))
}

/// Returns dashboard aggregates
pub async fn link_summary(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = state.service.summary(Utc::now());
    Ok(Json(SummaryResponse::from(summary)))
}

/// An unparseable id names no link, so the caller sees "link unknown"
fn parse_link_id(raw: &str) -> Result<LinkId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(format!("Link not found: {raw}")))
}

/// Builds the domain filter, rejecting unsupported combinations up front
fn build_filter(query: &ListQuery) -> Result<ListFilter, ApiError> {
    let mut filter = ListFilter::default();

    if let Some(raw) = &query.status {
        let status = LinkStatus::parse(raw).ok_or_else(|| {
            ApiError::Validation(
                "Unsupported list filter".to_string(),
                vec![crate::error::FieldViolation {
                    field: "status".to_string(),
                    message: format!("Unknown status: {raw}"),
                }],
            )
        })?;
        filter = filter.with_status(status);
    }

    if query.created_from.is_some() || query.created_to.is_some() {
        let range = DateRange::new(query.created_from, query.created_to).map_err(|err| {
            ApiError::Validation(
                "Unsupported list filter".to_string(),
                vec![crate::error::FieldViolation {
                    field: "created_from".to_string(),
                    message: err.to_string(),
                }],
            )
        })?;
        filter = filter.with_created_range(range);
    }

    Ok(filter)
}
