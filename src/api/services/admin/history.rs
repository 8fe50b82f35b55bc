//! Admin API 查询历史

use actix_web::{Responder, web};
use std::sync::Arc;
use tracing::{info, trace};

use crate::services::ShortcutService;

use super::helpers::api_result;
use super::types::{AffectedResponse, HistoryQuery, QueryLogResponse};

/// 最近的原始查询，新的在前
pub async fn get_history(
    query: web::Query<HistoryQuery>,
    service: web::Data<Arc<ShortcutService>>,
) -> impl Responder {
    trace!("Admin API: request for query history (limit: {:?})", query.limit);

    let result = service.history(query.limit).await.map(|entries| {
        entries
            .into_iter()
            .map(QueryLogResponse::from)
            .collect::<Vec<_>>()
    });
    api_result(result)
}

pub async fn clear_history(service: web::Data<Arc<ShortcutService>>) -> impl Responder {
    trace!("Admin API: request to clear query history");

    let result = service.clear_history().await;
    if let Ok(removed) = result {
        info!("Admin API: removed {} query log entries", removed);
    }
    api_result(result.map(|affected| AffectedResponse { affected }))
}
