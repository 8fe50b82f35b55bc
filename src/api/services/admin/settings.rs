//! Admin API 后备搜索模板

use actix_web::{Responder, web};
use std::sync::Arc;
use tracing::{info, trace};

use crate::errors::GomarksError;
use crate::services::ShortcutService;

use super::error_code::ErrorCode;
use super::helpers::{api_result, error_from_gomarks, error_response, success_response};
use super::types::FallbackBody;

pub async fn get_fallback(service: web::Data<Arc<ShortcutService>>) -> impl Responder {
    trace!("Admin API: request to get fallback template");

    api_result(service.fallback().await.map(|url| FallbackBody { url }))
}

pub async fn put_fallback(
    body: web::Json<FallbackBody>,
    service: web::Data<Arc<ShortcutService>>,
) -> impl Responder {
    trace!("Admin API: request to set fallback template");

    match service.set_fallback(&body.url).await {
        Ok(url) => {
            info!("Admin API: fallback template set to '{}'", url);
            success_response(FallbackBody { url })
        }
        Err(GomarksError::Validation(msg)) => {
            error_response(
                actix_web::http::StatusCode::BAD_REQUEST,
                ErrorCode::FallbackInvalid,
                &msg,
            )
        }
        Err(e) => error_from_gomarks(&e),
    }
}
