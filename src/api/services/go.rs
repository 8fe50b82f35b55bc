//! 关键字跳转端点
//!
//! `GET {go_prefix}/?q=<query>` 和 `GET {go_prefix}/<query>`，成功时 302 跳转，
//! 用户输入错误返回 400 纯文本，存储故障返回 500。

use actix_web::http::StatusCode;
use actix_web::http::header::{CACHE_CONTROL, CONTENT_TYPE, LOCATION};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error};

use crate::resolver::{Resolution, ResolveError};
use crate::services::ResolveService;
use crate::utils::header_safe_location;

#[derive(Debug, Deserialize)]
pub struct GoQuery {
    pub q: Option<String>,
}

pub struct GoService;

impl GoService {
    /// `?q=` 形式，浏览器搜索栏使用
    pub async fn handle_query(
        query: web::Query<GoQuery>,
        resolver: web::Data<Arc<ResolveService>>,
    ) -> impl Responder {
        let raw = query.into_inner().q.unwrap_or_default();
        Self::process(&raw, &resolver).await
    }

    /// 路径形式，例如 `/go/bb%20climate`
    pub async fn handle_path(
        path: web::Path<String>,
        resolver: web::Data<Arc<ResolveService>>,
    ) -> impl Responder {
        let raw = path.into_inner();
        Self::process(&raw, &resolver).await
    }

    async fn process(raw: &str, resolver: &ResolveService) -> HttpResponse {
        match resolver.resolve(raw).await {
            Ok(resolution) => Self::redirect_response(&resolution),
            Err(e) => Self::error_response(&e),
        }
    }

    fn redirect_response(resolution: &Resolution) -> HttpResponse {
        let location = header_safe_location(resolution.url());
        debug!("Redirecting to {}", location);

        HttpResponse::Found()
            .insert_header((LOCATION, location))
            .insert_header((CACHE_CONTROL, "no-store"))
            .finish()
    }

    fn error_response(err: &ResolveError) -> HttpResponse {
        let status = if err.is_user_error() {
            StatusCode::BAD_REQUEST
        } else {
            error!("Resolution failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = match err {
            ResolveError::StoreFailure(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        };

        HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .body(body)
    }
}

/// 跳转路由配置
pub fn go_routes() -> actix_web::Scope {
    web::scope("")
        .route("", web::get().to(GoService::handle_query))
        .route("/", web::get().to(GoService::handle_query))
        .route("/{query:.+}", web::get().to(GoService::handle_path))
}
