//! Admin API 快捷方式 CRUD 操作

use actix_web::http::StatusCode;
use actix_web::{Responder, web};
use std::sync::Arc;
use tracing::{info, trace};

use crate::services::{CreateShortcutRequest, ShortcutService, UpdateShortcutRequest};

use super::error_code::ErrorCode;
use super::helpers::{api_result, error_from_gomarks, json_response};
use super::types::{
    AffectedResponse, PostShortcut, PutShortcut, ShortcutListResponse, ShortcutResponse,
};

/// 获取所有快捷方式，按关键字排序
pub async fn list_shortcuts(service: web::Data<Arc<ShortcutService>>) -> impl Responder {
    trace!("Admin API: request to list all shortcuts");

    let result = service.list().await.map(|shortcuts| {
        let shortcuts: Vec<ShortcutResponse> =
            shortcuts.into_iter().map(ShortcutResponse::from).collect();
        ShortcutListResponse {
            total: shortcuts.len(),
            shortcuts,
        }
    });
    api_result(result)
}

pub async fn get_shortcut(
    path: web::Path<String>,
    service: web::Data<Arc<ShortcutService>>,
) -> impl Responder {
    let keyword = path.into_inner();
    trace!("Admin API: request to get shortcut '{}'", keyword);

    api_result(service.get(&keyword).await.map(ShortcutResponse::from))
}

/// 创建快捷方式，成功返回 201
pub async fn post_shortcut(
    body: web::Json<PostShortcut>,
    service: web::Data<Arc<ShortcutService>>,
) -> impl Responder {
    let body = body.into_inner();
    trace!("Admin API: request to create shortcut '{}'", body.keyword);

    match service
        .create(CreateShortcutRequest {
            keyword: body.keyword,
            destination: body.destination,
            single_word: body.single_word,
        })
        .await
    {
        Ok(shortcut) => {
            info!("Admin API: shortcut '{}' created", shortcut.keyword);
            json_response(
                StatusCode::CREATED,
                ErrorCode::Success,
                "Created",
                Some(ShortcutResponse::from(shortcut)),
            )
        }
        Err(e) => error_from_gomarks(&e),
    }
}

pub async fn update_shortcut(
    path: web::Path<String>,
    body: web::Json<PutShortcut>,
    service: web::Data<Arc<ShortcutService>>,
) -> impl Responder {
    let keyword = path.into_inner();
    let body = body.into_inner();
    trace!("Admin API: request to update shortcut '{}'", keyword);

    let result = service
        .update(
            &keyword,
            UpdateShortcutRequest {
                rename: body.keyword,
                destination: body.destination,
                single_word: body.single_word,
            },
        )
        .await
        .map(ShortcutResponse::from);
    api_result(result)
}

pub async fn delete_shortcut(
    path: web::Path<String>,
    service: web::Data<Arc<ShortcutService>>,
) -> impl Responder {
    let keyword = path.into_inner();
    trace!("Admin API: request to delete shortcut '{}'", keyword);

    api_result(
        service
            .delete(&keyword)
            .await
            .map(|_| AffectedResponse { affected: 1 }),
    )
}

/// 清零单个快捷方式的访问计数
pub async fn reset_shortcut_visits(
    path: web::Path<String>,
    service: web::Data<Arc<ShortcutService>>,
) -> impl Responder {
    let keyword = path.into_inner();
    trace!("Admin API: request to reset visits of '{}'", keyword);

    api_result(
        service
            .reset_visits(&keyword)
            .await
            .map(|_| AffectedResponse { affected: 1 }),
    )
}

pub async fn reset_all_visits(service: web::Data<Arc<ShortcutService>>) -> impl Responder {
    trace!("Admin API: request to reset all visit counts");

    let result = service.reset_all_visits().await;
    if let Ok(affected) = result {
        info!("Admin API: reset visit counts of {} shortcuts", affected);
    }
    api_result(result.map(|affected| AffectedResponse { affected }))
}
