//! Admin API 路由配置

use actix_web::web;

use super::history::{clear_history, get_history};
use super::settings::{get_fallback, put_fallback};
use super::shortcuts::{
    delete_shortcut, get_shortcut, list_shortcuts, post_shortcut, reset_all_visits,
    reset_shortcut_visits, update_shortcut,
};

/// 快捷方式路由 `/shortcuts`
///
/// 包含：
/// - GET/HEAD /shortcuts - 获取所有快捷方式
/// - POST /shortcuts - 创建快捷方式
/// - GET /shortcuts/{keyword} - 获取单个快捷方式
/// - PUT /shortcuts/{keyword} - 修改快捷方式
/// - DELETE /shortcuts/{keyword} - 删除快捷方式
/// - POST /shortcuts/{keyword}/reset - 清零访问计数
pub fn shortcuts_routes() -> actix_web::Scope {
    web::scope("/shortcuts")
        .route("", web::get().to(list_shortcuts))
        .route("", web::head().to(list_shortcuts))
        .route("", web::post().to(post_shortcut))
        .route("/{keyword}/reset", web::post().to(reset_shortcut_visits))
        .route("/{keyword}", web::get().to(get_shortcut))
        .route("/{keyword}", web::put().to(update_shortcut))
        .route("/{keyword}", web::delete().to(delete_shortcut))
}

/// 管理 API 全部路由，挂载在 api_prefix 下
pub fn admin_routes() -> actix_web::Scope {
    web::scope("")
        .service(shortcuts_routes())
        .route("/visits/reset", web::post().to(reset_all_visits))
        .route("/fallback", web::get().to(get_fallback))
        .route("/fallback", web::put().to(put_fallback))
        .route("/history", web::get().to(get_history))
        .route("/history", web::delete().to(clear_history))
}
