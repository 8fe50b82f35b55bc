//! Admin API 服务模块
//!
//! 管理 API 的所有端点：快捷方式 CRUD、访问计数、后备搜索模板和查询历史。

pub mod error_code;
mod helpers;
mod history;
pub mod routes;
mod settings;
mod shortcuts;
mod types;

// 重新导出类型
pub use types::*;

// 重新导出帮助函数
pub use helpers::{api_result, error_from_gomarks, error_response, success_response};

// 重新导出错误码
pub use error_code::ErrorCode;

pub use history::{clear_history, get_history};
pub use routes::admin_routes;
pub use settings::{get_fallback, put_fallback};
pub use shortcuts::{
    delete_shortcut, get_shortcut, list_shortcuts, post_shortcut, reset_all_visits,
    reset_shortcut_visits, update_shortcut,
};
