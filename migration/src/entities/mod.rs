pub mod query_log;
pub mod setting;
pub mod shortcut;

pub use query_log::Entity as QueryLogEntity;
pub use setting::Entity as SettingEntity;
pub use shortcut::Entity as ShortcutEntity;
