//! Shortcut management commands

mod add;
mod list;
mod remove;
mod reset;
mod update;

pub use add::add_shortcut;
pub use list::list_shortcuts;
pub use remove::remove_shortcut;
pub use reset::reset_visits;
pub use update::update_shortcut;
