use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};

use crate::storage::{NewShortcut, QueryLogEntry, Shortcut};
use migration::entities::{query_log, shortcut};

pub fn model_to_shortcut(model: shortcut::Model) -> Shortcut {
    Shortcut {
        id: i64::from(model.id),
        keyword: model.keyword,
        destination: model.destination,
        single_word: model.single_word,
        visit_count: model.visit_count.max(0) as u64,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

pub fn new_shortcut_to_active_model(
    new: &NewShortcut,
    now: DateTime<Utc>,
) -> shortcut::ActiveModel {
    shortcut::ActiveModel {
        id: NotSet,
        keyword: Set(new.keyword.clone()),
        keyword_lower: Set(new.keyword.to_lowercase()),
        destination: Set(new.destination.clone()),
        single_word: Set(new.single_word),
        visit_count: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub fn model_to_query_log(model: query_log::Model) -> QueryLogEntry {
    QueryLogEntry {
        id: i64::from(model.id),
        raw_query: model.raw_query,
        created_at: model.created_at,
    }
}
