use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Метаданные экземпляра агрегата (lifecycle tracking)
///
/// `updated_at` пуст до первого изменения записи.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    /// Дата создания записи
    pub created_at: DateTime<Utc>,
    /// Дата последнего обновления
    pub updated_at: Option<DateTime<Utc>>,
}

impl EntityMetadata {
    /// Создать новые метаданные для нового агрегата
    pub fn new() -> Self {
        Self {
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Восстановить метаданные из хранилища
    pub fn restore(created_at: DateTime<Utc>, updated_at: Option<DateTime<Utc>>) -> Self {
        Self {
            created_at,
            updated_at,
        }
    }

    /// Обновить timestamp
    pub fn touch(&mut self) {
        // Не раньше created_at, даже если системные часы сдвинулись назад
        self.updated_at = Some(Utc::now().max(self.created_at));
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
