use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ItemId {
    fn generate() -> Self {
        Self::new_v4()
    }

    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ItemId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога: стандартная позиция, которую могут поставлять разные поставщики
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub illustration_url: String,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Item {
    /// Создать новый товар для вставки в хранилище
    pub fn new_for_insert(dto: ItemDto) -> Self {
        Self {
            id: ItemId::new_v4(),
            title: dto.title,
            description: dto.description,
            illustration_url: dto.illustration_url,
            metadata: EntityMetadata::new(),
        }
    }

    /// Применить изменения из DTO; поля, которых нет в DTO, остаются прежними
    pub fn apply(&mut self, dto: &ItemUpdateDto) {
        if let Some(title) = &dto.title {
            self.title = title.clone();
        }
        if let Some(description) = &dto.description {
            self.description = description.clone();
        }
        if let Some(illustration_url) = &dto.illustration_url {
            self.illustration_url = illustration_url.clone();
        }
    }
}

impl AggregateRoot for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "item"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания товара
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub title: String,
    pub description: String,
    pub illustration_url: String,
}

/// DTO для обновления товара
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdateDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub illustration_url: Option<String>,
}

impl From<ItemDto> for ItemUpdateDto {
    fn from(dto: ItemDto) -> Self {
        Self {
            title: Some(dto.title),
            description: Some(dto.description),
            illustration_url: Some(dto.illustration_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Item {
        Item::new_for_insert(ItemDto {
            title: "Widget".into(),
            description: "A widget".into(),
            illustration_url: "https://img.example/widget.png".into(),
        })
    }

    #[test]
    fn test_new_item_has_no_update_timestamp() {
        let item = widget();
        assert_eq!(item.title, "Widget");
        assert!(item.metadata.updated_at.is_none());
    }

    #[test]
    fn test_apply_replaces_only_given_fields() {
        let mut item = widget();
        let id = item.id;
        item.apply(&ItemUpdateDto {
            title: Some("Gadget".into()),
            ..Default::default()
        });
        assert_eq!(item.id, id);
        assert_eq!(item.title, "Gadget");
        assert_eq!(item.description, "A widget");
        assert_eq!(item.illustration_url, "https://img.example/widget.png");
    }

    #[test]
    fn test_full_dto_replaces_everything() {
        let mut item = widget();
        item.apply(&ItemDto {
            title: "T".into(),
            description: "D".into(),
            illustration_url: "U".into(),
        }
        .into());
        assert_eq!(
            (item.title.as_str(), item.description.as_str(), item.illustration_url.as_str()),
            ("T", "D", "U")
        );
    }

    #[test]
    fn test_json_shape() {
        let item = widget();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], item.id.as_string());
        assert_eq!(json["illustrationUrl"], "https://img.example/widget.png");
        assert!(json.get("createdAt").is_some());
        assert!(json["updatedAt"].is_null());
    }

    #[test]
    fn test_update_dto_accepts_partial_json() {
        let dto: ItemUpdateDto = serde_json::from_str(r#"{"description":"new"}"#).unwrap();
        assert!(dto.title.is_none());
        assert_eq!(dto.description.as_deref(), Some("new"));
    }

    #[test]
    fn test_table_name() {
        assert_eq!(Item::full_name(), "a001_item");
    }
}
