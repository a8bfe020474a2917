use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор поставщика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub Uuid);

impl SupplierId {
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

impl AggregateId for SupplierId {
    fn generate() -> Self {
        Self::new_v4()
    }

    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SupplierId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Поставщик: организация, способная поставлять товары каталога
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Supplier {
    pub fn new_for_insert(dto: SupplierDto) -> Self {
        Self {
            id: SupplierId::new_v4(),
            name: dto.name,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn apply(&mut self, dto: &SupplierUpdateDto) {
        if let Some(name) = &dto.name {
            self.name = name.clone();
        }
    }
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "supplier"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SupplierDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SupplierUpdateDto {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<SupplierDto> for SupplierUpdateDto {
    fn from(dto: SupplierDto) -> Self {
        Self {
            name: Some(dto.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_renames() {
        let mut supplier = Supplier::new_for_insert(SupplierDto {
            name: "Acme".into(),
        });
        let created_at = supplier.metadata.created_at;
        supplier.apply(&SupplierDto { name: "Acme Ltd".into() }.into());
        assert_eq!(supplier.name, "Acme Ltd");
        assert_eq!(supplier.metadata.created_at, created_at);
    }

    #[test]
    fn test_empty_update_keeps_name() {
        let mut supplier = Supplier::new_for_insert(SupplierDto {
            name: "Acme".into(),
        });
        supplier.apply(&SupplierUpdateDto::default());
        assert_eq!(supplier.name, "Acme");
    }
}
