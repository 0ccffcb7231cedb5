use super::ColumnMapping;
use crate::attr::{AttrKey, AttrValue, AttributeStore};
use crate::domain::TypeId;

/// Foreign-key definition for a collection, pointing back at the owner.
#[derive(Debug, Clone)]
pub struct KeyMapping {
    pub attributes: AttributeStore<KeyAttr>,

    /// Containing entity type
    pub containing_ty: TypeId,

    /// Default key columns
    pub columns: Vec<ColumnMapping>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAttr {
    ForeignKeyName,
    OnDelete,
}

impl KeyMapping {
    pub fn new(containing_ty: TypeId) -> Self {
        Self {
            attributes: AttributeStore::new(),
            containing_ty,
            columns: vec![],
        }
    }

    pub fn add_default_column(&mut self, column: ColumnMapping) {
        self.columns.push(column);
    }
}

impl AttrKey for KeyAttr {
    fn default_value(self) -> AttrValue {
        match self {
            Self::ForeignKeyName | Self::OnDelete => AttrValue::empty_str(),
        }
    }
}
