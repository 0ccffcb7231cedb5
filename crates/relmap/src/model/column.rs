use crate::attr::{AttrKey, AttrValue, AttributeStore};

/// A single column reference.
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    pub attributes: AttributeStore<ColumnAttr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnAttr {
    Name,
    NotNull,
    Unique,
}

impl ColumnMapping {
    pub fn named(name: impl Into<String>) -> Self {
        let mut attributes = AttributeStore::new();
        attributes.set(ColumnAttr::Name, name.into());

        Self { attributes }
    }

    pub fn name(&self) -> String {
        self.attributes.get(ColumnAttr::Name).expect_str()
    }
}

impl AttrKey for ColumnAttr {
    fn default_value(self) -> AttrValue {
        match self {
            Self::Name => AttrValue::empty_str(),
            Self::NotNull | Self::Unique => AttrValue::Bool(false),
        }
    }
}
