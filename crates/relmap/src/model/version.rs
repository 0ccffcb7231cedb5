use crate::attr::{AttrKey, AttrValue, AttributeStore};
use crate::domain::TypeId;

/// Optimistic-lock version member mapping.
#[derive(Debug, Clone)]
pub struct VersionMapping {
    pub attributes: AttributeStore<VersionAttr>,

    /// Containing entity type
    pub containing_ty: TypeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionAttr {
    Name,
    Access,
    Column,
    UnsavedValue,
    Generated,
}

impl VersionMapping {
    pub fn new(containing_ty: TypeId) -> Self {
        Self {
            attributes: AttributeStore::new(),
            containing_ty,
        }
    }

    pub fn name(&self) -> String {
        self.attributes.get(VersionAttr::Name).expect_str()
    }
}

impl AttrKey for VersionAttr {
    fn default_value(self) -> AttrValue {
        match self {
            Self::Name | Self::Access | Self::Column | Self::UnsavedValue | Self::Generated => {
                AttrValue::empty_str()
            }
        }
    }
}
