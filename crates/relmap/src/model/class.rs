use super::{ClassBody, ColumnMapping};
use crate::attr::{AttrKey, AttrValue, AttributeStore};
use crate::domain::TypeId;

/// Root mapping node for a domain type.
#[derive(Debug, Clone)]
pub struct ClassMapping {
    pub attributes: AttributeStore<ClassAttr>,

    /// Discriminator column, when the hierarchy shares one table. Its
    /// presence decides the strategy used for separately provided
    /// subclasses.
    pub discriminator: Option<ColumnMapping>,

    /// Shared class-based core: domain type, ordered children, subclasses
    pub body: ClassBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassAttr {
    TableName,
    Lazy,
    Mutable,
}

impl ClassMapping {
    pub fn new(ty: TypeId) -> Self {
        Self {
            attributes: AttributeStore::new(),
            discriminator: None,
            body: ClassBody::new(ty),
        }
    }

    /// The domain type this mapping was derived from.
    pub fn ty(&self) -> TypeId {
        self.body.ty
    }
}

impl AttrKey for ClassAttr {
    fn default_value(self) -> AttrValue {
        match self {
            Self::TableName => AttrValue::empty_str(),
            Self::Lazy | Self::Mutable => AttrValue::Bool(false),
        }
    }
}
