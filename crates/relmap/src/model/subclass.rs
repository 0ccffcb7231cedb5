use super::ClassBody;
use crate::attr::{AttrKey, AttrValue, AttributeStore};
use crate::domain::TypeId;

/// Mapping for a separately provided subclass, nested under its closest
/// mapped ancestor by the subclass organizer.
#[derive(Debug, Clone)]
pub struct SubclassMapping {
    /// Strategy shared with sibling subclasses
    pub kind: SubclassKind,

    pub attributes: AttributeStore<SubclassAttr>,

    /// Shared class-based core: domain type, ordered children, subclasses
    pub body: ClassBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubclassKind {
    /// Table per subclass; used when the parent class has no discriminator
    JoinedSubclass,

    /// Single table for the class family; requires a discriminator on the
    /// root class
    Subclass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubclassAttr {
    Name,
    DiscriminatorValue,
    Lazy,
    Abstract,
}

impl SubclassMapping {
    pub fn new(kind: SubclassKind, ty: TypeId) -> Self {
        Self {
            kind,
            attributes: AttributeStore::new(),
            body: ClassBody::new(ty),
        }
    }

    /// The domain type this mapping was derived from.
    pub fn ty(&self) -> TypeId {
        self.body.ty
    }
}

impl AttrKey for SubclassAttr {
    fn default_value(self) -> AttrValue {
        match self {
            Self::Name | Self::DiscriminatorValue => AttrValue::empty_str(),
            Self::Lazy | Self::Abstract => AttrValue::Bool(false),
        }
    }
}
