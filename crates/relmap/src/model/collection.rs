use super::{KeyMapping, Relationship};
use crate::attr::{AttrKey, AttrValue, AttributeStore};
use crate::domain::{CollectionKind, PropertyId, TypeId};

/// Mapping for a collection-valued member.
#[derive(Debug, Clone)]
pub struct CollectionMapping {
    pub attributes: AttributeStore<CollectionAttr>,

    /// The member this collection was derived from
    pub member: PropertyId,

    /// Collection semantics of the member (set or sequence)
    pub kind: CollectionKind,

    /// Element type of the collection
    pub child_ty: TypeId,

    /// Containing entity type
    pub containing_ty: TypeId,

    /// How the elements relate to the owner
    pub relationship: Relationship,

    /// Foreign key back to the owner
    pub key: KeyMapping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionAttr {
    Name,
    TableName,
    Inverse,
    Lazy,
    Cascade,
    Access,
}

impl CollectionMapping {
    /// True for the side of a bidirectional relationship that does not own
    /// the association definition.
    pub fn is_inverse(&self) -> bool {
        self.attributes.get(CollectionAttr::Inverse).expect_bool()
    }

    pub fn set_inverse(&mut self) {
        self.attributes.set(CollectionAttr::Inverse, true);
    }

    pub fn name(&self) -> String {
        self.attributes.get(CollectionAttr::Name).expect_str()
    }
}

impl AttrKey for CollectionAttr {
    fn default_value(self) -> AttrValue {
        match self {
            Self::Name | Self::TableName | Self::Cascade | Self::Access => AttrValue::empty_str(),
            Self::Inverse | Self::Lazy => AttrValue::Bool(false),
        }
    }
}
