use super::{ClassChild, CollectionMapping, VersionMapping};
use crate::attr::{AttrKey, AttrValue, AttributeStore};
use crate::domain::{PropertyId, TypeId};

/// Mapping for a member whose type is flattened into the owner's table.
#[derive(Debug, Clone)]
pub struct ComponentMapping {
    pub attributes: AttributeStore<ComponentAttr>,

    /// The member the component was derived from
    pub member: PropertyId,

    /// The component's own type
    pub ty: TypeId,

    /// Containing entity type
    pub containing_ty: TypeId,

    /// Nested children, in insertion order. Components may own collections
    /// and nested components of their own.
    pub children: Vec<ClassChild>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentAttr {
    Name,
    Access,
    Insert,
    Update,
    Lazy,
}

impl ComponentMapping {
    pub fn new(member: PropertyId, ty: TypeId, containing_ty: TypeId) -> Self {
        Self {
            attributes: AttributeStore::new(),
            member,
            ty,
            containing_ty,
            children: vec![],
        }
    }

    pub fn add_collection(&mut self, collection: CollectionMapping) {
        self.children.push(collection.into());
    }

    pub fn add_component(&mut self, component: ComponentMapping) {
        self.children.push(component.into());
    }

    /// A component has at most one version; the first one attached wins.
    pub fn add_version(&mut self, version: VersionMapping) {
        let has_version = self
            .children
            .iter()
            .any(|child| matches!(child, ClassChild::Version(_)));

        if !has_version {
            self.children.push(version.into());
        }
    }
}

impl AttrKey for ComponentAttr {
    fn default_value(self) -> AttrValue {
        match self {
            Self::Name | Self::Access => AttrValue::empty_str(),
            Self::Insert | Self::Update | Self::Lazy => AttrValue::Bool(false),
        }
    }
}
