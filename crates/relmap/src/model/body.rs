use super::{CollectionMapping, ComponentMapping, SubclassMapping, VersionMapping};
use crate::domain::TypeId;

/// Parts shared by every class-based node: the domain type it was derived
/// from, its ordered non-subclass children, and nested subclasses.
#[derive(Debug, Clone)]
pub struct ClassBody {
    /// Containing entity type
    pub ty: TypeId,

    /// Collections, components, and the version, in insertion order
    pub children: Vec<ClassChild>,

    /// Nested subclasses, visited after the other children
    pub subclasses: Vec<SubclassMapping>,
}

#[derive(Debug, Clone)]
pub enum ClassChild {
    Collection(CollectionMapping),
    Component(ComponentMapping),
    Version(VersionMapping),
}

impl ClassBody {
    pub fn new(ty: TypeId) -> Self {
        Self {
            ty,
            children: vec![],
            subclasses: vec![],
        }
    }

    pub fn add_collection(&mut self, collection: CollectionMapping) {
        self.children.push(collection.into());
    }

    pub fn add_component(&mut self, component: ComponentMapping) {
        self.children.push(component.into());
    }

    /// A class has at most one version; the first one attached wins.
    pub fn add_version(&mut self, version: VersionMapping) {
        if self.version().is_none() {
            self.children.push(version.into());
        }
    }

    /// Attach a nested subclass. A subclass type attaches at most once; a
    /// duplicate is dropped.
    pub fn add_subclass(&mut self, subclass: SubclassMapping) {
        if self.has_subclass(subclass.ty()) {
            return;
        }

        self.subclasses.push(subclass);
    }

    pub fn has_subclass(&self, ty: TypeId) -> bool {
        self.subclasses.iter().any(|subclass| subclass.ty() == ty)
    }

    pub fn version(&self) -> Option<&VersionMapping> {
        self.children.iter().find_map(|child| match child {
            ClassChild::Version(version) => Some(version),
            _ => None,
        })
    }

    pub fn collections(&self) -> impl Iterator<Item = &CollectionMapping> {
        self.children.iter().filter_map(|child| match child {
            ClassChild::Collection(collection) => Some(collection),
            _ => None,
        })
    }

    pub fn components(&self) -> impl Iterator<Item = &ComponentMapping> {
        self.children.iter().filter_map(|child| match child {
            ClassChild::Component(component) => Some(component),
            _ => None,
        })
    }
}

impl From<CollectionMapping> for ClassChild {
    fn from(value: CollectionMapping) -> Self {
        Self::Collection(value)
    }
}

impl From<ComponentMapping> for ClassChild {
    fn from(value: ComponentMapping) -> Self {
        Self::Component(value)
    }
}

impl From<VersionMapping> for ClassChild {
    fn from(value: VersionMapping) -> Self {
        Self::Version(value)
    }
}
