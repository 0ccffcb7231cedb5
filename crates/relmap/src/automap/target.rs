use crate::domain::{PropertyId, TypeId};
use crate::model::{ClassMapping, CollectionMapping, ComponentMapping, SubclassMapping, VersionMapping};

/// A class-based node an inference rule may attach fragments to.
#[derive(Debug)]
pub enum AutoMapTarget<'a> {
    Class(&'a mut ClassMapping),
    Subclass(&'a mut SubclassMapping),
    Component(&'a mut ComponentMapping),
}

impl AutoMapTarget<'_> {
    /// Containing entity type for fragments attached to this target. For a
    /// component this is the component's own type, which is also the
    /// declaring type of the members being mapped.
    pub fn ty(&self) -> TypeId {
        match self {
            Self::Class(class) => class.ty(),
            Self::Subclass(subclass) => subclass.ty(),
            Self::Component(component) => component.ty,
        }
    }

    /// The component member through which this target is reached, when the
    /// target is itself a component.
    pub fn component_member(&self) -> Option<PropertyId> {
        match self {
            Self::Component(component) => Some(component.member),
            _ => None,
        }
    }

    pub fn add_collection(&mut self, collection: CollectionMapping) {
        match self {
            Self::Class(class) => class.body.add_collection(collection),
            Self::Subclass(subclass) => subclass.body.add_collection(collection),
            Self::Component(component) => component.add_collection(collection),
        }
    }

    pub fn add_version(&mut self, version: VersionMapping) {
        match self {
            Self::Class(class) => class.body.add_version(version),
            Self::Subclass(subclass) => subclass.body.add_version(version),
            Self::Component(component) => component.add_version(version),
        }
    }
}
