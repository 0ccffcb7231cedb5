use super::{Property, TypeId};

#[derive(Debug, Clone)]
pub struct DomainType {
    /// Uniquely identifies the type within the registry
    pub id: TypeId,

    /// Simple (unqualified) type name; used for default column naming
    pub name: String,

    /// Concrete class or interface
    pub kind: TypeKind,

    /// Interfaces implemented directly by this type
    pub interfaces: Vec<TypeId>,

    /// Declared properties, in declaration order
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class { base: Option<TypeId> },
    Interface,
}

impl DomainType {
    pub fn is_interface(&self) -> bool {
        matches!(self.kind, TypeKind::Interface)
    }

    /// The direct base class, if any. Interfaces have no base.
    pub fn base(&self) -> Option<TypeId> {
        match self.kind {
            TypeKind::Class { base } => base,
            TypeKind::Interface => None,
        }
    }

    pub fn property_by_name(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|prop| prop.name == name)
    }
}
