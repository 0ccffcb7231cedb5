mod property;
pub use property::{CollectionKind, CollectionShape, Property, PropertyId, PropertyTy};

mod ty;
pub use ty::{DomainType, TypeKind};

use std::fmt;

/// Pre-computed metadata for every domain type participating in a mapping
/// run.
///
/// Stands in for runtime reflection: the shape of each type (properties,
/// base class, implemented interfaces) is registered up front and stays
/// stable for the duration of the run.
#[derive(Debug, Default)]
pub struct DomainTypes {
    types: Vec<DomainType>,
}

/// Uniquely identifies a domain type within the registry
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub usize);

impl DomainTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, name: &str, base: Option<TypeId>) -> TypeId {
        self.add(name, TypeKind::Class { base })
    }

    pub fn add_interface(&mut self, name: &str) -> TypeId {
        self.add(name, TypeKind::Interface)
    }

    fn add(&mut self, name: &str, kind: TypeKind) -> TypeId {
        let id = TypeId(self.types.len());

        self.types.push(DomainType {
            id,
            name: name.to_string(),
            kind,
            interfaces: vec![],
            properties: vec![],
        });

        id
    }

    /// Record that `ty` implements (or, for an interface, extends) `iface`.
    pub fn implement(&mut self, ty: TypeId, iface: TypeId) {
        let interfaces = &mut self.types[ty.0].interfaces;

        if !interfaces.contains(&iface) {
            interfaces.push(iface);
        }
    }

    pub fn add_property(&mut self, owner: TypeId, name: &str, ty: PropertyTy) -> PropertyId {
        let owner_ty = &mut self.types[owner.0];
        let id = PropertyId {
            owner,
            index: owner_ty.properties.len(),
        };

        owner_ty.properties.push(Property {
            id,
            name: name.to_string(),
            ty,
        });

        id
    }

    pub fn ty(&self, id: impl Into<TypeId>) -> &DomainType {
        &self.types[id.into().0]
    }

    pub fn property(&self, id: PropertyId) -> &Property {
        &self.types[id.owner.0].properties[id.index]
    }

    pub fn base_of(&self, id: TypeId) -> Option<TypeId> {
        self.ty(id).base()
    }

    /// True if `ty` implements `iface` anywhere in its interface closure,
    /// including interfaces picked up through the base-class chain and
    /// through interface extension.
    pub fn implements(&self, ty: TypeId, iface: TypeId) -> bool {
        let t = self.ty(ty);

        if t.interfaces
            .iter()
            .any(|&i| i == iface || self.implements(i, iface))
        {
            return true;
        }

        match t.kind {
            TypeKind::Class { base: Some(base) } => self.implements(base, iface),
            _ => false,
        }
    }

    pub fn types(&self) -> impl Iterator<Item = &DomainType> {
        self.types.iter()
    }
}

impl From<&DomainType> for TypeId {
    fn from(value: &DomainType) -> Self {
        value.id
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TypeId({})", self.0)
    }
}
