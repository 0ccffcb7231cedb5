use super::TypeId;

use std::fmt;

#[derive(Debug, Clone)]
pub struct Property {
    /// Uniquely identifies the property within the declaring type
    pub id: PropertyId,

    /// The property name
    pub name: String,

    /// Declared shape of the property
    pub ty: PropertyTy,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PropertyId {
    pub owner: TypeId,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyTy {
    /// Plain value member; its exact type is irrelevant to structural
    /// inference
    Scalar,

    /// Reference to another domain type
    Entity(TypeId),

    /// Generic collection member
    Collection(CollectionShape),
}

/// A generic collection kind instantiated with an element type. Two members
/// have the same shape when both components are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionShape {
    pub kind: CollectionKind,
    pub element: TypeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// Ordered set semantics
    Set,

    /// Generic sequence (list/bag) semantics
    Seq,
}

impl Property {
    /// The type that declares this property.
    pub fn declaring_ty(&self) -> TypeId {
        self.id.owner
    }

    pub fn is_collection(&self) -> bool {
        self.ty.as_collection().is_some()
    }
}

impl PropertyTy {
    pub fn as_collection(&self) -> Option<CollectionShape> {
        match self {
            Self::Collection(shape) => Some(*shape),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_collection(&self) -> CollectionShape {
        match self {
            Self::Collection(shape) => *shape,
            _ => panic!("expected collection property, but was {self:?}"),
        }
    }
}

impl CollectionShape {
    /// The same collection kind applied to a different element type.
    pub fn with_element(self, element: TypeId) -> Self {
        Self { element, ..self }
    }
}

impl From<&Property> for PropertyId {
    fn from(value: &Property) -> Self {
        value.id
    }
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "PropertyId({}/{})", self.owner.0, self.index)
    }
}
