use super::ColumnMapping;
use crate::attr::{AttrKey, AttrValue, AttributeStore};
use crate::domain::TypeId;

/// How collection elements relate to the containing entity.
#[derive(Debug, Clone)]
pub enum Relationship {
    OneToMany(OneToManyMapping),
    ManyToMany(ManyToManyMapping),
}

/// Many-to-many association through a link table. Exactly one side of a
/// bidirectional pair owns the association definition; the other side is
/// flagged inverse on its collection.
#[derive(Debug, Clone)]
pub struct ManyToManyMapping {
    pub attributes: AttributeStore<RelationshipAttr>,

    /// Element type on the far side
    pub child_ty: TypeId,

    /// Containing entity type
    pub containing_ty: TypeId,

    /// Default columns referencing the child side of the link table
    pub columns: Vec<ColumnMapping>,
}

/// One-to-many association keyed directly on the child table.
#[derive(Debug, Clone)]
pub struct OneToManyMapping {
    pub attributes: AttributeStore<RelationshipAttr>,

    /// Element type on the far side
    pub child_ty: TypeId,

    /// Containing entity type
    pub containing_ty: TypeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipAttr {
    Fetch,
    NotFound,
}

impl Relationship {
    pub fn is_many_to_many(&self) -> bool {
        matches!(self, Self::ManyToMany(..))
    }

    pub fn as_many_to_many(&self) -> Option<&ManyToManyMapping> {
        match self {
            Self::ManyToMany(relationship) => Some(relationship),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_many_to_many(&self) -> &ManyToManyMapping {
        match self {
            Self::ManyToMany(relationship) => relationship,
            _ => panic!("expected relationship to be `ManyToMany`, but was {self:?}"),
        }
    }

    pub fn is_one_to_many(&self) -> bool {
        matches!(self, Self::OneToMany(..))
    }

    pub fn as_one_to_many(&self) -> Option<&OneToManyMapping> {
        match self {
            Self::OneToMany(relationship) => Some(relationship),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_one_to_many(&self) -> &OneToManyMapping {
        match self {
            Self::OneToMany(relationship) => relationship,
            _ => panic!("expected relationship to be `OneToMany`, but was {self:?}"),
        }
    }
}

impl ManyToManyMapping {
    pub fn new(child_ty: TypeId, containing_ty: TypeId) -> Self {
        Self {
            attributes: AttributeStore::new(),
            child_ty,
            containing_ty,
            columns: vec![],
        }
    }

    pub fn add_default_column(&mut self, column: ColumnMapping) {
        self.columns.push(column);
    }
}

impl OneToManyMapping {
    pub fn new(child_ty: TypeId, containing_ty: TypeId) -> Self {
        Self {
            attributes: AttributeStore::new(),
            child_ty,
            containing_ty,
        }
    }
}

impl From<ManyToManyMapping> for Relationship {
    fn from(value: ManyToManyMapping) -> Self {
        Self::ManyToMany(value)
    }
}

impl From<OneToManyMapping> for Relationship {
    fn from(value: OneToManyMapping) -> Self {
        Self::OneToMany(value)
    }
}

impl AttrKey for RelationshipAttr {
    fn default_value(self) -> AttrValue {
        match self {
            Self::Fetch | Self::NotFound => AttrValue::empty_str(),
        }
    }
}
