use crate::domain::{DomainTypes, PropertyId, TypeId};

/// Naming and ownership policy consulted by the inference rules.
pub trait Conventions {
    /// Decides the owning side of a bidirectional many-to-many between the
    /// two declaring types. Must return one of the two arguments, and the
    /// same answer regardless of argument order.
    fn many_to_many_parent_side(&self, lhs: TypeId, rhs: TypeId) -> TypeId;

    /// Column prefix applied to key columns of collections reached through
    /// a component member, so two components of the same type embedding the
    /// same collection do not collide.
    fn component_column_prefix(&self, types: &DomainTypes, member: PropertyId) -> String;
}

/// Default policy: the earlier-registered type owns the relationship, and
/// component prefixes are the member name followed by an underscore.
#[derive(Debug, Default)]
pub struct DefaultConventions;

impl Conventions for DefaultConventions {
    fn many_to_many_parent_side(&self, lhs: TypeId, rhs: TypeId) -> TypeId {
        if lhs <= rhs {
            lhs
        } else {
            rhs
        }
    }

    fn component_column_prefix(&self, types: &DomainTypes, member: PropertyId) -> String {
        format!("{}_", types.property(member).name)
    }
}
