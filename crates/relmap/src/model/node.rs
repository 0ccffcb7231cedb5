use super::{
    ClassMapping, CollectionMapping, ColumnMapping, ComponentMapping, KeyMapping,
    ManyToManyMapping, OneToManyMapping, Relationship, SubclassMapping, VersionMapping, Visit,
    VisitMut,
};

use std::fmt;

/// Double dispatch: each mapping node forwards to its single designated
/// visitor method.
pub trait Node: fmt::Debug {
    fn visit<V: Visit>(&self, visit: &mut V);

    fn visit_mut<V: VisitMut>(&mut self, visit: &mut V);
}

macro_rules! impl_node {
    ($ty:ident, $visit:ident, $visit_mut:ident) => {
        impl Node for $ty {
            fn visit<V: Visit>(&self, visit: &mut V) {
                visit.$visit(self);
            }

            fn visit_mut<V: VisitMut>(&mut self, visit: &mut V) {
                visit.$visit_mut(self);
            }
        }
    };
}

impl_node!(ClassMapping, visit_class, visit_class_mut);
impl_node!(SubclassMapping, visit_subclass, visit_subclass_mut);
impl_node!(CollectionMapping, visit_collection, visit_collection_mut);
impl_node!(ComponentMapping, visit_component, visit_component_mut);
impl_node!(VersionMapping, visit_version, visit_version_mut);
impl_node!(KeyMapping, visit_key, visit_key_mut);
impl_node!(ColumnMapping, visit_column, visit_column_mut);
impl_node!(Relationship, visit_relationship, visit_relationship_mut);
impl_node!(OneToManyMapping, visit_one_to_many, visit_one_to_many_mut);
impl_node!(ManyToManyMapping, visit_many_to_many, visit_many_to_many_mut);

impl<T: Node> Node for Option<T> {
    fn visit<V: Visit>(&self, visit: &mut V) {
        if let Some(node) = self {
            node.visit(visit);
        }
    }

    fn visit_mut<V: VisitMut>(&mut self, visit: &mut V) {
        if let Some(node) = self {
            node.visit_mut(visit);
        }
    }
}
