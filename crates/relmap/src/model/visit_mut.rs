#![allow(unused_variables)]

use super::{
    ClassChild, ClassMapping, CollectionMapping, ColumnMapping, ComponentMapping, KeyMapping,
    ManyToManyMapping, OneToManyMapping, Relationship, SubclassMapping, VersionMapping,
};

/// Mutable traversal over the mapping-model tree.
///
/// Same shape and order as [`Visit`](super::Visit); children attached by an
/// overriding method before it delegates to the default traversal are
/// visited in the same pass.
pub trait VisitMut {
    fn visit_class_mut(&mut self, i: &mut ClassMapping) {
        visit_class_mut(self, i);
    }

    fn visit_subclass_mut(&mut self, i: &mut SubclassMapping) {
        visit_subclass_mut(self, i);
    }

    fn visit_collection_mut(&mut self, i: &mut CollectionMapping) {
        visit_collection_mut(self, i);
    }

    fn visit_component_mut(&mut self, i: &mut ComponentMapping) {
        visit_component_mut(self, i);
    }

    fn visit_version_mut(&mut self, i: &mut VersionMapping) {
        visit_version_mut(self, i);
    }

    fn visit_key_mut(&mut self, i: &mut KeyMapping) {
        visit_key_mut(self, i);
    }

    fn visit_column_mut(&mut self, i: &mut ColumnMapping) {
        visit_column_mut(self, i);
    }

    fn visit_relationship_mut(&mut self, i: &mut Relationship) {
        visit_relationship_mut(self, i);
    }

    fn visit_one_to_many_mut(&mut self, i: &mut OneToManyMapping) {
        visit_one_to_many_mut(self, i);
    }

    fn visit_many_to_many_mut(&mut self, i: &mut ManyToManyMapping) {
        visit_many_to_many_mut(self, i);
    }
}

pub fn visit_class_mut<V>(v: &mut V, node: &mut ClassMapping)
where
    V: VisitMut + ?Sized,
{
    if let Some(column) = &mut node.discriminator {
        v.visit_column_mut(column);
    }

    visit_children_mut(v, &mut node.body.children);

    for subclass in &mut node.body.subclasses {
        v.visit_subclass_mut(subclass);
    }
}

pub fn visit_subclass_mut<V>(v: &mut V, node: &mut SubclassMapping)
where
    V: VisitMut + ?Sized,
{
    visit_children_mut(v, &mut node.body.children);

    for subclass in &mut node.body.subclasses {
        v.visit_subclass_mut(subclass);
    }
}

pub fn visit_collection_mut<V>(v: &mut V, node: &mut CollectionMapping)
where
    V: VisitMut + ?Sized,
{
    v.visit_relationship_mut(&mut node.relationship);
    v.visit_key_mut(&mut node.key);
}

pub fn visit_component_mut<V>(v: &mut V, node: &mut ComponentMapping)
where
    V: VisitMut + ?Sized,
{
    visit_children_mut(v, &mut node.children);
}

pub fn visit_version_mut<V>(v: &mut V, node: &mut VersionMapping)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_key_mut<V>(v: &mut V, node: &mut KeyMapping)
where
    V: VisitMut + ?Sized,
{
    for column in &mut node.columns {
        v.visit_column_mut(column);
    }
}

pub fn visit_column_mut<V>(v: &mut V, node: &mut ColumnMapping)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_relationship_mut<V>(v: &mut V, node: &mut Relationship)
where
    V: VisitMut + ?Sized,
{
    match node {
        Relationship::OneToMany(relationship) => v.visit_one_to_many_mut(relationship),
        Relationship::ManyToMany(relationship) => v.visit_many_to_many_mut(relationship),
    }
}

pub fn visit_one_to_many_mut<V>(v: &mut V, node: &mut OneToManyMapping)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_many_to_many_mut<V>(v: &mut V, node: &mut ManyToManyMapping)
where
    V: VisitMut + ?Sized,
{
    for column in &mut node.columns {
        v.visit_column_mut(column);
    }
}

fn visit_children_mut<V>(v: &mut V, children: &mut [ClassChild])
where
    V: VisitMut + ?Sized,
{
    for child in children {
        match child {
            ClassChild::Collection(collection) => v.visit_collection_mut(collection),
            ClassChild::Component(component) => v.visit_component_mut(component),
            ClassChild::Version(version) => v.visit_version_mut(version),
        }
    }
}
