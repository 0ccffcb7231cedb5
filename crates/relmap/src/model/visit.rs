#![allow(unused_variables)]

use super::{
    ClassChild, ClassMapping, CollectionMapping, ColumnMapping, ComponentMapping, KeyMapping,
    ManyToManyMapping, OneToManyMapping, Relationship, SubclassMapping, VersionMapping,
};

/// Read-only traversal over the mapping-model tree.
///
/// Every method defaults to recursing into the node's children, so an
/// implementation can target one node kind and leave the traversal of the
/// rest intact. Traversal order for a class-based node: the node itself,
/// then each child in insertion order, then each subclass recursively.
pub trait Visit {
    fn visit_class(&mut self, i: &ClassMapping) {
        visit_class(self, i);
    }

    fn visit_subclass(&mut self, i: &SubclassMapping) {
        visit_subclass(self, i);
    }

    fn visit_collection(&mut self, i: &CollectionMapping) {
        visit_collection(self, i);
    }

    fn visit_component(&mut self, i: &ComponentMapping) {
        visit_component(self, i);
    }

    fn visit_version(&mut self, i: &VersionMapping) {
        visit_version(self, i);
    }

    fn visit_key(&mut self, i: &KeyMapping) {
        visit_key(self, i);
    }

    fn visit_column(&mut self, i: &ColumnMapping) {
        visit_column(self, i);
    }

    fn visit_relationship(&mut self, i: &Relationship) {
        visit_relationship(self, i);
    }

    fn visit_one_to_many(&mut self, i: &OneToManyMapping) {
        visit_one_to_many(self, i);
    }

    fn visit_many_to_many(&mut self, i: &ManyToManyMapping) {
        visit_many_to_many(self, i);
    }
}

pub fn visit_class<V>(v: &mut V, node: &ClassMapping)
where
    V: Visit + ?Sized,
{
    if let Some(column) = &node.discriminator {
        v.visit_column(column);
    }

    visit_children(v, &node.body.children);

    for subclass in &node.body.subclasses {
        v.visit_subclass(subclass);
    }
}

pub fn visit_subclass<V>(v: &mut V, node: &SubclassMapping)
where
    V: Visit + ?Sized,
{
    visit_children(v, &node.body.children);

    for subclass in &node.body.subclasses {
        v.visit_subclass(subclass);
    }
}

pub fn visit_collection<V>(v: &mut V, node: &CollectionMapping)
where
    V: Visit + ?Sized,
{
    v.visit_relationship(&node.relationship);
    v.visit_key(&node.key);
}

pub fn visit_component<V>(v: &mut V, node: &ComponentMapping)
where
    V: Visit + ?Sized,
{
    visit_children(v, &node.children);
}

pub fn visit_version<V>(v: &mut V, node: &VersionMapping)
where
    V: Visit + ?Sized,
{
}

pub fn visit_key<V>(v: &mut V, node: &KeyMapping)
where
    V: Visit + ?Sized,
{
    for column in &node.columns {
        v.visit_column(column);
    }
}

pub fn visit_column<V>(v: &mut V, node: &ColumnMapping)
where
    V: Visit + ?Sized,
{
}

pub fn visit_relationship<V>(v: &mut V, node: &Relationship)
where
    V: Visit + ?Sized,
{
    match node {
        Relationship::OneToMany(relationship) => v.visit_one_to_many(relationship),
        Relationship::ManyToMany(relationship) => v.visit_many_to_many(relationship),
    }
}

pub fn visit_one_to_many<V>(v: &mut V, node: &OneToManyMapping)
where
    V: Visit + ?Sized,
{
}

pub fn visit_many_to_many<V>(v: &mut V, node: &ManyToManyMapping)
where
    V: Visit + ?Sized,
{
    for column in &node.columns {
        v.visit_column(column);
    }
}

fn visit_children<V>(v: &mut V, children: &[ClassChild])
where
    V: Visit + ?Sized,
{
    for child in children {
        match child {
            ClassChild::Collection(collection) => v.visit_collection(collection),
            ClassChild::Component(component) => v.visit_component(component),
            ClassChild::Version(version) => v.visit_version(version),
        }
    }
}
