use super::{AutoMapTarget, AutoMapper};
use crate::attr::AttributeStore;
use crate::conventions::Conventions;
use crate::domain::{DomainTypes, Property};
use crate::model::{
    CollectionAttr, CollectionMapping, ColumnMapping, KeyMapping, OneToManyMapping,
};
use crate::{Error, Result};

/// Maps a collection member without requiring an inverse side; the key
/// lands directly on the child table. Tried after the many-to-many rule so
/// bidirectional pairs are claimed by the stronger shape first.
pub struct OneToMany<'a> {
    conventions: &'a dyn Conventions,
}

impl<'a> OneToMany<'a> {
    pub fn new(conventions: &'a dyn Conventions) -> Self {
        Self { conventions }
    }
}

impl AutoMapper for OneToMany<'_> {
    fn maps_property(&self, _types: &DomainTypes, prop: &Property) -> bool {
        prop.is_collection()
    }

    fn map(&self, types: &DomainTypes, mut target: AutoMapTarget<'_>, prop: &Property) -> Result<()> {
        let Some(shape) = prop.ty.as_collection() else {
            return Err(Error::ineligible_member(types, prop.id));
        };

        let mut column_name = format!("{}_id", types.ty(prop.declaring_ty()).name);

        if let Some(member) = target.component_member() {
            let prefix = self.conventions.component_column_prefix(types, member);
            column_name = format!("{prefix}{column_name}");
        }

        let mut key = KeyMapping::new(target.ty());
        key.add_default_column(ColumnMapping::named(column_name));

        let mut collection = CollectionMapping {
            attributes: AttributeStore::new(),
            member: prop.id,
            kind: shape.kind,
            child_ty: shape.element,
            containing_ty: target.ty(),
            relationship: OneToManyMapping::new(shape.element, target.ty()).into(),
            key,
        };
        collection
            .attributes
            .set(CollectionAttr::Name, prop.name.as_str());

        target.add_collection(collection);
        Ok(())
    }
}
