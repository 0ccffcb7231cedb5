use super::{AutoMapTarget, AutoMapper};
use crate::attr::AttributeStore;
use crate::conventions::Conventions;
use crate::domain::{DomainTypes, Property};
use crate::model::{
    CollectionAttr, CollectionMapping, ColumnMapping, KeyMapping, ManyToManyMapping,
};
use crate::{Error, Result};

/// Infers a bidirectional many-to-many from a pair of mutual collection
/// members.
///
/// A member is eligible when it has a supported collection shape and the
/// element type declares an inverse member of the mirrored shape. Exactly
/// one side of the pair ends up owning the association; the other side's
/// collection is flagged inverse.
pub struct ManyToMany<'a> {
    conventions: &'a dyn Conventions,
}

impl<'a> ManyToMany<'a> {
    pub fn new(conventions: &'a dyn Conventions) -> Self {
        Self { conventions }
    }

    /// Finds the member on the element type whose declared shape is this
    /// member's collection kind instantiated with the declaring type. First
    /// match in declaration order wins; multiple structurally identical
    /// candidates are not disambiguated. The originating member itself
    /// never qualifies, so a self-referential collection without a distinct
    /// inverse stays ineligible.
    fn inverse_property<'t>(
        &self,
        types: &'t DomainTypes,
        prop: &Property,
    ) -> Option<&'t Property> {
        let shape = prop.ty.as_collection()?;
        let inverse_shape = shape.with_element(prop.declaring_ty());

        types.ty(shape.element).properties.iter().find(|candidate| {
            candidate.id != prop.id && candidate.ty.as_collection() == Some(inverse_shape)
        })
    }

    fn key(&self, types: &DomainTypes, target: &AutoMapTarget<'_>, prop: &Property) -> KeyMapping {
        let mut column_name = format!("{}_id", types.ty(prop.declaring_ty()).name);

        if let Some(member) = target.component_member() {
            let prefix = self.conventions.component_column_prefix(types, member);
            column_name = format!("{prefix}{column_name}");
        }

        let mut key = KeyMapping::new(target.ty());
        key.add_default_column(ColumnMapping::named(column_name));
        key
    }
}

impl AutoMapper for ManyToMany<'_> {
    fn maps_property(&self, types: &DomainTypes, prop: &Property) -> bool {
        prop.is_collection() && self.inverse_property(types, prop).is_some()
    }

    fn map(&self, types: &DomainTypes, mut target: AutoMapTarget<'_>, prop: &Property) -> Result<()> {
        let Some(inverse) = self.inverse_property(types, prop) else {
            return Err(Error::ineligible_member(types, prop.id));
        };

        let shape = prop.ty.expect_collection();
        let parent_side = self
            .conventions
            .many_to_many_parent_side(prop.declaring_ty(), inverse.declaring_ty());

        let mut relationship = ManyToManyMapping::new(shape.element, target.ty());
        relationship.add_default_column(ColumnMapping::named(format!(
            "{}_id",
            types.ty(shape.element).name
        )));

        let mut collection = CollectionMapping {
            attributes: AttributeStore::new(),
            member: prop.id,
            kind: shape.kind,
            child_ty: shape.element,
            containing_ty: target.ty(),
            relationship: relationship.into(),
            key: self.key(types, &target, prop),
        };
        collection
            .attributes
            .set(CollectionAttr::Name, prop.name.as_str());

        if parent_side != prop.declaring_ty() {
            collection.set_inverse();
        }

        target.add_collection(collection);
        Ok(())
    }
}
