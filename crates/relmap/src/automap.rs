pub mod many_to_many;
pub use many_to_many::ManyToMany;

pub mod one_to_many;
pub use one_to_many::OneToMany;

mod target;
pub use target::AutoMapTarget;

pub mod version;
pub use version::Version;

use crate::conventions::Conventions;
use crate::domain::{DomainTypes, Property, TypeId};
use crate::model::ClassMapping;
use crate::Result;

/// One structural-inference rule.
///
/// `maps_property` is a pure predicate with no side effects, safe to call
/// speculatively for every member of every type. `map` must only be called
/// for members the predicate accepted; anything else is a contract
/// violation that aborts the run for the affected type.
pub trait AutoMapper {
    fn maps_property(&self, types: &DomainTypes, prop: &Property) -> bool;

    fn map(&self, types: &DomainTypes, target: AutoMapTarget<'_>, prop: &Property) -> Result<()>;
}

/// Runs the inference rules over a domain type's members and assembles a
/// class mapping from the fragments they emit.
pub struct Mapper<'a> {
    types: &'a DomainTypes,
    rules: Vec<Box<dyn AutoMapper + 'a>>,
}

impl<'a> Mapper<'a> {
    /// Rule order matters: many-to-many is tried before one-to-many so a
    /// bidirectional collection pair is not claimed by the weaker rule.
    pub fn new(types: &'a DomainTypes, conventions: &'a dyn Conventions) -> Self {
        Self {
            types,
            rules: vec![
                Box::new(Version),
                Box::new(ManyToMany::new(conventions)),
                Box::new(OneToMany::new(conventions)),
            ],
        }
    }

    pub fn map_class(&self, ty: TypeId) -> Result<ClassMapping> {
        let mut mapping = ClassMapping::new(ty);

        for prop in &self.types.ty(ty).properties {
            let rule = self
                .rules
                .iter()
                .find(|rule| rule.maps_property(self.types, prop));

            if let Some(rule) = rule {
                rule.map(self.types, AutoMapTarget::Class(&mut mapping), prop)?;
            }
        }

        Ok(mapping)
    }
}
