use crate::attr::AttributeStore;
use crate::domain::TypeId;
use crate::model::{ClassChild, SubclassAttr, SubclassMapping};

use std::mem;

/// An external unit able to materialize the mapping fragment for exactly
/// one domain type. The subclass organizer never looks past the type.
pub trait MappingProvider {
    fn ty(&self) -> TypeId;

    fn materialize(&self) -> MappingFragment;
}

/// Opaque result of materializing a provider, applied onto a subclass node.
#[derive(Debug, Clone)]
pub struct MappingFragment {
    /// The domain type the fragment was built for
    pub ty: TypeId,

    /// Attribute values mapped by the provider
    pub attributes: AttributeStore<SubclassAttr>,

    /// Children mapped by the provider
    pub children: Vec<ClassChild>,
}

impl MappingFragment {
    pub fn new(ty: TypeId) -> Self {
        Self {
            ty,
            attributes: AttributeStore::new(),
            children: vec![],
        }
    }

    /// Copies the fragment onto `target`. The fragment's attributes become
    /// the local layer; whatever the target already carried stays reachable
    /// as the fallback layer.
    pub fn apply_to(&self, target: &mut SubclassMapping) {
        debug_assert_eq!(self.ty, target.ty());

        let existing = mem::take(&mut target.attributes);
        let mut attributes = self.attributes.clone();
        attributes.set_fallback(existing);
        target.attributes = attributes;

        target.body.children.extend(self.children.iter().cloned());
    }
}
