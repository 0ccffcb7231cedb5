use relmap::domain::{CollectionKind, CollectionShape, DomainTypes, PropertyId, PropertyTy, TypeId};
use relmap::provider::{MappingFragment, MappingProvider};

/// Provider that materializes an empty fragment for a fixed type.
pub struct StubProvider {
    ty: TypeId,
}

impl StubProvider {
    pub fn new(ty: TypeId) -> Self {
        Self { ty }
    }
}

impl MappingProvider for StubProvider {
    fn ty(&self) -> TypeId {
        self.ty
    }

    fn materialize(&self) -> MappingFragment {
        MappingFragment::new(self.ty)
    }
}

/// Registers `owner.{name}: Set<element>`.
pub fn set_property(
    types: &mut DomainTypes,
    owner: TypeId,
    name: &str,
    element: TypeId,
) -> PropertyId {
    types.add_property(
        owner,
        name,
        PropertyTy::Collection(CollectionShape {
            kind: CollectionKind::Set,
            element,
        }),
    )
}

/// Registers `owner.{name}: Seq<element>`.
pub fn seq_property(
    types: &mut DomainTypes,
    owner: TypeId,
    name: &str,
    element: TypeId,
) -> PropertyId {
    types.add_property(
        owner,
        name,
        PropertyTy::Collection(CollectionShape {
            kind: CollectionKind::Seq,
            element,
        }),
    )
}
