use crate::domain::{DomainTypes, TypeId, TypeKind};
use crate::model::{visit_mut, ClassBody, ClassMapping, SubclassKind, SubclassMapping, VisitMut};
use crate::provider::MappingProvider;

use std::collections::BTreeMap;

/// Nests separately provided subclass mappings under their closest mapped
/// ancestor in the tree.
///
/// Providers come in as a flat list; each visited class or subclass node
/// claims the providers at minimal hierarchy distance from its own type,
/// and the continued traversal into the freshly attached children places
/// the rest level by level. A provider whose type is unrelated to the node
/// yields no distance and is skipped.
pub struct SubclassOrganizer<'a> {
    types: &'a DomainTypes,
    providers: &'a [&'a dyn MappingProvider],
}

impl<'a> SubclassOrganizer<'a> {
    pub fn new(types: &'a DomainTypes, providers: &'a [&'a dyn MappingProvider]) -> Self {
        Self { types, providers }
    }

    pub fn organize(&mut self, root: &mut ClassMapping) {
        self.visit_class_mut(root);
    }

    fn attach_closest(&self, body: &mut ClassBody, kind: SubclassKind) {
        for provider in self.closest_providers(body.ty) {
            // Re-running the organizer over an already organized tree must
            // not attach the same provider type twice.
            if body.has_subclass(provider.ty()) {
                continue;
            }

            let mut subclass = SubclassMapping::new(kind, provider.ty());
            provider.materialize().apply_to(&mut subclass);
            body.add_subclass(subclass);
        }
    }

    /// Only the minimum-distance bucket attaches at this level; ties become
    /// siblings. Everything farther away is picked up when its own ancestor
    /// node is processed.
    fn closest_providers(&self, ty: TypeId) -> Vec<&'a dyn MappingProvider> {
        let mut buckets: BTreeMap<usize, Vec<&'a dyn MappingProvider>> = BTreeMap::new();

        for provider in self.providers {
            if let Some(distance) = self.distance(ty, provider.ty()) {
                buckets.entry(distance).or_default().push(*provider);
            }
        }

        buckets
            .into_iter()
            .next()
            .map(|(_, providers)| providers)
            .unwrap_or_default()
    }

    fn distance(&self, reference: TypeId, candidate: TypeId) -> Option<usize> {
        match self.types.ty(reference).kind {
            TypeKind::Interface => self.interface_distance(reference, candidate),
            TypeKind::Class { .. } => {
                let base = self.types.base_of(candidate)?;
                self.class_distance(reference, base, 0)
            }
        }
    }

    /// Distance of `candidate` below an interface reference: the number of
    /// successive base types that are themselves provided. Walking stops at
    /// the first base that is unprovided or that no longer implements the
    /// interface; that base is the nearest boundary. A candidate qualifies
    /// at all only if it implements the interface.
    fn interface_distance(&self, reference: TypeId, candidate: TypeId) -> Option<usize> {
        if !self.types.implements(candidate, reference) {
            return None;
        }

        let mut distance = 0;
        let mut current = candidate;

        while let Some(base) = self.types.base_of(current) {
            if !self.is_provided(base) {
                break;
            }

            distance += 1;

            if !self.types.implements(base, reference) {
                break;
            }

            current = base;
        }

        Some(distance)
    }

    /// Distance of a candidate's base chain below a class reference. Each
    /// provided intermediate base adds one step, because that base must
    /// absorb the candidate when it is processed as its own subclass node.
    /// Running out of bases without reaching the reference disqualifies the
    /// candidate entirely.
    fn class_distance(&self, reference: TypeId, eval: TypeId, distance: usize) -> Option<usize> {
        if eval == reference {
            return Some(distance);
        }

        let next = self.types.base_of(eval)?;
        let distance = distance + usize::from(self.is_provided(eval));

        self.class_distance(reference, next, distance)
    }

    fn is_provided(&self, ty: TypeId) -> bool {
        self.providers.iter().any(|provider| provider.ty() == ty)
    }
}

impl VisitMut for SubclassOrganizer<'_> {
    fn visit_class_mut(&mut self, node: &mut ClassMapping) {
        let kind = if node.discriminator.is_some() {
            SubclassKind::Subclass
        } else {
            SubclassKind::JoinedSubclass
        };

        self.attach_closest(&mut node.body, kind);

        // Default traversal recurses into the freshly attached subclasses,
        // so deeper providers are claimed by the level that owns them.
        visit_mut::visit_class_mut(self, node);
    }

    fn visit_subclass_mut(&mut self, node: &mut SubclassMapping) {
        // Nested subclass strategy must match siblings.
        let kind = node.kind;
        self.attach_closest(&mut node.body, kind);

        visit_mut::visit_subclass_mut(self, node);
    }
}
