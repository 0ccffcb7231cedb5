use pretty_assertions::assert_eq;
use relmap::domain::{DomainTypes, TypeId};
use relmap::model::{ClassMapping, ColumnMapping, SubclassKind, SubclassMapping};
use relmap::provider::{MappingFragment, MappingProvider};
use relmap::SubclassOrganizer;
use tests::*;

fn subclass_types(subclasses: &[SubclassMapping]) -> Vec<TypeId> {
    subclasses.iter().map(|subclass| subclass.ty()).collect()
}

#[test]
fn hierarchy_nests_one_level_per_mapped_ancestor() {
    let mut types = DomainTypes::new();
    let animal = types.add_class("Animal", None);
    let dog = types.add_class("Dog", Some(animal));
    let poodle = types.add_class("Poodle", Some(dog));

    let dog_provider = StubProvider::new(dog);
    let poodle_provider = StubProvider::new(poodle);
    let providers: Vec<&dyn MappingProvider> = vec![&dog_provider, &poodle_provider];

    let mut mapping = ClassMapping::new(animal);
    SubclassOrganizer::new(&types, &providers).organize(&mut mapping);

    // Animal -> Subclass(Dog) -> Subclass(Poodle), never siblings.
    assert_eq!(subclass_types(&mapping.body.subclasses), [dog]);
    assert_eq!(
        subclass_types(&mapping.body.subclasses[0].body.subclasses),
        [poodle]
    );
}

#[test]
fn only_the_minimum_distance_bucket_attaches_per_level() {
    let mut types = DomainTypes::new();
    let animal = types.add_class("Animal", None);
    let dog = types.add_class("Dog", Some(animal));
    let lab = types.add_class("Labrador", Some(dog));
    let retriever = types.add_class("Retriever", Some(dog));
    let pup = types.add_class("LabradorPup", Some(lab));

    let provider_list = [
        StubProvider::new(dog),
        StubProvider::new(lab),
        StubProvider::new(retriever),
        StubProvider::new(pup),
    ];
    let providers: Vec<&dyn MappingProvider> =
        provider_list.iter().map(|p| p as &dyn MappingProvider).collect();

    let mut mapping = ClassMapping::new(animal);
    SubclassOrganizer::new(&types, &providers).organize(&mut mapping);

    assert_eq!(subclass_types(&mapping.body.subclasses), [dog]);

    let dog_node = &mapping.body.subclasses[0];
    assert_eq!(subclass_types(&dog_node.body.subclasses), [lab, retriever]);

    let lab_node = &dog_node.body.subclasses[0];
    assert_eq!(subclass_types(&lab_node.body.subclasses), [pup]);
}

#[test]
fn equal_distance_providers_become_siblings() {
    let mut types = DomainTypes::new();
    let animal = types.add_class("Animal", None);
    let dog = types.add_class("Dog", Some(animal));
    let cat = types.add_class("Cat", Some(animal));

    let dog_provider = StubProvider::new(dog);
    let cat_provider = StubProvider::new(cat);
    let providers: Vec<&dyn MappingProvider> = vec![&dog_provider, &cat_provider];

    let mut mapping = ClassMapping::new(animal);
    SubclassOrganizer::new(&types, &providers).organize(&mut mapping);

    assert_eq!(subclass_types(&mapping.body.subclasses), [dog, cat]);
}

#[test]
fn reorganizing_twice_attaches_each_provider_once() {
    let mut types = DomainTypes::new();
    let animal = types.add_class("Animal", None);
    let dog = types.add_class("Dog", Some(animal));
    let poodle = types.add_class("Poodle", Some(dog));

    let dog_provider = StubProvider::new(dog);
    let poodle_provider = StubProvider::new(poodle);
    let providers: Vec<&dyn MappingProvider> = vec![&dog_provider, &poodle_provider];

    let mut mapping = ClassMapping::new(animal);
    let mut organizer = SubclassOrganizer::new(&types, &providers);
    organizer.organize(&mut mapping);
    organizer.organize(&mut mapping);

    assert_eq!(subclass_types(&mapping.body.subclasses), [dog]);
    assert_eq!(
        subclass_types(&mapping.body.subclasses[0].body.subclasses),
        [poodle]
    );
}

#[test]
fn discriminator_presence_selects_the_subclass_strategy() {
    let mut types = DomainTypes::new();
    let animal = types.add_class("Animal", None);
    let dog = types.add_class("Dog", Some(animal));
    let poodle = types.add_class("Poodle", Some(dog));

    let dog_provider = StubProvider::new(dog);
    let poodle_provider = StubProvider::new(poodle);
    let providers: Vec<&dyn MappingProvider> = vec![&dog_provider, &poodle_provider];

    let mut plain = ClassMapping::new(animal);
    SubclassOrganizer::new(&types, &providers).organize(&mut plain);
    assert_eq!(plain.body.subclasses[0].kind, SubclassKind::JoinedSubclass);

    let mut discriminated = ClassMapping::new(animal);
    discriminated.discriminator = Some(ColumnMapping::named("kind"));
    SubclassOrganizer::new(&types, &providers).organize(&mut discriminated);

    let dog_node = &discriminated.body.subclasses[0];
    assert_eq!(dog_node.kind, SubclassKind::Subclass);
    // Nested levels copy the strategy of their parent subclass.
    assert_eq!(dog_node.body.subclasses[0].kind, SubclassKind::Subclass);
}

#[test]
fn interface_root_claims_the_nearest_provided_implementors() {
    let mut types = DomainTypes::new();
    let entity = types.add_interface("IEntity");
    let account = types.add_class("Account", None);
    let savings = types.add_class("SavingsAccount", Some(account));
    types.implement(account, entity);

    let account_provider = StubProvider::new(account);
    let savings_provider = StubProvider::new(savings);
    let providers: Vec<&dyn MappingProvider> = vec![&account_provider, &savings_provider];

    let mut mapping = ClassMapping::new(entity);
    SubclassOrganizer::new(&types, &providers).organize(&mut mapping);

    assert_eq!(subclass_types(&mapping.body.subclasses), [account]);
    assert_eq!(
        subclass_types(&mapping.body.subclasses[0].body.subclasses),
        [savings]
    );
}

#[test]
fn unrelated_providers_are_left_unattached() {
    let mut types = DomainTypes::new();
    let animal = types.add_class("Animal", None);
    let rock = types.add_class("Rock", None);

    let rock_provider = StubProvider::new(rock);
    let providers: Vec<&dyn MappingProvider> = vec![&rock_provider];

    let mut mapping = ClassMapping::new(animal);
    SubclassOrganizer::new(&types, &providers).organize(&mut mapping);

    assert!(mapping.body.subclasses.is_empty());
}

#[test]
fn provider_fragment_values_survive_attachment() {
    struct NamedProvider {
        ty: TypeId,
    }

    impl MappingProvider for NamedProvider {
        fn ty(&self) -> TypeId {
            self.ty
        }

        fn materialize(&self) -> MappingFragment {
            let mut fragment = MappingFragment::new(self.ty);
            fragment
                .attributes
                .set(relmap::model::SubclassAttr::Name, "Dog");
            fragment
        }
    }

    let mut types = DomainTypes::new();
    let animal = types.add_class("Animal", None);
    let dog = types.add_class("Dog", Some(animal));

    let provider = NamedProvider { ty: dog };
    let providers: Vec<&dyn MappingProvider> = vec![&provider];

    let mut mapping = ClassMapping::new(animal);
    SubclassOrganizer::new(&types, &providers).organize(&mut mapping);

    let attached = &mapping.body.subclasses[0];
    assert_eq!(
        attached
            .attributes
            .get(relmap::model::SubclassAttr::Name)
            .expect_str(),
        "Dog"
    );
}
