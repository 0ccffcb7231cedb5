use pretty_assertions::assert_eq;
use relmap::automap::{AutoMapTarget, AutoMapper, ManyToMany, Mapper};
use relmap::conventions::DefaultConventions;
use relmap::domain::{DomainTypes, PropertyTy};
use relmap::model::{ClassChild, CollectionMapping, ComponentMapping};
use tests::*;

fn collections(children: &[ClassChild]) -> Vec<&CollectionMapping> {
    children
        .iter()
        .filter_map(|child| match child {
            ClassChild::Collection(collection) => Some(collection),
            _ => None,
        })
        .collect()
}

#[test]
fn bidirectional_pair_marks_exactly_one_side_inverse() {
    let mut types = DomainTypes::new();
    let customer = types.add_class("Customer", None);
    let product = types.add_class("Product", None);
    set_property(&mut types, customer, "Products", product);
    set_property(&mut types, product, "Customers", customer);

    let conventions = DefaultConventions;
    let mapper = Mapper::new(&types, &conventions);

    let customer_map = mapper.map_class(customer).unwrap();
    let product_map = mapper.map_class(product).unwrap();

    let products = customer_map.body.collections().next().unwrap();
    let customers = product_map.body.collections().next().unwrap();

    assert!(products.relationship.is_many_to_many());
    assert!(customers.relationship.is_many_to_many());

    // Customer was registered first, so it is the owning side.
    assert!(!products.is_inverse());
    assert!(customers.is_inverse());
}

#[test]
fn owning_side_gets_default_association_and_key_columns() {
    let mut types = DomainTypes::new();
    let customer = types.add_class("Customer", None);
    let product = types.add_class("Product", None);
    set_property(&mut types, customer, "Products", product);
    set_property(&mut types, product, "Customers", customer);

    let conventions = DefaultConventions;
    let mapper = Mapper::new(&types, &conventions);

    let customer_map = mapper.map_class(customer).unwrap();
    let products = customer_map.body.collections().next().unwrap();

    assert_eq!(products.name(), "Products");
    assert_eq!(products.child_ty, product);
    assert_eq!(products.containing_ty, customer);

    let relationship = products.relationship.expect_many_to_many();
    let association_columns: Vec<_> = relationship.columns.iter().map(|c| c.name()).collect();
    assert_eq!(association_columns, ["Product_id"]);

    let key_columns: Vec<_> = products.key.columns.iter().map(|c| c.name()).collect();
    assert_eq!(key_columns, ["Customer_id"]);
}

#[test]
fn self_referential_collection_without_inverse_falls_back_to_one_to_many() {
    let mut types = DomainTypes::new();
    let person = types.add_class("Person", None);
    set_property(&mut types, person, "Friends", person);

    let conventions = DefaultConventions;
    let mapper = Mapper::new(&types, &conventions);

    let mapping = mapper.map_class(person).unwrap();
    let friends = mapping.body.collections().next().unwrap();

    assert!(friends.relationship.is_one_to_many());
    assert!(!friends.is_inverse());
}

#[test]
fn unidirectional_collection_maps_as_one_to_many() {
    let mut types = DomainTypes::new();
    let customer = types.add_class("Customer", None);
    let order = types.add_class("Order", None);
    seq_property(&mut types, customer, "Orders", order);

    let conventions = DefaultConventions;
    let mapper = Mapper::new(&types, &conventions);

    let mapping = mapper.map_class(customer).unwrap();
    let orders = mapping.body.collections().next().unwrap();

    let relationship = orders.relationship.expect_one_to_many();
    assert_eq!(relationship.child_ty, order);

    let key_columns: Vec<_> = orders.key.columns.iter().map(|c| c.name()).collect();
    assert_eq!(key_columns, ["Customer_id"]);
}

#[test]
fn component_embedding_prefixes_the_key_column() {
    let mut types = DomainTypes::new();
    let customer = types.add_class("Customer", None);
    let address = types.add_class("Address", None);
    let tag = types.add_class("Tag", None);

    let addr_member = types.add_property(customer, "Addr", PropertyTy::Entity(address));
    let tags = set_property(&mut types, address, "Tags", tag);
    set_property(&mut types, tag, "Addresses", address);

    let conventions = DefaultConventions;
    let rule = ManyToMany::new(&conventions);

    let mut component = ComponentMapping::new(addr_member, address, customer);
    rule.map(
        &types,
        AutoMapTarget::Component(&mut component),
        types.property(tags),
    )
    .unwrap();

    let children = collections(&component.children);
    let key_columns: Vec<_> = children[0].key.columns.iter().map(|c| c.name()).collect();
    assert_eq!(key_columns, ["Addr_Address_id"]);
}

#[test]
fn version_member_becomes_the_version_child() {
    let mut types = DomainTypes::new();
    let doc = types.add_class("Document", None);
    types.add_property(doc, "Title", PropertyTy::Scalar);
    types.add_property(doc, "Version", PropertyTy::Scalar);

    let conventions = DefaultConventions;
    let mapper = Mapper::new(&types, &conventions);

    let mapping = mapper.map_class(doc).unwrap();
    let version = mapping.body.version().unwrap();

    assert_eq!(version.name(), "Version");
    assert_eq!(version.containing_ty, doc);
}

#[test]
fn at_most_one_version_child() {
    let mut types = DomainTypes::new();
    let doc = types.add_class("Document", None);
    types.add_property(doc, "Version", PropertyTy::Scalar);
    types.add_property(doc, "Timestamp", PropertyTy::Scalar);

    let conventions = DefaultConventions;
    let mapper = Mapper::new(&types, &conventions);

    let mapping = mapper.map_class(doc).unwrap();
    let versions = mapping
        .body
        .children
        .iter()
        .filter(|child| matches!(child, ClassChild::Version(_)))
        .count();

    assert_eq!(versions, 1);
    assert_eq!(mapping.body.version().unwrap().name(), "Version");
}
