mod body;
pub use body::{ClassBody, ClassChild};

mod class;
pub use class::{ClassAttr, ClassMapping};

mod collection;
pub use collection::{CollectionAttr, CollectionMapping};

mod column;
pub use column::{ColumnAttr, ColumnMapping};

mod component;
pub use component::{ComponentAttr, ComponentMapping};

mod key;
pub use key::{KeyAttr, KeyMapping};

mod node;
pub use node::Node;

mod relationship;
pub use relationship::{ManyToManyMapping, OneToManyMapping, Relationship, RelationshipAttr};

mod subclass;
pub use subclass::{SubclassAttr, SubclassKind, SubclassMapping};

mod version;
pub use version::{VersionAttr, VersionMapping};

pub mod visit;
pub use visit::Visit;

pub mod visit_mut;
pub use visit_mut::VisitMut;
