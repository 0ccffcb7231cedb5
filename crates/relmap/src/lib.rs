pub mod attr;
pub use attr::{AttrKey, AttrValue, AttributeStore};

pub mod automap;

pub mod conventions;
pub use conventions::{Conventions, DefaultConventions};

pub mod domain;
pub use domain::{DomainTypes, PropertyId, TypeId};

mod error;
pub use error::Error;

pub mod model;

pub mod organize;
pub use organize::SubclassOrganizer;

pub mod provider;
pub use provider::{MappingFragment, MappingProvider};

/// A Result type alias that uses relmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
