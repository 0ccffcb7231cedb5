use super::{AutoMapTarget, AutoMapper};
use crate::domain::{DomainTypes, Property, PropertyTy};
use crate::model::{VersionAttr, VersionMapping};
use crate::{Error, Result};

/// Maps a scalar member named `Version` or `Timestamp` as the optimistic
/// lock version of the containing class.
pub struct Version;

impl AutoMapper for Version {
    fn maps_property(&self, _types: &DomainTypes, prop: &Property) -> bool {
        matches!(prop.ty, PropertyTy::Scalar) && (prop.name == "Version" || prop.name == "Timestamp")
    }

    fn map(&self, types: &DomainTypes, mut target: AutoMapTarget<'_>, prop: &Property) -> Result<()> {
        if !self.maps_property(types, prop) {
            return Err(Error::ineligible_member(types, prop.id));
        }

        let mut version = VersionMapping::new(target.ty());
        version.attributes.set(VersionAttr::Name, prop.name.as_str());

        target.add_version(version);
        Ok(())
    }
}
