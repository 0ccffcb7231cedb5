use crate::domain::{DomainTypes, PropertyId};

use std::fmt;

/// Helper macro for returning ad-hoc errors.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Helper macro for creating ad-hoc errors.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error produced while synthesizing a mapping model.
///
/// Failures here are contract or model-shape violations; they abort the
/// whole run for the affected domain type rather than being caught and
/// patched locally. Messages name the offending type and member so the
/// domain model itself can be corrected.
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    /// A rule's `map` was called for a member its predicate already
    /// rejected.
    IneligibleMember { ty: String, member: String },

    /// Ad-hoc error created via `bail!`/`err!`.
    Adhoc(anyhow::Error),
}

impl Error {
    pub(crate) fn ineligible_member(types: &DomainTypes, member: PropertyId) -> Self {
        Self {
            kind: ErrorKind::IneligibleMember {
                ty: types.ty(member.owner).name.clone(),
                member: types.property(member).name.clone(),
            },
        }
    }

    #[doc(hidden)]
    pub fn from_args(args: fmt::Arguments<'_>) -> Self {
        Self {
            kind: ErrorKind::Adhoc(anyhow::Error::msg(args.to_string())),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Adhoc(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::IneligibleMember { ty, member } => {
                write!(f, "member `{ty}.{member}` is not eligible for this mapping rule")
            }
            ErrorKind::Adhoc(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self {
            kind: ErrorKind::Adhoc(err),
        }
    }
}
