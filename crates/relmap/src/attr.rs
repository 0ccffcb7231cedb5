use crate::domain::TypeId;

use indexmap::IndexMap;
use std::hash::Hash;

/// A symbolic attribute key scoped to one mapping-node kind.
pub trait AttrKey: Copy + Eq + Hash {
    /// Value returned by [`AttributeStore::get`] when the key was never set
    /// on the local layer or any fallback layer.
    fn default_value(self) -> AttrValue;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttrValue {
    #[default]
    Null,
    Bool(bool),
    Str(String),
    Ty(TypeId),
}

impl AttrValue {
    pub fn empty_str() -> Self {
        Self::Str(String::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ty(&self) -> Option<TypeId> {
        match self {
            Self::Ty(ty) => Some(*ty),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_bool(self) -> bool {
        match self {
            Self::Bool(value) => value,
            _ => panic!("expected Bool value, but was {self:?}"),
        }
    }

    #[track_caller]
    pub fn expect_str(self) -> String {
        match self {
            Self::Str(value) => value,
            _ => panic!("expected Str value, but was {self:?}"),
        }
    }

    #[track_caller]
    pub fn expect_ty(self) -> TypeId {
        match self {
            Self::Ty(ty) => ty,
            _ => panic!("expected Ty value, but was {self:?}"),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<TypeId> for AttrValue {
    fn from(value: TypeId) -> Self {
        Self::Ty(value)
    }
}

/// Key/value store with an optional fallback layer consulted on read miss.
///
/// Writes always land on the local layer, never the fallback. Reads return
/// the local value if present, else the fallback's answer, else the key's
/// declared default. Each mapping node owns exactly one store.
#[derive(Debug, Clone)]
pub struct AttributeStore<K: AttrKey> {
    local: IndexMap<K, AttrValue>,
    fallback: Option<Box<AttributeStore<K>>>,
}

impl<K: AttrKey> AttributeStore<K> {
    pub fn new() -> Self {
        Self {
            local: IndexMap::new(),
            fallback: None,
        }
    }

    /// An empty store layered over `fallback`.
    pub fn with_fallback(fallback: AttributeStore<K>) -> Self {
        Self {
            local: IndexMap::new(),
            fallback: Some(Box::new(fallback)),
        }
    }

    pub fn set_fallback(&mut self, fallback: AttributeStore<K>) {
        self.fallback = Some(Box::new(fallback));
    }

    pub fn get(&self, key: K) -> AttrValue {
        if let Some(value) = self.local.get(&key) {
            return value.clone();
        }

        match &self.fallback {
            Some(fallback) => fallback.get(key),
            None => key.default_value(),
        }
    }

    /// Last write wins.
    pub fn set(&mut self, key: K, value: impl Into<AttrValue>) {
        self.local.insert(key, value.into());
    }

    /// True only if the key was set on the local layer.
    pub fn is_specified(&self, key: K) -> bool {
        self.local.contains_key(&key)
    }
}

impl<K: AttrKey> Default for AttributeStore<K> {
    fn default() -> Self {
        Self::new()
    }
}
