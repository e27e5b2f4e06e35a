use std::any::type_name;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Opaque identifier of an entity of type `T`.
///
/// The type parameter only exists at compile time, so an `ObjectId<Tweet>`
/// can never be passed where an `ObjectId<User>` is expected even though
/// both wrap a plain string.
pub struct ObjectId<T> {
    id: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ObjectId<T> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

// Manual impls: derives would put bounds on `T`.
impl<T> Clone for ObjectId<T> {
    fn clone(&self) -> Self {
        Self::new(self.id.clone())
    }
}

impl<T> PartialEq for ObjectId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for ObjectId<T> {}

impl<T> PartialOrd for ObjectId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ObjectId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<T> Hash for ObjectId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Display for ObjectId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl<T> fmt::Debug for ObjectId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = type_name::<T>();
        let short = type_name.rsplit("::").next().unwrap_or(type_name);
        write!(f, "{short}({:?})", self.id)
    }
}

impl<T> From<&str> for ObjectId<T> {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<T> From<String> for ObjectId<T> {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tweet::{Tweet, User};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_equality_by_underlying_string() {
        let a: ObjectId<User> = ObjectId::new("42");
        let b: ObjectId<User> = ObjectId::from(String::from("42"));
        let c: ObjectId<User> = "43".into();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_by_underlying_string() {
        let mut ids: HashSet<ObjectId<Tweet>> = HashSet::new();
        ids.insert(ObjectId::new("1"));
        ids.insert(ObjectId::new("1"));
        ids.insert(ObjectId::new("2"));

        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_display_and_debug() {
        let id: ObjectId<User> = ObjectId::new("12");

        assert_eq!(id.to_string(), "12");
        assert_eq!(format!("{id:?}"), "User(\"12\")");
    }
}
