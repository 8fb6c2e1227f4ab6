//! An [`Optional`] is (de)serialized as a nullable value: present containers go through
//! `serialize_some` and empty ones through `serialize_none`.
//!
//! A `null` always deserializes to an empty container. Formats that write `Some(v)` the same
//! as `v`, such as JSON, therefore lose a present container whose value itself serializes to
//! `null`: `Optional::of(None::<i32>)` and `Optional::of(())` come back empty.
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Optional;

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Optional::Present(value) => serializer.serialize_some(value),
            Optional::Empty => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::of_nullable)
    }
}
