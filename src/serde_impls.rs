//! Serde support: a list serializes as a plain sequence of its values.
//!
//! Manual impls, since a shared-node container cannot derive. Deserialization
//! rebuilds a fresh chain in sequence order.

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::list::RcLinkedList;

impl<T: Serialize> Serialize for RcLinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for guard in self.iter() {
            seq.serialize_element(&*guard.borrow())?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RcLinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Vec::<T>::deserialize(deserializer)?.into_iter().collect())
    }
}
