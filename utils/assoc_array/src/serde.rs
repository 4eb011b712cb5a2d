use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize};

use crate::pair::Pair;
use crate::AssociativeArray;

impl<K, V> Serialize for AssociativeArray<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.size))?;
        for pair in self.iter() {
            seq.serialize_element(pair)?;
        }
        seq.end()
    }
}

struct AssociativeArrayVisitor<K, V>(core::marker::PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for AssociativeArrayVisitor<K, V>
where
    K: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    type Value = AssociativeArray<K, V>;

    fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        formatter.write_str("A sequence of key/value pairs for AssociativeArray")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut array = AssociativeArray::new();

        while let Some(pair) = seq.next_element::<Pair<K, V>>()? {
            let (key, value) = pair.into_inner();
            if array.insert(key, value).is_some() {
                return Err(serde::de::Error::custom(
                    "duplicate key in AssociativeArray during deserialization",
                ));
            }
        }

        Ok(array)
    }
}

impl<'de, K, V> Deserialize<'de> for AssociativeArray<K, V>
where
    K: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(AssociativeArrayVisitor(core::marker::PhantomData))
    }
}
