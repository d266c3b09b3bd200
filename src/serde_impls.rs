//! `Optional<T>` (de)serializes exactly like `Option<T>`; `NoValue` like `()`

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tap::Pipe;

use crate::{
    marker::{NO_VALUE, NoValue},
    optional::Optional,
};

impl<T> Serialize for Optional<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_option().serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer)?
            .pipe(Self::from)
            .pipe(Ok)
    }
}

impl Serialize for NoValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_unit()
    }
}

impl<'de> Deserialize<'de> for NoValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <()>::deserialize(deserializer)?;
        Ok(NO_VALUE)
    }
}
