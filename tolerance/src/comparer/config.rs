use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ApproximateComparer, ComparerError};
use crate::scalar::Scalar;

/// Serialized form of an [`ApproximateComparer`].
///
/// A missing `eps` falls back to the default tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[serde(bound(
    serialize = "T: Scalar + Serialize",
    deserialize = "T: Scalar + Deserialize<'de>"
))]
pub struct ComparerConfig<T> {
    pub eps: T,
}

impl<T: Scalar> Default for ComparerConfig<T> {
    fn default() -> Self {
        Self { eps: T::DEFAULT_EPS }
    }
}

impl<T: Scalar> From<ApproximateComparer<T>> for ComparerConfig<T> {
    fn from(comparer: ApproximateComparer<T>) -> Self {
        Self { eps: comparer.eps() }
    }
}

impl<T: Scalar> TryFrom<ComparerConfig<T>> for ApproximateComparer<T> {
    type Error = ComparerError;

    fn try_from(config: ComparerConfig<T>) -> Result<Self, Self::Error> {
        Self::new(config.eps)
    }
}

impl<T: Scalar + Serialize> Serialize for ApproximateComparer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ComparerConfig::from(*self).serialize(serializer)
    }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for ApproximateComparer<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let config = ComparerConfig::<T>::deserialize(deserializer)?;
        Self::try_from(config).map_err(serde::de::Error::custom)
    }
}
