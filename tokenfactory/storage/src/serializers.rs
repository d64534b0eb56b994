use {
    crate::{StdError, StdResult},
    serde::{de::DeserializeOwned, ser::Serialize},
};

/// Query responses are handed back as untyped JSON.
pub type Json = serde_json::Value;

pub trait JsonSerExt {
    fn to_json_value(&self) -> StdResult<Json>;
}

impl<T> JsonSerExt for T
where
    T: Serialize,
{
    fn to_json_value(&self) -> StdResult<Json> {
        serde_json::to_value(self).map_err(|err| StdError::serialize::<T, _>("json", err))
    }
}

pub trait JsonDeExt {
    fn deserialize_json<D>(self) -> StdResult<D>
    where
        D: DeserializeOwned;
}

impl JsonDeExt for Json {
    fn deserialize_json<D>(self) -> StdResult<D>
    where
        D: DeserializeOwned,
    {
        serde_json::from_value(self).map_err(|err| StdError::deserialize::<D, _>("json", err))
    }
}
