use {
    crate::{StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
};

/// How values are turned into bytes before they're written to the store.
pub trait Codec<T> {
    fn encode(data: &T) -> StdResult<Vec<u8>>;

    fn decode(bytes: &[u8]) -> StdResult<T>;
}

/// Borsh, the encoding of every value the module persists.
pub struct Borsh;

impl<T> Codec<T> for Borsh
where
    T: BorshSerialize + BorshDeserialize,
{
    fn encode(data: &T) -> StdResult<Vec<u8>> {
        borsh::to_vec(data).map_err(|err| StdError::serialize::<T, _>("borsh", err))
    }

    fn decode(bytes: &[u8]) -> StdResult<T> {
        borsh::from_slice(bytes).map_err(|err| StdError::deserialize::<T, _>("borsh", err))
    }
}
