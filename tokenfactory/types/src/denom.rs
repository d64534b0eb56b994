use {
    crate::{Addr, DenomId},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    tokenfactory_math::{NumberConst, Uint256},
};

/// Supply parameters of a factory denom.
///
/// `minted` is the cumulative amount ever minted. Burns don't decrease it, so
/// it's non-decreasing over the denom's lifetime, and never exceeds
/// `minting_cap`.
#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Denom {
    pub creator: Addr,
    pub denom: DenomId,
    pub minting_cap: Uint256,
    pub minted: Uint256,
    pub can_change_minting_cap: bool,
}

impl Denom {
    pub fn new(
        creator: Addr,
        denom: DenomId,
        minting_cap: Uint256,
        can_change_minting_cap: bool,
    ) -> Self {
        Self {
            creator,
            denom,
            minting_cap,
            minted: Uint256::ZERO,
            can_change_minting_cap,
        }
    }
}

/// Supply figures derived from a denom's record and the ledger-wide supply.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DenomStats {
    pub total_burned: Uint256,
    pub max_remaining_supply: Uint256,
    pub total_supply: Uint256,
}
