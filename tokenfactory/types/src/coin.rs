use {
    crate::DenomId,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::fmt::{self, Display},
    tokenfactory_math::Uint256,
};

/// An amount of a single denom.
#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Coin {
    pub denom: DenomId,
    pub amount: Uint256,
}

impl Coin {
    pub fn new<A>(denom: DenomId, amount: A) -> Self
    where
        A: Into<Uint256>,
    {
        Self {
            denom,
            amount: amount.into(),
        }
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.denom, self.amount)
    }
}
