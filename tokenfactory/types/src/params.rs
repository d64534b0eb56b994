use {
    crate::{Addr, Coin, DenomId, FactoryResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::str::FromStr,
    tokenfactory_math::{IsZero, Uint256},
};

/// Module-wide configuration.
#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Default, Debug, Clone, PartialEq, Eq,
)]
#[serde(rename_all = "snake_case")]
pub struct Params {
    /// Denom of the one-time fee charged for creating a denom. May be empty
    /// if the fee amount is zero.
    #[serde(default)]
    pub create_fee_denom: String,
    #[serde(default)]
    pub create_fee_amount: Uint256,
    /// The account allowed to withdraw collected creation fees.
    #[serde(default)]
    pub beneficiary: Option<Addr>,
}

impl Params {
    /// The creation fee, or `None` if creating denoms is free.
    pub fn creation_fee(&self) -> FactoryResult<Option<Coin>> {
        if self.create_fee_amount.is_zero() {
            return Ok(None);
        }

        let denom = DenomId::from_str(&self.create_fee_denom)?;

        Ok(Some(Coin::new(denom, self.create_fee_amount)))
    }

    pub fn validate(&self) -> FactoryResult<()> {
        self.creation_fee().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case("", 0 => true; "free with empty denom")]
    #[test_case("uatom", 100 => true; "paid with valid denom")]
    #[test_case("", 100 => false; "paid with empty denom")]
    #[test_case("u/", 100 => false; "paid with malformed denom")]
    fn validating(denom: &str, amount: u128) -> bool {
        Params {
            create_fee_denom: denom.to_string(),
            create_fee_amount: Uint256::new_from_u128(amount),
            beneficiary: None,
        }
        .validate()
        .is_ok()
    }

    #[test]
    fn deserializes_with_defaults() {
        let params: Params = serde_json::from_str("{}").unwrap();
        assert_eq!(params, Params::default());
        assert_eq!(params.creation_fee().unwrap(), None);
    }
}
