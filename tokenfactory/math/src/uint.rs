use {
    crate::{IsZero, MathError, MathResult, NumberConst},
    bnum::types::U256,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    std::{
        fmt::{self, Display},
        str::FromStr,
    },
};

/// 256-bit unsigned integer.
///
/// Amounts of a denom (minting caps, minted totals, ledger supplies) are
/// arbitrary precision in the ledger's data model; 256 bits is the widest
/// amount the ledger is able to hold, so this is what we use throughout.
///
/// Serialized as a decimal string in JSON, and as its raw little-endian digits
/// in Borsh.
#[derive(
    BorshSerialize,
    BorshDeserialize,
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub struct Uint256(U256);

impl Uint256 {
    pub const fn new_from_u128(value: u128) -> Self {
        Self(U256::from_digits([value as u64, (value >> 64) as u64, 0, 0]))
    }

    pub fn checked_add(self, rhs: Self) -> MathResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or_else(|| MathError::overflow_add::<Self, _, _>(self, rhs))
    }

    pub fn checked_sub(self, rhs: Self) -> MathResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or_else(|| MathError::overflow_sub::<Self, _, _>(self, rhs))
    }

    /// Subtract, clamping at zero instead of underflowing.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Convert to a `u128`, failing if the value doesn't fit.
    pub fn try_into_u128(self) -> MathResult<u128> {
        let digits = self.0.digits();

        if digits[2] != 0 || digits[3] != 0 {
            return Err(MathError::overflow_conversion::<u128, _>(self));
        }

        Ok(((digits[1] as u128) << 64) | digits[0] as u128)
    }
}

impl NumberConst for Uint256 {
    const MAX: Self = Self(U256::MAX);
    const ONE: Self = Self::new_from_u128(1);
    const ZERO: Self = Self(U256::ZERO);
}

impl IsZero for Uint256 {
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<u128> for Uint256 {
    fn from(value: u128) -> Self {
        Self::new_from_u128(value)
    }
}

impl FromStr for Uint256 {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_str(s)
            .map(Self)
            .map_err(|err| MathError::parse_number::<Self, _, _>(s, err))
    }
}

impl Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ser::Serialize for Uint256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for Uint256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(Uint256Visitor)
    }
}

struct Uint256Visitor;

impl de::Visitor<'_> for Uint256Visitor {
    type Value = Uint256;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string-encoded 256-bit unsigned integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Uint256::from_str(v).map_err(E::custom)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        proptest::prelude::*,
        test_case::test_case,
    };

    #[test]
    fn constants() {
        assert_eq!(Uint256::ZERO.to_string(), "0");
        assert_eq!(Uint256::ONE.to_string(), "1");
        assert_eq!(
            Uint256::MAX.to_string(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
    }

    #[test_case(0, 0 => "0"; "zero plus zero")]
    #[test_case(1, 2 => "3"; "small numbers")]
    #[test_case(u128::MAX, 1 => "340282366920938463463374607431768211456"; "past u128 max")]
    fn checked_add(a: u128, b: u128) -> String {
        Uint256::from(a)
            .checked_add(Uint256::from(b))
            .unwrap()
            .to_string()
    }

    #[test]
    fn checked_add_overflows() {
        let err = Uint256::MAX.checked_add(Uint256::ONE).unwrap_err();
        assert!(err.to_string().contains("addition overflow"));
    }

    #[test]
    fn checked_sub_underflows() {
        let err = Uint256::from(5_u128)
            .checked_sub(Uint256::from(6_u128))
            .unwrap_err();
        assert!(err.to_string().contains("subtraction overflow"));
    }

    #[test_case(10, 3 => 7; "no clamp")]
    #[test_case(3, 10 => 0; "clamps at zero")]
    #[test_case(7, 7 => 0; "equal")]
    fn saturating_sub(a: u128, b: u128) -> u128 {
        Uint256::from(a)
            .saturating_sub(Uint256::from(b))
            .try_into_u128()
            .unwrap()
    }

    #[test]
    fn try_into_u128_rejects_large_values() {
        let big = Uint256::from(u128::MAX).checked_add(Uint256::ONE).unwrap();
        assert!(big.try_into_u128().is_err());
        assert_eq!(Uint256::from(u128::MAX).try_into_u128().unwrap(), u128::MAX);
    }

    #[test]
    fn serde_as_string() {
        let value = Uint256::from(12345_u128);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"12345\"");

        let parsed: Uint256 = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);

        assert!(serde_json::from_str::<Uint256>("\"-1\"").is_err());
        assert!(serde_json::from_str::<Uint256>("\"abc\"").is_err());
    }

    #[test]
    fn borsh_preserves_value() {
        let value = Uint256::from(u128::MAX)
            .checked_add(Uint256::from(99_u128))
            .unwrap();
        let bytes = borsh::to_vec(&value).unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(borsh::from_slice::<Uint256>(&bytes).unwrap(), value);
    }

    proptest! {
        #[test]
        fn saturating_sub_never_exceeds_lhs(a in any::<u128>(), b in any::<u128>()) {
            let diff = Uint256::from(a).saturating_sub(Uint256::from(b));
            prop_assert!(diff <= Uint256::from(a));
        }
    }
}
