use {
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    std::{
        borrow::Cow,
        fmt::{self, Debug, Display},
        str::FromStr,
    },
    tokenfactory_storage::{Prefixer, PrimaryKey, RawKey, StdError, StdResult},
};

/// An account address.
///
/// Addresses are 20 bytes long, displayed in lowercase hex with the `0x`
/// prefix. They are validated during deserialization, so an `Addr` found in a
/// message is always well-formed.
#[derive(
    BorshSerialize, BorshDeserialize, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Addr([u8; 20]);

impl Addr {
    pub const LENGTH: usize = 20;

    pub const fn from_array(array: [u8; Self::LENGTH]) -> Self {
        Self(array)
    }

    /// Generate a mock address from use in testing.
    pub const fn mock(index: u8) -> Self {
        let mut bytes = [0; Self::LENGTH];
        bytes[Self::LENGTH - 1] = index;
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Addr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Debug for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Addr({self})")
    }
}

impl FromStr for Addr {
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        let Some(hex_str) = s.strip_prefix("0x") else {
            return Err(StdError::deserialize::<Self, _>("hex", "missing `0x` prefix"));
        };

        let mut bytes = [0; Self::LENGTH];
        hex::decode_to_slice(hex_str, &mut bytes)
            .map_err(|err| StdError::deserialize::<Self, _>("hex", err))?;

        Ok(Self(bytes))
    }
}

impl ser::Serialize for Addr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for Addr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = <String as de::Deserialize>::deserialize(deserializer)?;
        Addr::from_str(&s).map_err(de::Error::custom)
    }
}

impl PrimaryKey for Addr {
    type Output = Addr;
    type Prefix = ();
    type Suffix = ();

    const KEY_ELEMS: u8 = 1;

    fn raw_keys(&self) -> Vec<RawKey> {
        vec![Cow::Borrowed(self.0.as_slice())]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| StdError::deserialize::<Self, _>("key", "expecting 20 bytes"))
    }
}

impl Prefixer for Addr {
    fn raw_prefixes(&self) -> Vec<RawKey> {
        vec![Cow::Borrowed(self.0.as_slice())]
    }
}

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test]
    fn display_and_parse() {
        let addr = Addr::mock(171);
        let s = addr.to_string();

        assert_eq!(s, "0x00000000000000000000000000000000000000ab");
        assert_eq!(Addr::from_str(&s).unwrap(), addr);
        assert_eq!(serde_json::to_string(&addr).unwrap(), format!("\"{s}\""));
    }

    #[test_case("00000000000000000000000000000000000000ab" ; "no prefix")]
    #[test_case("0x0000000000000000000000000000000000ab" ; "too short")]
    #[test_case("0x00000000000000000000000000000000000000zz" ; "not hex")]
    fn rejects_malformed(s: &str) {
        assert!(Addr::from_str(s).is_err());
        assert!(serde_json::from_str::<Addr>(&format!("\"{s}\"")).is_err());
    }

    #[test]
    fn key_roundtrip() {
        let addr = Addr::mock(7);
        assert_eq!(Addr::from_slice(&addr.joined_key()).unwrap(), addr);
        assert!(Addr::from_slice(b"short").is_err());
    }
}
