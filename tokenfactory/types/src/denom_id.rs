use {
    crate::{Addr, FactoryError, FactoryResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    std::{
        fmt::{self, Display, Write},
        io,
        str::FromStr,
    },
    tokenfactory_storage::{Prefixer, PrimaryKey, RawKey, StdError, StdResult},
};

/// The first part of every denom issued by the token factory.
pub const FACTORY_NAMESPACE: &str = "factory";

/// Maximum length of a denom, in bytes.
pub const MAX_DENOM_LENGTH: usize = 128;

// ----------------------------------- part ------------------------------------

/// A non-empty, alphanumeric string; makes up denoms.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Part(String);

impl Part {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Part {
    type Err = FactoryError;

    fn from_str(s: &str) -> FactoryResult<Self> {
        if s.is_empty() {
            return Err(FactoryError::invalid_denom(s, "empty part"));
        }

        if s.chars().any(|ch| !ch.is_ascii_alphanumeric()) {
            return Err(FactoryError::invalid_denom(s, "non-alphanumeric character"));
        }

        Ok(Self(s.to_string()))
    }
}

// --------------------------------- denom id ----------------------------------

/// Identifier of a fungible asset on the ledger.
///
/// A valid denom is no longer than 128 bytes, and consists of one or more
/// parts, each an ASCII alphanumeric string, separated by forward slashes.
/// Denoms issued by the token factory have exactly three parts:
///
/// ```plain
/// factory/{creator}/{sub_id}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DenomId(Vec<Part>);

impl DenomId {
    /// Compose the id of a factory denom.
    pub fn factory(creator: &Addr, sub_id: &str) -> FactoryResult<Self> {
        let sub_id = Part::from_str(sub_id)?;
        let denom = Self(vec![
            Part(FACTORY_NAMESPACE.to_string()),
            Part(creator.to_string()),
            sub_id,
        ]);

        if denom.to_string().len() > MAX_DENOM_LENGTH {
            return Err(FactoryError::invalid_denom(denom, "too long"));
        }

        Ok(denom)
    }

    pub fn new_unchecked<T, I>(parts: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = T>,
    {
        Self(parts.into_iter().map(|part| Part(part.into())).collect())
    }

    /// If this is a factory denom, return its creator and sub-id.
    pub fn factory_parts(&self) -> Option<(Addr, &Part)> {
        match self.0.as_slice() {
            [namespace, creator, sub_id] if namespace.as_str() == FACTORY_NAMESPACE => {
                Addr::from_str(creator.as_str())
                    .ok()
                    .map(|creator| (creator, sub_id))
            },
            _ => None,
        }
    }

    pub fn is_factory(&self) -> bool {
        self.factory_parts().is_some()
    }
}

impl Display for DenomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char('/')?;
            }
            f.write_str(part.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for DenomId {
    type Err = FactoryError;

    fn from_str(s: &str) -> FactoryResult<Self> {
        if !(1..=MAX_DENOM_LENGTH).contains(&s.len()) {
            return Err(FactoryError::invalid_denom(s, "too short or too long"));
        }

        s.split('/')
            .map(Part::from_str)
            .collect::<FactoryResult<Vec<_>>>()
            .map(Self)
    }
}

impl TryFrom<&str> for DenomId {
    type Error = FactoryError;

    fn try_from(s: &str) -> FactoryResult<Self> {
        DenomId::from_str(s)
    }
}

impl ser::Serialize for DenomId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for DenomId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = <String as de::Deserialize>::deserialize(deserializer)?;
        DenomId::from_str(&s).map_err(de::Error::custom)
    }
}

impl BorshSerialize for DenomId {
    fn serialize<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        BorshSerialize::serialize(&self.to_string(), writer)
    }
}

impl BorshDeserialize for DenomId {
    fn deserialize_reader<R>(reader: &mut R) -> io::Result<Self>
    where
        R: io::Read,
    {
        let s = <String as BorshDeserialize>::deserialize_reader(reader)?;
        DenomId::from_str(&s).map_err(io::Error::other)
    }
}

impl PrimaryKey for DenomId {
    type Output = DenomId;
    type Prefix = ();
    type Suffix = ();

    const KEY_ELEMS: u8 = 1;

    fn raw_keys(&self) -> Vec<RawKey> {
        vec![RawKey::Owned(self.to_string().into_bytes())]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        let s = std::str::from_utf8(bytes)
            .map_err(|err| StdError::deserialize::<Self, _>("utf8", err))?;

        DenomId::from_str(s).map_err(|err| StdError::deserialize::<Self, _>("key", err))
    }
}

impl Prefixer for DenomId {
    fn raw_prefixes(&self) -> Vec<RawKey> {
        self.raw_keys()
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case("uatom" => Ok(1); "single part")]
    #[test_case("ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2" => Ok(2); "ibc denom")]
    #[test_case("" => Err("too short or too long".to_string()); "empty")]
    #[test_case("gamm//1" => Err("empty part".to_string()); "empty part")]
    #[test_case("gamm/&/1" => Err("non-alphanumeric character".to_string()); "bad character")]
    fn parsing(s: &str) -> Result<usize, String> {
        DenomId::from_str(s).map(|denom| denom.0.len()).map_err(|err| match err {
            FactoryError::InvalidDenom { reason, .. } => reason,
            err => err.to_string(),
        })
    }

    #[test]
    fn rejects_too_long() {
        assert!(DenomId::from_str(&"a".repeat(129)).is_err());
        assert!(DenomId::from_str(&"a".repeat(128)).is_ok());
    }

    #[test]
    fn factory_denoms() {
        let creator = Addr::mock(1);
        let denom = DenomId::factory(&creator, "foo").unwrap();

        assert_eq!(
            denom.to_string(),
            "factory/0x0000000000000000000000000000000000000001/foo"
        );

        let (parsed_creator, sub_id) = denom.factory_parts().unwrap();
        assert_eq!(parsed_creator, creator);
        assert_eq!(sub_id.as_str(), "foo");

        assert!(!DenomId::from_str("uatom").unwrap().is_factory());
        assert!(!DenomId::from_str("factory/alice/foo").unwrap().is_factory());
        assert!(DenomId::factory(&creator, "").is_err());
        assert!(DenomId::factory(&creator, "a-b").is_err());
        // 8 + 42 + 1 = 51 bytes before the sub-id.
        assert!(DenomId::factory(&creator, &"x".repeat(77)).is_ok());
        assert!(DenomId::factory(&creator, &"x".repeat(78)).is_err());
    }

    #[test]
    fn serialization() {
        let denom = DenomId::from_str("gamm/pool/1").unwrap();

        assert_eq!(serde_json::to_string(&denom).unwrap(), "\"gamm/pool/1\"");
        assert!(serde_json::from_str::<DenomId>("\"gamm//1\"").is_err());

        let bytes = borsh::to_vec(&denom).unwrap();
        assert_eq!(borsh::from_slice::<DenomId>(&bytes).unwrap(), denom);

        assert_eq!(DenomId::from_slice(&denom.joined_key()).unwrap(), denom);
    }
}
