use {
    crate::{nested_namespaces_with_key, RawKey, StdError, StdResult},
    std::borrow::Cow,
};

// ------------------------------------ key ------------------------------------

/// Describes a key used in mapping data structures, i.e. [`Map`](crate::Map)
/// and [`Set`](crate::Set).
///
/// The key is serialized to or deserialized from raw bytes directly, without
/// going through a serialization framework. Compound keys can be split into a
/// `Prefix` and a `Suffix`, which is what makes prefix iteration work.
pub trait PrimaryKey {
    /// The number of elements in a tuple key. 1 for singleton keys.
    ///
    /// Needed to deserialize _nested_ tuple keys such as `((A, B), C)`, where
    /// the serialized bytes alone don't tell where the first element ends.
    const KEY_ELEMS: u8;

    /// For tuple keys, the first element. Use `()` for singleton keys.
    type Prefix: Prefixer;

    /// For tuple keys, the elements _excluding_ the `Prefix`.
    type Suffix: PrimaryKey;

    /// The type that raw keys deserialize into, which may be different from the
    /// key itself. E.g. `&str` deserializes into `String`.
    type Output;

    /// Convert the key into one or more _raw keys_.
    fn raw_keys(&self) -> Vec<RawKey>;

    /// Serialize the raw keys into bytes.
    ///
    /// Each raw key, other than the last one, is prefixed by its length as a
    /// 16-bit big endian number:
    ///
    /// ```plain
    /// len(A) | A | len(B) | B | C
    /// ```
    fn joined_key(&self) -> Vec<u8> {
        let mut raw_keys = self.raw_keys();
        let last_raw_key = raw_keys.pop();
        nested_namespaces_with_key(None, &raw_keys, last_raw_key.as_ref())
    }

    /// Deserialize the raw bytes into the output.
    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output>;
}

impl PrimaryKey for () {
    type Output = ();
    type Prefix = ();
    type Suffix = ();

    const KEY_ELEMS: u8 = 1;

    fn raw_keys(&self) -> Vec<RawKey> {
        vec![]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        if !bytes.is_empty() {
            return Err(StdError::deserialize::<Self::Output, _>(
                "key",
                "expecting empty bytes",
            ));
        }

        Ok(())
    }
}

impl PrimaryKey for &str {
    type Output = String;
    type Prefix = ();
    type Suffix = ();

    const KEY_ELEMS: u8 = 1;

    fn raw_keys(&self) -> Vec<RawKey> {
        vec![Cow::Borrowed(self.as_bytes())]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        String::from_utf8(bytes.to_vec())
            .map_err(|err| StdError::deserialize::<Self::Output, _>("utf8", err))
    }
}

impl<K> PrimaryKey for &K
where
    K: PrimaryKey,
{
    type Output = K::Output;
    type Prefix = K::Prefix;
    type Suffix = K::Suffix;

    const KEY_ELEMS: u8 = K::KEY_ELEMS;

    fn raw_keys(&self) -> Vec<RawKey> {
        (*self).raw_keys()
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        K::from_slice(bytes)
    }
}

impl<A, B> PrimaryKey for (A, B)
where
    A: PrimaryKey + Prefixer,
    B: PrimaryKey,
{
    type Output = (A::Output, B::Output);
    type Prefix = A;
    type Suffix = B;

    const KEY_ELEMS: u8 = A::KEY_ELEMS + B::KEY_ELEMS;

    fn raw_keys(&self) -> Vec<RawKey> {
        let mut keys = self.0.raw_keys();
        keys.extend(self.1.raw_keys());
        keys
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        let (a_raw, b_raw) = split_first_key(A::KEY_ELEMS, bytes)?;

        let a = A::from_slice(&a_raw)?;
        let b = B::from_slice(b_raw)?;

        Ok((a, b))
    }
}

/// Split the first key of a compound key, given how many elements the first
/// key consists of. Returns the first key and the remainder.
///
/// The first key's length prefixes are retained for all but its last element,
/// so that it can be fed directly into the element's `from_slice`.
pub fn split_first_key(key_elems: u8, value: &[u8]) -> StdResult<(Vec<u8>, &[u8])> {
    let mut index = 0;
    let mut first_key = Vec::new();

    for i in 0..key_elems {
        let len_slice = value
            .get(index..index + 2)
            .ok_or_else(|| StdError::deserialize::<Vec<u8>, _>("key", "missing length prefix"))?;
        index += 2;

        if i < key_elems - 1 {
            first_key.extend_from_slice(len_slice);
        }

        let elem_len = u16::from_be_bytes([len_slice[0], len_slice[1]]) as usize;
        let elem = value
            .get(index..index + elem_len)
            .ok_or_else(|| StdError::deserialize::<Vec<u8>, _>("key", "key element too short"))?;
        first_key.extend_from_slice(elem);
        index += elem_len;
    }

    Ok((first_key, &value[index..]))
}

// ---------------------------------- prefix -----------------------------------

/// Describes a value that can be used as the prefix of a compound key.
pub trait Prefixer {
    /// Convert the prefix into one or more _raw prefixes_.
    fn raw_prefixes(&self) -> Vec<RawKey>;

    /// Serialize the raw prefixes into bytes, each length-prefixed.
    fn joined_prefix(&self) -> Vec<u8> {
        let raw_prefixes = self.raw_prefixes();
        nested_namespaces_with_key(None, &raw_prefixes, None)
    }
}

impl Prefixer for () {
    fn raw_prefixes(&self) -> Vec<RawKey> {
        vec![]
    }
}

impl Prefixer for &str {
    fn raw_prefixes(&self) -> Vec<RawKey> {
        vec![Cow::Borrowed(self.as_bytes())]
    }
}

impl<P> Prefixer for &P
where
    P: Prefixer,
{
    fn raw_prefixes(&self) -> Vec<RawKey> {
        (*self).raw_prefixes()
    }
}

impl<A, B> Prefixer for (A, B)
where
    A: Prefixer,
    B: Prefixer,
{
    fn raw_prefixes(&self) -> Vec<RawKey> {
        let mut prefixes = self.0.raw_prefixes();
        prefixes.extend(self.1.raw_prefixes());
        prefixes
    }
}

// ----------------------------------- tests -----------------------------------
