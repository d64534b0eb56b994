use crate::PrimaryKey;

/// A [`Bound`] whose key has been serialized.
pub enum RawBound {
    Inclusive(Vec<u8>),
    Exclusive(Vec<u8>),
}

/// One end of an iteration range. An open end is `None`, so a pagination
/// cursor maps straight onto `start_after.map(Bound::Exclusive)`.
pub enum Bound<K> {
    Inclusive(K),
    Exclusive(K),
}

impl<K> From<Bound<K>> for RawBound
where
    K: PrimaryKey,
{
    fn from(bound: Bound<K>) -> Self {
        match bound {
            Bound::Inclusive(k) => RawBound::Inclusive(k.joined_key()),
            Bound::Exclusive(k) => RawBound::Exclusive(k.joined_key()),
        }
    }
}
