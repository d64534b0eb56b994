use {
    crate::{Borsh, Bound, Codec, Order, Path, Prefix, Prefixer, PrimaryKey, StdResult, Storage},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::marker::PhantomData,
};

/// A value that carries no data. Serializes to zero bytes in Borsh.
#[derive(
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
)]
pub struct Empty {}

/// Mimic the behavior of `BTreeSet`. Internally, this is a `Map<T, Empty>`.
pub struct Set<'a, T, C = Borsh>
where
    C: Codec<Empty>,
{
    namespace: &'a [u8],
    marker: PhantomData<(T, C)>,
}

impl<'a, T, C> Set<'a, T, C>
where
    C: Codec<Empty>,
{
    pub const fn new(namespace: &'a str) -> Self {
        Self {
            namespace: namespace.as_bytes(),
            marker: PhantomData,
        }
    }
}

impl<T, C> Set<'_, T, C>
where
    T: PrimaryKey,
    C: Codec<Empty>,
{
    fn path(&self, item: T) -> Path<Empty, C> {
        let mut raw_keys = item.raw_keys();
        let last_raw_key = raw_keys.pop();
        Path::new(self.namespace, &raw_keys, last_raw_key.as_ref())
    }

    fn no_prefix(&self) -> Prefix<T, Empty, C> {
        Prefix::new(self.namespace, &[])
    }

    pub fn prefix(&self, prefix: T::Prefix) -> Prefix<T::Suffix, Empty, C> {
        Prefix::new(self.namespace, &prefix.raw_prefixes())
    }

    pub fn is_empty(&self, storage: &dyn Storage) -> bool {
        self.no_prefix().is_empty(storage)
    }

    pub fn insert(&self, storage: &mut dyn Storage, item: T) -> StdResult<()> {
        self.path(item).save(storage, &Empty {})
    }

    pub fn remove(&self, storage: &mut dyn Storage, item: T) {
        self.path(item).remove(storage)
    }

    pub fn range<'b>(
        &self,
        storage: &'b dyn Storage,
        min: Option<Bound<T>>,
        max: Option<Bound<T>>,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<T::Output>> + 'b> {
        self.no_prefix().keys(storage, min, max, order)
    }

    pub fn clear(&self, storage: &mut dyn Storage, min: Option<Bound<T>>, max: Option<Bound<T>>) {
        self.no_prefix().clear(storage, min, max)
    }
}
