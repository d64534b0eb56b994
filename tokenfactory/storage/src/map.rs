use {
    crate::{
        Borsh, Bound, Codec, Order, Path, Prefix, Prefixer, PrimaryKey, StdResult, Storage,
    },
    std::marker::PhantomData,
};

/// A sorted key-value mapping under a fixed namespace.
pub struct Map<'a, K, T, C = Borsh>
where
    C: Codec<T>,
{
    namespace: &'a [u8],
    marker: PhantomData<(K, T, C)>,
}

impl<'a, K, T, C> Map<'a, K, T, C>
where
    C: Codec<T>,
{
    pub const fn new(namespace: &'a str) -> Self {
        Self {
            namespace: namespace.as_bytes(),
            marker: PhantomData,
        }
    }
}

impl<K, T, C> Map<'_, K, T, C>
where
    K: PrimaryKey,
    C: Codec<T>,
{
    fn path(&self, key: K) -> Path<T, C> {
        let mut raw_keys = key.raw_keys();
        let last_raw_key = raw_keys.pop();
        Path::new(self.namespace, &raw_keys, last_raw_key.as_ref())
    }

    fn no_prefix(&self) -> Prefix<K, T, C> {
        Prefix::new(self.namespace, &[])
    }

    pub fn prefix(&self, prefix: K::Prefix) -> Prefix<K::Suffix, T, C> {
        Prefix::new(self.namespace, &prefix.raw_prefixes())
    }

    pub fn is_empty(&self, storage: &dyn Storage) -> bool {
        self.no_prefix().is_empty(storage)
    }

    // ---------------------- methods for single entries -----------------------

    pub fn has(&self, storage: &dyn Storage, key: K) -> bool {
        self.path(key).exists(storage)
    }

    pub fn may_load(&self, storage: &dyn Storage, key: K) -> StdResult<Option<T>> {
        self.path(key).may_load(storage)
    }

    pub fn load(&self, storage: &dyn Storage, key: K) -> StdResult<T> {
        self.path(key).load(storage)
    }

    pub fn save(&self, storage: &mut dyn Storage, key: K, data: &T) -> StdResult<()> {
        self.path(key).save(storage, data)
    }

    pub fn remove(&self, storage: &mut dyn Storage, key: K) {
        self.path(key).remove(storage)
    }

    // --------------------------- iteration methods ---------------------------

    pub fn range<'b>(
        &self,
        storage: &'b dyn Storage,
        min: Option<Bound<K>>,
        max: Option<Bound<K>>,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<(K::Output, T)>> + 'b> {
        self.no_prefix().range(storage, min, max, order)
    }

    pub fn keys<'b>(
        &self,
        storage: &'b dyn Storage,
        min: Option<Bound<K>>,
        max: Option<Bound<K>>,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<K::Output>> + 'b> {
        self.no_prefix().keys(storage, min, max, order)
    }

    pub fn values<'b>(
        &self,
        storage: &'b dyn Storage,
        min: Option<Bound<K>>,
        max: Option<Bound<K>>,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<T>> + 'b> {
        self.no_prefix().values(storage, min, max, order)
    }

    pub fn clear(&self, storage: &mut dyn Storage, min: Option<Bound<K>>, max: Option<Bound<K>>) {
        self.no_prefix().clear(storage, min, max)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{MockStorage, StdError},
    };

    const BALANCES: Map<(&str, &str), u64> = Map::new("b");
    const NAMES: Map<&str, String> = Map::new("n");

    fn balances() -> MockStorage {
        let mut storage = MockStorage::new();
        for (owner, denom, amount) in [
            ("alice", "uatom", 10),
            ("alice", "uosmo", 20),
            ("bob", "uatom", 30),
            ("carol", "ujuno", 40),
        ] {
            BALANCES.save(&mut storage, (owner, denom), &amount).unwrap();
        }
        storage
    }

    #[test]
    fn single_entries() {
        let mut storage = MockStorage::new();

        assert!(!NAMES.has(&storage, "k"));
        assert!(matches!(
            NAMES.load(&storage, "k"),
            Err(StdError::DataNotFound { .. })
        ));

        NAMES.save(&mut storage, "k", &"v".to_string()).unwrap();
        assert_eq!(NAMES.load(&storage, "k").unwrap(), "v");

        NAMES.remove(&mut storage, "k");
        assert_eq!(NAMES.may_load(&storage, "k").unwrap(), None);
    }

    #[test]
    fn prefix_iteration() {
        let storage = balances();

        let alice = BALANCES
            .prefix("alice")
            .range(&storage, None, None, Order::Ascending)
            .collect::<StdResult<Vec<_>>>()
            .unwrap();
        assert_eq!(alice, [("uatom".to_string(), 10), ("uosmo".to_string(), 20)]);

        // "bob" must not see "alice"'s or "carol"'s entries.
        let bob = BALANCES
            .prefix("bob")
            .keys(&storage, None, None, Order::Ascending)
            .collect::<StdResult<Vec<_>>>()
            .unwrap();
        assert_eq!(bob, ["uatom".to_string()]);
    }

    #[test]
    fn full_range_with_bounds() {
        let storage = balances();

        // Each key element is length-prefixed, so shorter elements sort first:
        // "bob" (3 bytes) comes before "alice" and "carol" (5 bytes).
        let all = BALANCES
            .keys(&storage, None, None, Order::Ascending)
            .collect::<StdResult<Vec<_>>>()
            .unwrap();
        assert_eq!(all, [
            ("bob".to_string(), "uatom".to_string()),
            ("alice".to_string(), "uatom".to_string()),
            ("alice".to_string(), "uosmo".to_string()),
            ("carol".to_string(), "ujuno".to_string()),
        ]);

        let keys = BALANCES
            .keys(
                &storage,
                Some(Bound::Exclusive(("alice", "uosmo"))),
                None,
                Order::Ascending,
            )
            .collect::<StdResult<Vec<_>>>()
            .unwrap();
        assert_eq!(keys, [("carol".to_string(), "ujuno".to_string())]);

        let total: u64 = BALANCES
            .values(&storage, None, None, Order::Descending)
            .map(|res| res.unwrap())
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn clearing() {
        let mut storage = balances();

        BALANCES.prefix("alice").clear(&mut storage, None, None);
        assert!(BALANCES.prefix("alice").is_empty(&storage));
        assert!(!BALANCES.is_empty(&storage));

        BALANCES.clear(&mut storage, None, None);
        assert!(BALANCES.is_empty(&storage));
    }
}
