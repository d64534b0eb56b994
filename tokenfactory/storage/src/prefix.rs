use {
    crate::{
        concat, extend_one_byte, increment_last_byte, nested_namespaces_with_key, trim, Bound,
        Codec, Order, PrimaryKey, RawBound, RawKey, Record, StdResult, Storage,
    },
    std::marker::PhantomData,
};

/// A view over all entries of a map that share a common namespace, i.e. the
/// map's own namespace followed by zero or more key prefixes.
pub struct Prefix<K, T, C>
where
    C: Codec<T>,
{
    namespace: Vec<u8>,
    marker: PhantomData<(K, T, C)>,
}

impl<K, T, C> Prefix<K, T, C>
where
    C: Codec<T>,
{
    pub fn new(namespace: &[u8], prefixes: &[RawKey]) -> Self {
        Self {
            namespace: nested_namespaces_with_key(Some(namespace), prefixes, None),
            marker: PhantomData,
        }
    }
}

impl<K, T, C> Prefix<K, T, C>
where
    K: PrimaryKey,
    C: Codec<T>,
{
    /// Translate key bounds into the half-open byte range the store scans,
    /// confined to this prefix.
    fn byte_range(&self, min: Option<Bound<K>>, max: Option<Bound<K>>) -> (Vec<u8>, Vec<u8>) {
        let ns = &self.namespace;

        let min = match min.map(RawBound::from) {
            None => ns.clone(),
            Some(RawBound::Inclusive(key)) => concat(ns, &key),
            Some(RawBound::Exclusive(key)) => concat(ns, &extend_one_byte(key)),
        };

        let max = match max.map(RawBound::from) {
            None => increment_last_byte(ns.clone()),
            Some(RawBound::Inclusive(key)) => concat(ns, &extend_one_byte(key)),
            Some(RawBound::Exclusive(key)) => concat(ns, &key),
        };

        (min, max)
    }

    pub fn is_empty(&self, storage: &dyn Storage) -> bool {
        self.keys_raw(storage, None, None, Order::Ascending)
            .next()
            .is_none()
    }

    /// Entries in range, with this prefix stripped from their keys.
    pub fn range_raw<'a>(
        &self,
        storage: &'a dyn Storage,
        min: Option<Bound<K>>,
        max: Option<Bound<K>>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a> {
        let (min, max) = self.byte_range(min, max);
        let ns = self.namespace.clone();

        Box::new(
            storage
                .scan(Some(&min), Some(&max), order)
                .map(move |(key, value)| (trim(&ns, &key), value)),
        )
    }

    pub fn range<'a>(
        &self,
        storage: &'a dyn Storage,
        min: Option<Bound<K>>,
        max: Option<Bound<K>>,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<(K::Output, T)>> + 'a> {
        Box::new(
            self.range_raw(storage, min, max, order)
                .map(|(key, value)| Ok((K::from_slice(&key)?, C::decode(&value)?))),
        )
    }

    pub fn keys_raw<'a>(
        &self,
        storage: &'a dyn Storage,
        min: Option<Bound<K>>,
        max: Option<Bound<K>>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Vec<u8>> + 'a> {
        let (min, max) = self.byte_range(min, max);
        let ns = self.namespace.clone();

        Box::new(
            storage
                .scan_keys(Some(&min), Some(&max), order)
                .map(move |key| trim(&ns, &key)),
        )
    }

    pub fn keys<'a>(
        &self,
        storage: &'a dyn Storage,
        min: Option<Bound<K>>,
        max: Option<Bound<K>>,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<K::Output>> + 'a> {
        Box::new(
            self.keys_raw(storage, min, max, order)
                .map(|key| K::from_slice(&key)),
        )
    }

    pub fn values<'a>(
        &self,
        storage: &'a dyn Storage,
        min: Option<Bound<K>>,
        max: Option<Bound<K>>,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<T>> + 'a> {
        let (min, max) = self.byte_range(min, max);

        Box::new(
            storage
                .scan_values(Some(&min), Some(&max), order)
                .map(|value| C::decode(&value)),
        )
    }

    pub fn clear(&self, storage: &mut dyn Storage, min: Option<Bound<K>>, max: Option<Bound<K>>) {
        let (min, max) = self.byte_range(min, max);
        storage.remove_range(Some(&min), Some(&max));
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{Borsh, MockStorage},
    };

    #[test]
    fn range_bounds_stay_inside_namespace() {
        let mut storage = MockStorage::new();
        let prefix: Prefix<&str, u64, Borsh> = Prefix::new(b"foo", &[]);

        // Entries that belong to the prefix.
        storage.write(b"\x00\x03fooa", &borsh::to_vec(&1_u64).unwrap());
        storage.write(b"\x00\x03foob", &borsh::to_vec(&2_u64).unwrap());
        storage.write(b"\x00\x03fooc", &borsh::to_vec(&3_u64).unwrap());
        // Neighbors that must not be visited.
        storage.write(b"\x00\x03fon", &borsh::to_vec(&9_u64).unwrap());
        storage.write(b"\x00\x03fop", &borsh::to_vec(&9_u64).unwrap());
        storage.write(b"\x00\x04food", &borsh::to_vec(&9_u64).unwrap());

        let all = prefix
            .range(&storage, None, None, Order::Ascending)
            .collect::<StdResult<Vec<_>>>()
            .unwrap();
        assert_eq!(all, [
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 3)
        ]);

        let after_a = prefix
            .keys(
                &storage,
                Some(Bound::Exclusive("a")),
                None,
                Order::Descending,
            )
            .collect::<StdResult<Vec<_>>>()
            .unwrap();
        assert_eq!(after_a, ["c".to_string(), "b".to_string()]);

        let up_to_b = prefix
            .values(
                &storage,
                None,
                Some(Bound::Inclusive("b")),
                Order::Ascending,
            )
            .collect::<StdResult<Vec<_>>>()
            .unwrap();
        assert_eq!(up_to_b, [1, 2]);

        prefix.clear(&mut storage, None, None);
        assert!(prefix.is_empty(&storage));
        assert_eq!(storage.len(), 3);
    }
}
