/// A key and its value, as raw bytes.
pub type Record = (Vec<u8>, Vec<u8>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// The module's view of the host ledger's key-value state.
///
/// Writes are buffered by the host, which either commits all of a
/// transaction's writes or none of them.
///
/// Range methods take an inclusive lower bound and an exclusive upper bound.
/// A lower bound above the upper one yields nothing.
pub trait Storage {
    fn read(&self, key: &[u8]) -> Option<Vec<u8>>;

    fn scan<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a>;

    fn scan_keys<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Vec<u8>> + 'a> {
        Box::new(self.scan(min, max, order).map(|(key, _)| key))
    }

    fn scan_values<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Vec<u8>> + 'a> {
        Box::new(self.scan(min, max, order).map(|(_, value)| value))
    }

    fn write(&mut self, key: &[u8], value: &[u8]);

    /// Removing a key that isn't there is not an error.
    fn remove(&mut self, key: &[u8]);

    fn remove_range(&mut self, min: Option<&[u8]>, max: Option<&[u8]>) {
        // Collect first; can't remove while the scan borrows the store.
        let keys: Vec<_> = self.scan_keys(min, max, Order::Ascending).collect();
        for key in &keys {
            self.remove(key);
        }
    }
}
