use {
    crate::{nested_namespaces_with_key, Codec, RawKey, StdError, StdResult, Storage},
    std::{borrow::Cow, marker::PhantomData},
};

/// Where exactly one value lives in the store, and which codec its bytes are
/// in. [`Item`](crate::Item)s and [`Map`](crate::Map) entries both resolve to
/// one of these.
pub struct Path<'a, T, C> {
    key: Cow<'a, [u8]>,
    marker: PhantomData<(T, C)>,
}

impl<'a, T, C> Path<'a, T, C>
where
    C: Codec<T>,
{
    pub fn new(namespace: &[u8], prefixes: &[RawKey], key: Option<&RawKey>) -> Self {
        let key = nested_namespaces_with_key(Some(namespace), prefixes, key);

        Self {
            key: Cow::Owned(key),
            marker: PhantomData,
        }
    }

    pub const fn from_raw(key: &'a [u8]) -> Self {
        Self {
            key: Cow::Borrowed(key),
            marker: PhantomData,
        }
    }

    pub fn exists(&self, storage: &dyn Storage) -> bool {
        storage.read(&self.key).is_some()
    }

    pub fn may_load(&self, storage: &dyn Storage) -> StdResult<Option<T>> {
        match storage.read(&self.key) {
            Some(bytes) => C::decode(&bytes).map(Some),
            None => Ok(None),
        }
    }

    pub fn load(&self, storage: &dyn Storage) -> StdResult<T> {
        self.may_load(storage)?
            .ok_or_else(|| StdError::data_not_found::<T>(&self.key))
    }

    pub fn save(&self, storage: &mut dyn Storage, data: &T) -> StdResult<()> {
        storage.write(&self.key, &C::encode(data)?);
        Ok(())
    }

    pub fn remove(&self, storage: &mut dyn Storage) {
        storage.remove(&self.key);
    }
}
