use std::borrow::Cow;

/// A serialized key, or key element, that may or may not be owned.
pub type RawKey<'a> = Cow<'a, [u8]>;

/// Lay out a namespace, any number of prefixes, and an optional final key as
/// a single storage key.
///
/// Every element but the final key is preceded by its length as a big-endian
/// `u16`, so that the elements can be told apart again:
///
/// ```plain
/// len(namespace) | namespace | len(prefix) | prefix | ... | key
/// ```
pub fn nested_namespaces_with_key(
    namespace: Option<&[u8]>,
    prefixes: &[RawKey],
    key: Option<&RawKey>,
) -> Vec<u8> {
    let mut out = Vec::new();

    for elem in namespace.into_iter().chain(prefixes.iter().map(AsRef::as_ref)) {
        out.extend_from_slice(&encode_length(elem));
        out.extend_from_slice(elem);
    }

    if let Some(key) = key {
        out.extend_from_slice(key);
    }

    out
}

/// Length of a key element as two big-endian bytes.
///
/// Key elements are namespaces and denoms, all far shorter than `u16::MAX`;
/// anything longer is a programming error.
pub fn encode_length(bytes: &[u8]) -> [u8; 2] {
    match u16::try_from(bytes.len()) {
        Ok(len) => len.to_be_bytes(),
        Err(_) => panic!("key element too long: {} bytes", bytes.len()),
    }
}

/// The smallest key greater than every key starting with `bytes`.
///
/// `bytes` is always a length-prefixed namespace, so it can't consist of
/// 0xff bytes only.
#[doc(hidden)]
pub fn increment_last_byte(mut bytes: Vec<u8>) -> Vec<u8> {
    while let Some(last) = bytes.pop() {
        if last < u8::MAX {
            bytes.push(last + 1);
            break;
        }
    }
    bytes
}

/// The smallest key greater than `bytes` itself.
#[doc(hidden)]
pub fn extend_one_byte(mut bytes: Vec<u8>) -> Vec<u8> {
    bytes.push(0);
    bytes
}

#[doc(hidden)]
pub fn concat(namespace: &[u8], key: &[u8]) -> Vec<u8> {
    [namespace, key].concat()
}

/// Strip `namespace` from the front of `key`.
#[doc(hidden)]
pub fn trim(namespace: &[u8], key: &[u8]) -> Vec<u8> {
    key.strip_prefix(namespace).unwrap_or(key).to_vec()
}

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test]
    fn nesting_prefixes_lengths() {
        let path = nested_namespaces_with_key(
            Some(b"ns"),
            &[Cow::Borrowed(b"abc".as_slice())],
            Some(&Cow::Borrowed(b"key".as_slice())),
        );

        assert_eq!(path, b"\x00\x02ns\x00\x03abckey");
        assert_eq!(trim(b"\x00\x02ns\x00\x03abc", &path), b"key");
    }

    #[test_case(vec![1, 2, 3] => vec![1, 2, 4]; "simple")]
    #[test_case(vec![1, 255] => vec![2]; "drops trailing max bytes")]
    #[test_case(vec![0, 3, 102, 111, 111] => vec![0, 3, 102, 111, 112]; "namespace")]
    fn incrementing_last_byte(input: Vec<u8>) -> Vec<u8> {
        increment_last_byte(input)
    }
}
