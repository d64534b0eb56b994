use {
    crate::DenomId,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Display metadata of a denom, as held by the asset ledger.
#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Metadata {
    pub base: DenomId,
    pub display: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub uri_hash: String,
}

impl Metadata {
    /// The metadata a factory denom starts out with: name, symbol and display
    /// all equal the denom itself.
    pub fn new_default(denom: &DenomId, uri: String, uri_hash: String) -> Self {
        Self {
            base: denom.clone(),
            display: denom.to_string(),
            name: denom.to_string(),
            symbol: denom.to_string(),
            description: String::new(),
            uri,
            uri_hash,
        }
        .sanitize()
    }

    /// Clear the URI hash if the URI is empty.
    pub fn sanitize(mut self) -> Self {
        if self.uri.is_empty() {
            self.uri_hash.clear();
        }
        self
    }
}
