use {
    std::collections::BTreeMap,
    tokenfactory::{AccountRegistry, COLLECTOR_ACCOUNT, GOVERNANCE_ACCOUNT},
    tokenfactory_types::Addr,
};

pub const MOCK_COLLECTOR: Addr = Addr::mock(200);

pub const MOCK_GOVERNANCE: Addr = Addr::mock(201);

/// Module accounts looked up by name.
#[derive(Debug, Clone)]
pub struct MockAccounts {
    accounts: BTreeMap<String, Addr>,
}

impl MockAccounts {
    /// An empty registry. Operations that need the collector will fail.
    pub fn empty() -> Self {
        Self {
            accounts: BTreeMap::new(),
        }
    }

    pub fn with_account(mut self, name: &str, addr: Addr) -> Self {
        self.accounts.insert(name.to_string(), addr);
        self
    }
}

impl Default for MockAccounts {
    fn default() -> Self {
        Self::empty()
            .with_account(COLLECTOR_ACCOUNT, MOCK_COLLECTOR)
            .with_account(GOVERNANCE_ACCOUNT, MOCK_GOVERNANCE)
    }
}

impl AccountRegistry for MockAccounts {
    fn module_address(&self, name: &str) -> Option<Addr> {
        self.accounts.get(name).copied()
    }
}
