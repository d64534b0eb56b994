use {
    crate::{AccountRegistry, AssetLedger, EventSink, COLLECTOR_ACCOUNT},
    tokenfactory_storage::{StdError, Storage},
    tokenfactory_types::{Addr, FactoryResult},
};

/// Everything a state-changing operation has access to.
pub struct MutableCtx<'a> {
    pub storage: &'a mut dyn Storage,
    pub ledger: &'a mut dyn AssetLedger,
    pub accounts: &'a dyn AccountRegistry,
    pub events: &'a mut dyn EventSink,
    pub sender: Addr,
}

impl MutableCtx<'_> {
    pub fn collector(&self) -> FactoryResult<Addr> {
        module_address(self.accounts, COLLECTOR_ACCOUNT)
    }
}

/// Everything a query has access to.
#[derive(Clone, Copy)]
pub struct ImmutableCtx<'a> {
    pub storage: &'a dyn Storage,
    pub ledger: &'a dyn AssetLedger,
}

pub(crate) fn module_address(accounts: &dyn AccountRegistry, name: &str) -> FactoryResult<Addr> {
    accounts
        .module_address(name)
        .ok_or_else(|| StdError::host(format!("module account `{name}` is not registered")).into())
}
