use {
    tokenfactory_math::Uint256,
    tokenfactory_storage::StdResult,
    tokenfactory_types::{Addr, Coin, DenomId, FactoryEvent, Metadata},
};

/// The ledger that holds account balances, supplies, and denom metadata.
///
/// The token factory never touches balances directly; every movement of funds
/// goes through here.
pub trait AssetLedger {
    /// Whether `addr` holds at least `coin.amount` of `coin.denom`.
    fn has_balance(&self, addr: &Addr, coin: &Coin) -> bool {
        self.get_balance(addr, &coin.denom) >= coin.amount
    }

    fn get_balance(&self, addr: &Addr, denom: &DenomId) -> Uint256;

    /// Ledger-wide circulating supply of a denom.
    fn get_supply(&self, denom: &DenomId) -> Uint256;

    fn transfer_to_collector(&mut self, from: &Addr, collector: &Addr, coin: &Coin)
        -> StdResult<()>;

    fn transfer_from_collector(&mut self, collector: &Addr, to: &Addr, coin: &Coin)
        -> StdResult<()>;

    /// Create new tokens in the collector's balance.
    fn mint(&mut self, collector: &Addr, coin: &Coin) -> StdResult<()>;

    /// Destroy tokens from the collector's balance.
    fn burn(&mut self, collector: &Addr, coin: &Coin) -> StdResult<()>;

    fn get_metadata(&self, denom: &DenomId) -> Option<Metadata>;

    fn set_metadata(&mut self, metadata: Metadata);

    /// Whether a denom that is not issued by the factory has supply on the
    /// ledger.
    fn has_native_supply(&self, denom: &DenomId) -> bool;
}

/// Resolves module accounts by name.
pub trait AccountRegistry {
    fn module_address(&self, name: &str) -> Option<Addr>;
}

/// Fire-and-forget receiver of structured events.
pub trait EventSink {
    fn emit(&mut self, event: FactoryEvent);
}
