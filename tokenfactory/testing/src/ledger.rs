use {
    std::collections::{BTreeMap, BTreeSet},
    tokenfactory::AssetLedger,
    tokenfactory_math::{IsZero, NumberConst, Uint256},
    tokenfactory_storage::{StdError, StdResult},
    tokenfactory_types::{Addr, Coin, DenomId, Metadata},
};

/// An in-memory asset ledger.
///
/// Balances that drop to zero are removed, so two ledgers holding the same
/// funds compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockLedger {
    balances: BTreeMap<Addr, BTreeMap<DenomId, Uint256>>,
    supplies: BTreeMap<DenomId, Uint256>,
    metadatas: BTreeMap<DenomId, Metadata>,
    /// Accounts that can't receive transfers.
    blocked: BTreeSet<Addr>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create tokens out of thin air, increasing both the account's balance
    /// and the supply. Stands in for genesis allocations and bridged-in funds.
    pub fn fund(&mut self, addr: Addr, coin: Coin) -> StdResult<()> {
        self.increase_balance(&addr, &coin)?;
        self.increase_supply(&coin)
    }

    /// Builder-style variant of [`fund`](Self::fund).
    pub fn with_funds(mut self, addr: Addr, coin: Coin) -> StdResult<Self> {
        self.fund(addr, coin)?;
        Ok(self)
    }

    /// Reject every transfer into `addr`. Minting into the collector is not a
    /// transfer and isn't affected.
    pub fn block(&mut self, addr: Addr) {
        self.blocked.insert(addr);
    }

    /// All non-zero balances of an account.
    pub fn balances_of(&self, addr: &Addr) -> BTreeMap<DenomId, Uint256> {
        self.balances.get(addr).cloned().unwrap_or_default()
    }

    fn increase_balance(&mut self, addr: &Addr, coin: &Coin) -> StdResult<()> {
        let balance = self
            .balances
            .entry(*addr)
            .or_default()
            .entry(coin.denom.clone())
            .or_insert(Uint256::ZERO);

        *balance = balance.checked_add(coin.amount)?;

        Ok(())
    }

    fn decrease_balance(&mut self, addr: &Addr, coin: &Coin) -> StdResult<()> {
        let balance = self.get_balance(addr, &coin.denom);
        let Ok(remaining) = balance.checked_sub(coin.amount) else {
            return Err(StdError::host(format!(
                "insufficient balance: {addr} has {balance} {}, needs {}",
                coin.denom, coin.amount
            )));
        };

        let Some(balances) = self.balances.get_mut(addr) else {
            // Only reachable when `coin.amount` is zero.
            return Ok(());
        };

        if remaining.is_zero() {
            balances.remove(&coin.denom);
        } else {
            balances.insert(coin.denom.clone(), remaining);
        }

        if balances.is_empty() {
            self.balances.remove(addr);
        }

        Ok(())
    }

    fn increase_supply(&mut self, coin: &Coin) -> StdResult<()> {
        let supply = self
            .supplies
            .entry(coin.denom.clone())
            .or_insert(Uint256::ZERO);

        *supply = supply.checked_add(coin.amount)?;

        Ok(())
    }

    fn decrease_supply(&mut self, coin: &Coin) -> StdResult<()> {
        let supply = self.get_supply(&coin.denom).checked_sub(coin.amount)?;

        if supply.is_zero() {
            self.supplies.remove(&coin.denom);
        } else {
            self.supplies.insert(coin.denom.clone(), supply);
        }

        Ok(())
    }

    fn transfer(&mut self, from: &Addr, to: &Addr, coin: &Coin) -> StdResult<()> {
        if self.blocked.contains(to) {
            return Err(StdError::host(format!("{to} can't receive funds")));
        }

        self.decrease_balance(from, coin)?;
        self.increase_balance(to, coin)
    }
}

impl AssetLedger for MockLedger {
    fn get_balance(&self, addr: &Addr, denom: &DenomId) -> Uint256 {
        self.balances
            .get(addr)
            .and_then(|balances| balances.get(denom))
            .copied()
            .unwrap_or(Uint256::ZERO)
    }

    fn get_supply(&self, denom: &DenomId) -> Uint256 {
        self.supplies.get(denom).copied().unwrap_or(Uint256::ZERO)
    }

    fn transfer_to_collector(
        &mut self,
        from: &Addr,
        collector: &Addr,
        coin: &Coin,
    ) -> StdResult<()> {
        self.transfer(from, collector, coin)
    }

    fn transfer_from_collector(
        &mut self,
        collector: &Addr,
        to: &Addr,
        coin: &Coin,
    ) -> StdResult<()> {
        self.transfer(collector, to, coin)
    }

    fn mint(&mut self, collector: &Addr, coin: &Coin) -> StdResult<()> {
        self.increase_balance(collector, coin)?;
        self.increase_supply(coin)
    }

    fn burn(&mut self, collector: &Addr, coin: &Coin) -> StdResult<()> {
        self.decrease_balance(collector, coin)?;
        self.decrease_supply(coin)
    }

    fn get_metadata(&self, denom: &DenomId) -> Option<Metadata> {
        self.metadatas.get(denom).cloned()
    }

    fn set_metadata(&mut self, metadata: Metadata) {
        self.metadatas.insert(metadata.base.clone(), metadata);
    }

    fn has_native_supply(&self, denom: &DenomId) -> bool {
        !denom.is_factory() && !self.get_supply(denom).is_zero()
    }
}
