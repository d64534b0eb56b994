use {
    crate::{EventCollector, MockAccounts, MockLedger, MOCK_COLLECTOR},
    serde::de::DeserializeOwned,
    tokenfactory::{check_invariants, execute, instantiate, query, ImmutableCtx, MutableCtx},
    tokenfactory_math::Uint256,
    tokenfactory_storage::{JsonDeExt, MockStorage},
    tokenfactory_types::{
        Addr, Denom, DenomAuth, DenomId, DenomStats, ExecuteMsg, ExecuteResponse, FactoryError,
        FactoryResult, InstantiateMsg, Params, ProposedDenomAuth, QueryMsg,
    },
};

/// The module wired up to in-memory collaborators.
///
/// Each execution is a transaction: if it fails, storage, ledger, and event
/// log are restored to what they were before.
pub struct TestSuite {
    pub storage: MockStorage,
    pub ledger: MockLedger,
    pub accounts: MockAccounts,
    pub events: EventCollector,
}

impl TestSuite {
    pub fn new(msg: InstantiateMsg, ledger: MockLedger) -> FactoryResult<Self> {
        let mut storage = MockStorage::new();
        instantiate(&mut storage, msg)?;

        Ok(Self {
            storage,
            ledger,
            accounts: MockAccounts::default(),
            events: EventCollector::default(),
        })
    }

    /// A suite with free denom creation and an empty ledger.
    pub fn new_default() -> Self {
        let mut storage = MockStorage::new();
        instantiate(&mut storage, InstantiateMsg::default())
            .unwrap_or_else(|err| panic!("failed to instantiate default suite: {err}"));

        Self {
            storage,
            ledger: MockLedger::new(),
            accounts: MockAccounts::default(),
            events: EventCollector::default(),
        }
    }

    pub fn with_accounts(mut self, accounts: MockAccounts) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn execute(&mut self, sender: Addr, msg: ExecuteMsg) -> FactoryResult<ExecuteResponse> {
        let storage = self.storage.clone();
        let ledger = self.ledger.clone();
        let events = self.events.len();

        let res = execute(
            MutableCtx {
                storage: &mut self.storage,
                ledger: &mut self.ledger,
                accounts: &self.accounts,
                events: &mut self.events,
                sender,
            },
            msg,
        );

        if let Err(err) = &res {
            tracing::debug!(sender = sender.to_string(), err = %err, "Execution failed, reverting");

            self.storage = storage;
            self.ledger = ledger;
            self.events.truncate(events);
        }

        res
    }

    pub fn query<R>(&self, msg: QueryMsg) -> anyhow::Result<R>
    where
        R: DeserializeOwned,
    {
        let ctx = ImmutableCtx {
            storage: &self.storage,
            ledger: &self.ledger,
        };

        Ok(query(ctx, msg)?.deserialize_json()?)
    }

    // ------------------------------ execute helpers ------------------------------

    /// Create a denom with an updatable cap and no metadata URI.
    pub fn create_denom(
        &mut self,
        sender: Addr,
        sub_id: &str,
        minting_cap: u128,
    ) -> FactoryResult<DenomId> {
        let res = self.execute(sender, ExecuteMsg::CreateDenom {
            sub_id: sub_id.to_string(),
            minting_cap: Uint256::new_from_u128(minting_cap),
            can_change_minting_cap: true,
            uri: String::new(),
            uri_hash: String::new(),
        })?;

        match res {
            ExecuteResponse::DenomCreated(denom) => Ok(denom.denom),
            other => Err(FactoryError::invalid_request(format!(
                "unexpected response to denom creation: {other:?}"
            ))),
        }
    }

    pub fn mint(
        &mut self,
        sender: Addr,
        denom: &DenomId,
        amount: u128,
        recipient: Addr,
    ) -> FactoryResult<()> {
        self.execute(sender, ExecuteMsg::Mint {
            denom: denom.clone(),
            amount: Uint256::new_from_u128(amount),
            recipient,
        })
        .map(|_| ())
    }

    pub fn burn(&mut self, sender: Addr, denom: &DenomId, amount: u128) -> FactoryResult<()> {
        self.execute(sender, ExecuteMsg::Burn {
            denom: denom.clone(),
            amount: Uint256::new_from_u128(amount),
        })
        .map(|_| ())
    }

    // ------------------------------- query helpers -------------------------------

    pub fn query_params(&self) -> anyhow::Result<Params> {
        self.query(QueryMsg::Params {})
    }

    pub fn query_denom(&self, denom: &DenomId) -> anyhow::Result<Denom> {
        self.query(QueryMsg::Denom {
            denom: denom.clone(),
        })
    }

    pub fn query_denom_auth(&self, denom: &DenomId) -> anyhow::Result<DenomAuth> {
        self.query(QueryMsg::DenomAuth {
            denom: denom.clone(),
        })
    }

    pub fn query_proposal(&self, denom: &DenomId) -> anyhow::Result<Option<ProposedDenomAuth>> {
        self.query(QueryMsg::ProposedDenomAuth {
            denom: denom.clone(),
        })
    }

    pub fn query_denoms_by_admin(&self, admin: Addr) -> anyhow::Result<Vec<DenomId>> {
        self.query(QueryMsg::DenomsByAdmin {
            admin,
            start_after: None,
            limit: Some(u32::MAX),
        })
    }

    pub fn query_stats(&self, denom: &DenomId) -> anyhow::Result<DenomStats> {
        self.query(QueryMsg::Stats {
            denom: denom.clone(),
        })
    }

    pub fn balance(&self, addr: Addr, denom: &DenomId) -> Uint256 {
        tokenfactory::AssetLedger::get_balance(&self.ledger, &addr, denom)
    }

    pub fn collector_balance(&self, denom: &DenomId) -> Uint256 {
        self.balance(MOCK_COLLECTOR, denom)
    }

    /// Panic if any store-wide invariant is broken.
    pub fn assert_invariants(&self) {
        let outcomes = check_invariants(&self.storage, &self.ledger)
            .unwrap_or_else(|err| panic!("failed to check invariants: {err}"));

        for outcome in outcomes {
            assert!(
                !outcome.broken,
                "invariant `{}` is broken: {:?}",
                outcome.name, outcome.violations
            );
        }
    }
}
