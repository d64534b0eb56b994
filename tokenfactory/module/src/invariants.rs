use {
    crate::{AssetLedger, ADMIN_DENOMS, DENOMS, DENOM_AUTHS},
    std::collections::BTreeSet,
    tokenfactory_storage::{Order, StdResult, Storage},
    tokenfactory_types::{Addr, DenomId, FactoryResult},
};

/// Result of a whole-store consistency scan.
///
/// A broken invariant is reported, never acted upon: nothing is halted or
/// rolled back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantOutcome {
    pub name: &'static str,
    pub broken: bool,
    pub violations: Vec<String>,
}

impl InvariantOutcome {
    fn new(name: &'static str, violations: Vec<String>) -> Self {
        let broken = !violations.is_empty();

        if broken {
            tracing::warn!(
                invariant = name,
                count = violations.len(),
                violations = violations.join("; "),
                "Invariant broken"
            );
        }

        Self {
            name,
            broken,
            violations,
        }
    }
}

/// No denom has minted more than its cap.
pub fn minted_within_cap(storage: &dyn Storage) -> FactoryResult<InvariantOutcome> {
    let mut violations = Vec::new();

    for res in DENOMS.values(storage, None, None, Order::Ascending) {
        let denom = res?;
        if denom.minted > denom.minting_cap {
            violations.push(format!(
                "{}: minted {} exceeds cap {}",
                denom.denom, denom.minted, denom.minting_cap
            ));
        }
    }

    Ok(InvariantOutcome::new("minted-within-cap", violations))
}

/// Every denom's ledger supply is covered by what the factory has minted.
pub fn minted_covers_supply(
    storage: &dyn Storage,
    ledger: &dyn AssetLedger,
) -> FactoryResult<InvariantOutcome> {
    let mut violations = Vec::new();

    for res in DENOMS.values(storage, None, None, Order::Ascending) {
        let denom = res?;
        let supply = ledger.get_supply(&denom.denom);
        if denom.minted < supply {
            violations.push(format!(
                "{}: minted {} is less than ledger supply {supply}",
                denom.denom, denom.minted
            ));
        }
    }

    Ok(InvariantOutcome::new("minted-covers-supply", violations))
}

/// The admin index contains exactly the admins named by the admin records.
pub fn admin_index_consistent(storage: &dyn Storage) -> FactoryResult<InvariantOutcome> {
    let mut expected = BTreeSet::new();
    for res in DENOM_AUTHS.values(storage, None, None, Order::Ascending) {
        let auth = res?;
        for admin in auth.admins() {
            expected.insert((admin, auth.denom.clone()));
        }
    }

    let actual = ADMIN_DENOMS
        .range(storage, None, None, Order::Ascending)
        .collect::<StdResult<BTreeSet<(Addr, DenomId)>>>()?;

    let missing = expected
        .difference(&actual)
        .map(|(admin, denom)| format!("{admin} administers {denom} but isn't indexed"));
    let stale = actual
        .difference(&expected)
        .map(|(admin, denom)| format!("{admin} is indexed under {denom} but isn't an admin"));

    Ok(InvariantOutcome::new(
        "admin-index-consistent",
        missing.chain(stale).collect(),
    ))
}

pub fn check_invariants(
    storage: &dyn Storage,
    ledger: &dyn AssetLedger,
) -> FactoryResult<Vec<InvariantOutcome>> {
    Ok(vec![
        minted_within_cap(storage)?,
        minted_covers_supply(storage, ledger)?,
        admin_index_consistent(storage)?,
    ])
}
