use {
    crate::{ADMIN_DENOMS, DENOM_AUTHS},
    tokenfactory_storage::{Order, StdResult, Storage},
    tokenfactory_types::DenomAuth,
};

/// Bring the admin index in line with a denom's new admins.
///
/// All admins of the old record are removed first, then all admins of the new
/// one are added, so an address that appears in both stays indexed.
pub fn reindex(
    storage: &mut dyn Storage,
    old: Option<&DenomAuth>,
    new: &DenomAuth,
) -> StdResult<()> {
    if let Some(old) = old {
        for admin in old.admins() {
            ADMIN_DENOMS.remove(storage, (&admin, &old.denom));
        }
    }

    for admin in new.admins() {
        ADMIN_DENOMS.insert(storage, (&admin, &new.denom))?;
    }

    Ok(())
}

/// Discard the admin index and derive it again from the denom admin records.
///
/// Returns the number of index entries written.
pub fn rebuild_admin_index(storage: &mut dyn Storage) -> StdResult<usize> {
    ADMIN_DENOMS.clear(storage, None, None);

    let auths = DENOM_AUTHS
        .values(storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;

    let mut entries = 0;
    for auth in &auths {
        for admin in auth.admins() {
            ADMIN_DENOMS.insert(storage, (&admin, &auth.denom))?;
            entries += 1;
        }
    }

    tracing::info!(denoms = auths.len(), entries, "Rebuilt admin index");

    Ok(entries)
}
