use {
    tokenfactory_storage::{Item, Map, Set},
    tokenfactory_types::{Addr, Denom, DenomAuth, DenomId, Params, ProposedDenomAuth},
};

pub const PARAMS: Item<Params> = Item::new("params");

pub const DENOMS: Map<&DenomId, Denom> = Map::new("denom");

pub const DENOM_AUTHS: Map<&DenomId, DenomAuth> = Map::new("auth");

/// At most one pending proposal per denom; a new one overwrites the old.
pub const PROPOSALS: Map<&DenomId, ProposedDenomAuth> = Map::new("proposal");

/// Reverse index: admin address => denoms it administers.
///
/// Derived from `DENOM_AUTHS`. Every operation that changes a denom's admins
/// must update this too (see `reindex`).
pub const ADMIN_DENOMS: Set<(&Addr, &DenomId)> = Set::new("admin");
