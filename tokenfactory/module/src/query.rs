use {
    crate::{
        calculate_stats, export_genesis, ImmutableCtx, ADMIN_DENOMS, DENOMS, DENOM_AUTHS, PARAMS,
        PROPOSALS,
    },
    tokenfactory_storage::{Bound, Json, JsonSerExt, Order, StdResult, Storage},
    tokenfactory_types::{
        Addr, Denom, DenomAuth, DenomId, FactoryError, FactoryResult, Params, ProposedDenomAuth,
        QueryMsg,
    },
};

const DEFAULT_PAGE_LIMIT: u32 = 30;

pub fn query(ctx: ImmutableCtx, msg: QueryMsg) -> FactoryResult<Json> {
    match msg {
        QueryMsg::Params {} => {
            let res = query_params(ctx.storage)?;
            Ok(res.to_json_value()?)
        },
        QueryMsg::Denom { denom } => {
            let res = query_denom(ctx.storage, denom)?;
            Ok(res.to_json_value()?)
        },
        QueryMsg::Denoms { start_after, limit } => {
            let res = query_denoms(ctx.storage, start_after, limit)?;
            Ok(res.to_json_value()?)
        },
        QueryMsg::DenomAuth { denom } => {
            let res = query_denom_auth(ctx.storage, denom)?;
            Ok(res.to_json_value()?)
        },
        QueryMsg::DenomAuths { start_after, limit } => {
            let res = query_denom_auths(ctx.storage, start_after, limit)?;
            Ok(res.to_json_value()?)
        },
        QueryMsg::ProposedDenomAuth { denom } => {
            let res = query_proposed_denom_auth(ctx.storage, denom)?;
            Ok(res.to_json_value()?)
        },
        QueryMsg::DenomsByAdmin {
            admin,
            start_after,
            limit,
        } => {
            let res = query_denoms_by_admin(ctx.storage, admin, start_after, limit)?;
            Ok(res.to_json_value()?)
        },
        QueryMsg::Stats { denom } => {
            let res = calculate_stats(ctx, &denom)?;
            Ok(res.to_json_value()?)
        },
        QueryMsg::Genesis {} => {
            let res = export_genesis(ctx.storage)?;
            Ok(res.to_json_value()?)
        },
    }
}

fn query_params(storage: &dyn Storage) -> StdResult<Params> {
    PARAMS.load(storage)
}

fn query_denom(storage: &dyn Storage, denom: DenomId) -> FactoryResult<Denom> {
    DENOMS
        .may_load(storage, &denom)?
        .ok_or(FactoryError::DenomNotFound { denom })
}

fn query_denoms(
    storage: &dyn Storage,
    start_after: Option<DenomId>,
    limit: Option<u32>,
) -> StdResult<Vec<Denom>> {
    let start = start_after.as_ref().map(Bound::Exclusive);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT) as usize;

    DENOMS
        .values(storage, start, None, Order::Ascending)
        .take(limit)
        .collect()
}

fn query_denom_auth(storage: &dyn Storage, denom: DenomId) -> FactoryResult<DenomAuth> {
    DENOM_AUTHS
        .may_load(storage, &denom)?
        .ok_or(FactoryError::DenomAuthNotFound { denom })
}

fn query_denom_auths(
    storage: &dyn Storage,
    start_after: Option<DenomId>,
    limit: Option<u32>,
) -> StdResult<Vec<DenomAuth>> {
    let start = start_after.as_ref().map(Bound::Exclusive);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT) as usize;

    DENOM_AUTHS
        .values(storage, start, None, Order::Ascending)
        .take(limit)
        .collect()
}

fn query_proposed_denom_auth(
    storage: &dyn Storage,
    denom: DenomId,
) -> StdResult<Option<ProposedDenomAuth>> {
    PROPOSALS.may_load(storage, &denom)
}

fn query_denoms_by_admin(
    storage: &dyn Storage,
    admin: Addr,
    start_after: Option<DenomId>,
    limit: Option<u32>,
) -> StdResult<Vec<DenomId>> {
    let start = start_after.as_ref().map(Bound::Exclusive);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT) as usize;

    ADMIN_DENOMS
        .prefix(&admin)
        .keys(storage, start, None, Order::Ascending)
        .take(limit)
        .collect()
}
