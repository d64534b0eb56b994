use {
    crate::{rebuild_admin_index, DENOMS, DENOM_AUTHS, PARAMS, PROPOSALS},
    tokenfactory_storage::{Order, StdResult, Storage},
    tokenfactory_types::{FactoryError, FactoryResult, GenesisDenom, InstantiateMsg},
};

/// Load the genesis state. The admin index is derived from the loaded admin
/// records rather than taken as input.
pub fn instantiate(storage: &mut dyn Storage, msg: InstantiateMsg) -> FactoryResult<()> {
    msg.params.validate()?;
    PARAMS.save(storage, &msg.params)?;

    for GenesisDenom {
        denom,
        auth,
        proposal,
    } in &msg.denoms
    {
        let id = &denom.denom;

        if auth.denom != *id || proposal.as_ref().is_some_and(|p| p.denom != *id) {
            return Err(FactoryError::invalid_request(format!(
                "genesis records of {id} refer to different denoms"
            )));
        }

        if denom.minted > denom.minting_cap {
            return Err(FactoryError::InvalidMintingCap {
                denom: id.clone(),
                minting_cap: denom.minting_cap,
                minted: denom.minted,
            });
        }

        if DENOMS.has(storage, id) {
            return Err(FactoryError::DenomExists { denom: id.clone() });
        }

        DENOMS.save(storage, id, denom)?;
        DENOM_AUTHS.save(storage, id, auth)?;

        if let Some(proposal) = proposal {
            PROPOSALS.save(storage, id, proposal)?;
        }
    }

    let entries = rebuild_admin_index(storage)?;

    tracing::info!(
        denoms = msg.denoms.len(),
        index_entries = entries,
        "Instantiated token factory"
    );

    Ok(())
}

/// Export the module state in the same shape `instantiate` takes.
pub fn export_genesis(storage: &dyn Storage) -> FactoryResult<InstantiateMsg> {
    let params = PARAMS.load(storage)?;

    let denoms = DENOMS
        .range(storage, None, None, Order::Ascending)
        .map(|res| {
            let (id, denom) = res?;
            let auth = DENOM_AUTHS.load(storage, &id)?;
            let proposal = PROPOSALS.may_load(storage, &id)?;

            Ok(GenesisDenom {
                denom,
                auth,
                proposal,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(InstantiateMsg { params, denoms })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::ADMIN_DENOMS,
        std::str::FromStr,
        tokenfactory_math::Uint256,
        tokenfactory_storage::MockStorage,
        tokenfactory_types::{Addr, Denom, DenomAuth, DenomId, Params, ProposedDenomAuth},
    };

    fn genesis_denom(sub_id: &str, creator: Addr) -> GenesisDenom {
        let id = DenomId::factory(&creator, sub_id).unwrap();
        let mut denom = Denom::new(creator, id.clone(), Uint256::new_from_u128(100), true);
        denom.minted = Uint256::new_from_u128(40);

        GenesisDenom {
            denom,
            auth: DenomAuth::new(id.clone(), creator).with_metadata_admin(Some(Addr::mock(9))),
            proposal: Some(ProposedDenomAuth {
                denom: id,
                bank_admin: Addr::mock(8),
                metadata_admin: None,
            }),
        }
    }

    #[test]
    fn instantiate_then_export() {
        let mut storage = MockStorage::new();
        let msg = InstantiateMsg {
            params: Params {
                create_fee_denom: "uatom".to_string(),
                create_fee_amount: Uint256::new_from_u128(10),
                beneficiary: Some(Addr::mock(5)),
            },
            denoms: vec![genesis_denom("bar", Addr::mock(1)), genesis_denom("foo", Addr::mock(1))],
        };

        instantiate(&mut storage, msg.clone()).unwrap();

        assert_eq!(export_genesis(&storage).unwrap(), msg);

        // Two denoms, each with two distinct admins.
        let entries = ADMIN_DENOMS
            .range(&storage, None, None, Order::Ascending)
            .count();
        assert_eq!(entries, 4);
    }

    #[test]
    fn rejects_inconsistent_records() {
        let mut bad = genesis_denom("foo", Addr::mock(1));
        bad.auth.denom = DenomId::from_str("uatom").unwrap();

        let err = instantiate(&mut MockStorage::new(), InstantiateMsg {
            params: Params::default(),
            denoms: vec![bad],
        })
        .unwrap_err();
        assert!(matches!(err, FactoryError::InvalidRequest(_)));

        let mut over_cap = genesis_denom("foo", Addr::mock(1));
        over_cap.denom.minted = Uint256::new_from_u128(101);

        let err = instantiate(&mut MockStorage::new(), InstantiateMsg {
            params: Params::default(),
            denoms: vec![over_cap],
        })
        .unwrap_err();
        assert!(matches!(err, FactoryError::InvalidMintingCap { .. }));
    }

    #[test]
    fn rejects_duplicates() {
        let err = instantiate(&mut MockStorage::new(), InstantiateMsg {
            params: Params::default(),
            denoms: vec![
                genesis_denom("foo", Addr::mock(1)),
                genesis_denom("foo", Addr::mock(1)),
            ],
        })
        .unwrap_err();

        assert!(matches!(err, FactoryError::DenomExists { .. }));
    }
}
