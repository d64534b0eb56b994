use {
    tokenfactory::{
        admin_index_consistent, minted_covers_supply, rebuild_admin_index, ADMIN_DENOMS,
    },
    tokenfactory_testing::{setup_tracing_subscriber, ResultExt, TestSuite},
    tokenfactory_types::{
        Addr, Coin, Denom, DenomAuth, DenomId, ExecuteMsg, InstantiateMsg, QueryMsg,
    },
};

const OWNER: Addr = Addr::mock(1);
const ALICE: Addr = Addr::mock(2);
const BOB: Addr = Addr::mock(3);

/// Three denoms by `OWNER`: `aaa` minted and handed over to `ALICE`, `bbb`
/// with a pending proposal to `BOB`, and `ccc` disabled. One more by `ALICE`.
fn setup() -> TestSuite {
    setup_tracing_subscriber(tracing::Level::DEBUG);

    let mut suite = TestSuite::new_default();

    let aaa = suite.create_denom(OWNER, "aaa", 1000).should_succeed();
    let bbb = suite.create_denom(OWNER, "bbb", 1000).should_succeed();
    let ccc = suite.create_denom(OWNER, "ccc", 1000).should_succeed();
    suite.create_denom(ALICE, "ddd", 1000).should_succeed();

    suite.mint(OWNER, &aaa, 300, BOB).should_succeed();
    suite.burn(BOB, &aaa, 100).should_succeed();

    suite
        .execute(OWNER, ExecuteMsg::ProposeDenomAdmin {
            denom: aaa.clone(),
            bank_admin: ALICE,
            metadata_admin: None,
        })
        .should_succeed();
    suite
        .execute(ALICE, ExecuteMsg::ClaimDenomAdmin { denom: aaa })
        .should_succeed();

    suite
        .execute(OWNER, ExecuteMsg::ProposeDenomAdmin {
            denom: bbb,
            bank_admin: BOB,
            metadata_admin: Some(BOB),
        })
        .should_succeed();

    suite
        .execute(OWNER, ExecuteMsg::DisableDenomAdmin { denom: ccc })
        .should_succeed();

    suite
}

fn denoms_by_admin(suite: &TestSuite, admin: Addr) -> Vec<String> {
    suite
        .query_denoms_by_admin(admin)
        .should_succeed()
        .into_iter()
        .map(|denom| denom.to_string())
        .collect()
}

fn sub_ids(denoms: &[Denom]) -> Vec<&str> {
    denoms
        .iter()
        .filter_map(|denom| denom.denom.factory_parts())
        .map(|(_, sub_id)| sub_id.as_str())
        .collect()
}

#[test]
fn export_and_reimport() {
    let suite = setup();
    suite.assert_invariants();

    let exported: InstantiateMsg = suite.query(QueryMsg::Genesis {}).should_succeed();
    assert_eq!(exported.denoms.len(), 4);
    assert_eq!(
        exported
            .denoms
            .iter()
            .filter(|denom| denom.proposal.is_some())
            .count(),
        1
    );

    // Import into a fresh store, next to the same ledger.
    let reimported = TestSuite::new(exported.clone(), suite.ledger.clone()).unwrap();

    reimported
        .query::<InstantiateMsg>(QueryMsg::Genesis {})
        .should_succeed_and_equal(exported);

    for admin in [OWNER, ALICE, BOB] {
        assert_eq!(
            denoms_by_admin(&reimported, admin),
            denoms_by_admin(&suite, admin)
        );
    }

    reimported.assert_invariants();
}

#[test]
fn admin_index_after_setup() {
    let suite = setup();

    // `ccc` is locked, but `OWNER` is still its metadata admin.
    assert_eq!(denoms_by_admin(&suite, OWNER), [
        format!("factory/{OWNER}/bbb"),
        format!("factory/{OWNER}/ccc"),
    ]);
    assert_eq!(denoms_by_admin(&suite, ALICE), [
        format!("factory/{OWNER}/aaa"),
        format!("factory/{ALICE}/ddd"),
    ]);
    // A pending proposal doesn't make `BOB` an admin yet.
    assert!(denoms_by_admin(&suite, BOB).is_empty());
}

#[test]
fn paginating() {
    setup_tracing_subscriber(tracing::Level::DEBUG);

    let mut suite = TestSuite::new_default();
    for i in 0..35 {
        suite
            .create_denom(OWNER, &format!("d{i:02}"), 10)
            .should_succeed();
    }

    // Default page size.
    let page: Vec<Denom> = suite
        .query(QueryMsg::Denoms {
            start_after: None,
            limit: None,
        })
        .should_succeed();
    assert_eq!(page.len(), 30);

    let page: Vec<Denom> = suite
        .query(QueryMsg::Denoms {
            start_after: Some(DenomId::factory(&OWNER, "d03").unwrap()),
            limit: Some(3),
        })
        .should_succeed();
    assert_eq!(sub_ids(&page), ["d04", "d05", "d06"]);

    let page: Vec<Denom> = suite
        .query(QueryMsg::Denoms {
            start_after: Some(DenomId::factory(&OWNER, "d33").unwrap()),
            limit: Some(10),
        })
        .should_succeed();
    assert_eq!(sub_ids(&page), ["d34"]);

    let auths: Vec<DenomAuth> = suite
        .query(QueryMsg::DenomAuths {
            start_after: None,
            limit: Some(2),
        })
        .should_succeed();
    assert_eq!(auths.len(), 2);
    assert_eq!(auths[0].denom, DenomId::factory(&OWNER, "d00").unwrap());

    let by_admin: Vec<DenomId> = suite
        .query(QueryMsg::DenomsByAdmin {
            admin: OWNER,
            start_after: Some(DenomId::factory(&OWNER, "d31").unwrap()),
            limit: None,
        })
        .should_succeed();
    assert_eq!(by_admin, [
        DenomId::factory(&OWNER, "d32").unwrap(),
        DenomId::factory(&OWNER, "d33").unwrap(),
        DenomId::factory(&OWNER, "d34").unwrap(),
    ]);
}

#[test]
fn rebuilding_admin_index() {
    let mut suite = setup();

    // Lose the index, and plant a stale entry.
    ADMIN_DENOMS.clear(&mut suite.storage, None, None);
    ADMIN_DENOMS
        .insert(
            &mut suite.storage,
            (&BOB, &DenomId::factory(&OWNER, "aaa").unwrap()),
        )
        .unwrap();

    let outcome = admin_index_consistent(&suite.storage).should_succeed();
    assert!(outcome.broken);
    assert_eq!(outcome.violations.len(), 5);

    // OWNER: bbb, ccc. ALICE: aaa, ddd.
    rebuild_admin_index(&mut suite.storage).should_succeed_and_equal(4_usize);

    suite.assert_invariants();
    assert!(denoms_by_admin(&suite, BOB).is_empty());
}

#[test]
fn bridged_supply_is_reported() {
    let mut suite = setup();
    let aaa = DenomId::factory(&OWNER, "aaa").unwrap();

    suite
        .ledger
        .fund(BOB, Coin::new(aaa.clone(), 500_u128))
        .unwrap();

    let outcome = minted_covers_supply(&suite.storage, &suite.ledger).should_succeed();
    assert!(outcome.broken);
    assert_eq!(outcome.violations, [format!(
        "{aaa}: minted 300 is less than ledger supply 700"
    )]);

    // Reporting changes nothing; the denom keeps working.
    suite.burn(BOB, &aaa, 100).should_succeed();
}
