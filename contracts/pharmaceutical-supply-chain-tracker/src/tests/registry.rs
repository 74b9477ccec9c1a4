use super::utils::TestContext;
use crate::{ContractError, Role, SupplyChain, SupplyChainClient};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

#[test]
fn test_initialize_sets_owner() {
    let ctx = TestContext::new();
    assert_eq!(ctx.client.owner(), ctx.admin);

    // A second initialization must not replace the administrator
    let result = ctx.client.try_initialize(&ctx.stranger);
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));
    assert_eq!(ctx.client.owner(), ctx.admin);
}

#[test]
fn test_uninitialized_contract() {
    let env = Env::default();
    env.mock_all_auths();
    let client = SupplyChainClient::new(&env, &env.register(SupplyChain, ()));
    let someone = Address::generate(&env);

    assert_eq!(client.try_owner(), Err(Ok(ContractError::NotInitialized)));
    assert_eq!(
        client.try_add_manufacturer(&someone, &someone),
        Err(Ok(ContractError::NotInitialized))
    );
    assert_eq!(
        client.try_create_drug(&someone, &String::from_str(&env, "drug1"), &10),
        Err(Ok(ContractError::NotInitialized))
    );
    assert!(!client.is_manufacturer(&someone));
}

#[test]
fn test_admin_adds_each_role() {
    let ctx = TestContext::with_roles();

    assert!(ctx.client.is_manufacturer(&ctx.manufacturer));
    assert!(ctx.client.is_distributor(&ctx.distributor));
    assert!(ctx.client.is_pharmacy(&ctx.pharmacy));
    assert!(ctx.client.is_patient(&ctx.patient));

    // Membership is per role
    assert!(!ctx.client.is_distributor(&ctx.manufacturer));
    assert!(!ctx.client.is_patient(&ctx.pharmacy));
    assert!(!ctx.client.is_manufacturer(&ctx.stranger));
}

#[test]
fn test_non_admin_cannot_add_roles() {
    let ctx = TestContext::new();
    let target = ctx.distributor.clone();

    assert_eq!(
        ctx.client.try_add_manufacturer(&ctx.stranger, &target),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(
        ctx.client.try_add_distributor(&ctx.stranger, &target),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(
        ctx.client.try_add_pharmacy(&ctx.stranger, &target),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(
        ctx.client.try_add_patient(&ctx.stranger, &target),
        Err(Ok(ContractError::Unauthorized))
    );

    assert!(!ctx.client.is_manufacturer(&target));
    assert!(!ctx.client.is_distributor(&target));
    assert!(!ctx.client.is_pharmacy(&target));
    assert!(!ctx.client.is_patient(&target));
}

#[test]
fn test_role_holders_cannot_grant_roles() {
    let ctx = TestContext::with_roles();

    let result = ctx.client.try_add_patient(&ctx.manufacturer, &ctx.stranger);
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));
    assert!(!ctx.client.is_patient(&ctx.stranger));
}

#[test]
fn test_adding_roles_is_idempotent() {
    let ctx = TestContext::new();

    ctx.client.add_pharmacy(&ctx.admin, &ctx.pharmacy);
    ctx.client.add_pharmacy(&ctx.admin, &ctx.pharmacy);
    assert_eq!(ctx.client.try_add_pharmacy(&ctx.admin, &ctx.pharmacy), Ok(Ok(())));

    assert!(ctx.client.is_pharmacy(&ctx.pharmacy));
    let members = ctx.client.get_members(&Role::Pharmacy);
    assert_eq!(members.len(), 1);
    assert_eq!(members.get(0), Some(ctx.pharmacy.clone()));
}

#[test]
fn test_identity_may_hold_several_roles() {
    let ctx = TestContext::new();
    let both = Address::generate(&ctx.env);

    ctx.client.add_manufacturer(&ctx.admin, &both);
    ctx.client.add_patient(&ctx.admin, &both);

    assert!(ctx.client.is_manufacturer(&both));
    assert!(ctx.client.is_patient(&both));
    assert_eq!(ctx.client.get_members(&Role::Manufacturer).len(), 1);
    assert_eq!(ctx.client.get_members(&Role::Patient).len(), 1);
    assert_eq!(ctx.client.get_members(&Role::Distributor).len(), 0);
}

#[test]
fn test_admin_has_no_ledger_privileges() {
    let ctx = TestContext::with_roles();
    let name = String::from_str(&ctx.env, "drug1");

    let result = ctx.client.try_create_drug(&ctx.admin, &name, &100);
    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));

    let id = ctx.create_drug(100);
    assert_eq!(
        ctx.client.try_ship_drug(&ctx.admin, &id),
        Err(Ok(ContractError::Unauthorized))
    );

    // Once granted the role, the administrator is treated like anyone else
    ctx.client.add_distributor(&ctx.admin, &ctx.admin);
    ctx.client.ship_drug(&ctx.admin, &id);
    assert_eq!(ctx.client.get_drug_distributor(&id), Some(ctx.admin.clone()));
}
