use crate::error::ContractError;
use crate::events::{self, EventKind, LogEntry};
use crate::registry;
use crate::storage;
use crate::types::{Drug, DrugState, Ingredient, Purchase, Role};
use crate::utils;
use soroban_sdk::{log, Address, Env, String, Vec};

// Pure transitions. Each takes the current record and hands back the
// updated record plus the event that describes the change; nothing is
// written until `commit`.

pub fn ship(
    mut drug: Drug,
    distributor: &Address,
    now: u64,
) -> Result<(Drug, EventKind), ContractError> {
    if drug.state != DrugState::Created {
        return Err(ContractError::InvalidState);
    }

    drug.distributor = Some(distributor.clone());
    drug.state = DrugState::Shipped;
    drug.updated_at = now;
    Ok((drug, EventKind::DrugShipped))
}

pub fn receive(
    mut drug: Drug,
    pharmacy: &Address,
    now: u64,
) -> Result<(Drug, EventKind), ContractError> {
    if drug.state != DrugState::Shipped {
        return Err(ContractError::InvalidState);
    }

    drug.pharmacy = Some(pharmacy.clone());
    drug.state = DrugState::Received;
    drug.updated_at = now;
    Ok((drug, EventKind::DrugReceived))
}

/// Sells one unit. The first sale moves the batch from Received to Bought;
/// later sales keep it there until stock runs out.
pub fn buy(
    mut drug: Drug,
    patient: &Address,
    now: u64,
) -> Result<(Drug, EventKind), ContractError> {
    match drug.state {
        DrugState::Received | DrugState::Bought => {}
        DrugState::Created | DrugState::Shipped => return Err(ContractError::InvalidState),
    }
    if drug.quantity == 0 {
        return Err(ContractError::OutOfStock);
    }

    drug.patients.push_back(Purchase {
        patient: patient.clone(),
        units: 1,
    });
    drug.quantity -= 1;
    drug.state = DrugState::Bought;
    drug.updated_at = now;
    Ok((drug, EventKind::DrugBought))
}

/// Stocks a formulated batch. Only its manufacturer may do this, once,
/// before the batch leaves the factory.
pub fn produce(
    mut drug: Drug,
    manufacturer: &Address,
    quantity: u32,
    now: u64,
) -> Result<(Drug, EventKind), ContractError> {
    if drug.manufacturer != *manufacturer {
        return Err(ContractError::Unauthorized);
    }
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity);
    }
    if drug.state != DrugState::Created || drug.initial_quantity != 0 {
        return Err(ContractError::InvalidState);
    }

    drug.initial_quantity = quantity;
    drug.quantity = quantity;
    drug.updated_at = now;
    Ok((drug, EventKind::DrugProduced))
}

fn new_drug(
    env: &Env,
    manufacturer: &Address,
    name: String,
    ingredients: Vec<Ingredient>,
    quantity: u32,
) -> Drug {
    let now = env.ledger().timestamp();
    Drug {
        id: storage::next_drug_id(env),
        name,
        ingredients,
        initial_quantity: quantity,
        quantity,
        state: DrugState::Created,
        manufacturer: manufacturer.clone(),
        distributor: None,
        pharmacy: None,
        patients: Vec::new(env),
        created_at: now,
        updated_at: now,
    }
}

fn commit(env: &Env, drug: &Drug, kind: EventKind, actor: &Address) -> LogEntry {
    storage::set_drug(env, drug);
    let entry = events::record(env, kind, drug.id, actor);
    log!(env, "drug {} state {}, quantity {}", drug.id, drug.state as u32, drug.quantity);
    entry
}

// Operations. Every one checks the caller's role before looking at the
// batch, so an unauthorized caller never learns anything about its state.

pub fn formulate_drug(
    env: &Env,
    manufacturer: &Address,
    name: String,
    ingredients: Vec<Ingredient>,
) -> Result<u64, ContractError> {
    registry::require_role(env, manufacturer, Role::Manufacturer)?;
    utils::validate_name(&name)?;
    utils::validate_ingredients(&ingredients)?;

    let drug = new_drug(env, manufacturer, name, ingredients, 0);
    commit(env, &drug, EventKind::DrugFormulated, manufacturer);
    Ok(drug.id)
}

pub fn produce_drug(
    env: &Env,
    manufacturer: &Address,
    id: u64,
    quantity: u32,
) -> Result<(), ContractError> {
    registry::require_role(env, manufacturer, Role::Manufacturer)?;
    let drug = storage::get_drug(env, id)?;

    let (drug, kind) = produce(drug, manufacturer, quantity, env.ledger().timestamp())?;
    commit(env, &drug, kind, manufacturer);
    Ok(())
}

pub fn create_drug(
    env: &Env,
    manufacturer: &Address,
    name: String,
    quantity: u32,
) -> Result<u64, ContractError> {
    registry::require_role(env, manufacturer, Role::Manufacturer)?;
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity);
    }
    utils::validate_name(&name)?;

    let drug = new_drug(env, manufacturer, name, Vec::new(env), quantity);
    commit(env, &drug, EventKind::DrugCreated, manufacturer);
    Ok(drug.id)
}

pub fn ship_drug(env: &Env, distributor: &Address, id: u64) -> Result<(), ContractError> {
    registry::require_role(env, distributor, Role::Distributor)?;
    let drug = storage::get_drug(env, id)?;

    let (drug, kind) = ship(drug, distributor, env.ledger().timestamp())?;
    commit(env, &drug, kind, distributor);
    Ok(())
}

pub fn receive_drug(env: &Env, pharmacy: &Address, id: u64) -> Result<(), ContractError> {
    registry::require_role(env, pharmacy, Role::Pharmacy)?;
    let drug = storage::get_drug(env, id)?;

    let (drug, kind) = receive(drug, pharmacy, env.ledger().timestamp())?;
    commit(env, &drug, kind, pharmacy);
    Ok(())
}

pub fn buy_drug(env: &Env, patient: &Address, id: u64) -> Result<(), ContractError> {
    registry::require_role(env, patient, Role::Patient)?;
    let drug = storage::get_drug(env, id)?;

    let (drug, kind) = buy(drug, patient, env.ledger().timestamp())?;
    commit(env, &drug, kind, patient);
    Ok(())
}
