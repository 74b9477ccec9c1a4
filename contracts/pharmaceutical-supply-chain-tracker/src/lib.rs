#![no_std]

mod error;
mod events;
mod ledger;
mod registry;
mod storage;
mod types;
mod utils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use error::ContractError;
pub use events::{EventKind, LogEntry};
pub use types::*;

#[contract]
pub struct SupplyChain;

#[contractimpl]
impl SupplyChain {
    /// Initialize the contract with its administrator
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        admin.require_auth();
        registry::initialize(&env, &admin)
    }

    /// The administrator set at initialization
    pub fn owner(env: Env) -> Result<Address, ContractError> {
        registry::admin(&env)
    }

    // Role registry

    pub fn add_manufacturer(env: Env, caller: Address, who: Address) -> Result<(), ContractError> {
        caller.require_auth();
        registry::grant_role(&env, &caller, &who, Role::Manufacturer)?;
        Ok(())
    }

    pub fn add_distributor(env: Env, caller: Address, who: Address) -> Result<(), ContractError> {
        caller.require_auth();
        registry::grant_role(&env, &caller, &who, Role::Distributor)?;
        Ok(())
    }

    pub fn add_pharmacy(env: Env, caller: Address, who: Address) -> Result<(), ContractError> {
        caller.require_auth();
        registry::grant_role(&env, &caller, &who, Role::Pharmacy)?;
        Ok(())
    }

    pub fn add_patient(env: Env, caller: Address, who: Address) -> Result<(), ContractError> {
        caller.require_auth();
        registry::grant_role(&env, &caller, &who, Role::Patient)?;
        Ok(())
    }

    pub fn is_manufacturer(env: Env, who: Address) -> bool {
        registry::has_role(&env, &who, Role::Manufacturer)
    }

    pub fn is_distributor(env: Env, who: Address) -> bool {
        registry::has_role(&env, &who, Role::Distributor)
    }

    pub fn is_pharmacy(env: Env, who: Address) -> bool {
        registry::has_role(&env, &who, Role::Pharmacy)
    }

    pub fn is_patient(env: Env, who: Address) -> bool {
        registry::has_role(&env, &who, Role::Patient)
    }

    /// Members of a role in the order they were granted
    pub fn get_members(env: Env, role: Role) -> Vec<Address> {
        storage::get_members(&env, role)
    }

    // Drug lifecycle

    /// Register a formulation; its stock is set later with `produce_drug`
    pub fn formulate_drug(
        env: Env,
        manufacturer: Address,
        name: String,
        ingredients: Vec<Ingredient>,
    ) -> Result<u64, ContractError> {
        manufacturer.require_auth();
        ledger::formulate_drug(&env, &manufacturer, name, ingredients)
    }

    /// Set the stock of a formulated batch
    pub fn produce_drug(
        env: Env,
        manufacturer: Address,
        id: u64,
        quantity: u32,
    ) -> Result<(), ContractError> {
        manufacturer.require_auth();
        ledger::produce_drug(&env, &manufacturer, id, quantity)
    }

    pub fn create_drug(
        env: Env,
        manufacturer: Address,
        name: String,
        quantity: u32,
    ) -> Result<u64, ContractError> {
        manufacturer.require_auth();
        ledger::create_drug(&env, &manufacturer, name, quantity)
    }

    pub fn ship_drug(env: Env, distributor: Address, id: u64) -> Result<(), ContractError> {
        distributor.require_auth();
        ledger::ship_drug(&env, &distributor, id)
    }

    pub fn receive_drug(env: Env, pharmacy: Address, id: u64) -> Result<(), ContractError> {
        pharmacy.require_auth();
        ledger::receive_drug(&env, &pharmacy, id)
    }

    pub fn buy_drug(env: Env, patient: Address, id: u64) -> Result<(), ContractError> {
        patient.require_auth();
        ledger::buy_drug(&env, &patient, id)
    }

    // Queries

    pub fn drug_count(env: Env) -> u64 {
        storage::drug_count(&env)
    }

    pub fn get_drug(env: Env, id: u64) -> Result<Drug, ContractError> {
        storage::get_drug(&env, id)
    }

    pub fn get_drug_state(env: Env, id: u64) -> Result<DrugState, ContractError> {
        Ok(storage::get_drug(&env, id)?.state)
    }

    pub fn get_drug_name(env: Env, id: u64) -> Result<String, ContractError> {
        Ok(storage::get_drug(&env, id)?.name)
    }

    pub fn get_drug_ingredients(env: Env, id: u64) -> Result<Vec<Ingredient>, ContractError> {
        Ok(storage::get_drug(&env, id)?.ingredients)
    }

    pub fn get_drug_manufacturer(env: Env, id: u64) -> Result<Address, ContractError> {
        Ok(storage::get_drug(&env, id)?.manufacturer)
    }

    pub fn get_drug_distributor(env: Env, id: u64) -> Result<Option<Address>, ContractError> {
        Ok(storage::get_drug(&env, id)?.distributor)
    }

    pub fn get_drug_pharmacy(env: Env, id: u64) -> Result<Option<Address>, ContractError> {
        Ok(storage::get_drug(&env, id)?.pharmacy)
    }

    pub fn get_drug_quantity(env: Env, id: u64) -> Result<u32, ContractError> {
        Ok(storage::get_drug(&env, id)?.quantity)
    }

    /// Every purchase against the batch, oldest first
    pub fn get_drug_patients(env: Env, id: u64) -> Result<Vec<Purchase>, ContractError> {
        Ok(storage::get_drug(&env, id)?.patients)
    }

    /// Buyer identities in purchase order
    pub fn get_drug_to_patient(env: Env, id: u64) -> Result<Vec<Address>, ContractError> {
        let drug = storage::get_drug(&env, id)?;
        let mut buyers = Vec::new(&env);
        for purchase in drug.patients.iter() {
            buyers.push_back(purchase.patient);
        }
        Ok(buyers)
    }

    /// The most recent buyer, if the batch has been sold at all
    pub fn get_drug_patient(env: Env, id: u64) -> Result<Option<Address>, ContractError> {
        let drug = storage::get_drug(&env, id)?;
        Ok(drug.patients.last().map(|purchase| purchase.patient))
    }

    // Event log

    pub fn event_count(env: Env) -> u64 {
        storage::event_count(&env)
    }

    pub fn get_event(env: Env, sequence: u64) -> Result<LogEntry, ContractError> {
        events::get_event(&env, sequence)
    }

    pub fn get_events(env: Env, offset: u64, limit: u32) -> Result<Vec<LogEntry>, ContractError> {
        events::get_events(&env, offset, limit)
    }

    pub fn get_drug_history(env: Env, id: u64) -> Result<Vec<LogEntry>, ContractError> {
        events::get_drug_history(&env, id)
    }
}
