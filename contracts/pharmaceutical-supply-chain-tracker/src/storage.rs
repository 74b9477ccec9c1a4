use crate::error::ContractError;
use crate::events::LogEntry;
use crate::types::{Config, Drug, Role};
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    Member(Role, Address),  // (role, identity) -> bool
    Members(Role),          // role -> Vec<Address> in grant order
    DrugCount,              // next drug id
    Drug(u64),              // drug id -> Drug
    EventCount,             // next log sequence
    Event(u64),             // sequence -> LogEntry
    DrugEvents(u64),        // drug id -> Vec<sequence>
}

// Configuration

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<Config, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

// Role membership

pub fn is_member(env: &Env, role: Role, who: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Member(role, who.clone()))
        .unwrap_or(false)
}

pub fn get_members(env: &Env, role: Role) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Members(role))
        .unwrap_or(Vec::new(env))
}

pub fn add_member(env: &Env, role: Role, who: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Member(role, who.clone()), &true);

    let mut members = get_members(env, role);
    members.push_back(who.clone());
    env.storage().persistent().set(&DataKey::Members(role), &members);
}

// Drug batches

pub fn drug_count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::DrugCount).unwrap_or(0u64)
}

/// Hands out the next batch id; ids start at 0 and are never reused.
pub fn next_drug_id(env: &Env) -> u64 {
    let id = drug_count(env);
    env.storage().instance().set(&DataKey::DrugCount, &(id + 1));
    id
}

pub fn get_drug(env: &Env, id: u64) -> Result<Drug, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Drug(id))
        .ok_or(ContractError::NotFound)
}

pub fn has_drug(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Drug(id))
}

pub fn set_drug(env: &Env, drug: &Drug) {
    env.storage().persistent().set(&DataKey::Drug(drug.id), drug);
}

// Event log

pub fn event_count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::EventCount).unwrap_or(0u64)
}

pub fn get_event(env: &Env, sequence: u64) -> Option<LogEntry> {
    env.storage().persistent().get(&DataKey::Event(sequence))
}

pub fn get_drug_event_ids(env: &Env, drug_id: u64) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::DrugEvents(drug_id))
        .unwrap_or(Vec::new(env))
}

/// Stores `entry` at the next sequence and indexes it under its drug.
pub fn append_event(env: &Env, entry: &LogEntry) {
    env.storage()
        .persistent()
        .set(&DataKey::Event(entry.sequence), entry);
    env.storage()
        .instance()
        .set(&DataKey::EventCount, &(entry.sequence + 1));

    let mut ids = get_drug_event_ids(env, entry.drug_id);
    ids.push_back(entry.sequence);
    env.storage()
        .persistent()
        .set(&DataKey::DrugEvents(entry.drug_id), &ids);
}
