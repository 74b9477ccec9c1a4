use crate::error::ContractError;
use crate::storage;
use crate::utils;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum EventKind {
    DrugFormulated = 0,
    DrugProduced = 1,
    DrugCreated = 2,
    DrugShipped = 3,
    DrugReceived = 4,
    DrugBought = 5,
}

/// One committed ledger mutation. Entries are append-only and numbered
/// contiguously from 0.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogEntry {
    pub sequence: u64,
    pub kind: EventKind,
    pub drug_id: u64,
    pub actor: Address,
    pub timestamp: u64,
}

impl EventKind {
    pub fn topic(&self) -> Symbol {
        match self {
            EventKind::DrugFormulated => symbol_short!("formulate"),
            EventKind::DrugProduced => symbol_short!("produce"),
            EventKind::DrugCreated => symbol_short!("create"),
            EventKind::DrugShipped => symbol_short!("ship"),
            EventKind::DrugReceived => symbol_short!("receive"),
            EventKind::DrugBought => symbol_short!("buy"),
        }
    }
}

/// Appends an entry to the log and publishes it to external observers.
pub fn record(env: &Env, kind: EventKind, drug_id: u64, actor: &Address) -> LogEntry {
    let entry = LogEntry {
        sequence: storage::event_count(env),
        kind,
        drug_id,
        actor: actor.clone(),
        timestamp: env.ledger().timestamp(),
    };

    storage::append_event(env, &entry);
    env.events()
        .publish((kind.topic(), drug_id), entry.clone());

    entry
}

pub fn get_event(env: &Env, sequence: u64) -> Result<LogEntry, ContractError> {
    storage::get_event(env, sequence).ok_or(ContractError::NotFound)
}

pub fn get_events(env: &Env, offset: u64, limit: u32) -> Result<Vec<LogEntry>, ContractError> {
    let limit = utils::page_limit(limit)?;
    let total = storage::event_count(env);
    let end = offset.saturating_add(limit as u64).min(total);

    let mut entries = Vec::new(env);
    for sequence in offset..end {
        if let Some(entry) = storage::get_event(env, sequence) {
            entries.push_back(entry);
        }
    }
    Ok(entries)
}

pub fn get_drug_history(env: &Env, drug_id: u64) -> Result<Vec<LogEntry>, ContractError> {
    if !storage::has_drug(env, drug_id) {
        return Err(ContractError::NotFound);
    }

    let mut entries = Vec::new(env);
    for sequence in storage::get_drug_event_ids(env, drug_id).iter() {
        if let Some(entry) = storage::get_event(env, sequence) {
            entries.push_back(entry);
        }
    }
    Ok(entries)
}
