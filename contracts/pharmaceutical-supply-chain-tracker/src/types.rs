use soroban_sdk::{contracttype, Address, String, Vec};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Manufacturer = 0,
    Distributor = 1,
    Pharmacy = 2,
    Patient = 3,
}

/// Lifecycle of a drug batch. Transitions only move forward.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DrugState {
    Created = 0,
    Shipped = 1,
    Received = 2,
    Bought = 3,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ingredient {
    pub name: String,
    /// Share of the formulation, in percent.
    pub composition: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Purchase {
    pub patient: Address,
    pub units: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Drug {
    pub id: u64,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub initial_quantity: u32,
    pub quantity: u32,
    pub state: DrugState,
    pub manufacturer: Address,
    pub distributor: Option<Address>,
    pub pharmacy: Option<Address>,
    pub patients: Vec<Purchase>,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Deployment configuration, written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub initialized_at: u64,
}
