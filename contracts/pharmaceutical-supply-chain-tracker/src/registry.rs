use crate::error::ContractError;
use crate::storage;
use crate::types::{Config, Role};
use soroban_sdk::{log, symbol_short, Address, Env, Symbol};

pub fn initialize(env: &Env, admin: &Address) -> Result<(), ContractError> {
    if storage::has_config(env) {
        return Err(ContractError::AlreadyInitialized);
    }

    let config = Config {
        admin: admin.clone(),
        initialized_at: env.ledger().timestamp(),
    };
    storage::set_config(env, &config);

    env.events()
        .publish((symbol_short!("init"), admin.clone()), config.initialized_at);
    Ok(())
}

pub fn admin(env: &Env) -> Result<Address, ContractError> {
    Ok(storage::get_config(env)?.admin)
}

/// Gate for registry mutations. Only the configured administrator passes.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if *caller != admin(env)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Gate for ledger mutations. The administrator gets no exemption here:
/// it must hold `role` like anyone else.
pub fn require_role(env: &Env, caller: &Address, role: Role) -> Result<(), ContractError> {
    if !storage::has_config(env) {
        return Err(ContractError::NotInitialized);
    }
    if !has_role(env, caller, role) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn has_role(env: &Env, who: &Address, role: Role) -> bool {
    storage::is_member(env, role, who)
}

/// Adds `who` to `role`. Re-granting an existing membership is a no-op;
/// returns whether the membership is new.
pub fn grant_role(
    env: &Env,
    caller: &Address,
    who: &Address,
    role: Role,
) -> Result<bool, ContractError> {
    require_admin(env, caller)?;

    if has_role(env, who, role) {
        return Ok(false);
    }

    storage::add_member(env, role, who);

    log!(env, "role granted: {}", who.clone());
    env.events()
        .publish((symbol_short!("role_add"), role_symbol(role)), who.clone());
    Ok(true)
}

pub fn role_symbol(role: Role) -> Symbol {
    match role {
        Role::Manufacturer => symbol_short!("MANUF"),
        Role::Distributor => symbol_short!("DISTRIB"),
        Role::Pharmacy => symbol_short!("PHARMACY"),
        Role::Patient => symbol_short!("PATIENT"),
    }
}
