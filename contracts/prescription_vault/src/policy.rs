//! Access control policy for the vault.
//!
//! Two roles exist at this scope: the singleton verifier, fixed at
//! initialization, and record creators (any authenticated identity). The
//! policy module owns the `Verifier` and `PatientIdentity` storage keys; no
//! other module reads or writes them directly.

use soroban_sdk::{Address, Env};

use crate::types::{ContractError, DataKey};

/// Stores the verifier identity. Callable once; the role is immutable for the
/// contract's lifetime.
pub fn set_verifier(env: &Env, verifier: &Address) -> Result<(), ContractError> {
    if env.storage().instance().has(&DataKey::Verifier) {
        return Err(ContractError::AlreadyInitialized);
    }
    env.storage().instance().set(&DataKey::Verifier, verifier);
    Ok(())
}

pub fn get_verifier(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Verifier)
        .ok_or(ContractError::NotInitialized)
}

/// Rejects any caller other than the configured verifier.
pub fn require_verifier(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let verifier = get_verifier(env)?;
    if caller != &verifier {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Binds a numeric patient id to an on-ledger address.
pub fn register_patient(env: &Env, patient_id: u64, patient: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::PatientIdentity(patient_id), patient);
}

/// Resolves the patient address for a supplied numeric id.
///
/// Unregistered ids resolve to the caller: a record originated by a single
/// connected identity attaches that identity as both parties.
pub fn resolve_patient(env: &Env, patient_id: u64, caller: &Address) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::PatientIdentity(patient_id))
        .unwrap_or_else(|| caller.clone())
}
