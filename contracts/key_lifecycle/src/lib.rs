#![no_std]

pub mod events;
pub mod rotation;
pub mod types;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

pub use types::{ContractError, DataKey, EncryptionKey, KeyState, PendingRotation};

#[contract]
pub struct KeyLifecycleContract;

#[contractimpl]
impl KeyLifecycleContract {
    /// Initialize the manager with its admin.
    ///
    /// The admin exclusively owns the key set; every mutating entrypoint is
    /// gated on it.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        Ok(())
    }

    /// Check if the manager is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&DataKey::Admin)
    }

    /// Register a new encryption key.
    ///
    /// The key goes Active when its slot is free and has no rotation in
    /// flight, otherwise Standby. Existing keys and existing ciphertext are
    /// untouched; nothing is re-encrypted on generation.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn generate_key(
        env: Env,
        caller: Address,
        label: String,
        algorithm: String,
        slot: Symbol,
    ) -> Result<u64, ContractError> {
        Self::require_admin(&env, &caller)?;

        let key_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::Counter)
            .unwrap_or(0u64)
            + 1;
        env.storage().instance().set(&DataKey::Counter, &key_id);

        let slot_free = Self::get_active_key(env.clone(), slot.clone()).is_none()
            && rotation::pending(&env, &slot).is_none();
        let state = if slot_free {
            KeyState::Active
        } else {
            KeyState::Standby
        };

        let now = env.ledger().timestamp();
        let key = EncryptionKey {
            id: key_id,
            label,
            algorithm,
            slot: slot.clone(),
            version: 1,
            state: state.clone(),
            replaces: None,
            created_at: now,
            rotated_at: now,
        };

        if state == KeyState::Active {
            env.storage()
                .instance()
                .set(&DataKey::ActiveSlot(slot.clone()), &key_id);
        }

        Self::store_key(&env, &key);
        Self::append_key_list(&env, key_id);

        events::publish_key_generated(&env, key_id, slot, state);

        Ok(key_id)
    }

    /// Begin rotation for every Active key.
    ///
    /// Each Active key flips to Rotating synchronously; provisioning the
    /// successor happens in `complete_rotation`. A slot whose rotation is
    /// already in flight is skipped, so overlapping calls never stack two
    /// rotations on one slot. Standby and Stored keys are untouched.
    pub fn rotate_keys(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;

        let ids: Vec<u64> = env
            .storage()
            .instance()
            .get(&DataKey::KeyList)
            .unwrap_or(Vec::new(&env));

        for id in ids.iter() {
            let mut key = Self::load_key(&env, id)?;
            if key.state != KeyState::Active {
                continue;
            }
            if rotation::pending(&env, &key.slot).is_some() {
                continue;
            }
            rotation::begin(&env, &mut key);
            Self::store_key(&env, &key);
            events::publish_rotation_started(&env, key.slot, id);
        }

        Ok(())
    }

    /// Complete an in-flight rotation on one slot.
    ///
    /// Provisions the successor key (same label, algorithm, and slot, next
    /// version tag) as the slot's new Active key and retires the old key to
    /// Stored. Returns the successor's id.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn complete_rotation(
        env: Env,
        caller: Address,
        slot: Symbol,
    ) -> Result<u64, ContractError> {
        Self::require_admin(&env, &caller)?;

        let pending = rotation::pending(&env, &slot).ok_or(ContractError::NoPendingRotation)?;
        let mut old = Self::load_key(&env, pending.old_key)?;

        let new_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::Counter)
            .unwrap_or(0u64)
            + 1;
        env.storage().instance().set(&DataKey::Counter, &new_id);

        let now = env.ledger().timestamp();
        let successor = rotation::finish(&env, &mut old, new_id, now);

        Self::store_key(&env, &old);
        Self::store_key(&env, &successor);
        Self::append_key_list(&env, new_id);

        events::publish_key_rotated(&env, slot, old.id, new_id, successor.version);

        Ok(new_id)
    }

    /// Get a key's metadata record
    pub fn get_key(env: Env, key_id: u64) -> Result<EncryptionKey, ContractError> {
        Self::load_key(&env, key_id)
    }

    /// Get the id of the slot's Active key, if any
    pub fn get_active_key(env: Env, slot: Symbol) -> Option<u64> {
        env.storage().instance().get(&DataKey::ActiveSlot(slot))
    }

    /// Check whether the slot has a rotation in flight
    pub fn rotation_pending(env: Env, slot: Symbol) -> bool {
        rotation::pending(&env, &slot).is_some()
    }

    /// Get every key id ever issued, in issue order
    pub fn list_keys(env: Env) -> Vec<u64> {
        env.storage()
            .instance()
            .get(&DataKey::KeyList)
            .unwrap_or(Vec::new(&env))
    }

    /// Get the total number of keys ever issued
    pub fn get_key_count(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::Counter).unwrap_or(0)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::NotInitialized)?;
        if caller != &admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn store_key(env: &Env, key: &EncryptionKey) {
        env.storage()
            .persistent()
            .set(&DataKey::Key(key.id), key);
    }

    fn load_key(env: &Env, key_id: u64) -> Result<EncryptionKey, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Key(key_id))
            .ok_or(ContractError::KeyNotFound)
    }

    fn append_key_list(env: &Env, key_id: u64) {
        let mut ids: Vec<u64> = env
            .storage()
            .instance()
            .get(&DataKey::KeyList)
            .unwrap_or(Vec::new(env));
        ids.push_back(key_id);
        env.storage().instance().set(&DataKey::KeyList, &ids);
    }
}
