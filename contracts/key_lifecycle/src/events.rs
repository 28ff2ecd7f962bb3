use soroban_sdk::{symbol_short, Env, Symbol};

use crate::types::KeyState;

/// Event published when a new key is generated.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyGeneratedEvent {
    pub key_id: u64,
    pub slot: Symbol,
    pub state: KeyState,
    pub timestamp: u64,
}

/// Event published when a slot's rotation begins.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RotationStartedEvent {
    pub slot: Symbol,
    pub key_id: u64,
    pub timestamp: u64,
}

/// Event published when a slot's rotation completes.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyRotatedEvent {
    pub slot: Symbol,
    pub old_key: u64,
    pub new_key: u64,
    pub version: u32,
    pub timestamp: u64,
}

/// Publishes an event when a new key enters the key set.
pub fn publish_key_generated(env: &Env, key_id: u64, slot: Symbol, state: KeyState) {
    let topics = (symbol_short!("KEY_GEN"), slot.clone());
    let data = KeyGeneratedEvent {
        key_id,
        slot,
        state,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when an Active key starts rotating.
pub fn publish_rotation_started(env: &Env, slot: Symbol, key_id: u64) {
    let topics = (symbol_short!("ROT_BEG"), slot.clone());
    let data = RotationStartedEvent {
        slot,
        key_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a rotation completes and the successor goes Active.
pub fn publish_key_rotated(env: &Env, slot: Symbol, old_key: u64, new_key: u64, version: u32) {
    let topics = (symbol_short!("ROT_END"), slot.clone());
    let data = KeyRotatedEvent {
        slot,
        old_key,
        new_key,
        version,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
