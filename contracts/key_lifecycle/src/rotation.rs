//! Two-phase rotation choreography.
//!
//! Phase one (`begin`) flips an Active key to Rotating and leaves a
//! `PendingRotation` marker on the slot; between the phases the slot holds no
//! Active key at all. Phase two (`finish`) provisions the successor record and
//! retires the old key to Stored. The marker is what makes an in-flight
//! rotation observable and what keeps concurrent `rotate_keys` calls from
//! starting a second rotation on the same slot.

use soroban_sdk::{Env, Symbol};

use crate::types::{DataKey, EncryptionKey, KeyState, PendingRotation};

// Slot-level control state (active holder, pending marker) lives in instance
// storage alongside the counter and key list; only key records themselves are
// persistent.
pub fn pending(env: &Env, slot: &Symbol) -> Option<PendingRotation> {
    env.storage()
        .instance()
        .get(&DataKey::Pending(slot.clone()))
}

/// Moves an Active key into Rotating and marks its slot as in flight.
pub fn begin(env: &Env, key: &mut EncryptionKey) {
    key.state = KeyState::Rotating;

    env.storage()
        .instance()
        .remove(&DataKey::ActiveSlot(key.slot.clone()));

    let marker = PendingRotation {
        slot: key.slot.clone(),
        old_key: key.id,
        started_at: env.ledger().timestamp(),
    };
    env.storage()
        .instance()
        .set(&DataKey::Pending(key.slot.clone()), &marker);
}

/// Builds the successor for a rotated key and retires the original.
///
/// The successor keeps the label, algorithm identifier, and slot, carries the
/// next version tag, and points back at the key it replaces. The old key ends
/// in Stored and never leaves it.
pub fn finish(env: &Env, old: &mut EncryptionKey, new_id: u64, now: u64) -> EncryptionKey {
    old.state = KeyState::Stored;
    old.rotated_at = now;

    let successor = EncryptionKey {
        id: new_id,
        label: old.label.clone(),
        algorithm: old.algorithm.clone(),
        slot: old.slot.clone(),
        version: old.version.saturating_add(1),
        state: KeyState::Active,
        replaces: Some(old.id),
        created_at: now,
        rotated_at: now,
    };

    env.storage()
        .instance()
        .set(&DataKey::ActiveSlot(successor.slot.clone()), &successor.id);
    env.storage()
        .instance()
        .remove(&DataKey::Pending(successor.slot.clone()));

    successor
}
