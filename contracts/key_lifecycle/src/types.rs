use soroban_sdk::{contracttype, String, Symbol};

/// Storage addressing for the key lifecycle manager.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Counter,
    Key(u64),
    ActiveSlot(Symbol),
    Pending(Symbol),
    KeyList,
}

/// Lifecycle state of an encryption key.
///
/// `Rotating` is transitional and terminal in one direction: a key that has
/// left it never re-enters it. `Stored` keys are retired but retained forever
/// so that ciphertext they protected stays decryptable.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeyState {
    Active,
    Standby,
    Rotating,
    Stored,
}

/// Metadata record for one encryption key.
///
/// The manager holds no key material; it tracks which key protects new
/// payloads and under which versioned tag. `version` is bumped on every
/// rotation so a ciphertext envelope can name the exact key generation that
/// produced it. `replaces` links a rotation successor back to the key it
/// retired.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncryptionKey {
    pub id: u64,
    pub label: String,
    pub algorithm: String,
    pub slot: Symbol,
    pub version: u32,
    pub state: KeyState,
    pub replaces: Option<u64>,
    pub created_at: u64,
    pub rotated_at: u64,
}

/// In-flight rotation marker for one slot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingRotation {
    pub slot: Symbol,
    pub old_key: u64,
    pub started_at: u64,
}

/// Contract errors
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    KeyNotFound = 4,
    NoPendingRotation = 5,
}
