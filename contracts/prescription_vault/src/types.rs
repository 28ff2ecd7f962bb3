use soroban_sdk::{contracttype, Address, String};

/// Storage addressing for the vault.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Verifier,
    Counter,
    Prescription(u64),
    PatientIdentity(u64),
    PatientHistory(Address),
    DoctorHistory(Address),
}

/// A prescription record as persisted on the ledger.
///
/// `medication_name` and `instructions` are opaque carriers: the vault does
/// not distinguish plaintext from ciphertext. `dosage`/`frequency`/`duration`
/// hold an externally encoded dosing schedule (each value fits in a byte);
/// they default to zero when no encoding step supplied them.
///
/// The record carries no `is_active` field. Activity is derived from
/// `expires_at` on every read so it can never go stale.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Prescription {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub patient_id: u64,
    pub doctor_id: u64,
    pub medication_id: u64,
    pub medication_name: String,
    pub instructions: String,
    pub dosage: u32,
    pub frequency: u32,
    pub duration: u32,
    pub is_verified: bool,
    pub patient: Address,
    pub doctor: Address,
    pub created_at: u64,
    pub expires_at: u64,
}

/// Read snapshot returned by `get_prescription_info`.
///
/// `is_active` is computed against the current ledger timestamp at the moment
/// of the read.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrescriptionInfo {
    pub medication_name: String,
    pub instructions: String,
    pub dosage: u32,
    pub frequency: u32,
    pub duration: u32,
    pub is_active: bool,
    pub is_verified: bool,
    pub patient: Address,
    pub doctor: Address,
    pub created_at: u64,
    pub expires_at: u64,
}

/// Contract errors
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    NotFound = 4,
    InvalidExpiry = 5,
    InvalidInput = 6,
}
