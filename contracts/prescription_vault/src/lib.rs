#![no_std]
#![allow(clippy::too_many_arguments)]

pub mod events;
pub mod policy;
pub mod types;
pub mod validation;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use types::{ContractError, DataKey, Prescription, PrescriptionInfo};

#[contract]
pub struct PrescriptionVaultContract;

#[contractimpl]
impl PrescriptionVaultContract {
    /// Initialize the vault with the verifier identity.
    ///
    /// The verifier is the only identity allowed to toggle a prescription's
    /// verification flag. It is fixed here and never reassignable.
    pub fn initialize(env: Env, verifier: Address) -> Result<(), ContractError> {
        policy::set_verifier(&env, &verifier)?;
        events::publish_initialized(&env, verifier);
        Ok(())
    }

    /// Get the configured verifier address
    pub fn get_verifier(env: Env) -> Result<Address, ContractError> {
        policy::get_verifier(&env)
    }

    /// Check if the vault is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&DataKey::Verifier)
    }

    /// Bind a numeric patient id to an address so that `create_prescription`
    /// can attach a patient distinct from the caller.
    pub fn register_patient(
        env: Env,
        caller: Address,
        patient_id: u64,
        patient: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        policy::require_verifier(&env, &caller)?;
        policy::register_patient(&env, patient_id, &patient);
        events::publish_patient_registered(&env, patient_id, patient);
        Ok(())
    }

    /// Create a prescription record.
    ///
    /// `medication_name` and `instructions` are stored verbatim; callers that
    /// want confidentiality pass ciphertext produced under the key lifecycle
    /// manager's current Active key. Returns the newly allocated id.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn create_prescription(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        patient_id: u64,
        doctor_id: u64,
        medication_id: u64,
        medication_name: String,
        instructions: String,
        expires_at: u64,
    ) -> Result<u64, ContractError> {
        caller.require_auth();

        if !Self::is_initialized(env.clone()) {
            return Err(ContractError::NotInitialized);
        }

        let now = env.ledger().timestamp();
        validation::validate_expiry(now, expires_at)?;
        validation::validate_text(&name)?;
        validation::validate_text(&description)?;
        validation::validate_text(&medication_name)?;
        validation::validate_text(&instructions)?;

        let prescription_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::Counter)
            .unwrap_or(0u64)
            + 1;
        env.storage().instance().set(&DataKey::Counter, &prescription_id);

        let patient = policy::resolve_patient(&env, patient_id, &caller);
        let doctor = caller;

        let record = Prescription {
            id: prescription_id,
            name,
            description,
            patient_id,
            doctor_id,
            medication_id,
            medication_name,
            instructions,
            // Encoded dosing schedule is produced by an encoding step outside
            // the vault; absent here, so zero.
            dosage: 0,
            frequency: 0,
            duration: 0,
            is_verified: false,
            patient: patient.clone(),
            doctor: doctor.clone(),
            created_at: now,
            expires_at,
        };

        env.storage()
            .persistent()
            .set(&DataKey::Prescription(prescription_id), &record);

        Self::append_history(&env, DataKey::PatientHistory(patient.clone()), prescription_id);
        Self::append_history(&env, DataKey::DoctorHistory(doctor.clone()), prescription_id);

        events::publish_prescription_created(&env, prescription_id, patient, doctor);

        Ok(prescription_id)
    }

    /// Read a prescription snapshot.
    ///
    /// `is_active` is recomputed against the current ledger timestamp on every
    /// call; it is never persisted.
    pub fn get_prescription_info(
        env: Env,
        prescription_id: u64,
    ) -> Result<PrescriptionInfo, ContractError> {
        let record = Self::load_prescription(&env, prescription_id)?;
        let now = env.ledger().timestamp();
        Ok(PrescriptionInfo {
            medication_name: record.medication_name,
            instructions: record.instructions,
            dosage: record.dosage,
            frequency: record.frequency,
            duration: record.duration,
            is_active: now < record.expires_at,
            is_verified: record.is_verified,
            patient: record.patient,
            doctor: record.doctor,
            created_at: record.created_at,
            expires_at: record.expires_at,
        })
    }

    /// Set or clear a prescription's verification flag.
    ///
    /// Restricted to the configured verifier. The operation deliberately does
    /// not check expiry: verifying an expired record is permitted.
    pub fn verify_prescription(
        env: Env,
        caller: Address,
        prescription_id: u64,
        is_verified: bool,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        policy::require_verifier(&env, &caller)?;

        let mut record = Self::load_prescription(&env, prescription_id)?;
        record.is_verified = is_verified;
        env.storage()
            .persistent()
            .set(&DataKey::Prescription(prescription_id), &record);

        events::publish_prescription_verified(&env, prescription_id, is_verified);

        Ok(())
    }

    /// Get all prescription ids attached to a patient
    pub fn get_patient_prescriptions(env: Env, patient: Address) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::PatientHistory(patient))
            .unwrap_or(Vec::new(&env))
    }

    /// Get all prescription ids written by a doctor
    pub fn get_doctor_prescriptions(env: Env, doctor: Address) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::DoctorHistory(doctor))
            .unwrap_or(Vec::new(&env))
    }

    /// Get the total number of prescriptions ever created
    pub fn get_prescription_count(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::Counter).unwrap_or(0)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    fn load_prescription(env: &Env, id: u64) -> Result<Prescription, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Prescription(id))
            .ok_or(ContractError::NotFound)
    }

    fn append_history(env: &Env, key: DataKey, id: u64) {
        let mut history: Vec<u64> = env
            .storage()
            .persistent()
            .get(&key)
            .unwrap_or(Vec::new(env));
        history.push_back(id);
        env.storage().persistent().set(&key, &history);
    }
}
