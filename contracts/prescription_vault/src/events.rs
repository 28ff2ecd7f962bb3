use soroban_sdk::{symbol_short, Address, Env};

/// Event published when the vault is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub verifier: Address,
    pub timestamp: u64,
}

/// Event published when a new prescription is created.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrescriptionCreatedEvent {
    pub prescription_id: u64,
    pub patient: Address,
    pub doctor: Address,
    pub timestamp: u64,
}

/// Event published when a prescription's verification flag changes hands.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrescriptionVerifiedEvent {
    pub prescription_id: u64,
    pub is_verified: bool,
    pub timestamp: u64,
}

/// Event published when a patient identity is registered.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegisteredEvent {
    pub patient_id: u64,
    pub patient: Address,
    pub timestamp: u64,
}

/// Publishes an event when the vault is initialized.
/// This event includes the verifier address and initialization timestamp.
pub fn publish_initialized(env: &Env, verifier: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        verifier,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a prescription is created.
/// This event includes the prescription ID, patient, doctor, and timestamp.
pub fn publish_prescription_created(
    env: &Env,
    prescription_id: u64,
    patient: Address,
    doctor: Address,
) {
    let topics = (symbol_short!("RX_NEW"), patient.clone(), doctor.clone());
    let data = PrescriptionCreatedEvent {
        prescription_id,
        patient,
        doctor,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a prescription's verification flag is set or
/// cleared by the verifier.
pub fn publish_prescription_verified(env: &Env, prescription_id: u64, is_verified: bool) {
    let topics = (symbol_short!("RX_VER"), prescription_id);
    let data = PrescriptionVerifiedEvent {
        prescription_id,
        is_verified,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a numeric patient id is bound to an address.
pub fn publish_patient_registered(env: &Env, patient_id: u64, patient: Address) {
    let topics = (symbol_short!("PAT_REG"), patient.clone());
    let data = PatientRegisteredEvent {
        patient_id,
        patient,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
