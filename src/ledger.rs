// src/ledger.rs

use soroban_sdk::{token, Address, Bytes, Env, String};

use crate::error::Error;
use crate::events;
use crate::storage;
use crate::types::{Voter, VoterAudit, VoterUpdate};
use crate::validation;
use crate::verifier::ProofVerifierClient;

/// Fields submitted with a registration request.
pub struct Registration {
    pub voter_id: Bytes,
    pub encrypted_data: Bytes,
    pub proof: Bytes,
    pub location: String,
    pub age: u32,
    pub citizenship: String,
    pub penalty: u32,
    pub currency: String,
}

/// Admits a new voter and returns its id.
///
/// Every check runs before anything is written; the first failing check is
/// the one reported. The fee transfer is the first side effect, so a failed
/// transfer aborts the invocation with the ledger untouched.
pub fn register(env: &Env, caller: &Address, req: Registration) -> Result<u64, Error> {
    let config = storage::read_config(env);
    let id = storage::read_next_voter_id(env);

    if id >= config.max_voters {
        return Err(Error::MaxVotersExceeded);
    }
    validation::voter_id(&req.voter_id)?;
    validation::encrypted_data(&req.encrypted_data)?;
    validation::proof(&req.proof)?;
    validation::location(&req.location)?;
    validation::age(req.age)?;
    validation::citizenship(&req.citizenship)?;
    validation::penalty(req.penalty)?;
    let currency = validation::currency(env, &req.currency)?;

    if !ProofVerifierClient::new(env, &config.verifier).verify(&req.proof) {
        return Err(Error::InvalidEligibility);
    }
    if storage::has_voter_index(env, &req.voter_id) {
        return Err(Error::AlreadyRegistered);
    }
    let authority = config.require_authority()?;

    token::Client::new(env, &config.fee_token).transfer(
        caller,
        authority,
        &config.registration_fee,
    );

    let height = env.ledger().sequence();
    let voter = Voter {
        voter_id: req.voter_id,
        encrypted_data: req.encrypted_data,
        registered_at: height,
        status: true,
        location: req.location,
        age: req.age,
        citizenship: req.citizenship,
        last_update: height,
        penalty: req.penalty,
        currency,
    };
    storage::write_voter(env, id, &voter);
    storage::write_voter_index(env, &voter.voter_id, id);
    storage::write_next_voter_id(env, id + 1);

    events::registered(env, caller, id, authority, config.registration_fee);
    Ok(id)
}

/// Replaces the mutable fields of voter `id` and records the edit.
pub fn update(
    env: &Env,
    caller: &Address,
    id: u64,
    encrypted_data: Bytes,
    location: String,
    age: u32,
) -> Result<(), Error> {
    let mut voter = storage::read_voter(env, id).ok_or(Error::VoterNotFound)?;
    validation::update_fields(&encrypted_data, &location, age)?;

    let height = env.ledger().sequence();
    voter.encrypted_data = encrypted_data.clone();
    voter.location = location.clone();
    voter.age = age;
    voter.last_update = height;
    storage::write_voter(env, id, &voter);

    let update = VoterUpdate {
        encrypted_data,
        timestamp: height,
        updater: caller.clone(),
        location,
        age,
    };
    storage::write_voter_update(env, id, &update);

    events::updated(env, id, caller);
    Ok(())
}

/// Records an audit verdict for voter `id`. The voter's own `status` is left
/// as is.
pub fn audit(env: &Env, caller: &Address, id: u64, status: bool) -> Result<(), Error> {
    if storage::read_voter(env, id).is_none() {
        return Err(Error::VoterNotFound);
    }
    // Any caller may audit once an authority exists.
    storage::read_config(env).require_authority()?;

    let audit = VoterAudit {
        timestamp: env.ledger().sequence(),
        auditor: caller.clone(),
        status,
    };
    storage::write_voter_audit(env, id, &audit);

    events::audited(env, id, caller, status);
    Ok(())
}
