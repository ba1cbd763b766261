// src/lib.rs

//! Single-authority voter registration ledger.
//!
//! Voters are admitted under eligibility checks, may edit a bounded set of
//! fields afterwards, and can be audited once an authority is configured.
//! Proof checking is delegated to a verifier contract and the registration
//! fee is settled through a token contract.

#![no_std]

mod config;
mod error;
mod events;
mod ledger;
mod storage;
mod types;
mod validation;
mod verifier;


use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Bytes, Env, String};

pub use config::Config;
pub use error::Error;
pub use types::{Currency, Voter, VoterAudit, VoterUpdate};
pub use verifier::{ProofVerifier, ProofVerifierClient};

use ledger::Registration;

#[contract]
pub struct VoterRegistry;

#[contractimpl]
impl VoterRegistry {
    /// Deploys the registry with its fee token and eligibility verifier.
    pub fn __constructor(env: Env, fee_token: Address, verifier: Address) {
        storage::write_config(&env, &Config::new(fee_token.clone(), verifier.clone()));
        storage::write_next_voter_id(&env, 0);
        storage::extend_instance(&env);
        events::initialized(&env, &fee_token, &verifier);
    }

    /// Sets the authority. Succeeds at most once, and never for the caller
    /// itself.
    pub fn set_authority(env: Env, caller: Address, candidate: Address) -> Result<bool, Error> {
        caller.require_auth();
        let mut config = storage::read_config(&env);
        if let Err(err) = config.set_authority(&caller, candidate.clone()) {
            log!(&env, "set_authority rejected", caller, err as u32);
            return Err(err);
        }
        storage::write_config(&env, &config);
        storage::extend_instance(&env);
        events::authority_set(&env, &candidate);
        Ok(true)
    }

    pub fn set_max_voters(env: Env, max_voters: u64) -> Result<bool, Error> {
        update_config(&env, |config| config.set_max_voters(max_voters))?;
        events::config_changed(&env, symbol_short!("max_votr"), max_voters);
        Ok(true)
    }

    pub fn set_registration_fee(env: Env, fee: i128) -> Result<bool, Error> {
        update_config(&env, |config| config.set_registration_fee(fee))?;
        events::config_changed(&env, symbol_short!("reg_fee"), fee);
        Ok(true)
    }

    pub fn set_verification_threshold(env: Env, threshold: u32) -> Result<bool, Error> {
        update_config(&env, |config| config.set_verification_threshold(threshold))?;
        events::config_changed(&env, symbol_short!("threshold"), threshold);
        Ok(true)
    }

    pub fn set_grace_period(env: Env, period: u32) -> Result<bool, Error> {
        update_config(&env, |config| config.set_grace_period(period))?;
        events::config_changed(&env, symbol_short!("grace"), period);
        Ok(true)
    }

    /// Registers a voter and returns its internal id.
    ///
    /// Charges the registration fee from `caller` to the authority.
    #[allow(clippy::too_many_arguments)]
    pub fn register_voter(
        env: Env,
        caller: Address,
        voter_id: Bytes,
        encrypted_data: Bytes,
        proof: Bytes,
        location: String,
        age: u32,
        citizenship: String,
        penalty: u32,
        currency: String,
    ) -> Result<u64, Error> {
        caller.require_auth();
        storage::extend_instance(&env);

        let req = Registration {
            voter_id,
            encrypted_data,
            proof,
            location,
            age,
            citizenship,
            penalty,
            currency,
        };
        match ledger::register(&env, &caller, req) {
            Ok(id) => {
                log!(&env, "voter registered", id, caller);
                Ok(id)
            }
            Err(err) => {
                log!(&env, "registration rejected", caller, err as u32);
                Err(err)
            }
        }
    }

    pub fn update_voter(
        env: Env,
        caller: Address,
        id: u64,
        encrypted_data: Bytes,
        location: String,
        age: u32,
    ) -> Result<bool, Error> {
        caller.require_auth();
        storage::extend_instance(&env);

        if let Err(err) = ledger::update(&env, &caller, id, encrypted_data, location, age) {
            log!(&env, "update rejected", id, err as u32);
            return Err(err);
        }
        Ok(true)
    }

    pub fn audit_voter(env: Env, caller: Address, id: u64, status: bool) -> Result<bool, Error> {
        caller.require_auth();
        storage::extend_instance(&env);

        if let Err(err) = ledger::audit(&env, &caller, id, status) {
            log!(&env, "audit rejected", id, err as u32);
            return Err(err);
        }
        Ok(true)
    }

    pub fn get_voter(env: Env, id: u64) -> Option<Voter> {
        storage::read_voter(&env, id)
    }

    pub fn get_voter_count(env: Env) -> u64 {
        storage::read_next_voter_id(&env)
    }

    pub fn check_voter_existence(env: Env, voter_id: Bytes) -> bool {
        storage::has_voter_index(&env, &voter_id)
    }

    /// Resolves an external voter id to its internal id.
    pub fn get_voter_index(env: Env, voter_id: Bytes) -> Option<u64> {
        storage::read_voter_index(&env, &voter_id)
    }

    pub fn get_voter_audit(env: Env, id: u64) -> Option<VoterAudit> {
        storage::read_voter_audit(&env, id)
    }

    pub fn get_voter_update(env: Env, id: u64) -> Option<VoterUpdate> {
        storage::read_voter_update(&env, id)
    }

    pub fn get_authority(env: Env) -> Option<Address> {
        storage::read_config(&env).authority
    }

    pub fn get_config(env: Env) -> Config {
        storage::read_config(&env)
    }
}

/// Loads the config, applies one guarded setter and persists the result.
fn update_config<F>(env: &Env, apply: F) -> Result<(), Error>
where
    F: FnOnce(&mut Config) -> Result<(), Error>,
{
    let mut config = storage::read_config(env);
    if let Err(err) = apply(&mut config) {
        log!(env, "config change rejected", err as u32);
        return Err(err);
    }
    storage::write_config(env, &config);
    storage::extend_instance(env);
    Ok(())
}
