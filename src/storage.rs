// src/storage.rs

use soroban_sdk::{contracttype, panic_with_error, Bytes, Env};

use crate::config::Config;
use crate::error::Error;
use crate::types::{Voter, VoterAudit, VoterUpdate};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    NextVoterId,
    Voter(u64),        // id -> Voter
    VoterIndex(Bytes), // external voter id -> id
    VoterUpdate(u64),  // id -> latest VoterUpdate
    VoterAudit(u64),   // id -> latest VoterAudit
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn read_config(env: &Env) -> Config {
    match env.storage().instance().get(&DataKey::Config) {
        Some(config) => config,
        // Only reachable on an instance that skipped its constructor.
        None => panic_with_error!(env, Error::NotAuthorized),
    }
}

pub fn write_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_next_voter_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextVoterId)
        .unwrap_or(0)
}

pub fn write_next_voter_id(env: &Env, next: u64) {
    env.storage().instance().set(&DataKey::NextVoterId, &next);
}

/// Loads a persistent entry and bumps its TTL if it is present.
fn read_record<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
    }
    value
}

fn write_record<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

pub fn read_voter(env: &Env, id: u64) -> Option<Voter> {
    read_record(env, &DataKey::Voter(id))
}

pub fn write_voter(env: &Env, id: u64, voter: &Voter) {
    write_record(env, &DataKey::Voter(id), voter);
}

pub fn read_voter_index(env: &Env, voter_id: &Bytes) -> Option<u64> {
    read_record(env, &DataKey::VoterIndex(voter_id.clone()))
}

pub fn has_voter_index(env: &Env, voter_id: &Bytes) -> bool {
    let key = DataKey::VoterIndex(voter_id.clone());
    let present = env.storage().persistent().has(&key);
    if present {
        env.storage()
            .persistent()
            .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
    }
    present
}

pub fn write_voter_index(env: &Env, voter_id: &Bytes, id: u64) {
    write_record(env, &DataKey::VoterIndex(voter_id.clone()), &id);
}

pub fn read_voter_update(env: &Env, id: u64) -> Option<VoterUpdate> {
    read_record(env, &DataKey::VoterUpdate(id))
}

pub fn write_voter_update(env: &Env, id: u64, update: &VoterUpdate) {
    write_record(env, &DataKey::VoterUpdate(id), update);
}

pub fn read_voter_audit(env: &Env, id: u64) -> Option<VoterAudit> {
    read_record(env, &DataKey::VoterAudit(id))
}

pub fn write_voter_audit(env: &Env, id: u64, audit: &VoterAudit) {
    write_record(env, &DataKey::VoterAudit(id), audit);
}
