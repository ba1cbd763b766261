// src/events.rs

use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub(crate) fn initialized(env: &Env, fee_token: &Address, verifier: &Address) {
    env.events().publish(
        (symbol_short!("init"),),
        (fee_token.clone(), verifier.clone()),
    );
}

pub(crate) fn authority_set(env: &Env, authority: &Address) {
    env.events()
        .publish((symbol_short!("authority"), authority.clone()), ());
}

/// `field` names the configuration parameter that changed.
pub(crate) fn config_changed<V>(env: &Env, field: Symbol, value: V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.events().publish((symbol_short!("config"), field), value);
}

/// Emitted once the fee has moved and the record is stored.
pub(crate) fn registered(env: &Env, caller: &Address, id: u64, authority: &Address, fee: i128) {
    env.events().publish(
        (symbol_short!("register"), caller.clone()),
        (id, authority.clone(), fee),
    );
}

pub(crate) fn updated(env: &Env, id: u64, updater: &Address) {
    env.events()
        .publish((symbol_short!("update"), id), updater.clone());
}

pub(crate) fn audited(env: &Env, id: u64, auditor: &Address, status: bool) {
    env.events()
        .publish((symbol_short!("audit"), id), (auditor.clone(), status));
}
