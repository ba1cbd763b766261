// src/verifier.rs

use soroban_sdk::{contractclient, Bytes, Env};

/// Interface of the eligibility verifier contract.
///
/// The registry only needs a yes/no answer for an opaque proof; how the proof
/// is checked is up to the verifier.
#[contractclient(name = "ProofVerifierClient")]
pub trait ProofVerifier {
    fn verify(env: Env, proof: Bytes) -> bool;
}
