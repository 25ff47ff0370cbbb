//! RNG seed derivation for deterministic shuffles.
//!
//! Every session carries one base seed; the initial deal and each
//! reshuffle-on-empty derive their own sub-seed from it, so replaying the
//! same action sequence against the same base seed reproduces every shuffle.

/// Seed for the initial deal of a session.
pub fn derive_deal_seed(session_seed: u64) -> u64 {
    session_seed.wrapping_add(1)
}

/// Seed for the nth reshuffle of the discard pile into a fresh deck.
///
/// `shuffle_count` is the number of shuffles the session has already
/// performed (the deal counts as the first).
pub fn derive_reshuffle_seed(session_seed: u64, shuffle_count: u32) -> u64 {
    session_seed
        .wrapping_add((shuffle_count as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}
