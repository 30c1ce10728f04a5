//! Two-layer keyed digest binding a redemption to both backends.
//!
//! The game backend folds the claim together with the hash of its key, and
//! the arcade backend folds that result with the hash of the arcade key:
//!
//! ```text
//! game_digest = keccak256(word(game_id) || lower(claimant) || word(points) || keccak256(game_key))
//! proof       = keccak256(game_digest || keccak256(arcade_key))
//! ```
//!
//! Integers are 32-byte big-endian words, the claimant is the lowercase
//! ASCII strkey and keys are hashed over their UTF-8 bytes. Holding both key
//! strings is equivalent to being able to authorize payouts.

use soroban_sdk::{Address, Bytes, BytesN, Env, String};

use super::claim::RedemptionClaim;
use super::errors::SwapError;

const WORD_LEN: usize = 32;

pub struct RedemptionDigest;

impl RedemptionDigest {
    /// Builds the proof a backend pair would issue for this claim
    pub fn compute(
        env: &Env,
        game_id: u32,
        claimant: &Address,
        points: i128,
        game_key: &String,
        arcade_key: &String,
    ) -> BytesN<32> {
        let game_digest = Self::game_layer(env, game_id, claimant, points, game_key);

        let mut payload = Bytes::from_array(env, &game_digest.to_array());
        payload.append(&Self::key_hash(env, arcade_key));

        env.crypto().keccak256(&payload).into()
    }

    /// Checks a claim against the current keys.
    ///
    /// A missing key and a wrong proof are indistinguishable to the caller.
    pub fn verify(
        env: &Env,
        claim: &RedemptionClaim,
        game_key: Option<&String>,
        arcade_key: Option<&String>,
    ) -> Result<(), SwapError> {
        let (game_key, arcade_key) = match (game_key, arcade_key) {
            (Some(game_key), Some(arcade_key)) => (game_key, arcade_key),
            _ => return Err(SwapError::InvalidVerificationData),
        };

        let expected = Self::compute(
            env,
            claim.game_id,
            &claim.claimant,
            claim.points,
            game_key,
            arcade_key,
        );

        if expected != claim.proof {
            return Err(SwapError::InvalidVerificationData);
        }
        Ok(())
    }

    fn game_layer(
        env: &Env,
        game_id: u32,
        claimant: &Address,
        points: i128,
        game_key: &String,
    ) -> BytesN<32> {
        let mut payload = word_from_u32(env, game_id);
        payload.append(&lowercase_address(env, claimant));
        payload.append(&word_from_i128(env, points));
        payload.append(&Self::key_hash(env, game_key));

        env.crypto().keccak256(&payload).into()
    }

    fn key_hash(env: &Env, key: &String) -> Bytes {
        let hash = env.crypto().keccak256(&key.to_bytes());
        Bytes::from_array(env, &hash.to_array())
    }
}

fn word_from_u32(env: &Env, value: u32) -> Bytes {
    let mut word = [0u8; WORD_LEN];
    word[WORD_LEN - 4..].copy_from_slice(&value.to_be_bytes());
    Bytes::from_array(env, &word)
}

// Sign-extended, matching a 256-bit two's complement integer.
fn word_from_i128(env: &Env, value: i128) -> Bytes {
    let fill = if value < 0 { 0xff } else { 0x00 };
    let mut word = [fill; WORD_LEN];
    word[WORD_LEN - 16..].copy_from_slice(&value.to_be_bytes());
    Bytes::from_array(env, &word)
}

fn lowercase_address(env: &Env, address: &Address) -> Bytes {
    let raw = address.to_string().to_bytes();
    let mut lowered = Bytes::new(env);
    for byte in raw.iter() {
        lowered.push_back(byte.to_ascii_lowercase());
    }
    lowered
}
