// Plik dla traita TextCodec

use crate::decode_policy::DecodePolicy;
use crate::error::Result;
use std::fmt::Debug;

/// Trait dla kodeków zamieniających bajty na tekst i z powrotem.
pub trait TextCodec: Debug + Send + Sync {
    fn encode(&self, bytes: &[u8]) -> String;
    fn decode(&self, text: &str) -> Result<Vec<u8>>;
    fn get_decode_policy(&self) -> DecodePolicy {
        DecodePolicy::Permissive
    }
}
