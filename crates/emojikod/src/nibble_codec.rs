// Implementacja NibbleCodec

use crate::decode_policy::DecodePolicy;
use crate::decoder::{decode, decode_strict};
use crate::encoder::encode;
use crate::error::Result;
use crate::text_codec_trait::TextCodec;

/// Kodek półbajt -> symbol z wybraną polityką dekodowania.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NibbleCodec {
    policy: DecodePolicy,
}

impl NibbleCodec {
    pub fn new(policy: DecodePolicy) -> Self {
        NibbleCodec { policy }
    }

    pub fn strict() -> Self {
        NibbleCodec::new(DecodePolicy::Strict)
    }
}

impl TextCodec for NibbleCodec {
    fn encode(&self, bytes: &[u8]) -> String {
        encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        match self.policy {
            DecodePolicy::Permissive => Ok(decode(text)),
            DecodePolicy::Strict => decode_strict(text),
        }
    }

    fn get_decode_policy(&self) -> DecodePolicy {
        self.policy
    }
}
