//! Order-independent fingerprint over a parameter set.
//!
//! Each parameter contributes a byte string that is XOR-ed into an
//! accumulator. Operands of different lengths are combined over the longer
//! length, with the missing tail of the shorter one treated as zero bytes.
//! The result is the same for any ordering of the same parameters.
//!
//! This is a structural comparison aid, not a digest.

use serde::{Deserialize, Serialize};
use std::fmt;

/// XOR accumulator over variable-length byte strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommutativeHash(Vec<u8>);

impl CommutativeHash {
    pub fn new() -> Self {
        CommutativeHash(Vec::new())
    }

    /// XORs `operand` into the accumulator, growing it to
    /// `max(len, operand.len())`.
    pub fn accumulate(&mut self, operand: &[u8]) {
        if operand.len() > self.0.len() {
            self.0.resize(operand.len(), 0);
        }
        for (acc, b) in self.0.iter_mut().zip(operand) {
            *acc ^= b;
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// True when nothing non-zero has been folded in.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for CommutativeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}
