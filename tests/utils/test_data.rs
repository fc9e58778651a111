/// Test data generators for randomized sale scenarios
use arbitrary::{Arbitrary, Unstructured};

/// One step of a generated sale session
#[derive(Clone, Debug, derive_arbitrary::Arbitrary)]
pub enum SaleAction {
    Exchange { buyer: u8, amount: u8 },
    Receive { buyer: u8, amount: u8 },
    SetRate(u16),
    SetMinimum(u8),
    SetMaximum(u8),
    Pause,
    Unpause,
    StrangerPause,
}

/// Deterministic byte source (64-bit LCG) so failures reproduce from the seed
pub struct SeededBytes {
    state: u64,
}

impl SeededBytes {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    pub fn take(&mut self, len: usize) -> Vec<u8> {
        (0..len)
            .map(|_| {
                self.state = self
                    .state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                (self.state >> 56) as u8
            })
            .collect()
    }
}

/// Generate up to `count` actions from `seed`
pub fn generate_actions(seed: u64, count: usize) -> Vec<SaleAction> {
    let data = SeededBytes::new(seed).take(count * 8);
    let mut u = Unstructured::new(&data);
    let mut actions = Vec::with_capacity(count);
    while actions.len() < count {
        match SaleAction::arbitrary(&mut u) {
            Ok(action) => actions.push(action),
            Err(_) => break,
        }
    }
    actions
}
