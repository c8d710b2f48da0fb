//! Module to generate arbitrary values for testing.

use arbitrary::{Arbitrary, Unstructured};
use liquidstake_primitives::{
    coin::Coin,
    deposit::{Deposit, DepositState},
    types::Epoch,
};
use proptest::prelude::*;
use rand_core::{OsRng, TryCryptoRng};

/// The default buffer size for the `ArbitraryGenerator`.
const ARB_GEN_LEN: usize = 1024;

/// A generator for producing arbitrary data based on a persistent buffer.
#[derive(Debug)]
pub struct ArbitraryGenerator {
    /// Persistent buffer
    buf: Vec<u8>,
}

impl Default for ArbitraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ArbitraryGenerator {
    /// Creates a new `ArbitraryGenerator` with a default buffer size.
    pub fn new() -> Self {
        Self::new_with_size(ARB_GEN_LEN)
    }

    /// Creates a new `ArbitraryGenerator` with a buffer of `s` bytes.
    pub fn new_with_size(s: usize) -> Self {
        Self { buf: vec![0u8; s] }
    }

    /// Generates an arbitrary instance of type `T` using the default RNG, [`OsRng`].
    pub fn generate<'a, T>(&'a mut self) -> T
    where
        T: Arbitrary<'a> + Clone,
    {
        self.generate_with_rng::<T, OsRng>(&mut OsRng)
    }

    /// Generates an arbitrary instance of type `T` from the bytes produced by `rng`.
    pub fn generate_with_rng<'a, T, R>(&'a mut self, rng: &mut R) -> T
    where
        T: Arbitrary<'a> + Clone,
        R: TryCryptoRng,
    {
        rng.try_fill_bytes(&mut self.buf)
            .expect("must be able to generate random bytes");
        let mut u = Unstructured::new(&self.buf);
        T::arbitrary(&mut u).expect("Failed to generate arbitrary instance")
    }
}

/// The chain ids used by the generated deposits.
pub const ARB_CHAIN_IDS: [&str; 3] = ["cosmoshub-4", "osmosis-1", "stargaze-1"];

/// The denomination used by the generated deposits.
pub const ARB_DENOM: &str = "ibc/ATOM";

/// Generates an arbitrary [`DepositState`].
pub fn arb_deposit_state() -> impl Strategy<Value = DepositState> {
    prop::sample::select(DepositState::ALL.to_vec())
}

/// Generates an arbitrary [`Deposit`] for one of [`ARB_CHAIN_IDS`] with an epoch below
/// `max_epoch`.
pub fn arb_deposit(max_epoch: Epoch) -> impl Strategy<Value = Deposit> {
    (
        prop::sample::select(ARB_CHAIN_IDS.to_vec()),
        0..max_epoch,
        0u128..=1_000_000_000_000,
        arb_deposit_state(),
        0u64..8,
    )
        .prop_map(|(chain_id, epoch, amount, state, sequence)| Deposit {
            chain_id: chain_id.to_string(),
            epoch,
            amount: Coin::new(ARB_DENOM, amount),
            state,
            ibc_sequence_id: match state {
                DepositState::Pending => String::new(),
                _ => format!("channel-0-sequence-{sequence}"),
            },
        })
}

/// Generates up to `max_len` arbitrary deposits; duplicates of a `(chain, epoch)` pair are
/// possible and resolve as upserts when stored.
pub fn arb_deposits(max_epoch: Epoch, max_len: usize) -> impl Strategy<Value = Vec<Deposit>> {
    proptest::collection::vec(arb_deposit(max_epoch), 0..=max_len)
}

/// Generates `len` PENDING amounts for consecutive epochs starting at zero.
pub fn arb_pending_amounts(len: usize) -> impl Strategy<Value = Vec<u128>> {
    proptest::collection::vec(1u128..=1_000_000, 1..=len)
}
