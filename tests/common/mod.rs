//! In-process simulation driver for multi-party end-to-end tests: build `n`
//! parties sharing `(indices, k, h)` and an RZG vector, call `start` on
//! each, then drain a shared message buffer (shuffling between deliveries)
//! until every party reports its output. A plain function over
//! `Vec<Message>` suffices since the party state machine is synchronous.

use pedersen_mul_mpc::crypto::share::vss_split;
use pedersen_mul_mpc::crypto::{Fn, Point};
use pedersen_mul_mpc::mpc::{Message, Party};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};

pub fn sequential_indices(n: usize) -> Vec<Fn> {
    (1..=n as u64).map(Fn::from_u64).collect()
}

/// Surfaces `log` output on test failure; harmless to call more than once.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds `n` parties over `indices` at threshold `k` under Pedersen base
/// `h`. `rzg_seed` drives the RZG vector's randomness, `protocol_seed`
/// drives each party's own `r`, `s`, `tau` sampling. Distinct seeds let
/// callers vary one source of randomness while holding the other fixed.
pub fn build_parties(
    indices: &[Fn],
    k: usize,
    h: Point,
    rzg_seed: u64,
    protocol_seed: u64,
) -> (Vec<Party>, Fn, Fn) {
    init_logging();
    let mut rzg_rng = StdRng::seed_from_u64(rzg_seed);
    let (rzg_shares, rzg_commitment) = vss_split(indices, &h, Fn::zero(), 2 * k - 1, &mut rzg_rng);

    let mut protocol_rng = StdRng::seed_from_u64(protocol_seed);
    let mut parties = Vec::with_capacity(indices.len());
    let mut r_sum = Fn::zero();
    let mut s_sum = Fn::zero();

    for (i, &index) in indices.iter().enumerate() {
        let (party, r, s) = Party::new(
            index,
            indices.to_vec(),
            k,
            h,
            rzg_shares[i],
            &rzg_commitment,
            &mut protocol_rng,
        )
        .expect("valid configuration");
        parties.push(party);
        r_sum = r_sum.add(&r);
        s_sum = s_sum.add(&s);
    }

    (parties, r_sum, s_sum)
}

/// Calls `start` on every party, returning the full set of `Share` messages.
pub fn start_all(parties: &[Party]) -> Vec<Message> {
    let mut rng = thread_rng();
    parties
        .iter()
        .flat_map(|p| p.start(&mut rng).expect("start never fails on a valid party"))
        .collect()
}

pub fn party_index(parties: &[Party], who: Fn) -> usize {
    parties
        .iter()
        .position(|p| p.index() == who)
        .expect("message addressed to a known party")
}

/// Drains `buffer`, shuffling (with a PRNG seeded from `shuffle_seed`)
/// after every delivery, until every party reports an output.
pub fn deliver_shuffled(parties: &mut [Party], mut buffer: Vec<Message>, shuffle_seed: u64) -> Vec<Fn> {
    let mut rng = StdRng::seed_from_u64(shuffle_seed);
    let mut outputs = vec![None; parties.len()];

    buffer.shuffle(&mut rng);
    while let Some(msg) = buffer.pop() {
        let idx = party_index(parties, msg.to);
        let progress = parties[idx]
            .handle(msg, &mut rng)
            .expect("honest run must not abort");
        if let Some(output) = progress.output {
            outputs[idx] = Some(output);
        }
        buffer.extend(progress.outbound);
        buffer.shuffle(&mut rng);
    }

    outputs
        .into_iter()
        .map(|o| o.expect("every party must complete"))
        .collect()
}

/// Delivers only `Share` messages (as produced by [`start_all`]), collecting
/// and returning the `Open` messages each party emits once its share set is
/// complete. Leaves every party in `CollectingOpens`, having not yet
/// received any `Open` message — used by tests that need to intercept or
/// tamper with an `Open` payload before it is handled.
pub fn drive_shares(parties: &mut [Party], mut buffer: Vec<Message>) -> Vec<Message> {
    let mut rng = thread_rng();
    let mut opens = Vec::new();

    while let Some(msg) = buffer.pop() {
        let idx = party_index(parties, msg.to);
        let progress = parties[idx]
            .handle(msg, &mut rng)
            .expect("honest share must validate");
        opens.extend(progress.outbound);
    }

    opens
}
