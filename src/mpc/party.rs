//! The per-party protocol state machine: a single-threaded,
//! synchronous reducer `(state, inbound message) -> (state', outbound
//! messages, maybe output)`. Construct one per party with [`Party::new`],
//! call [`Party::start`] exactly once, then feed it inbound [`Message`]s via
//! [`Party::handle`] until it reports the reconstructed output.

use std::collections::HashSet;

use rand::RngCore;
use zeroize::Zeroize;

use super::aggregate::{commit_sum, vshare_sum};
use super::envelope::{Message, MessageType};
use super::error::ProtocolError;
use super::payload::{ProductMessage, RsSharing, Sharing};
use crate::crypto::{mulproof, share::is_valid, share::vss_split, Commitment, Fn, Point, VerifiableShare};
use crate::math::lagrange;

/// Where a [`Party`] sits in the state-machine diagram.
/// An exhaustive enum replaces a raw written-but-never-read phase counter;
/// `|r_shares| == n` is the sole phase gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartyPhase {
    CollectingShares,
    CollectingOpens,
    Done,
    Failed,
}

/// The result of a single [`Party::handle`] call: zero or more outbound
/// messages to deliver, and `Some(output)` exactly when the party has just
/// reached [`PartyPhase::Done`].
#[derive(Clone, Debug, Default)]
pub struct Progress {
    pub outbound: Vec<Message>,
    pub output: Option<Fn>,
}

impl Progress {
    fn empty() -> Self {
        Self::default()
    }

    pub fn done(&self) -> bool {
        self.output.is_some()
    }
}

pub struct Party {
    index: Fn,
    indices: Vec<Fn>,
    k: usize,
    h: Point,

    r: Fn,
    s: Fn,
    tau: Fn,

    zero_share: VerifiableShare,

    phase: PartyPhase,

    r_shares: Vec<VerifiableShare>,
    r_commitments: Vec<Commitment>,
    s_shares: Vec<VerifiableShare>,
    s_commitments: Vec<Commitment>,
    share_senders_seen: HashSet<Fn>,

    output_shares: Vec<VerifiableShare>,
    open_senders_seen: HashSet<Fn>,
    output: Option<Fn>,
}

impl Drop for Party {
    /// Scrubs the party's own secrets (`r`, `s`, `tau`, and the
    /// pre-distributed zero-share's value/decommitment) once the instance
    /// goes out of scope.
    fn drop(&mut self) {
        self.r.zeroize();
        self.s.zeroize();
        self.tau.zeroize();
        self.zero_share.value.zeroize();
        self.zero_share.decommitment.zeroize();
    }
}

impl Party {
    /// Constructs a party, sampling fresh `r`, `s`, and the product
    /// decommitment `tau`. Returns the party together with `(r, s)` — the
    /// party itself never needs them again after [`Party::start`]; a driver
    /// retains them only to compute the expected output out of band.
    ///
    /// `zero_commitment` is part of the RZG pre-distribution artifact.
    /// It is validated here for degree consistency but never read again
    /// afterwards: only `zero_share` matters for re-randomizing this
    /// party's product share.
    pub fn new<R: RngCore>(
        index: Fn,
        indices: Vec<Fn>,
        k: usize,
        h: Point,
        zero_share: VerifiableShare,
        zero_commitment: &Commitment,
        rng: &mut R,
    ) -> Result<(Self, Fn, Fn), ProtocolError> {
        let n = indices.len();

        if k < 1 {
            return Err(ProtocolError::Configuration(
                "threshold k must be at least 1".into(),
            ));
        }
        if n < 2 * k - 1 {
            return Err(ProtocolError::Configuration(format!(
                "n = {n} parties is below the minimum 2k-1 = {} required for product reconstruction",
                2 * k - 1
            )));
        }
        let distinct: HashSet<Fn> = indices.iter().copied().collect();
        if distinct.len() != n {
            return Err(ProtocolError::Configuration(
                "party indices must be pairwise distinct".into(),
            ));
        }
        if !distinct.contains(&index) {
            return Err(ProtocolError::Configuration(
                "this party's own index must appear in `indices`".into(),
            ));
        }
        if zero_commitment.len() != 2 * k - 1 {
            return Err(ProtocolError::Configuration(format!(
                "RZG commitment has {} coefficients, expected 2k-1 = {}",
                zero_commitment.len(),
                2 * k - 1
            )));
        }
        if zero_share.index != index {
            return Err(ProtocolError::Configuration(
                "RZG share index must match this party's own index".into(),
            ));
        }

        let r = Fn::random(rng);
        let s = Fn::random(rng);
        let tau = Fn::random(rng);

        let party = Self {
            index,
            indices,
            k,
            h,
            r,
            s,
            tau,
            zero_share,
            phase: PartyPhase::CollectingShares,
            r_shares: Vec::with_capacity(n),
            r_commitments: Vec::with_capacity(n),
            s_shares: Vec::with_capacity(n),
            s_commitments: Vec::with_capacity(n),
            share_senders_seen: HashSet::with_capacity(n),
            output_shares: Vec::with_capacity(n),
            open_senders_seen: HashSet::with_capacity(n),
            output: None,
        };

        Ok((party, r, s))
    }

    pub fn index(&self) -> Fn {
        self.index
    }

    pub fn phase(&self) -> PartyPhase {
        self.phase
    }

    pub fn output(&self) -> Option<Fn> {
        self.output
    }

    /// Shamir-splits `r` and `s` at threshold `k` and emits one `Share`
    /// message per peer in `indices`, including this party itself —
    /// kept deliberately, since sending to itself gives the collection
    /// gate a uniform `n` items to count regardless of whether `i` is in
    /// `indices`.
    pub fn start<R: RngCore>(&self, rng: &mut R) -> Result<Vec<Message>, ProtocolError> {
        let (r_shares, r_commitment) = vss_split(&self.indices, &self.h, self.r, self.k, rng);
        let (s_shares, s_commitment) = vss_split(&self.indices, &self.h, self.s, self.k, rng);

        log::info!(
            "party {:?}: starting, broadcasting shares to {} peers",
            self.index,
            self.indices.len()
        );

        self.indices
            .iter()
            .enumerate()
            .map(|(peer_idx, &peer)| {
                let payload = RsSharing::new(
                    Sharing::new(r_shares[peer_idx], r_commitment.clone()),
                    Sharing::new(s_shares[peer_idx], s_commitment.clone()),
                );
                Ok(Message::new(
                    peer,
                    self.index,
                    MessageType::Share,
                    payload.to_bytes()?,
                ))
            })
            .collect()
    }

    /// Advances the state machine by one inbound message. Messages received
    /// after the party has reached a terminal phase are ignored.
    pub fn handle<R: RngCore>(
        &mut self,
        msg: Message,
        rng: &mut R,
    ) -> Result<Progress, ProtocolError> {
        if matches!(self.phase, PartyPhase::Done | PartyPhase::Failed) {
            return Ok(Progress::empty());
        }

        match msg.ty {
            MessageType::Share => self.handle_share(msg, rng),
            MessageType::Open => self.handle_open(msg),
        }
    }

    fn handle_share<R: RngCore>(
        &mut self,
        msg: Message,
        rng: &mut R,
    ) -> Result<Progress, ProtocolError> {
        let payload = RsSharing::from_bytes(&msg.data)?;

        // `is_valid` only checks that a vshare is self-consistent with its
        // own commitment; it says nothing about whose share this is
        // supposed to be. A sender could otherwise forge a share under an
        // arbitrary index (and a matching arbitrary-length commitment),
        // which would later panic `vshare_sum`/`commit_sum`'s same-index
        // and same-length assertions instead of aborting gracefully.
        if payload.r.vshare.index != self.index
            || payload.s.vshare.index != self.index
            || payload.r.commitment.len() != self.k
            || payload.s.commitment.len() != self.k
        {
            self.phase = PartyPhase::Failed;
            log::error!(
                "party {:?}: rejected malformed share from {:?}",
                self.index,
                msg.from
            );
            return Err(ProtocolError::InvalidShare);
        }

        // Abort when either sub-share fails verification, not only when
        // both do.
        let r_valid = is_valid(&self.h, &payload.r.commitment, &payload.r.vshare);
        let s_valid = is_valid(&self.h, &payload.s.commitment, &payload.s.vshare);
        if !r_valid || !s_valid {
            self.phase = PartyPhase::Failed;
            log::error!("party {:?}: rejected invalid share from {:?}", self.index, msg.from);
            return Err(ProtocolError::InvalidShare);
        }

        if !self.share_senders_seen.insert(msg.from) {
            log::warn!(
                "party {:?}: duplicate Share from {:?}, ignoring",
                self.index,
                msg.from
            );
            return Ok(Progress::empty());
        }

        self.r_shares.push(payload.r.vshare);
        self.r_commitments.push(payload.r.commitment);
        self.s_shares.push(payload.s.vshare);
        self.s_commitments.push(payload.s.commitment);

        log::debug!(
            "party {:?}: collected share {}/{}",
            self.index,
            self.r_shares.len(),
            self.indices.len()
        );

        if self.r_shares.len() == self.indices.len() {
            self.phase = PartyPhase::CollectingOpens;
            let outbound = self.broadcast_product(rng)?;
            Ok(Progress {
                outbound,
                output: None,
            })
        } else {
            Ok(Progress::empty())
        }
    }

    /// Sums the collected shares and commitments, computes the local
    /// product share and its Pedersen commitment, proves the
    /// multiplicative relation, re-randomizes with the pre-distributed
    /// zero-share, and broadcasts exactly once.
    fn broadcast_product<R: RngCore>(&mut self, rng: &mut R) -> Result<Vec<Message>, ProtocolError> {
        let r_sum = vshare_sum(&self.r_shares);
        let s_sum = vshare_sum(&self.s_shares);
        let r_total = commit_sum(&self.r_commitments);
        let s_total = commit_sum(&self.s_commitments);

        let product = r_sum.value.multiply(&s_sum.value);
        let a_commit = r_total.eval(&self.index);
        let b_commit = s_total.eval(&self.index);
        let product_commit = Point::base_exp(&product).add(&self.h.scale(&self.tau));

        let proof = mulproof::prove(
            &self.h,
            &a_commit,
            &b_commit,
            &product_commit,
            &r_sum.value,
            &s_sum.value,
            &r_sum.decommitment,
            &s_sum.decommitment,
            &self.tau,
            rng,
        );

        let raw_share = VerifiableShare::new(self.index, product, self.tau);
        let product_share = raw_share.add(&self.zero_share);

        let payload = ProductMessage {
            product_share,
            product_commitment: product_commit,
            proof,
            a_commit,
            b_commit,
        };
        let bytes = payload.to_bytes()?;

        log::info!(
            "party {:?}: full share set collected, broadcasting product",
            self.index
        );

        Ok(self
            .indices
            .iter()
            .map(|&peer| Message::new(peer, self.index, MessageType::Open, bytes.clone()))
            .collect())
    }

    fn handle_open(&mut self, msg: Message) -> Result<Progress, ProtocolError> {
        let payload = ProductMessage::from_bytes(&msg.data)?;

        let verified = mulproof::verify(
            &self.h,
            &payload.a_commit,
            &payload.b_commit,
            &payload.product_commitment,
            &payload.proof,
        );
        if !verified {
            self.phase = PartyPhase::Failed;
            log::error!(
                "party {:?}: rejected invalid product proof from {:?}",
                self.index,
                msg.from
            );
            return Err(ProtocolError::InvalidProof);
        }

        // `product_share.index` must be the sender's own identity and a
        // known party, or a forged/duplicated index would reach Lagrange
        // interpolation and panic on its pairwise-distinct-nodes
        // assumption instead of aborting gracefully here.
        if payload.product_share.index != msg.from || !self.indices.contains(&msg.from) {
            self.phase = PartyPhase::Failed;
            log::error!(
                "party {:?}: rejected product share with mismatched index from {:?}",
                self.index,
                msg.from
            );
            return Err(ProtocolError::InvalidProof);
        }

        if !self.open_senders_seen.insert(msg.from) {
            log::warn!(
                "party {:?}: duplicate Open from {:?}, ignoring",
                self.index,
                msg.from
            );
            return Ok(Progress::empty());
        }

        self.output_shares.push(payload.product_share);

        log::debug!(
            "party {:?}: collected open {}/{}",
            self.index,
            self.output_shares.len(),
            self.indices.len()
        );

        if self.output_shares.len() == self.indices.len() {
            let nodes: Vec<Fn> = self.output_shares.iter().map(|s| s.index).collect();
            let values: Vec<Fn> = self.output_shares.iter().map(|s| s.value).collect();
            let output = lagrange::open(&nodes, &values);

            self.phase = PartyPhase::Done;
            self.output = Some(output);
            log::info!("party {:?}: reconstructed output", self.index);

            Ok(Progress {
                outbound: Vec::new(),
                output: Some(output),
            })
        } else {
            Ok(Progress::empty())
        }
    }
}
