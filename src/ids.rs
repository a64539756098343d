//! Block identifier generation.
//!
//! Generated ids are `b_` followed by five lowercase hex digits. They only link
//! blocks inside one converted record, so uniqueness is probabilistic across
//! calls. Within a single call `DocumentIds::generate` guarantees the four ids
//! are pairwise distinct, whatever generator it is given.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Parent id of every converted modal: the root of the destination page.
pub const ROOT_PARENT_ID: &str = "root_id";

pub const ID_PREFIX: &str = "b_";

/// Number of hex digits after the prefix.
pub const ID_SUFFIX_LEN: usize = 5;

const ID_SUFFIX_SPACE: u32 = 1 << (4 * ID_SUFFIX_LEN as u32);

/// Draws allowed per id before a colliding id is disambiguated instead.
pub const MAX_ID_REDRAWS: usize = 16;

/// Source of fresh block identifiers.
///
/// Implementations need not guarantee uniqueness and may repeat themselves
/// forever. `DocumentIds::generate` redraws a colliding id at most
/// `MAX_ID_REDRAWS` times, then appends `_<n>` to the last draw until it is
/// unused, so any generator yields four distinct ids in bounded time.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

fn format_id(suffix: u32) -> String {
    format!("{}{:0width$x}", ID_PREFIX, suffix, width = ID_SUFFIX_LEN)
}

/// Random ids drawn from an `Rng`. `RandomIds::new()` uses the thread-local
/// generator.
#[derive(Debug, Clone)]
pub struct RandomIds<R = ThreadRng> {
    rng: R,
}

impl RandomIds<ThreadRng> {
    pub fn new() -> Self {
        RandomIds {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomIds<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomIds<StdRng> {
    /// Reproducible ids for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RandomIds {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomIds<R> {
    pub fn from_rng(rng: R) -> Self {
        RandomIds { rng }
    }
}

impl<R: Rng> IdGenerator for RandomIds<R> {
    fn next_id(&mut self) -> String {
        format_id(self.rng.gen_range(0..ID_SUFFIX_SPACE))
    }
}

/// Counts up from 1: `b_00001`, `b_00002`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u32,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next = (self.next + 1) % ID_SUFFIX_SPACE;
        format_id(self.next)
    }
}

/// The identifiers wired into one converted modal record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIds {
    pub parent_id: String,
    pub modal_id: String,
    pub header_id: String,
    pub body_id: String,
    pub footer_id: String,
}

impl DocumentIds {
    /// Draw modal, header, body and footer ids in that order, redrawing any id
    /// that collides with one already taken in this set. See `IdGenerator`
    /// for the redraw limit.
    pub fn generate(ids: &mut impl IdGenerator) -> Self {
        let mut taken = Vec::with_capacity(4);
        let modal_id = fresh_id(ids, &mut taken);
        let header_id = fresh_id(ids, &mut taken);
        let body_id = fresh_id(ids, &mut taken);
        let footer_id = fresh_id(ids, &mut taken);

        DocumentIds {
            parent_id: ROOT_PARENT_ID.to_string(),
            modal_id,
            header_id,
            body_id,
            footer_id,
        }
    }
}

fn fresh_id(ids: &mut impl IdGenerator, taken: &mut Vec<String>) -> String {
    let mut id = ids.next_id();
    for _ in 0..MAX_ID_REDRAWS {
        if !taken.contains(&id) {
            break;
        }
        id = ids.next_id();
    }
    if taken.contains(&id) {
        let base = id;
        let mut n = 1;
        id = format!("{}_{}", base, n);
        while taken.contains(&id) {
            n += 1;
            id = format!("{}_{}", base, n);
        }
    }
    taken.push(id.clone());
    id
}
