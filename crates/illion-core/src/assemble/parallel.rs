//! Chunked fan-out/fan-in assembly for very long inputs
//!
//! The padded digits are cut into ordered chunks of whole triples. Each
//! chunk runs on the rayon pool and reports `(index, partial)` over a
//! channel; partials land in a slot vector by index, so completion order
//! never affects the output.

use rayon::Scope;
use serde::{Deserialize, Serialize};
use std::sync::mpsc;

use super::sequential::{assemble_sequential, write_triples, MORPHEME_LEN_HINT};
use crate::cache::TripleCache;
use crate::error::ConfigError;

/// One rung of the chunk ladder: inputs longer than `min_len` digits are
/// cut into chunks of `chunk_len` digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkStep {
    pub min_len: usize,
    pub chunk_len: usize,
}

/// Chunk size selection by input length
///
/// Steps are ordered by decreasing `min_len`; the first step whose
/// `min_len` is below the input length wins. Inputs at or below every step
/// are assembled as a single chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkLadder {
    pub steps: Vec<ChunkStep>,
}

impl Default for ChunkLadder {
    fn default() -> Self {
        Self {
            steps: vec![
                ChunkStep {
                    min_len: 100_000_000,
                    chunk_len: 3_000_000,
                },
                ChunkStep {
                    min_len: 1_000_000,
                    chunk_len: 300_000,
                },
                ChunkStep {
                    min_len: 10_000,
                    chunk_len: 3_000,
                },
            ],
        }
    }
}

impl ChunkLadder {
    /// Build a ladder, rejecting zero chunk lengths and unordered steps
    pub fn new(steps: Vec<ChunkStep>) -> Result<Self, ConfigError> {
        let ladder = Self { steps };
        ladder.validate()?;
        Ok(ladder)
    }

    /// A ladder with no steps: every input is one chunk
    pub fn single_chunk() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (step, rung) in self.steps.iter().enumerate() {
            if rung.chunk_len == 0 {
                return Err(ConfigError::InvalidChunkLen {
                    step,
                    chunk_len: rung.chunk_len,
                });
            }
            if step > 0 && self.steps[step - 1].min_len <= rung.min_len {
                return Err(ConfigError::UnorderedLadder { step });
            }
        }
        Ok(())
    }

    /// Work out chunk length and count for an input of `len` digits.
    ///
    /// Chunk lengths are rounded up to whole triples.
    pub fn plan(&self, len: usize) -> ChunkPlan {
        if len == 0 {
            return ChunkPlan {
                chunk_len: 0,
                chunk_count: 0,
            };
        }

        let chunk_len = self
            .steps
            .iter()
            .find(|rung| len > rung.min_len)
            .map_or(len, |rung| rung.chunk_len)
            .max(1)
            .next_multiple_of(3);

        ChunkPlan {
            chunk_len,
            chunk_count: len.div_ceil(chunk_len),
        }
    }
}

/// How a particular input is split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    pub chunk_len: usize,
    pub chunk_count: usize,
}

impl ChunkPlan {
    /// Split `digits` into indexed chunks; the last one may be shorter
    pub fn chunks<'a>(&self, digits: &'a [u8]) -> impl Iterator<Item = Chunk<'a>> {
        digits
            .chunks(self.chunk_len.max(1))
            .enumerate()
            .map(|(index, digits)| Chunk { index, digits })
    }
}

/// An ordered slice of the padded input handed to one worker
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
    pub index: usize,
    pub digits: &'a [u8],
}

impl Chunk<'_> {
    fn assemble(&self, cache: &TripleCache) -> String {
        let mut out = String::with_capacity(self.digits.len() / 3 * MORPHEME_LEN_HINT);
        write_triples(cache, self.digits, &mut out);
        out
    }
}

/// Assemble `padded` in parallel chunks chosen by `ladder`.
///
/// Produces exactly the bytes [`assemble_sequential`] would.
pub fn assemble_parallel(cache: &TripleCache, padded: &str, ladder: &ChunkLadder) -> String {
    let digits = padded.as_bytes();
    let plan = ladder.plan(digits.len());

    tracing::debug!(
        len = digits.len(),
        chunk_len = plan.chunk_len,
        chunk_count = plan.chunk_count,
        rayon_threads = rayon::current_num_threads(),
        "Parallel assembly plan"
    );

    if plan.chunk_count <= 1 {
        return assemble_sequential(cache, padded);
    }

    let (tx, rx) = mpsc::channel::<(usize, String)>();

    rayon::scope(|scope: &Scope<'_>| {
        for chunk in plan.chunks(digits) {
            let tx = tx.clone();
            scope.spawn(move |_| {
                // rx outlives the scope, so the send cannot fail
                let _ = tx.send((chunk.index, chunk.assemble(cache)));
            });
        }
    });
    drop(tx);

    let mut slots = vec![String::new(); plan.chunk_count];
    for (index, partial) in rx {
        slots[index] = partial;
    }
    slots.concat()
}
