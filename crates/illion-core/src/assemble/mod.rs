//! Morpheme assembly over a padded digit string
//!
//! Two strategies produce the same bytes:
//! - sequential: one pass over every triple on the calling thread
//! - parallel: ordered chunks assembled on the rayon pool, then joined by index

mod parallel;
mod sequential;

pub use parallel::{assemble_parallel, Chunk, ChunkLadder, ChunkPlan, ChunkStep};
pub use sequential::assemble_sequential;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which assembler a generator runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssemblyMode {
    /// Always a single pass on the calling thread
    Sequential,
    /// Always split into chunks (a single chunk still runs inline)
    Parallel,
    /// Parallel once the padded input exceeds the configured length
    #[default]
    Auto,
}

impl AssemblyMode {
    /// Map the boolean "multi-threaded" flag of the plain entry points
    pub fn from_flag(parallel: bool) -> Self {
        if parallel {
            Self::Parallel
        } else {
            Self::Sequential
        }
    }

    /// Decide whether an input of `padded_len` digits takes the parallel path
    pub fn is_parallel_for(self, padded_len: usize, auto_parallel_min_len: usize) -> bool {
        match self {
            Self::Sequential => false,
            Self::Parallel => true,
            Self::Auto => padded_len > auto_parallel_min_len,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for AssemblyMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "single" => Ok(Self::Sequential),
            "parallel" | "multi" => Ok(Self::Parallel),
            "auto" => Ok(Self::Auto),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(AssemblyMode::from_flag(true), AssemblyMode::Parallel);
        assert_eq!(AssemblyMode::from_flag(false), AssemblyMode::Sequential);
    }

    #[test]
    fn test_auto_threshold() {
        assert!(!AssemblyMode::Auto.is_parallel_for(9_999, 9_999));
        assert!(AssemblyMode::Auto.is_parallel_for(10_002, 9_999));
        assert!(AssemblyMode::Parallel.is_parallel_for(3, 9_999));
        assert!(!AssemblyMode::Sequential.is_parallel_for(usize::MAX, 0));
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("Parallel".parse::<AssemblyMode>(), Ok(AssemblyMode::Parallel));
        assert_eq!(" sequential ".parse::<AssemblyMode>(), Ok(AssemblyMode::Sequential));
        assert_eq!("auto".parse::<AssemblyMode>(), Ok(AssemblyMode::Auto));
        assert!("fast".parse::<AssemblyMode>().is_err());
    }
}
