//! OS-backed random source

use crate::domain::RandomSource;
use crate::error::{Result, ToolbeltError};

/// Draws from the OS CSPRNG via `getrandom`, with rejection sampling so that
/// every value below the bound is equally likely.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl OsRandom {
    fn next_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        getrandom::getrandom(&mut buf)
            .map_err(|e| ToolbeltError::Entropy(format!("OS random source unavailable: {}", e)))?;
        Ok(u64::from_le_bytes(buf))
    }
}

impl RandomSource for OsRandom {
    fn below(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(ToolbeltError::Entropy("empty range".to_string()));
        }
        let bound = bound as u64;
        // Largest multiple of `bound` representable; draws at or above it are biased.
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let value = self.next_u64()?;
            if value < zone {
                return Ok((value % bound) as usize);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_stays_in_range() {
        let mut rng = OsRandom;
        for bound in [1usize, 2, 7, 66, 1000] {
            for _ in 0..200 {
                assert!(rng.below(bound).unwrap() < bound);
            }
        }
    }

    #[test]
    fn test_zero_bound_rejected() {
        assert!(matches!(OsRandom.below(0), Err(ToolbeltError::Entropy(_))));
    }

    #[test]
    fn test_covers_small_range() {
        let mut rng = OsRandom;
        let mut seen = [false; 4];
        for _ in 0..500 {
            seen[rng.below(4).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
