//! Source of uniformly distributed random indices

use crate::error::{Result, ToolbeltError};

/// Abstract random source so generators can be driven deterministically in
/// tests and by the OS entropy pool at runtime.
pub trait RandomSource {
    /// Uniform value in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> Result<usize>;

    /// Pick one element of a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        let index = self.below(items.len())?;
        Ok(&items[index])
    }
}

/// Replays a fixed sequence of raw values (reduced modulo the bound).
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    position: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            position: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(ToolbeltError::Entropy("empty range".to_string()));
        }
        let value = self
            .values
            .get(self.position % self.values.len().max(1))
            .copied()
            .unwrap_or(0);
        self.position += 1;
        Ok(value % bound)
    }
}
