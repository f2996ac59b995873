// ABOUTME: Deterministic randomness for tests
// ABOUTME: ScriptedRandom replays a fixed list of indices

use crate::random::RandomSource;

/// Replays `script` in order, cycling when exhausted.
///
/// Each value is reduced modulo the requested upper bound, so a script
/// written for one table size stays in range for another.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of draws made so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.script.is_empty() || upper == 0 {
            self.cursor += 1;
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % upper
    }
}
