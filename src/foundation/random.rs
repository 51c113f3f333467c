use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform random indices.
///
/// Property selection and representation selection both draw from this, so tests can substitute
/// a deterministic sequence.
pub trait IndexSource {
    /// Return an index in `[0, len)`. Returns 0 when `len == 0`; callers check emptiness first.
    fn pick(&mut self, len: usize) -> usize;
}

/// Thread-local OS-seeded generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngSource;

impl IndexSource for ThreadRngSource {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

/// Reproducible generator seeded from a `u64`.
#[derive(Clone, Debug)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a generator whose sequence depends only on `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IndexSource for SeededSource {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed script of indices, cycling when exhausted. Each value is reduced modulo `len`.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Build from a script; an empty script always yields 0.
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of indices drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl IndexSource for ScriptedSource {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 || self.script.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let v = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        v % len
    }
}

impl<T: IndexSource + ?Sized> IndexSource for &mut T {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<T: IndexSource + ?Sized> IndexSource for Box<T> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/random.rs"]
mod tests;
