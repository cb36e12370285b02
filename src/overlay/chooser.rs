use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the uniform random picks made by quote overlays.
///
/// Overlays only ever ask for an index into a non-empty list. Tests substitute a scripted
/// chooser to make the chosen quote and colors exact.
pub trait Chooser {
    /// Return an index in `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<C: Chooser + ?Sized> Chooser for &mut C {
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}

/// Pick one element of `items`, or `None` when it is empty.
///
/// Out-of-range answers from the chooser are clamped to the last element.
pub fn choose<'a, T>(chooser: &mut dyn Chooser, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let i = chooser.choose_index(items.len()).min(items.len() - 1);
    items.get(i)
}

/// [`Chooser`] backed by any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngChooser<R>(pub R);

impl RngChooser<StdRng> {
    /// Reproducible picks for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Picks seeded from the operating system.
    pub fn from_os() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl<R: Rng> Chooser for RngChooser<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// [`Chooser`] that delegates to a closure.
pub struct FnChooser<F>(pub F);

impl<F: FnMut(usize) -> usize> FnChooser<F> {
    /// Wrap `f`, which receives the list length and returns the picked index.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: FnMut(usize) -> usize> Chooser for FnChooser<F> {
    fn choose_index(&mut self, len: usize) -> usize {
        (self.0)(len)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/chooser.rs"]
mod tests;
