/// Source of uniformly distributed decimal digits for number generation.
///
/// Not a cryptographic source; implementations only need to be uniform
/// enough for issuing test-grade card numbers.
pub trait DigitSource {
    /// Returns a digit in `0..=9`.
    fn next_digit(&mut self) -> u8;

    /// Returns an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

pub type DynDigitSource = Box<dyn DigitSource + Send>;
