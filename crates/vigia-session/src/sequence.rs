/// Monotonic sequence numbers for one call family.
///
/// Only the most recently issued number is current.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequencer {
    issued: u64,
}

impl Sequencer {
    /// Issue the next sequence number. Numbers start at 1.
    pub const fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    #[must_use]
    pub const fn is_current(&self, seq: u64) -> bool {
        seq == self.issued
    }

    /// Last issued number, `0` before the first call.
    #[must_use]
    pub const fn latest(&self) -> u64 {
        self.issued
    }
}
