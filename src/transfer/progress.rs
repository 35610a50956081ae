//! Transfer progress tracking

/// Byte accounting for one transfer.
///
/// A sized transfer is complete once `completed >= expected`. The final
/// chunk may overshoot the declared size and is kept whole. An open-ended
/// transfer (LIST) never completes by count; it ends when the peer closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    expected: Option<u64>,
    completed: u64,
}

impl Transfer {
    pub fn sized(expected: u64) -> Self {
        Self {
            expected: Some(expected),
            completed: 0,
        }
    }

    pub fn open_ended() -> Self {
        Self {
            expected: None,
            completed: 0,
        }
    }

    pub fn record(&mut self, bytes: usize) {
        self.completed += bytes as u64;
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_some_and(|expected| self.completed >= expected)
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }

    pub fn expected(&self) -> Option<u64> {
        self.expected
    }
}
