// src/runtime/received.rs
//
// Call-count assertions over recorded invocations. A failed assertion panics,
// surfacing through the consuming test harness.

/// Snapshot of recorded calls for one member name at query time.
pub struct Received {
    member: String,
    calls: usize,
}

impl Received {
    pub(crate) fn new(member: &str, calls: usize) -> Self {
        Self {
            member: member.to_string(),
            calls,
        }
    }

    /// Recorded calls for the member.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Assert the member was called exactly once.
    pub fn one(&self) {
        self.exactly(1);
    }

    /// Assert the member was called at least once.
    pub fn at_least_one(&self) {
        if self.calls == 0 {
            panic!("expected at least one call to '{}', got none", self.member);
        }
    }

    /// Assert the member was called exactly `expected` times.
    pub fn exactly(&self, expected: usize) {
        if self.calls != expected {
            panic!(
                "expected {} calls to '{}', got {}",
                expected, self.member, self.calls
            );
        }
    }

    /// Assert the member was called at least `expected` times.
    pub fn at_least(&self, expected: usize) {
        if self.calls < expected {
            panic!(
                "expected at least {} calls to '{}', got {}",
                expected, self.member, self.calls
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_accepts_matching_count() {
        Received::new("Ping", 3).exactly(3);
        Received::new("Ping", 0).exactly(0);
    }

    #[test]
    #[should_panic(expected = "expected 2 calls to 'Ping', got 3")]
    fn exactly_rejects_other_counts() {
        Received::new("Ping", 3).exactly(2);
    }

    #[test]
    fn one_is_exactly_one() {
        Received::new("Ping", 1).one();
    }

    #[test]
    #[should_panic(expected = "expected 1 calls to 'Ping', got 0")]
    fn one_rejects_zero() {
        Received::new("Ping", 0).one();
    }

    #[test]
    fn at_least_one_accepts_any_calls() {
        Received::new("Ping", 1).at_least_one();
        Received::new("Ping", 7).at_least_one();
    }

    #[test]
    #[should_panic(expected = "expected at least one call to 'Ping', got none")]
    fn at_least_one_rejects_zero() {
        Received::new("Ping", 0).at_least_one();
    }

    #[test]
    fn at_least_accepts_equal_or_more() {
        Received::new("Ping", 2).at_least(2);
        Received::new("Ping", 5).at_least(2);
        Received::new("Ping", 0).at_least(0);
    }

    #[test]
    #[should_panic(expected = "expected at least 4 calls to 'Ping', got 3")]
    fn at_least_rejects_fewer() {
        Received::new("Ping", 3).at_least(4);
    }
}
