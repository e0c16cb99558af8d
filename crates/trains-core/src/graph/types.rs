use serde::Serialize;

/// Edge weight and accumulated walk length
pub type Distance = u64;

/// Inclusive bounds on the number of stops (edges) in a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StopRange {
    pub min: usize,
    pub max: usize,
}

impl StopRange {
    pub fn new(min: usize, max: usize) -> Self {
        StopRange { min, max }
    }

    /// Walks with exactly `stops` edges
    pub fn exactly(stops: usize) -> Self {
        StopRange::new(stops, stops)
    }

    /// Walks with between one and `max` edges
    pub fn up_to(max: usize) -> Self {
        StopRange::new(1, max)
    }

    pub fn contains(&self, stops: usize) -> bool {
        stops >= self.min && stops <= self.max
    }
}

impl std::fmt::Display for StopRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.min == self.max {
            write!(f, "exactly {}", self.min)
        } else {
            write!(f, "{}..={}", self.min, self.max)
        }
    }
}
