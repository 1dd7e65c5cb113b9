use std::collections::VecDeque;

/// Most recent sampled totals, oldest first. Appending past capacity evicts
/// the oldest sample.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySeries {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl HistorySeries {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: f64) {
        if self.capacity == 0 {
            return;
        }
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copy of the samples in order, ready for the line chart
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_last_twenty_in_order() {
        let mut history = HistorySeries::new(20);
        for i in 0..25 {
            history.push(i as f64);
        }

        assert_eq!(history.len(), 20);
        let expected: Vec<f64> = (5..25).map(|i| i as f64).collect();
        assert_eq!(history.values(), expected);
    }

    #[test]
    fn test_zero_capacity_stays_empty() {
        let mut history = HistorySeries::new(0);
        history.push(1.0);
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = HistorySeries::new(3);
        history.push(1.0);
        history.push(2.0);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 3);
    }
}
