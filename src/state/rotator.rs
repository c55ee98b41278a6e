/// Round-robin cursor over a fixed number of testimonials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotator {
    index: usize,
    len: usize,
}

impl Rotator {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn active(&self) -> usize {
        self.index
    }

    /// Moves to the next entry, wrapping after the last one. Returns the new index.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_in_order_and_wraps() {
        let mut rotator = Rotator::new(5);
        assert_eq!(rotator.active(), 0);
        let seen: Vec<usize> = (0..11).map(|_| rotator.advance()).collect();
        assert_eq!(seen, vec![1, 2, 3, 4, 0, 1, 2, 3, 4, 0, 1]);
    }

    #[test]
    fn empty_list_stays_put() {
        let mut rotator = Rotator::new(0);
        assert_eq!(rotator.advance(), 0);
        assert_eq!(rotator.advance(), 0);
    }
}
