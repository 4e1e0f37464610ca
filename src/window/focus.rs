use std::collections::VecDeque;

/// Global focus order across every workspace. The front element is the
/// focused window; cycling rotates the front to the back.
#[derive(Debug, Clone)]
pub struct FocusRing<T: Copy + Eq> {
    order: VecDeque<T>,
}

impl<T: Copy + Eq> Default for FocusRing<T> {
    fn default() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }
}

impl<T: Copy + Eq> FocusRing<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn front(&self) -> Option<T> {
        self.order.front().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, item: T) -> bool {
        self.order.contains(&item)
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.order.iter().copied()
    }

    /// Move `item` to the front, inserting it if absent.
    pub fn raise(&mut self, item: T) {
        self.remove(item);
        self.order.push_front(item);
    }

    pub fn remove(&mut self, item: T) -> bool {
        if let Some(pos) = self.order.iter().position(|x| *x == item) {
            self.order.remove(pos);
            true
        } else {
            false
        }
    }

    /// Rotate one step and return the new front.
    pub fn rotate(&mut self, forward: bool) -> Option<T> {
        if self.order.is_empty() {
            return None;
        }
        if forward {
            self.order.rotate_left(1);
        } else {
            self.order.rotate_right(1);
        }
        self.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(items: &[u8]) -> FocusRing<u8> {
        let mut r = FocusRing::new();
        for item in items.iter().rev() {
            r.raise(*item);
        }
        r
    }

    #[test]
    fn raise_moves_to_front_without_duplicates() {
        let mut r = ring(&[1, 2, 3]);
        r.raise(3);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn rotate_wraps_and_returns_to_start() {
        let mut r = ring(&[1, 2, 3]);
        assert_eq!(r.rotate(true), Some(2));
        assert_eq!(r.rotate(true), Some(3));
        assert_eq!(r.rotate(true), Some(1));
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(r.rotate(false), Some(3));
    }

    #[test]
    fn rotate_empty_is_none() {
        let mut r: FocusRing<u8> = FocusRing::new();
        assert_eq!(r.rotate(true), None);
        assert!(!r.remove(4));
    }
}
