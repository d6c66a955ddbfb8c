use serde::Serialize;

/// both players' worth of some T.
///
/// constructed once at the entry point: a single T broadcasts to a
/// symmetric pair, a 2-tuple or array keeps the players distinct. the
/// rest of the crate works with a fixed pair and never re-checks arity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pair<T>(T, T);

impl<T> Pair<T> {
    /// player one's entry.
    pub fn one(&self) -> &T {
        &self.0
    }
    /// player two's entry.
    pub fn two(&self) -> &T {
        &self.1
    }
    /// apply f to both entries.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Pair<U> {
        Pair(f(&self.0), f(&self.1))
    }
    /// exchange player roles.
    pub fn swap(self) -> Self {
        Self(self.1, self.0)
    }
    pub fn into_inner(self) -> (T, T) {
        (self.0, self.1)
    }
}

impl<T: Clone> From<T> for Pair<T> {
    fn from(both: T) -> Self {
        Self(both.clone(), both)
    }
}

impl<T> From<(T, T)> for Pair<T> {
    fn from((one, two): (T, T)) -> Self {
        Self(one, two)
    }
}

impl<T> From<[T; 2]> for Pair<T> {
    fn from([one, two]: [T; 2]) -> Self {
        Self(one, two)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcasts_single_entry() {
        let pair = Pair::from(7);
        assert_eq!(pair.one(), pair.two());
    }

    #[test]
    fn keeps_distinct_entries() {
        let pair: Pair<i32> = Pair::from((1, 2));
        assert_eq!(*pair.one(), 1);
        assert_eq!(*pair.two(), 2);
        let pair: Pair<i32> = Pair::from([3, 4]);
        assert_eq!(*pair.one(), 3);
        assert_eq!(*pair.two(), 4);
    }

    #[test]
    fn maps_and_swaps() {
        let pair = Pair::from((1, 2)).map(|x| x * 10);
        assert_eq!(pair.into_inner(), (10, 20));
        assert_eq!(Pair::from((1, 2)).swap().into_inner(), (2, 1));
    }
}
