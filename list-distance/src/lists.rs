/// The two location columns as they were read, paired by read order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LocationLists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl LocationLists {
    /// Columns may differ in length; only the common prefix is ever paired.
    pub fn new(left: Vec<i64>, right: Vec<i64>) -> Self {
        Self { left, right }
    }

    pub fn push(&mut self, left: i64, right: i64) {
        self.left.push(left);
        self.right.push(right);
    }

    pub fn left(&self) -> &[i64] {
        &self.left
    }

    pub fn right(&self) -> &[i64] {
        &self.right
    }

    /// Number of positional pairs, i.e. the length of the shorter column.
    pub fn len(&self) -> usize {
        self.left.len().min(self.right.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[tracing::instrument(level = "debug", skip(self), fields(left = self.left.len(), right = self.right.len()))]
    pub fn sort(mut self) -> SortedLists {
        self.left.sort_unstable();
        self.right.sort_unstable();

        SortedLists {
            left: self.left,
            right: self.right,
        }
    }
}

impl Extend<(i64, i64)> for LocationLists {
    fn extend<T: IntoIterator<Item = (i64, i64)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        let len = iter.size_hint().0;

        self.left.reserve(len);
        self.right.reserve(len);

        iter.for_each(|(left, right)| self.push(left, right));
    }
}

impl FromIterator<(i64, i64)> for LocationLists {
    fn from_iter<T: IntoIterator<Item = (i64, i64)>>(iter: T) -> Self {
        let mut lists = Self::default();
        lists.extend(iter);
        lists
    }
}

/// Both columns sorted ascending. Only obtainable through [`LocationLists::sort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedLists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl SortedLists {
    pub fn left(&self) -> &[i64] {
        &self.left
    }

    pub fn right(&self) -> &[i64] {
        &self.right
    }

    /// Sum of `|left[i] - right[i]|` over the overlapping prefix of the columns.
    ///
    /// Each difference fits in a `u64`; the running sum is kept in a `u128` so
    /// full-range `i64` input cannot overflow it.
    pub fn total_distance(&self) -> u128 {
        self.left
            .iter()
            .zip(self.right.iter())
            .map(|(a, b)| u128::from(a.abs_diff(*b)))
            .sum::<u128>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn sample() -> LocationLists {
        [(3, 4), (4, 3), (2, 5), (1, 3), (3, 9), (3, 3)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_sort() {
        let sorted = sample().sort();
        assert_eq!(&[1, 2, 3, 3, 3, 4], sorted.left());
        assert_eq!(&[3, 3, 3, 4, 5, 9], sorted.right());
    }

    #[test]
    fn test_total_distance() {
        assert_eq!(11, sample().sort().total_distance());
    }

    #[rstest]
    #[case(vec![], vec![], 0)]
    #[case(vec![5, 5], vec![5, 5], 0)]
    #[case(vec![7], vec![-2], 9)]
    #[case(vec![i64::MIN], vec![i64::MAX], u128::from(u64::MAX))]
    #[case(vec![i64::MIN, i64::MIN], vec![i64::MAX, i64::MAX], 2 * u128::from(u64::MAX))]
    #[case(vec![i64::MIN; 4], vec![i64::MAX; 4], 4 * u128::from(u64::MAX))]
    #[case(vec![1, 2, 3], vec![10], 9)]
    #[case(vec![4], vec![3, 2, 1], 3)]
    fn test_total_distance_cases(
        #[case] left: Vec<i64>,
        #[case] right: Vec<i64>,
        #[case] expected: u128,
    ) {
        let lists = LocationLists::new(left, right);
        assert_eq!(expected, lists.sort().total_distance());
    }

    #[test]
    fn test_len_uses_shorter_column() {
        let lists = LocationLists::new(vec![1, 2, 3], vec![1]);
        assert_eq!(1, lists.len());
        assert!(!lists.is_empty());
        assert!(LocationLists::new(vec![1], vec![]).is_empty());
    }

    fn pairs() -> impl Strategy<Value = Vec<(i64, i64)>> {
        proptest::collection::vec((-1_000_000i64..1_000_000, -1_000_000i64..1_000_000), 0..64)
    }

    proptest! {
        #[test]
        fn sorted_columns_are_non_decreasing(pairs in pairs()) {
            let sorted = pairs.into_iter().collect::<LocationLists>().sort();
            prop_assert!(sorted.left().windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(sorted.right().windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn total_ignores_pair_order(
            (original, shuffled) in pairs().prop_flat_map(|p| (Just(p.clone()), Just(p).prop_shuffle()))
        ) {
            let expected = original.into_iter().collect::<LocationLists>().sort().total_distance();
            let actual = shuffled.into_iter().collect::<LocationLists>().sort().total_distance();
            prop_assert_eq!(expected, actual);
        }

        #[test]
        fn single_pair_is_absolute_difference(a in any::<i64>(), b in any::<i64>()) {
            let lists: LocationLists = std::iter::once((a, b)).collect();
            prop_assert_eq!(u128::from(a.abs_diff(b)), lists.sort().total_distance());
        }

        #[test]
        fn total_matches_wide_reference_on_full_range(
            pairs in proptest::collection::vec((any::<i64>(), any::<i64>()), 2..32)
        ) {
            let mut left: Vec<i64> = pairs.iter().map(|(l, _)| *l).collect();
            let mut right: Vec<i64> = pairs.iter().map(|(_, r)| *r).collect();
            left.sort_unstable();
            right.sort_unstable();
            let expected = left
                .iter()
                .zip(&right)
                .map(|(l, r)| (i128::from(*l) - i128::from(*r)).unsigned_abs())
                .sum::<u128>();

            let lists: LocationLists = pairs.into_iter().collect();
            prop_assert_eq!(expected, lists.sort().total_distance());
        }
    }
}
