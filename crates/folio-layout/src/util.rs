#![forbid(unsafe_code)]

//! Nearest-match search.

/// Index of the value closest to `target`.
///
/// Ties go to the lowest index: a later candidate only wins when it is
/// strictly closer. An empty slice yields `0`.
#[must_use]
pub fn nearest(values: &[f32], target: f32) -> usize {
    let Some(first) = values.first() else {
        return 0;
    };

    let mut index = 0;
    let mut distance = (target - first).abs();

    for (i, value) in values.iter().enumerate().skip(1) {
        let d = (target - value).abs();
        if d < distance {
            distance = d;
            index = i;
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(nearest(&[], 5.0), 0);
    }

    #[test]
    fn single_value() {
        assert_eq!(nearest(&[3.0], -100.0), 0);
    }

    #[test]
    fn picks_closest() {
        let xs = [0.0, 10.0, 20.0, 30.0];
        assert_eq!(nearest(&xs, 12.0), 1);
        assert_eq!(nearest(&xs, 18.0), 2);
        assert_eq!(nearest(&xs, 99.0), 3);
        assert_eq!(nearest(&xs, -4.0), 0);
    }

    #[test]
    fn tie_goes_to_lower_index() {
        let xs = [0.0, 10.0, 20.0];
        assert_eq!(nearest(&xs, 5.0), 0);
        assert_eq!(nearest(&xs, 15.0), 1);
    }

    #[test]
    fn duplicates_keep_first() {
        assert_eq!(nearest(&[1.0, 4.0, 4.0], 4.0), 1);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn result_is_minimal_distance(
            values in proptest::collection::vec(-1000.0f32..1000.0, 1..40),
            target in -1200.0f32..1200.0,
        ) {
            let i = nearest(&values, target);
            prop_assert!(i < values.len());
            let best = (target - values[i]).abs();
            for (j, v) in values.iter().enumerate() {
                let d = (target - v).abs();
                prop_assert!(best <= d);
                if j < i {
                    // anything earlier must be strictly farther
                    prop_assert!(d > best);
                }
            }
        }
    }
}
