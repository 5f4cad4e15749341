//! Helper algorithms for the `linear_algebra` module.
use itertools::{EitherOrBoth, Itertools};

/// Positions of the common values of two sorted index sequences.
///
/// # Arguments
///
/// * `left`: Indices sorted ascending, without duplicates.
/// * `right`: Indices sorted ascending, without duplicates.
///
/// # Return value
///
/// For every index present in both sequences, in ascending order, the pair of positions at which
/// that index occurs in `left` and `right`.
pub(super) fn intersect_sorted(left: &[usize], right: &[usize]) -> Vec<(usize, usize)> {
    debug_assert!(left.is_sorted());
    debug_assert!(right.is_sorted());

    left.iter().enumerate()
        .merge_join_by(right.iter().enumerate(), |(_, i), (_, j)| i.cmp(j))
        .filter_map(|pair| match pair {
            EitherOrBoth::Both((left_position, _), (right_position, _)) => Some((left_position, right_position)),
            EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => None,
        })
        .collect()
}

/// Find the line that a position in the compressed value array belongs to.
///
/// # Arguments
///
/// * `offsets`: Non-decreasing prefix counts, `offsets[k]` being the number of values stored in
/// lines `0..k`.
/// * `position`: Position in the value array, strictly smaller than the last offset.
///
/// # Return value
///
/// The unique `k` with `offsets[k] <= position < offsets[k + 1]`.
#[cfg(feature = "rayon")]
pub(super) fn line_of_position(offsets: &[usize], position: usize) -> usize {
    debug_assert!(offsets.last().is_some_and(|&total| position < total));

    offsets.partition_point(|&offset| offset <= position) - 1
}

/// Advance a line cursor until it covers a position in the compressed value array.
///
/// Used when scanning positions in increasing order, such that the total cost of all calls is
/// linear in the number of lines.
pub(super) fn advance_to_position(offsets: &[usize], mut line: usize, position: usize) -> usize {
    debug_assert!(offsets[line] <= position);

    while offsets[line + 1] <= position {
        line += 1;
    }

    line
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::utilities::{advance_to_position, intersect_sorted};
    #[cfg(feature = "rayon")]
    use crate::data::linear_algebra::utilities::line_of_position;

    #[test]
    fn test_intersect_sorted() {
        let none: Vec<(usize, usize)> = Vec::new();
        assert_eq!(intersect_sorted(&[], &[]), none);
        assert_eq!(intersect_sorted(&[0, 1], &[]), none);
        assert_eq!(intersect_sorted(&[0, 2, 5], &[1, 3, 4]), none);
        assert_eq!(intersect_sorted(&[0, 2, 5], &[2, 3, 5]), vec![(1, 0), (2, 2)]);
        assert_eq!(intersect_sorted(&[7], &[0, 1, 2, 7]), vec![(0, 3)]);
    }

    #[test]
    #[cfg(feature = "rayon")]
    fn test_line_of_position() {
        // Lines with 2, 0, 1 and 3 values
        let offsets = [0, 2, 2, 3, 6];
        assert_eq!(line_of_position(&offsets, 0), 0);
        assert_eq!(line_of_position(&offsets, 1), 0);
        assert_eq!(line_of_position(&offsets, 2), 2);
        assert_eq!(line_of_position(&offsets, 3), 3);
        assert_eq!(line_of_position(&offsets, 5), 3);
    }

    #[test]
    fn test_advance_to_position() {
        let offsets = [0, 2, 2, 3, 6];
        assert_eq!(advance_to_position(&offsets, 0, 1), 0);
        assert_eq!(advance_to_position(&offsets, 0, 2), 2);
        assert_eq!(advance_to_position(&offsets, 2, 4), 3);
    }
}
