use crate::models::TextItem;

/// Finds where the label region of a line ends and its value region begins.
///
/// Fragments `[0, k)` form the label and `[k, ..)` the value. The boundary is the
/// first horizontal gap at least as wide as the mean fragment height. `0` means
/// no such gap exists and the line has no label.
pub fn split_index(line: &[&TextItem]) -> usize {
    if line.len() < 2 {
        return 0;
    }

    let reference_height =
        line.iter().map(|item| item.mean_height()).sum::<f64>() / line.len() as f64;

    line.windows(2)
        .position(|pair| horizontal_gap(pair[0], pair[1]) >= reference_height)
        .map(|pos| pos + 1)
        .unwrap_or(0)
}

/// Mean distance between the two leftmost x-coordinates of `right` and the two
/// rightmost x-coordinates of `left`
fn horizontal_gap(left: &TextItem, right: &TextItem) -> f64 {
    let left_xs = left.sorted_xs();
    let right_xs = right.sorted_xs();
    let first = right_xs[0] as f64 - left_xs[2] as f64;
    let second = right_xs[1] as f64 - left_xs[3] as f64;
    (first + second) / 2.0
}
