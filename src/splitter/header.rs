/// Stamp a segment with its position, e.g. `*** Part 2 of 5 ***`.
///
/// `index` is 0-based; the rendered part number is 1-based. The last part
/// carries a `- Final` marker so the receiving end knows nothing follows.
pub fn add_segment_header(segment: &str, index: usize, total: usize) -> String {
    let header = if index + 1 == total {
        format!("*** Part {} of {} - Final ***\n\n", index + 1, total)
    } else {
        format!("*** Part {} of {} ***\n\n", index + 1, total)
    };

    header + segment
}
