use super::is_separator_line;

/// Split text into segments of roughly `max_len` characters each, preferring
/// to cut right after a separator line.
///
/// Lines are accumulated in order and the limit is only checked at line
/// boundaries, so a single line longer than `max_len` is never split mid-line.
/// When a cut is forced and the incoming line is itself a separator, the
/// separator closes the current segment instead of opening the next one.
pub fn split_by_max_length(text: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);
    let mut segments = Vec::new();

    if text.is_empty() {
        return segments;
    }

    let mut current = String::new();
    let mut current_chars = 0;

    for line in text.split('\n') {
        let line_chars = line.chars().count();

        if current_chars + line_chars + 1 > max_len && !current.is_empty() {
            if is_separator_line(line) {
                // Keep the separator as the closing line of this segment
                current.push_str(line);
                current.push('\n');
                segments.push(current);
                current = String::new();
                current_chars = 0;
            } else {
                segments.push(current);
                current = format!("{}\n", line);
                current_chars = line_chars + 1;
            }
        } else {
            current.push_str(line);
            current.push('\n');
            current_chars += line_chars + 1;
        }
    }

    // Flush the remainder
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Split text into exactly `count` segments.
///
/// A first pass cuts only on separator lines once the running length reaches
/// `total_chars / count`. If that produces too few segments, the longest one
/// is repeatedly split at the last newline before its character midpoint
/// (ties go to the lowest index); if it produces too many, trailing segments
/// are folded back into their predecessor.
pub fn split_by_segment_count(text: &str, count: usize) -> Vec<String> {
    let count = count.max(1);

    if text.is_empty() {
        return Vec::new();
    }

    let total_chars = text.chars().count();
    let target = total_chars / count;

    // Phase 1: approximate pass, cutting only on separator lines
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for line in text.split('\n') {
        current.push_str(line);
        current.push('\n');
        current_chars += line.chars().count() + 1;

        if segments.len() + 1 < count && current_chars >= target && is_separator_line(line) {
            segments.push(current);
            current = String::new();
            current_chars = 0;
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    // Phase 2: too few segments, force-split the longest until the count fits
    while segments.len() < count {
        let index = match longest_segment_index(&segments) {
            Some(index) => index,
            None => break,
        };
        let segment = segments.remove(index);
        let (left, right) = split_near_midpoint(&segment);
        segments.insert(index, left);
        segments.insert(index + 1, right);
    }

    // Phase 3: too many segments, fold the tail back in
    merge_surplus(&mut segments, count);

    segments
}

/// Index of the longest segment by character count. Ties go to the lowest
/// index, so correction pressure stays near the front of the sequence.
fn longest_segment_index(segments: &[String]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;

    for (index, segment) in segments.iter().enumerate() {
        let chars = segment.chars().count();
        match best {
            Some((_, best_chars)) if chars <= best_chars => {}
            _ => best = Some((index, chars)),
        }
    }

    best.map(|(index, _)| index)
}

/// Split a segment at the last newline before its character midpoint. The
/// newline stays at the head of the right half. When the first half contains
/// no newline at all, split at the midpoint itself.
fn split_near_midpoint(segment: &str) -> (String, String) {
    let mid = midpoint_offset(segment);

    match segment[..mid].rfind('\n') {
        Some(newline) => (
            segment[..newline].to_string(),
            segment[newline..].to_string(),
        ),
        None => (segment[..mid].to_string(), segment[mid..].to_string()),
    }
}

/// Byte offset of the character midpoint, always on a char boundary
fn midpoint_offset(segment: &str) -> usize {
    let half = segment.chars().count() / 2;
    segment
        .char_indices()
        .nth(half)
        .map(|(offset, _)| offset)
        .unwrap_or(segment.len())
}

/// Fold trailing segments into their predecessor, joined by an extra newline,
/// until only `count` remain
fn merge_surplus(segments: &mut Vec<String>, count: usize) {
    while segments.len() > count {
        if let Some(last) = segments.pop() {
            if let Some(previous) = segments.last_mut() {
                previous.push('\n');
                previous.push_str(&last);
            }
        }
    }
}
