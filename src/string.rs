//! Small string helpers shared across the crate.

/// The longest string in the slice, or `None` when empty.
///
/// Ties resolve to the earliest candidate.
pub fn longest<S: AsRef<str>>(candidates: &[S]) -> Option<&str> {
    candidates.iter().map(AsRef::as_ref).fold(None, |best, candidate| match best {
        Some(current) if candidate.len() <= current.len() => best,
        _ => Some(candidate),
    })
}

/// Greedily wrap `paragraph` into lines of at most `width` characters.
///
/// Widths count characters, not bytes.  Words longer than `width` are
/// hyphenated across lines.  Runs of whitespace collapse; a `width` of `0`
/// or `1` is rounded up to `2` so hyphenation always has room.
pub fn wrap(paragraph: &str, width: usize) -> Vec<String> {
    let width = std::cmp::max(width, 2);
    let mut lines = Vec::default();
    let mut current = String::default();
    let mut current_len = 0;

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            let word_len = word.chars().count();

            if current.is_empty() {
                current_len = hyphenate(width, &mut lines, &mut current, word);
            } else if current_len + word_len + 1 <= width {
                current.push(' ');
                current.push_str(word);
                current_len += word_len + 1;
            } else {
                lines.push(current);
                current = String::default();
                current_len = hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Splits on character counts, so multi-byte text never lands mid-boundary.
/// Returns the character length of the trailing fragment left in `current`.
fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) -> usize {
    let increment = width - 1;
    let chars: Vec<char> = word.chars().collect();
    let mut left = 0;
    let mut right = increment;

    while right + 1 < chars.len() {
        let mut line: String = chars[left..right].iter().collect();
        line.push('-');
        lines.push(line);
        left += increment;
        right += increment;
    }

    current.extend(&chars[left..]);
    chars.len() - left
}
