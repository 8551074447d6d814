use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…`
/// if truncated. Cuts on grapheme boundaries so wide characters and emoji
/// are never split.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }

    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    let mut graphemes = s[byte_offset..].grapheme_indices(true);
    graphemes.next();
    Some(graphemes.next().map_or(s.len(), |(i, _)| byte_offset + i))
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    s[..byte_offset]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
}

/// Start of the word at or before `byte_offset` (whitespace-delimited).
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let mut boundary = 0;
    let mut in_word = false;
    for (i, g) in s[..byte_offset].grapheme_indices(true) {
        let is_space = g.chars().all(char::is_whitespace);
        if !is_space && !in_word {
            boundary = i;
        }
        in_word = !is_space;
    }
    boundary
}

/// Start of the word after `byte_offset`, or the end of the string.
pub fn word_boundary_right(s: &str, byte_offset: usize) -> usize {
    let mut past_word = false;
    for (i, g) in s[byte_offset..].grapheme_indices(true) {
        let is_space = g.chars().all(char::is_whitespace);
        if is_space {
            past_word = true;
        } else if past_word {
            return byte_offset + i;
        }
    }
    s.len()
}
