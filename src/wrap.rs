/*

    Greedy word wrapping for the on-scene annotation text.

    Kept free of any rendering concern so the contract is easy
    to test: no produced line exceeds max_width characters
    (words plus separating spaces) unless a single word alone is
    longer than max_width, in which case that word gets its own
    line unmodified.

    @date: 24 Nov, 2025
    @author: bartu
*/

/// Wrap text so that no line exceeds max_width characters, packing
/// words greedily. Joining the result lines with single spaces gives
/// back the original word sequence; empty lines are never produced.
pub fn wrap(text: &str, max_width: usize) -> String {
    let mut wrapped_lines: Vec<String> = Vec::new();
    let mut current_line: Vec<&str> = Vec::new();
    let mut current_length = 0; // word characters only, separating spaces counted below

    for word in text.split_whitespace() {
        // current_line.len() counts the spaces the joined line would need
        // once this word is appended
        if !current_line.is_empty() && current_length + word.len() + current_line.len() > max_width {
            wrapped_lines.push(current_line.join(" "));
            current_line.clear();
            current_length = 0;
        }
        current_length += word.len();
        current_line.push(word);
    }

    if !current_line.is_empty() {
        wrapped_lines.push(current_line.join(" "));
    }
    wrapped_lines.join("\n")
}
