/// Collapse every run of whitespace in `text` into a single ASCII space.
///
/// Runs at the very start or end of the text collapse like any other run,
/// so the result is never trimmed. Applying this to its own output is a
/// no-op.
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_whitespace_run = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace_run {
                collapsed.push(' ');
                in_whitespace_run = true;
            }
        } else {
            collapsed.push(ch);
            in_whitespace_run = false;
        }
    }
    collapsed
}
