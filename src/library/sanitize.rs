/// Replacement for characters outside 7-bit printable ASCII.
pub const PLACEHOLDER: char = '.';

/// Replace every character at or above code point 127 with `placeholder`.
///
/// One character in, one character out, so positions and the character
/// count are preserved.
pub fn sanitize(text: &str, placeholder: char) -> String {
    text.chars()
        .map(|c| if (c as u32) < 127 { c } else { placeholder })
        .collect()
}
