//! Natural (human readable) names derived from camel-case identifiers.

/// Convert a camel-case name into words.
///
/// A space is inserted before an uppercase letter that follows a lowercase
/// letter or digit, before the last capital of an acronym that starts a new
/// word, and before the first digit of a number. The first letter is
/// capitalized.
pub fn natural_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
            continue;
        }
        let prev = chars[i - 1];
        let next = chars.get(i + 1).copied();

        if prev != ' ' && ch != ' ' {
            let upper_after_lower = ch.is_uppercase() && !prev.is_uppercase();
            let acronym_end =
                ch.is_uppercase() && prev.is_uppercase() && next.is_some_and(char::is_lowercase);
            let number_start = ch.is_ascii_digit() && !prev.is_ascii_digit();
            if upper_after_lower || acronym_end || number_start {
                out.push(' ');
            }
        }
        out.push(ch);
    }

    out
}
