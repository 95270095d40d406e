//! Normalization of titles and person names used as lookup keys.

/// Collapse runs of whitespace to a single space and title-case every word.
///
/// A cased letter is upper-cased when it follows anything other than a cased
/// letter (start of string, space, apostrophe, digit, CJK...) and lower-cased
/// otherwise, so
/// `"  the   HOBBIT "` becomes `"The Hobbit"` and `"o'neil"` becomes `"O'Neil"`.
pub fn normalize_name(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    title_case(&collapsed)
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_cased = false;

    for c in s.chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if prev_is_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_cased = true;
        } else {
            out.push(c);
            prev_is_cased = false;
        }
    }

    out
}
