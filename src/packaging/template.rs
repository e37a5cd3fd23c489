use std::collections::BTreeMap;

/// Replace every `<find>KEY<find>` token whose KEY is in `values`.
///
/// Tokens with an unknown key are copied through unchanged and scanning resumes
/// right after their opening delimiter, so a stray delimiter never swallows a
/// following real token.
pub fn substitute(template: &str, find: char, values: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let width = find.len_utf8();

    while let Some(start) = rest.find(find) {
        out.push_str(&rest[..start]);
        let after = &rest[start + width..];

        if let Some(end) = after.find(find) {
            if let Some(value) = values.get(&after[..end]) {
                out.push_str(value);
                rest = &after[end + width..];
                continue;
            }
        }

        out.push(find);
        rest = after;
    }

    out.push_str(rest);
    out
}

/// Drop zero padding from every run of digits in a file name.
///
/// `part007.png` becomes `part7.png`. A run made only of zeros is kept as-is
/// (`part000.png` stays `part000.png`), and zeros after the first non-zero
/// digit are never touched (`part1007.png` is unchanged).
pub fn unpad_numbers(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_ascii_digit() {
            out.push(c);
            continue;
        }

        let mut run = String::from(c);
        while let Some(&next) = chars.peek() {
            if !next.is_ascii_digit() {
                break;
            }
            run.push(next);
            chars.next();
        }

        match run.find(|d: char| d != '0') {
            Some(first) => out.push_str(&run[first..]),
            None => out.push_str(&run),
        }
    }

    out
}
