/// Decodes the escapes in the interior of a string literal.
///
/// Knows `\n`, `\t`, `\r`, `\\`, `\0` and `\xHH`. Anything else, including a
/// trailing backslash, is kept as written.
pub fn unescape(raw: &str) -> String {
    let mut result = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => {
                result.push('\n');
                chars.next();
            }
            Some('t') => {
                result.push('\t');
                chars.next();
            }
            Some('r') => {
                result.push('\r');
                chars.next();
            }
            Some('\\') => {
                result.push('\\');
                chars.next();
            }
            Some('0') => {
                result.push('\0');
                chars.next();
            }
            Some('x') => {
                chars.next();
                let mut hex = String::new();

                while hex.len() < 2 {
                    match chars.peek() {
                        Some(digit) if digit.is_ascii_hexdigit() => {
                            hex.push(*digit);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => result.push(byte as char),
                    Err(_) => {
                        result.push_str("\\x");
                        result.push_str(&hex);
                    }
                }
            }
            _ => result.push(ch),
        }
    }

    result
}
