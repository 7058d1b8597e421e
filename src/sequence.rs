//! Checks applied to a user supplied mnemonic sequence.

use std::fmt::Write;

/// Symbols a sequence may not contain. Whitespace is rejected as well.
pub const FORBIDDEN_SYMBOLS: &[char] = &['?', '#', '<', '>', '%', '@', '/', '\\', '~', '`', '"', ':'];

/// The 33 lowercase letters of the Russian alphabet.
pub const CYRILLIC_ALPHABET: &[char] = &[
    'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о', 'п', 'р', 'с',
    'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я',
];

/// Every offending character in scan order, repeats included.
pub fn invalid_characters(sequence: &str) -> Vec<char> {
    sequence
        .chars()
        .filter(|c| FORBIDDEN_SYMBOLS.contains(c) || c.is_whitespace())
        .collect()
}

pub fn has_cyrillic(sequence: &str) -> bool {
    sequence
        .chars()
        .any(|c| c.to_lowercase().any(|lower| CYRILLIC_ALPHABET.contains(&lower)))
}

pub fn has_digit(sequence: &str) -> bool {
    sequence.chars().any(|c| c.is_ascii_digit())
}

/// Renders characters as a bracketed list of quoted literals, e.g. `['~', ' ']`.
pub fn render_char_list(chars: &[char]) -> String {
    let mut out = String::from("[");

    for (i, ch) in chars.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        push_quoted(&mut out, *ch);
    }

    out.push(']');
    out
}

fn push_quoted(out: &mut String, ch: char) {
    let quote = if ch == '\'' { '"' } else { '\'' };
    out.push(quote);

    match ch {
        '\\' => out.push_str("\\\\"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        ' ' => out.push(' '),
        c if c.is_control() || c.is_whitespace() => {
            let code = c as u32;
            // Writing into a String cannot fail.
            let _ = if code < 0x100 {
                write!(out, "\\x{:02x}", code)
            } else if code < 0x10000 {
                write!(out, "\\u{:04x}", code)
            } else {
                write!(out, "\\U{:08x}", code)
            };
        }
        c => out.push(c),
    }

    out.push(quote);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_sequence() {
        assert!(invalid_characters("bYkzi9").is_empty());
        assert!(invalid_characters("").is_empty());
        assert!(invalid_characters("Audi-A4_2010!").is_empty());
    }

    #[test]
    fn test_single_forbidden_symbol() {
        assert_eq!(invalid_characters("qigf~er"), vec!['~']);
    }

    #[test]
    fn test_lone_space() {
        assert_eq!(invalid_characters(" "), vec![' ']);
    }

    #[test]
    fn test_scan_order_keeps_repeats() {
        assert_eq!(
            invalid_characters("a@b#c@\td"),
            vec!['@', '#', '@', '\t']
        );
    }

    #[test]
    fn test_every_forbidden_symbol_detected() {
        for symbol in FORBIDDEN_SYMBOLS {
            let sequence = format!("abc{}def", symbol);
            assert_eq!(invalid_characters(&sequence), vec![*symbol]);
        }
    }

    #[test]
    fn test_unicode_whitespace_rejected() {
        assert_eq!(invalid_characters("a\u{00A0}b"), vec!['\u{00A0}']);
        assert_eq!(invalid_characters("a\u{3000}b"), vec!['\u{3000}']);
    }

    #[test]
    fn test_cyrillic_detection() {
        assert!(has_cyrillic("werПКsf"));
        assert!(has_cyrillic("ё"));
        assert!(has_cyrillic("Ё"));
        assert!(has_cyrillic("abcя"));
        assert!(!has_cyrillic("werPKsf"));
        assert!(!has_cyrillic("Wörlitz"));
    }

    #[test]
    fn test_cyrillic_alphabet_size() {
        assert_eq!(CYRILLIC_ALPHABET.len(), 33);
    }

    #[test]
    fn test_has_digit() {
        assert!(has_digit("abc1"));
        assert!(has_digit("9"));
        assert!(!has_digit("abcdef"));
        assert!(!has_digit(""));
        assert!(!has_digit("٣"));
    }

    #[test]
    fn test_render_char_list() {
        assert_eq!(render_char_list(&['~']), "['~']");
        assert_eq!(render_char_list(&[' ']), "[' ']");
        assert_eq!(render_char_list(&[]), "[]");
        assert_eq!(render_char_list(&['@', '#']), "['@', '#']");
    }

    #[test]
    fn test_render_escapes() {
        assert_eq!(render_char_list(&['\\']), r"['\\']");
        assert_eq!(render_char_list(&['\t', '\n']), r"['\t', '\n']");
        assert_eq!(render_char_list(&['"']), r#"['"']"#);
        assert_eq!(render_char_list(&['\u{000B}']), r"['\x0b']");
        assert_eq!(render_char_list(&['\u{00A0}']), r"['\xa0']");
        assert_eq!(render_char_list(&['\u{2003}']), r"['\u2003']");
    }
}
