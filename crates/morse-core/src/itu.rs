//! ITU international Morse table (ITU-R M.1677-1).
//!
//! Letters are stored uppercase, matching [`CaseFold::Upper`](crate::CaseFold).

use crate::table::TableSet;

/// Built-in table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MorseEntry {
    /// Character
    pub ch: char,
    /// Code string (dots and dashes)
    pub code: &'static str,
}

const fn entry(ch: char, code: &'static str) -> MorseEntry {
    MorseEntry { ch, code }
}

/// ITU international table.
///
/// Letters first, then digits, then punctuation.
pub static ITU_TABLE: &[MorseEntry] = &[
    entry('A', ".-"),
    entry('B', "-..."),
    entry('C', "-.-."),
    entry('D', "-.."),
    entry('E', "."),
    entry('F', "..-."),
    entry('G', "--."),
    entry('H', "...."),
    entry('I', ".."),
    entry('J', ".---"),
    entry('K', "-.-"),
    entry('L', ".-.."),
    entry('M', "--"),
    entry('N', "-."),
    entry('O', "---"),
    entry('P', ".--."),
    entry('Q', "--.-"),
    entry('R', ".-."),
    entry('S', "..."),
    entry('T', "-"),
    entry('U', "..-"),
    entry('V', "...-"),
    entry('W', ".--"),
    entry('X', "-..-"),
    entry('Y', "-.--"),
    entry('Z', "--.."),
    entry('0', "-----"),
    entry('1', ".----"),
    entry('2', "..---"),
    entry('3', "...--"),
    entry('4', "....-"),
    entry('5', "....."),
    entry('6', "-...."),
    entry('7', "--..."),
    entry('8', "---.."),
    entry('9', "----."),
    entry('.', ".-.-.-"),
    entry(',', "--..--"),
    entry('?', "..--.."),
    entry('\'', ".----."),
    entry('!', "-.-.--"),
    entry('/', "-..-."),
    entry('(', "-.--."),
    entry(')', "-.--.-"),
    entry('&', ".-..."),
    entry(':', "---..."),
    entry(';', "-.-.-."),
    entry('=', "-...-"),
    entry('+', ".-.-."),
    entry('-', "-....-"),
    entry('_', "..--.-"),
    entry('"', ".-..-."),
    entry('$', "...-..-"),
    entry('@', ".--.-."),
];

impl TableSet {
    /// Build the ITU international table.
    #[must_use]
    pub fn itu() -> Self {
        Self::from_chars(ITU_TABLE.iter().map(|e| (e.ch, e.code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_chars() {
        let table = TableSet::itu();
        assert_eq!(table.code_for('E'), Some("."));
        assert_eq!(table.code_for('T'), Some("-"));
        assert_eq!(table.code_for('e'), None);
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in ITU_TABLE.iter().enumerate() {
            for b in &ITU_TABLE[i + 1..] {
                assert_ne!(a.code, b.code, "{} and {} share a code", a.ch, b.ch);
            }
        }
    }

    #[test]
    fn test_codes_use_dot_dash_only() {
        for e in ITU_TABLE {
            assert!(!e.code.is_empty());
            assert!(e.code.chars().all(|c| c == '.' || c == '-'), "{}", e.ch);
        }
    }

    #[test]
    fn test_char_for_code() {
        let table = TableSet::itu();
        assert_eq!(table.char_for("...---..."), None);
        assert_eq!(table.char_for("..."), Some('S'));
        assert_eq!(table.char_for("-..-."), Some('/'));
    }

    #[test]
    fn test_itu_table_set() {
        let table = TableSet::itu();
        assert_eq!(table.len(), ITU_TABLE.len());
        assert!(table.shadowed().is_empty());
    }
}
