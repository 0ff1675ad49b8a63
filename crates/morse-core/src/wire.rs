//! Wire format constants.
//!
//! An encoded stream is a run of code strings, each closed by [`DELIMITER`].
//! Two delimiters in a row mark a word boundary. Text without a table entry
//! travels wrapped in [`ESCAPE_OPEN`] / [`ESCAPE_CLOSE`].

/// Closes every code string in an encoded stream.
pub const DELIMITER: char = '/';

/// Word separator in plain text.
pub const SEPARATOR: char = ' ';

/// Line break; dropped by encode when the table has no entry for it.
pub const NEWLINE: char = '\n';

/// Opens an escaped span.
pub const ESCAPE_OPEN: &str = "??";

/// Closes an escaped span.
pub const ESCAPE_CLOSE: &str = "??";
