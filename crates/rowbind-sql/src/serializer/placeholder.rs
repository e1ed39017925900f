use super::{Formatter, ToSql};

/// A positional `?` parameter.
pub(super) struct Placeholder;

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('?');
    }
}

/// Assigns a column a positional parameter: `column = ?`.
pub(super) struct Assign<'a>(pub(super) &'a str);

impl ToSql for Assign<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0 " = " Placeholder);
    }
}

/// Counts the `?` placeholders in a caller-supplied clause.
///
/// Question marks inside single-quoted string literals and double-quoted
/// identifiers are not placeholders. A doubled quote inside a quoted section
/// is an escaped quote and does not end it.
pub fn count_placeholders(clause: &str) -> usize {
    let mut count = 0;
    let mut quote = None;

    for ch in clause.chars() {
        match quote {
            // A doubled quote closes and immediately reopens the section, so
            // it needs no special handling.
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None if ch == '\'' || ch == '"' => quote = Some(ch),
            None if ch == '?' => count += 1,
            None => {}
        }
    }

    count
}
