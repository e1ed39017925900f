use super::{Formatter, ToSql};

/// An optional trailing clause such as `WHERE ...`. Nothing is written when
/// the clause is absent or blank.
pub(super) struct Clause<'a> {
    keyword: &'static str,
    text: Option<&'a str>,
}

impl<'a> Clause<'a> {
    pub(super) fn new(keyword: &'static str, text: Option<&'a str>) -> Self {
        Clause { keyword, text }
    }
}

impl ToSql for Clause<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let Some(text) = self.text.map(str::trim).filter(|text| !text.is_empty()) else {
            return;
        };

        fmt!(f, " " self.keyword " " text);
    }
}
