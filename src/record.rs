//! The book record type.

use std::fmt;

use crate::error::BookError;

/// Number of comma-separated fields in a well-formed input line.
pub const FIELD_COUNT: usize = 7;

/// One book parsed from an input line.
///
/// Fields are private; a record is built once and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    id: i32,
    title: String,
    author: String,
    publisher: String,
    publication_year: i32,
    page_count: i32,
    price: f64,
}

impl BookRecord {
    /// Build a record from already-validated values.
    pub fn new(
        id: i32,
        title: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
        publication_year: i32,
        page_count: i32,
        price: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            publisher: publisher.into(),
            publication_year,
            page_count,
            price,
        }
    }

    /// Parse one line of `id,title,author,publisher,year,pages,price`.
    ///
    /// Returns `Ok(None)` when the line does not split into exactly
    /// [`FIELD_COUNT`] fields. A line with the right field count but a bad
    /// number is an error; `line_number` is 1-based and only used for the
    /// error message.
    pub fn from_line(line: &str, line_number: usize) -> Result<Option<Self>, BookError> {
        let mut fields: Vec<&str> = line.split(',').collect();
        // Trailing empty fields do not count, so "a,b,c,d,e,f,g," still has seven.
        while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        if fields.len() != FIELD_COUNT {
            return Ok(None);
        }

        let fields: Vec<&str> = fields.iter().map(|f| f.trim()).collect();
        let id = parse_field::<i32>(fields[0], "id", line_number)?;
        let publication_year = parse_field::<i32>(fields[4], "publication year", line_number)?;
        let page_count = parse_field::<i32>(fields[5], "page count", line_number)?;
        let price = parse_field::<f64>(fields[6], "price", line_number)?;

        Ok(Some(Self::new(
            id,
            fields[1],
            fields[2],
            fields[3],
            publication_year,
            page_count,
            price,
        )))
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn page_count(&self) -> i32 {
        self.page_count
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

fn parse_field<T>(value: &str, field: &'static str, line: usize) -> Result<T, BookError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse().map_err(|e: T::Err| BookError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " ==== Book #{} ====", self.id)?;
        writeln!(f, " - Title: {}", self.title)?;
        writeln!(f, " - Author: {}", self.author)?;
        writeln!(f, " - Publisher: {}", self.publisher)?;
        writeln!(f, " - Year: {}", self.publication_year)?;
        writeln!(f, " - Pages: {}", self.page_count)?;
        write!(f, " - Price: {}", format_price(self.price))
    }
}

/// Render a price the way a JVM `double` prints.
///
/// Plain decimal with at least one fractional digit inside `[1e-3, 1e7)`,
/// otherwise scientific with an upper-case `E` (`1.2345678E7`).
fn format_price(price: f64) -> String {
    if price.is_nan() {
        return "NaN".to_string();
    }
    if price.is_infinite() {
        return if price > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = price.abs();
    if price == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // Debug keeps the fractional part: 10.0, not 10.
        return format!("{price:?}");
    }

    let sci = format!("{price:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if mantissa.contains('.') => format!("{mantissa}E{exp}"),
        Some((mantissa, exp)) => format!("{mantissa}.0E{exp}"),
        None => sci,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> BookRecord {
        BookRecord::from_line("1, Dune, Frank Herbert, Ace Books, 1965, 412, 9.99", 1)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_from_line_trims_fields() {
        let book = dune();
        assert_eq!(book.id(), 1);
        assert_eq!(book.title(), "Dune");
        assert_eq!(book.author(), "Frank Herbert");
        assert_eq!(book.publisher(), "Ace Books");
        assert_eq!(book.publication_year(), 1965);
        assert_eq!(book.page_count(), 412);
        assert_eq!(book.price(), 9.99);
    }

    #[test]
    fn test_display_contains_fields() {
        let text = dune().to_string();
        assert!(text.contains("Dune"));
        assert!(text.contains("Frank Herbert"));
        assert!(text.contains("1965"));
    }

    #[test]
    fn test_display_field_order() {
        let text = dune().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                " ==== Book #1 ====",
                " - Title: Dune",
                " - Author: Frank Herbert",
                " - Publisher: Ace Books",
                " - Year: 1965",
                " - Pages: 412",
                " - Price: 9.99",
            ]
        );
    }

    #[test]
    fn test_display_whole_price_keeps_fraction() {
        let book = BookRecord::new(7, "T", "A", "P", 2001, 100, 10.0);
        assert!(book.to_string().ends_with(" - Price: 10.0"));
    }

    #[test]
    fn test_price_scientific_outside_plain_range() {
        assert_eq!(format_price(12345678.0), "1.2345678E7");
        assert_eq!(format_price(1e7), "1.0E7");
        assert_eq!(format_price(0.0001), "1.0E-4");
        assert_eq!(format_price(-25000000.5), "-2.50000005E7");
        assert_eq!(format_price(9999999.0), "9999999.0");
        assert_eq!(format_price(0.001), "0.001");
        assert_eq!(format_price(0.0), "0.0");
        assert_eq!(format_price(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_display_large_price() {
        let book = BookRecord::new(8, "T", "A", "P", 2001, 100, 12345678.0);
        assert!(book.to_string().ends_with(" - Price: 1.2345678E7"));
    }

    #[test]
    fn test_wrong_field_count_is_skipped() {
        assert_eq!(BookRecord::from_line("2,BadBook,OnlyFourFields", 1).unwrap(), None);
        assert_eq!(BookRecord::from_line("", 1).unwrap(), None);
        assert_eq!(
            BookRecord::from_line("1,A,B,C,1999,10,1.0,extra", 1).unwrap(),
            None
        );
    }

    #[test]
    fn test_trailing_empty_field_ignored() {
        let book = BookRecord::from_line("3,Emma,Jane Austen,Penguin,1815,474,7.5,", 1)
            .unwrap()
            .unwrap();
        assert_eq!(book.price(), 7.5);
    }

    #[test]
    fn test_bad_number_with_seven_fields_is_error() {
        let err = BookRecord::from_line("x,Dune,Frank Herbert,Ace,1965,412,9.99", 4).unwrap_err();
        match err {
            BookError::InvalidNumber { line, field, value, .. } => {
                assert_eq!(line, 4);
                assert_eq!(field, "id");
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_price_is_error() {
        let err = BookRecord::from_line("1,Dune,Frank Herbert,Ace,1965,412,cheap", 1).unwrap_err();
        assert!(matches!(err, BookError::InvalidNumber { field: "price", .. }));
    }

    #[test]
    fn test_year_out_of_range_is_error() {
        let err =
            BookRecord::from_line("1,Dune,Frank Herbert,Ace,99999999999,412,9.99", 1).unwrap_err();
        assert!(matches!(
            err,
            BookError::InvalidNumber {
                field: "publication year",
                ..
            }
        ));
    }
}
