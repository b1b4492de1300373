//! Problem-file parser.
//!
//! The first line is a header and is ignored. Every other non-blank line
//! reads `<id> (<x1>,<y1>) (<x2>,<y2>)`: a pickup point and a drop-off point.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, ParseError, ParseErrorKind};
use crate::models::{LoadCatalog, LoadId, Point};

/// Parses a point literal such as `(-12.5,40)`.
///
/// Returns `None` unless the literal is parenthesized, holds exactly two
/// comma-separated coordinates, and both are finite reals.
///
/// # Examples
///
/// ```
/// use load_router::io::parse_point;
/// use load_router::models::Point;
///
/// assert_eq!(parse_point("(-12.5,40)"), Some(Point::new(-12.5, 40.0)));
/// assert_eq!(parse_point("-12.5,40"), None);
/// ```
pub fn parse_point(raw: &str) -> Option<Point> {
    let inner = raw.strip_prefix('(')?.strip_suffix(')')?;
    let (x, y) = inner.split_once(',')?;
    let x: f64 = x.trim().parse().ok()?;
    let y: f64 = y.trim().parse().ok()?;
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Point::new(x, y))
}

/// Parses one load line. `line_no` is 1-based and only used for errors.
pub fn parse_line(line_no: usize, line: &str) -> Result<(LoadId, Point, Point), ParseError> {
    let err = |kind| ParseError::new(line_no, kind);

    let mut fields = line.split_whitespace();
    let (id, start, end) = match (fields.next(), fields.next(), fields.next()) {
        (Some(id), Some(start), Some(end)) => (id, start, end),
        _ => return Err(err(ParseErrorKind::MissingField)),
    };
    if fields.next().is_some() {
        return Err(err(ParseErrorKind::ExtraField));
    }

    let id = match id.parse::<LoadId>() {
        Ok(id) => id,
        Err(_) => return Err(err(ParseErrorKind::InvalidId(id.to_string()))),
    };
    let start = point_field(line_no, start)?;
    let end = point_field(line_no, end)?;
    Ok((id, start, end))
}

fn point_field(line_no: usize, raw: &str) -> Result<Point, ParseError> {
    parse_point(raw).ok_or_else(|| {
        let kind = ParseErrorKind::InvalidPoint(raw.to_string());
        ParseError::new(line_no, kind)
    })
}

/// Parses a whole problem into a catalog measured against `depot`.
///
/// # Examples
///
/// ```
/// use load_router::io::parse_problem;
/// use load_router::models::Point;
///
/// let text = "loadNumber pickup dropoff\n1 (0,3) (4,3)\n2 (4,0) (0,0)\n";
/// let catalog = parse_problem(text, Point::ORIGIN).unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert!((catalog.loads()[0].start_to_end() - 4.0).abs() < 1e-10);
/// ```
pub fn parse_problem(text: &str, depot: Point) -> Result<LoadCatalog, ParseError> {
    let mut builder = LoadCatalog::builder(depot);
    for (idx, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let (id, start, end) = parse_line(line_no, line)?;
        builder
            .add(id, start, end)
            .map_err(|e| ParseError::new(line_no, ParseErrorKind::Catalog(e)))?;
    }
    Ok(builder.build())
}

/// Reads and parses a problem file.
pub fn read_problem(path: impl AsRef<Path>, depot: Point) -> Result<LoadCatalog, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_problem(&text, depot)?;
    debug!(path = %path.display(), loads = catalog.len(), "loaded problem");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("(1.5,-2)"), Some(Point::new(1.5, -2.0)));
        assert_eq!(parse_point("(0,0)"), Some(Point::ORIGIN));
        assert_eq!(parse_point("(1e2,3.25)"), Some(Point::new(100.0, 3.25)));
    }

    #[test]
    fn test_parse_point_malformed() {
        assert_eq!(parse_point("(1.5;2)"), None);
        assert_eq!(parse_point("1.5,2)"), None);
        assert_eq!(parse_point("(1.5,2"), None);
        assert_eq!(parse_point("(a,2)"), None);
        assert_eq!(parse_point("(1,2,3)"), None);
        assert_eq!(parse_point("()"), None);
        assert_eq!(parse_point("(inf,2)"), None);
        assert_eq!(parse_point("(NaN,2)"), None);
    }

    #[test]
    fn test_parse_line() {
        let (id, start, end) = parse_line(2, "7 (-9.1,4) (3,25.5)").expect("valid line");
        assert_eq!(id, 7);
        assert_eq!(start, Point::new(-9.1, 4.0));
        assert_eq!(end, Point::new(3.0, 25.5));
    }

    #[test]
    fn test_parse_line_errors() {
        assert_eq!(
            parse_line(3, "1 (0,0)").unwrap_err(),
            ParseError::new(3, ParseErrorKind::MissingField)
        );
        assert_eq!(
            parse_line(3, "1 (0,0) (1,1) (2,2)").unwrap_err(),
            ParseError::new(3, ParseErrorKind::ExtraField)
        );
        assert_eq!(
            parse_line(3, "x (0,0) (1,1)").unwrap_err(),
            ParseError::new(3, ParseErrorKind::InvalidId("x".into()))
        );
        assert_eq!(
            parse_line(3, "1 (0,0) (1,q)").unwrap_err(),
            ParseError::new(3, ParseErrorKind::InvalidPoint("(1,q)".into()))
        );
    }

    #[test]
    fn test_header_only() {
        let catalog = parse_problem("loadNumber pickup dropoff\n", Point::ORIGIN).expect("valid");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let catalog = parse_problem("", Point::ORIGIN).expect("valid");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_header_is_never_parsed() {
        let text = "1 (0,0) (1,1)\n2 (3,3) (4,4)\n";
        let catalog = parse_problem(text, Point::ORIGIN).expect("valid");
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(2).is_some());
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let text = "loadNumber pickup dropoff\r\n1 (0,0) (1,1)\r\n\r\n2 (3,3) (4,4)\r\n\n";
        let catalog = parse_problem(text, Point::ORIGIN).expect("valid");
        let ids: Vec<_> = catalog.loads().iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_duplicate_id_reports_line() {
        let text = "header\n1 (0,0) (1,1)\n1 (3,3) (4,4)\n";
        let err = parse_problem(text, Point::ORIGIN).unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(err.kind, ParseErrorKind::Catalog(_)));
    }

    #[test]
    fn test_error_line_numbers_count_header() {
        let text = "header\n1 (0,0) (1,1)\n\n2 (3,3) (4,x)\n";
        let err = parse_problem(text, Point::ORIGIN).unwrap_err();
        assert_eq!(err.line, 4);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_problem("/nonexistent/problem.txt", Point::ORIGIN).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
