use crate::{Float, Point};

#[derive(thiserror::Error, Debug)]
pub enum LoaderError {
    #[error("IO error")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected `x y`, got {content:?}")]
    Parse { line: usize, content: String },
}

/// Loader loads source to a polygon outline.
/// e.g: PlainFileLoader load from file path, one `x y` pair per line
pub trait Loader {
    fn load(&mut self, source: &str) -> Result<Vec<Point>, LoaderError>;
}

/// Loaders can load data from file
#[derive(Default)]
pub struct PlainFileLoader {}

impl Loader for PlainFileLoader {
    fn load(&mut self, path: &str) -> Result<Vec<Point>, LoaderError> {
        let value = std::fs::read_to_string(path)?;
        parse_polygon(&value)
    }
}

/// Parse `x y` lines, blank lines are skipped
pub fn parse_polygon(value: &str) -> Result<Vec<Point>, LoaderError> {
    let mut polygon = vec![];
    for (idx, line) in value.lines().enumerate() {
        if let Some(point) = parse_point(line, idx + 1)? {
            polygon.push(point);
        }
    }
    Ok(polygon)
}

fn parse_point(line: &str, line_no: usize) -> Result<Option<Point>, LoaderError> {
    let mut iter = line.split_whitespace();
    let (x, y) = match (iter.next(), iter.next(), iter.next()) {
        (None, _, _) => return Ok(None),
        (Some(x), Some(y), None) => (x, y),
        _ => return Err(parse_error(line, line_no)),
    };

    match (x.parse::<Float>(), y.parse::<Float>()) {
        (Ok(x), Ok(y)) => Ok(Some(Point::new(x, y))),
        _ => Err(parse_error(line, line_no)),
    }
}

fn parse_error(line: &str, line_no: usize) -> LoaderError {
    LoaderError::Parse {
        line: line_no,
        content: line.to_string(),
    }
}
