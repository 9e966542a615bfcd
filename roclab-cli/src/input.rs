//! Price input: CSV with a header row, or a headerless single column.
//!
//! Rows are handed to the caller one at a time, in file order, so the
//! calculator sees the stream exactly as a live feed would deliver it.

use anyhow::{anyhow, bail, Context, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Open `path` for reading, or stdin when `path` is `None` or `-`.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = File::open(p).with_context(|| format!("open input {}", p.display()))?;
            Ok(Box::new(file))
        }
        _ => Ok(Box::new(io::stdin())),
    }
}

/// Feed every price in `reader` to `on_price`, in order.
///
/// With a header, `column` names the price column; without one the first
/// field of each row is used. Blank fields and non-numeric values fail with
/// the offending line number. Returns the number of prices read.
pub fn for_each_price<R, F>(
    reader: R,
    column: &str,
    has_header: bool,
    mut on_price: F,
) -> Result<usize>
where
    R: Read,
    F: FnMut(f64) -> Result<()>,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let col_idx = if has_header {
        let headers = rdr.headers().context("read CSV header")?;
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(column))
            .ok_or_else(|| anyhow!("column '{column}' not found in header: {headers:?}"))?
    } else {
        0
    };

    let mut count = 0;
    for record in rdr.records() {
        let record = record.context("read CSV row")?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let field = match record.get(col_idx) {
            Some(f) if !f.is_empty() => f,
            _ => bail!("line {line}: missing price in column {col_idx}"),
        };
        let price: f64 = field
            .parse()
            .with_context(|| format!("line {line}: invalid price '{field}'"))?;
        on_price(price)?;
        count += 1;
    }

    Ok(count)
}
