//! Tabular export of a schedule
//!
//! Renders an Excel-compatible CSV with one row per pairing or bye. The parser
//! reads back exactly what the renderer writes.

use chrono::NaiveDate;
use shared::{SharedError, SharedResult};

use crate::types::Schedule;

/// Content type browsers hand to a spreadsheet application
pub const CSV_CONTENT_TYPE: &str = "application/vnd.ms-excel";

/// Marker in the second player column for a bye row
pub const BYE_MARKER: &str = "BYE";

const HEADER: [&str; 4] = ["Round", "Date", "PlayerA", "PlayerB"];

/// One exported row; `player_b` is `None` for a bye
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExportRow {
    pub round: u32,
    pub date: NaiveDate,
    pub player_a: String,
    pub player_b: Option<String>,
}

/// Download filename, stable for a given schedule
pub fn suggested_filename(schedule: &Schedule) -> String {
    format!("plan-{}.csv", schedule.created_at.timestamp_millis())
}

/// Rows in export order: rounds ascending, pairings in generator order, bye last
pub fn rows(schedule: &Schedule) -> Vec<ExportRow> {
    let mut rows = Vec::new();
    for round in &schedule.rounds {
        for pairing in &round.pairings {
            rows.push(ExportRow {
                round: round.round,
                date: round.date,
                player_a: pairing.player_a.name().to_string(),
                player_b: Some(pairing.player_b.name().to_string()),
            });
        }
        if let Some(bye) = &round.bye {
            rows.push(ExportRow {
                round: round.round,
                date: round.date,
                player_a: bye.name().to_string(),
                player_b: None,
            });
        }
    }
    rows
}

pub fn render_csv(schedule: &Schedule) -> Vec<u8> {
    let mut out = HEADER.join(",");
    out.push('\n');

    for row in rows(schedule) {
        let player_b = match &row.player_b {
            Some(name) => escape_field(name),
            None => BYE_MARKER.to_string(),
        };
        out.push_str(&format!(
            "{},{},{},{}\n",
            row.round,
            row.date,
            escape_field(&row.player_a),
            player_b
        ));
    }

    out.into_bytes()
}

/// Quote fields that a spreadsheet would otherwise split, or that collide with the bye marker
fn escape_field(value: &str) -> String {
    let needs_quotes = value == BYE_MARKER
        || value.contains([',', '"', '\n', '\r'])
        || value.starts_with(' ')
        || value.ends_with(' ');
    if needs_quotes {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// A parsed field and whether it was quoted
type Field = (String, bool);

pub fn parse_csv(bytes: &[u8]) -> SharedResult<Vec<ExportRow>> {
    let text = std::str::from_utf8(bytes).map_err(|e| SharedError::csv(1, e.to_string()))?;
    let records = split_records(text)?;

    let mut records = records.into_iter();
    match records.next() {
        Some((_, header)) if header.iter().map(|(f, _)| f.as_str()).eq(HEADER) => {}
        _ => return Err(SharedError::csv(1, "missing or unexpected header")),
    }

    records
        .map(|(line, fields)| parse_row(line, fields))
        .collect()
}

fn parse_row(line: usize, fields: Vec<Field>) -> SharedResult<ExportRow> {
    let [round, date, player_a, player_b]: [Field; 4] = fields
        .try_into()
        .map_err(|f: Vec<Field>| SharedError::csv(line, format!("expected 4 fields, got {}", f.len())))?;

    let round = round
        .0
        .parse::<u32>()
        .map_err(|e| SharedError::csv(line, format!("round: {e}")))?;
    let date = date
        .0
        .parse::<NaiveDate>()
        .map_err(|e| SharedError::csv(line, format!("date: {e}")))?;
    let player_b = match player_b {
        (marker, false) if marker == BYE_MARKER => None,
        (name, _) => Some(name),
    };

    Ok(ExportRow {
        round,
        date,
        player_a: player_a.0,
        player_b,
    })
}

/// Split CSV text into records of fields, tagged with their starting line
fn split_records(text: &str) -> SharedResult<Vec<(usize, Vec<Field>)>> {
    let mut records = Vec::new();
    let mut fields: Vec<Field> = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() && !quoted => {
                in_quotes = true;
                quoted = true;
            }
            '"' => return Err(SharedError::csv(line, "stray quote in unquoted field")),
            ',' => fields.push((std::mem::take(&mut field), std::mem::take(&mut quoted))),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push((std::mem::take(&mut field), std::mem::take(&mut quoted)));
                records.push((record_line, std::mem::take(&mut fields)));
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(SharedError::csv(line, "unterminated quoted field"));
    }
    if !field.is_empty() || quoted || !fields.is_empty() {
        fields.push((field, quoted));
        records.push((record_line, fields));
    }

    Ok(records)
}
