//! Line-oriented text front end.
//!
//! # Input
//!
//! A count line followed by that many base requests, then optionally a
//! count line followed by that many queries:
//!
//! ```text
//! 4
//! Stop Tolstopaltsevo: 55.611087, 37.20829, 3900m to Marushkino
//! Stop Marushkino: 55.595884, 37.209755
//! Bus 256: Tolstopaltsevo > Marushkino > Tolstopaltsevo
//! Bus 750: Tolstopaltsevo - Marushkino
//! 3
//! Bus 256
//! Bus 751
//! Stop Marushkino
//! ```
//!
//! `>` separates the stops of a round-trip bus (first and last stop must
//! match), `-` those of a linear one.  Whitespace around names and
//! separators is ignored; blank lines are skipped.
//!
//! # Output
//!
//! One line per query, numbers with six significant digits:
//!
//! ```text
//! Bus 256: 3 stops on route, 2 unique stops, 7800 route length, 2.3036 curvature
//! Bus 751: not found
//! Stop Marushkino: buses 256 750
//! ```
//!
//! A known stop no bus serves prints `Stop X: no buses`.

use std::collections::BTreeMap;

use tracing::info;

use tc_catalogue::{BusStats, Catalogue};
use tc_core::Significant;

use crate::document::populate;
use crate::{BaseRequest, RequestError, RequestResult};

// ── Parsed input ──────────────────────────────────────────────────────────────

/// A query in the text format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextQuery {
    Bus(String),
    Stop(String),
}

/// Base requests and queries read from one text input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub base_requests: Vec<BaseRequest>,
    pub queries:       Vec<TextQuery>,
}

impl TextInput {
    /// Parse a whole text input.  Errors carry the 1-based line number.
    pub fn parse(text: &str) -> RequestResult<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l))
            .filter(|(_, l)| !l.trim().is_empty());

        let end = text.lines().count() + 1;
        let mut input = TextInput::default();

        let Some(count) = next_count(&mut lines)? else {
            return Ok(input);
        };
        for _ in 0..count {
            let (line_no, line) = next_line(&mut lines, end, "base request")?;
            let request = match split_command(line) {
                ("Stop", rest) => parse_stop(rest),
                ("Bus", rest) => parse_bus(rest),
                (other, _) => Err(format!("unknown base request `{other}`")),
            };
            input
                .base_requests
                .push(request.map_err(|message| RequestError::Text { line: line_no, message })?);
        }

        let Some(count) = next_count(&mut lines)? else {
            return Ok(input);
        };
        for _ in 0..count {
            let (line_no, line) = next_line(&mut lines, end, "query")?;
            let query = match split_command(line) {
                ("Stop", name) => TextQuery::Stop(name.trim().to_string()),
                ("Bus", name) => TextQuery::Bus(name.trim().to_string()),
                (other, _) => {
                    return Err(RequestError::Text {
                        line:    line_no,
                        message: format!("unknown query `{other}`"),
                    });
                }
            };
            input.queries.push(query);
        }
        Ok(input)
    }
}

/// Run a whole text input and return the answer lines.
pub fn process_text(text: &str) -> RequestResult<String> {
    let input = TextInput::parse(text)?;
    let mut catalogue = Catalogue::new();
    populate(&input.base_requests, &mut catalogue)?;

    let mut out = String::new();
    for query in &input.queries {
        let line = match query {
            TextQuery::Bus(name) => format_bus(name, catalogue.bus_stats(name).as_ref()),
            TextQuery::Stop(name) => format_stop(name, catalogue.buses_for_stop(name).as_deref()),
        };
        out.push_str(&line);
        out.push('\n');
    }

    info!(
        stops   = catalogue.stops().len(),
        buses   = catalogue.buses().len(),
        queries = input.queries.len(),
        "processed text input"
    );
    Ok(out)
}

// ── Output lines ──────────────────────────────────────────────────────────────

/// `Bus <name>: <n> stops on route, <u> unique stops, <len> route length, <c> curvature`
/// or `Bus <name>: not found`.
pub fn format_bus(name: &str, stats: Option<&BusStats>) -> String {
    match stats {
        Some(s) => format!(
            "Bus {name}: {} stops on route, {} unique stops, {} route length, {} curvature",
            s.stop_count,
            s.unique_stop_count,
            Significant(s.route_length),
            Significant(s.curvature()),
        ),
        None => format!("Bus {name}: not found"),
    }
}

/// `Stop <name>: buses <b1> <b2> …`, `Stop <name>: no buses` or
/// `Stop <name>: not found`.
pub fn format_stop(name: &str, buses: Option<&[&str]>) -> String {
    match buses {
        None => format!("Stop {name}: not found"),
        Some([]) => format!("Stop {name}: no buses"),
        Some(buses) => {
            let mut line = format!("Stop {name}: buses");
            for bus in buses {
                line.push(' ');
                line.push_str(bus);
            }
            line
        }
    }
}

// ── Line parsing ──────────────────────────────────────────────────────────────

/// Split `line` on every occurrence of `by`, trimming whitespace around each
/// part.
///
/// A leading separator yields an empty first part and a trailing one an
/// empty last part.  Consecutive separators yield empty parts in between,
/// except that a whitespace separator never produces a trailing empty part
/// from trailing whitespace.
pub fn split_trimmed<'a>(mut line: &'a str, by: &str) -> Vec<&'a str> {
    let blank_separator = by.len() == 1 && by.bytes().all(|b| b.is_ascii_whitespace());
    let mut parts = Vec::new();
    loop {
        let begin = line.len() - line.trim_start_matches(is_space).len();
        let delim = line[begin..].find(by).map_or(line.len(), |i| begin + i);
        let part = line[begin..delim].trim_end_matches(is_space);

        if !(blank_separator && delim == line.len() && part.is_empty()) {
            parts.push(part);
        }
        if delim < line.len() && delim + by.len() == line.len() {
            parts.push(&line[line.len()..]);
        }

        line = &line[(delim + by.len()).min(line.len())..];
        if line.is_empty() {
            return parts;
        }
    }
}

/// `<name>: <lat>, <lon>[, <D>m to <stop>]*`
fn parse_stop(rest: &str) -> Result<BaseRequest, String> {
    let [name, fields] = split_trimmed(rest, ":")[..] else {
        return Err("expected `Stop <name>: <lat>, <lon>`".to_string());
    };
    let fields = split_trimmed(fields, ",");
    let [lat, lon, distances @ ..] = &fields[..] else {
        return Err(format!("stop {name:?} needs a latitude and a longitude"));
    };
    let latitude = parse_f64(lat)?;
    let longitude = parse_f64(lon)?;

    let mut road_distances = BTreeMap::new();
    for item in distances {
        let [length, to] = split_trimmed(item, " to ")[..] else {
            return Err(format!("expected `<D>m to <stop>`, got {item:?}"));
        };
        let metres = length
            .strip_suffix('m')
            .and_then(|d| d.parse::<u32>().ok())
            .ok_or_else(|| format!("bad distance {length:?}"))?;
        road_distances.insert(to.to_string(), metres);
    }

    Ok(BaseRequest::Stop { name: name.to_string(), latitude, longitude, road_distances })
}

/// `<name>: A - B - C` (linear) or `<name>: A > B > A` (round trip).
///
/// The first `>` or `-` in the stop list picks the separator.
fn parse_bus(rest: &str) -> Result<BaseRequest, String> {
    let [name, stops] = split_trimmed(rest, ":")[..] else {
        return Err("expected `Bus <name>: <stop> - <stop> ...`".to_string());
    };
    let (is_roundtrip, stops) = match stops.find(['>', '-']) {
        Some(i) if stops[i..].starts_with('>') => (true, split_trimmed(stops, ">")),
        Some(_) => (false, split_trimmed(stops, "-")),
        None => (false, vec![stops]),
    };
    Ok(BaseRequest::Bus {
        name: name.to_string(),
        stops: stops.into_iter().map(str::to_string).collect(),
        is_roundtrip,
    })
}

fn parse_f64(s: &str) -> Result<f64, String> {
    s.parse().map_err(|_| format!("bad coordinate {s:?}"))
}

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// First word and the remainder of a command line.
fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    line.split_once(is_space).unwrap_or((line, ""))
}

type Lines<'a> = dyn Iterator<Item = (usize, &'a str)> + 'a;

/// The next non-blank line; `end` is the line number reported when the
/// input runs out.
fn next_line<'a>(lines: &mut Lines<'a>, end: usize, what: &str) -> RequestResult<(usize, &'a str)> {
    lines.next().ok_or_else(|| RequestError::Text {
        line:    end,
        message: format!("input ended before the next {what}"),
    })
}

/// The next count line, or `None` at end of input.
fn next_count(lines: &mut Lines<'_>) -> RequestResult<Option<usize>> {
    let Some((line_no, line)) = lines.next() else {
        return Ok(None);
    };
    line.trim()
        .parse()
        .map(Some)
        .map_err(|_| RequestError::Text { line: line_no, message: format!("expected a count, got {line:?}") })
}
