use crate::domain::model::{ParseErrorPolicy, Record, Ticket};
use crate::utils::error::{Result, TicketError};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// 日期與時間以一個空白串接後的格式
pub const DATE_TIME_PATTERN: &str = "dd.MM.yy H:mm";

static DATE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})\.(\d{2})\.(\d{2}) (\d{1,2}):(\d{2})$").expect("valid date-time regex")
});

#[derive(Debug, Clone, Default)]
pub struct ParsedTickets {
    pub tickets: Vec<Ticket>,
    pub skipped: usize,
}

/// 從 `{"tickets": [...]}` 文件取出原始記錄
pub fn records_from_document(document: Value) -> Result<Vec<Record>> {
    let Value::Object(mut root) = document else {
        return Err(TicketError::InvalidDocument {
            message: "top-level JSON value must be an object".to_string(),
        });
    };

    let items = match root.remove("tickets") {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(TicketError::InvalidDocument {
                message: format!("\"tickets\" must be an array, found {}", json_kind(&other)),
            })
        }
        None => {
            tracing::warn!("⚠️ Document has no \"tickets\" key, treating it as empty");
            return Ok(Vec::new());
        }
    };

    let records = items
        .into_iter()
        .map(|item| match item {
            Value::Object(obj) => Record {
                data: obj.into_iter().collect(),
            },
            // 非物件的項目視為空記錄，交由 parse_ticket 回報缺少欄位
            other => {
                tracing::debug!("Ticket entry is a JSON {}, not an object", json_kind(&other));
                Record {
                    data: Default::default(),
                }
            }
        })
        .collect();

    Ok(records)
}

/// Parses every record. Under [`ParseErrorPolicy::Abort`] the first bad record
/// fails the whole batch.
pub fn parse_tickets(records: &[Record], policy: ParseErrorPolicy) -> Result<ParsedTickets> {
    let mut parsed = ParsedTickets::default();

    for (index, record) in records.iter().enumerate() {
        match parse_ticket(index, record) {
            Ok(ticket) => parsed.tickets.push(ticket),
            Err(e) if policy == ParseErrorPolicy::Skip => {
                tracing::warn!("⚠️ Skipping malformed ticket: {}", e);
                parsed.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    tracing::debug!(
        "Parsed {} tickets, skipped {}",
        parsed.tickets.len(),
        parsed.skipped
    );
    Ok(parsed)
}

pub fn parse_ticket(index: usize, record: &Record) -> Result<Ticket> {
    let origin = text_field(index, record, "origin")?;
    let destination = text_field(index, record, "destination")?;
    let carrier = text_field(index, record, "carrier")?;

    let departure = instant(index, record, "departure_date", "departure_time")?;
    let arrival = instant(index, record, "arrival_date", "arrival_time")?;

    let minutes = (arrival - departure).num_minutes();
    if minutes < 0 {
        return Err(TicketError::parse(
            index,
            "arrival_date/arrival_time",
            format!("arrival {} precedes departure {}", arrival, departure),
        ));
    }

    Ok(Ticket {
        origin: origin.to_string(),
        destination: destination.to_string(),
        carrier: carrier.to_string(),
        price: price_field(index, record)?,
        flight_duration_minutes: minutes as u64,
    })
}

/// `dd.MM.yy H:mm`，兩位數年份一律視為 20yy
pub fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    let caps = DATE_TIME_RE.captures(text)?;
    let number = |i: usize| caps[i].parse::<u32>().ok();

    let date = NaiveDate::from_ymd_opt(2000 + number(3)? as i32, number(2)?, number(1)?)?;
    let time = NaiveTime::from_hms_opt(number(4)?, number(5)?, 0)?;
    Some(NaiveDateTime::new(date, time))
}

fn instant(index: usize, record: &Record, date_field: &str, time_field: &str) -> Result<NaiveDateTime> {
    let date = text_field(index, record, date_field)?;
    let time = text_field(index, record, time_field)?;
    let joined = format!("{} {}", date, time);

    parse_date_time(&joined).ok_or_else(|| {
        TicketError::parse(
            index,
            format!("{}/{}", date_field, time_field),
            format!("'{}' does not match {}", joined, DATE_TIME_PATTERN),
        )
    })
}

fn text_field<'a>(index: usize, record: &'a Record, field: &str) -> Result<&'a str> {
    match record.data.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(TicketError::parse(
            index,
            field,
            format!("expected a string, found {}", json_kind(other)),
        )),
        None => Err(TicketError::parse(index, field, "missing required field")),
    }
}

fn price_field(index: usize, record: &Record) -> Result<u64> {
    let invalid = |reason: String| TicketError::parse(index, "price", reason);

    match record.data.get("price") {
        Some(Value::Number(n)) => n
            .as_u64()
            .ok_or_else(|| invalid(format!("{} is not a non-negative integer", n))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| invalid(format!("'{}' is not a non-negative integer", s))),
        Some(other) => Err(invalid(format!("expected a number, found {}", json_kind(other)))),
        None => Err(invalid("missing required field".to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
