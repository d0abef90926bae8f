//! Input checks applied before a request reaches the checker.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use crate::error::{LottoError, Result};
use crate::utils::{current_draw_date, is_draw_day};

/// A validated ticket-check request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub number: String,
    pub draw_date: NaiveDate,
}

pub fn validate_ticket(input: &str) -> Result<String> {
    let number = input.trim();
    if number.len() != 6 || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LottoError::InvalidTicket(input.to_string()));
    }
    Ok(number.to_string())
}

/// Parses `YYYY-MM-DD` and requires a draw day (1st or 16th).
pub fn parse_draw_date(input: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| LottoError::invalid_date(input, "expected YYYY-MM-DD"))?;
    ensure_draw_day(date)
}

pub fn ensure_draw_day(date: NaiveDate) -> Result<NaiveDate> {
    if !is_draw_day(date) {
        return Err(LottoError::invalid_date(
            date.to_string(),
            "draws happen only on the 1st and 16th",
        ));
    }
    Ok(date)
}

struct MessagePatterns {
    filler: Regex,
    ticket: Regex,
    iso_date: Regex,
    thai_date: Regex,
}

fn patterns() -> &'static MessagePatterns {
    static PATTERNS: OnceLock<MessagePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| MessagePatterns {
        filler: Regex::new("ตรวจ|หวย|เลข").expect("valid filler regex"),
        ticket: Regex::new(r"\b([0-9]{6})\b").expect("valid ticket regex"),
        iso_date: Regex::new(r"\b([0-9]{4}-[0-9]{2}-[0-9]{2})\b").expect("valid iso regex"),
        thai_date: Regex::new(r"\b([0-9]{1,2})/([0-9]{1,2})/([0-9]{2,4})\b")
            .expect("valid thai date regex"),
    })
}

/// Reads a chat message such as `ตรวจ 123456 16/10/68`.
///
/// Accepted dates: `2025-10-16`, `16/10/68`, `16/10/2568`. A missing date, or
/// one that is not a draw day, resolves to the current draw of `today`.
pub fn parse_check_message(message: &str, today: NaiveDate) -> Result<CheckRequest> {
    let patterns = patterns();
    let cleaned = patterns.filler.replace_all(message, " ");

    let number = patterns
        .ticket
        .captures(&cleaned)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| LottoError::InvalidTicket(message.trim().to_string()))?;

    let draw_date = message_date(&cleaned).unwrap_or_else(|| current_draw_date(today));
    Ok(CheckRequest { number, draw_date })
}

fn message_date(message: &str) -> Option<NaiveDate> {
    let patterns = patterns();

    if let Some(caps) = patterns.iso_date.captures(message) {
        if let Ok(date) = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d") {
            if is_draw_day(date) {
                return Some(date);
            }
        }
    }

    let caps = patterns.thai_date.captures(message)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let mut year: i32 = caps[3].parse().ok()?;
    if year < 100 {
        year += 2500;
    }
    if year > 2500 {
        year -= 543;
    }
    NaiveDate::from_ymd_opt(year, month, day).filter(|date| is_draw_day(*date))
}
