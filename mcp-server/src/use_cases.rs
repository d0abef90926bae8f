use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use lottery_lib::database::*;
use lottery_lib::reports::{format_check_message, format_draw_summary};
use lottery_lib::service::LotteryService;
use lottery_lib::utils::{current_draw_date, draw_number, generate_lottery_dates, next_draw_date};
use lottery_lib::validation::{parse_check_message, parse_draw_date, validate_ticket};
use lottery_lib::LottoError;

/// Malformed or missing tool arguments.
#[derive(Debug)]
pub struct InvalidParams(pub String);

impl fmt::Display for InvalidParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvalidParams {}

/// True when the caller sent bad input rather than the server failing.
pub fn is_client_error(error: &anyhow::Error) -> bool {
    error.downcast_ref::<InvalidParams>().is_some()
        || error
            .downcast_ref::<LottoError>()
            .is_some_and(LottoError::is_client_error)
}

fn required_str<'a>(arguments: &'a HashMap<String, Value>, key: &str) -> Result<&'a str> {
    arguments
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| InvalidParams(format!("Missing {} parameter", key)).into())
}

fn optional_date(arguments: &HashMap<String, Value>, key: &str) -> Result<Option<NaiveDate>> {
    match arguments.get(key).and_then(|v| v.as_str()) {
        Some(raw) => Ok(Some(parse_draw_date(raw)?)),
        None => Ok(None),
    }
}

fn year_argument(arguments: &HashMap<String, Value>) -> Result<i32> {
    let year = match arguments.get("year") {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    year.and_then(|y| i32::try_from(y).ok())
        .filter(|y| (1900..=2600).contains(y))
        .ok_or_else(|| InvalidParams("Missing or invalid year parameter".to_string()).into())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct LotteryUseCase {
    service: Arc<LotteryService>,
}

impl LotteryUseCase {
    pub fn new(service: Arc<LotteryService>) -> Self {
        Self { service }
    }

    pub async fn check_number(&self, arguments: &HashMap<String, Value>) -> Result<String> {
        let number = validate_ticket(required_str(arguments, "number")?)?;
        let today = today();
        let draw_date = optional_date(arguments, "date")?.unwrap_or_else(|| current_draw_date(today));

        let report = self.service.check_ticket(&number, draw_date).await?;
        let text = format_check_message(&report, today);

        Ok(json!({
            "success": true,
            "report": report,
            "text": text
        })
        .to_string())
    }

    pub async fn check_message(&self, arguments: &HashMap<String, Value>) -> Result<String> {
        let message = required_str(arguments, "message")?;
        let today = today();
        let request = parse_check_message(message, today)?;

        let report = self
            .service
            .check_ticket(&request.number, request.draw_date)
            .await?;
        let text = format_check_message(&report, today);

        Ok(json!({
            "success": true,
            "report": report,
            "text": text
        })
        .to_string())
    }

    pub async fn scrape_draw(&self, arguments: &HashMap<String, Value>) -> Result<String> {
        let draw_date = parse_draw_date(required_str(arguments, "date")?)?;
        let force = arguments
            .get("force")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        let outcome = self.service.sync_draw(draw_date, force).await?;
        let draw = get_draw(self.service.connection(), draw_date)?;

        Ok(json!({
            "success": true,
            "outcome": outcome,
            "draw": draw
        })
        .to_string())
    }

    pub async fn get_draw(&self, arguments: &HashMap<String, Value>) -> Result<String> {
        let draw_date = parse_draw_date(required_str(arguments, "date")?)?;
        let conn = self.service.connection();

        let result = match (get_draw_row(conn, draw_date)?, get_draw(conn, draw_date)?) {
            (Some(row), Some(record)) => json!({
                "success": true,
                "draw": row,
                "record": record,
                "summary": format_draw_summary(&record)
            }),
            _ => json!({
                "success": false,
                "message": format!("No draw stored for {}", draw_date)
            }),
        };
        Ok(result.to_string())
    }

    pub async fn get_latest_draws(&self, arguments: &HashMap<String, Value>) -> Result<String> {
        let limit = arguments
            .get("limit")
            .and_then(|v| v.as_u64())
            .map(|l| l.min(u32::MAX as u64) as u32)
            .unwrap_or(10);
        let results = get_latest_draws(self.service.connection(), limit)?;

        Ok(json!({
            "success": true,
            "results": results
        })
        .to_string())
    }

    pub async fn get_draws_by_year(&self, arguments: &HashMap<String, Value>) -> Result<String> {
        let year = year_argument(arguments)?;
        let results = get_draws_by_year(self.service.connection(), year)?;

        Ok(json!({
            "success": true,
            "year": year,
            "results": results
        })
        .to_string())
    }

    pub async fn search_number(&self, arguments: &HashMap<String, Value>) -> Result<String> {
        let number = required_str(arguments, "number")?.trim();
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) || number.len() > 6 {
            return Err(InvalidParams(format!("number must be 1-6 digits: '{}'", number)).into());
        }
        let hits = search_number(self.service.connection(), number)?;

        let results: Vec<Value> = hits
            .into_iter()
            .map(|(draw, prize)| json!({ "draw": draw, "prize": prize }))
            .collect();
        Ok(json!({
            "success": true,
            "count": results.len(),
            "results": results
        })
        .to_string())
    }

    pub async fn sync_year(&self, arguments: &HashMap<String, Value>) -> Result<String> {
        let year = year_argument(arguments)?;
        let force = arguments
            .get("force")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        let today = today();

        let dates: Vec<NaiveDate> = generate_lottery_dates(year)
            .into_iter()
            .filter(|date| *date <= today)
            .collect();
        let outcomes = self.service.sync_dates(&dates, force).await?;

        let results: Vec<Value> = outcomes
            .into_iter()
            .map(|(date, outcome)| json!({ "date": date, "outcome": outcome }))
            .collect();
        Ok(json!({
            "success": true,
            "year": year,
            "results": results
        })
        .to_string())
    }

    pub async fn delete_draw(&self, arguments: &HashMap<String, Value>) -> Result<String> {
        let draw_date = parse_draw_date(required_str(arguments, "date")?)?;
        let deleted = delete_draw(self.service.connection(), draw_date)?;
        let message = if deleted {
            format!("Deleted draw {}", draw_date)
        } else {
            format!("No draw stored for {}", draw_date)
        };

        Ok(json!({
            "success": deleted,
            "message": message
        })
        .to_string())
    }

    pub async fn get_draw_calendar(&self, arguments: &HashMap<String, Value>) -> Result<String> {
        let today = match arguments.get("today").and_then(|v| v.as_str()) {
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|_| InvalidParams(format!("today must be YYYY-MM-DD: '{}'", raw)))?,
            None => today(),
        };
        let current = current_draw_date(today);
        let next = next_draw_date(today);

        Ok(json!({
            "success": true,
            "today": today,
            "current_draw": current,
            "current_draw_number": draw_number(current),
            "next_draw": next,
            "next_draw_number": draw_number(next)
        })
        .to_string())
    }
}
