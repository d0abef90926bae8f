use chrono::{Datelike, Months, NaiveDate};

pub const DRAW_DAYS: [u32; 2] = [1, 16];

pub fn buddhist_year(date: NaiveDate) -> i32 {
    date.year() + 543
}

/// Display label of a draw, e.g. `16/2568`.
pub fn draw_number(date: NaiveDate) -> String {
    format!("{}/{}", date.day(), buddhist_year(date))
}

/// Path segment the source site uses for a draw, e.g. `16102568`.
pub fn draw_slug(date: NaiveDate) -> String {
    format!("{:02}{:02}{}", date.day(), date.month(), buddhist_year(date))
}

pub fn is_draw_day(date: NaiveDate) -> bool {
    DRAW_DAYS.contains(&date.day())
}

/// The draw period `today` belongs to.
pub fn current_draw_date(today: NaiveDate) -> NaiveDate {
    let day = if today.day() >= 16 { 16 } else { 1 };
    today.with_day(day).unwrap_or(today)
}

/// The next draw strictly after the current period starts.
pub fn next_draw_date(today: NaiveDate) -> NaiveDate {
    if today.day() < 16 {
        return today.with_day(16).unwrap_or(today);
    }
    today
        .with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .unwrap_or(today)
}

pub fn generate_lottery_dates(year: i32) -> Vec<NaiveDate> {
    let mut dates_to_fetch = Vec::new();

    for month in 1..=12 {
        for day in DRAW_DAYS {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                dates_to_fetch.push(date);
            }
        }
    }

    dates_to_fetch
}
