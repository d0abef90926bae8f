use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::fs;
use std::path::Path;

use crate::error::LottoError;
use crate::types::{DrawRecord, DrawRow, PrizeRow, PrizeTier};

pub fn open_database(path: &str) -> crate::error::Result<Connection> {
    if let Some(dir) = Path::new(path).parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| LottoError::Io {
            path: dir.display().to_string(),
            source,
        })?;
    }

    let conn = Connection::open(path)?;
    create_tables(&conn)?;
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    create_tables(&conn)?;
    Ok(conn)
}

pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS lottery_draws (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            draw_date TEXT NOT NULL UNIQUE,
            draw_number TEXT NOT NULL,
            status TEXT NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS lottery_prizes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            draw_id INTEGER NOT NULL,
            prize_type TEXT NOT NULL,
            prize_number TEXT NOT NULL,
            position INTEGER NOT NULL,
            amount INTEGER NOT NULL,
            FOREIGN KEY (draw_id) REFERENCES lottery_draws (id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_lottery_prizes_number
            ON lottery_prizes (prize_number);
        CREATE INDEX IF NOT EXISTS idx_lottery_prizes_draw
            ON lottery_prizes (draw_id);",
    )
}

/// Stores a draw, replacing any prizes saved earlier for the same date.
/// Returns the draw id.
pub fn put_draw(conn: &Connection, record: &DrawRecord) -> Result<i64> {
    let tx = conn.unchecked_transaction()?;

    tx.execute(
        "INSERT INTO lottery_draws (draw_date, draw_number, status)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(draw_date) DO UPDATE SET
            draw_number = excluded.draw_number,
            status = excluded.status,
            updated_at = CURRENT_TIMESTAMP",
        params![record.draw_date, record.draw_number, record.status().as_str()],
    )?;
    let draw_id: i64 = tx.query_row(
        "SELECT id FROM lottery_draws WHERE draw_date = ?1",
        [record.draw_date],
        |row| row.get(0),
    )?;

    tx.execute("DELETE FROM lottery_prizes WHERE draw_id = ?1", [draw_id])?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO lottery_prizes (draw_id, prize_type, prize_number, position, amount)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for entry in record.entries() {
            stmt.execute(params![
                draw_id,
                entry.tier.as_str(),
                entry.number,
                entry.position,
                entry.tier.amount() as i64,
            ])?;
        }
    }

    tx.commit()?;
    Ok(draw_id)
}

fn draw_row(row: &Row<'_>) -> Result<DrawRow> {
    Ok(DrawRow {
        id: row.get(0)?,
        draw_date: row.get(1)?,
        draw_number: row.get(2)?,
        status: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn prize_row(row: &Row<'_>, offset: usize) -> Result<PrizeRow> {
    let amount: i64 = row.get(offset + 5)?;
    Ok(PrizeRow {
        id: row.get(offset)?,
        draw_id: row.get(offset + 1)?,
        prize_type: row.get(offset + 2)?,
        prize_number: row.get(offset + 3)?,
        position: row.get(offset + 4)?,
        amount: amount.max(0) as u64,
    })
}

pub fn get_draw_row(conn: &Connection, draw_date: NaiveDate) -> Result<Option<DrawRow>> {
    conn.query_row(
        "SELECT id, draw_date, draw_number, status, created_at
         FROM lottery_draws WHERE draw_date = ?1",
        [draw_date],
        draw_row,
    )
    .optional()
}

pub fn get_prize_rows(conn: &Connection, draw_id: i64) -> Result<Vec<PrizeRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, draw_id, prize_type, prize_number, position, amount
         FROM lottery_prizes WHERE draw_id = ?1
         ORDER BY id",
    )?;
    let prize_iter = stmt.query_map([draw_id], |row| prize_row(row, 0))?;

    let mut results = Vec::new();
    for prize in prize_iter {
        results.push(prize?);
    }
    Ok(results)
}

/// Prize rows of the draw on `draw_date` whose number is exactly `digits`.
pub fn find_prize_rows(
    conn: &Connection,
    digits: &str,
    draw_date: NaiveDate,
) -> Result<Vec<PrizeRow>> {
    let mut stmt = conn.prepare(
        "SELECT p.id, p.draw_id, p.prize_type, p.prize_number, p.position, p.amount
         FROM lottery_prizes p
         JOIN lottery_draws d ON d.id = p.draw_id
         WHERE d.draw_date = ?1 AND p.prize_number = ?2
         ORDER BY p.amount DESC, p.position",
    )?;
    let prize_iter = stmt.query_map(params![draw_date, digits], |row| prize_row(row, 0))?;

    let mut results = Vec::new();
    for prize in prize_iter {
        results.push(prize?);
    }
    Ok(results)
}

pub fn get_draw(conn: &Connection, draw_date: NaiveDate) -> Result<Option<DrawRecord>> {
    let Some(draw) = get_draw_row(conn, draw_date)? else {
        return Ok(None);
    };

    let mut record = DrawRecord::new(draw.draw_date);
    record.draw_number = draw.draw_number;

    for prize in get_prize_rows(conn, draw.id)? {
        let Some(tier) = PrizeTier::from_key(&prize.prize_type) else {
            continue;
        };
        let slot = prize.position.saturating_sub(1) as usize;
        let number = prize.prize_number;
        match tier {
            PrizeTier::First => record.first_prize = number,
            PrizeTier::Back2 => record.back2 = number,
            PrizeTier::Front3 | PrizeTier::Back3 => {
                let pair = if tier == PrizeTier::Front3 {
                    &mut record.front3
                } else {
                    &mut record.back3
                };
                if let Some(cell) = pair.get_mut(slot) {
                    *cell = number;
                }
            }
            PrizeTier::NearFirst => record.near_first.push(number),
            PrizeTier::Tier2 => record.tier2.push(number),
            PrizeTier::Tier3 => record.tier3.push(number),
            PrizeTier::Tier4 => record.tier4.push(number),
            PrizeTier::Tier5 => record.tier5.push(number),
        }
    }

    Ok(Some(record))
}

pub fn draw_exists(conn: &Connection, draw_date: NaiveDate) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM lottery_draws WHERE draw_date = ?1",
        [draw_date],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Splits `dates` into (still to fetch, already stored).
pub fn check_existing_dates(
    conn: &Connection,
    dates: &[NaiveDate],
) -> Result<(Vec<NaiveDate>, Vec<NaiveDate>)> {
    let mut dates_to_fetch = Vec::new();
    let mut existing_dates = Vec::new();

    for date in dates {
        if draw_exists(conn, *date)? {
            existing_dates.push(*date);
        } else {
            dates_to_fetch.push(*date);
        }
    }

    Ok((dates_to_fetch, existing_dates))
}

pub fn get_latest_draws(conn: &Connection, limit: u32) -> Result<Vec<DrawRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, draw_date, draw_number, status, created_at
         FROM lottery_draws
         ORDER BY draw_date DESC
         LIMIT ?1",
    )?;
    let draw_iter = stmt.query_map([limit], draw_row)?;

    let mut results = Vec::new();
    for draw in draw_iter {
        results.push(draw?);
    }
    Ok(results)
}

pub fn get_draws_by_date_range(
    conn: &Connection,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<DrawRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, draw_date, draw_number, status, created_at
         FROM lottery_draws
         WHERE draw_date >= ?1 AND draw_date <= ?2
         ORDER BY draw_date DESC",
    )?;
    let draw_iter = stmt.query_map([start_date, end_date], draw_row)?;

    let mut results = Vec::new();
    for draw in draw_iter {
        results.push(draw?);
    }
    Ok(results)
}

pub fn get_draws_by_year(conn: &Connection, year: i32) -> Result<Vec<DrawRow>> {
    let (Some(start_date), Some(end_date)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return Ok(Vec::new());
    };
    get_draws_by_date_range(conn, start_date, end_date)
}

/// Stored prizes whose number contains `digits`, newest draw first.
pub fn search_number(conn: &Connection, digits: &str) -> Result<Vec<(DrawRow, PrizeRow)>> {
    let mut stmt = conn.prepare(
        "SELECT d.id, d.draw_date, d.draw_number, d.status, d.created_at,
                p.id, p.draw_id, p.prize_type, p.prize_number, p.position, p.amount
         FROM lottery_draws d
         JOIN lottery_prizes p ON d.id = p.draw_id
         WHERE p.prize_number LIKE ?1
         ORDER BY d.draw_date DESC, p.amount DESC, p.position",
    )?;

    let search_pattern = format!("%{}%", digits);
    let result_iter = stmt.query_map([&search_pattern], |row| {
        Ok((draw_row(row)?, prize_row(row, 5)?))
    })?;

    let mut results = Vec::new();
    for result in result_iter {
        results.push(result?);
    }
    Ok(results)
}

/// Removes a draw and its prizes. Returns whether a draw was stored.
pub fn delete_draw(conn: &Connection, draw_date: NaiveDate) -> Result<bool> {
    let tx = conn.unchecked_transaction()?;
    tx.execute(
        "DELETE FROM lottery_prizes
         WHERE draw_id IN (SELECT id FROM lottery_draws WHERE draw_date = ?1)",
        [draw_date],
    )?;
    let removed = tx.execute("DELETE FROM lottery_draws WHERE draw_date = ?1", [draw_date])?;
    tx.commit()?;
    Ok(removed > 0)
}
