use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::database;
use crate::error::Result;
use crate::fetcher::DocumentSource;
use crate::matcher::build_report;
use crate::pipeline::{Extraction, extract_draw};
use crate::types::{CheckReport, DrawRecord, TraceOutcome};
use crate::validation::{ensure_draw_day, validate_ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncOutcome {
    /// Stored draw already fully parsed; nothing fetched.
    Skipped,
    Saved,
    /// Fetched, but the page held no usable first prize.
    Incomplete,
    /// Fetch or storage failed.
    Failed,
}

pub struct LotteryService {
    connection: Arc<Connection>,
    source: Arc<dyn DocumentSource>,
    batch_delay: Duration,
}

impl LotteryService {
    pub fn new(connection: Arc<Connection>, source: Arc<dyn DocumentSource>) -> Self {
        Self {
            connection,
            source,
            batch_delay: Duration::ZERO,
        }
    }

    pub fn with_batch_delay(mut self, delay: Duration) -> Self {
        self.batch_delay = delay;
        self
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Fetches and extracts one draw. A failed fetch is logged and yields
    /// `None`, the same as a draw with no data.
    pub async fn scrape_draw(&self, draw_date: NaiveDate) -> Option<Extraction> {
        let html = match self.source.fetch_document(draw_date).await {
            Ok(html) => html,
            Err(e) => {
                warn!(%draw_date, source = self.source.name(), "fetch failed: {}", e);
                return None;
            }
        };

        let extraction = extract_draw(&html, draw_date);
        log_trace(draw_date, &extraction);
        info!(
            %draw_date,
            source = ?extraction.source,
            status = extraction.record.status().as_str(),
            prizes = extraction.record.prize_count(),
            "extracted draw"
        );
        Some(extraction)
    }

    /// Stored record for `draw_date`, scraping and storing it on a miss.
    ///
    /// Only records with a first prize are stored. A failed write is logged
    /// and the scraped record is still returned.
    pub async fn resolve_draw(&self, draw_date: NaiveDate) -> Result<Option<DrawRecord>> {
        if let Some(record) = database::get_draw(&self.connection, draw_date)? {
            debug!(%draw_date, "draw found in store");
            return Ok(Some(record));
        }

        let Some(extraction) = self.scrape_draw(draw_date).await else {
            return Ok(None);
        };
        let record = extraction.record;
        if !record.is_complete() {
            return Ok(Some(record));
        }

        if let Err(e) = database::put_draw(&self.connection, &record) {
            warn!(%draw_date, "failed to store draw: {}", e);
        }
        Ok(Some(record))
    }

    /// Malformed input is an error; a draw without data is a `no_data`
    /// report.
    pub async fn check_ticket(&self, number: &str, draw_date: NaiveDate) -> Result<CheckReport> {
        let number = validate_ticket(number)?;
        let draw_date = ensure_draw_day(draw_date)?;

        let record = self.resolve_draw(draw_date).await?;
        let report = build_report(&number, draw_date, record.as_ref());
        info!(
            %draw_date,
            status = ?report.status,
            matches = report.total_matches,
            "checked ticket"
        );
        Ok(report)
    }

    /// Scheduled refresh of one draw. Fully parsed stored draws are left
    /// alone unless `force` is set; anything else is scraped again and
    /// replaces the stored copy.
    pub async fn sync_draw(&self, draw_date: NaiveDate, force: bool) -> Result<SyncOutcome> {
        let draw_date = ensure_draw_day(draw_date)?;

        if !force {
            if let Some(stored) = database::get_draw(&self.connection, draw_date)? {
                if stored.is_fully_parsed() {
                    debug!(%draw_date, "stored draw is complete, skipping");
                    return Ok(SyncOutcome::Skipped);
                }
            }
        }

        let Some(extraction) = self.scrape_draw(draw_date).await else {
            return Ok(SyncOutcome::Failed);
        };
        if !extraction.record.is_complete() {
            warn!(%draw_date, "no first prize found, not storing");
            return Ok(SyncOutcome::Incomplete);
        }

        match database::put_draw(&self.connection, &extraction.record) {
            Ok(draw_id) => {
                info!(%draw_date, draw_id, "stored draw");
                Ok(SyncOutcome::Saved)
            }
            Err(e) => {
                warn!(%draw_date, "failed to store draw: {}", e);
                Ok(SyncOutcome::Failed)
            }
        }
    }

    pub async fn sync_dates(
        &self,
        dates: &[NaiveDate],
        force: bool,
    ) -> Result<Vec<(NaiveDate, SyncOutcome)>> {
        let (to_fetch, stored) = database::check_existing_dates(&self.connection, dates)?;
        info!(new = to_fetch.len(), stored = stored.len(), "sync starting");

        let mut outcomes = Vec::with_capacity(dates.len());

        for (index, date) in dates.iter().enumerate() {
            let outcome = self.sync_draw(*date, force).await?;
            if outcome != SyncOutcome::Skipped
                && index + 1 < dates.len()
                && !self.batch_delay.is_zero()
            {
                tokio::time::sleep(self.batch_delay).await;
            }
            outcomes.push((*date, outcome));
        }

        let saved = outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == SyncOutcome::Saved)
            .count();
        info!(total = dates.len(), saved, "sync finished");
        Ok(outcomes)
    }
}

fn log_trace(draw_date: NaiveDate, extraction: &Extraction) {
    for event in &extraction.trace {
        match &event.outcome {
            TraceOutcome::Matched { values } => {
                debug!(%draw_date, tier = event.tier.as_str(), step = event.step, ?values, "matched")
            }
            TraceOutcome::Rejected { value, reason } => {
                debug!(%draw_date, tier = event.tier.as_str(), step = event.step, %value, reason, "rejected")
            }
            TraceOutcome::Missed => {
                debug!(%draw_date, tier = event.tier.as_str(), step = event.step, "missed")
            }
        }
    }
}
