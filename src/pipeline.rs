//! One fetched page in, one draw record out.

use chrono::NaiveDate;
use serde::Serialize;

use crate::assembler::assemble;
use crate::extractor::{extract_article_body, extract_dom_prizes, parse_document};
use crate::parser::parse_article;
use crate::types::{DrawRecord, PrizeTier, TraceEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySource {
    JsonLd,
    Dom,
}

#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub record: DrawRecord,
    pub source: BodySource,
    pub trace: Vec<TraceEvent>,
}

/// Full page-to-record extraction for one draw. Pure: no I/O, no clock.
///
/// The JSON-LD article body is parsed for every tier; the page's number
/// cells then fill headline tiers the body did not yield. Without a body
/// only the cells are used.
pub fn extract_draw(html: &str, draw_date: NaiveDate) -> Extraction {
    let document = parse_document(html);

    let (prizes, mut trace, source) = match extract_article_body(&document) {
        Some(body) => {
            let outcome = parse_article(&body);
            let mut prizes = outcome.prizes;
            let mut trace = outcome.trace;
            let dom = extract_dom_prizes(&document);
            for tier in prizes.fill_missing_from(dom) {
                trace.push(TraceEvent::matched(tier, "dom", &[]));
            }
            (prizes, trace, BodySource::JsonLd)
        }
        None => (extract_dom_prizes(&document), Vec::new(), BodySource::Dom),
    };

    let (record, rejected) = assemble(draw_date, &prizes);
    trace.extend(rejected);

    Extraction {
        record,
        source,
        trace,
    }
}

impl Extraction {
    pub fn parsed_tiers(&self) -> usize {
        PrizeTier::ALL
            .into_iter()
            .filter(|tier| !self.record.numbers(*tier).is_empty())
            .count()
    }
}
