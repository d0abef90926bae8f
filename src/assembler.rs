//! Turns parsed tiers into a [`DrawRecord`], dropping anything malformed.

use chrono::NaiveDate;

use crate::parser::ParsedPrizes;
use crate::types::{DrawRecord, PrizeTier, TraceEvent};

const STEP: &str = "assemble";

fn valid(tier: PrizeTier, value: &str) -> bool {
    value.len() == tier.digits() && value.bytes().all(|b| b.is_ascii_digit())
}

fn check(tier: PrizeTier, value: &str, trace: &mut Vec<TraceEvent>) -> String {
    if valid(tier, value) {
        value.to_string()
    } else {
        trace.push(TraceEvent::rejected(tier, STEP, value, "wrong_width"));
        String::new()
    }
}

fn check_list(tier: PrizeTier, values: &[String], trace: &mut Vec<TraceEvent>) -> Vec<String> {
    values
        .iter()
        .filter(|value| {
            let ok = valid(tier, value);
            if !ok {
                trace.push(TraceEvent::rejected(tier, STEP, value.as_str(), "wrong_width"));
            }
            ok
        })
        .cloned()
        .collect()
}

/// Builds the record for `draw_date`. Invalid values are blanked (single
/// slots) or dropped (lists); the near-first pair is kept only when both
/// numbers are valid.
pub fn assemble(draw_date: NaiveDate, prizes: &ParsedPrizes) -> (DrawRecord, Vec<TraceEvent>) {
    let mut trace = Vec::new();
    let mut record = DrawRecord::new(draw_date);

    if let Some(first) = &prizes.first_prize {
        record.first_prize = check(PrizeTier::First, first, &mut trace);
    }
    if let Some([a, b]) = &prizes.front3 {
        record.front3 = [
            check(PrizeTier::Front3, a, &mut trace),
            check(PrizeTier::Front3, b, &mut trace),
        ];
    }
    if let Some([a, b]) = &prizes.back3 {
        record.back3 = [
            check(PrizeTier::Back3, a, &mut trace),
            check(PrizeTier::Back3, b, &mut trace),
        ];
    }
    if let Some(back2) = &prizes.back2 {
        record.back2 = check(PrizeTier::Back2, back2, &mut trace);
    }
    if let Some(pair) = &prizes.near_first {
        let kept = check_list(PrizeTier::NearFirst, pair, &mut trace);
        if kept.len() == 2 {
            record.near_first = kept;
        }
    }

    record.tier2 = check_list(PrizeTier::Tier2, &prizes.tier2, &mut trace);
    record.tier3 = check_list(PrizeTier::Tier3, &prizes.tier3, &mut trace);
    record.tier4 = check_list(PrizeTier::Tier4, &prizes.tier4, &mut trace);
    record.tier5 = check_list(PrizeTier::Tier5, &prizes.tier5, &mut trace);

    (record, trace)
}
