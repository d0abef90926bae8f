use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::draw_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrizeTier {
    First,
    Front3,
    Back3,
    Back2,
    NearFirst,
    Tier2,
    Tier3,
    Tier4,
    Tier5,
}

impl PrizeTier {
    pub const ALL: [PrizeTier; 9] = [
        PrizeTier::First,
        PrizeTier::Front3,
        PrizeTier::Back3,
        PrizeTier::Back2,
        PrizeTier::NearFirst,
        PrizeTier::Tier2,
        PrizeTier::Tier3,
        PrizeTier::Tier4,
        PrizeTier::Tier5,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PrizeTier::First => "first",
            PrizeTier::Front3 => "front3",
            PrizeTier::Back3 => "back3",
            PrizeTier::Back2 => "back2",
            PrizeTier::NearFirst => "near_first",
            PrizeTier::Tier2 => "tier2",
            PrizeTier::Tier3 => "tier3",
            PrizeTier::Tier4 => "tier4",
            PrizeTier::Tier5 => "tier5",
        }
    }

    pub fn from_key(key: &str) -> Option<PrizeTier> {
        PrizeTier::ALL.into_iter().find(|tier| tier.as_str() == key)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PrizeTier::First => "รางวัลที่ 1",
            PrizeTier::Front3 => "เลขหน้า 3 ตัว",
            PrizeTier::Back3 => "เลขท้าย 3 ตัว",
            PrizeTier::Back2 => "เลขท้าย 2 ตัว",
            PrizeTier::NearFirst => "ข้างเคียงรางวัลที่ 1",
            PrizeTier::Tier2 => "รางวัลที่ 2",
            PrizeTier::Tier3 => "รางวัลที่ 3",
            PrizeTier::Tier4 => "รางวัลที่ 4",
            PrizeTier::Tier5 => "รางวัลที่ 5",
        }
    }

    pub fn digits(self) -> usize {
        match self {
            PrizeTier::Front3 | PrizeTier::Back3 => 3,
            PrizeTier::Back2 => 2,
            _ => 6,
        }
    }

    pub fn expected_count(self) -> usize {
        match self {
            PrizeTier::First | PrizeTier::Back2 => 1,
            PrizeTier::Front3 | PrizeTier::Back3 | PrizeTier::NearFirst => 2,
            PrizeTier::Tier2 => 5,
            PrizeTier::Tier3 => 10,
            PrizeTier::Tier4 => 50,
            PrizeTier::Tier5 => 100,
        }
    }

    /// Payout per winning ticket, in baht.
    pub fn amount(self) -> u64 {
        match self {
            PrizeTier::First => 6_000_000,
            PrizeTier::Tier2 => 200_000,
            PrizeTier::NearFirst => 100_000,
            PrizeTier::Tier3 => 80_000,
            PrizeTier::Tier4 => 40_000,
            PrizeTier::Tier5 => 20_000,
            PrizeTier::Front3 | PrizeTier::Back3 => 4_000,
            PrizeTier::Back2 => 2_000,
        }
    }
}

/// Results of one draw period, as extracted from the source page.
///
/// Empty strings (and short lists) mark tiers that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub draw_date: NaiveDate,
    pub draw_number: String,
    pub first_prize: String,
    pub front3: [String; 2],
    pub back3: [String; 2],
    pub back2: String,
    pub near_first: Vec<String>,
    pub tier2: Vec<String>,
    pub tier3: Vec<String>,
    pub tier4: Vec<String>,
    pub tier5: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrizeEntry {
    pub tier: PrizeTier,
    pub position: u32,
    pub number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawStatus {
    Complete,
    /// First prize known, some other tiers short or empty.
    Partial,
    /// No first prize: the scrape did not produce usable data.
    Incomplete,
}

impl DrawStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DrawStatus::Complete => "complete",
            DrawStatus::Partial => "partial",
            DrawStatus::Incomplete => "incomplete",
        }
    }
}

impl DrawRecord {
    pub fn new(draw_date: NaiveDate) -> Self {
        Self {
            draw_date,
            draw_number: draw_number(draw_date),
            first_prize: String::new(),
            front3: Default::default(),
            back3: Default::default(),
            back2: String::new(),
            near_first: Vec::new(),
            tier2: Vec::new(),
            tier3: Vec::new(),
            tier4: Vec::new(),
            tier5: Vec::new(),
        }
    }

    /// Non-empty winning numbers of one tier, in result-list order.
    pub fn numbers(&self, tier: PrizeTier) -> Vec<&str> {
        let values: Vec<&str> = match tier {
            PrizeTier::First => vec![self.first_prize.as_str()],
            PrizeTier::Front3 => self.front3.iter().map(String::as_str).collect(),
            PrizeTier::Back3 => self.back3.iter().map(String::as_str).collect(),
            PrizeTier::Back2 => vec![self.back2.as_str()],
            PrizeTier::NearFirst => self.near_first.iter().map(String::as_str).collect(),
            PrizeTier::Tier2 => self.tier2.iter().map(String::as_str).collect(),
            PrizeTier::Tier3 => self.tier3.iter().map(String::as_str).collect(),
            PrizeTier::Tier4 => self.tier4.iter().map(String::as_str).collect(),
            PrizeTier::Tier5 => self.tier5.iter().map(String::as_str).collect(),
        };
        values.into_iter().filter(|v| !v.is_empty()).collect()
    }

    /// Every stored winning number with its 1-based position in the tier.
    ///
    /// Positions follow the slot in the result list, so an empty first slot
    /// of a pair still leaves the second number at position 2.
    pub fn entries(&self) -> Vec<PrizeEntry> {
        let mut entries = Vec::new();
        for tier in PrizeTier::ALL {
            let slots: Vec<&String> = match tier {
                PrizeTier::First => vec![&self.first_prize],
                PrizeTier::Front3 => self.front3.iter().collect(),
                PrizeTier::Back3 => self.back3.iter().collect(),
                PrizeTier::Back2 => vec![&self.back2],
                PrizeTier::NearFirst => self.near_first.iter().collect(),
                PrizeTier::Tier2 => self.tier2.iter().collect(),
                PrizeTier::Tier3 => self.tier3.iter().collect(),
                PrizeTier::Tier4 => self.tier4.iter().collect(),
                PrizeTier::Tier5 => self.tier5.iter().collect(),
            };
            for (index, number) in slots.into_iter().enumerate() {
                if !number.is_empty() {
                    entries.push(PrizeEntry {
                        tier,
                        position: index as u32 + 1,
                        number: number.clone(),
                    });
                }
            }
        }
        entries
    }

    /// A draw is usable once its first prize is known.
    pub fn is_complete(&self) -> bool {
        !self.first_prize.is_empty()
    }

    pub fn is_fully_parsed(&self) -> bool {
        PrizeTier::ALL
            .into_iter()
            .all(|tier| self.numbers(tier).len() == tier.expected_count())
    }

    pub fn status(&self) -> DrawStatus {
        if !self.is_complete() {
            DrawStatus::Incomplete
        } else if self.is_fully_parsed() {
            DrawStatus::Complete
        } else {
            DrawStatus::Partial
        }
    }

    pub fn prize_count(&self) -> usize {
        self.entries().len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Full6,
    Front3,
    Back3,
    Back2,
}

impl MatchType {
    /// Tiers a candidate pattern of this kind is tested against.
    pub fn tiers(self) -> &'static [PrizeTier] {
        match self {
            MatchType::Full6 => &[
                PrizeTier::First,
                PrizeTier::NearFirst,
                PrizeTier::Tier2,
                PrizeTier::Tier3,
                PrizeTier::Tier4,
                PrizeTier::Tier5,
            ],
            MatchType::Front3 => &[PrizeTier::Front3],
            MatchType::Back3 => &[PrizeTier::Back3],
            MatchType::Back2 => &[PrizeTier::Back2],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeMatch {
    pub match_type: MatchType,
    pub matched_digits: String,
    pub prize_tier: PrizeTier,
    pub prize_name: String,
    pub amount: u64,
    pub position: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Win,
    NoWin,
    NoData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub number: String,
    pub draw_date: NaiveDate,
    pub draw_number: Option<String>,
    pub status: CheckStatus,
    pub total_matches: usize,
    pub total_amount: u64,
    pub results: Vec<PrizeMatch>,
    pub message: String,
}

/// Diagnostic record emitted by the pure extraction steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEvent {
    pub tier: PrizeTier,
    pub step: &'static str,
    pub outcome: TraceOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceOutcome {
    Matched { values: Vec<String> },
    Rejected { value: String, reason: &'static str },
    Missed,
}

impl TraceEvent {
    pub fn matched(tier: PrizeTier, step: &'static str, values: &[String]) -> Self {
        Self {
            tier,
            step,
            outcome: TraceOutcome::Matched {
                values: values.to_vec(),
            },
        }
    }

    pub fn rejected(
        tier: PrizeTier,
        step: &'static str,
        value: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self {
            tier,
            step,
            outcome: TraceOutcome::Rejected {
                value: value.into(),
                reason,
            },
        }
    }

    pub fn missed(tier: PrizeTier, step: &'static str) -> Self {
        Self {
            tier,
            step,
            outcome: TraceOutcome::Missed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DrawRow {
    pub id: i64,
    pub draw_date: NaiveDate,
    pub draw_number: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrizeRow {
    pub id: i64,
    pub draw_id: i64,
    pub prize_type: String,
    pub prize_number: String,
    pub position: u32,
    pub amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_record_has_buddhist_draw_number() {
        let record = DrawRecord::new(date(2025, 10, 16));
        assert_eq!(record.draw_number, "16/2568");
        assert_eq!(record.status(), DrawStatus::Incomplete);
        assert!(record.entries().is_empty());
    }

    #[test]
    fn test_entries_keep_slot_positions() {
        let mut record = DrawRecord::new(date(2025, 10, 1));
        record.first_prize = "123456".into();
        record.back3 = [String::new(), "789".into()];
        let entries = record.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].tier, PrizeTier::Back3);
        assert_eq!(entries[1].position, 2);
        assert_eq!(record.status(), DrawStatus::Partial);
    }

    #[test]
    fn test_tier_keys_round_trip() {
        for tier in PrizeTier::ALL {
            assert_eq!(PrizeTier::from_key(tier.as_str()), Some(tier));
        }
        assert_eq!(PrizeTier::from_key("sixth"), None);
    }

    #[test]
    fn test_match_type_serializes_lowercase() {
        let json = serde_json::to_string(&MatchType::Full6).unwrap();
        assert_eq!(json, "\"full6\"");
    }
}
