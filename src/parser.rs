//! Prize Parser: pulls every prize tier out of a result article body.
//!
//! Each tier is described by a row of [`TIER_RULES`]; the search strategies
//! are tried in a fixed order and the first hit wins. Nothing here fails:
//! a tier that cannot be found stays empty and leaves a trace event.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::types::{PrizeTier, TraceEvent};

/// Separator written after every number of a result row.
pub const NBSP_ENTITY: &str = "&nbsp;";

/// Values that show up from partial matches inside `000` in page text.
pub const NOISE_BACK3: &str = "000";
pub const NOISE_BACK2: &str = "00";

/// Line break as it appears in article text that was escaped twice.
const ESCAPED_NEWLINE: &str = "\\r\\n";

/// Characters scanned after the back-2 marker by the last-resort strategy.
const BACK2_WINDOW_CHARS: usize = 200;

/// Where a tier lives in the article text.
#[derive(Debug)]
pub struct TierRule {
    pub tier: PrizeTier,
    /// Anchor texts, tried in order.
    pub markers: &'static [&'static str],
    /// Where a multi-number section stops (next tier's anchor). Empty means
    /// the section runs to the end of the text.
    pub end_markers: &'static [&'static str],
}

/// Indexed by `PrizeTier as usize`.
pub const TIER_RULES: [TierRule; 9] = [
    TierRule {
        tier: PrizeTier::First,
        markers: &["รางวัลที่ 1"],
        end_markers: &[],
    },
    TierRule {
        tier: PrizeTier::Front3,
        markers: &["เลขหน้า 3 ตัว"],
        end_markers: &[],
    },
    TierRule {
        tier: PrizeTier::Back3,
        markers: &["เลขท้าย 3 ตัว"],
        end_markers: &[],
    },
    TierRule {
        tier: PrizeTier::Back2,
        markers: &["เลขท้าย 2 ตัว"],
        end_markers: &[],
    },
    TierRule {
        tier: PrizeTier::NearFirst,
        markers: &["ข้างเคียงรางวัลที่ 1", "รางวัลข้างเคียงรางวัลที่ 1"],
        end_markers: &[],
    },
    TierRule {
        tier: PrizeTier::Tier2,
        markers: &["รางวัลที่ 2 มี 5 รางวัล"],
        end_markers: &["รางวัลที่ 3 มี 10 รางวัล"],
    },
    TierRule {
        tier: PrizeTier::Tier3,
        markers: &["รางวัลที่ 3 มี 10 รางวัล"],
        end_markers: &["รางวัลที่ 4 มี 50 รางวัล"],
    },
    TierRule {
        tier: PrizeTier::Tier4,
        markers: &["รางวัลที่ 4 มี 50 รางวัล"],
        end_markers: &["รางวัลที่ 5 มี 100 รางวัล"],
    },
    TierRule {
        tier: PrizeTier::Tier5,
        markers: &["รางวัลที่ 5 มี 100 รางวัล"],
        end_markers: &[],
    },
];

pub fn rule(tier: PrizeTier) -> &'static TierRule {
    &TIER_RULES[tier as usize]
}

/// Per-tier results of one parse, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedPrizes {
    pub first_prize: Option<String>,
    pub front3: Option<[String; 2]>,
    pub back3: Option<[String; 2]>,
    pub back2: Option<String>,
    pub near_first: Option<[String; 2]>,
    pub tier2: Vec<String>,
    pub tier3: Vec<String>,
    pub tier4: Vec<String>,
    pub tier5: Vec<String>,
}

impl ParsedPrizes {
    /// Takes the headline tiers (first, front-3, back-3, back-2) from
    /// `fallback` where this parse found nothing. Returns the tiers filled.
    pub fn fill_missing_from(&mut self, fallback: ParsedPrizes) -> Vec<PrizeTier> {
        let mut filled = Vec::new();
        if self.first_prize.is_none() && fallback.first_prize.is_some() {
            self.first_prize = fallback.first_prize;
            filled.push(PrizeTier::First);
        }
        if self.front3.is_none() && fallback.front3.is_some() {
            self.front3 = fallback.front3;
            filled.push(PrizeTier::Front3);
        }
        if self.back3.is_none() && fallback.back3.is_some() {
            self.back3 = fallback.back3;
            filled.push(PrizeTier::Back3);
        }
        if self.back2.is_none() && fallback.back2.is_some() {
            self.back2 = fallback.back2;
            filled.push(PrizeTier::Back2);
        }
        filled
    }

    fn section_mut(&mut self, tier: PrizeTier) -> Option<&mut Vec<String>> {
        match tier {
            PrizeTier::Tier2 => Some(&mut self.tier2),
            PrizeTier::Tier3 => Some(&mut self.tier3),
            PrizeTier::Tier4 => Some(&mut self.tier4),
            PrizeTier::Tier5 => Some(&mut self.tier5),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub prizes: ParsedPrizes,
    pub trace: Vec<TraceEvent>,
}

struct Patterns {
    exact_six: Regex,
    standalone_six: Regex,
    standalone_three: Regex,
    pair_three: Regex,
    pair_six: Regex,
    pair_before_back3: Regex,
    escaped_line_two: Regex,
    own_line_two: Regex,
    word_two: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let sep = r"(?:&nbsp;|\x{A0})";
        let pair = |width: usize| {
            format!(r"(?:^|[^0-9])([0-9]{{{width}}}){sep}\s*([0-9]{{{width}}}){sep}")
        };
        Patterns {
            exact_six: Regex::new(r"(?:^|[^0-9])([0-9]{6})(?:[^0-9]|$)")
                .expect("valid exact six regex"),
            standalone_six: Regex::new(r"\b([0-9]{6})\b").expect("valid six regex"),
            standalone_three: Regex::new(r"\b([0-9]{3})\b").expect("valid three regex"),
            pair_three: Regex::new(&pair(3)).expect("valid pair regex"),
            pair_six: Regex::new(&pair(6)).expect("valid pair regex"),
            pair_before_back3: Regex::new(&format!(r"{}\s*(?s:.*?)เลขท้าย 3 ตัว", pair(3)))
                .expect("valid front3 alt regex"),
            escaped_line_two: Regex::new(r"\\r\\n([0-9]{2})\\r\\n")
                .expect("valid escaped line regex"),
            own_line_two: Regex::new(r"[\r\n]+([0-9]{2})[ \t]*[\r\n]+")
                .expect("valid own line regex"),
            word_two: Regex::new(r"\b[0-9]{2}").expect("valid two digit regex"),
        }
    })
}

/// Runs every tier strategy over `body` in precedence order.
///
/// The same body always yields the same outcome.
pub fn parse_article(body: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    parse_first_prize(body, &mut outcome);
    parse_front3(body, &mut outcome);
    parse_back3(body, &mut outcome);
    parse_back2(body, &mut outcome);
    parse_near_first(body, &mut outcome);
    for tier in [
        PrizeTier::Tier2,
        PrizeTier::Tier3,
        PrizeTier::Tier4,
        PrizeTier::Tier5,
    ] {
        parse_section(body, tier, &mut outcome);
    }

    outcome
}

/// Byte range of the first anchor of `tier` found in `body`, trying the
/// rule's markers in order.
fn find_marker(body: &str, tier: PrizeTier) -> Option<(usize, usize)> {
    rule(tier)
        .markers
        .iter()
        .find_map(|marker| body.find(marker).map(|start| (start, start + marker.len())))
}

/// Text after a marker up to the next anchor of any tier.
fn segment_after(body: &str, marker_end: usize) -> &str {
    let rest = &body[marker_end..];
    let end = TIER_RULES
        .iter()
        .flat_map(|rule| rule.markers.iter().chain(rule.end_markers.iter()))
        .filter_map(|marker| rest.find(marker))
        .min()
        .unwrap_or(rest.len());
    &rest[..end]
}

fn capture_pair(re: &Regex, text: &str) -> Option<[String; 2]> {
    re.captures(text)
        .map(|caps| [caps[1].to_string(), caps[2].to_string()])
}

fn parse_first_prize(body: &str, outcome: &mut ParseOutcome) {
    let tier = PrizeTier::First;
    let patterns = patterns();

    let anchored = find_marker(body, tier).and_then(|(_, end)| {
        patterns
            .exact_six
            .captures(segment_after(body, end))
            .map(|caps| caps[1].to_string())
    });
    if let Some(value) = anchored {
        outcome
            .trace
            .push(TraceEvent::matched(tier, "marker", std::slice::from_ref(&value)));
        outcome.prizes.first_prize = Some(value);
        return;
    }
    outcome.trace.push(TraceEvent::missed(tier, "marker"));

    match patterns.standalone_six.captures(body) {
        Some(caps) => {
            let value = caps[1].to_string();
            outcome
                .trace
                .push(TraceEvent::matched(tier, "standalone", std::slice::from_ref(&value)));
            outcome.prizes.first_prize = Some(value);
        }
        None => outcome.trace.push(TraceEvent::missed(tier, "standalone")),
    }
}

fn parse_front3(body: &str, outcome: &mut ParseOutcome) {
    let tier = PrizeTier::Front3;
    let patterns = patterns();

    let anchored = find_marker(body, tier)
        .and_then(|(_, end)| capture_pair(&patterns.pair_three, segment_after(body, end)));
    if let Some(pair) = anchored {
        outcome.trace.push(TraceEvent::matched(tier, "marker_pair", &pair));
        outcome.prizes.front3 = Some(pair);
        return;
    }
    outcome.trace.push(TraceEvent::missed(tier, "marker_pair"));

    match capture_pair(&patterns.pair_before_back3, body) {
        Some(pair) => {
            outcome
                .trace
                .push(TraceEvent::matched(tier, "pair_before_back3", &pair));
            outcome.prizes.front3 = Some(pair);
        }
        None => outcome
            .trace
            .push(TraceEvent::missed(tier, "pair_before_back3")),
    }
}

fn parse_back3(body: &str, outcome: &mut ParseOutcome) {
    let tier = PrizeTier::Back3;
    let patterns = patterns();
    let marker = find_marker(body, tier);

    let anchored =
        marker.and_then(|(_, end)| capture_pair(&patterns.pair_three, segment_after(body, end)));
    if let Some(pair) = anchored {
        outcome.trace.push(TraceEvent::matched(tier, "marker_pair", &pair));
        outcome.prizes.back3 = Some(pair);
        return;
    }
    outcome.trace.push(TraceEvent::missed(tier, "marker_pair"));

    // Positional fallback: standalone 3-digit runs after the marker that no
    // earlier tier consumed and that are not page noise.
    let used: Vec<String> = outcome
        .prizes
        .front3
        .iter()
        .flatten()
        .cloned()
        .collect();
    let usable = |value: &str| value != NOISE_BACK3 && !used.iter().any(|u| u == value);

    let pool = patterns
        .standalone_three
        .captures_iter(body)
        .filter(|caps| usable(&caps[1]))
        .count();

    let picked: Option<[String; 2]> = match marker {
        Some((start, _)) if pool >= 2 => {
            let after: Vec<String> = patterns
                .standalone_three
                .captures_iter(&body[start..])
                .map(|caps| caps[1].to_string())
                .filter(|value| usable(value))
                .take(2)
                .collect();
            match after.as_slice() {
                [a, b] => Some([a.clone(), b.clone()]),
                _ => None,
            }
        }
        _ => None,
    };

    match picked {
        Some(pair) => {
            outcome.trace.push(TraceEvent::matched(tier, "positional", &pair));
            outcome.prizes.back3 = Some(pair);
        }
        None => outcome.trace.push(TraceEvent::missed(tier, "positional")),
    }
}

/// First two-digit run in `text` that is not followed by another digit.
fn two_digits_not_followed_by_digit(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    (0..bytes.len().saturating_sub(1))
        .find(|&i| {
            bytes[i].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit()
                && bytes.get(i + 2).is_none_or(|b| !b.is_ascii_digit())
        })
        .map(|i| &text[i..i + 2])
}

fn window_chars(text: &str, chars: usize) -> &str {
    let end = text
        .char_indices()
        .nth(chars)
        .map_or(text.len(), |(index, _)| index);
    &text[..end]
}

fn parse_back2(body: &str, outcome: &mut ParseOutcome) {
    let tier = PrizeTier::Back2;
    let patterns = patterns();

    let Some((start, end)) = find_marker(body, tier) else {
        outcome.trace.push(TraceEvent::missed(tier, "marker"));
        return;
    };
    let segment = segment_after(body, end);

    let anchored: [(&'static str, Option<&str>); 3] = [
        (
            "escaped_line",
            patterns
                .escaped_line_two
                .captures(segment)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str()),
        ),
        (
            "own_line",
            patterns
                .own_line_two
                .captures(segment)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str()),
        ),
        (
            "not_followed_by_digit",
            two_digits_not_followed_by_digit(segment),
        ),
    ];

    for (step, candidate) in anchored {
        match candidate {
            Some(NOISE_BACK2) => {
                outcome
                    .trace
                    .push(TraceEvent::rejected(tier, step, NOISE_BACK2, "noise"));
            }
            Some(value) => {
                let value = value.to_string();
                outcome
                    .trace
                    .push(TraceEvent::matched(tier, step, std::slice::from_ref(&value)));
                outcome.prizes.back2 = Some(value);
                return;
            }
            None => outcome.trace.push(TraceEvent::missed(tier, step)),
        }
    }

    let window = window_chars(&body[start..], BACK2_WINDOW_CHARS);
    let candidate = patterns
        .word_two
        .find_iter(window)
        .filter(|m| {
            window
                .as_bytes()
                .get(m.end())
                .is_none_or(|b| !b.is_ascii_digit())
        })
        .map(|m| m.as_str())
        .find(|value| *value != NOISE_BACK2);

    match candidate {
        Some(value) => {
            let value = value.to_string();
            outcome
                .trace
                .push(TraceEvent::matched(tier, "window", std::slice::from_ref(&value)));
            outcome.prizes.back2 = Some(value);
        }
        None => outcome.trace.push(TraceEvent::missed(tier, "window")),
    }
}

fn parse_near_first(body: &str, outcome: &mut ParseOutcome) {
    let tier = PrizeTier::NearFirst;
    let patterns = patterns();

    for marker in rule(tier).markers {
        let Some(start) = body.find(marker) else {
            continue;
        };
        let segment = segment_after(body, start + marker.len());
        if let Some(pair) = capture_pair(&patterns.pair_six, segment) {
            outcome.trace.push(TraceEvent::matched(tier, "marker_pair", &pair));
            outcome.prizes.near_first = Some(pair);
            return;
        }
    }
    outcome.trace.push(TraceEvent::missed(tier, "marker_pair"));
}

/// Runs of exactly `width` digits that end a table cell.
fn cell_numbers(section: &str, width: usize) -> Vec<String> {
    let bytes = section.as_bytes();
    let mut numbers = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i - start != width {
            continue;
        }
        let rest = &section[i..];
        let terminated = rest.is_empty()
            || rest.starts_with(NBSP_ENTITY)
            || rest.starts_with(ESCAPED_NEWLINE)
            || rest.starts_with(char::is_whitespace);
        if terminated {
            numbers.push(section[start..i].to_string());
        }
    }
    numbers
}

fn parse_section(body: &str, tier: PrizeTier, outcome: &mut ParseOutcome) {
    let Some((_, start)) = find_marker(body, tier) else {
        outcome.trace.push(TraceEvent::missed(tier, "section"));
        return;
    };

    let rest = &body[start..];
    let end = rule(tier)
        .end_markers
        .iter()
        .filter_map(|marker| rest.find(marker))
        .min()
        .unwrap_or(rest.len());

    let mut numbers = cell_numbers(&rest[..end], tier.digits());
    numbers.truncate(tier.expected_count());

    if numbers.is_empty() {
        outcome.trace.push(TraceEvent::missed(tier, "section"));
        return;
    }
    outcome.trace.push(TraceEvent::matched(tier, "section", &numbers));
    if let Some(slot) = outcome.prizes.section_mut(tier) {
        *slot = numbers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TraceOutcome;

    fn row(numbers: &[&str]) -> String {
        numbers
            .iter()
            .map(|n| format!("{n}&nbsp;"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn sample_body() -> String {
        [
            "ตรวจหวย ผลสลากกินแบ่งรัฐบาล งวดวันที่ 16 ตุลาคม 2568",
            "รางวัลที่ 1 รางวัลละ 6,000,000 บาท",
            "659214",
            "เลขหน้า 3 ตัว รางวัลละ 4,000 บาท",
            "119&nbsp; 358&nbsp;",
            "เลขท้าย 3 ตัว รางวัลละ 4,000 บาท",
            "270&nbsp; 851&nbsp;",
            "เลขท้าย 2 ตัว รางวัลละ 2,000 บาท",
            "26",
            "ผลสลากกินแบ่งรัฐบาล รางวัลข้างเคียงรางวัลที่ 1 รางวัลละ 100,000 บาท",
            "659213&nbsp; 659215&nbsp;",
            "ผลสลากกินแบ่งรัฐบาล รางวัลที่ 2 มี 5 รางวัล รางวัลละ 200,000 บาท",
            &row(&["106979", "223804", "394212", "574580", "919468"]),
            "ผลสลากกินแบ่งรัฐบาล รางวัลที่ 3 มี 10 รางวัล รางวัลละ 80,000 บาท",
            &row(&[
                "015468", "105412", "226587", "337164", "448123", "550912", "661347",
                "772580", "883019", "994276",
            ]),
        ]
        .join("\r\n")
    }

    #[test]
    fn test_rules_are_indexed_by_tier() {
        for (index, tier) in PrizeTier::ALL.into_iter().enumerate() {
            assert_eq!(TIER_RULES[index].tier, tier);
            assert_eq!(rule(tier).tier, tier);
        }
    }

    #[test]
    fn test_parse_headline_tiers() {
        let prizes = parse_article(&sample_body()).prizes;
        assert_eq!(prizes.first_prize.as_deref(), Some("659214"));
        assert_eq!(prizes.front3, Some(["119".to_string(), "358".to_string()]));
        assert_eq!(prizes.back3, Some(["270".to_string(), "851".to_string()]));
        assert_eq!(prizes.back2.as_deref(), Some("26"));
        assert_eq!(
            prizes.near_first,
            Some(["659213".to_string(), "659215".to_string()])
        );
    }

    #[test]
    fn test_parse_sections_stop_at_next_tier() {
        let prizes = parse_article(&sample_body()).prizes;
        assert_eq!(prizes.tier2.len(), 5);
        assert_eq!(prizes.tier2[0], "106979");
        assert_eq!(prizes.tier3.len(), 10);
        assert_eq!(prizes.tier3[9], "994276");
        assert!(prizes.tier4.is_empty());
        assert!(prizes.tier5.is_empty());
    }

    #[test]
    fn test_section_truncates_to_expected_count() {
        let body = format!(
            "รางวัลที่ 2 มี 5 รางวัล รางวัลละ 200,000 บาท\n{}\nรางวัลที่ 3 มี 10 รางวัล",
            row(&["111111", "222222", "333333", "444444", "555555", "666666", "777777"])
        );
        let prizes = parse_article(&body).prizes;
        assert_eq!(
            prizes.tier2,
            vec!["111111", "222222", "333333", "444444", "555555"]
        );
    }

    #[test]
    fn test_section_accepts_last_column_without_entity() {
        let body = "รางวัลที่ 5 มี 100 รางวัล รางวัลละ 20,000 บาท\n\
                    100001&nbsp; 100002&nbsp; 100003\n100004&nbsp; 100005";
        let prizes = parse_article(body).prizes;
        assert_eq!(
            prizes.tier5,
            vec!["100001", "100002", "100003", "100004", "100005"]
        );
    }

    #[test]
    fn test_first_prize_falls_back_to_standalone_run() {
        let body = "งวดนี้ เลขเด็ด 482913 ออกแล้ว";
        let outcome = parse_article(body);
        assert_eq!(outcome.prizes.first_prize.as_deref(), Some("482913"));
        assert!(outcome.trace.contains(&TraceEvent::missed(PrizeTier::First, "marker")));
    }

    #[test]
    fn test_front3_pair_before_back3_marker() {
        let body = "ผลรางวัล 321&nbsp; 654&nbsp; เลขท้าย 3 ตัว 777&nbsp; 888&nbsp;";
        let prizes = parse_article(body).prizes;
        assert_eq!(prizes.front3, Some(["321".to_string(), "654".to_string()]));
        assert_eq!(prizes.back3, Some(["777".to_string(), "888".to_string()]));
    }

    #[test]
    fn test_back3_positional_fallback_skips_noise_and_front3() {
        let body = "เลขหน้า 3 ตัว 119&nbsp; 358&nbsp; \
                    เลขท้าย 3 ตัว รางวัลละ 4,000 บาท 119 270 851";
        let prizes = parse_article(body).prizes;
        assert_eq!(prizes.front3, Some(["119".to_string(), "358".to_string()]));
        assert_eq!(prizes.back3, Some(["270".to_string(), "851".to_string()]));
    }

    #[test]
    fn test_back2_rejects_noise_from_amount() {
        let body = "เลขท้าย 2 ตัว รางวัลละ 2,000 บาท 26 ";
        let outcome = parse_article(body);
        assert_eq!(outcome.prizes.back2.as_deref(), Some("26"));
        assert!(outcome.trace.iter().any(|event| {
            event.tier == PrizeTier::Back2
                && matches!(event.outcome, TraceOutcome::Rejected { ref value, .. } if value == "00")
        }));
    }

    #[test]
    fn test_back2_never_yields_double_zero() {
        let body = "เลขท้าย 2 ตัว รางวัลละ 2,000 บาท\n00\n";
        let prizes = parse_article(body).prizes;
        assert_eq!(prizes.back2, None);
    }

    #[test]
    fn test_back2_on_escaped_line() {
        let body = r"เลขท้าย 2 ตัว รางวัลละ 2,000 บาท\r\n26\r\nรางวัลข้างเคียงรางวัลที่ 1";
        let outcome = parse_article(body);
        assert_eq!(outcome.prizes.back2.as_deref(), Some("26"));
        assert!(outcome.trace.contains(&TraceEvent::matched(
            PrizeTier::Back2,
            "escaped_line",
            &["26".to_string()]
        )));
    }

    #[test]
    fn test_section_cells_end_at_escaped_newline() {
        let body = r"รางวัลที่ 2 มี 5 รางวัล รางวัลละ 200,000 บาท\r\n111111&nbsp; 222222\r\n333333&nbsp; 444444&nbsp; 555555\r\nรางวัลที่ 3";
        let prizes = parse_article(body).prizes;
        assert_eq!(
            prizes.tier2,
            vec!["111111", "222222", "333333", "444444", "555555"]
        );
    }

    #[test]
    fn test_missing_tiers_stay_empty() {
        let outcome = parse_article("ไม่มีข้อมูลรางวัล");
        assert_eq!(outcome.prizes, ParsedPrizes::default());
        assert!(outcome
            .trace
            .iter()
            .all(|event| event.outcome == TraceOutcome::Missed));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let body = sample_body();
        assert_eq!(parse_article(&body), parse_article(&body));
    }

    #[test]
    fn test_fill_missing_from_keeps_existing_values() {
        let mut primary = ParsedPrizes {
            first_prize: Some("111111".into()),
            ..Default::default()
        };
        let fallback = ParsedPrizes {
            first_prize: Some("999999".into()),
            back2: Some("42".into()),
            ..Default::default()
        };
        let filled = primary.fill_missing_from(fallback);
        assert_eq!(filled, vec![PrizeTier::Back2]);
        assert_eq!(primary.first_prize.as_deref(), Some("111111"));
        assert_eq!(primary.back2.as_deref(), Some("42"));
    }
}
