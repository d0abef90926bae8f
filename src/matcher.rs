//! Ticket matching against a draw record.

use chrono::NaiveDate;

use crate::types::{CheckReport, CheckStatus, DrawRecord, MatchType, PrizeMatch};

pub const WIN_MESSAGE: &str = "ถูกรางวัล!";
pub const NO_WIN_MESSAGE: &str = "ไม่ถูกรางวัล";

pub fn no_data_message(draw_date: NaiveDate) -> String {
    format!("ไม่สามารถหาข้อมูลหวยงวด {draw_date} ได้")
}

/// The four slices of a ticket that can win: whole number, first three,
/// last three and last two digits.
pub fn candidate_patterns(ticket: &str) -> Vec<(MatchType, &str)> {
    if ticket.len() != 6 || !ticket.bytes().all(|b| b.is_ascii_digit()) {
        return Vec::new();
    }
    vec![
        (MatchType::Full6, ticket),
        (MatchType::Front3, &ticket[..3]),
        (MatchType::Back3, &ticket[3..]),
        (MatchType::Back2, &ticket[4..]),
    ]
}

/// Every prize `ticket` wins in `record`, largest payout first.
///
/// A ticket that is not six ASCII digits wins nothing.
pub fn check_number(ticket: &str, record: &DrawRecord) -> Vec<PrizeMatch> {
    let entries = record.entries();
    let mut matches = Vec::new();

    for (match_type, digits) in candidate_patterns(ticket) {
        for tier in match_type.tiers() {
            for entry in entries.iter().filter(|e| e.tier == *tier) {
                if entry.number == digits {
                    matches.push(PrizeMatch {
                        match_type,
                        matched_digits: digits.to_string(),
                        prize_tier: *tier,
                        prize_name: tier.display_name().to_string(),
                        amount: tier.amount(),
                        position: entry.position,
                    });
                }
            }
        }
    }

    matches.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.position.cmp(&b.position))
    });
    matches
}

/// Answer for one query. `record` is `None` when the draw could not be
/// found or fetched.
pub fn build_report(ticket: &str, draw_date: NaiveDate, record: Option<&DrawRecord>) -> CheckReport {
    let Some(record) = record.filter(|r| r.is_complete()) else {
        return CheckReport {
            number: ticket.to_string(),
            draw_date,
            draw_number: record.map(|r| r.draw_number.clone()),
            status: CheckStatus::NoData,
            total_matches: 0,
            total_amount: 0,
            results: Vec::new(),
            message: no_data_message(draw_date),
        };
    };

    let results = check_number(ticket, record);
    let total_amount = results.iter().map(|m| m.amount).sum();
    let (status, message) = if results.is_empty() {
        (CheckStatus::NoWin, NO_WIN_MESSAGE)
    } else {
        (CheckStatus::Win, WIN_MESSAGE)
    };

    CheckReport {
        number: ticket.to_string(),
        draw_date,
        draw_number: Some(record.draw_number.clone()),
        status,
        total_matches: results.len(),
        total_amount,
        results,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrizeTier;

    fn record() -> DrawRecord {
        let mut record = DrawRecord::new(NaiveDate::from_ymd_opt(2025, 10, 16).unwrap());
        record.first_prize = "659214".into();
        record.front3 = ["119".into(), "358".into()];
        record.back3 = ["270".into(), "214".into()];
        record.back2 = "14".into();
        record.near_first = vec!["659213".into(), "659215".into()];
        record.tier2 = vec!["106979".into(), "223804".into()];
        record
    }

    #[test]
    fn test_candidate_patterns() {
        let patterns = candidate_patterns("123456");
        assert_eq!(
            patterns,
            vec![
                (MatchType::Full6, "123456"),
                (MatchType::Front3, "123"),
                (MatchType::Back3, "456"),
                (MatchType::Back2, "56"),
            ]
        );
        assert!(candidate_patterns("12345").is_empty());
        assert!(candidate_patterns("12345a").is_empty());
    }

    #[test]
    fn test_first_prize_also_wins_back3_and_back2() {
        let matches = check_number("659214", &record());
        let tiers: Vec<PrizeTier> = matches.iter().map(|m| m.prize_tier).collect();
        assert_eq!(
            tiers,
            vec![PrizeTier::First, PrizeTier::Back3, PrizeTier::Back2]
        );
        assert_eq!(matches[1].position, 2);
        assert_eq!(matches[2].matched_digits, "14");
    }

    #[test]
    fn test_one_match_per_pattern_kind() {
        let mut record = DrawRecord::new(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        record.first_prize = "123456".into();
        record.front3 = ["123".into(), "456".into()];
        record.back3 = ["456".into(), "789".into()];
        record.back2 = "56".into();

        let matches = check_number("123456", &record);
        let kinds: Vec<MatchType> = matches.iter().map(|m| m.match_type).collect();
        assert_eq!(
            kinds,
            vec![
                MatchType::Full6,
                MatchType::Front3,
                MatchType::Back3,
                MatchType::Back2
            ]
        );
        assert_eq!(matches[0].amount, 6_000_000);
        assert!(check_number("000000", &record).is_empty());
    }

    #[test]
    fn test_near_first_and_front3() {
        let matches = check_number("659215", &record());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].prize_tier, PrizeTier::NearFirst);
        assert_eq!(matches[0].amount, 100_000);
        assert_eq!(matches[0].position, 2);

        let matches = check_number("358000", &record());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_type, MatchType::Front3);
    }

    #[test]
    fn test_empty_slots_never_match() {
        let mut record = record();
        record.back2 = String::new();
        assert!(check_number("000000", &record).is_empty());
        assert!(check_number("", &record).is_empty());
    }

    #[test]
    fn test_build_report_statuses() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 16).unwrap();
        let record = record();

        let report = build_report("106979", date, Some(&record));
        assert_eq!(report.status, CheckStatus::Win);
        assert_eq!(report.total_amount, 200_000);
        assert_eq!(report.message, WIN_MESSAGE);

        let report = build_report("000001", date, Some(&record));
        assert_eq!(report.status, CheckStatus::NoWin);
        assert_eq!(report.total_matches, 0);

        let report = build_report("000001", date, None);
        assert_eq!(report.status, CheckStatus::NoData);
        assert_eq!(report.message, "ไม่สามารถหาข้อมูลหวยงวด 2025-10-16 ได้");

        let empty = DrawRecord::new(date);
        let report = build_report("000001", date, Some(&empty));
        assert_eq!(report.status, CheckStatus::NoData);
    }
}
