use chrono::NaiveDate;
use std::sync::Arc;

use lottery_lib::database;
use lottery_lib::fetcher::FileDocumentSource;
use lottery_lib::pipeline::{BodySource, extract_draw};
use lottery_lib::service::{LotteryService, SyncOutcome};
use lottery_lib::{CheckStatus, DrawStatus, MatchType, PrizeTier, TraceOutcome, check_number};

const FULL_PAGE: &str = include_str!("fixtures/16102568.html");
const DOM_ONLY_PAGE: &str = include_str!("fixtures/01102568.html");

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fixtures_dir() -> String {
    format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_full_page_yields_complete_record() {
    let extraction = extract_draw(FULL_PAGE, date(2025, 10, 16));
    let record = &extraction.record;

    assert_eq!(extraction.source, BodySource::JsonLd);
    assert_eq!(record.draw_number, "16/2568");
    assert_eq!(record.first_prize, "659214");
    assert_eq!(record.front3, ["119".to_string(), "358".to_string()]);
    assert_eq!(record.back3, ["270".to_string(), "851".to_string()]);
    assert_eq!(record.back2, "26");
    assert_eq!(record.near_first, vec!["659213", "659215"]);

    assert_eq!(record.tier2, vec!["605634", "514207", "625566", "619744", "608768"]);
    assert_eq!(record.tier3.len(), 10);
    assert_eq!(record.tier3[0], "108193");
    assert_eq!(record.tier4.len(), 50);
    assert_eq!(record.tier4.first().map(String::as_str), Some("161807"));
    assert_eq!(record.tier4.last().map(String::as_str), Some("685750"));
    assert_eq!(record.tier5.len(), 100);
    assert_eq!(record.tier5.first().map(String::as_str), Some("748903"));
    assert_eq!(record.tier5.last().map(String::as_str), Some("784783"));

    assert_eq!(record.status(), DrawStatus::Complete);
    assert_eq!(extraction.parsed_tiers(), PrizeTier::ALL.len());
    assert!(
        extraction
            .trace
            .iter()
            .all(|event| !matches!(event.outcome, TraceOutcome::Rejected { .. }))
    );
}

#[test]
fn test_extraction_is_deterministic() {
    let first = extract_draw(FULL_PAGE, date(2025, 10, 16));
    let second = extract_draw(FULL_PAGE, date(2025, 10, 16));
    assert_eq!(first.record, second.record);
    assert_eq!(first.trace, second.trace);
}

#[test]
fn test_page_without_article_falls_back_to_dom() {
    let extraction = extract_draw(DOM_ONLY_PAGE, date(2025, 10, 1));
    let record = &extraction.record;

    assert_eq!(extraction.source, BodySource::Dom);
    assert_eq!(record.first_prize, "875121");
    assert_eq!(record.front3, ["213".to_string(), "749".to_string()]);
    assert_eq!(record.back3, ["083".to_string(), "440".to_string()]);
    assert_eq!(record.back2, "93");
    assert!(record.near_first.is_empty());
    assert!(record.tier2.is_empty());
    assert_eq!(record.status(), DrawStatus::Partial);
}

#[test]
fn test_matching_against_extracted_record() {
    let record = extract_draw(FULL_PAGE, date(2025, 10, 16)).record;

    let matches = check_number("659214", &record);
    assert_eq!(matches[0].prize_tier, PrizeTier::First);
    assert_eq!(matches[0].amount, 6_000_000);

    let matches = check_number("659213", &record);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].prize_tier, PrizeTier::NearFirst);
    assert_eq!(matches[0].position, 1);

    let matches = check_number("119851", &record);
    let kinds: Vec<MatchType> = matches.iter().map(|m| m.match_type).collect();
    assert_eq!(kinds, vec![MatchType::Front3, MatchType::Back3]);

    let matches = check_number("784783", &record);
    assert_eq!(matches[0].prize_tier, PrizeTier::Tier5);
    assert_eq!(matches[0].position, 100);
}

#[tokio::test]
async fn test_offline_sync_and_check() {
    let conn = database::open_in_memory().unwrap();
    let service = LotteryService::new(
        Arc::new(conn),
        Arc::new(FileDocumentSource::new(fixtures_dir())),
    );

    let outcomes = service
        .sync_dates(&[date(2025, 10, 1), date(2025, 10, 16), date(2025, 9, 16)], false)
        .await
        .unwrap();
    assert_eq!(
        outcomes,
        vec![
            (date(2025, 10, 1), SyncOutcome::Saved),
            (date(2025, 10, 16), SyncOutcome::Saved),
            (date(2025, 9, 16), SyncOutcome::Failed),
        ]
    );

    // Complete draws are not fetched again.
    let outcome = service.sync_draw(date(2025, 10, 16), false).await.unwrap();
    assert_eq!(outcome, SyncOutcome::Skipped);

    let stored = database::get_draw(service.connection(), date(2025, 10, 16))
        .unwrap()
        .unwrap();
    assert_eq!(stored.prize_count(), 1 + 2 + 2 + 1 + 2 + 5 + 10 + 50 + 100);

    let report = service.check_ticket("000026", date(2025, 10, 16)).await.unwrap();
    assert_eq!(report.status, CheckStatus::Win);
    assert_eq!(report.total_amount, 2_000);

    let report = service.check_ticket("000000", date(2025, 9, 16)).await.unwrap();
    assert_eq!(report.status, CheckStatus::NoData);
}
