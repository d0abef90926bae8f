//! Text replies for chat clients and terminal output.

use chrono::NaiveDate;
use std::fmt::Write;

use crate::types::{CheckReport, CheckStatus, DrawRecord, PrizeTier};

/// `6000000` → `6,000,000`.
pub fn format_baht(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Chat reply for a ticket check.
pub fn format_check_message(report: &CheckReport, today: NaiveDate) -> String {
    let number = &report.number;
    let date = report.draw_date;

    if date > today {
        return format!(
            "🔮 เลข {number}\n📅 งวด {date}\n\n⏰ งวดนี้ยังไม่ออกผล\n\nโปรดรอผลออกในวันที่ {} ค่ะ 🕐",
            date.format("%d/%m/%Y")
        );
    }

    let draw_number = match (&report.draw_number, report.status) {
        (Some(draw_number), CheckStatus::Win | CheckStatus::NoWin) => draw_number,
        _ => {
            return format!(
                "🎫 เลข {number}\n📅 งวด {date}\n\n❓ ไม่พบข้อมูลงวดนี้\n\nกรุณาตรวจสอบวันที่อีกครั้งค่ะ 🤔"
            );
        }
    };

    if report.results.is_empty() {
        return format!(
            "🎫 เลข {number}\n📅 งวด {draw_number} ({date})\n\n💔 ไม่ถูกรางวัล\n\nลองใหม่งวดหน้านะคะ! 🍀"
        );
    }

    let mut reply = format!(
        "🎊 เลข {number}\n📅 งวด {draw_number} ({date})\n\n🏆 ถูกรางวัล {} รางวัล!\n\n",
        report.total_matches
    );
    for prize in &report.results {
        let _ = write!(
            reply,
            "🎁 {}\n   เลขที่ถูก: {}\n   รางวัล: {} บาท\n\n",
            prize.prize_name,
            prize.matched_digits,
            format_baht(prize.amount)
        );
    }
    let _ = write!(
        reply,
        "💰 รวมทั้งหมด: {} บาท\n\n🎉 ยินดีด้วยค่ะ!",
        format_baht(report.total_amount)
    );
    reply
}

/// One line per tier, `-` for tiers that could not be read.
pub fn format_draw_summary(record: &DrawRecord) -> String {
    let mut summary = format!(
        "ผลสลากกินแบ่งรัฐบาล งวด {} ({})\n",
        record.draw_number, record.draw_date
    );
    for tier in PrizeTier::ALL {
        let numbers = record.numbers(tier);
        let shown = if numbers.is_empty() {
            "-".to_string()
        } else {
            numbers.join(" ")
        };
        let _ = writeln!(
            summary,
            "{} ({} บาท): {}",
            tier.display_name(),
            format_baht(tier.amount()),
            shown
        );
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::build_report;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record() -> DrawRecord {
        let mut record = DrawRecord::new(date(2025, 10, 16));
        record.first_prize = "659214".into();
        record.back2 = "14".into();
        record
    }

    #[test]
    fn test_format_baht() {
        assert_eq!(format_baht(0), "0");
        assert_eq!(format_baht(999), "999");
        assert_eq!(format_baht(2_000), "2,000");
        assert_eq!(format_baht(6_002_000), "6,002,000");
    }

    #[test]
    fn test_win_message_lists_prizes_and_total() {
        let report = build_report("659214", date(2025, 10, 16), Some(&record()));
        let text = format_check_message(&report, date(2025, 10, 19));
        assert!(text.starts_with("🎊 เลข 659214\n📅 งวด 16/2568 (2025-10-16)"));
        assert!(text.contains("🏆 ถูกรางวัล 2 รางวัล!"));
        assert!(text.contains("🎁 รางวัลที่ 1\n   เลขที่ถูก: 659214\n   รางวัล: 6,000,000 บาท"));
        assert!(text.contains("💰 รวมทั้งหมด: 6,002,000 บาท"));
    }

    #[test]
    fn test_other_replies() {
        let today = date(2025, 10, 19);

        let report = build_report("111111", date(2025, 10, 16), Some(&record()));
        assert!(format_check_message(&report, today).contains("💔 ไม่ถูกรางวัล"));

        let report = build_report("111111", date(2025, 10, 16), None);
        assert!(format_check_message(&report, today).contains("❓ ไม่พบข้อมูลงวดนี้"));

        let report = build_report("111111", date(2025, 11, 1), None);
        let text = format_check_message(&report, today);
        assert!(text.contains("⏰ งวดนี้ยังไม่ออกผล"));
        assert!(text.contains("01/11/2025"));
    }

    #[test]
    fn test_draw_summary_marks_missing_tiers() {
        let summary = format_draw_summary(&record());
        assert!(summary.starts_with("ผลสลากกินแบ่งรัฐบาล งวด 16/2568 (2025-10-16)"));
        assert!(summary.contains("รางวัลที่ 1 (6,000,000 บาท): 659214"));
        assert!(summary.contains("เลขหน้า 3 ตัว (4,000 บาท): -"));
    }
}
