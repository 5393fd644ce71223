// src/dashboard.rs
// =============================================================================
// This module renders the usage dashboard.
//
// Two kinds of content appear here:
// - Live session state: the quota (remaining / total / usage bar) and the
//   current plan's feature summary
// - Demo statistics: the weekly activity, status distribution and recent
//   checks are fixed presentation seed data, the numbers a fresh install
//   shows before any real history exists
//
// Rust concepts:
// - const arrays: The demo data is baked into the binary
// - Iterator sums: Totals derive from the data instead of being repeated
// =============================================================================

use crate::checker::{status_icon, BacklinkStatus};
use crate::i18n::{self, Language};
use crate::plan::Plan;
use crate::quota::Quota;

// One row of the weekly activity card
pub struct DayActivity {
    pub day_en: &'static str,
    pub day_tr: &'static str,
    pub checks: u32,
    pub active: u32,
    pub broken: u32,
}

impl DayActivity {
    pub fn day(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.day_en,
            Language::Turkish => self.day_tr,
        }
    }
}

// Demo: checks run per weekday
pub const WEEKLY_ACTIVITY: [DayActivity; 7] = [
    DayActivity { day_en: "Mon", day_tr: "Pzt", checks: 12, active: 10, broken: 2 },
    DayActivity { day_en: "Tue", day_tr: "Sal", checks: 19, active: 16, broken: 3 },
    DayActivity { day_en: "Wed", day_tr: "Çar", checks: 8, active: 7, broken: 1 },
    DayActivity { day_en: "Thu", day_tr: "Per", checks: 15, active: 12, broken: 3 },
    DayActivity { day_en: "Fri", day_tr: "Cum", checks: 22, active: 18, broken: 4 },
    DayActivity { day_en: "Sat", day_tr: "Cmt", checks: 5, active: 4, broken: 1 },
    DayActivity { day_en: "Sun", day_tr: "Paz", checks: 3, active: 3, broken: 0 },
];

// Demo: how all monitored links are doing
pub const STATUS_DISTRIBUTION: [(BacklinkStatus, u32); 3] = [
    (BacklinkStatus::Active, 156),
    (BacklinkStatus::Broken, 24),
    (BacklinkStatus::Redirect, 12),
];

// One row of the recent activity card
pub struct RecentCheck {
    pub url: &'static str,
    pub status: BacklinkStatus,
    pub minutes_ago: u32,
}

// Demo: the latest checks
pub const RECENT_CHECKS: [RecentCheck; 4] = [
    RecentCheck { url: "https://example.com/page1", status: BacklinkStatus::Active, minutes_ago: 2 },
    RecentCheck { url: "https://example.com/page2", status: BacklinkStatus::Broken, minutes_ago: 5 },
    RecentCheck { url: "https://example.com/page3", status: BacklinkStatus::Active, minutes_ago: 10 },
    RecentCheck { url: "https://example.com/page4", status: BacklinkStatus::Redirect, minutes_ago: 15 },
];

/// Total links covered by the demo distribution
pub fn monitored_total() -> u32 {
    STATUS_DISTRIBUTION.iter().map(|(_, count)| count).sum()
}

// Prints the whole dashboard to stdout
pub fn print_dashboard(plan: Plan, quota: &Quota, language: Language) {
    println!("📊 {}", i18n::dashboard(language));
    println!();

    // Quota card: the one piece of live state
    println!(
        "   {}: {} / {}",
        i18n::remaining_checks(language),
        quota.remaining(),
        quota.total()
    );
    println!(
        "   {}: {}  ({:.0}%)",
        i18n::checks_used(language),
        quota.used(),
        quota.usage_percent()
    );
    println!("   {}", usage_bar(quota.usage_percent(), 24));
    println!();

    // Weekly activity (demo data)
    println!("📅 {}", i18n::weekly_activity(language));
    for day in &WEEKLY_ACTIVITY {
        println!(
            "   {:<4} {:>2} ✅  {:>2} ❌  | {:>2}",
            day.day(language),
            day.active,
            day.broken,
            day.checks
        );
    }
    println!();

    // Status distribution (demo data)
    let total = monitored_total();
    println!("📈 {}", i18n::status_distribution(language));
    for (status, count) in &STATUS_DISTRIBUTION {
        let share = f64::from(*count) / f64::from(total) * 100.0;
        println!(
            "   {} {:<14} {:>3}  ({:>4.1}%)",
            status_icon(*status),
            crate::checker::status_label(*status, language),
            count,
            share
        );
    }
    println!();

    // Recent checks (demo data)
    println!("🕒 {}", i18n::recent_activity(language));
    for check in &RECENT_CHECKS {
        println!(
            "   {} {:<30} {}",
            status_icon(check.status),
            check.url,
            i18n::minutes_ago(language, check.minutes_ago)
        );
    }
    println!();

    // Current plan card
    print_plan_summary(plan, language);
}

// The per-tier feature summary shown under the dashboard
fn print_plan_summary(plan: Plan, language: Language) {
    let premium = plan == Plan::Premium;
    println!("{} {}", if premium { "⚡" } else { "🛡️" }, plan.name());
    println!(
        "   {}: {} / {}",
        i18n::monthly_limit(language),
        plan.total_checks(),
        i18n::pricing_period(language)
    );
    println!(
        "   {}: {}",
        i18n::automatic_checking(language),
        on_off(premium, language)
    );
    println!(
        "   {}: {}",
        i18n::email_notifications(language),
        on_off(premium, language)
    );
}

fn on_off(enabled: bool, language: Language) -> &'static str {
    if enabled {
        i18n::feature_on(language)
    } else {
        i18n::feature_off(language)
    }
}

// Draws a fixed-width usage bar like [██████░░░░░░]
fn usage_bar(percent: f64, width: usize) -> String {
    let filled = (percent / 100.0 * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_total() {
        // 156 active + 24 broken + 12 redirects
        assert_eq!(monitored_total(), 192);
    }

    #[test]
    fn test_weekly_rows_are_consistent() {
        for day in &WEEKLY_ACTIVITY {
            assert!(day.active + day.broken <= day.checks);
        }
    }

    #[test]
    fn test_usage_bar_bounds() {
        assert_eq!(usage_bar(0.0, 10), format!("[{}]", "░".repeat(10)));
        assert_eq!(usage_bar(100.0, 10), format!("[{}]", "█".repeat(10)));
        // Over 100 stays clamped to the bar width
        assert_eq!(usage_bar(250.0, 10), format!("[{}]", "█".repeat(10)));
    }

    #[test]
    fn test_day_names_follow_language() {
        assert_eq!(WEEKLY_ACTIVITY[0].day(Language::English), "Mon");
        assert_eq!(WEEKLY_ACTIVITY[0].day(Language::Turkish), "Pzt");
    }
}
