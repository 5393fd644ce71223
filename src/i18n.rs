// src/i18n.rs
// =============================================================================
// This module is the static table of localized user-facing strings.
//
// Two complete locales exist: English and Turkish. Every message the binary
// prints to the user resolves through one of these lookup functions, keyed
// by a message id. Messages that carry a number (like a check count) take
// it as a parameter and interpolate it.
//
// Rust concepts:
// - Match on a Copy enum: The whole table compiles to jump tables
// - &'static str vs String: Fixed strings borrow, interpolated ones allocate
// =============================================================================

use clap::ValueEnum;

// The display language for this session
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    /// English
    #[value(name = "en")]
    English,
    /// Türkçe
    #[value(name = "tr")]
    Turkish,
}

// --- Checker -----------------------------------------------------------------

pub fn no_checks_remaining(language: Language) -> &'static str {
    match language {
        Language::English => "No checks remaining. Upgrade to Premium!",
        Language::Turkish => "Kontrol hakkınız kalmadı. Premium plana geçin!",
    }
}

pub fn enter_your_website(language: Language) -> &'static str {
    match language {
        Language::English => "Please enter your website URL",
        Language::Turkish => "Lütfen web sitenizin URL'sini girin",
    }
}

pub fn enter_urls(language: Language) -> &'static str {
    match language {
        Language::English => "Please enter URLs to check",
        Language::Turkish => "Lütfen kontrol edilecek URL'leri girin",
    }
}

pub fn checking(language: Language) -> &'static str {
    match language {
        Language::English => "Checking...",
        Language::Turkish => "Kontrol Ediliyor...",
    }
}

pub fn check_results(language: Language) -> &'static str {
    match language {
        Language::English => "Check Results",
        Language::Turkish => "Kontrol Sonuçları",
    }
}

pub fn total_checked(language: Language, count: usize) -> String {
    match language {
        Language::English => format!("Total {} sources checked", count),
        Language::Turkish => format!("Toplam {} kaynak kontrol edildi", count),
    }
}

pub fn backlinks_checked(language: Language, count: usize) -> String {
    match language {
        Language::English => format!("{} backlink check completed!", count),
        Language::Turkish => format!("{} backlink kontrolü tamamlandı!", count),
    }
}

pub fn status_active(language: Language) -> &'static str {
    match language {
        Language::English => "Active",
        Language::Turkish => "Aktif",
    }
}

pub fn status_broken(language: Language) -> &'static str {
    match language {
        Language::English => "Broken",
        Language::Turkish => "Kırık",
    }
}

pub fn status_redirect(language: Language) -> &'static str {
    match language {
        Language::English => "Redirect",
        Language::Turkish => "Yönlendirme",
    }
}

pub fn status_checking(language: Language) -> &'static str {
    match language {
        Language::English => "Checking...",
        Language::Turkish => "Kontrol Ediliyor...",
    }
}

pub fn last_check(language: Language) -> &'static str {
    match language {
        Language::English => "Last check",
        Language::Turkish => "Son kontrol",
    }
}

pub fn remaining_checks(language: Language) -> &'static str {
    match language {
        Language::English => "Remaining Checks",
        Language::Turkish => "Kalan Kontrol",
    }
}

// --- Ledger ------------------------------------------------------------------

pub fn backlink_management(language: Language) -> &'static str {
    match language {
        Language::English => "Backlink Management",
        Language::Turkish => "Backlink Yönetimi",
    }
}

pub fn backlink_saved(language: Language) -> &'static str {
    match language {
        Language::English => "Backlink added successfully!",
        Language::Turkish => "Backlink başarıyla eklendi!",
    }
}

pub fn fill_required_fields(language: Language) -> &'static str {
    match language {
        Language::English => "Please fill in all required fields",
        Language::Turkish => "Lütfen tüm zorunlu alanları doldurun",
    }
}

pub fn seller(language: Language) -> &'static str {
    match language {
        Language::English => "Seller",
        Language::Turkish => "Satıcı",
    }
}

pub fn expires(language: Language) -> &'static str {
    match language {
        Language::English => "Expires",
        Language::Turkish => "Bitiş",
    }
}

pub fn days_left(language: Language, days: i64) -> String {
    match language {
        Language::English => format!("{} days left", days),
        Language::Turkish => format!("{} gün kaldı", days),
    }
}

pub fn expired(language: Language) -> &'static str {
    match language {
        Language::English => "Expired",
        Language::Turkish => "Süresi Doldu",
    }
}

// --- Notifications -----------------------------------------------------------

pub fn notification_settings(language: Language) -> &'static str {
    match language {
        Language::English => "Notification Settings",
        Language::Turkish => "Bildirim Ayarları",
    }
}

pub fn email_notifications(language: Language) -> &'static str {
    match language {
        Language::English => "Email Notifications",
        Language::Turkish => "E-posta Bildirimleri",
    }
}

pub fn sms_notifications(language: Language) -> &'static str {
    match language {
        Language::English => "SMS Notifications",
        Language::Turkish => "SMS Bildirimleri",
    }
}

pub fn notify_broken_backlinks(language: Language) -> &'static str {
    match language {
        Language::English => "Notify when backlinks are broken",
        Language::Turkish => "Backlinkler kırıldığında bildir",
    }
}

pub fn notify_before_expiry(language: Language) -> &'static str {
    match language {
        Language::English => "Notify before backlink expiry",
        Language::Turkish => "Backlink bitiminden önce bildir",
    }
}

pub fn settings_saved(language: Language) -> &'static str {
    match language {
        Language::English => "Settings saved",
        Language::Turkish => "Ayarlar kaydedildi",
    }
}

pub fn email_address_required(language: Language) -> &'static str {
    match language {
        Language::English => "Email notifications are on but no email address is set",
        Language::Turkish => "E-posta bildirimleri açık ama e-posta adresi girilmedi",
    }
}

pub fn phone_number_required(language: Language) -> &'static str {
    match language {
        Language::English => "SMS notifications are on but no phone number is set",
        Language::Turkish => "SMS bildirimleri açık ama telefon numarası girilmedi",
    }
}

// --- Dashboard ---------------------------------------------------------------

pub fn dashboard(language: Language) -> &'static str {
    match language {
        Language::English => "Dashboard",
        Language::Turkish => "Dashboard",
    }
}

pub fn checks_used(language: Language) -> &'static str {
    match language {
        Language::English => "Checks Used",
        Language::Turkish => "Kullanılan Kontrol",
    }
}

pub fn monthly_limit(language: Language) -> &'static str {
    match language {
        Language::English => "Monthly Limit",
        Language::Turkish => "Aylık Limit",
    }
}

pub fn weekly_activity(language: Language) -> &'static str {
    match language {
        Language::English => "Weekly Activity",
        Language::Turkish => "Haftalık Aktivite",
    }
}

pub fn status_distribution(language: Language) -> &'static str {
    match language {
        Language::English => "Link Status Distribution",
        Language::Turkish => "Link Durumu Dağılımı",
    }
}

pub fn recent_activity(language: Language) -> &'static str {
    match language {
        Language::English => "Recent Activity",
        Language::Turkish => "Son Aktiviteler",
    }
}

pub fn minutes_ago(language: Language, minutes: u32) -> String {
    match language {
        Language::English => format!("{} minutes ago", minutes),
        Language::Turkish => format!("{} dakika önce", minutes),
    }
}

pub fn pricing_period(language: Language) -> &'static str {
    match language {
        Language::English => "month",
        Language::Turkish => "ay",
    }
}

pub fn automatic_checking(language: Language) -> &'static str {
    match language {
        Language::English => "Automatic checking",
        Language::Turkish => "Otomatik kontrol",
    }
}

pub fn feature_on(language: Language) -> &'static str {
    match language {
        Language::English => "Active",
        Language::Turkish => "Aktif",
    }
}

pub fn feature_off(language: Language) -> &'static str {
    match language {
        Language::English => "Inactive",
        Language::Turkish => "Pasif",
    }
}

// --- Pricing -----------------------------------------------------------------

pub fn choose_plan(language: Language) -> &'static str {
    match language {
        Language::English => "Choose Your Plan",
        Language::Turkish => "Planınızı Seçin",
    }
}

pub fn current_plan(language: Language) -> &'static str {
    match language {
        Language::English => "Current Plan",
        Language::Turkish => "Mevcut Plan",
    }
}

pub fn popular(language: Language) -> &'static str {
    match language {
        Language::English => "Popular",
        Language::Turkish => "Popüler",
    }
}

pub fn already_on_plan(language: Language, plan_name: &str) -> String {
    match language {
        Language::English => format!("You are already on the {} plan!", plan_name),
        Language::Turkish => format!("Zaten {} planındasınız!", plan_name),
    }
}

pub fn upgrade_started(language: Language) -> &'static str {
    match language {
        Language::English => "Premium upgrade started! (Demo)",
        Language::Turkish => "Premium plana geçiş başlatıldı! (Demo)",
    }
}

pub fn upgrade_complete(language: Language) -> &'static str {
    match language {
        Language::English => "You are now on the Premium plan!",
        Language::Turkish => "Premium plana başarıyla geçtiniz!",
    }
}

pub fn downgrade_complete(language: Language) -> &'static str {
    match language {
        Language::English => "You are back on the free plan.",
        Language::Turkish => "Ücretsiz plana geri döndünüz.",
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why functions instead of a HashMap?
//    - A missing message id is a compile error, not a runtime surprise
//    - match on a two-variant enum costs nothing at runtime
//
// 2. When does a message return String instead of &'static str?
//    - When it interpolates a value (a count, a name)
//    - format! allocates a fresh String; fixed messages stay borrowed
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_locales_resolve() {
        assert_eq!(
            no_checks_remaining(Language::English),
            "No checks remaining. Upgrade to Premium!"
        );
        assert_eq!(
            no_checks_remaining(Language::Turkish),
            "Kontrol hakkınız kalmadı. Premium plana geçin!"
        );
        assert_eq!(status_broken(Language::Turkish), "Kırık");
        assert_eq!(status_redirect(Language::English), "Redirect");
    }

    #[test]
    fn test_count_interpolation() {
        assert_eq!(
            backlinks_checked(Language::English, 5),
            "5 backlink check completed!"
        );
        assert_eq!(
            total_checked(Language::Turkish, 12),
            "Toplam 12 kaynak kontrol edildi"
        );
        assert_eq!(minutes_ago(Language::Turkish, 2), "2 dakika önce");
    }

    #[test]
    fn test_plan_name_interpolation() {
        let message = already_on_plan(Language::English, "Premium");
        assert!(message.contains("Premium"));
    }
}
