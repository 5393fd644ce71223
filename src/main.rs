// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Collect results and print them
// 4. Exit with proper code (0 = success, 1 = broken links, 2 = error)
//
// Rust concepts used:
// - async/await: The check loop suspends between simulated requests
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - the simulated check engine
mod cli; // src/cli.rs - command-line parsing
mod dashboard; // src/dashboard.rs - usage overview
mod i18n; // src/i18n.rs - localized messages
mod ledger; // src/ledger.rs - purchased backlink records
mod notify; // src/notify.rs - notification preferences
mod plan; // src/plan.rs - subscription tiers
mod quota; // src/quota.rs - check allowance

// Import items we need from our modules
use cli::{Cli, Commands, LedgerCommands};
use clap::Parser; // Parser trait enables the parse() method

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{anyhow, Result};

use checker::{BatchRejection, CheckResult, MockChecker};
use i18n::Language;
use ledger::{Ledger, NewBacklink, PurchasedBacklink};
use notify::{NotificationSettings, NotifyError};
use plan::Plan;
use quota::Quota;
use std::path::PathBuf;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = success, no broken links
//   Ok(1) = broken links found
//   Ok(2) = rejected input or internal error
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();
    let language = cli.lang;
    let plan = cli.plan;

    // Match on which subcommand was used
    match cli.command {
        Commands::Check {
            target,
            sources_file,
            remaining,
            json,
        } => handle_check(plan, language, &target, sources_file, remaining, json).await,
        Commands::Dashboard { remaining } => {
            let quota = session_quota(plan, remaining);
            dashboard::print_dashboard(plan, &quota, language);
            Ok(0)
        }
        Commands::Ledger { command } => handle_ledger(language, command),
        Commands::Plans { select } => handle_plans(plan, language, select).await,
        Commands::Notify {
            no_email,
            sms,
            no_broken_alerts,
            no_expiry_alerts,
            email_address,
            phone_number,
            json,
        } => handle_notify(
            language,
            no_email,
            sms,
            no_broken_alerts,
            no_expiry_alerts,
            email_address,
            phone_number,
            json,
        ),
    }
}

// Builds the quota for this session
// --remaining simulates a session that has already spent some checks
fn session_quota(plan: Plan, remaining: Option<u32>) -> Quota {
    match remaining {
        Some(left) => Quota::with_remaining(plan, left),
        None => Quota::for_plan(plan),
    }
}

// Handles the 'check' subcommand
//
// Parameters:
//   plan: the session tier (fixes the source cap)
//   target: the user's website URL
//   sources_file: file of source URLs, or None for stdin
//   remaining: optional override of the session allowance
//   json: whether to output JSON format
async fn handle_check(
    plan: Plan,
    language: Language,
    target: &str,
    sources_file: Option<PathBuf>,
    remaining: Option<u32>,
    json: bool,
) -> Result<i32> {
    let sources = read_sources(sources_file)?;
    let mut quota = session_quota(plan, remaining);

    if !json {
        println!(
            "🔍 {} ({}: {}/{})",
            i18n::checking(language),
            i18n::remaining_checks(language),
            quota.remaining(),
            quota.total()
        );
    }

    // The checker keeps its default 1-3 second delay per source,
    // so the progress lines below appear one by one like a live scan
    let mock = MockChecker::new();
    let outcome = checker::run_batch(&mock, &mut quota, plan, target, &sources, |result, progress| {
        if !json {
            println!(
                "  [{}/{}] {:>3.0}%  {} {}",
                progress.completed,
                progress.total,
                progress.percent,
                checker::format_status(result.status, language),
                result.url
            );
        }
    })
    .await;

    let results = match outcome {
        Ok(results) => results,
        Err(rejection) => {
            // Validation rejections never start the batch and never
            // consume quota; they surface as one localized line
            eprintln!("⚠️  {}", rejection_message(rejection, language));
            return Ok(2);
        }
    };

    if json {
        // Serialize results to JSON and print
        let json_output = serde_json::to_string_pretty(&results)?;
        println!("{}", json_output);
    } else {
        println!();
        println!("✅ {}", i18n::backlinks_checked(language, results.len()));
        println!();
        print_results_table(&results, language);
        println!(
            "   {}: {}/{}",
            i18n::remaining_checks(language),
            quota.remaining(),
            quota.total()
        );
    }

    // Count how many backlinks are broken
    let broken_count = results.iter().filter(|r| !r.is_ok()).count();

    if broken_count > 0 {
        Ok(1) // Exit code 1 = broken backlinks found
    } else {
        Ok(0) // Exit code 0 = all good
    }
}

// Maps a batch rejection to its localized user-facing message
fn rejection_message(rejection: BatchRejection, language: Language) -> &'static str {
    match rejection {
        BatchRejection::NoChecksRemaining => i18n::no_checks_remaining(language),
        BatchRejection::EmptyTarget => i18n::enter_your_website(language),
        BatchRejection::NoSources => i18n::enter_urls(language),
    }
}

// Reads the source list from a file, or from stdin when no file was given
// ("-" also means stdin, the usual CLI convention)
fn read_sources(path: Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(&path)
            .map_err(|e| anyhow!("Could not read sources file '{}': {}", path.display(), e)),
        _ => {
            let mut buffer = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)
                .map_err(|e| anyhow!("Could not read sources from stdin: {}", e))?;
            Ok(buffer)
        }
    }
}

// Prints check results as a human-readable table in the terminal
fn print_results_table(results: &[CheckResult], language: Language) {
    println!("📋 {}", i18n::check_results(language));
    println!("   {}", i18n::total_checked(language, results.len()));
    println!();

    // Print table header
    println!(
        "{:<50} {:<18} {:<6} {:<8} {}",
        "URL",
        "STATUS",
        "CODE",
        "TIME",
        i18n::last_check(language).to_uppercase()
    );
    println!("{}", "=".repeat(100));

    // Print each result, flagging the rows that need attention
    for result in results {
        let marker = match checker::status_severity(result.status) {
            checker::Severity::Failure => " ⚠",
            _ => "",
        };
        println!(
            "{:<50} {:<18} {:<6} {:<8} {}{}",
            truncate_url(&result.url, 47),
            checker::format_status(result.status, language),
            result.status_code,
            format!("{}ms", result.response_time_ms),
            result.last_checked,
            marker
        );
    }

    println!();

    // Print summary by status
    let active_count = count_status(results, checker::BacklinkStatus::Active);
    let broken_count = count_status(results, checker::BacklinkStatus::Broken);
    let redirect_count = count_status(results, checker::BacklinkStatus::Redirect);

    println!("📊 Summary:");
    println!("   ✅ {}: {}", i18n::status_active(language), active_count);
    println!("   ❌ {}: {}", i18n::status_broken(language), broken_count);
    println!("   🔀 {}: {}", i18n::status_redirect(language), redirect_count);
    println!("   📋 Total: {}", results.len());
    println!();
}

fn count_status(results: &[CheckResult], status: checker::BacklinkStatus) -> usize {
    results.iter().filter(|r| r.status == status).count()
}

// Truncates a URL for display, keeping the table columns aligned
fn truncate_url(url: &str, max_chars: usize) -> String {
    if url.chars().count() > max_chars {
        let cut: String = url.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        url.to_string()
    }
}

// Handles the 'ledger' subcommand
fn handle_ledger(language: Language, command: LedgerCommands) -> Result<i32> {
    match command {
        LedgerCommands::Add {
            source_url,
            target_url,
            seller,
            contact,
            duration_months,
            json,
        } => {
            let mut ledger = Ledger::new();
            let form = NewBacklink {
                source_url,
                target_url,
                seller_name: seller,
                contact_info: contact,
                duration_months,
            };

            let today = chrono::Local::now().date_naive();
            if let Err(e) = ledger.add(form, today) {
                eprintln!("⚠️  {}", ledger_error_message(&e, language));
                return Ok(2);
            }

            if json {
                // The whole portfolio, which for one process is the
                // record we just saved
                println!("{}", serde_json::to_string_pretty(ledger.records())?);
            } else {
                println!("✅ {}", i18n::backlink_saved(language));
                println!();
                for record in ledger.records() {
                    print_ledger_record(record, today, language);
                }
            }
            Ok(0)
        }
    }
}

// Maps a ledger error to its user-facing message
// Only the required-fields case has a localized wording; the rest
// carry their detail (the offending URL or number) from the error itself
fn ledger_error_message(error: &ledger::LedgerError, language: Language) -> String {
    match error {
        ledger::LedgerError::MissingRequiredFields => {
            i18n::fill_required_fields(language).to_string()
        }
        other => other.to_string(),
    }
}

// Prints one saved ledger record
fn print_ledger_record(record: &PurchasedBacklink, today: chrono::NaiveDate, language: Language) {
    println!("🔗 {}", i18n::backlink_management(language));
    println!("   {} → {}", record.source_url, record.target_url);
    println!(
        "   {}: {}{}",
        i18n::seller(language),
        record.seller_name,
        if record.contact_info.is_empty() {
            String::new()
        } else {
            format!(" ({})", record.contact_info)
        }
    );

    let days_left = record.days_until_expiry(today);
    let badge = if days_left <= 0 {
        format!("❌ {}", i18n::expired(language))
    } else if days_left < ledger::EXPIRY_WARNING_DAYS {
        // Under a month left gets the urgent marker
        format!("⚠️  {}", i18n::days_left(language, days_left))
    } else {
        format!("🕒 {}", i18n::days_left(language, days_left))
    };
    println!(
        "   {}: {}  {}",
        i18n::expires(language),
        record.expiry_date.format("%d.%m.%Y"),
        badge
    );
}

// Handles the 'plans' subcommand
async fn handle_plans(current: Plan, language: Language, select: Option<Plan>) -> Result<i32> {
    println!("💳 {}", i18n::choose_plan(language));
    println!();

    for plan in [Plan::Free, Plan::Premium] {
        print_plan_card(plan, current, language);
    }

    // An optional simulated switch, mirroring the product's demo checkout
    if let Some(selected) = select {
        println!();
        if selected == current {
            println!("ℹ️  {}", i18n::already_on_plan(language, selected.name()));
            return Ok(0);
        }

        match selected {
            Plan::Premium => {
                println!("⏳ {}", i18n::upgrade_started(language));
                // The demo payment flow takes a moment
                tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                println!("✅ {}", i18n::upgrade_complete(language));
            }
            Plan::Free => {
                println!("✅ {}", i18n::downgrade_complete(language));
            }
        }

        // Switching tiers resets the allowance to the new plan's total
        let quota = Quota::for_plan(selected);
        println!(
            "   {}: {}/{}",
            i18n::remaining_checks(language),
            quota.remaining(),
            quota.total()
        );
    }

    Ok(0)
}

// Prints one pricing card
fn print_plan_card(plan: Plan, current: Plan, language: Language) {
    let info = plan.info();

    let mut badges = Vec::new();
    if info.popular {
        badges.push(format!("⭐ {}", i18n::popular(language)));
    }
    if plan == current {
        badges.push(format!("✅ {}", i18n::current_plan(language)));
    }

    println!(
        "{} — {}/{} {}",
        plan.name(),
        info.price,
        info.period,
        badges.join("  ")
    );
    println!("   {}", info.description);
    for feature in info.features {
        println!("   ✅ {}", feature);
    }
    for limitation in info.limitations {
        println!("   ✖  {}", limitation);
    }
    println!();
}

// Handles the 'notify' subcommand
//
// Builds the preference set from the flags (starting at the defaults),
// validates it, and prints the saved summary. Nothing is persisted and
// nothing is delivered; this tool stops at the preference record.
fn handle_notify(
    language: Language,
    no_email: bool,
    sms: bool,
    no_broken_alerts: bool,
    no_expiry_alerts: bool,
    email_address: Option<String>,
    phone_number: Option<String>,
    json: bool,
) -> Result<i32> {
    let settings = NotificationSettings {
        email_notifications: !no_email,
        sms_notifications: sms,
        notify_broken_backlinks: !no_broken_alerts,
        notify_before_expiry: !no_expiry_alerts,
        email_address: email_address.unwrap_or_default(),
        phone_number: phone_number.unwrap_or_default(),
    };

    if let Err(e) = settings.validate() {
        eprintln!("⚠️  {}", notify_error_message(e, language));
        return Ok(2);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(0);
    }

    println!("🔔 {}", i18n::notification_settings(language));
    print_toggle(
        i18n::email_notifications(language),
        settings.email_notifications,
        language,
    );
    print_toggle(
        i18n::sms_notifications(language),
        settings.sms_notifications,
        language,
    );
    print_toggle(
        i18n::notify_broken_backlinks(language),
        settings.notify_broken_backlinks,
        language,
    );
    print_toggle(
        i18n::notify_before_expiry(language),
        settings.notify_before_expiry,
        language,
    );
    if !settings.email_address.is_empty() {
        println!("   📧 {}", settings.email_address);
    }
    if !settings.phone_number.is_empty() {
        println!("   📱 {}", settings.phone_number);
    }
    println!();
    println!("✅ {}", i18n::settings_saved(language));

    Ok(0)
}

fn notify_error_message(error: NotifyError, language: Language) -> &'static str {
    match error {
        NotifyError::MissingEmailAddress => i18n::email_address_required(language),
        NotifyError::MissingPhoneNumber => i18n::phone_number_required(language),
    }
}

fn print_toggle(label: &str, enabled: bool, language: Language) {
    let state = if enabled {
        i18n::feature_on(language)
    } else {
        i18n::feature_off(language)
    };
    println!("   {} {}: {}", if enabled { "🟢" } else { "⚪" }, label, state);
}
