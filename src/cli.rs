// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// One subcommand exists per area of the product: check, dashboard,
// ledger, plans, notify. The --lang and --plan flags are global, so they
// work in front of or behind any subcommand.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::i18n::Language;
use crate::plan::Plan;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "backlink-guardian",
    version = "0.1.0",
    about = "A CLI tool to track backlinks: simulated checks, usage quota, and a purchase ledger",
    long_about = "backlink-guardian tracks the inbound links pointing at your website. \
                  It runs simulated check batches against a list of source URLs, keeps a \
                  per-plan check allowance, and records purchased backlinks with their \
                  expiry dates. All state lives in memory for the current run."
)]
pub struct Cli {
    /// Language for user-facing messages
    ///
    /// #[arg(global = true)] makes the flag usable with every subcommand
    #[arg(long, global = true, value_enum, default_value = "en")]
    pub lang: Language,

    /// Subscription plan for this session
    ///
    /// The plan fixes the monthly check allowance (10 or 100) and how many
    /// sources a single batch accepts (5 or 50)
    #[arg(long, global = true, value_enum, default_value = "free")]
    pub plan: Plan,

    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a simulated check batch over a list of backlink sources
    ///
    /// Example: backlink-guardian check https://mysite.com sources.txt
    Check {
        /// Your website URL (the target the sources should link to)
        ///
        /// This is a positional argument (required, no flag needed)
        target: String,

        /// File with source URLs, one per line (omit to read from stdin)
        sources_file: Option<PathBuf>,

        /// Remaining checks for this session (defaults to the plan total)
        ///
        /// Lets scripts replay a session that has already spent checks
        #[arg(long)]
        remaining: Option<u32>,

        /// Output results in JSON format instead of a table
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,
    },

    /// Show the usage dashboard
    ///
    /// Example: backlink-guardian dashboard --plan premium
    Dashboard {
        /// Remaining checks for this session (defaults to the plan total)
        #[arg(long)]
        remaining: Option<u32>,
    },

    /// Manage the purchased backlink ledger
    Ledger {
        #[command(subcommand)]
        command: LedgerCommands,
    },

    /// Show pricing plans, optionally switching to one
    ///
    /// Example: backlink-guardian plans --select premium
    Plans {
        /// Switch to this plan (simulated; resets the check allowance)
        #[arg(long, value_enum)]
        select: Option<Plan>,
    },

    /// Review and save notification preferences
    ///
    /// Defaults: email alerts on, SMS off, both event types on.
    /// Example: backlink-guardian notify --email-address you@example.com
    Notify {
        /// Turn email notifications off
        #[arg(long)]
        no_email: bool,

        /// Turn SMS notifications on
        #[arg(long)]
        sms: bool,

        /// Do not alert when a backlink breaks
        #[arg(long)]
        no_broken_alerts: bool,

        /// Do not alert before a purchased backlink expires
        #[arg(long)]
        no_expiry_alerts: bool,

        /// Email address alerts are delivered to
        #[arg(long)]
        email_address: Option<String>,

        /// Phone number SMS alerts are delivered to
        #[arg(long)]
        phone_number: Option<String>,

        /// Output the saved settings as JSON
        #[arg(long)]
        json: bool,
    },
}

// Subcommands under `ledger`
#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    /// Record a purchased backlink and compute its expiry date
    ///
    /// Example: backlink-guardian ledger add \
    ///            --source-url https://blog.example.com/post \
    ///            --target-url https://mysite.com \
    ///            --seller "John Doe" --duration-months 3
    Add {
        /// URL of the page carrying the purchased link
        #[arg(long)]
        source_url: String,

        /// URL the purchased link points at (your site)
        #[arg(long)]
        target_url: String,

        /// Seller name or nickname
        #[arg(long)]
        seller: String,

        /// Seller contact (email or phone); optional
        #[arg(long, default_value = "")]
        contact: String,

        /// Purchased duration in months (1, 3, 6 or 12)
        ///
        /// #[arg(default_value_t = 1)] makes one month the default
        #[arg(long, default_value_t = 1)]
        duration_months: u32,

        /// Output the saved record as JSON
        #[arg(long)]
        json: bool,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does global = true do?
//    - The flag is accepted anywhere on the command line
//    - "backlink-guardian --plan premium check ..." and
//      "backlink-guardian check ... --plan premium" both work
//
// 2. Why Option<PathBuf> for the sources file?
//    - None means "not given", and we fall back to reading stdin
//    - PathBuf owns a filesystem path the way String owns text
//
// 3. What is ValueEnum (used by Language and Plan)?
//    - A clap trait that turns an enum into a set of allowed values
//    - Bad input produces an error listing the valid choices
//
// 4. Why boolean "off" flags like --no-email?
//    - The defaults match a fresh account (email on, SMS off)
//    - A bare flag flips one default; no flag keeps it
// -----------------------------------------------------------------------------
