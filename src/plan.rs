// src/plan.rs
// =============================================================================
// This module defines the subscription tiers and what each one allows.
//
// Two tiers exist:
// - Free:    10 check batches per month, up to 5 sources per batch
// - Premium: 100 check batches per month, up to 50 sources per batch
//
// The pricing metadata (price, feature lists) lives here too so the
// `plans` subcommand can render the same cards the product page shows.
//
// Rust concepts:
// - Enums with methods: The tier IS the configuration
// - &'static str slices: Compile-time feature lists, no allocation
// - clap::ValueEnum: Lets --plan free|premium parse straight to the enum
// =============================================================================

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// The subscription tier for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Free,
    Premium,
}

impl Plan {
    /// Check batches allowed per month on this tier
    pub fn total_checks(&self) -> u32 {
        match self {
            Plan::Free => 10,
            Plan::Premium => 100,
        }
    }

    /// Maximum number of source URLs a single batch will accept
    ///
    /// Input beyond the cap is silently truncated, never an error.
    pub fn source_cap(&self) -> usize {
        match self {
            Plan::Free => 5,
            Plan::Premium => 50,
        }
    }

    /// Display name for tables and badges
    pub fn name(&self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Premium => "Premium",
        }
    }

    /// The pricing card for this tier
    pub fn info(&self) -> PlanInfo {
        match self {
            Plan::Free => PlanInfo {
                price: "₺0",
                period: "monthly",
                description: "Ideal for getting started",
                features: &[
                    "10 backlink checks / month",
                    "1 check per day",
                    "Manual checking",
                    "Basic reporting",
                    "Email support",
                ],
                limitations: &[
                    "No automatic checking",
                    "No notifications",
                    "No detailed analytics",
                ],
                popular: false,
            },
            Plan::Premium => PlanInfo {
                price: "₺99",
                period: "monthly",
                description: "For professional use",
                features: &[
                    "100 backlink checks / month",
                    "Hourly automatic checks",
                    "Real-time notifications",
                    "Detailed analytics and reports",
                    "API access",
                    "Priority support",
                    "Bulk URL import",
                    "Custom webhook integration",
                ],
                limitations: &[],
                popular: true,
            },
        }
    }
}

// Everything the pricing card needs, resolved at compile time
#[derive(Debug, Clone)]
pub struct PlanInfo {
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
    pub popular: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why put limits on the enum instead of constants?
//    - total_checks() and source_cap() always travel with the tier
//    - Adding a tier later means the compiler points at every match
//      that needs a new arm
//
// 2. What is &'static [&'static str]?
//    - A slice of string literals baked into the binary
//    - 'static means it lives for the whole program, so no ownership
//      or allocation questions arise
//
// 3. What does ValueEnum give us?
//    - clap parses "--plan premium" into Plan::Premium automatically
//    - Invalid values produce a helpful error listing the choices
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_totals() {
        assert_eq!(Plan::Free.total_checks(), 10);
        assert_eq!(Plan::Premium.total_checks(), 100);
    }

    #[test]
    fn test_tier_source_caps() {
        assert_eq!(Plan::Free.source_cap(), 5);
        assert_eq!(Plan::Premium.source_cap(), 50);
    }

    #[test]
    fn test_free_plan_has_limitations() {
        let info = Plan::Free.info();
        assert!(!info.limitations.is_empty());
        assert!(!info.popular);
    }

    #[test]
    fn test_premium_plan_has_none() {
        let info = Plan::Premium.info();
        assert!(info.limitations.is_empty());
        assert!(info.popular);
    }
}
