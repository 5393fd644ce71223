// src/checker/mod.rs
// =============================================================================
// This module contains the backlink checking engine.
//
// Submodules:
// - mock: The simulated checker and the result/status types
// - batch: Runs one sequential batch over a capped source list
// - display: Maps statuses to icons, labels and severities
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod batch;
mod display;
mod mock;

// Re-export public items from submodules
// This lets users write `checker::run_batch()` instead of
// `checker::batch::run_batch()`
pub use batch::{run_batch, BatchProgress, BatchRejection};
pub use display::{format_status, status_icon, status_label, status_severity, Severity};
pub use mock::{BacklinkStatus, CheckResult, MockChecker};
