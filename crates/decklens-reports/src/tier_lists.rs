//! Per-tier membership lists: one sorted base name per line.

use std::path::Path;

use decklens_analysis::usage::{UsageStats, UsageTier};
use decklens_core::errors::ExportError;

/// File name for a tier's membership list.
pub fn tier_file_name(tier: UsageTier) -> &'static str {
    match tier {
        UsageTier::Full => "cards_100_percent.txt",
        UsageTier::AtLeast95 => "cards_95_percent.txt",
        UsageTier::AtLeast90 => "cards_90_percent.txt",
    }
}

/// Render a tier's membership, sorted, one name per line.
pub fn render_tier(usage: &UsageStats, tier: UsageTier) -> String {
    let mut out = String::new();
    for name in usage.tier_members(tier) {
        out.push_str(name);
        out.push('\n');
    }
    out
}

/// Write all three tier lists into `dir`.
pub fn write_tier_lists(dir: &Path, usage: &UsageStats) -> Result<(), ExportError> {
    for tier in UsageTier::ALL {
        crate::write_artifact(dir, tier_file_name(tier), &render_tier(usage, tier))?;
    }
    Ok(())
}
