//! Ranked CSV exports of per-card power statistics.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::path::Path;

use decklens_analysis::power::PowerStats;
use decklens_core::errors::ExportError;
use decklens_core::types::stats::CardStat;

const HEADER: &str = "card_name,appearance_count,power_sum,average_power";

/// File names of the three ranking exports.
pub const BY_SUM_FILE: &str = "card_power_by_sum.csv";
pub const BY_AVERAGE_FILE: &str = "card_power_by_average.csv";
pub const BY_RELIABLE_AVERAGE_FILE: &str = "card_power_by_reliable_average.csv";

/// All cards ranked by `power_sum`, descending.
pub fn by_power_sum(power: &PowerStats) -> String {
    render(power, |stat| stat.power_sum, 0)
}

/// All cards ranked by `average_power`, descending.
pub fn by_average_power(power: &PowerStats) -> String {
    render(power, |stat| stat.average_power(), 0)
}

/// Cards with at least `min_appearances` decks, ranked by
/// `average_power` descending, the reliable subset.
pub fn by_reliable_average_power(power: &PowerStats, min_appearances: u32) -> String {
    render(power, |stat| stat.average_power(), min_appearances)
}

/// Write the three ranking exports into `dir`.
pub fn write_rankings(
    dir: &Path,
    power: &PowerStats,
    min_reliable_appearances: u32,
) -> Result<(), ExportError> {
    crate::write_artifact(dir, BY_SUM_FILE, &by_power_sum(power))?;
    crate::write_artifact(dir, BY_AVERAGE_FILE, &by_average_power(power))?;
    crate::write_artifact(
        dir,
        BY_RELIABLE_AVERAGE_FILE,
        &by_reliable_average_power(power, min_reliable_appearances),
    )?;
    Ok(())
}

fn render(power: &PowerStats, key: impl Fn(&CardStat) -> f64, min_appearances: u32) -> String {
    let mut rows: Vec<(&str, &CardStat)> = power
        .cards
        .iter()
        .filter(|(_, stat)| stat.appearance_count >= min_appearances)
        .map(|(name, stat)| (name.as_str(), stat))
        .collect();
    // Descending by key; ties break by name so output is reproducible.
    rows.sort_by(|a, b| {
        key(b.1)
            .partial_cmp(&key(a.1))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let mut out = String::with_capacity(rows.len() * 48 + HEADER.len() + 1);
    out.push_str(HEADER);
    out.push('\n');
    for (name, stat) in rows {
        out.push_str(&csv_field(name));
        out.push(',');
        out.push_str(&stat.appearance_count.to_string());
        out.push(',');
        out.push_str(&stat.power_sum.to_string());
        out.push(',');
        out.push_str(&stat.average_power().to_string());
        out.push('\n');
    }
    out
}

/// Quote a CSV field when it contains the delimiter, quotes, or newlines.
fn csv_field(raw: &str) -> Cow<'_, str> {
    if raw.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", raw.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(raw)
    }
}
