//! Dependency footprint report
//!
//! Renders the classification summary and the popularity line as plain
//! lines so they can be printed by any display provider.

use super::styling::StyleManager;
use crate::dependency::Classification;
use crate::stats::PackageStats;

/// Lines listing both dependency tiers followed by the totals sentence
pub fn render_summary(
    styling: &StyleManager,
    package: &str,
    classification: &Classification,
) -> Vec<String> {
    let direct = classification.direct.len();
    let indirect = classification.indirect.len();

    vec![
        styling.style_emphasis(&format!("Direct dependencies ({direct}):")),
        format!(" {}", classification.direct.join(", ")),
        String::new(),
        styling.style_emphasis(&format!("Indirect dependencies ({indirect}):")),
        format!(" {}", classification.indirect.join(", ")),
        String::new(),
        format!(
            "Package {} has a total of {} dependencies, of which {} are direct dependencies and {} indirect dependencies",
            styling.style_emphasis(package),
            styling.style_emphasis(&classification.total_count().to_string()),
            styling.style_emphasis(&direct.to_string()),
            styling.style_emphasis(&indirect.to_string()),
        ),
    ]
}

/// Popularity line shown under the summary
pub fn render_stats(styling: &StyleManager, stats: &PackageStats) -> String {
    format!(
        " \\- used in {} other packages, has {} stars and a ranking of {}",
        styling.style_emphasis(&stats.imported_by().to_string()),
        styling.style_emphasis(&stats.star_count.to_string()),
        styling.style_emphasis(&stats.static_rank.to_string()),
    )
}

/// Question asked before forwarding a package with a large footprint
pub fn confirmation_prompt(styling: &StyleManager, package: &str) -> String {
    format!(
        "Are you sure you wish to install {} and all above dependencies? [Y/N]",
        styling.style_emphasis(package)
    )
}

#[cfg(test)]
mod tests {
    include!("report.test.rs");
}
