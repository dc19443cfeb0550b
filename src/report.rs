use std::fmt::Write;
use std::path::Path;

use crate::models::RankedInstitution;

#[derive(Debug, Clone)]
pub struct TierSummary {
    pub tier: &'static str,
    pub count: usize,
    pub avg_score: f64,
}

const TIER_ORDER: &[&str] = &["Platinum", "Gold", "Silver", "Bronze"];

pub fn summarize_by_tier(rankings: &[RankedInstitution]) -> Vec<TierSummary> {
    let mut summaries: Vec<TierSummary> = TIER_ORDER
        .iter()
        .filter_map(|&tier| {
            let scores: Vec<f64> = rankings
                .iter()
                .filter(|r| r.tier == tier)
                .map(|r| r.score)
                .collect();
            if scores.is_empty() {
                return None;
            }
            Some(TierSummary {
                tier,
                count: scores.len(),
                avg_score: scores.iter().sum::<f64>() / scores.len() as f64,
            })
        })
        .collect();

    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries
}

pub fn build_report(source: &Path, rankings: &[RankedInstitution]) -> String {
    let summaries = summarize_by_tier(rankings);

    let mut output = String::new();

    let _ = writeln!(output, "# Institution Rankings Report");
    let _ = writeln!(
        output,
        "Generated from {} ({} institutions)",
        source.display(),
        rankings.len()
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Tier Mix");

    if summaries.is_empty() {
        let _ = writeln!(output, "No institutions survived filtering.");
    } else {
        for summary in summaries.iter() {
            let _ = writeln!(
                output,
                "- {}: {} institutions (avg score {:.1})",
                summary.tier, summary.count, summary.avg_score
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Top Institutions");

    if rankings.is_empty() {
        let _ = writeln!(output, "No institutions survived filtering.");
    } else {
        for ranked in rankings.iter().take(10) {
            let _ = writeln!(
                output,
                "- {} ({}) score {:.1} [{}], {} members in {} circles",
                ranked.institution,
                ranked.country,
                ranked.score,
                ranked.tier,
                ranked.members,
                ranked.circles_led
            );
        }
    }

    let mut broadest = rankings.to_vec();
    broadest.sort_by(|a, b| b.fields_count.cmp(&a.fields_count));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Broadest Field Coverage");

    if broadest.is_empty() {
        let _ = writeln!(output, "No institutions survived filtering.");
    } else {
        for ranked in broadest.iter().take(5) {
            let _ = writeln!(
                output,
                "- {}: {} fields across {} countries ({} diversity)",
                ranked.institution,
                ranked.fields_count,
                ranked.countries_count,
                ranked.diversity_index
            );
        }
    }

    output
}
