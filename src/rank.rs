use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{InstitutionAggregate, MemberRecord, RankedInstitution};
use crate::normalize;

/// Year of the member's join date, read from the leading `YYYY-MM-DD` part
/// of the creation timestamp. Unparseable values contribute nothing.
pub fn join_year(created_at: &str) -> Option<i32> {
    let date_part = created_at.split(' ').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .ok()
        .map(|date| date.year())
}

/// Fold qualifying rows into per-institution aggregates, keyed by canonical
/// name. Aggregates keep first-seen order so that score ties and export
/// bytes are reproducible across runs.
pub fn aggregate_members(
    records: &[MemberRecord],
    current_year: i32,
) -> Vec<(String, InstitutionAggregate)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut aggregates: Vec<(String, InstitutionAggregate)> = Vec::new();

    for record in records {
        let Some(name) = normalize::filter_institution(&record.institution) else {
            continue;
        };

        let slot = match index.get(&name) {
            Some(&slot) => slot,
            None => {
                let slot = aggregates.len();
                index.insert(name.clone(), slot);
                aggregates.push((name, InstitutionAggregate::new(&record.country)));
                slot
            }
        };
        let entry = &mut aggregates[slot].1;

        entry.members += 1;

        if record.agent_review == "AUTHENTIC" {
            entry.authentic += 1;
        }

        if let Some(year) = join_year(&record.created_at) {
            entry.total_seniority_years += i64::from(current_year - year + 1);
            entry.sum_of_join_years += i64::from(year);
        }

        let country = record.country.trim();
        if !country.is_empty() {
            entry.countries.insert(country.to_string());
        }

        if record.career_stage.contains("Advanced") {
            entry.advanced += 1;
        }

        let field = record.professional_field.trim();
        if !field.is_empty() {
            entry.fields.insert(field.to_string());
        }
    }

    aggregates
}

pub fn diversity_index(fields_count: usize) -> &'static str {
    if fields_count >= 6 {
        "Very High"
    } else if fields_count >= 3 {
        "High"
    } else {
        "Moderate"
    }
}

pub fn tier_for_score(score: f64) -> &'static str {
    if score >= 9.0 {
        "Platinum"
    } else if score >= 7.0 {
        "Gold"
    } else if score >= 4.0 {
        "Silver"
    } else {
        "Bronze"
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Derive per-institution metrics, score against the cohort maxima, and
/// return the ranking ordered by descending raw score. Ties keep the
/// aggregates' first-seen order (stable sort).
pub fn score_aggregates(aggregates: Vec<(String, InstitutionAggregate)>) -> Vec<RankedInstitution> {
    if aggregates.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<RankedInstitution> = aggregates
        .into_iter()
        .map(|(institution, agg)| {
            let avg_join_year = if agg.members == 0 {
                0
            } else {
                (agg.sum_of_join_years as f64 / f64::from(agg.members)).round() as i32
            };
            RankedInstitution {
                institution,
                members: agg.members,
                authentic: agg.authentic,
                total_seniority: agg.total_seniority_years,
                avg_join_year,
                countries_count: agg.countries.len(),
                advanced: agg.advanced,
                fields_count: agg.fields.len(),
                country: agg.primary_country,
                circles_led: agg.members.div_ceil(10),
                raw_score: 0.0,
                score: 0.0,
                diversity_index: String::new(),
                tier: String::new(),
            }
        })
        .collect();

    let max_members = results.iter().map(|r| r.members).max().unwrap_or(0).max(1);
    let max_authentic = results.iter().map(|r| r.authentic).max().unwrap_or(0).max(1);
    let max_seniority = results
        .iter()
        .map(|r| r.total_seniority)
        .max()
        .unwrap_or(0)
        .max(1);
    let max_countries = results
        .iter()
        .map(|r| r.countries_count)
        .max()
        .unwrap_or(0)
        .max(1);
    let max_advanced = results.iter().map(|r| r.advanced).max().unwrap_or(0).max(1);
    let max_fields = results
        .iter()
        .map(|r| r.fields_count)
        .max()
        .unwrap_or(0)
        .max(1);

    for r in &mut results {
        let raw_score = (f64::from(r.members) / f64::from(max_members)) * 25.0
            + (f64::from(r.authentic) / f64::from(max_authentic)) * 25.0
            + (r.total_seniority as f64 / max_seniority as f64) * 15.0
            + (r.countries_count as f64 / max_countries as f64) * 10.0
            + (f64::from(r.advanced) / f64::from(max_advanced)) * 15.0
            + (r.fields_count as f64 / max_fields as f64) * 10.0;

        r.raw_score = raw_score;
        r.score = round1(raw_score / 10.0);
        r.diversity_index = diversity_index(r.fields_count).to_string();
        r.tier = tier_for_score(r.score).to_string();
    }

    results.sort_by(|a, b| {
        b.raw_score
            .partial_cmp(&a.raw_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results
}

/// Full pipeline: filter, aggregate, score, sort.
pub fn rank_records(records: &[MemberRecord], current_year: i32) -> Vec<RankedInstitution> {
    score_aggregates(aggregate_members(records, current_year))
}
