use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One row of the member export. Columns absent from the CSV header
/// deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberRecord {
    #[serde(rename = "Institution", default)]
    pub institution: String,
    #[serde(rename = "Country", default)]
    pub country: String,
    #[serde(rename = "Agent Review", default)]
    pub agent_review: String,
    #[serde(rename = "Created At", default)]
    pub created_at: String,
    #[serde(rename = "Career Stage", default)]
    pub career_stage: String,
    #[serde(rename = "Professional Field", default)]
    pub professional_field: String,
}

/// Running counters for one canonical institution.
#[derive(Debug, Clone)]
pub struct InstitutionAggregate {
    pub members: u32,
    pub authentic: u32,
    pub total_seniority_years: i64,
    pub sum_of_join_years: i64,
    pub countries: HashSet<String>,
    pub advanced: u32,
    pub fields: HashSet<String>,
    /// Country of the row that created this aggregate; never overwritten.
    pub primary_country: String,
}

impl InstitutionAggregate {
    pub fn new(primary_country: &str) -> Self {
        Self {
            members: 0,
            authentic: 0,
            total_seniority_years: 0,
            sum_of_join_years: 0,
            countries: HashSet::new(),
            advanced: 0,
            fields: HashSet::new(),
            primary_country: primary_country.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedInstitution {
    pub institution: String,
    pub members: u32,
    pub authentic: u32,
    pub total_seniority: i64,
    pub avg_join_year: i32,
    pub countries_count: usize,
    pub advanced: u32,
    pub fields_count: usize,
    pub country: String,
    pub circles_led: u32,
    pub raw_score: f64,
    pub score: f64,
    pub diversity_index: String,
    pub tier: String,
}
