use std::path::Path;

use anyhow::Context;

use crate::models::MemberRecord;

/// Read the member export into memory. Rows that fail to deserialize are
/// skipped; an unreadable file is fatal.
pub fn read_members(csv_path: &Path) -> anyhow::Result<Vec<MemberRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open member export {}", csv_path.display()))?;

    let mut records = Vec::new();
    for result in reader.deserialize::<MemberRecord>() {
        match result {
            Ok(record) => records.push(record),
            Err(_) => continue,
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn reads_all_expected_columns() {
        let file = write_csv(
            "Institution,Country,Agent Review,Created At,Career Stage,Professional Field\n\
             Kathmandu University,Nepal,AUTHENTIC,2015-03-01 10:22:33,Advanced Career,Engineering\n",
        );

        let records = read_members(file.path()).expect("read");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.institution, "Kathmandu University");
        assert_eq!(record.country, "Nepal");
        assert_eq!(record.agent_review, "AUTHENTIC");
        assert_eq!(record.created_at, "2015-03-01 10:22:33");
        assert_eq!(record.career_stage, "Advanced Career");
        assert_eq!(record.professional_field, "Engineering");
    }

    #[test]
    fn missing_columns_read_as_empty_strings() {
        let file = write_csv("Institution,Country\nTribhuvan University,Nepal\n");

        let records = read_members(file.path()).expect("read");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.institution, "Tribhuvan University");
        assert_eq!(record.country, "Nepal");
        assert_eq!(record.agent_review, "");
        assert_eq!(record.created_at, "");
        assert_eq!(record.career_stage, "");
        assert_eq!(record.professional_field, "");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let file = write_csv(
            "Email,Institution,Country\nmember@example.com,Far Western University,Nepal\n",
        );

        let records = read_members(file.path()).expect("read");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].institution, "Far Western University");
    }

    #[test]
    fn missing_file_is_fatal() {
        let missing = Path::new("definitely-not-here.csv");
        assert!(read_members(missing).is_err());
    }

    #[test]
    fn pipeline_over_fixture_is_deterministic() {
        let content = "Institution,Country,Agent Review,Created At,Career Stage,Professional Field\n\
            KU School of Engineering,Nepal,AUTHENTIC,2015-03-01 10:22:33,Advanced Career,Engineering\n\
            KUSOE,Nepal,PENDING,2018-07-15,Early Career,Computer Science\n\
            Tribhuvan University,Nepal,AUTHENTIC,2019-01-02,Mid Career,Economics\n\
            Unknown,Nepal,AUTHENTIC,2019-01-02,,\n\
            \"Student at XYZ University, studying\",Nepal,,,,\n\
            Acme Corp,USA,,,,\n";
        let file = write_csv(content);

        let run = || {
            let records = read_members(file.path()).expect("read");
            let rankings = crate::rank::rank_records(&records, 2026);
            let json = serde_json::to_string_pretty(&rankings).expect("serialize");
            (rankings, json)
        };

        let (rankings, json) = run();
        assert_eq!(rankings.len(), 2);

        // Surviving rows: two Kathmandu spellings plus one Tribhuvan row.
        let total_members: u32 = rankings.iter().map(|r| r.members).sum();
        assert_eq!(total_members, 3);

        let top = &rankings[0];
        assert_eq!(top.institution, "Kathmandu University");
        assert_eq!(top.members, 2);
        assert_eq!(top.score, 10.0);
        assert_eq!(top.tier, "Platinum");
        assert!(rankings
            .windows(2)
            .all(|pair| pair[0].raw_score >= pair[1].raw_score));

        let (_, rerun_json) = run();
        assert_eq!(json, rerun_json);
    }
}
