//! Generates the SQL that loads exported embargo expiry values into the legacy
//! field tables, ahead of the embargo migration itself.
//!
//! The export identifies objects by pid. Two mapping files translate a pid to
//! the node id and the node revision id, and each embargo becomes one row in
//! the field table and one in its revision table.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::config::SeedConfig;
use crate::errors::SeedError;

/// Field tables receiving one row per exported embargo, in output order.
pub const TARGET_TABLES: [&str; 2] = [
    "node__field_embargo_expiry",
    "node_revision__field_embargo_expiry",
];

/// Maps a pid to the id found next to it in a mapping file.
pub type IdMap = HashMap<String, String>;

/// Reads a two-column mapping file (`id,pid`) into a pid-keyed map.
///
/// The header row is skipped. Rows with any other number of columns are
/// ignored. A pid listed twice keeps its last id.
pub fn read_id_map<R: Read>(reader: R) -> Result<IdMap, SeedError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut map = IdMap::new();
    for result in csv_reader.records() {
        let record = result?;
        if record.len() == 2 {
            map.insert(record[1].to_string(), record[0].to_string());
        }
    }

    Ok(map)
}

/// Turns exported embargoes into `INSERT` statements for the legacy field tables.
pub struct ExpirySqlGenerator {
    nids: IdMap,
    vids: IdMap,
}

impl ExpirySqlGenerator {
    pub fn new(nids: IdMap, vids: IdMap) -> Self {
        Self { nids, vids }
    }

    /// Loads the node and revision maps from disk.
    pub fn from_paths(pids_csv: &Path, revisions_csv: &Path) -> Result<Self, SeedError> {
        let nids = read_id_map(File::open(pids_csv)?)?;
        let vids = read_id_map(File::open(revisions_csv)?)?;

        debug!(nids = nids.len(), vids = vids.len(), "Loaded id maps");
        Ok(Self::new(nids, vids))
    }

    /// Builds the statements for one exported embargo, one per target table.
    pub fn statements_for(&self, pid: &str, embargo: &str) -> Result<Vec<String>, SeedError> {
        let nid = self.lookup(&self.nids, pid)?;
        let vid = self.lookup(&self.vids, pid)?;
        let value = embargo.replace('\'', "''");

        Ok(TARGET_TABLES
            .iter()
            .map(|table| {
                format!(
                    "INSERT INTO {table} (bundle, deleted, entity_id, revision_id, langcode, delta, field_embargo_expiry_value)\n\
                     VALUES ('islandora_object', 0, {nid}, {vid}, 'en', 0, '{value}');\n"
                )
            })
            .collect())
    }

    /// Writes the statements for every row of an embargo export (`pid,embargo`
    /// after a header row) to `out`.
    ///
    /// Stops at the first pid without a mapping. Returns the number of
    /// exported rows written.
    pub fn generate<R: Read, W: Write>(&self, embargoes: R, out: W) -> Result<usize, SeedError> {
        let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(embargoes);
        let mut writer = BufWriter::new(out);
        let mut rows = 0;

        for result in csv_reader.deserialize() {
            let (pid, embargo): (String, String) = result?;
            for statement in self.statements_for(&pid, &embargo)? {
                writer.write_all(statement.as_bytes())?;
            }
            rows += 1;
        }

        writer.flush()?;
        Ok(rows)
    }

    fn lookup(&self, map: &IdMap, pid: &str) -> Result<i64, SeedError> {
        let value = match map.get(pid) {
            Some(value) if !value.is_empty() => value,
            _ => return Err(SeedError::MissingMapping(pid.to_string())),
        };

        value.trim().parse::<i64>().map_err(|_| SeedError::InvalidId {
            pid: pid.to_string(),
            value: value.clone(),
        })
    }
}

/// Runs the whole generation step with paths from `config`.
pub fn run(config: &SeedConfig) -> Result<usize, SeedError> {
    let generator = ExpirySqlGenerator::from_paths(&config.pids_csv, &config.revisions_csv)?;
    let embargoes = File::open(&config.embargo_csv)?;
    let output = File::create(&config.output_sql)?;

    let rows = generator.generate(embargoes, output)?;

    info!(
        rows,
        output = %config.output_sql.display(),
        "SQL transformation complete"
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_generator() -> ExpirySqlGenerator {
        let nids = read_id_map("nid,pid\n10,demo:1\n11,demo:2\n".as_bytes()).unwrap();
        let vids = read_id_map("vid,pid\n100,demo:1\n110,demo:2\n".as_bytes()).unwrap();
        ExpirySqlGenerator::new(nids, vids)
    }

    #[test]
    fn test_read_id_map_keys_by_pid() {
        let map = read_id_map("nid,pid\n10,demo:1\n11,demo:2\n".as_bytes()).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("demo:1").map(String::as_str), Some("10"));
        assert_eq!(map.get("demo:2").map(String::as_str), Some("11"));
    }

    #[test]
    fn test_read_id_map_skips_malformed_rows() {
        let map = read_id_map("nid,pid\n10,demo:1\n11\n12,demo:3,extra\n".as_bytes()).unwrap();

        assert_eq!(map.len(), 1);
        assert!(map.contains_key("demo:1"));
    }

    #[test]
    fn test_statements_for_both_tables() {
        let generator = make_generator();
        let statements = generator.statements_for("demo:1", "2024-03-15").unwrap();

        assert_eq!(statements.len(), 2);
        assert!(statements[0].starts_with("INSERT INTO node__field_embargo_expiry ("));
        assert!(statements[1].starts_with("INSERT INTO node_revision__field_embargo_expiry ("));
        for statement in &statements {
            assert!(statement.contains("VALUES ('islandora_object', 0, 10, 100, 'en', 0, '2024-03-15');"));
        }
    }

    #[test]
    fn test_embargo_value_is_quoted() {
        let generator = make_generator();
        let statements = generator.statements_for("demo:2", "2024'; DROP TABLE node; --").unwrap();

        assert!(statements[0].contains("'2024''; DROP TABLE node; --'"));
    }

    #[test]
    fn test_missing_mapping() {
        let generator = make_generator();
        let result = generator.statements_for("demo:404", "2024-03-15");

        match result {
            Err(SeedError::MissingMapping(pid)) => assert_eq!(pid, "demo:404"),
            other => panic!("Expected MissingMapping, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_mapping_counts_as_missing() {
        let nids = read_id_map("nid,pid\n,demo:1\n".as_bytes()).unwrap();
        let vids = read_id_map("vid,pid\n100,demo:1\n".as_bytes()).unwrap();
        let generator = ExpirySqlGenerator::new(nids, vids);

        assert!(matches!(
            generator.statements_for("demo:1", "2024-03-15"),
            Err(SeedError::MissingMapping(_))
        ));
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let nids = read_id_map("nid,pid\n10 OR 1=1,demo:1\n".as_bytes()).unwrap();
        let vids = read_id_map("vid,pid\n100,demo:1\n".as_bytes()).unwrap();
        let generator = ExpirySqlGenerator::new(nids, vids);

        assert!(matches!(
            generator.statements_for("demo:1", "2024-03-15"),
            Err(SeedError::InvalidId { .. })
        ));
    }

    #[test]
    fn test_generate_writes_two_statements_per_row() {
        let generator = make_generator();
        let mut out = Vec::new();

        let rows = generator
            .generate("pid,embargo\ndemo:1,2024-03-15\ndemo:2,2025-01-01T00:00:00\n".as_bytes(), &mut out)
            .unwrap();

        let sql = String::from_utf8(out).unwrap();
        assert_eq!(rows, 2);
        assert_eq!(sql.matches("INSERT INTO").count(), 4);
        assert!(sql.contains("11, 110, 'en', 0, '2025-01-01T00:00:00'"));
    }

    #[test]
    fn test_generate_stops_at_missing_mapping() {
        let generator = make_generator();
        let mut out = Vec::new();

        let result = generator.generate(
            "pid,embargo\ndemo:1,2024-03-15\ndemo:9,2025-01-01\ndemo:2,2025-01-01\n".as_bytes(),
            &mut out,
        );

        assert!(matches!(result, Err(SeedError::MissingMapping(pid)) if pid == "demo:9"));
    }

    #[test]
    fn test_generate_with_header_only() {
        let generator = make_generator();
        let mut out = Vec::new();

        let rows = generator.generate("pid,embargo\n".as_bytes(), &mut out).unwrap();

        assert_eq!(rows, 0);
        assert!(out.is_empty());
    }
}
