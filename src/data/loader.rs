use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::model::{IrisDataset, IrisRecord, NumericColumn, Species};

/// The reference 150-row table, compiled into the binary.
const BUILTIN_CSV: &str = include_str!("../../data/iris.csv");

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse the bundled dataset.
pub fn load_builtin() -> Result<IrisDataset> {
    load_csv_reader(BUILTIN_CSV.as_bytes()).context("parsing bundled iris table")
}

/// Load a dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with `sepal_length, sepal_width, petal_length, petal_width, species`
///   and an optional `species_id`
/// * `.json` – `[{ "sepal_length": 5.1, ..., "species": "setosa" }, ...]`
pub fn load_file(path: &Path) -> Result<IrisDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            load_csv_reader(file)
        }
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Row schema shared by both formats
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRecord {
    sepal_length: f64,
    sepal_width: f64,
    petal_length: f64,
    petal_width: f64,
    species: String,
    #[serde(default)]
    species_id: Option<u8>,
}

impl RawRecord {
    /// `row` is the 1-based data row, header excluded.
    fn into_record(self, row: usize) -> Result<IrisRecord> {
        let species: Species = self
            .species
            .parse()
            .with_context(|| format!("Row {row}: unknown species"))?;

        if let Some(id) = self.species_id {
            if id != species.id() {
                bail!(
                    "Row {row}: species_id {id} does not match species '{}'",
                    species.label()
                );
            }
        }

        let record = IrisRecord {
            sepal_length: self.sepal_length,
            sepal_width: self.sepal_width,
            petal_length: self.petal_length,
            petal_width: self.petal_width,
            species,
        };

        // f64 parsing accepts "NaN" and "inf"; neither is a measurement.
        for col in NumericColumn::MEASUREMENTS {
            if !record.value(col).is_finite() {
                bail!("Row {row}: {} is not a finite number", col.name());
            }
        }

        Ok(record)
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv_reader<R: Read>(input: R) -> Result<IrisDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let mut records = Vec::new();

    for (i, result) in reader.deserialize::<RawRecord>().enumerate() {
        let row = i + 1;
        let raw = result.with_context(|| format!("CSV row {row}"))?;
        records.push(raw.into_record(row)?);
    }

    non_empty(IrisDataset::from_records(records))
}

fn non_empty(dataset: IrisDataset) -> Result<IrisDataset> {
    if dataset.is_empty() {
        bail!("file contains no records");
    }
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default of `df.to_json(orient='records')`.
fn load_json(path: &Path) -> Result<IrisDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<RawRecord> = serde_json::from_str(&text).context("parsing JSON")?;

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, raw)| raw.into_record(i + 1))
        .collect::<Result<Vec<_>>>()?;

    non_empty(IrisDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("iris-dash-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn builtin_has_fifty_of_each_species() {
        let ds = load_builtin().unwrap();
        assert_eq!(ds.len(), 150);
        assert_eq!(ds.species_counts(), [50, 50, 50]);
    }

    #[test]
    fn csv_without_species_id_is_accepted() {
        let path = temp_file(
            "no-id.csv",
            "sepal_length,sepal_width,petal_length,petal_width,species\n\
             5.1,3.5,1.4,0.2,Iris-setosa\n\
             7.0,3.2,4.7,1.4,Iris-versicolor\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[1].species, Species::Versicolor);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn csv_with_unknown_species_fails() {
        let path = temp_file(
            "bad-species.csv",
            "sepal_length,sepal_width,petal_length,petal_width,species\n\
             5.1,3.5,1.4,0.2,rose\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("unknown species"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn csv_with_non_numeric_cell_fails() {
        let path = temp_file(
            "bad-number.csv",
            "sepal_length,sepal_width,petal_length,petal_width,species\n\
             wide,3.5,1.4,0.2,setosa\n",
        );
        assert!(load_file(&path).is_err());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn mismatched_species_id_fails() {
        let path = temp_file(
            "bad-id.json",
            r#"[{"sepal_length":5.1,"sepal_width":3.5,"petal_length":1.4,
                 "petal_width":0.2,"species":"setosa","species_id":3}]"#,
        );
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("species_id"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn json_records_load() {
        let path = temp_file(
            "records.json",
            r#"[{"sepal_length":6.3,"sepal_width":3.3,"petal_length":6.0,
                 "petal_width":2.5,"species":"virginica","species_id":3}]"#,
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.records()[0].species, Species::Virginica);
        assert_eq!(ds.records()[0].petal_length, 6.0);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn header_only_csv_is_rejected() {
        let path = temp_file(
            "empty.csv",
            "sepal_length,sepal_width,petal_length,petal_width,species\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("no records"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn non_finite_csv_cells_are_rejected() {
        let cases = [
            ("nan.csv", "NaN,3.5,1.4,0.2,setosa", "sepal_length"),
            ("inf.csv", "5.0,3.0,inf,0.2,setosa", "petal_length"),
            ("neg-inf.csv", "5.0,3.0,1.4,-inf,setosa", "petal_width"),
        ];
        for (name, bad_row, column) in cases {
            let path = temp_file(
                name,
                &format!(
                    "sepal_length,sepal_width,petal_length,petal_width,species\n\
                     5.0,3.0,1.4,0.2,setosa\n{bad_row}\n"
                ),
            );
            let err = format!("{:#}", load_file(&path).unwrap_err());
            assert!(err.contains("Row 2"), "{name}: {err}");
            assert!(err.contains(column), "{name}: {err}");
            assert!(err.contains("not a finite number"), "{name}: {err}");
            std::fs::remove_file(path).ok();
        }
    }

    #[test]
    fn non_finite_json_values_are_rejected() {
        for (name, value) in [("nan.json", "NaN"), ("inf.json", "Infinity"), ("huge.json", "1e400")] {
            let path = temp_file(
                name,
                &format!(
                    r#"[{{"sepal_length":{value},"sepal_width":3.5,"petal_length":1.4,
                         "petal_width":0.2,"species":"setosa"}}]"#
                ),
            );
            assert!(load_file(&path).is_err(), "{name} loaded");
            std::fs::remove_file(path).ok();
        }
    }

    #[test]
    fn non_finite_value_is_caught_before_the_dataset_is_built() {
        let raw = RawRecord {
            sepal_length: 5.0,
            sepal_width: f64::NAN,
            petal_length: 1.4,
            petal_width: 0.2,
            species: "setosa".to_string(),
            species_id: None,
        };
        let err = raw.into_record(7).unwrap_err().to_string();
        assert_eq!(err, "Row 7: sepal_width is not a finite number");
    }

    #[test]
    fn csv_errors_name_the_one_based_data_row() {
        let path = temp_file(
            "row-number.csv",
            "sepal_length,sepal_width,petal_length,petal_width,species\n\
             5.1,3.5,1.4,0.2,setosa\n\
             4.9,3.0,1.4,0.2,rose\n",
        );
        let err = format!("{:#}", load_file(&path).unwrap_err());
        assert!(err.contains("Row 2: unknown species"), "{err}");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("iris.parquet")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }
}
