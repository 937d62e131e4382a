use crate::core::models::nuclide::{Nuclide, NuclideError};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BindingEnergyBenchmark {
    pub nuclide: Nuclide,
    pub accepted_mev: f64,
}

/// Accepted total binding energies (MeV).
pub static BINDING_ENERGY_BENCHMARKS: [BindingEnergyBenchmark; 6] = [
    BindingEnergyBenchmark {
        nuclide: Nuclide::tabulated(2, 2),
        accepted_mev: 28.296,
    },
    BindingEnergyBenchmark {
        nuclide: Nuclide::tabulated(6, 6),
        accepted_mev: 92.162,
    },
    BindingEnergyBenchmark {
        nuclide: Nuclide::tabulated(8, 8),
        accepted_mev: 127.619,
    },
    BindingEnergyBenchmark {
        nuclide: Nuclide::tabulated(26, 30),
        accepted_mev: 492.254,
    },
    BindingEnergyBenchmark {
        nuclide: Nuclide::tabulated(92, 143),
        accepted_mev: 1783.9,
    },
    BindingEnergyBenchmark {
        nuclide: Nuclide::tabulated(92, 146),
        accepted_mev: 1801.7,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StabilityReference {
    pub nuclide: Nuclide,
    pub stable: bool,
}

impl StabilityReference {
    const fn stable(z: u32, n: u32) -> Self {
        Self {
            nuclide: Nuclide::tabulated(z, n),
            stable: true,
        }
    }

    const fn unstable(z: u32, n: u32) -> Self {
        Self {
            nuclide: Nuclide::tabulated(z, n),
            stable: false,
        }
    }
}

/// Fixed 29-nuclide reference set: 14 stable nuclides and 15 radionuclides.
pub static STABILITY_REFERENCE_SET: [StabilityReference; 29] = [
    StabilityReference::stable(1, 1),    // H-2
    StabilityReference::stable(2, 1),    // He-3
    StabilityReference::stable(2, 2),    // He-4
    StabilityReference::stable(3, 4),    // Li-7
    StabilityReference::stable(6, 6),    // C-12
    StabilityReference::stable(6, 7),    // C-13
    StabilityReference::stable(7, 7),    // N-14
    StabilityReference::stable(8, 8),    // O-16
    StabilityReference::stable(8, 10),   // O-18
    StabilityReference::stable(9, 10),   // F-19
    StabilityReference::stable(10, 10),  // Ne-20
    StabilityReference::stable(20, 20),  // Ca-40
    StabilityReference::stable(26, 30),  // Fe-56
    StabilityReference::stable(82, 126), // Pb-208
    StabilityReference::unstable(1, 2),    // H-3
    StabilityReference::unstable(6, 8),    // C-14
    StabilityReference::unstable(7, 6),    // N-13
    StabilityReference::unstable(9, 9),    // F-18
    StabilityReference::unstable(27, 33),  // Co-60
    StabilityReference::unstable(38, 52),  // Sr-90
    StabilityReference::unstable(39, 51),  // Y-90
    StabilityReference::unstable(43, 56),  // Tc-99
    StabilityReference::unstable(53, 78),  // I-131
    StabilityReference::unstable(55, 82),  // Cs-137
    StabilityReference::unstable(71, 106), // Lu-177
    StabilityReference::unstable(92, 143), // U-235
    StabilityReference::unstable(92, 146), // U-238
    StabilityReference::unstable(94, 145), // Pu-239
    StabilityReference::unstable(94, 146), // Pu-240
];

#[derive(Debug, Error)]
pub enum ReferenceLoadError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Invalid nuclide on record {record} of '{path}': {source}")]
    Nuclide {
        path: String,
        record: usize,
        source: NuclideError,
    },
}

#[derive(Debug, Deserialize)]
struct StabilityRecord {
    z: i64,
    n: i64,
    stable: bool,
}

/// Loads a caller-supplied stability reference set from a CSV file with the
/// header `z,n,stable`. Extra columns (such as a name) are ignored.
pub fn load_stability_references(
    path: &Path,
) -> Result<Vec<StabilityReference>, ReferenceLoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| ReferenceLoadError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    let mut references = Vec::new();
    for (index, result) in reader.deserialize::<StabilityRecord>().enumerate() {
        let record = result.map_err(|e| ReferenceLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let nuclide =
            Nuclide::new(record.z, record.n).map_err(|e| ReferenceLoadError::Nuclide {
                path: path.to_string_lossy().to_string(),
                record: index + 1,
                source: e,
            })?;
        references.push(StabilityReference {
            nuclide,
            stable: record.stable,
        });
    }
    Ok(references)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn stability_reference_set_has_expected_composition() {
        let stable = STABILITY_REFERENCE_SET.iter().filter(|r| r.stable).count();
        assert_eq!(STABILITY_REFERENCE_SET.len(), 29);
        assert_eq!(stable, 14);
        assert_eq!(STABILITY_REFERENCE_SET.len() - stable, 15);
    }

    #[test]
    fn stability_reference_set_has_no_duplicates() {
        let unique: HashSet<_> = STABILITY_REFERENCE_SET.iter().map(|r| r.nuclide).collect();
        assert_eq!(unique.len(), STABILITY_REFERENCE_SET.len());
    }

    #[test]
    fn binding_energy_benchmarks_are_positive() {
        assert!(BINDING_ENERGY_BENCHMARKS.iter().all(|b| b.accepted_mev > 0.0));
        assert_eq!(BINDING_ENERGY_BENCHMARKS[0].nuclide.label(), "He-4");
    }

    #[test]
    fn load_stability_references_succeeds_with_valid_csv() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("reference.csv");
        fs::write(
            &file_path,
            "name,z,n,stable\nC-12,6,6,true\nC-14,6,8,false\n",
        )
        .unwrap();

        let references = load_stability_references(&file_path).unwrap();
        assert_eq!(references.len(), 2);
        assert_eq!(references[0].nuclide, Nuclide::new(6, 6).unwrap());
        assert!(references[0].stable);
        assert!(!references[1].stable);
    }

    #[test]
    fn load_stability_references_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing.csv");
        let result = load_stability_references(&file_path);
        assert!(matches!(result, Err(ReferenceLoadError::Csv { .. })));
    }

    #[test]
    fn load_stability_references_fails_for_malformed_csv() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("malformed.csv");
        fs::write(&file_path, "z,n,stable\n6,six,true\n").unwrap();
        let result = load_stability_references(&file_path);
        assert!(matches!(result, Err(ReferenceLoadError::Csv { .. })));
    }

    #[test]
    fn load_stability_references_reports_invalid_nuclide_record() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("negative.csv");
        fs::write(&file_path, "z,n,stable\n6,6,true\n-1,2,false\n").unwrap();
        let result = load_stability_references(&file_path);
        assert!(matches!(
            result,
            Err(ReferenceLoadError::Nuclide {
                record: 2,
                source: NuclideError::NegativeCount { .. },
                ..
            })
        ));
    }
}
