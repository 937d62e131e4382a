use crate::core::models::nuclide::Nuclide;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedicalIsotopeRecord {
    pub symbol: &'static str,
    pub nuclide: Nuclide,
    pub medical_use: &'static str,
}

pub static MEDICAL_ISOTOPES: [MedicalIsotopeRecord; 6] = [
    MedicalIsotopeRecord {
        symbol: "F-18",
        nuclide: Nuclide::tabulated(9, 9),
        medical_use: "PET imaging",
    },
    MedicalIsotopeRecord {
        symbol: "Tc-99",
        nuclide: Nuclide::tabulated(43, 56),
        medical_use: "SPECT imaging",
    },
    MedicalIsotopeRecord {
        symbol: "Co-60",
        nuclide: Nuclide::tabulated(27, 33),
        medical_use: "Radiation therapy",
    },
    MedicalIsotopeRecord {
        symbol: "Y-90",
        nuclide: Nuclide::tabulated(39, 51),
        medical_use: "Liver cancer treatment",
    },
    MedicalIsotopeRecord {
        symbol: "I-131",
        nuclide: Nuclide::tabulated(53, 78),
        medical_use: "Thyroid treatment",
    },
    MedicalIsotopeRecord {
        symbol: "Lu-177",
        nuclide: Nuclide::tabulated(71, 106),
        medical_use: "Cancer therapy",
    },
];

/// Exact (Z, N) lookup.
pub fn find_medical_isotope(nuclide: &Nuclide) -> Option<&'static MedicalIsotopeRecord> {
    MEDICAL_ISOTOPES.iter().find(|record| record.nuclide == *nuclide)
}
