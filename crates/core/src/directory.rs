//! Static reference data: the doctor directory and identification types.
//!
//! Both tables are deliberately *closed* — validation only accepts entries
//! that appear here, mirroring the fixed dropdown contents of the intake
//! forms.

/// A doctor in the practice directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Doctor {
    /// Display name, e.g. "Dr. John Green".
    pub name: &'static str,
    /// Medical specialty.
    pub specialty: &'static str,
}

/// The practice's doctor directory.
pub const DOCTORS: &[Doctor] = &[
    Doctor {
        name: "Dr. John Green",
        specialty: "General Physician",
    },
    Doctor {
        name: "Dr. Leila Cameron",
        specialty: "Cardiologist",
    },
    Doctor {
        name: "Dr. David Livingston",
        specialty: "Neurologist",
    },
    Doctor {
        name: "Dr. Evan Peter",
        specialty: "Orthopedic Surgeon",
    },
    Doctor {
        name: "Dr. Jane Powell",
        specialty: "Dermatologist",
    },
    Doctor {
        name: "Dr. Alex Ramirez",
        specialty: "Pediatrician",
    },
    Doctor {
        name: "Dr. Jasmine Lee",
        specialty: "Psychiatrist",
    },
    Doctor {
        name: "Dr. Alyana Cruz",
        specialty: "Ophthalmologist",
    },
    Doctor {
        name: "Dr. Hardik Sharma",
        specialty: "ENT Specialist",
    },
];

/// Looks up a doctor by display name.
pub fn find_doctor(name: &str) -> Option<&'static Doctor> {
    DOCTORS.iter().find(|d| d.name == name)
}

/// Accepted identification document types.
pub const IDENTIFICATION_TYPES: &[&str] = &[
    "Birth Certificate",
    "Driver's License",
    "Medical Insurance Card/Policy",
    "Military ID Card",
    "National Identity Card",
    "Passport",
    "Resident Alien Card (Green Card)",
    "Social Security Card",
    "State ID Card",
    "Student ID Card",
    "Voter ID Card",
];

/// Returns true if `kind` is one of the accepted identification types.
pub fn is_identification_type(kind: &str) -> bool {
    IDENTIFICATION_TYPES.contains(&kind)
}
