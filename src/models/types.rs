//! Closed categorical types and their synonym tables
//!
//! Raw values are title-cased, trimmed, then looked up in an ordered
//! `(synonym, canonical)` table. The first matching entry wins and anything
//! unmatched, missing included, collapses to `Other`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::adapt::title_case;

/// Gender of a patient
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
    /// Any other, unknown or unmapped value
    #[default]
    Other,
}

/// Ordered gender synonyms, matched against the title-cased value
pub static GENDER_SYNONYMS: &[(&str, Gender)] = &[
    ("Male", Gender::Male),
    ("M", Gender::Male),
    ("Man", Gender::Male),
    ("Boy", Gender::Male),
    ("Female", Gender::Female),
    ("F", Gender::Female),
    ("Woman", Gender::Female),
    ("Girl", Gender::Female),
    ("Other", Gender::Other),
    ("Non-Binary", Gender::Other),
    ("Nonbinary", Gender::Other),
    ("Transgender", Gender::Other),
    ("Prefer Not To Answer", Gender::Other),
    ("Unknown", Gender::Other),
];

/// Insurance coverage of a patient
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsuranceType {
    /// Private or employer coverage
    Private,
    /// Medicare, any part
    Medicare,
    /// Medicaid or CHIP
    Medicaid,
    /// No coverage
    Uninsured,
    /// Any other, unknown or unmapped value
    #[default]
    Other,
}

/// Ordered insurance synonyms, matched against the title-cased value
pub static INSURANCE_SYNONYMS: &[(&str, InsuranceType)] = &[
    ("Private", InsuranceType::Private),
    ("Private Insurance", InsuranceType::Private),
    ("Commercial", InsuranceType::Private),
    ("Employer", InsuranceType::Private),
    ("Employer Sponsored", InsuranceType::Private),
    ("Marketplace", InsuranceType::Private),
    ("Bcbs", InsuranceType::Private),
    ("Blue Cross", InsuranceType::Private),
    ("Blue Cross Blue Shield", InsuranceType::Private),
    ("Medicare", InsuranceType::Medicare),
    ("Medicare Advantage", InsuranceType::Medicare),
    ("Medicare Part A", InsuranceType::Medicare),
    ("Medicare Part B", InsuranceType::Medicare),
    ("Medicare Part D", InsuranceType::Medicare),
    ("Medicare Supplement", InsuranceType::Medicare),
    ("Medicaid", InsuranceType::Medicaid),
    ("Medicaid Pending", InsuranceType::Medicaid),
    ("State Medicaid", InsuranceType::Medicaid),
    ("Chip", InsuranceType::Medicaid),
    ("Uninsured", InsuranceType::Uninsured),
    ("No Insurance", InsuranceType::Uninsured),
    ("None", InsuranceType::Uninsured),
    ("Self Pay", InsuranceType::Uninsured),
    ("Self-Pay", InsuranceType::Uninsured),
    ("Not Insured", InsuranceType::Uninsured),
    ("Other", InsuranceType::Other),
    ("Tricare", InsuranceType::Other),
    ("Va", InsuranceType::Other),
    ("Military", InsuranceType::Other),
    ("Indian Health Services", InsuranceType::Other),
];

/// A closed categorical set with an ordered synonym table
pub trait Canonical: Copy + 'static {
    /// Bucket for missing and unmapped values
    const FALLBACK: Self;

    /// Ordered `(title-cased synonym, canonical)` pairs
    fn synonyms() -> &'static [(&'static str, Self)];

    /// Every member of the closed set
    fn all() -> &'static [Self];

    /// Look a raw value up; `None` when it matches no synonym
    fn lookup(raw: &str) -> Option<Self> {
        let key = title_case(raw.trim());
        Self::synonyms()
            .iter()
            .find(|(synonym, _)| *synonym == key)
            .map(|(_, canonical)| *canonical)
    }

    /// Canonicalize a possibly missing raw value, defaulting to the fallback
    fn canonicalize(raw: Option<&str>) -> Self {
        raw.and_then(Self::lookup).unwrap_or(Self::FALLBACK)
    }
}

impl Canonical for Gender {
    const FALLBACK: Self = Self::Other;

    fn synonyms() -> &'static [(&'static str, Self)] {
        GENDER_SYNONYMS
    }

    fn all() -> &'static [Self] {
        &[Self::Male, Self::Female, Self::Other]
    }
}

impl Canonical for InsuranceType {
    const FALLBACK: Self = Self::Other;

    fn synonyms() -> &'static [(&'static str, Self)] {
        INSURANCE_SYNONYMS
    }

    fn all() -> &'static [Self] {
        &[
            Self::Private,
            Self::Medicare,
            Self::Medicaid,
            Self::Uninsured,
            Self::Other,
        ]
    }
}

impl Gender {
    /// Canonical label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl InsuranceType {
    /// Canonical label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Private => "Private",
            Self::Medicare => "Medicare",
            Self::Medicaid => "Medicaid",
            Self::Uninsured => "Uninsured",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
