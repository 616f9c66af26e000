//! Filter model: four multiselect dimensions combined by conjunction.

use std::collections::BTreeSet;

use super::record::SalaryRecord;

/// Distinct values per filterable dimension, sorted for stable widget order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub years: Vec<u16>,
    pub seniorities: Vec<String>,
    pub contracts: Vec<String>,
    pub company_sizes: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &[SalaryRecord]) -> Self {
        let mut years = BTreeSet::new();
        let mut seniorities = BTreeSet::new();
        let mut contracts = BTreeSet::new();
        let mut company_sizes = BTreeSet::new();

        for record in records {
            years.insert(record.year);
            seniorities.insert(record.seniority.clone());
            contracts.insert(record.contract.clone());
            company_sizes.insert(record.company_size.clone());
        }

        Self {
            years: years.into_iter().collect(),
            seniorities: seniorities.into_iter().collect(),
            contracts: contracts.into_iter().collect(),
            company_sizes: company_sizes.into_iter().collect(),
        }
    }
}

/// The user's current selection: one set per dimension. A row passes when all
/// four of its filterable fields are members of the corresponding set, so an
/// empty set on any dimension empties the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub years: BTreeSet<u16>,
    pub seniorities: BTreeSet<String>,
    pub contracts: BTreeSet<String>,
    pub company_sizes: BTreeSet<String>,
}

impl FilterState {
    /// The default selection: everything, mirroring the widgets' initial state.
    pub fn select_all(options: &FilterOptions) -> Self {
        Self {
            years: options.years.iter().copied().collect(),
            seniorities: options.seniorities.iter().cloned().collect(),
            contracts: options.contracts.iter().cloned().collect(),
            company_sizes: options.company_sizes.iter().cloned().collect(),
        }
    }

    pub fn is_exhaustive(&self, options: &FilterOptions) -> bool {
        self.years.len() == options.years.len()
            && self.seniorities.len() == options.seniorities.len()
            && self.contracts.len() == options.contracts.len()
            && self.company_sizes.len() == options.company_sizes.len()
    }

    pub fn matches(&self, record: &SalaryRecord) -> bool {
        self.years.contains(&record.year)
            && self.seniorities.contains(record.seniority.as_str())
            && self.contracts.contains(record.contract.as_str())
            && self.company_sizes.contains(record.company_size.as_str())
    }

    /// Source-order subsequence of rows passing all four membership tests.
    pub fn apply(&self, records: &[SalaryRecord]) -> Vec<SalaryRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Checkbox-style toggle: inserts the value if absent, removes it otherwise.
pub fn toggle_membership<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}
