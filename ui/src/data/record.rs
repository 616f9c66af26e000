//! The salary record schema shared by the loader, the export writer, and the UI.

use serde::{Deserialize, Serialize};

/// Column order of the upstream CSV. The export writer emits the same order so
/// a filtered export re-parses with the loader unchanged.
pub const CSV_HEADERS: [&str; 8] = [
    "ano",
    "senioridade",
    "contrato",
    "tamanho_empresa",
    "cargo",
    "remoto",
    "residencia_iso3",
    "usd",
];

/// One row of the salary dataset. Field names are English; the serde renames
/// pin the Portuguese column names of the upstream file as the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    #[serde(rename = "ano")]
    pub year: u16,
    #[serde(rename = "senioridade")]
    pub seniority: String,
    #[serde(rename = "contrato")]
    pub contract: String,
    #[serde(rename = "tamanho_empresa")]
    pub company_size: String,
    #[serde(rename = "cargo")]
    pub title: String,
    #[serde(rename = "remoto")]
    pub remote: String,
    #[serde(rename = "residencia_iso3")]
    pub residence_iso3: String,
    #[serde(rename = "usd")]
    pub usd: f64,
}
