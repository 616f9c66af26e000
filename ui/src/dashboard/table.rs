use dioxus::prelude::*;

use crate::{core::format, data::SalaryRecord};

/// DOM tables have no virtualization, so rendering is capped; exports are not.
pub const MAX_RENDERED_ROWS: usize = 500;

#[component]
pub fn DetailTable(records: Vec<SalaryRecord>) -> Element {
    let total = records.len();
    let truncated = total > MAX_RENDERED_ROWS;
    let shown: Vec<SalaryRecord> = records.into_iter().take(MAX_RENDERED_ROWS).collect();
    let total_label = format::format_count(total);

    rsx! {
        section { class: "dashboard-card dashboard-table",
            div { class: "dashboard-card__header",
                h3 { "Detailed data" }
                if total > 0 {
                    span { class: "dashboard-card__meta", "{total_label} rows" }
                }
            }

            if total == 0 {
                p { class: "dashboard-card__placeholder", "No rows match the current filters." }
            } else {
                div { class: "dashboard-table__scroll",
                    table {
                        thead {
                            tr {
                                th { "Year" }
                                th { "Seniority" }
                                th { "Contract" }
                                th { "Company size" }
                                th { "Job title" }
                                th { "Remote" }
                                th { "Country" }
                                th { class: "dashboard-table__num", "USD" }
                            }
                        }
                        tbody {
                            for record in shown.into_iter() {
                                tr {
                                    td { "{record.year}" }
                                    td { "{record.seniority}" }
                                    td { "{record.contract}" }
                                    td { "{record.company_size}" }
                                    td { "{record.title}" }
                                    td { "{record.remote}" }
                                    td { "{record.residence_iso3}" }
                                    td { class: "dashboard-table__num", "{format::format_usd(record.usd)}" }
                                }
                            }
                        }
                    }
                }
                if truncated {
                    p { class: "dashboard-card__meta",
                        "Showing the first {MAX_RENDERED_ROWS} of {total_label} rows. Exports always include every filtered row."
                    }
                }
            }
        }
    }
}
