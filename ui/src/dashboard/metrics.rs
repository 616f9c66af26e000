use dioxus::prelude::*;

use crate::{core::format, data::aggregate::Summary};

#[component]
pub fn SummaryTiles(summary: Summary) -> Element {
    let mean_label = summary
        .mean_usd
        .map(format::format_usd)
        .unwrap_or_else(|| "N/A".to_string());

    let mean_meta = if summary.row_count > 0 {
        "Across filtered rows"
    } else {
        "No rows selected"
    };

    rsx! {
        section { class: "dashboard-highlights",
            div { class: "dashboard-highlight",
                span { class: "dashboard-highlight__label", "Filtered records" }
                strong { class: "dashboard-highlight__value", "{format::format_count(summary.row_count)}" }
                span { class: "dashboard-highlight__meta", "Rows passing all filters" }
            }
            div { class: "dashboard-highlight",
                span { class: "dashboard-highlight__label", "Mean salary (USD)" }
                strong { class: "dashboard-highlight__value", "{mean_label}" }
                span { class: "dashboard-highlight__meta", "{mean_meta}" }
            }
            div { class: "dashboard-highlight",
                span { class: "dashboard-highlight__label", "Distinct job titles" }
                strong { class: "dashboard-highlight__value", "{format::format_count(summary.distinct_titles)}" }
                span { class: "dashboard-highlight__meta", "In the filtered view" }
            }
            div { class: "dashboard-highlight",
                span { class: "dashboard-highlight__label", "Company sizes" }
                strong { class: "dashboard-highlight__value", "{format::format_count(summary.distinct_company_sizes)}" }
                span { class: "dashboard-highlight__meta", "Size categories present" }
            }
        }
    }
}
