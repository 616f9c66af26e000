use std::sync::Arc;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::components::AppHeader;
use crate::dashboard::{
    CountryChart, DetailTable, ExportPanel, FilterSidebar, RemoteShareChart, SalaryHistogram,
    SummaryTiles, TopTitlesChart,
};
use crate::data::{
    aggregate::{self, Summary},
    filter::{FilterOptions, FilterState},
    loader, SalaryRecord,
};

const TOP_TITLE_COUNT: usize = 10;
const HISTOGRAM_BIN_COUNT: usize = 30;
/// The country chart tracks this one role, as the source dashboard does.
const SPOTLIGHT_TITLE: &str = "Data Scientist";

/// The single dashboard page: dataset load, filter state, derived aggregates,
/// and the full card layout. Every filter change recomputes the derived view
/// from the immutable dataset.
#[component]
pub fn Dashboard() -> Element {
    let dataset = use_resource(|| async {
        loader::load_dataset(loader::DATASET_URL).await.map_err(|err| {
            warn!("dataset load failed: {err}");
            err.to_string()
        })
    });

    let mut filters = use_signal(FilterState::default);
    let mut filters_seeded = use_signal(|| false);

    // Seed the selection to "everything" once the dataset is in, mirroring the
    // multiselect widgets' default state.
    use_effect(move || {
        if let Some(Ok(records)) = dataset.read_unchecked().as_ref() {
            if !filters_seeded() {
                let options = FilterOptions::from_records(records);
                filters.set(FilterState::select_all(&options));
                filters_seeded.set(true);
            }
        }
    });

    let body = match dataset.read_unchecked().as_ref() {
        None => rsx! {
            p { class: "dashboard-status", "Loading the salary dataset…" }
        },
        Some(Err(message)) => rsx! {
            p { class: "dashboard-status dashboard-status--error",
                "Couldn't load the dataset: {message}"
            }
        },
        Some(Ok(records)) => render_dashboard(records, filters),
    };

    rsx! {
        section { class: "page page-dashboard",
            AppHeader {}
            {body}
        }
    }
}

fn render_dashboard(records: &Arc<Vec<SalaryRecord>>, filters: Signal<FilterState>) -> Element {
    let options = FilterOptions::from_records(records);
    let filtered = filters().apply(records);

    let summary = Summary::from_records(&filtered);
    let top_titles = aggregate::top_titles_by_mean(&filtered, TOP_TITLE_COUNT);
    let bins = aggregate::histogram(&filtered, HISTOGRAM_BIN_COUNT);
    let remote = aggregate::remote_breakdown(&filtered);
    let countries = aggregate::country_means(&filtered, SPOTLIGHT_TITLE);

    rsx! {
        div { class: "dashboard-layout",
            FilterSidebar { options, filters }

            div { class: "dashboard-main",
                SummaryTiles { summary }

                div { class: "dashboard-grid",
                    TopTitlesChart { entries: top_titles }
                    SalaryHistogram { bins }
                    RemoteShareChart { breakdown: remote }
                    CountryChart { entries: countries }
                }

                ExportPanel { records: filtered.clone() }
                DetailTable { records: filtered }
            }
        }
    }
}
