use dioxus::prelude::*;

use crate::data::filter::{toggle_membership, FilterOptions, FilterState};

/// Sidebar with one multiselect group per filterable dimension. All groups
/// start fully selected; clearing any one of them empties the dashboard.
#[component]
pub fn FilterSidebar(options: FilterOptions, filters: Signal<FilterState>) -> Element {
    let state = filters();

    let year_values: Vec<String> = options.years.iter().map(|y| y.to_string()).collect();
    let year_selected: Vec<String> = state.years.iter().map(|y| y.to_string()).collect();
    let all_years = options.years.clone();
    let all_seniorities = options.seniorities.clone();
    let all_contracts = options.contracts.clone();
    let all_sizes = options.company_sizes.clone();

    rsx! {
        aside { class: "dashboard-sidebar",
            h2 { class: "dashboard-sidebar__title", "Analysis filters" }

            FilterGroup {
                title: "Year",
                options: year_values,
                selected: year_selected,
                on_toggle: move |value: String| {
                    if let Ok(year) = value.parse::<u16>() {
                        toggle_membership(&mut filters.write().years, year);
                    }
                },
                on_select_all: move |select: bool| {
                    let mut state = filters.write();
                    state.years = if select {
                        all_years.iter().copied().collect()
                    } else {
                        Default::default()
                    };
                },
            }

            FilterGroup {
                title: "Seniority",
                options: options.seniorities.clone(),
                selected: state.seniorities.iter().cloned().collect::<Vec<_>>(),
                on_toggle: move |value: String| {
                    toggle_membership(&mut filters.write().seniorities, value);
                },
                on_select_all: move |select: bool| {
                    let mut state = filters.write();
                    state.seniorities = if select {
                        all_seniorities.iter().cloned().collect()
                    } else {
                        Default::default()
                    };
                },
            }

            FilterGroup {
                title: "Contract type",
                options: options.contracts.clone(),
                selected: state.contracts.iter().cloned().collect::<Vec<_>>(),
                on_toggle: move |value: String| {
                    toggle_membership(&mut filters.write().contracts, value);
                },
                on_select_all: move |select: bool| {
                    let mut state = filters.write();
                    state.contracts = if select {
                        all_contracts.iter().cloned().collect()
                    } else {
                        Default::default()
                    };
                },
            }

            FilterGroup {
                title: "Company size",
                options: options.company_sizes.clone(),
                selected: state.company_sizes.iter().cloned().collect::<Vec<_>>(),
                on_toggle: move |value: String| {
                    toggle_membership(&mut filters.write().company_sizes, value);
                },
                on_select_all: move |select: bool| {
                    let mut state = filters.write();
                    state.company_sizes = if select {
                        all_sizes.iter().cloned().collect()
                    } else {
                        Default::default()
                    };
                },
            }
        }
    }
}

#[component]
fn FilterGroup(
    title: String,
    options: Vec<String>,
    selected: Vec<String>,
    on_toggle: EventHandler<String>,
    on_select_all: EventHandler<bool>,
) -> Element {
    let entries: Vec<(String, bool)> = options
        .iter()
        .map(|value| (value.clone(), selected.contains(value)))
        .collect();

    rsx! {
        fieldset { class: "filter-group",
            legend { class: "filter-group__title", "{title}" }

            div { class: "filter-group__actions",
                button {
                    r#type: "button",
                    class: "filter-group__action",
                    onclick: move |_| on_select_all.call(true),
                    "All"
                }
                button {
                    r#type: "button",
                    class: "filter-group__action",
                    onclick: move |_| on_select_all.call(false),
                    "None"
                }
            }

            ul { class: "filter-group__options",
                for (value, checked) in entries.into_iter() {
                    li {
                        label { class: "filter-group__option",
                            input {
                                r#type: "checkbox",
                                checked: checked,
                                onchange: {
                                    let value = value.clone();
                                    move |_| on_toggle.call(value.clone())
                                },
                            }
                            span { "{value}" }
                        }
                    }
                }
            }
        }
    }
}
