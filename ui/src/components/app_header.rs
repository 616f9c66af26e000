use dioxus::prelude::*;

#[component]
pub fn AppHeader() -> Element {
    rsx! {
        header { class: "dashboard-header",
            h1 { class: "dashboard-header__title", "🚀 Data-career salary dashboard" }
            p { class: "dashboard-header__tagline",
                "Explore salary data from recent years and use the filters on the side to adjust the analysis."
            }
        }
    }
}
