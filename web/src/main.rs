use dioxus::prelude::*;

use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
}

// Embedded shared theme (ui/assets/theme/main.css); keeps web and desktop on
// one stylesheet source.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}
