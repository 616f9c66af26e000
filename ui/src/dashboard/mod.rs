mod filters;
pub use filters::FilterSidebar;

mod metrics;
pub use metrics::SummaryTiles;

mod charts;
pub use charts::{CountryChart, RemoteShareChart, SalaryHistogram, TopTitlesChart};

mod export;
pub use export::ExportPanel;

mod table;
pub use table::DetailTable;
