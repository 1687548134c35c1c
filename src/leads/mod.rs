//! Lead browsing pipeline: load, filter, aggregate, and build outreach for
//! one selected lead.

pub mod dashboard;
mod domain;
pub mod filter;
pub mod links;
mod loader;
pub mod metrics;
pub mod pitch;
mod store;

pub use dashboard::{
    build_dashboard, select_contact, ContactCard, DashboardView, LeadRowView, MetricCards,
};
pub use domain::{normalize_phone, Lead, LeadTable, NO_ADDRESS, NO_EMAIL, NO_PHONE};
pub use filter::{
    distinct_cities, distinct_segments, filter_leads, AppliedFacets, FacetOptions,
    FacetSelection, LeadView,
};
pub use links::{build_links, LeadLinks};
pub use loader::{load_leads, LeadLoadError};
pub use metrics::{compute_metrics, LeadMetrics};
pub use pitch::{classify_segment, generate_pitch, Segment};
pub use store::LeadStore;
