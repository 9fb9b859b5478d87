#![forbid(unsafe_code)]

//! Geographic graph layout.
//!
//! Positions graph nodes from latitude/longitude attributes using one of eight classical map
//! projections. Nodes without coordinates are lined up below the map (or parked at
//! [`UNCERTAIN_POSITION`] when there is only one), and the result can be recentered on the
//! geocoded centroid.
//!
//! The engine is headless: it works against the capability traits of [`geolayout_graph`], so any
//! host graph implementing them can be laid out.

pub mod config;
pub mod engine;
pub mod error;
pub mod projection;
pub mod resolve;

pub use geolayout_graph as graph;

pub use config::{DetectedColumns, LayoutParams, ProjectionSelection, detect_coordinate_columns};
pub use engine::{
    GeoLayout, GeoLayoutData, LayoutReport, Placement, RunState, UNCERTAIN_POSITION, placement,
};
pub use error::{Error, Result};
pub use projection::{ProjectionFn, ProjectionKind, ReferenceLines};
pub use resolve::CoordinateResolver;

use geolayout_graph::{AttributeStore, DynamicModel, LayoutGraph};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lays `graph` out once with `params`.
pub fn layout<G>(
    graph: &mut G,
    params: LayoutParams,
    dynamic: Option<&dyn DynamicModel>,
) -> Result<LayoutReport>
where
    G: LayoutGraph + AttributeStore + ?Sized,
{
    GeoLayout::new(params).go_algo(graph, dynamic)
}
