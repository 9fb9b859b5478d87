#![forbid(unsafe_code)]

//! Host graph capability traits used by `geolayout`.
//!
//! The layout engine never sees a concrete graph type. It talks to three narrow capabilities:
//! - [`LayoutGraph`]: ordered node iteration, position storage and an opaque layout-data slot;
//! - [`AttributeStore`]: the node column table and per-node values;
//! - [`DynamicModel`]: whether the graph is time-varying, its visible window and active estimator.
//!
//! [`GeoGraph`] is an in-memory implementation of the first two, and [`DynamicSettings`] of the
//! third. Hosts with their own graph model implement the traits directly.

pub mod attributes;
pub mod dynamic;
pub mod error;
pub mod graph;
pub mod layout_data;

pub use attributes::{AttributeValue, Column, ColumnKind};
pub use dynamic::{DynamicSeries, DynamicSettings, Estimator, TimeInterval};
pub use error::{Error, Result};
pub use graph::GeoGraph;
pub use layout_data::LayoutData;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Node iteration and position storage.
pub trait LayoutGraph {
    /// All node ids in the graph's iteration order.
    fn node_ids(&self) -> Vec<String>;

    /// Node ids alive during `interval`, in iteration order.
    ///
    /// Graphs without node lifetimes return every node.
    fn snapshot_node_ids(&self, interval: &TimeInterval) -> Vec<String> {
        let _ = interval;
        self.node_ids()
    }

    fn position(&self, node: &str) -> Option<Point>;

    fn set_position(&mut self, node: &str, position: Point) -> Result<()>;

    fn layout_data(&self, node: &str) -> Option<&(dyn LayoutData + 'static)>;

    fn set_layout_data(&mut self, node: &str, data: Box<dyn LayoutData>) -> Result<()>;
}

/// Node attribute table.
pub trait AttributeStore {
    /// Node table columns in declaration order.
    fn columns(&self) -> Vec<&Column>;

    fn column(&self, id: &str) -> Option<&Column> {
        self.columns().into_iter().find(|c| c.id == id)
    }

    fn value(&self, node: &str, column: &str) -> Option<&AttributeValue>;
}

/// Time-varying graph state.
pub trait DynamicModel {
    fn is_dynamic_graph(&self) -> bool;

    fn visible_interval(&self) -> TimeInterval;

    fn estimator(&self) -> Estimator;
}
