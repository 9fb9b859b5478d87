//! Internal storage entries for [`GeoGraph`](super::GeoGraph).

use super::HashMap;
use crate::attributes::AttributeValue;
use crate::dynamic::TimeInterval;
use crate::layout_data::LayoutData;

#[derive(Debug)]
pub(in crate::graph) struct NodeEntry {
    pub(in crate::graph) id: String,
    pub(in crate::graph) x: f64,
    pub(in crate::graph) y: f64,
    /// `None` means the node exists at every time.
    pub(in crate::graph) lifetime: Option<TimeInterval>,
    pub(in crate::graph) row: HashMap<String, AttributeValue>,
    pub(in crate::graph) layout_data: Option<Box<dyn LayoutData>>,
}

impl NodeEntry {
    pub(in crate::graph) fn new(id: String) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            lifetime: None,
            row: HashMap::default(),
            layout_data: None,
        }
    }

    pub(in crate::graph) fn alive_during(&self, interval: &TimeInterval) -> bool {
        self.lifetime.is_none_or(|life| life.intersects(interval))
    }
}
