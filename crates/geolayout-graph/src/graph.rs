//! In-memory attributed graph.
//!
//! Nodes keep insertion order; the node table keeps column declaration order. Edges are not
//! modelled since no geographic placement depends on them.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::attributes::{AttributeValue, Column, ColumnKind};
use crate::dynamic::TimeInterval;
use crate::error::{Error, Result};
use crate::layout_data::LayoutData;
use crate::{AttributeStore, LayoutGraph, Point};

mod entries;

use entries::NodeEntry;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Default)]
pub struct GeoGraph {
    nodes: Vec<NodeEntry>,
    node_index: HashMap<String, usize>,
    columns: IndexMap<String, Column, FxBuildHasher>,
}

impl GeoGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a node column.
    pub fn add_column(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        kind: ColumnKind,
    ) -> Result<&mut Self> {
        let column = Column::new(id, title, kind);
        if self.columns.contains_key(&column.id) {
            return Err(Error::DuplicateColumn { column: column.id });
        }
        self.columns.insert(column.id.clone(), column);
        Ok(self)
    }

    /// Adds a node at the origin; an existing node is left as is.
    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return self;
        }
        let idx = self.nodes.len();
        self.node_index.insert(id.clone(), idx);
        self.nodes.push(NodeEntry::new(id));
        self
    }

    pub fn set_node_position(&mut self, id: impl Into<String>, x: f64, y: f64) -> &mut Self {
        let id = id.into();
        self.ensure_node(id.as_str());
        let entry = self.entry_mut(&id);
        if let Some(n) = entry {
            n.x = x;
            n.y = y;
        }
        self
    }

    /// Restricts the node to `lifetime`; dynamic snapshots outside it skip the node.
    pub fn set_lifetime(&mut self, id: impl Into<String>, lifetime: TimeInterval) -> &mut Self {
        let id = id.into();
        self.ensure_node(id.as_str());
        if let Some(n) = self.entry_mut(&id) {
            n.lifetime = Some(lifetime);
        }
        self
    }

    /// Stores a value for a declared column, adding the node if needed.
    pub fn set_attribute(
        &mut self,
        id: impl Into<String>,
        column: &str,
        value: impl Into<AttributeValue>,
    ) -> Result<&mut Self> {
        if !self.columns.contains_key(column) {
            return Err(Error::MissingColumn {
                column: column.to_string(),
            });
        }
        let id = id.into();
        self.ensure_node(id.as_str());
        if let Some(n) = self.entry_mut(&id) {
            n.row.insert(column.to_string(), value.into());
        }
        Ok(self)
    }

    pub fn clear_attribute(&mut self, id: &str, column: &str) -> Option<AttributeValue> {
        self.entry_mut(id)?.row.remove(column)
    }

    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some(idx) = self.node_index.remove(id) else {
            return false;
        };
        self.nodes.remove(idx);
        self.node_index.clear();
        for (i, n) in self.nodes.iter().enumerate() {
            self.node_index.insert(n.id.clone(), i);
        }
        true
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    /// Ids of declared numeric columns, for hosts offering a column picker.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns
            .values()
            .filter(|c| c.kind.is_numeric())
            .map(|c| c.id.as_str())
            .collect()
    }

    fn entry(&self, id: &str) -> Option<&NodeEntry> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx])
    }

    fn entry_mut(&mut self, id: &str) -> Option<&mut NodeEntry> {
        self.node_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.nodes[idx])
    }
}

impl LayoutGraph for GeoGraph {
    fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    fn snapshot_node_ids(&self, interval: &TimeInterval) -> Vec<String> {
        self.nodes
            .iter()
            .filter(|n| n.alive_during(interval))
            .map(|n| n.id.clone())
            .collect()
    }

    fn position(&self, node: &str) -> Option<Point> {
        self.entry(node).map(|n| Point::new(n.x, n.y))
    }

    fn set_position(&mut self, node: &str, position: Point) -> Result<()> {
        let n = self.entry_mut(node).ok_or_else(|| Error::MissingNode {
            node: node.to_string(),
        })?;
        n.x = position.x;
        n.y = position.y;
        Ok(())
    }

    fn layout_data(&self, node: &str) -> Option<&(dyn LayoutData + 'static)> {
        self.entry(node)?.layout_data.as_deref()
    }

    fn set_layout_data(&mut self, node: &str, data: Box<dyn LayoutData>) -> Result<()> {
        let n = self.entry_mut(node).ok_or_else(|| Error::MissingNode {
            node: node.to_string(),
        })?;
        n.layout_data = Some(data);
        Ok(())
    }
}

impl AttributeStore for GeoGraph {
    fn columns(&self) -> Vec<&Column> {
        self.columns.values().collect()
    }

    fn column(&self, id: &str) -> Option<&Column> {
        self.columns.get(id)
    }

    fn value(&self, node: &str, column: &str) -> Option<&AttributeValue> {
        self.entry(node)?.row.get(column)
    }
}
