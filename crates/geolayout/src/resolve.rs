//! Per-node coordinate lookup.

use geolayout_graph::{AttributeStore, AttributeValue, DynamicModel, Estimator, TimeInterval};

/// Reads a node's coordinate attribute as a scalar.
///
/// On a time-varying graph the resolver is bound to the visible interval and the active
/// estimator; time-indexed values are collapsed with them. Plain scalars resolve the same way in
/// both cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateResolver {
    snapshot: Option<(TimeInterval, Estimator)>,
}

impl CoordinateResolver {
    pub fn new() -> Self {
        Self { snapshot: None }
    }

    /// A resolver bound to `model`'s visible window when the graph is dynamic.
    pub fn for_model(model: Option<&dyn DynamicModel>) -> Self {
        match model {
            Some(m) if m.is_dynamic_graph() => Self::at(m.visible_interval(), m.estimator()),
            _ => Self::new(),
        }
    }

    pub fn at(interval: TimeInterval, estimator: Estimator) -> Self {
        Self {
            snapshot: Some((interval, estimator)),
        }
    }

    /// The visible interval when resolving a dynamic graph.
    pub fn interval(&self) -> Option<&TimeInterval> {
        self.snapshot.as_ref().map(|(interval, _)| interval)
    }

    /// `None` when the node has no value, the value is not numeric, or it is not finite.
    pub fn resolve<S>(&self, store: &S, node: &str, column: &str) -> Option<f64>
    where
        S: AttributeStore + ?Sized,
    {
        let value = store.value(node, column)?;
        let out = match (value, self.snapshot.as_ref()) {
            (AttributeValue::Dynamic(series), Some((interval, estimator))) => {
                series.value(interval, *estimator)?
            }
            (AttributeValue::Dynamic(_), None) => return None,
            (scalar, _) => scalar.as_f64()?,
        };
        out.is_finite().then_some(out)
    }
}

impl Default for CoordinateResolver {
    fn default() -> Self {
        Self::new()
    }
}
