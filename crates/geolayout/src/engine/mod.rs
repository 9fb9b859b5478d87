//! The geo layout pass.
//!
//! One pass runs to completion inside a single host step:
//! 1. classify nodes into geocoded (both coordinates resolve) and ungeocoded;
//! 2. compute the reference meridian/parallel over the geocoded nodes, when the projection needs
//!    them;
//! 3. project the geocoded nodes in iteration order;
//! 4. place the ungeocoded nodes below the projected extent (see [`placement`]);
//! 5. optionally shift everything by the geocoded centroid.
//!
//! The engine then stays `Done` until it is re-armed by [`GeoLayout::init_algo`], a parameter
//! change, or [`GeoLayout::reset_properties_values`].

use geolayout_graph::{AttributeStore, DynamicModel, LayoutData, LayoutGraph, Point};
use tracing::{debug, trace, warn};

use crate::config::{LayoutParams, ProjectionSelection, detect_coordinate_columns};
use crate::error::{Error, Result};
use crate::projection::{ProjectionKind, ReferenceLines};
use crate::resolve::CoordinateResolver;

pub mod placement;

pub use placement::{Placement, UNCERTAIN_POSITION};

/// Coordinates a geocoded node resolved to during the last run, as read from its attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLayoutData {
    pub latitude: f64,
    pub longitude: f64,
}

impl LayoutData for GeoLayoutData {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutReport {
    pub projection: ProjectionSelection,
    /// Nodes that received a projected position, in iteration order.
    pub geocoded: Vec<String>,
    /// Nodes placed by [`placement::place_ungeocoded`], in iteration order.
    pub ungeocoded: Vec<String>,
    /// Geocoded nodes whose projection was not finite; they are part of `ungeocoded` too.
    pub demoted: Vec<String>,
    pub reference: Option<ReferenceLines>,
    pub placement: Placement,
    /// Offset subtracted from every position; zero when centering is off.
    pub offset: Point,
}

#[derive(Debug, Clone, Default)]
pub struct GeoLayout {
    params: LayoutParams,
    state: RunState,
}

impl GeoLayout {
    pub fn new(params: LayoutParams) -> Self {
        Self {
            params,
            state: RunState::Idle,
        }
    }

    /// Default parameters with coordinate columns detected from `store`.
    pub fn detect<S>(store: &S) -> Self
    where
        S: AttributeStore + ?Sized,
    {
        let mut engine = Self::default();
        engine.reset_properties_values(store);
        engine
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    pub fn set_params(&mut self, params: LayoutParams) {
        if self.params != params {
            self.params = params;
            self.rearm();
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn scale(&self) -> f64 {
        self.params.scale
    }

    pub fn set_scale(&mut self, scale: f64) {
        if self.params.scale != scale {
            self.params.scale = scale;
            self.rearm();
        }
    }

    pub fn is_centered(&self) -> bool {
        self.params.centered
    }

    pub fn set_centered(&mut self, centered: bool) {
        if self.params.centered != centered {
            self.params.centered = centered;
            self.rearm();
        }
    }

    pub fn is_radians(&self) -> bool {
        self.params.radians
    }

    pub fn set_radians(&mut self, radians: bool) {
        if self.params.radians != radians {
            self.params.radians = radians;
            self.rearm();
        }
    }

    pub fn projection(&self) -> &ProjectionSelection {
        &self.params.projection
    }

    /// Accepts any name; names outside the catalog select "no transform".
    pub fn set_projection(&mut self, name: &str) {
        self.set_projection_selection(ProjectionSelection::from_name(name));
    }

    pub fn set_projection_kind(&mut self, kind: ProjectionKind) {
        self.set_projection_selection(ProjectionSelection::Known(kind));
    }

    fn set_projection_selection(&mut self, selection: ProjectionSelection) {
        if self.params.projection != selection {
            self.params.projection = selection;
            self.rearm();
        }
    }

    pub fn latitude(&self) -> Option<&str> {
        self.params.latitude.as_deref()
    }

    pub fn set_latitude(&mut self, column: Option<String>) {
        if self.params.latitude != column {
            self.params.latitude = column;
            self.rearm();
        }
    }

    pub fn longitude(&self) -> Option<&str> {
        self.params.longitude.as_deref()
    }

    pub fn set_longitude(&mut self, column: Option<String>) {
        if self.params.longitude != column {
            self.params.longitude = column;
            self.rearm();
        }
    }

    /// Pre-selects coordinate columns found in `store`'s node table and re-arms the engine.
    ///
    /// A selection is only replaced when a matching column exists; other parameters are kept.
    pub fn reset_properties_values<S>(&mut self, store: &S)
    where
        S: AttributeStore + ?Sized,
    {
        let detected = detect_coordinate_columns(store.columns());
        if let Some(latitude) = detected.latitude {
            self.params.latitude = Some(latitude);
        }
        if let Some(longitude) = detected.longitude {
            self.params.longitude = Some(longitude);
        }
        self.state = RunState::Idle;
        debug!(
            latitude = ?self.params.latitude,
            longitude = ?self.params.longitude,
            "geo layout properties reset"
        );
    }

    /// Re-arms the engine for another pass.
    pub fn init_algo(&mut self) {
        self.state = RunState::Idle;
    }

    /// Both coordinate columns are selected and the engine is armed.
    ///
    /// Does not look at the node table; see [`GeoLayout::can_algo_for`].
    pub fn can_algo(&self) -> bool {
        self.state == RunState::Idle && self.params.has_columns()
    }

    /// [`GeoLayout::can_algo`], with both selected columns present in `store`'s node table.
    pub fn can_algo_for<S>(&self, store: &S) -> bool
    where
        S: AttributeStore + ?Sized,
    {
        self.can_algo() && self.missing_column(store).is_none()
    }

    pub fn ready<S>(&self, store: &S) -> bool
    where
        S: AttributeStore + ?Sized,
    {
        self.can_algo_for(store)
    }

    pub fn is_done(&self) -> bool {
        self.state == RunState::Done
    }

    /// Runs one full pass over `graph`.
    ///
    /// `dynamic` is consulted for the visible interval and estimator; a static graph may pass
    /// `None`. Positions are untouched when the engine is not ready, which includes a selected
    /// column missing from the node table.
    pub fn go_algo<G>(
        &mut self,
        graph: &mut G,
        dynamic: Option<&dyn DynamicModel>,
    ) -> Result<LayoutReport>
    where
        G: LayoutGraph + AttributeStore + ?Sized,
    {
        if self.state != RunState::Idle {
            return Err(Error::NotReady {
                reason: "the previous run has not been reset",
            });
        }
        let (Some(latitude), Some(longitude)) =
            (self.params.latitude.clone(), self.params.longitude.clone())
        else {
            return Err(Error::NotReady {
                reason: "latitude and longitude columns must both be selected",
            });
        };
        if let Some(column) = self.missing_column(&*graph) {
            warn!(column = %column, "geo layout column is not in the node table");
            return Err(Error::NotReady {
                reason: "a selected column is not in the node table",
            });
        }

        self.state = RunState::Running;
        let columns = Columns {
            latitude: &latitude,
            longitude: &longitude,
        };
        let result = run(graph, &self.params, columns, dynamic);
        self.state = if result.is_ok() {
            RunState::Done
        } else {
            RunState::Idle
        };
        result
    }

    /// End-of-run hook for host schedulers; the pass keeps no resources to release.
    pub fn end_algo(&mut self) {}

    fn missing_column<'a, S>(&'a self, store: &S) -> Option<&'a str>
    where
        S: AttributeStore + ?Sized,
    {
        [&self.params.latitude, &self.params.longitude]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|column| store.column(column).is_none())
    }

    fn rearm(&mut self) {
        if self.state == RunState::Done {
            self.state = RunState::Idle;
        }
    }
}

#[derive(Clone, Copy)]
struct Columns<'a> {
    latitude: &'a str,
    longitude: &'a str,
}

fn run<G>(
    graph: &mut G,
    params: &LayoutParams,
    columns: Columns<'_>,
    dynamic: Option<&dyn DynamicModel>,
) -> Result<LayoutReport>
where
    G: LayoutGraph + AttributeStore + ?Sized,
{
    let resolver = CoordinateResolver::for_model(dynamic);
    let node_ids = match resolver.interval() {
        Some(interval) => graph.snapshot_node_ids(interval),
        None => graph.node_ids(),
    };

    let classified: Vec<(String, Option<GeoLayoutData>)> = node_ids
        .into_iter()
        .map(|id| {
            let latitude = resolver.resolve(&*graph, &id, columns.latitude);
            let longitude = resolver.resolve(&*graph, &id, columns.longitude);
            let coords = match (latitude, longitude) {
                (Some(latitude), Some(longitude)) => Some(GeoLayoutData {
                    latitude,
                    longitude,
                }),
                _ => None,
            };
            (id, coords)
        })
        .collect();

    let to_radians = |v: f64| if params.radians { v } else { v.to_radians() };
    let kind = params.projection.kind();
    if kind.is_none() {
        warn!(
            projection = %params.projection,
            "unrecognized projection; geocoded nodes keep their positions"
        );
    }

    let reference = kind
        .filter(|k| k.needs_reference_lines())
        .and_then(|_| {
            ReferenceLines::mean_of(classified.iter().filter_map(|(_, coords)| {
                coords.map(|c| (to_radians(c.latitude), to_radians(c.longitude)))
            }))
        });
    let reference_lines = reference.unwrap_or_default();

    let mut plotted = vec![false; classified.len()];
    let mut demoted: Vec<String> = Vec::new();
    let mut projected: Vec<&str> = Vec::new();
    for (i, (id, coords)) in classified.iter().enumerate() {
        let Some(coords) = coords else {
            continue;
        };
        graph.set_layout_data(id, Box::new(*coords))?;
        let Some(kind) = kind else {
            plotted[i] = true;
            continue;
        };

        let p = kind.project(
            to_radians(coords.latitude),
            to_radians(coords.longitude),
            params.scale,
            &reference_lines,
        );
        if !p.is_finite() {
            warn!(
                node = %id,
                latitude = coords.latitude,
                longitude = coords.longitude,
                projection = %kind,
                "projection is not finite; placing node with the ungeocoded ones"
            );
            demoted.push(id.clone());
            continue;
        }
        trace!(node = %id, x = p.x, y = p.y, "projected");
        graph.set_position(id, p)?;
        projected.push(id);
        plotted[i] = true;
    }

    let mut geocoded: Vec<&str> = Vec::new();
    let mut ungeocoded: Vec<&str> = Vec::new();
    for ((id, _), &is_plotted) in classified.iter().zip(&plotted) {
        if is_plotted {
            geocoded.push(id);
        } else {
            ungeocoded.push(id);
        }
    }

    let placed = placement::place_ungeocoded(graph, &geocoded, &ungeocoded)?;

    let offset = if params.centered {
        placement::centroid(&*graph, &projected).unwrap_or_default()
    } else {
        Point::default()
    };
    if params.centered {
        let all: Vec<&str> = classified.iter().map(|(id, _)| id.as_str()).collect();
        placement::recenter(graph, &all, offset)?;
    }

    debug!(
        projection = %params.projection,
        geocoded = geocoded.len(),
        ungeocoded = ungeocoded.len(),
        demoted = demoted.len(),
        placement = ?placed,
        offset_x = offset.x,
        offset_y = offset.y,
        "geo layout pass complete"
    );

    Ok(LayoutReport {
        projection: params.projection.clone(),
        geocoded: geocoded.into_iter().map(str::to_string).collect(),
        ungeocoded: ungeocoded.into_iter().map(str::to_string).collect(),
        demoted,
        reference,
        placement: placed,
        offset,
    })
}
