//! Placement of nodes without coordinates, and recentering.

use geolayout_graph::{LayoutGraph, Point};

use crate::error::Result;

/// Where a lone ungeocoded node goes: far outside any projected range.
pub const UNCERTAIN_POSITION: Point = Point::new(10000.0, 10000.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// No geocoded or no ungeocoded nodes; nothing was placed.
    Skipped,
    /// Ungeocoded nodes were lined up below the geocoded bounding box, `step` apart.
    Row { step: f64 },
    /// The single ungeocoded node was parked at [`UNCERTAIN_POSITION`].
    Sentinel,
}

/// Horizontal extent and lowest y of a set of positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
}

pub fn extent<G>(graph: &G, nodes: &[&str]) -> Option<Extent>
where
    G: LayoutGraph + ?Sized,
{
    let mut positions = nodes.iter().filter_map(|id| graph.position(id));
    let first = positions.next()?;
    let mut out = Extent {
        x_min: first.x,
        x_max: first.x,
        y_min: first.y,
    };
    for p in positions {
        out.x_min = out.x_min.min(p.x);
        out.x_max = out.x_max.max(p.x);
        out.y_min = out.y_min.min(p.y);
    }
    Some(out)
}

/// Positions `ungeocoded` relative to the extent of the already projected `geocoded` nodes.
///
/// Two or more nodes are spread along a row at `y_min - step`, starting at `x_min`, with
/// `step = (x_max - x_min) / (count - 1)`. A single node is parked at [`UNCERTAIN_POSITION`].
pub fn place_ungeocoded<G>(
    graph: &mut G,
    geocoded: &[&str],
    ungeocoded: &[&str],
) -> Result<Placement>
where
    G: LayoutGraph + ?Sized,
{
    if ungeocoded.is_empty() {
        return Ok(Placement::Skipped);
    }
    let Some(ext) = extent(graph, geocoded) else {
        return Ok(Placement::Skipped);
    };

    if let [only] = ungeocoded {
        graph.set_position(only, UNCERTAIN_POSITION)?;
        return Ok(Placement::Sentinel);
    }

    let step = (ext.x_max - ext.x_min) / (ungeocoded.len() - 1) as f64;
    for (i, id) in ungeocoded.iter().enumerate() {
        graph.set_position(id, Point::new(ext.x_min + i as f64 * step, ext.y_min - step))?;
    }
    Ok(Placement::Row { step })
}

/// Mean position of `nodes`; `None` when none of them has a position.
pub fn centroid<G>(graph: &G, nodes: &[&str]) -> Option<Point>
where
    G: LayoutGraph + ?Sized,
{
    let mut count = 0usize;
    let mut sum = Point::default();
    for p in nodes.iter().filter_map(|id| graph.position(id)) {
        count += 1;
        sum.x += p.x;
        sum.y += p.y;
    }
    (count > 0).then(|| Point::new(sum.x / count as f64, sum.y / count as f64))
}

/// Subtracts `offset` from the position of every node in `nodes`.
pub fn recenter<G>(graph: &mut G, nodes: &[&str], offset: Point) -> Result<()>
where
    G: LayoutGraph + ?Sized,
{
    for id in nodes {
        let Some(p) = graph.position(id) else {
            continue;
        };
        graph.set_position(id, Point::new(p.x - offset.x, p.y - offset.y))?;
    }
    Ok(())
}
