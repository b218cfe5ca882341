// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smallvec::SmallVec;
use smol_str::SmolStr;

use super::columns::{ColumnLayout, PlacedBox};
use crate::model::{BoxId, Connection, DiagramParams, Point, DEFAULT_LINE_SPACING};

pub const NEUTRAL_ROUTE_COLOR: &str = "#4c5e74";
pub const ALERT_ROUTE_COLOR: &str = "#ff5242";

/// Position of one connection inside the group of connections sharing an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupRank {
    rank: usize,
    count: usize,
}

impl GroupRank {
    pub fn new(rank: usize, count: usize) -> Self {
        debug_assert!(rank < count, "rank {rank} out of group of {count}");
        Self { rank, count }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Lane weight in `(0, 1)`: rank 0 gets the widest lane, the last rank the narrowest.
    pub fn lane_weight(&self) -> f64 {
        (self.count - self.rank) as f64 / (self.count + 1) as f64
    }

    /// Where along a box edge this connection attaches, as a fraction in `(0, 1)` from the top.
    pub fn segment_fraction(&self) -> f64 {
        (self.rank + 1) as f64 / (self.count + 1) as f64
    }
}

/// Source-side and target-side group ranks of one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionRanks {
    pub source: GroupRank,
    pub target: GroupRank,
}

/// Ranks every connection within its source group (same `from`) and target group (same `to`).
///
/// The result is index-aligned with `connections`. Ranks follow input order, so rank 0 is the
/// first connection listed for that endpoint. Connections whose endpoints never resolve to a
/// box still take part in the grouping.
pub fn rank_connections(connections: &[Connection]) -> Vec<ConnectionRanks> {
    let mut source_counts = BTreeMap::<&str, usize>::new();
    let mut target_counts = BTreeMap::<&str, usize>::new();
    for connection in connections {
        *source_counts.entry(connection.from_box_id().as_str()).or_default() += 1;
        *target_counts.entry(connection.to_box_id().as_str()).or_default() += 1;
    }

    let mut source_seen = BTreeMap::<&str, usize>::new();
    let mut target_seen = BTreeMap::<&str, usize>::new();
    connections
        .iter()
        .map(|connection| {
            let from = connection.from_box_id().as_str();
            let to = connection.to_box_id().as_str();
            ConnectionRanks {
                source: next_rank(&mut source_seen, &source_counts, from),
                target: next_rank(&mut target_seen, &target_counts, to),
            }
        })
        .collect()
}

fn next_rank<'a>(
    seen: &mut BTreeMap<&'a str, usize>,
    counts: &BTreeMap<&'a str, usize>,
    key: &'a str,
) -> GroupRank {
    let slot = seen.entry(key).or_default();
    let rank = *slot;
    *slot += 1;
    let count = counts.get(key).copied().unwrap_or(rank + 1);
    GroupRank::new(rank, count)
}

/// How a lane weight scales the line spacing when offsetting an elbow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LaneBand {
    /// Offset is `line_spacing * weight`.
    #[default]
    LineSpacing,
    /// Offset is `weight * fraction * column_width`, so all lanes fit in that share of a column.
    ColumnFraction(f64),
}

impl LaneBand {
    pub fn lane_factor(self, weight: f64, column_width: f64, line_spacing: f64) -> f64 {
        match self {
            Self::LineSpacing => weight,
            Self::ColumnFraction(_) if line_spacing == 0.0 => weight,
            Self::ColumnFraction(fraction) => weight * (column_width * fraction / line_spacing),
        }
    }
}

/// Elbow placement rule picked from the columns a connection joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPairing {
    /// Column 0 into column 1: lanes fan out rightward from the source edge.
    FanOutFromFirst,
    /// Column 1 into column 2: lanes fan in leftward from the target edge.
    FanInToLast,
    /// Any other pair where the target sits in a later column.
    Rightward,
    /// Any other pair where the target sits in the same or an earlier column.
    Leftward,
}

impl ColumnPairing {
    pub fn classify(from_column: usize, to_column: usize) -> Self {
        match (from_column, to_column) {
            (0, 1) => Self::FanOutFromFirst,
            (1, 2) => Self::FanInToLast,
            (from, to) if to > from => Self::Rightward,
            _ => Self::Leftward,
        }
    }

    fn elbow_x(self, start: Point, end: Point, line_spacing: f64, source_lane: f64, target_lane: f64) -> f64 {
        match self {
            Self::FanOutFromFirst | Self::Rightward => start.x + line_spacing * source_lane,
            Self::FanInToLast => end.x - line_spacing * target_lane,
            Self::Leftward => start.x - line_spacing * source_lane,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePalette {
    pub neutral: SmolStr,
    pub alert: SmolStr,
    /// Paint healthy routes with the connection's own colour when it has one.
    pub prefer_connection_color: bool,
}

impl Default for RoutePalette {
    fn default() -> Self {
        Self {
            neutral: SmolStr::new_static(NEUTRAL_ROUTE_COLOR),
            alert: SmolStr::new_static(ALERT_ROUTE_COLOR),
            prefer_connection_color: false,
        }
    }
}

impl RoutePalette {
    fn color_for(&self, connection: &Connection, is_degraded: bool) -> SmolStr {
        if is_degraded {
            return self.alert.clone();
        }
        match connection.color() {
            Some(color) if self.prefer_connection_color => SmolStr::new(color),
            _ => self.neutral.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteOptions {
    pub line_spacing: f64,
    pub lane_band: LaneBand,
    pub palette: RoutePalette,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            line_spacing: DEFAULT_LINE_SPACING,
            lane_band: LaneBand::default(),
            palette: RoutePalette::default(),
        }
    }
}

impl From<&DiagramParams> for RouteOptions {
    fn from(params: &DiagramParams) -> Self {
        Self { line_spacing: params.line_spacing, ..Self::default() }
    }
}

/// Orthogonal connector geometry for one connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    connection_index: usize,
    from: BoxId,
    to: BoxId,
    from_column: usize,
    to_column: usize,
    start: Point,
    end: Point,
    elbow_x: f64,
    color: SmolStr,
    is_degraded: bool,
    elbow_icons: SmallVec<[Point; 1]>,
    ranks: ConnectionRanks,
}

impl Route {
    /// Index of the connection this route was computed from, in the input slice.
    pub fn connection_index(&self) -> usize {
        self.connection_index
    }

    pub fn from_box_id(&self) -> &BoxId {
        &self.from
    }

    pub fn to_box_id(&self) -> &BoxId {
        &self.to
    }

    pub fn from_column(&self) -> usize {
        self.from_column
    }

    pub fn to_column(&self) -> usize {
        self.to_column
    }

    /// Attachment point on the source box's right edge.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Attachment point on the target box's left edge.
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn elbow_x(&self) -> f64 {
        self.elbow_x
    }

    pub fn mid_y(&self) -> f64 {
        self.start.y
    }

    /// The two bend points: `(elbow_x, start.y)` then `(elbow_x, end.y)`.
    pub fn elbows(&self) -> [Point; 2] {
        [Point::new(self.elbow_x, self.start.y), Point::new(self.elbow_x, self.end.y)]
    }

    /// Full polyline: start, both elbows, end.
    pub fn points(&self) -> [Point; 4] {
        let [first, second] = self.elbows();
        [self.start, first, second, self.end]
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_degraded(&self) -> bool {
        self.is_degraded
    }

    /// Warning markers for the renderer; one at the second elbow when degraded, none otherwise.
    pub fn elbow_icons(&self) -> &[Point] {
        &self.elbow_icons
    }

    pub fn ranks(&self) -> ConnectionRanks {
        self.ranks
    }
}

fn attach_y(placed: &PlacedBox, group: GroupRank) -> f64 {
    let rect = placed.rect();
    rect.y + (rect.h / (group.count + 1) as f64) * (group.rank + 1) as f64
}

/// Routes every connection whose endpoints both exist in `layout`.
///
/// - `start` splits the source box's right edge into `source count + 1` segments; `end` does the
///   same on the target's left edge, except a lone incoming connection lands on the midpoint.
/// - The elbow's x offset comes from [`ColumnPairing`] and the lane weights.
/// - A route is degraded when either endpoint is down.
///
/// Output order follows input order; connections with unknown endpoints are dropped.
pub fn compute_routes(
    connections: &[Connection],
    layout: &ColumnLayout,
    options: &RouteOptions,
) -> Vec<Route> {
    let ranks = rank_connections(connections);
    let mut routes = Vec::<Route>::with_capacity(connections.len());

    for (connection_index, (connection, ranks)) in connections.iter().zip(ranks).enumerate() {
        let from = connection.from_box_id();
        let to = connection.to_box_id();
        let (Some(source), Some(target)) = (layout.get(from.as_str()), layout.get(to.as_str()))
        else {
            tracing::debug!(
                connection_index,
                from = %from,
                to = %to,
                from_known = layout.get(from.as_str()).is_some(),
                to_known = layout.get(to.as_str()).is_some(),
                "routes: skipping connection with unknown endpoint"
            );
            continue;
        };

        let start = Point::new(source.rect().right(), attach_y(source, ranks.source));
        let end_y = if ranks.target.count > 1 {
            attach_y(target, ranks.target)
        } else {
            target.rect().center_y()
        };
        let end = Point::new(target.rect().x, end_y);

        let column_width = layout.column_width();
        let source_lane =
            options.lane_band.lane_factor(ranks.source.lane_weight(), column_width, options.line_spacing);
        let target_lane =
            options.lane_band.lane_factor(ranks.target.lane_weight(), column_width, options.line_spacing);

        let pairing = ColumnPairing::classify(source.column(), target.column());
        let elbow_x = pairing.elbow_x(start, end, options.line_spacing, source_lane, target_lane);

        let is_degraded = source.status().is_down() || target.status().is_down();
        let mut elbow_icons = SmallVec::<[Point; 1]>::new();
        if is_degraded {
            elbow_icons.push(Point::new(elbow_x, end.y));
        }

        routes.push(Route {
            connection_index,
            from: from.clone(),
            to: to.clone(),
            from_column: source.column(),
            to_column: target.column(),
            start,
            end,
            elbow_x,
            color: options.palette.color_for(connection, is_degraded),
            is_degraded,
            elbow_icons,
            ranks,
        });
    }

    tracing::trace!(
        connections = connections.len(),
        routes = routes.len(),
        degraded = routes.iter().filter(|route| route.is_degraded).count(),
        "routes: computed"
    );

    routes
}
