// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout and routing for column diagrams.
//!
//! [`columns`] places boxes; [`routes`] draws elbow connectors between the placed boxes. Both
//! are pure functions of their inputs and never fail.

pub mod columns;
pub mod routes;

pub use columns::{
    compute_layout, ColumnLayout, LayoutParams, PlacedBox, PlacementStrategy, BOX_WIDTH_RATIO,
};
pub use routes::{
    compute_routes, rank_connections, ColumnPairing, ConnectionRanks, GroupRank, LaneBand, Route,
    RouteOptions, RoutePalette, ALERT_ROUTE_COLOR, NEUTRAL_ROUTE_COLOR,
};
