// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::diagram::{
    BoxMeta, BoxSpec, Column, Connection, DiagramConfig, DiagramParams, LayoutVariant,
    StatusEntry, StatusInfo,
};
use super::ids::BoxId;
use super::status::Status;

const COLUMN_COLOR: &str = "#29282e";

fn bid(value: &str) -> BoxId {
    BoxId::new(value).expect("fixture box id")
}

fn spec(id: &str, status: Status) -> BoxSpec {
    BoxSpec::new(bid(id), status)
}

fn link(from: &str, to: &str) -> Connection {
    Connection::new(bid(from), bid(to))
}

fn device(
    id: &str,
    status: Status,
    name: &str,
    address: &str,
    variant: LayoutVariant,
    chart_values: &[f64],
    version: Option<&str>,
) -> BoxSpec {
    let status_info = version.map(|version| {
        StatusInfo::Entries(vec![StatusEntry {
            key: "version".to_owned(),
            value: version.to_owned(),
        }])
    });
    spec(id, status).with_meta(BoxMeta {
        name: Some(name.to_owned()),
        address: Some(address.to_owned()),
        device_type: None,
        layout_variant: Some(variant),
        chart_values: chart_values.to_vec(),
        status_info,
    })
}

/// Columns sized `[1, 2, 1]`: `a` feeds `b` and `c`, both of which feed `d`.
#[cfg(test)]
pub(crate) fn fan_out_small() -> DiagramConfig {
    DiagramConfig {
        columns: vec![
            Column::new(vec![spec("a", Status::Up)]),
            Column::new(vec![spec("b", Status::Up), spec("c", Status::Up)]),
            Column::new(vec![spec("d", Status::Up)]),
        ],
        connections: vec![link("a", "b"), link("a", "c"), link("b", "d"), link("c", "d")],
        params: DiagramParams::default(),
    }
}

/// A three-tier network topology: config servers, message nodes, clients.
///
/// Four of the message nodes are down, so every route touching them is degraded.
#[rustfmt::skip]
pub(crate) fn network_topology() -> DiagramConfig {
    use LayoutVariant::*;
    use Status::{Down, Up};

    let sources = Column::new(vec![
        device("server01", Up, "Server 01", "10.0.0.1", TwoColRight25, &[0.2, 0.4, 0.3, 0.7, 0.5, 0.8], Some("1.1")),
        device("server02", Up, "Server 02", "10.0.0.2", Single, &[0.8, 0.7, 0.6, 0.9, 0.4], Some("1.3")),
        device("server03", Up, "Server 03", "10.0.0.3", FourColTwoRow, &[0.4, 0.5, 0.4, 0.3, 0.6], Some("2.0")),
    ])
    .with_color(COLUMN_COLOR);

    let brokers = Column::new(vec![
        device("server11", Down, "Message Node 11", "10.0.1.1", TwoByTwoRight25, &[0.1, 0.4, 0.2, 0.1, 0.3], Some("5.1")),
        device("server12", Down, "Message Node 12", "10.0.1.2", TwoByTwoRight33, &[0.6, 0.7, 0.2, 0.1, 0.5], Some("5.3")),
        device("server13", Down, "Message Node 13", "10.0.1.3", Single, &[0.4, 0.3, 0.5, 0.2, 0.6], None),
        device("server14", Down, "Message Node 14", "10.0.1.4", TwoByTwoRight33, &[0.2, 0.8, 0.3, 0.4, 0.1], None),
        device("server15", Up, "Message Node 15", "10.0.1.5", TwoByTwoRight25, &[0.4, 0.5, 0.6, 0.4, 0.8], None),
        device("server16", Up, "Message Node 16", "10.0.1.6", FourColTwoRow, &[0.9, 0.7, 0.8, 0.6, 0.5], None),
    ])
    .with_color(COLUMN_COLOR);

    let clients = Column::new(vec![
        device("server21", Up, "Client 01", "10.0.2.1", Single, &[0.3, 0.4, 0.8, 0.7, 0.5], None),
        device("server22", Up, "Client 02", "10.0.2.2", FourColTwoRow, &[0.9, 0.1, 0.5, 0.6, 0.8], None),
    ])
    .with_color(COLUMN_COLOR);

    let neutral = "#4c5e74";
    let alert = "#ff5242";
    let connections = vec![
        link("server01", "server11").with_color(neutral),
        link("server01", "server12").with_color(alert),
        link("server01", "server13").with_color(alert),
        link("server01", "server14").with_color(alert),
        link("server02", "server15").with_color(alert),
        link("server11", "server21").with_color(neutral),
        link("server11", "server22").with_color(neutral),
        link("server12", "server22").with_color(alert),
        link("server13", "server22").with_color(alert),
    ];

    DiagramConfig {
        columns: vec![sources, brokers, clients],
        connections,
        params: DiagramParams::default(),
    }
}
