// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic benchmark diagrams (no RNG).

use switchyard::model::{BoxId, BoxSpec, Column, Connection, DiagramConfig, DiagramParams, Status};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Dashboard,
    WideFanOut,
    ManyColumns,
}

impl Case {
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::WideFanOut, Self::ManyColumns];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::WideFanOut => "wide_fan_out",
            Self::ManyColumns => "many_columns",
        }
    }

    /// `(boxes per column, connections per box)`.
    const fn shape(self) -> (&'static [usize], usize) {
        match self {
            Self::Dashboard => (&[3, 6, 2], 2),
            Self::WideFanOut => (&[4, 64, 16], 16),
            Self::ManyColumns => (&[12, 24, 24, 24, 24, 24, 12], 3),
        }
    }
}

fn box_id(column: usize, row: usize) -> BoxId {
    BoxId::new(format!("c{column:02}_b{row:04}")).expect("valid box id")
}

pub fn fixture(case: Case) -> DiagramConfig {
    let (sizes, fan_out) = case.shape();

    let columns = sizes
        .iter()
        .enumerate()
        .map(|(column, &rows)| {
            Column::new(
                (0..rows)
                    .map(|row| {
                        // Every seventh box is down so some routes are degraded.
                        let status = if (column * 31 + row) % 7 == 0 { Status::Down } else { Status::Up };
                        BoxSpec::new(box_id(column, row), status)
                    })
                    .collect(),
            )
        })
        .collect::<Vec<_>>();

    let mut connections = Vec::new();
    for (column, pair) in sizes.windows(2).enumerate() {
        let (rows, next_rows) = (pair[0], pair[1]);
        for row in 0..rows {
            for k in 0..fan_out {
                let target = (row * fan_out + k) % next_rows;
                connections.push(Connection::new(box_id(column, row), box_id(column + 1, target)));
            }
        }
    }

    DiagramConfig { columns, connections, params: DiagramParams::default() }
}
