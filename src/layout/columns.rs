// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::model::{BoxId, Column, DiagramParams, Rect, Status};

/// Share of a column's inner width (after margins) occupied by its boxes.
pub const BOX_WIDTH_RATIO: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub box_margin: f64,
    pub base_box_height: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::from(&DiagramParams::default())
    }
}

impl From<&DiagramParams> for LayoutParams {
    fn from(params: &DiagramParams) -> Self {
        Self { box_margin: params.box_margin, base_box_height: params.base_box_height }
    }
}

/// Vertical placement policy for the boxes of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStrategy {
    /// First box pinned to the top row, the rest stacked against the bottom of the canvas.
    TopDownThenWrap,
    /// Boxes stacked from the top row in declared order.
    TopDown,
}

impl PlacementStrategy {
    pub fn for_column(column: usize) -> Self {
        if column == 0 {
            Self::TopDownThenWrap
        } else {
            Self::TopDown
        }
    }

    /// Top edge of the box at `row` in a column holding `rows_in_column` boxes.
    pub fn row_y(
        self,
        row: usize,
        rows_in_column: usize,
        canvas_height: f64,
        row_pitch: f64,
        box_margin: f64,
    ) -> f64 {
        match self {
            Self::TopDownThenWrap if row > 0 => {
                let rows_from_bottom = rows_in_column.saturating_sub(row) as f64;
                let bottom_row_y = canvas_height - row_pitch + box_margin;
                bottom_row_y - (rows_from_bottom - 1.0) * row_pitch
            }
            Self::TopDownThenWrap | Self::TopDown => row as f64 * row_pitch + box_margin,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBox {
    id: BoxId,
    status: Status,
    rect: Rect,
    column: usize,
    index_in_column: usize,
}

impl PlacedBox {
    pub fn id(&self) -> &BoxId {
        &self.id
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn index_in_column(&self) -> usize {
        self.index_in_column
    }
}

/// Box rectangles for one layout pass.
///
/// Boxes are listed column-major, then in declared order within each column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    boxes: Vec<PlacedBox>,
    by_id: BTreeMap<BoxId, usize>,
    canvas_width: f64,
    canvas_height: f64,
    column_width: f64,
    row_pitch: f64,
}

impl ColumnLayout {
    fn empty(canvas_width: f64, column_width: f64) -> Self {
        Self {
            boxes: Vec::new(),
            by_id: BTreeMap::new(),
            canvas_width,
            canvas_height: 0.0,
            column_width,
            row_pitch: 0.0,
        }
    }

    pub fn boxes(&self) -> &[PlacedBox] {
        &self.boxes
    }

    pub fn get(&self, id: &str) -> Option<&PlacedBox> {
        self.by_id.get(id).map(|&idx| &self.boxes[idx])
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Height of one row slot (box height plus both margins), shared by every column.
    pub fn row_pitch(&self) -> f64 {
        self.row_pitch
    }
}

/// Places every box of `columns` on a canvas `canvas_width` pixels wide.
///
/// - The canvas is as tall as the fullest column; every column shares that row pitch, so short
///   columns leave gaps rather than stretching their boxes.
/// - `x` is fixed per column; `y` follows the column's [`PlacementStrategy`].
/// - A later box with an already-seen ID takes over the ID lookup; both stay in `boxes()`.
pub fn compute_layout(columns: &[Column], canvas_width: f64, params: &LayoutParams) -> ColumnLayout {
    let column_count = columns.len();
    let column_width = if column_count == 0 { 0.0 } else { canvas_width / column_count as f64 };

    let max_rows = columns.iter().map(|column| column.boxes.len()).max().unwrap_or(0);
    if max_rows == 0 {
        tracing::trace!(columns = column_count, "layout: no boxes to place");
        return ColumnLayout::empty(canvas_width, column_width);
    }

    let margin = params.box_margin;
    let canvas_height = max_rows as f64 * (params.base_box_height + margin * 2.0);
    let row_pitch = canvas_height / max_rows as f64;
    let box_w = (column_width - margin * 2.0) * BOX_WIDTH_RATIO;
    let box_h = row_pitch - margin * 2.0;

    let mut boxes = Vec::<PlacedBox>::with_capacity(columns.iter().map(|c| c.boxes.len()).sum());
    let mut by_id = BTreeMap::<BoxId, usize>::new();

    for (column_idx, column) in columns.iter().enumerate() {
        let strategy = PlacementStrategy::for_column(column_idx);
        let x = column_width * column_idx as f64 + margin;
        let rows = column.boxes.len();

        for (row, spec) in column.boxes.iter().enumerate() {
            let y = strategy.row_y(row, rows, canvas_height, row_pitch, margin);
            if let Some(previous) = by_id.insert(spec.id().clone(), boxes.len()) {
                tracing::debug!(
                    box_id = %spec.id(),
                    previous_column = boxes[previous].column,
                    column = column_idx,
                    "layout: duplicate box id, later box wins lookup"
                );
            }
            boxes.push(PlacedBox {
                id: spec.id().clone(),
                status: spec.status(),
                rect: Rect::new(x, y, box_w, box_h),
                column: column_idx,
                index_in_column: row,
            });
        }
    }

    tracing::trace!(
        boxes = boxes.len(),
        columns = column_count,
        canvas_height,
        "layout: computed"
    );

    ColumnLayout { boxes, by_id, canvas_width, canvas_height, column_width, row_pitch }
}
