// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram model: identifiers, box status, canvas geometry and the diagram configuration that
//! the layout and routing engines consume.

pub mod diagram;
pub(crate) mod fixtures;
pub mod geometry;
pub mod ids;
pub mod status;

pub use diagram::{
    columns_from_devices, BoxMeta, BoxSpec, Column, Connection, Device, DiagramConfig,
    DiagramParams, LayoutVariant, StatusEntry, StatusInfo,
    DEFAULT_BASE_BOX_HEIGHT, DEFAULT_BOX_MARGIN, DEFAULT_LINE_SPACING,
};
pub use geometry::{Point, Rect};
pub use ids::{BoxId, Id, IdError};
pub use status::{ParseStatusError, Status};
