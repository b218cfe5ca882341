// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Switchyard: column layout and elbow routing for status topology diagrams.
//!
//! Boxes sit in fixed columns; connectors between them are orthogonal polylines whose lanes fan
//! out when several connectors share an endpoint. Everything here is pure computation: load a
//! [`model::DiagramConfig`], run [`layout::compute_layout`] and [`layout::compute_routes`] (or
//! [`scene::DiagramScene::compute`] for both), and hand the geometry to a renderer.

pub mod config;
pub mod layout;
pub mod model;
pub mod scene;
