// ABOUTME: Static lookup tables used by validation and the plan generators
// ABOUTME: Allowed countries, regional food library, per-goal workout routines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! Application lookup tables: data, not logic

pub mod food_library;
pub mod regions;
pub mod workout_library;
