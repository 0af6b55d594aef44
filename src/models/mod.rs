// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: timeline regions and player state.

pub mod player;
pub mod region;
