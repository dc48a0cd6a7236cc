// Copyright (C) 2026 The Fivedraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Fivedraw Poker game types shared by the game binaries.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod game;
pub mod poker;
