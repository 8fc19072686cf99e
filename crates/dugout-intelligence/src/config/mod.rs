// ABOUTME: Configuration module for the dugout-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dugout Swing Analytics

/// Intelligence engine configuration (metrics, grading, trends, tips)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
