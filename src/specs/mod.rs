// src/specs/mod.rs
//! # Page parsers
//!
//! Each parser here knows how to read exactly one remote document and nothing else.
//!
//! ## What lives here
//! - **Pure parsing** of fetched bodies: the EPA results page (HTML) and the
//!   beachsafe beach endpoint (JSON).
//! - **Selector rules**: which table, which row, which cell, which class.
//! - **Tolerant extraction** using `core::html` helpers; missing pieces become the
//!   `unavailable` sentinel or `None`, never a hard error.
//!
//! ## What does **not** live here
//! - **Networking**: `report` fetches and hands bodies in.
//! - **Presentation**: colours, fonts and layout live in `widget`.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → report::fetch_snapshot → HttpGet::get(page)  → specs::water_quality::parse_report
//!                                    ↘ HttpGet::get(api)   → specs::beachsafe::parse_water_temperature
//! ```
//!
//! ## Testing notes
//! - Parsers are tested **offline** against inline snippets and `tests/fixtures/`.
pub mod beachsafe;
pub mod water_quality;
