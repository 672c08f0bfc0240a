//! # econ_models (L2: Model Logic)
//!
//! Production functions, cost accounting and the dashboard pages built on
//! top of them.
//!
//! This crate provides:
//! - Linear, Cobb–Douglas and exponential production (`production`)
//! - Cost, revenue and profit identities (`cost`)
//! - Returns-to-scale classification (`returns`)
//! - Long-run average cost envelopes over a technique family (`long_run`)
//! - Isoquants and the production surface (`isoquant`, `surface`)
//! - Stylised cost-curve shapes and labour demand (`cost_curves`, `labor_demand`)
//! - One parameter/output pair per dashboard page (`dashboard`)
//! - Tolerances and grid resolutions (`config`)
//!
//! ## Design Principles
//!
//! - **Pure evaluation**: every page is a function of its parameters and a
//!   [`config::ModelConfig`]; nothing is cached between calls
//! - **Errors vs warnings**: invalid parameters are [`error::ModelError`],
//!   degenerate but meaningful inputs become [`error::DegenerateInput`]
//!   entries on the page output
//! - **Sampled semantics**: extrema and crossings are reported on the grid,
//!   never refined analytically

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod cost;
pub mod cost_curves;
pub mod dashboard;
pub mod error;
pub mod isoquant;
pub mod labor_demand;
pub mod long_run;
pub mod production;
pub mod returns;
pub mod surface;
