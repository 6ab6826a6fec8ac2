//! gradechart: a deterministic charting engine for student-assessment data.
//!
//! The crate keeps a strict split between the pure projection/statistics
//! core, backend-agnostic render frames, interaction state, and the three
//! view controllers (bubble, radar, rose) that orchestrate them.

pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;
pub mod views;

pub use error::{ChartError, ChartResult};
pub use views::{BubbleChartView, RadarChartView, RoseChartView};
