pub mod grade;
pub mod metric;
pub mod polar;
pub mod record;
pub mod scale;
pub mod stats;
pub mod types;

pub use grade::Grade;
pub use metric::{Metric, MetricView};
pub use polar::{GRID_LEVELS, PolarGrid, PolarPoint};
pub use record::{FilterCriteria, RecordSet, StudentRecord};
pub use scale::{RadiusScale, SCORE_DOMAIN_MAX, ScoreScale};
pub use stats::{AggregateStats, MetricSummary, TopRecord};
pub use types::{PlotArea, ViewBox, Viewport};
