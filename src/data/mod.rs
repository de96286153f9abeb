pub mod series;

pub use series::{HistoricalSeries, Observation, ReturnRow};
