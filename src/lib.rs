pub mod error;
pub mod indicator;
pub mod model;
pub mod price_series;
pub mod strategy;

/// 설정 로더
pub mod config_loader;

#[cfg(test)]
mod test_log;

pub use error::{IchimokuError, IchimokuResult};
pub use indicator::{CloudPosition, CloudState, IchimokuParams, IndicatorSeries};
pub use model::{Candle, PriceBar, Signal};
pub use price_series::PriceSeries;
pub use strategy::{IchimokuFrame, IchimokuStrategy, Strategy};
