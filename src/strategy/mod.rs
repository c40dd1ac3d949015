pub mod ichimoku_strategy;

#[cfg(test)]
mod tests;

use crate::error::IchimokuResult;
use crate::model::{Candle, Signal};
use crate::price_series::PriceSeries;
use std::fmt::Display;

pub use ichimoku_strategy::{
    IchimokuConfig, IchimokuFrame, IchimokuRow, IchimokuStrategy, ProjectedCloud,
};

/// 거래 전략 인터페이스
///
/// 전략은 가격 시리즈를 읽기만 하며, 날짜마다 하나의 신호를 만듭니다.
pub trait Strategy<C: Candle>: Display + Send + Sync {
    /// 시리즈의 각 날짜에 대한 신호 계산
    ///
    /// # Arguments
    /// * `series` - 검증된 가격 시리즈
    ///
    /// # Returns
    /// * `IchimokuResult<Vec<Signal>>` - 입력과 같은 길이의 신호 목록
    fn signals(&self, series: &PriceSeries<C>) -> IchimokuResult<Vec<Signal>>;

    /// 가장 최근 날짜의 신호
    ///
    /// 시리즈가 비어 있으면 `Signal::Hold`를 반환합니다.
    fn latest_signal(&self, series: &PriceSeries<C>) -> IchimokuResult<Signal> {
        Ok(self
            .signals(series)?
            .last()
            .copied()
            .unwrap_or(Signal::Hold))
    }
}
