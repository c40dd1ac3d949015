use crate::model::PriceBar;
use crate::price_series::PriceSeries;
use chrono::{Days, NaiveDate};

/// 테스트 시리즈의 시작 날짜
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
}

/// 상승 트렌드 가격 시퀀스 생성 함수
///
/// 종가는 `base_price + i * step`, 고가/저가는 종가 ± step 입니다.
pub fn create_uptrend_bars(count: usize, base_price: f64, step: f64) -> Vec<PriceBar> {
    (0..count)
        .map(|i| {
            let price = base_price + i as f64 * step;
            PriceBar::new(start_date() + Days::new(i as u64), price + step, price - step, price)
        })
        .collect()
}

/// 하락 트렌드 가격 시퀀스 생성 함수
pub fn create_downtrend_bars(count: usize, base_price: f64, step: f64) -> Vec<PriceBar> {
    (0..count)
        .map(|i| {
            let price = base_price - i as f64 * step;
            PriceBar::new(start_date() + Days::new(i as u64), price + step, price - step, price)
        })
        .collect()
}

/// 고가/저가/종가가 모두 같은 가격 시퀀스 생성 함수
pub fn create_flat_bars(count: usize, price: f64) -> Vec<PriceBar> {
    (0..count)
        .map(|i| PriceBar::new(start_date() + Days::new(i as u64), price, price, price))
        .collect()
}

pub fn create_series(bars: Vec<PriceBar>) -> PriceSeries<PriceBar> {
    PriceSeries::new(bars).unwrap()
}
