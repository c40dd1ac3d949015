#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use ichimoku_strategy::model::Candle;

/// 외부 타입도 `Candle`만 구현하면 계산에 쓸 수 있는지 확인하기 위한 테스트 캔들
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestCandle {
    /// 기준일로부터의 일 수
    pub day: u64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl std::fmt::Display for TestCandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TestCandle(d={}, h={}, l={}, c={})",
            self.day, self.high, self.low, self.close
        )
    }
}

pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default()
}

impl Candle for TestCandle {
    fn date(&self) -> NaiveDate {
        base_date() + Days::new(self.day)
    }
    fn high_price(&self) -> f64 {
        self.high
    }
    fn low_price(&self) -> f64 {
        self.low
    }
    fn close_price(&self) -> f64 {
        self.close
    }
}

impl TestCandle {
    pub fn new(day: u64, high: f64, low: f64, close: f64) -> Self {
        TestCandle {
            day,
            high,
            low,
            close,
        }
    }
}

/// 종가가 1부터 1씩 증가하고 고가/저가가 종가 ± 1인 시퀀스
pub fn create_ramp_candles(count: usize) -> Vec<TestCandle> {
    (0..count)
        .map(|i| {
            let close = (i + 1) as f64;
            TestCandle::new(i as u64, close + 1.0, close - 1.0, close)
        })
        .collect()
}

/// 고가/저가/종가가 모두 같은 시퀀스
pub fn create_constant_candles(count: usize, price: f64) -> Vec<TestCandle> {
    (0..count)
        .map(|i| TestCandle::new(i as u64, price, price, price))
        .collect()
}

/// 진폭이 있는 횡보 시퀀스 (결정적)
pub fn create_wave_candles(count: usize, base_price: f64, amplitude: f64) -> Vec<TestCandle> {
    (0..count)
        .map(|i| {
            let close = base_price + amplitude * ((i as f64) * 0.37).sin();
            let spread = 0.5 + ((i * 7) % 5) as f64 * 0.25;
            TestCandle::new(i as u64, close + spread, close - spread, close)
        })
        .collect()
}

/// 윈도우 구간의 (최고가 + 최저가) / 2를 단순 계산
pub fn naive_midpoint(candles: &[TestCandle], end: usize, period: usize) -> f64 {
    let window = &candles[end + 1 - period..=end];
    let highest = window.iter().fold(f64::MIN, |a, c| a.max(c.high));
    let lowest = window.iter().fold(f64::MAX, |a, c| a.min(c.low));
    (highest + lowest) / 2.0
}
