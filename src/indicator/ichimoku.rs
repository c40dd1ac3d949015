use crate::error::{IchimokuError, IchimokuResult};
use crate::indicator::cloud::{CloudPosition, CloudState, classify_cloud};
use crate::indicator::max::rolling_max;
use crate::indicator::min::rolling_min;
use crate::indicator::series::{IndicatorSeries, shift_backward, shift_forward};
use crate::model::Candle;
use crate::price_series::PriceSeries;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 일목균형표 매개변수 구조체
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct IchimokuParams {
    /// 전환선 기간 (일반적으로 9)
    pub conversion_period: usize,
    /// 기준선 기간이자 선행/후행 시프트 폭 (일반적으로 26)
    pub base_period: usize,
    /// 선행스팬 B 기간 (일반적으로 52)
    pub span_b_period: usize,
}

impl Default for IchimokuParams {
    fn default() -> Self {
        IchimokuParams {
            conversion_period: 9,
            base_period: 26,
            span_b_period: 52,
        }
    }
}

impl Display for IchimokuParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ichimoku({},{},{})",
            self.conversion_period, self.base_period, self.span_b_period
        )
    }
}

impl IchimokuParams {
    pub fn new(conversion_period: usize, base_period: usize, span_b_period: usize) -> Self {
        IchimokuParams {
            conversion_period,
            base_period,
            span_b_period,
        }
    }

    /// 매개변수 유효성 검사
    ///
    /// 모든 기간은 0보다 커야 합니다. 관례적인 순서(전환선 < 기준선 < 선행스팬 B)를
    /// 벗어나는 경우는 경고만 남깁니다.
    pub fn validate(&self) -> IchimokuResult<()> {
        let periods = [
            ("conversion_period", self.conversion_period),
            ("base_period", self.base_period),
            ("span_b_period", self.span_b_period),
        ];

        for (name, value) in periods {
            if value == 0 {
                return Err(IchimokuError::InvalidPeriod { name, value });
            }
        }

        if self.conversion_period >= self.base_period || self.base_period >= self.span_b_period {
            log::warn!(
                "일목균형표 기간이 일반적인 순서(전환선 < 기준선 < 선행스팬 B)가 아닙니다: {}",
                self
            );
        }

        Ok(())
    }
}

/// 최고가와 최저가의 중간값 시리즈 계산
///
/// # Arguments
/// * `highs` - 고가 배열
/// * `lows` - 저가 배열
/// * `period` - 계산 기간
///
/// # Returns
/// * `Vec<Option<f64>>` - 시점별 중간값 (앞쪽 `period - 1`개는 `None`)
fn donchian_midpoint(highs: &[f64], lows: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling_max(highs, period)
        .into_iter()
        .zip(rolling_min(lows, period))
        .map(|(highest, lowest)| match (highest, lowest) {
            (Some(highest), Some(lowest)) => Some((highest + lowest) / 2.0),
            _ => None,
        })
        .collect()
}

fn midpoint_of<C: Candle>(series: &PriceSeries<C>, period: usize) -> Vec<Option<f64>> {
    donchian_midpoint(&series.highs(), &series.lows(), period)
}

/// 시프트 전 선행스팬 A (전환선과 기준선의 평균)
fn unshifted_span_a<C: Candle>(series: &PriceSeries<C>, params: &IchimokuParams) -> Vec<Option<f64>> {
    let conversion = midpoint_of(series, params.conversion_period);
    let base = midpoint_of(series, params.base_period);

    conversion
        .into_iter()
        .zip(base)
        .map(|(conversion, base)| Some((conversion? + base?) / 2.0))
        .collect()
}

// 아래 `*_values` 함수들은 이미 검증된 매개변수를 전제로 합니다.

pub(crate) fn conversion_values<C: Candle>(series: &PriceSeries<C>, params: &IchimokuParams) -> IndicatorSeries {
    IndicatorSeries::aligned_to_input(midpoint_of(series, params.conversion_period))
}

pub(crate) fn baseline_values<C: Candle>(series: &PriceSeries<C>, params: &IchimokuParams) -> IndicatorSeries {
    IndicatorSeries::aligned_to_input(midpoint_of(series, params.base_period))
}

pub(crate) fn leading_span_a_values<C: Candle>(
    series: &PriceSeries<C>,
    params: &IchimokuParams,
) -> IchimokuResult<IndicatorSeries> {
    let values = shift_forward(&unshifted_span_a(series, params), params.base_period)?;
    Ok(IndicatorSeries::new(values, series.len()))
}

pub(crate) fn leading_span_b_values<C: Candle>(
    series: &PriceSeries<C>,
    params: &IchimokuParams,
) -> IchimokuResult<IndicatorSeries> {
    let unshifted = midpoint_of(series, params.span_b_period);
    let values = shift_forward(&unshifted, params.base_period)?;
    Ok(IndicatorSeries::new(values, series.len()))
}

pub(crate) fn lagging_values<C: Candle>(series: &PriceSeries<C>, params: &IchimokuParams) -> IndicatorSeries {
    let closes: Vec<Option<f64>> = series.closes().into_iter().map(Some).collect();
    IndicatorSeries::aligned_to_input(shift_backward(&closes, params.base_period))
}

/// 전환선(Tenkan-sen)
///
/// 최근 `conversion_period`개 레코드의 (최고가 + 최저가) / 2.
pub fn conversion_line<C: Candle>(
    series: &PriceSeries<C>,
    params: &IchimokuParams,
) -> IchimokuResult<IndicatorSeries> {
    params.validate()?;
    Ok(conversion_values(series, params))
}

/// 기준선(Kijun-sen)
pub fn baseline<C: Candle>(
    series: &PriceSeries<C>,
    params: &IchimokuParams,
) -> IchimokuResult<IndicatorSeries> {
    params.validate()?;
    Ok(baseline_values(series, params))
}

/// 선행스팬 A(Senkou Span A)
///
/// (전환선 + 기준선) / 2를 `base_period`만큼 미래로 시프트합니다.
/// 결과 길이는 `series.len() + base_period`이고 마지막 `base_period`개는 투영값입니다.
/// 그 길이를 할당할 수 없으면 `IchimokuError::ProjectionTooLong`을 반환합니다.
pub fn leading_span_a<C: Candle>(
    series: &PriceSeries<C>,
    params: &IchimokuParams,
) -> IchimokuResult<IndicatorSeries> {
    params.validate()?;
    leading_span_a_values(series, params)
}

/// 선행스팬 B(Senkou Span B)
///
/// `span_b_period` 중간값을 `base_period`만큼 미래로 시프트합니다.
pub fn leading_span_b<C: Candle>(
    series: &PriceSeries<C>,
    params: &IchimokuParams,
) -> IchimokuResult<IndicatorSeries> {
    params.validate()?;
    leading_span_b_values(series, params)
}

/// 후행스팬(Chikou Span)
///
/// 시점 `t`의 종가를 `t - base_period` 위치에 둡니다. 마지막 `base_period`개는 `None`.
pub fn lagging_span<C: Candle>(
    series: &PriceSeries<C>,
    params: &IchimokuParams,
) -> IchimokuResult<IndicatorSeries> {
    params.validate()?;
    Ok(lagging_values(series, params))
}

/// 한 시점의 일목균형표 구성요소
///
/// 선행스팬 값은 시프트 후 해당 시점에 놓인 값(즉, 그 날짜의 구름)입니다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ichimoku {
    /// 전환선 값 (단기 모멘텀)
    pub conversion_line: Option<f64>,
    /// 기준선 값 (중기 모멘텀)
    pub baseline: Option<f64>,
    /// 선행스팬 A 값 (첫 번째 클라우드 구성요소)
    pub leading_span_a: Option<f64>,
    /// 선행스팬 B 값 (두 번째 클라우드 구성요소)
    pub leading_span_b: Option<f64>,
    /// 후행스팬 값
    pub lagging_span: Option<f64>,
}

fn fmt_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.2}"))
}

impl Display for Ichimoku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ichimoku(T:{}, K:{}, SpA:{}, SpB:{}, C:{})",
            fmt_value(self.conversion_line),
            fmt_value(self.baseline),
            fmt_value(self.leading_span_a),
            fmt_value(self.leading_span_b),
            fmt_value(self.lagging_span)
        )
    }
}

impl Ichimoku {
    /// 클라우드의 두께 (선행스팬 A와 B 사이의 거리)
    ///
    /// 양수 값은 상승 구름, 음수 값은 하락 구름을 나타냅니다.
    pub fn cloud_thickness(&self) -> Option<f64> {
        Some(self.leading_span_a? - self.leading_span_b?)
    }

    pub fn cloud(&self) -> CloudState {
        CloudState::classify(self.leading_span_a, self.leading_span_b)
    }

    pub fn cloud_position(&self, price: f64) -> CloudPosition {
        CloudPosition::locate(Some(price), self.leading_span_a, self.leading_span_b)
    }

    /// 가격이 클라우드 위에 있는지 확인 (구름이 미정의면 false)
    pub fn is_price_above_cloud(&self, price: f64) -> bool {
        self.cloud_position(price) == CloudPosition::Above
    }

    /// 가격이 클라우드 아래에 있는지 확인
    pub fn is_price_below_cloud(&self, price: f64) -> bool {
        self.cloud_position(price) == CloudPosition::Below
    }

    /// 가격이 클라우드 내에 있는지 확인
    pub fn is_price_in_cloud(&self, price: f64) -> bool {
        self.cloud_position(price) == CloudPosition::Inside
    }

    /// 전환선이 기준선 위에 있는지 확인 (골든 크로스 후 상태)
    pub fn is_conversion_above_baseline(&self) -> bool {
        matches!(
            (self.conversion_line, self.baseline),
            (Some(conversion), Some(base)) if conversion > base
        )
    }

    /// 전환선이 기준선 아래에 있는지 확인 (데드 크로스 후 상태)
    pub fn is_conversion_below_baseline(&self) -> bool {
        matches!(
            (self.conversion_line, self.baseline),
            (Some(conversion), Some(base)) if conversion < base
        )
    }

    pub fn is_bullish_cloud(&self) -> bool {
        self.cloud() == CloudState::Bullish
    }

    pub fn is_bearish_cloud(&self) -> bool {
        self.cloud() == CloudState::Bearish
    }
}

/// 가격 시리즈 전체에 대해 계산된 다섯 개의 일목균형표 선
#[derive(Debug, Clone, PartialEq)]
pub struct IchimokuLines {
    pub params: IchimokuParams,
    pub conversion_line: IndicatorSeries,
    pub baseline: IndicatorSeries,
    pub leading_span_a: IndicatorSeries,
    pub leading_span_b: IndicatorSeries,
    pub lagging_span: IndicatorSeries,
}

impl IchimokuLines {
    /// 가격 시리즈로부터 모든 선 계산
    pub fn calculate<C: Candle>(
        series: &PriceSeries<C>,
        params: &IchimokuParams,
    ) -> IchimokuResult<IchimokuLines> {
        params.validate()?;
        Self::from_validated(series, params)
    }

    /// 검증을 마친 매개변수로 모든 선 계산 (재검증하지 않음)
    pub(crate) fn from_validated<C: Candle>(
        series: &PriceSeries<C>,
        params: &IchimokuParams,
    ) -> IchimokuResult<IchimokuLines> {
        log::debug!("일목균형표 계산 시작: {params}, 레코드 수={}", series.len());

        Ok(IchimokuLines {
            params: *params,
            conversion_line: conversion_values(series, params),
            baseline: baseline_values(series, params),
            leading_span_a: leading_span_a_values(series, params)?,
            leading_span_b: leading_span_b_values(series, params)?,
            lagging_span: lagging_values(series, params),
        })
    }

    /// 시프트 후 정렬 기준의 구름 상태 (길이 = 입력 길이 + `base_period`)
    pub fn cloud(&self) -> Vec<CloudState> {
        classify_cloud(self.leading_span_a.values(), self.leading_span_b.values())
    }

    /// 입력 시리즈 인덱스 위치의 구성요소 스냅샷
    pub fn at(&self, index: usize) -> Ichimoku {
        Ichimoku {
            conversion_line: self.conversion_line.get(index),
            baseline: self.baseline.get(index),
            leading_span_a: self.leading_span_a.get(index),
            leading_span_b: self.leading_span_b.get(index),
            lagging_span: self.lagging_span.get(index),
        }
    }
}
