use super::Strategy;
use crate::config_loader::{ConfigError, ConfigFormat, ConfigLoader, ConfigResult, ConfigValidation};
use crate::error::IchimokuResult;
use crate::indicator::cloud::{CloudPosition, CloudState, classify_cloud};
use crate::indicator::ichimoku::{self, Ichimoku, IchimokuLines, IchimokuParams};
use crate::indicator::series::IndicatorSeries;
use crate::model::{Candle, Signal};
use crate::price_series::PriceSeries;
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::Path;

/// 일목균형표 전략 설정 파일 구조
///
/// ```toml
/// [ichimoku]
/// conversion_period = 9
/// base_period = 26
/// span_b_period = 52
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IchimokuConfig {
    pub ichimoku: IchimokuParams,
}

impl ConfigValidation for IchimokuConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.ichimoku.validate().map_err(ConfigError::from)
    }
}

/// 입력 날짜 하나에 대한 계산 결과 (원본 가격 + 지표 컬럼)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IchimokuRow {
    pub date: NaiveDate,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub conversion_line: Option<f64>,
    pub baseline: Option<f64>,
    #[serde(rename = "leading_span_A")]
    pub leading_span_a: Option<f64>,
    #[serde(rename = "leading_span_B")]
    pub leading_span_b: Option<f64>,
    pub lagging_span: Option<f64>,
    pub cloud: CloudState,
    pub cloud_position: CloudPosition,
    pub signal: Signal,
}

/// 마지막 입력 날짜 이후로 투영된 구름
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedCloud {
    /// 마지막 입력 날짜로부터 몇 기간 뒤인지 (1부터 시작)
    pub periods_ahead: usize,
    #[serde(rename = "leading_span_A")]
    pub leading_span_a: Option<f64>,
    #[serde(rename = "leading_span_B")]
    pub leading_span_b: Option<f64>,
    pub cloud: CloudState,
}

/// 지표 컬럼이 추가된 가격 시리즈 사본
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IchimokuFrame {
    pub params: IchimokuParams,
    pub rows: Vec<IchimokuRow>,
    pub projection: Vec<ProjectedCloud>,
}

impl IchimokuFrame {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&IchimokuRow> {
        self.rows.get(index)
    }

    pub fn last(&self) -> Option<&IchimokuRow> {
        self.rows.last()
    }

    pub fn signals(&self) -> Vec<Signal> {
        self.rows.iter().map(|row| row.signal).collect()
    }

    /// 하위 소비자(리포트, 백테스트)용 JSON 직렬화
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// 한 날짜의 지표 상태에서 매매 신호 결정
///
/// 가격이 구름 위, 상승 구름, 전환선 > 기준선이면 진입.
/// 그 반대 배열이면 청산. 나머지(미정의 포함)는 유지.
fn decide_signal(ichimoku: &Ichimoku, close: f64) -> Signal {
    if ichimoku.is_price_above_cloud(close)
        && ichimoku.is_bullish_cloud()
        && ichimoku.is_conversion_above_baseline()
    {
        Signal::Enter
    } else if ichimoku.is_price_below_cloud(close)
        && ichimoku.is_bearish_cloud()
        && ichimoku.is_conversion_below_baseline()
    {
        Signal::Exit
    } else {
        Signal::Hold
    }
}

/// 일목균형표 전략
///
/// 다섯 개의 선과 구름 상태를 계산하여 날짜별 결과로 묶습니다.
/// 입력 시리즈는 변경하지 않으며 매 호출마다 새 결과를 만듭니다.
/// 매개변수는 생성 시 한 번만 검증합니다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IchimokuStrategy {
    params: IchimokuParams,
}

impl Default for IchimokuStrategy {
    fn default() -> Self {
        IchimokuStrategy {
            params: IchimokuParams::default(),
        }
    }
}

impl Display for IchimokuStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IchimokuStrategy({})", self.params)
    }
}

impl IchimokuStrategy {
    /// 새 전략 생성
    ///
    /// # Arguments
    /// * `params` - 일목균형표 매개변수
    ///
    /// # Returns
    /// * `IchimokuResult<IchimokuStrategy>` - 매개변수가 유효하지 않으면 오류
    pub fn new(params: IchimokuParams) -> IchimokuResult<IchimokuStrategy> {
        params.validate()?;
        Ok(IchimokuStrategy { params })
    }

    pub fn from_config(config: &IchimokuConfig) -> IchimokuResult<IchimokuStrategy> {
        Self::new(config.ichimoku)
    }

    /// 설정 파일(JSON/TOML)에서 전략 생성
    pub fn from_config_file(path: &Path) -> ConfigResult<IchimokuStrategy> {
        let config: IchimokuConfig = ConfigLoader::load_from_file(path, ConfigFormat::Auto)?;
        info!("일목균형표 전략 설정 로드: {}", config.ichimoku);
        Ok(Self::from_config(&config)?)
    }

    pub fn params(&self) -> &IchimokuParams {
        &self.params
    }

    pub fn calculate_conversion_line<C: Candle>(
        &self,
        series: &PriceSeries<C>,
    ) -> IchimokuResult<IndicatorSeries> {
        Ok(ichimoku::conversion_values(series, &self.params))
    }

    pub fn calculate_baseline<C: Candle>(
        &self,
        series: &PriceSeries<C>,
    ) -> IchimokuResult<IndicatorSeries> {
        Ok(ichimoku::baseline_values(series, &self.params))
    }

    /// 선행스팬 A (길이 = 입력 길이 + `base_period`)
    pub fn calculate_leading_span_a<C: Candle>(
        &self,
        series: &PriceSeries<C>,
    ) -> IchimokuResult<IndicatorSeries> {
        ichimoku::leading_span_a_values(series, &self.params)
    }

    /// 선행스팬 B (길이 = 입력 길이 + `base_period`)
    pub fn calculate_leading_span_b<C: Candle>(
        &self,
        series: &PriceSeries<C>,
    ) -> IchimokuResult<IndicatorSeries> {
        ichimoku::leading_span_b_values(series, &self.params)
    }

    pub fn calculate_lagging_span<C: Candle>(
        &self,
        series: &PriceSeries<C>,
    ) -> IchimokuResult<IndicatorSeries> {
        Ok(ichimoku::lagging_values(series, &self.params))
    }

    /// 구름 상태 (선행스팬과 같은 정렬, 길이 = 입력 길이 + `base_period`)
    pub fn calculate_cloud<C: Candle>(
        &self,
        series: &PriceSeries<C>,
    ) -> IchimokuResult<Vec<CloudState>> {
        let span_a = self.calculate_leading_span_a(series)?;
        let span_b = self.calculate_leading_span_b(series)?;
        Ok(classify_cloud(span_a.values(), span_b.values()))
    }

    /// 모든 지표를 계산하여 날짜별 결과와 투영 구름으로 묶습니다.
    pub fn calculate<C: Candle>(&self, series: &PriceSeries<C>) -> IchimokuResult<IchimokuFrame> {
        let lines = IchimokuLines::from_validated(series, &self.params)?;
        let cloud = lines.cloud();

        let rows: Vec<IchimokuRow> = series
            .items()
            .iter()
            .enumerate()
            .map(|(index, candle)| {
                let snapshot = lines.at(index);
                let close = candle.close_price();
                IchimokuRow {
                    date: candle.date(),
                    high: candle.high_price(),
                    low: candle.low_price(),
                    close,
                    conversion_line: snapshot.conversion_line,
                    baseline: snapshot.baseline,
                    leading_span_a: snapshot.leading_span_a,
                    leading_span_b: snapshot.leading_span_b,
                    lagging_span: snapshot.lagging_span,
                    cloud: cloud[index],
                    cloud_position: snapshot.cloud_position(close),
                    signal: decide_signal(&snapshot, close),
                }
            })
            .collect();

        let base_len = series.len();
        let projection: Vec<ProjectedCloud> = (base_len..lines.leading_span_a.len())
            .map(|index| ProjectedCloud {
                periods_ahead: index + 1 - base_len,
                leading_span_a: lines.leading_span_a.get(index),
                leading_span_b: lines.leading_span_b.get(index),
                cloud: cloud[index],
            })
            .collect();

        debug!(
            "일목균형표 계산 완료: {}, 행 수={}, 투영 수={}",
            self.params,
            rows.len(),
            projection.len()
        );

        Ok(IchimokuFrame {
            params: self.params,
            rows,
            projection,
        })
    }

    /// 정렬/검증 전의 레코드로부터 바로 계산합니다.
    ///
    /// 입력이 잘못되었으면 어떤 지표도 계산하지 않고 오류를 반환합니다.
    pub fn calculate_bars<C: Candle>(&self, bars: Vec<C>) -> IchimokuResult<IchimokuFrame> {
        let series = PriceSeries::new(bars)?;
        self.calculate(&series)
    }
}

impl<C: Candle> Strategy<C> for IchimokuStrategy {
    fn signals(&self, series: &PriceSeries<C>) -> IchimokuResult<Vec<Signal>> {
        Ok(self.calculate(series)?.signals())
    }
}
