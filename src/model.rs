use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// 일자별 가격 레코드 인터페이스
///
/// 계산 파이프라인은 이 트레이트만 읽으며 레코드를 변경하지 않습니다.
pub trait Candle: Clone + Debug + Send + Sync {
    /// 레코드 날짜
    fn date(&self) -> NaiveDate;
    /// 고가
    fn high_price(&self) -> f64;
    /// 저가
    fn low_price(&self) -> f64;
    /// 종가
    fn close_price(&self) -> f64;
}

/// 단일 종목의 일봉 가격 데이터
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PriceBar {
    /// 새 가격 데이터 생성
    pub fn new(date: NaiveDate, high: f64, low: f64, close: f64) -> Self {
        PriceBar {
            date,
            high,
            low,
            close,
        }
    }
}

impl Display for PriceBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PriceBar({}: H:{:.2}, L:{:.2}, C:{:.2})",
            self.date, self.high, self.low, self.close
        )
    }
}

impl Candle for PriceBar {
    fn date(&self) -> NaiveDate {
        self.date
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

/// 트레이딩 신호를 나타내는 열거형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    /// 매수 신호
    Enter,
    /// 매도 신호
    Exit,
    /// 홀딩 (포지션 유지) 신호
    Hold,
}

impl Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Enter => write!(f, "enter"),
            Signal::Exit => write!(f, "exit"),
            Signal::Hold => write!(f, "hold"),
        }
    }
}
