use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;

/// 구름(선행스팬 A/B 사이 영역)의 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudState {
    /// 선행스팬 A > 선행스팬 B (상승 구름)
    Bullish,
    /// 선행스팬 A < 선행스팬 B (하락 구름)
    Bearish,
    /// 선행스팬 A == 선행스팬 B
    Flat,
    /// 둘 중 하나 이상이 미정의
    Undefined,
}

impl CloudState {
    /// 한 시점의 선행스팬 A/B 값으로 구름 상태를 판정합니다.
    ///
    /// # Arguments
    /// * `span_a` - 선행스팬 A 값
    /// * `span_b` - 선행스팬 B 값
    ///
    /// # Returns
    /// * `CloudState` - 판정된 구름 상태
    pub fn classify(span_a: Option<f64>, span_b: Option<f64>) -> CloudState {
        match (span_a, span_b) {
            (Some(a), Some(b)) => match a.partial_cmp(&b) {
                Some(Ordering::Greater) => CloudState::Bullish,
                Some(Ordering::Less) => CloudState::Bearish,
                Some(Ordering::Equal) => CloudState::Flat,
                None => CloudState::Undefined,
            },
            _ => CloudState::Undefined,
        }
    }

    /// 선행스팬 A와 B를 바꿨을 때의 상태
    pub fn flipped(self) -> CloudState {
        match self {
            CloudState::Bullish => CloudState::Bearish,
            CloudState::Bearish => CloudState::Bullish,
            other => other,
        }
    }

    pub fn is_defined(self) -> bool {
        self != CloudState::Undefined
    }
}

impl Display for CloudState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CloudState::Bullish => write!(f, "bullish"),
            CloudState::Bearish => write!(f, "bearish"),
            CloudState::Flat => write!(f, "flat"),
            CloudState::Undefined => write!(f, "undefined"),
        }
    }
}

/// 구름 대비 가격의 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudPosition {
    /// 구름 위
    Above,
    /// 구름 아래
    Below,
    /// 구름 안 (경계 포함)
    Inside,
    /// 가격 또는 구름이 미정의
    Undefined,
}

impl CloudPosition {
    /// 같은 시점의 가격과 선행스팬 A/B를 비교합니다.
    pub fn locate(price: Option<f64>, span_a: Option<f64>, span_b: Option<f64>) -> CloudPosition {
        let (Some(price), Some(a), Some(b)) = (price, span_a, span_b) else {
            return CloudPosition::Undefined;
        };

        if price > a && price > b {
            CloudPosition::Above
        } else if price < a && price < b {
            CloudPosition::Below
        } else {
            CloudPosition::Inside
        }
    }
}

/// 두 선행스팬 시리즈를 위치별로 비교하여 구름 상태 시리즈를 만듭니다.
///
/// 두 시리즈는 같은 정렬(시프트 후)을 공유해야 합니다.
/// 결과 길이는 더 긴 쪽을 따르며, 한쪽에만 있는 위치는 `Undefined`입니다.
pub fn classify_cloud(span_a: &[Option<f64>], span_b: &[Option<f64>]) -> Vec<CloudState> {
    let len = span_a.len().max(span_b.len());
    (0..len)
        .map(|i| {
            let a = span_a.get(i).copied().flatten();
            let b = span_b.get(i).copied().flatten();
            CloudState::classify(a, b)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(CloudState::classify(Some(2.0), Some(1.0)), CloudState::Bullish);
        assert_eq!(CloudState::classify(Some(1.0), Some(2.0)), CloudState::Bearish);
        assert_eq!(CloudState::classify(Some(1.5), Some(1.5)), CloudState::Flat);
        assert_eq!(CloudState::classify(None, Some(1.5)), CloudState::Undefined);
        assert_eq!(CloudState::classify(Some(1.5), None), CloudState::Undefined);
        assert_eq!(CloudState::classify(None, None), CloudState::Undefined);
    }

    #[test]
    fn test_classify_is_antisymmetric() {
        let samples = [
            (Some(3.0), Some(1.0)),
            (Some(1.0), Some(3.0)),
            (Some(2.0), Some(2.0)),
            (None, Some(2.0)),
            (Some(2.0), None),
        ];

        for (a, b) in samples {
            assert_eq!(
                CloudState::classify(b, a),
                CloudState::classify(a, b).flipped()
            );
        }
    }

    #[test]
    fn test_classify_cloud_uneven_lengths() {
        let a = vec![None, Some(2.0), Some(1.0)];
        let b = vec![Some(1.0), Some(1.0)];

        assert_eq!(
            classify_cloud(&a, &b),
            vec![CloudState::Undefined, CloudState::Bullish, CloudState::Undefined]
        );
    }

    #[test]
    fn test_cloud_position() {
        assert_eq!(
            CloudPosition::locate(Some(120.0), Some(110.0), Some(90.0)),
            CloudPosition::Above
        );
        assert_eq!(
            CloudPosition::locate(Some(80.0), Some(110.0), Some(90.0)),
            CloudPosition::Below
        );
        assert_eq!(
            CloudPosition::locate(Some(100.0), Some(110.0), Some(90.0)),
            CloudPosition::Inside
        );
        // 경계값은 구름 안으로 봄
        assert_eq!(
            CloudPosition::locate(Some(110.0), Some(110.0), Some(90.0)),
            CloudPosition::Inside
        );
        assert_eq!(
            CloudPosition::locate(Some(100.0), None, Some(90.0)),
            CloudPosition::Undefined
        );
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&CloudState::Bullish).unwrap(),
            "\"bullish\""
        );
        let position: CloudPosition = serde_json::from_str("\"inside\"").unwrap();
        assert_eq!(position, CloudPosition::Inside);
    }
}
