use crate::error::{IchimokuError, IchimokuResult};
use crate::model::Candle;
use chrono::NaiveDate;

/// 단일 종목의 일자별 가격 시리즈
///
/// 데이터는 날짜 기준 오름차순으로 저장됩니다 (가장 오래된 데이터가 먼저 옴).
/// 생성 시점에 중복 날짜와 유한하지 않은 가격을 검사하므로,
/// 만들어진 `PriceSeries`는 항상 계산에 사용할 수 있는 상태입니다.
#[derive(Debug, Clone)]
pub struct PriceSeries<C: Candle> {
    items: Vec<C>,
}

/// 가격 필드가 모두 유한한 값인지 확인합니다.
///
/// # Arguments
/// * `index` - 레코드 인덱스
/// * `candle` - 확인할 레코드
fn check_finite<C: Candle>(index: usize, candle: &C) -> IchimokuResult<()> {
    let fields = [
        ("high", candle.high_price()),
        ("low", candle.low_price()),
        ("close", candle.close_price()),
    ];

    for (field, value) in fields {
        if !value.is_finite() {
            return Err(IchimokuError::NonFinitePrice {
                index,
                date: candle.date(),
                field,
                value,
            });
        }
    }

    Ok(())
}

impl<C> PriceSeries<C>
where
    C: Candle,
{
    /// 새로운 PriceSeries 인스턴스를 생성합니다.
    ///
    /// 입력은 날짜 기준으로 오름차순 정렬된 뒤 검증됩니다.
    ///
    /// # Arguments
    /// * `items` - 가격 레코드 목록 (순서 무관)
    ///
    /// # Returns
    /// * `IchimokuResult<PriceSeries<C>>` - 검증된 시리즈 또는 입력 오류
    pub fn new(mut items: Vec<C>) -> IchimokuResult<PriceSeries<C>> {
        items.sort_by_key(|item| item.date());

        for pair in items.windows(2) {
            if pair[0].date() == pair[1].date() {
                log::warn!("중복 날짜 발견: {}", pair[1].date());
                return Err(IchimokuError::DuplicateDate {
                    date: pair[1].date(),
                });
            }
        }

        Self::validate_prices(&items)?;
        log::trace!("가격 시리즈 생성: {}개 레코드", items.len());
        Ok(PriceSeries { items })
    }

    /// 이미 정렬된 레코드로 PriceSeries를 생성합니다.
    ///
    /// 정렬하지 않고, 날짜가 엄격한 오름차순이 아니면 오류를 반환합니다.
    ///
    /// # Arguments
    /// * `items` - 날짜 오름차순으로 정렬된 가격 레코드 목록
    pub fn from_ordered(items: Vec<C>) -> IchimokuResult<PriceSeries<C>> {
        for (offset, pair) in items.windows(2).enumerate() {
            let previous = pair[0].date();
            let date = pair[1].date();
            if date == previous {
                log::warn!("중복 날짜 발견: {date}");
                return Err(IchimokuError::DuplicateDate { date });
            }
            if date < previous {
                log::warn!("날짜 역전 발견: {previous} -> {date}");
                return Err(IchimokuError::NonIncreasingDate {
                    index: offset + 1,
                    previous,
                    date,
                });
            }
        }

        Self::validate_prices(&items)?;
        Ok(PriceSeries { items })
    }

    fn validate_prices(items: &[C]) -> IchimokuResult<()> {
        for (index, item) in items.iter().enumerate() {
            if let Err(e) = check_finite(index, item) {
                log::warn!("가격 검증 실패: {e}");
                return Err(e);
            }
        }
        Ok(())
    }

    /// 시리즈의 레코드 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 시리즈가 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 가장 오래된 레코드를 반환합니다.
    pub fn first(&self) -> Option<&C> {
        self.items.first()
    }

    /// 가장 최근 레코드를 반환합니다.
    pub fn last(&self) -> Option<&C> {
        self.items.last()
    }

    /// 지정된 인덱스의 레코드를 반환합니다.
    ///
    /// # Arguments
    /// * `index` - 가져올 레코드의 인덱스 (0이 가장 오래된 데이터)
    pub fn get(&self, index: usize) -> Option<&C> {
        self.items.get(index)
    }

    /// 모든 레코드에 대한 참조 슬라이스를 반환합니다.
    pub fn items(&self) -> &[C] {
        &self.items
    }

    /// 레코드를 소유권과 함께 반환합니다.
    pub fn into_items(self) -> Vec<C> {
        self.items
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.items.iter().map(|item| item.date()).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.items.iter().map(|item| item.high_price()).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.items.iter().map(|item| item.low_price()).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.items.iter().map(|item| item.close_price()).collect()
    }
}
