use chrono::NaiveDate;
use thiserror::Error;

/// 일목균형표 계산 오류
///
/// 데이터 부족(Insufficient history)은 오류가 아니며 결과 시리즈에 `None`으로 표시됩니다.
/// 이 열거형은 호출자에게 즉시 보고되어야 하는 입력/설정 위반만 표현합니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IchimokuError {
    /// 같은 날짜의 레코드가 두 개 이상 존재
    #[error("중복된 날짜가 있습니다: {date}")]
    DuplicateDate { date: NaiveDate },

    /// 날짜가 엄격한 오름차순이 아님
    #[error("날짜가 오름차순이 아닙니다: 인덱스 {index}의 {date}는 이전 날짜 {previous} 이후여야 합니다")]
    NonIncreasingDate {
        index: usize,
        previous: NaiveDate,
        date: NaiveDate,
    },

    /// NaN 또는 무한대 가격
    #[error("유효하지 않은 가격입니다: 인덱스 {index} ({date}), {field} = {value}")]
    NonFinitePrice {
        index: usize,
        date: NaiveDate,
        field: &'static str,
        value: f64,
    },

    /// 0 이하의 기간 설정
    #[error("{name} 기간은 0보다 커야 합니다 (입력값: {value})")]
    InvalidPeriod { name: &'static str, value: usize },

    /// 선행스팬을 시프트한 결과 길이를 메모리에 담을 수 없음
    #[error("투영 길이를 표현할 수 없습니다: 입력 길이 {len} + 시프트 {shift}")]
    ProjectionTooLong { len: usize, shift: usize },
}

/// 일목균형표 계산 결과
pub type IchimokuResult<T> = Result<T, IchimokuError>;
