use crate::error::{IchimokuError, IchimokuResult};
use serde::Serialize;

/// 입력 날짜에 정렬된 지표 값 시리즈
///
/// 각 위치는 값 또는 `None`(미정의: 데이터 부족 또는 시프트 범위 밖)을 가집니다.
/// 앞으로 시프트된 선행스팬은 입력 길이(`base_len`)보다 길어질 수 있으며,
/// `base_len` 이후의 위치는 마지막 입력 날짜 이후로 투영된 값입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSeries {
    values: Vec<Option<f64>>,
    base_len: usize,
}

impl IndicatorSeries {
    /// 새 지표 시리즈 생성
    ///
    /// # Arguments
    /// * `values` - 지표 값
    /// * `base_len` - 원본 가격 시리즈의 길이 (`values` 길이를 넘으면 그 길이로 잘림)
    pub fn new(values: Vec<Option<f64>>, base_len: usize) -> Self {
        let base_len = base_len.min(values.len());
        IndicatorSeries { values, base_len }
    }

    /// 입력과 같은 길이의 시리즈 생성
    pub fn aligned_to_input(values: Vec<Option<f64>>) -> Self {
        let base_len = values.len();
        IndicatorSeries { values, base_len }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 원본 가격 시리즈의 길이
    pub fn base_len(&self) -> usize {
        self.base_len
    }

    /// 지정된 위치의 값 (범위 밖이거나 미정의면 `None`)
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.values.iter().copied()
    }

    /// 정의된 값의 개수
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }

    /// 처음으로 값이 정의된 위치
    pub fn first_defined_index(&self) -> Option<usize> {
        self.values.iter().position(|value| value.is_some())
    }

    /// 해당 위치가 마지막 입력 날짜 이후로 투영된 값인지 확인
    pub fn is_projected(&self, index: usize) -> bool {
        index >= self.base_len && index < self.values.len()
    }

    /// 입력 날짜에 정렬된 부분 (앞쪽 `base_len`개)
    pub fn aligned(&self) -> &[Option<f64>] {
        &self.values[..self.base_len]
    }

    /// 마지막 입력 날짜 이후로 투영된 부분
    pub fn projected(&self) -> &[Option<f64>] {
        &self.values[self.base_len..]
    }
}

/// 값 시리즈를 `shift`만큼 미래 방향으로 이동합니다.
///
/// 결과 길이는 `values.len() + shift`이며, 시점 `t`의 값은 `t + shift`에 놓입니다.
/// 앞쪽 `shift`개 위치는 `None`입니다.
///
/// # Returns
/// * `IchimokuResult<Vec<Option<f64>>>` - 결과 길이를 할당할 수 없으면 `ProjectionTooLong`
pub fn shift_forward(values: &[Option<f64>], shift: usize) -> IchimokuResult<Vec<Option<f64>>> {
    let too_long = || IchimokuError::ProjectionTooLong {
        len: values.len(),
        shift,
    };

    let total = values.len().checked_add(shift).ok_or_else(too_long)?;
    let mut shifted = Vec::new();
    shifted.try_reserve_exact(total).map_err(|_| too_long())?;
    shifted.resize(shift, None);
    shifted.extend_from_slice(values);
    Ok(shifted)
}

/// 값 시리즈를 `shift`만큼 과거 방향으로 이동합니다.
///
/// 결과 길이는 입력과 같으며, 시점 `t`의 값은 `t - shift`에 놓입니다.
/// 뒤쪽 `shift`개 위치는 `None`입니다.
pub fn shift_backward(values: &[Option<f64>], shift: usize) -> Vec<Option<f64>> {
    let mut shifted = vec![None; values.len()];
    for (t, value) in values.iter().enumerate().skip(shift) {
        shifted[t - shift] = *value;
    }
    shifted
}
