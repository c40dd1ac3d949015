use std::collections::VecDeque;
use std::fmt::Display;

/// 고정 기간 이동 최댓값 계산기
///
/// 단조 감소 덱(monotonic deque)을 유지하여 값 하나당 분할 상환 O(1)로 갱신합니다.
/// 기간만큼의 데이터가 쌓이기 전에는 `None`을 반환합니다.
#[derive(Debug, Clone)]
pub struct RollingMax {
    period: usize,
    /// 지금까지 입력된 값의 수
    count: usize,
    /// (입력 순번, 값) - 값은 앞에서 뒤로 단조 감소
    window: VecDeque<(usize, f64)>,
}

impl RollingMax {
    pub fn new(period: usize) -> Self {
        RollingMax {
            period,
            count: 0,
            window: VecDeque::new(),
        }
    }

    /// 새 값을 추가하고 현재 창의 최댓값을 반환합니다.
    ///
    /// # Arguments
    /// * `value` - 새 입력값
    ///
    /// # Returns
    /// * `Option<f64>` - 창이 가득 찼으면 최댓값, 아니면 `None`
    pub fn next(&mut self, value: f64) -> Option<f64> {
        if self.period == 0 {
            return None;
        }

        let seq = self.count;
        self.count += 1;

        while let Some(&(_, back)) = self.window.back() {
            if back <= value {
                self.window.pop_back();
            } else {
                break;
            }
        }
        self.window.push_back((seq, value));

        // 창 밖으로 밀려난 값 제거
        while let Some(&(front_seq, _)) = self.window.front() {
            if seq - front_seq >= self.period {
                self.window.pop_front();
            } else {
                break;
            }
        }

        if self.count < self.period {
            return None;
        }
        self.window.front().map(|&(_, max)| max)
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.window.clear();
    }
}

impl Display for RollingMax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MAX({})", self.period)
    }
}

/// 값 배열 전체에 대한 이동 최댓값
///
/// 결과 길이는 입력과 같고, 앞쪽 `period - 1`개는 `None`입니다.
pub fn rolling_max(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut indicator = RollingMax::new(period);
    values.iter().map(|&value| indicator.next(value)).collect()
}
