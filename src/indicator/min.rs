use std::collections::VecDeque;
use std::fmt::Display;

/// 고정 기간 이동 최솟값 계산기
///
/// `RollingMax`와 같은 방식으로 단조 증가 덱을 유지합니다.
#[derive(Debug, Clone)]
pub struct RollingMin {
    period: usize,
    count: usize,
    window: VecDeque<(usize, f64)>,
}

impl RollingMin {
    pub fn new(period: usize) -> Self {
        RollingMin {
            period,
            count: 0,
            window: VecDeque::new(),
        }
    }

    /// 새 값을 추가하고 현재 창의 최솟값을 반환합니다.
    ///
    /// # Returns
    /// * `Option<f64>` - 창이 가득 찼으면 최솟값, 아니면 `None`
    pub fn next(&mut self, value: f64) -> Option<f64> {
        if self.period == 0 {
            return None;
        }

        let seq = self.count;
        self.count += 1;

        while let Some(&(_, back)) = self.window.back() {
            if back >= value {
                self.window.pop_back();
            } else {
                break;
            }
        }
        self.window.push_back((seq, value));

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
        self.window.front().map(|&(_, min)| min)
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.window.clear();
    }
}

impl Display for RollingMin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MIN({})", self.period)
    }
}

/// 값 배열 전체에 대한 이동 최솟값
pub fn rolling_min(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut indicator = RollingMin::new(period);
    values.iter().map(|&value| indicator.next(value)).collect()
}
