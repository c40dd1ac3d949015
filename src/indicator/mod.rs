// 일목균형표 계산에 필요한 기술적 지표 모듈
// 이동 최댓값/최솟값, 시프트 가능한 지표 시리즈, 구름 판정을 제공합니다.

pub mod cloud;
pub mod ichimoku;
pub mod max;
pub mod min;
pub mod series;

pub use cloud::{CloudPosition, CloudState, classify_cloud};
pub use ichimoku::{Ichimoku, IchimokuLines, IchimokuParams};
pub use series::IndicatorSeries;
