// 전략 모듈에 대한 테스트 파일

pub mod common;
