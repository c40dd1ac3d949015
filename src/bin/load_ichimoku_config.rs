use ichimoku_strategy::strategy::IchimokuStrategy;
use log::{debug, error, info, warn};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// 기본 설정 파일 경로
const DEFAULT_CONFIG_PATH: &str = "config/ichimoku.toml";

fn main() -> ExitCode {
    // 로그 초기화
    env_logger::init();

    info!("일목균형표 설정 로더 시작");

    let args: Vec<String> = env::args().collect();
    debug!("커맨드 라인 인수: {:?}", args);

    let config_path = match args.get(1) {
        Some(path) => {
            debug!("사용자 지정 설정 파일 사용: {}", path);
            PathBuf::from(path)
        }
        None => {
            debug!("기본 설정 파일 경로 사용: {}", DEFAULT_CONFIG_PATH);
            PathBuf::from(DEFAULT_CONFIG_PATH)
        }
    };

    if !config_path.exists() {
        warn!("설정 파일이 존재하지 않습니다: {}", config_path.display());
        println!("사용법: {} [설정_파일_경로(.toml|.json)]", args[0]);
        println!("기본 설정 사용 시: {}", IchimokuStrategy::default());
        return ExitCode::FAILURE;
    }

    match IchimokuStrategy::from_config_file(&config_path) {
        Ok(strategy) => {
            info!("전략 로드 성공: {}", strategy);
            println!("설정 파일: {}", config_path.display());
            println!("전략 로드 성공: {}", strategy);
            let params = strategy.params();
            println!("  전환선 기간: {}", params.conversion_period);
            println!("  기준선 기간 (시프트 폭): {}", params.base_period);
            println!("  선행스팬 B 기간: {}", params.span_b_period);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("전략 로드 실패: {}", err);
            println!("전략 로드 실패: {}", err);
            ExitCode::FAILURE
        }
    }
}
