use crate::error::IchimokuError;
use log::{debug, error, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// 설정 로드 오류
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 파일 오류
    #[error("설정 파일 오류: {0}")]
    File(String),
    /// 파싱 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(String),
    /// 유효성 검사 오류
    #[error("설정 유효성 검사 오류: {0}")]
    Validation(String),
}

impl From<IchimokuError> for ConfigError {
    fn from(err: IchimokuError) -> Self {
        ConfigError::Validation(err.to_string())
    }
}

/// 설정 로드 결과
pub type ConfigResult<T> = Result<T, ConfigError>;

/// 설정 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON 형식
    Json,
    /// TOML 형식
    Toml,
    /// 자동 감지 (파일 확장자로부터)
    Auto,
}

/// 설정 유효성 검사 트레이트
pub trait ConfigValidation {
    fn validate(&self) -> ConfigResult<()>;
}

/// 설정 파일 로더
#[derive(Debug)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// 파일에서 설정 로드
    ///
    /// # Arguments
    /// * `path` - 설정 파일 경로
    /// * `format` - 설정 파일 형식 (`Auto`면 확장자로 판단)
    ///
    /// # Returns
    /// * `ConfigResult<T>` - 검증된 설정 객체 또는 오류
    pub fn load_from_file<T>(path: &Path, format: ConfigFormat) -> ConfigResult<T>
    where
        T: DeserializeOwned + ConfigValidation,
    {
        debug!("설정 파일 로드 시작: {}", path.display());

        let format = match format {
            ConfigFormat::Auto => Self::detect_format(path)?,
            other => other,
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            error!("설정 파일 읽기 실패: {} - {}", path.display(), e);
            ConfigError::File(format!("파일 읽기 실패: {}: {}", path.display(), e))
        })?;

        let config: T = Self::parse(&content, format)?;

        if let Err(e) = config.validate() {
            error!("설정 유효성 검사 실패: {}", e);
            return Err(e);
        }

        info!("설정 파일 로드 완료: {}", path.display());
        Ok(config)
    }

    /// 문자열에서 설정 로드
    ///
    /// `Auto`는 JSON을 먼저 시도하고 실패하면 TOML로 파싱합니다.
    pub fn load_from_string<T>(content: &str, format: ConfigFormat) -> ConfigResult<T>
    where
        T: DeserializeOwned + ConfigValidation,
    {
        let config: T = match format {
            ConfigFormat::Auto => match Self::parse_json::<T>(content) {
                Ok(config) => config,
                Err(_) => Self::parse_toml(content)?,
            },
            other => Self::parse(content, other)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// 설정 파일 저장
    ///
    /// `Auto`는 확장자로 판단하며, 확장자가 없으면 TOML로 저장합니다.
    pub fn save_to_file<T>(config: &T, path: &Path, format: ConfigFormat) -> ConfigResult<()>
    where
        T: Serialize + ConfigValidation,
    {
        debug!("설정 파일 저장 시작: {}", path.display());
        config.validate()?;

        let format = match format {
            ConfigFormat::Auto => Self::detect_format(path).unwrap_or(ConfigFormat::Toml),
            other => other,
        };

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(config)
                .map_err(|e| ConfigError::Parse(format!("JSON 직렬화 실패: {}", e)))?,
            _ => toml::to_string_pretty(config)
                .map_err(|e| ConfigError::Parse(format!("TOML 직렬화 실패: {}", e)))?,
        };

        std::fs::write(path, &content).map_err(|e| {
            error!("설정 파일 쓰기 실패: {} - {}", path.display(), e);
            ConfigError::File(format!("파일 쓰기 실패: {}", e))
        })?;

        info!("설정 파일 저장 완료: {}", path.display());
        Ok(())
    }

    // 내부 헬퍼 메서드

    fn parse<T: DeserializeOwned>(content: &str, format: ConfigFormat) -> ConfigResult<T> {
        match format {
            ConfigFormat::Json => Self::parse_json(content),
            _ => Self::parse_toml(content),
        }
    }

    fn parse_json<T: DeserializeOwned>(content: &str) -> ConfigResult<T> {
        serde_json::from_str(content).map_err(|e| {
            warn!("JSON 파싱 실패: {}", e);
            ConfigError::Parse(format!("JSON 파싱 실패: {}", e))
        })
    }

    fn parse_toml<T: DeserializeOwned>(content: &str) -> ConfigResult<T> {
        toml::from_str(content).map_err(|e| {
            warn!("TOML 파싱 실패: {}", e);
            ConfigError::Parse(format!("TOML 파싱 실패: {}", e))
        })
    }

    /// 파일 형식 감지
    fn detect_format(path: &Path) -> ConfigResult<ConfigFormat> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => {
                warn!("지원되지 않는 파일 형식: {}", path.display());
                Err(ConfigError::File(format!(
                    "파일 형식을 감지할 수 없음: {}",
                    path.display()
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::ichimoku::IchimokuParams;
    use crate::strategy::IchimokuConfig;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_toml_string() {
        let toml_str = r#"
            [ichimoku]
            conversion_period = 7
            base_period = 22
            span_b_period = 44
        "#;
        let config =
            ConfigLoader::load_from_string::<IchimokuConfig>(toml_str, ConfigFormat::Toml).unwrap();
        assert_eq!(config.ichimoku, IchimokuParams::new(7, 22, 44));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let json = r#"{"ichimoku":{"conversion_period":5}}"#;
        let config =
            ConfigLoader::load_from_string::<IchimokuConfig>(json, ConfigFormat::Auto).unwrap();
        assert_eq!(config.ichimoku, IchimokuParams::new(5, 26, 52));

        let empty = ConfigLoader::load_from_string::<IchimokuConfig>("", ConfigFormat::Toml).unwrap();
        assert_eq!(empty.ichimoku, IchimokuParams::default());
    }

    #[test]
    fn test_zero_period_is_validation_error() {
        let json = r#"{"ichimoku":{"conversion_period":0}}"#;
        match ConfigLoader::load_from_string::<IchimokuConfig>(json, ConfigFormat::Json) {
            Err(ConfigError::Validation(msg)) => assert!(msg.contains("conversion_period")),
            other => panic!("유효성 검사 오류가 발생해야 함: {other:?}"),
        }
    }

    #[test]
    fn test_non_integer_period_is_parse_error() {
        let json = r#"{"ichimoku":{"base_period":2.5}}"#;
        let result = ConfigLoader::load_from_string::<IchimokuConfig>(json, ConfigFormat::Json);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let negative = "[ichimoku]\nspan_b_period = -3\n";
        let result = ConfigLoader::load_from_string::<IchimokuConfig>(negative, ConfigFormat::Toml);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempdir().unwrap();
        let config = IchimokuConfig {
            ichimoku: IchimokuParams::new(10, 30, 60),
        };

        for name in ["ichimoku.json", "ichimoku.toml"] {
            let path = dir.path().join(name);
            ConfigLoader::save_to_file(&config, &path, ConfigFormat::Auto).unwrap();
            let loaded =
                ConfigLoader::load_from_file::<IchimokuConfig>(&path, ConfigFormat::Auto).unwrap();
            assert_eq!(loaded, config);
        }
    }

    #[test]
    fn test_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ichimoku.yaml");
        std::fs::write(&path, "ichimoku: {}").unwrap();

        let result = ConfigLoader::load_from_file::<IchimokuConfig>(&path, ConfigFormat::Auto);
        assert!(matches!(result, Err(ConfigError::File(_))));
    }
}
