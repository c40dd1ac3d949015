//! 단위 테스트용 로그 수집기
//!
//! 테스트는 여러 스레드에서 병렬로 실행되므로 경고는 스레드별로 모읍니다.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

thread_local! {
    static WARNINGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

struct ThreadWarnings;

impl Log for ThreadWarnings {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            WARNINGS.with(|warnings| warnings.borrow_mut().push(record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: ThreadWarnings = ThreadWarnings;
static INIT: Once = Once::new();

/// 현재 스레드에서 `f`를 실행하는 동안 기록된 경고 메시지
pub fn capture_warnings(f: impl FnOnce()) -> Vec<String> {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Warn);
    });

    WARNINGS.with(|warnings| warnings.borrow_mut().clear());
    f();
    WARNINGS.with(|warnings| warnings.borrow_mut().drain(..).collect())
}
