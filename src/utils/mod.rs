// ✅ Макросы условного логирования для оптимизации производительности
#[macro_export]
macro_rules! debug_if_enabled {
    ($($arg:tt)*) => {
        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! trace_if_enabled {
    ($($arg:tt)*) => {
        if tracing::enabled!(tracing::Level::TRACE) {
            tracing::trace!($($arg)*);
        }
    };
}

/// Регистронезависимое вхождение подстроки; пустые строки никогда не совпадают
pub fn contains_fold(value: &str, needle: &str) -> bool {
    if value.is_empty() || needle.is_empty() {
        return false;
    }
    value.to_lowercase().contains(&needle.to_lowercase())
}

pub fn contains_any(value: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| contains_fold(value, needle))
}
