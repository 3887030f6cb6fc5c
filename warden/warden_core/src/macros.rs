//! Convenience macros for Warden.

/// Log an event with the given level, prefixed by the calling module.
///
/// Optional `key => value` pairs are appended as `key=value` metadata.
///
/// # Examples
///
/// ```
/// use warden_core::log_event;
/// use warden_core::utils::LogLevel;
///
/// log_event!(LogLevel::Info, "Policy validated");
///
/// log_event!(LogLevel::Warning, "Policy rejected",
///     policy => "regexPattern",
///     reason => "missing argument",
/// );
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:expr, $message:expr) => {
        {
            match $level {
                $crate::utils::LogLevel::Error => $crate::log::error!("[{}] {}", module_path!(), $message),
                $crate::utils::LogLevel::Warning => $crate::log::warn!("[{}] {}", module_path!(), $message),
                $crate::utils::LogLevel::Info => $crate::log::info!("[{}] {}", module_path!(), $message),
                $crate::utils::LogLevel::Debug => $crate::log::debug!("[{}] {}", module_path!(), $message),
                $crate::utils::LogLevel::Trace => $crate::log::trace!("[{}] {}", module_path!(), $message),
            }
        }
    };

    ($level:expr, $message:expr, $($key:ident => $value:expr),+ $(,)?) => {
        {
            let metadata = vec![$(format!("{}={}", stringify!($key), $value)),+].join(" ");
            match $level {
                $crate::utils::LogLevel::Error => $crate::log::error!("[{}] {}: {}", module_path!(), $message, metadata),
                $crate::utils::LogLevel::Warning => $crate::log::warn!("[{}] {}: {}", module_path!(), $message, metadata),
                $crate::utils::LogLevel::Info => $crate::log::info!("[{}] {}: {}", module_path!(), $message, metadata),
                $crate::utils::LogLevel::Debug => $crate::log::debug!("[{}] {}: {}", module_path!(), $message, metadata),
                $crate::utils::LogLevel::Trace => $crate::log::trace!("[{}] {}: {}", module_path!(), $message, metadata),
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::utils::LogLevel;

    #[test]
    fn test_log_event_expands_for_every_level() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
        ] {
            log_event!(level, "plain message");
            log_event!(level, "with metadata", policy => "length", clauses => 2);
        }
    }
}
