#[macro_export]
macro_rules! get_mlconsole_setting {
    ($setting:ident) => {
        ::std::env::var(stringify!($setting))
            .unwrap_or($crate::config::$setting.to_string())
    };
    ($setting:ident, usize) => {
        match ::std::env::var(stringify!($setting)) {
            Ok(v) => match v.parse::<usize>() {
                Ok(i) => i,
                Err(_e) => {
                    $crate::__log::warn!(
                        "Env var setting {}, is not a valid unsigned integer. Using default",
                        stringify!($setting)
                    );
                    $crate::config::$setting
                }
            },
            Err(_e) => $crate::config::$setting,
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_string_setting_defaults_without_env() {
        std::env::remove_var("MLCONSOLE_BACKEND_URL");
        assert_eq!(
            get_mlconsole_setting!(MLCONSOLE_BACKEND_URL),
            "http://127.0.0.1:5000"
        );
    }

    #[test]
    fn test_usize_setting_from_env() {
        std::env::set_var("MLCONSOLE_LOG_OVERLAY_LINES", "42");
        let lines: usize = get_mlconsole_setting!(MLCONSOLE_LOG_OVERLAY_LINES, usize);
        assert_eq!(lines, 42);
        std::env::remove_var("MLCONSOLE_LOG_OVERLAY_LINES");
    }

    #[test]
    fn test_invalid_usize_setting_falls_back_to_default() {
        std::env::set_var("MLCONSOLE_TICK_RATE_MS", "soon");
        let tick: usize = get_mlconsole_setting!(MLCONSOLE_TICK_RATE_MS, usize);
        assert_eq!(tick, 16);
        std::env::remove_var("MLCONSOLE_TICK_RATE_MS");
    }
}
