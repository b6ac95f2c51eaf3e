use crate::get_mlconsole_setting;

/// Backend origin from the environment (or the default), without a trailing slash
/// so endpoint paths can be appended directly
pub fn get_backend_url() -> String {
    normalise_origin(&get_mlconsole_setting!(MLCONSOLE_BACKEND_URL))
}

pub fn normalise_origin(origin: &str) -> String {
    origin.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_origin_strips_trailing_slashes() {
        assert_eq!(
            normalise_origin("http://localhost:5000//"),
            "http://localhost:5000"
        );
    }

    #[test]
    fn test_normalise_origin_trims_whitespace() {
        assert_eq!(normalise_origin("  http://10.0.0.2:8080 "), "http://10.0.0.2:8080");
    }
}
