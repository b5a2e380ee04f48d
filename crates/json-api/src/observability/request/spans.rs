//! Route templates for span names and metric labels.

/// Collapses numeric path segments to `{id}` and ignores a trailing slash, so
/// `/orders/42/` and `/orders/7` share the template `/orders/{id}`.
pub(super) fn route_template(path: &str) -> String {
    let trimmed = path.trim_matches('/');

    if trimmed.is_empty() {
        return "/".to_owned();
    }

    trimmed
        .split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .fold(String::new(), |mut template, segment| {
            template.push('/');
            template.push_str(segment);
            template
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path() {
        assert_eq!(route_template("/"), "/");
        assert_eq!(route_template(""), "/");
    }

    #[test]
    fn test_numeric_segments_collapse() {
        assert_eq!(
            route_template("/orders/42/update_status/"),
            "/orders/{id}/update_status"
        );
        assert_eq!(route_template("/api/v1/orders/7"), "/api/v1/orders/{id}");
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(route_template("/orders/"), route_template("/orders"));
    }

    #[test]
    fn test_non_numeric_segments_are_kept() {
        assert_eq!(route_template("/orders/create/"), "/orders/create");
    }
}
