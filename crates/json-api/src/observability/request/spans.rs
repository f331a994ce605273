//! HTTP span helpers.

/// Collapse product names in request paths so spans group by route.
pub(super) fn route_for_path(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut route = String::from("/");
    let mut previous = "";

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            route.push('/');
        }

        if previous == "products" && !segment.is_empty() {
            route.push_str("{name}");
        } else {
            route.push_str(segment);
        }

        previous = segment;
    }

    route
}
