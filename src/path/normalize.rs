use memchr::memmem;

/// Resolves a possibly-relative route path against its parent into the
/// absolute form stored in the route table.
///
/// Unless `strict`, a single trailing slash is stripped first. Absolute
/// paths and top-level relative paths pass through unchanged; nested
/// relative paths are joined onto the parent with a single separator.
#[tracing::instrument(level = "trace", skip(parent_path))]
pub fn normalize_route_path(path: &str, parent_path: Option<&str>, strict: bool) -> String {
    let mut path = path.to_string();
    if !strict && path.ends_with('/') {
        path.pop();
    }
    if path.starts_with('/') {
        return path;
    }
    let Some(parent) = parent_path else {
        return path;
    };
    clean_path(&format!("{parent}/{path}"))
}

/// Collapses every run of consecutive slashes to a single slash, so joining
/// an already-clean path is a no-op.
pub fn clean_path(path: &str) -> String {
    if memmem::find(path.as_bytes(), b"//").is_none() {
        return path.to_string();
    }
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for ch in path.chars() {
        if ch == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(ch);
    }
    out
}
