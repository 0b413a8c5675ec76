//! String helpers for device paths. Device paths are always `/` separated,
//! whatever the host platform is, so `std::path` is not used here.

/// Joins `name` under `dir` with exactly one separating slash.
pub fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// Drops exactly one trailing segment. The parent of a top-level path is `/`.
pub fn parent(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(ix) => trimmed[..ix].to_string(),
    }
}

/// Final segment of `path`, ignoring trailing slashes.
pub fn last_segment(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(ix) => &trimmed[ix + 1..],
        None => trimmed,
    }
}

/// Every prefix of `path` from `/` down to `path` itself, paired with the
/// label shown for it.
pub fn prefixes(path: &str) -> Vec<(String, String)> {
    let mut out = vec![("/".to_string(), "/".to_string())];
    let mut current = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        current.push('/');
        current.push_str(segment);
        out.push((segment.to_string(), current.clone()));
    }
    out
}

/// Quotes `arg` for a POSIX shell: wrapped in single quotes, embedded quotes
/// closed, escaped and reopened.
pub fn shell_quote(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('\'');
    for ch in arg.chars() {
        if ch == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('\'');
    quoted
}
