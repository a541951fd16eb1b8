use std::path::{Component, Path, PathBuf};

pub fn normalize(path: &str) -> String {
    let mut normalized = path.replace('\\', "/");
    while normalized.ends_with('/') && normalized.len() > 1 {
        normalized.pop();
    }
    normalized
}

pub fn is_within_scope(path: &str, root: &str) -> bool {
    let path = normalize(path);
    let root = normalize(root);

    if path == root {
        return true;
    }

    if root == "/" {
        return path.starts_with('/');
    }

    path.strip_prefix(&root)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Resolve a caller-supplied path against the sandbox root. Returns `None`
/// for traversal attempts or anything that would land outside the root.
pub fn resolve(root: &Path, relative: &str) -> Option<PathBuf> {
    let rel = normalize(relative);
    let rel = rel.trim_start_matches('/');

    let rel_path = Path::new(rel);
    for component in rel_path.components() {
        match component {
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            Component::Normal(_) | Component::CurDir => {}
        }
    }

    let candidate = if rel.is_empty() {
        root.to_path_buf()
    } else {
        root.join(rel_path)
    };

    if is_within_scope(&candidate.to_string_lossy(), &root.to_string_lossy()) {
        Some(candidate)
    } else {
        None
    }
}
