use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

const MAX_DEPTH: usize = 4;
const MAX_VISITED: usize = 20_000;

/// Breadth-first search below `root` for an entry whose name matches `term`.
///
/// An exact (case-insensitive) name match anywhere in the walk wins over a
/// partial one; otherwise the shallowest partial match is returned. Hidden
/// entries are skipped and the walk is bounded in depth and size.
pub fn find_in(root: &Path, term: &str) -> Option<PathBuf> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let mut queue = VecDeque::from([(root.to_path_buf(), 0usize)]);
    let mut partial: Option<PathBuf> = None;
    let mut visited = 0usize;

    while let Some((dir, depth)) = queue.pop_front() {
        let Ok(read) = fs::read_dir(&dir) else {
            continue;
        };
        let mut entries: Vec<_> = read.filter_map(Result::ok).collect();
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            visited += 1;
            if visited > MAX_VISITED {
                log::debug!("File search stopped after {} entries", MAX_VISITED);
                return partial;
            }
            let name = entry.file_name().to_string_lossy().to_lowercase();
            if name.starts_with('.') {
                continue;
            }
            let path = entry.path();
            if name == needle {
                return Some(path);
            }
            if partial.is_none() && name.contains(&needle) {
                partial = Some(path.clone());
            }
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir && depth + 1 < MAX_DEPTH {
                queue.push_back((path, depth + 1));
            }
        }
    }
    partial
}
