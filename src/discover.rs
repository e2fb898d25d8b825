//! File discovery from include/exclude glob patterns.
//!
//! The tree under the root is walked once with `glob`, then every regular
//! file is matched against the include and exclude sets compiled with
//! `globset`, which understands `{a,b}` alternation and `[...]` classes.
//! Both sets match the path relative to the root, and `*` never crosses a
//! `/` (use `**` for that).

use glob::{glob, Pattern};
use globset::{GlobBuilder, GlobMatcher};
use log::warn;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
/// Fatal discovery failures. Unreadable entries are skipped, not reported here.
pub enum DiscoveryError {
    #[error("invalid include pattern '{pattern}': {source}")]
    Include {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("invalid exclude pattern '{pattern}': {source}")]
    Exclude {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("cannot walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: glob::PatternError,
    },
}

/// Split a comma-separated pattern list, ignoring commas inside `{...}` and
/// `[...]`. Braces inside a class do not open a group.
pub fn split_patterns(csv: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut cur = String::new();
    // Characters consumed since the opening `[`, or None outside a class.
    let mut class: Option<usize> = None;
    for c in csv.chars() {
        match (class, c) {
            // `[]...]` and `[!]...]` keep a leading `]` literal.
            (Some(n), ']') if n == 0 || (n == 1 && cur.ends_with("[!")) => {
                class = Some(n + 1)
            }
            (Some(_), ']') => class = None,
            (Some(n), _) => class = Some(n + 1),
            (None, '[') => class = Some(0),
            (None, '{') => depth += 1,
            (None, '}') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                out.push(std::mem::take(&mut cur));
                continue;
            }
            _ => {}
        }
        cur.push(c);
    }
    out.push(cur);
    out.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn compile(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}

/// Every regular file under `root`, sorted by path. Unreadable entries are
/// logged and skipped.
fn walk(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let all = if root == Path::new(".") || root.as_os_str().is_empty() {
        "**/*".to_string()
    } else {
        format!(
            "{}/**/*",
            Pattern::escape(root.to_string_lossy().trim_end_matches('/'))
        )
    };
    let entries = glob(&all).map_err(|source| DiscoveryError::Walk {
        root: root.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(p) if p.is_file() => files.push(p),
            Ok(_) => {}
            Err(e) => warn!("skipping unreadable path {}: {}", e.path().display(), e.error()),
        }
    }
    files.sort();
    Ok(files)
}

/// Collect regular files under `root` matching any include pattern and no
/// exclude pattern. Order follows include order, then path order; duplicates
/// are dropped.
pub fn files_to_scan(
    root: &Path,
    include: &[String],
    exclude: &[String],
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let includes = include
        .iter()
        .map(|pat| {
            compile(pat).map_err(|source| DiscoveryError::Include {
                pattern: pat.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let excludes = exclude
        .iter()
        .map(|pat| {
            compile(pat).map_err(|source| DiscoveryError::Exclude {
                pattern: pat.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let candidates: Vec<(PathBuf, PathBuf)> = walk(root)?
        .into_iter()
        .filter_map(|path| {
            let rel = path.strip_prefix(root).unwrap_or(path.as_path()).to_path_buf();
            if excludes.iter().any(|ex| ex.is_match(&rel)) {
                None
            } else {
                Some((path, rel))
            }
        })
        .collect();

    let mut seen: HashSet<&Path> = HashSet::new();
    let mut files = Vec::new();
    for inc in &includes {
        for (path, rel) in &candidates {
            if inc.is_match(rel) && seen.insert(path.as_path()) {
                files.push(path.clone());
            }
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, files: &[&str]) {
        for f in files {
            let p = root.join(f);
            fs::create_dir_all(p.parent().unwrap()).unwrap();
            fs::write(&p, "test").unwrap();
        }
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_split_patterns_keeps_groups_and_classes() {
        assert_eq!(
            split_patterns("**/*.{go,js},docs/*.md, ,**/vendor/**"),
            vec!["**/*.{go,js}", "docs/*.md", "**/vendor/**"]
        );
        assert_eq!(
            split_patterns("x[{]y[}]z.txt,*.go"),
            vec!["x[{]y[}]z.txt", "*.go"]
        );
        assert_eq!(split_patterns("a[,]b,c"), vec!["a[,]b", "c"]);
        assert_eq!(split_patterns("[]{],d"), vec!["[]{]", "d"]);
        assert!(split_patterns("").is_empty());
    }

    #[test]
    fn test_files_to_scan_includes_and_excludes() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(
            root,
            &[
                "test.go",
                "test.js",
                "test.txt",
                "vendor/test.go",
                "node_modules/test.js",
                "sub/deep.go",
            ],
        );
        fs::create_dir_all(root.join("dir.go")).unwrap();

        let include = vec!["**/*.{go,js}".to_string(), "*.go".to_string()];
        let exclude = vec!["**/vendor/**".to_string(), "**/node_modules/**".to_string()];
        let files = files_to_scan(root, &include, &exclude).unwrap();

        // Deduplicated, directories skipped, excluded trees dropped.
        assert_eq!(
            relative(root, &files),
            vec!["sub/deep.go", "test.go", "test.js"]
        );
    }

    #[test]
    fn test_star_stays_in_one_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, &["a.go", "sub/b.go"]);
        let files = files_to_scan(root, &["*.go".to_string()], &[]).unwrap();
        assert_eq!(relative(root, &files), vec!["a.go"]);
    }

    #[test]
    fn test_include_order_wins_over_path_order() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, &["a.md", "b.go"]);
        let include = vec!["*.go".to_string(), "*.md".to_string()];
        let files = files_to_scan(root, &include, &[]).unwrap();
        assert_eq!(relative(root, &files), vec!["b.go", "a.md"]);
    }

    #[test]
    fn test_excludes_match_relative_to_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("project");
        touch(&root, &["main.go", "vendor/lib.go"]);
        let files = files_to_scan(
            &root,
            &["**/*.go".to_string()],
            &["vendor/**".to_string()],
        )
        .unwrap();
        assert_eq!(relative(&root, &files), vec!["main.go"]);
    }

    #[test]
    fn test_braces_inside_class_are_literal() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, &["x{y}z.txt", "xyz.txt"]);
        let files = files_to_scan(root, &["x[{]y[}]z.txt".to_string()], &[]).unwrap();
        assert_eq!(relative(root, &files), vec!["x{y}z.txt"]);

        let files = files_to_scan(
            root,
            &["*.txt".to_string()],
            &["x[{]*".to_string()],
        )
        .unwrap();
        assert_eq!(relative(root, &files), vec!["xyz.txt"]);
    }

    #[test]
    fn test_invalid_patterns_are_errors() {
        let dir = tempdir().unwrap();
        let err = files_to_scan(dir.path(), &["*.{go,js".to_string()], &[]).unwrap_err();
        assert!(matches!(err, DiscoveryError::Include { .. }));
        assert!(err.to_string().contains("*.{go,js"));
        let err = files_to_scan(dir.path(), &["*.go".to_string()], &["[unclosed".to_string()])
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::Exclude { .. }));
    }
}
