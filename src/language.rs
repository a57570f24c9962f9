/*!
 * Static language and ignore tables for codesum
 */

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;

/// Mapping from file extension (including the leading dot) to the language
/// tag used as the markdown fence label. Lookup is exact and case-sensitive.
pub static LANGUAGE_TAGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (".js", "js"),
        (".html", "html"),
        (".ts", "typescript"),
        (".java", "java"),
        (".py", "python"),
        (".go", "go"),
        (".rb", "ruby"),
        (".cpp", "cpp"),
        (".c", "c"),
        (".php", "php"),
        (".sh", "bash"),
        (".cs", "csharp"),
    ])
});

/// Default tokens to ignore. A file is excluded when its root-relative path
/// contains any of these as a plain substring (not a glob, not a segment
/// match), so `node_modules` also excludes `foo/node_modules_backup/bar.js`.
pub static DEFAULT_IGNORE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        ".angular",
        ".vscode",
        "node_modules",
        ".editorconfig",
        ".gitignore",
        "Migrations",
        "Debug",
        "angular.json",
        "package-lock.json",
        "package.json",
        "README.md",
        "Dependencies",
        "Connected Services",
        "tsconfig.app.json",
        "tsconfig.json",
        "tsconfig.spec.json",
    ]
});

/// Resolve the language tag for a path by its extension.
///
/// Returns `None` for files without an extension or with an extension that is
/// not in the table. `.JS` does not match `.js`.
pub fn language_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    LANGUAGE_TAGS.get(format!(".{}", ext).as_str()).copied()
}
