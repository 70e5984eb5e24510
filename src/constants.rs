// src/constants.rs

/// Extensions and literal filenames included when `--extensions` is not given.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".jsx", ".ts", ".tsx", ".html", ".css", ".scss", ".md", ".json", ".yaml",
    ".yml", ".sh", ".txt", ".java", ".c", ".cpp", ".h", ".hpp", ".go", ".rb", ".php", ".sql",
    ".feature", ".env", ".dockerfile", "Dockerfile", ".conf", ".ini", ".toml", ".xml", ".rst",
    ".adoc",
];

/// Directory names pruned from the walk when `--exclude-dirs` is not given.
/// Matched by exact name, so entries containing a separator never match.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    ".git",
    ".vscode",
    ".idea",
    "venv",
    "env",
    ".env",
    "__pycache__",
    "node_modules",
    "dist",
    "build",
    "target",
    "out",
    "logs",
    "coverage",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    ".next",
    ".nuxt",
    ".cache",
    "public",
    "static/admin",
];

/// Filename patterns skipped when `--exclude-files` is not given.
pub const DEFAULT_EXCLUDE_FILES: &[&str] = &[
    ".DS_Store",
    "*.min.js",
    "*.min.css",
    "*.log",
    "*.lock",
    "package-lock.json",
    "yarn.lock",
    "poetry.lock",
    "Pipfile.lock",
    "composer.lock",
    "*.swp",
    "*.swo",
    "*.pyc",
    "*.pyo",
    "*.exe",
    "*.dll",
    "*.so",
    "*.o",
    "*.a",
    "*.class",
    "*.jar",
    "*.war",
    "*.ear",
    "*.zip",
    "*.tar.gz",
    "*.rar",
    "*.7z",
    "*.map",
];

/// Default per-file size ceiling, in megabytes.
pub const DEFAULT_MAX_FILE_SIZE_MB: f64 = 5.0;

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Header banner lines. The first one is followed by the absolute project path.
pub const HEADER_PROJECT_PREFIX: &str = "# Project: ";
pub const HEADER_TITLE: &str = "# Concatenated Files Output";
pub const HEADER_RULE: &str = "# --------------------------------------------------";

pub const START_MARKER_PREFIX: &str = "--- START FILE: ";
pub const END_MARKER_PREFIX: &str = "--- END FILE: ";
pub const MARKER_SUFFIX: &str = " ---";

/// Outputs above this many megabytes trigger the large-output advisory.
pub const LARGE_OUTPUT_MB: f64 = 2.0;
/// Token estimates above this trigger the large-output advisory.
pub const LARGE_OUTPUT_TOKENS: f64 = 200_000.0;
/// Rough characters-per-token ratio used for the estimate.
pub const CHARS_PER_TOKEN: usize = 4;

/// Extension tokens shorter than this (and lowercase) get a leading dot.
pub const BARE_EXTENSION_MAX_LEN: usize = 5;
