//! Shared inputs for the portable-path benchmarks.

/// Paths in Windows syntax covering relative, drive-rooted and UNC forms.
pub const WINDOWS_PATHS: &[&str] = &[
    "report.doc",
    "src\\lib.rs",
    "C:\\Users\\alice\\Documents\\archive.tar.gz",
    "C:relative\\to\\drive.txt",
    "\\\\fileserver\\projects\\2024\\q3\\summary.xlsx",
    "\\\\fileserver\\projects\\",
    "C:\\",
    "D:/mixed/separators\\in/path.bin",
];

/// Paths in POSIX syntax.
pub const POSIX_PATHS: &[&str] = &[
    "Makefile",
    "src/main.rs",
    "/usr/local/bin/cargo",
    "/var/log/nginx/access.log.1",
    "/home/alice/.config/tool/settings.toml",
    "/",
    "relative/dir/",
    "/srv/data/very/deeply/nested/structure/with/many/levels/file.tar.zst",
];

/// A path of `depth` segments, for scaling measurements.
pub fn deep_path(separator: char, depth: usize) -> String {
    let mut path = String::new();
    for i in 0..depth {
        path.push(separator);
        path.push_str("segment");
        path.push_str(&i.to_string());
    }
    path.push_str(".ext");
    path
}
