use crate::validator::root_length::*;
use crate::{PortablePathError, SeparatorConfig};

const WIN: SeparatorConfig = SeparatorConfig::WINDOWS;
const POSIX: SeparatorConfig = SeparatorConfig::POSIX;

fn win(path: &str) -> usize {
    root_length(path, &WIN).unwrap()
}

fn posix(path: &str) -> usize {
    root_length(path, &POSIX).unwrap()
}

#[test]
fn windows_drive_roots() {
    assert_eq!(win("C:\\foo"), 3);
    assert_eq!(win("C:/foo"), 3);
    assert_eq!(win("C:\\"), 3);
    assert_eq!(win("C:foo"), 2);
    assert_eq!(win("C:"), 2);
}

#[test]
fn windows_relative_paths_have_no_root() {
    assert_eq!(win("relative\\path"), 0);
    assert_eq!(win("file.txt"), 0);
    assert_eq!(win("C"), 0);
    assert_eq!(win(""), 0);
}

#[test]
fn windows_single_leading_separator() {
    assert_eq!(win("\\foo"), 1);
    assert_eq!(win("/foo/bar"), 1);
    assert_eq!(win("\\"), 1);
}

#[test]
fn windows_unc_roots_cover_server_and_share() {
    assert_eq!(win("\\\\server\\share\\docs\\a.txt"), "\\\\server\\share\\".len());
    assert_eq!(win("\\\\server\\share\\"), 15);
    assert_eq!(win("\\\\server\\share"), 14);
    assert_eq!(win("//server/share/x"), 15);
    assert_eq!(win("\\/server/share"), 14);
}

#[test]
fn windows_incomplete_unc_consumes_what_is_there() {
    assert_eq!(win("\\\\"), 2);
    assert_eq!(win("\\\\server"), 8);
    assert_eq!(win("\\\\server\\"), 9);
    // Empty runs still count as runs.
    assert_eq!(win("\\\\\\\\rest"), 4);
}

#[test]
fn posix_roots() {
    assert_eq!(posix("/"), 1);
    assert_eq!(posix("/usr/local"), 1);
    assert_eq!(posix("//net/share"), 1);
    assert_eq!(posix("usr/local"), 0);
    assert_eq!(posix(""), 0);
}

#[test]
fn posix_ignores_windows_syntax() {
    assert_eq!(posix("C:\\foo"), 0);
    assert_eq!(posix("\\\\server\\share"), 0);
}

#[test]
fn root_never_exceeds_length() {
    let samples = [
        "", "\\", "\\\\", "\\\\a", "\\\\a\\", "\\\\a\\b", "C:", "C:\\", "x", "/", "ü:",
    ];
    for s in samples {
        assert!(win(s) <= s.len(), "{s:?}");
        assert!(posix(s) <= s.len(), "{s:?}");
    }
}

#[test]
fn non_ascii_drive_position_is_byte_based() {
    // Volume separator after a multi-byte first character.
    assert_eq!(win("é:\\x"), "é:\\".len());
}

#[test]
fn root_length_validates_first() {
    let err = root_length("C:\\a|b", &WIN).unwrap_err();
    assert_eq!(err.kind(), "invalid_format");
    // Wildcards are not checked here.
    assert_eq!(root_length("C:\\*", &WIN), Ok(3));
}

#[test]
fn rooted_detection() {
    assert_eq!(is_path_rooted(Some("C:foo"), &WIN), Ok(true));
    assert_eq!(is_path_rooted(Some("\\foo"), &WIN), Ok(true));
    assert_eq!(is_path_rooted(Some("foo\\bar"), &WIN), Ok(false));
    assert_eq!(is_path_rooted(Some("C:foo"), &POSIX), Ok(false));
    assert_eq!(is_path_rooted(Some("/etc"), &POSIX), Ok(true));
    assert_eq!(is_path_rooted(None, &POSIX), Ok(false));
    assert!(matches!(
        is_path_rooted(Some("<x>"), &POSIX),
        Err(PortablePathError::InvalidFormat { .. })
    ));
}

#[test]
fn path_root_prefix() {
    assert_eq!(get_path_root(Some("C:\\Windows\\System32"), &WIN), Ok(Some("C:\\")));
    assert_eq!(
        get_path_root(Some("\\\\srv\\pub\\file"), &WIN),
        Ok(Some("\\\\srv\\pub\\"))
    );
    assert_eq!(get_path_root(Some("docs/a"), &POSIX), Ok(Some("")));
    assert_eq!(get_path_root(None, &POSIX), Ok(None));
}
