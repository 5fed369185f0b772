//! End-to-end workflows through the public API only.
use portable_path::{
    get_full_path, normalize_path, PathSyntax, Platform, PortablePathError, SeparatorConfig,
};

#[test]
fn rewrite_windows_build_outputs_on_any_host() {
    let windows = PathSyntax::new(Platform::Windows);
    let outputs = [
        "C:\\build\\obj\\main.obj",
        "C:\\build\\obj\\util.obj",
        "\\\\ci\\artifacts\\run42\\lib.obj",
    ];

    let rewritten: Vec<String> = outputs
        .iter()
        .map(|p| {
            windows
                .change_extension(Some(*p), Some("o"))
                .unwrap()
                .unwrap()
                .into_owned()
        })
        .collect();
    assert_eq!(
        rewritten,
        [
            "C:\\build\\obj\\main.o",
            "C:\\build\\obj\\util.o",
            "\\\\ci\\artifacts\\run42\\lib.o",
        ]
    );

    let dirs: Vec<String> = rewritten
        .iter()
        .filter_map(|p| windows.get_directory_name(Some(p.as_str())).unwrap())
        .map(|d| d.into_owned())
        .collect();
    assert_eq!(
        dirs,
        ["C:\\build\\obj", "C:\\build\\obj", "\\\\ci\\artifacts\\run42"]
    );
}

#[test]
fn walk_up_to_unc_share_root() {
    let windows = PathSyntax::new(Platform::Windows);
    let mut chain = Vec::new();
    let mut current = Some(String::from("\\\\fs01\\home\\alice\\docs\\cv.pdf"));
    while let Some(path) = current {
        current = windows
            .get_directory_name(Some(path.as_str()))
            .unwrap()
            .map(|p| p.into_owned());
        chain.push(path);
    }
    assert_eq!(
        chain,
        [
            "\\\\fs01\\home\\alice\\docs\\cv.pdf",
            "\\\\fs01\\home\\alice\\docs",
            "\\\\fs01\\home\\alice",
            "\\\\fs01\\home\\",
        ]
    );
}

#[test]
fn same_text_under_both_platforms() {
    let text = "C:\\tmp\\x.txt";
    let windows = SeparatorConfig::WINDOWS;
    let posix = SeparatorConfig::POSIX;
    assert_eq!(portable_path::root_length(text, &windows), Ok(3));
    assert_eq!(portable_path::root_length(text, &posix), Ok(0));
    assert_eq!(
        portable_path::get_file_name(Some(text), &windows),
        Ok(Some("x.txt"))
    );
    assert_eq!(
        portable_path::get_file_name(Some(text), &posix),
        Ok(Some(text))
    );
}

#[test]
fn illegal_input_is_an_error_not_a_result() {
    let posix = PathSyntax::new(Platform::Posix);
    for bad in ["a|b", "line\nbreak", "<tag>", "say \"hi\""] {
        assert!(matches!(
            posix.get_extension(Some(bad)),
            Err(PortablePathError::InvalidFormat { .. })
        ));
        assert!(posix.get_directory_name(Some(bad)).is_err());
        assert!(posix.change_extension(Some(bad), None).is_err());
        assert!(posix.root_length(bad).is_err());
    }
}

#[test]
fn unsupported_operations_are_not_retryable_successes() {
    for _ in 0..3 {
        assert!(matches!(
            get_full_path("docs/a.txt"),
            Err(PortablePathError::Unsupported { .. })
        ));
        assert!(matches!(
            normalize_path("docs/../a.txt", true),
            Err(PortablePathError::Unsupported { .. })
        ));
    }
}
