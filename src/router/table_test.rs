use super::*;

// =============================================================================
// normalize_path
// =============================================================================

#[test]
fn normalize_keeps_root() {
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path(""), "/");
}

#[test]
fn normalize_strips_query_and_fragment() {
    assert_eq!(normalize_path("/about?tab=team"), "/about");
    assert_eq!(normalize_path("/contact#form"), "/contact");
    assert_eq!(normalize_path("/?next=/about"), "/");
}

#[test]
fn normalize_drops_single_trailing_slash() {
    assert_eq!(normalize_path("/about/"), "/about");
}

#[test]
fn normalize_decodes_percent_escapes() {
    assert_eq!(normalize_path("/%61bout"), "/about");
    assert_eq!(normalize_path("/con%74act/"), "/contact");
}

#[test]
fn normalize_keeps_invalid_escapes_verbatim() {
    assert_eq!(normalize_path("/%FF"), "/%ff");
}

#[test]
fn normalize_folds_case_and_adds_leading_slash() {
    assert_eq!(normalize_path("/About"), "/about");
    assert_eq!(normalize_path("contact"), "/contact");
}

// =============================================================================
// Default table
// =============================================================================

#[test]
fn default_table_declares_four_routes_in_order() {
    let table = RouteTable::default();
    let paths: Vec<&str> = table.entries().iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, ["/login", "/", "/about", "/contact"]);
}

#[test]
fn default_table_access_tags() {
    let table = RouteTable::default();
    for entry in table.entries() {
        let expected = if entry.path == LOGIN_PATH { Access::Public } else { Access::RequiresAuth };
        assert_eq!(entry.access, expected, "{}", entry.path);
    }
}

#[test]
fn resolve_matches_each_declared_view() {
    let table = RouteTable::default();
    let cases = [("/login", View::Login), ("/", View::Home), ("/about", View::About), ("/contact", View::Contact)];
    for (path, view) in cases {
        match table.resolve(path) {
            Resolution::Matched(entry) => assert_eq!(entry.view, view, "{path}"),
            Resolution::Unmatched => panic!("{path} should match"),
        }
    }
}

#[test]
fn resolve_tolerates_trailing_slash_case_and_query() {
    let table = RouteTable::default();
    for path in ["/about/", "/ABOUT", "/about?x=1", "/%61bout"] {
        assert!(matches!(table.resolve(path), Resolution::Matched(e) if e.view == View::About), "{path}");
    }
}

#[test]
fn resolve_unknown_paths_are_unmatched() {
    let table = RouteTable::default();
    for path in ["/unknown/path", "/about/team", "/loginx"] {
        assert_eq!(table.resolve(path), Resolution::Unmatched, "{path}");
    }
}

#[test]
fn first_matching_entry_wins() {
    let table = RouteTable::new(vec![
        RouteEntry::public("/dup", View::Home),
        RouteEntry::protected("/dup", View::About),
    ]);
    assert!(matches!(table.resolve("/dup"), Resolution::Matched(e) if e.view == View::Home));
}

#[test]
fn access_defaults_to_public() {
    assert_eq!(Access::default(), Access::Public);
}
