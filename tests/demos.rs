use std::fs;

use deutschcode::run_with_output;
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn demo_programs_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "dc"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Missing expected output {expected_path:?}: {e}")
                       });

        let mut out = Vec::new();
        if let Err(e) = run_with_output(&source, &mut out) {
            panic!("Demo {path:?} failed:\n{source}\nError: {e}");
        }

        assert_eq!(String::from_utf8(out).unwrap(), expected, "output of {path:?}");
        count += 1;
    }

    assert!(count > 0, "No demo programs found in demos/");
}
