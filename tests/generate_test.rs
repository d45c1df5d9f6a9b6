/// Integration tests for the full pipeline: fragment store → registry →
/// resolver → assembler → writer, driven through `copigen::generate`.
use copigen::config::GeneratorConfig;
use copigen::error::Error;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Build a fragment store with core `{intro, style}` and components
/// `{flask, numpy, pandas, pygame}`.
fn seed_store(root: &Path) {
    let core = root.join("fragments/core");
    let components = root.join("fragments/components");
    fs::create_dir_all(&core).unwrap();
    fs::create_dir_all(&components).unwrap();

    fs::write(core.join("intro.md"), "# intro\n\nProject introduction.\n").unwrap();
    fs::write(core.join("style.md"), "# style\n\nStyle rules.\n").unwrap();
    for key in ["flask", "numpy", "pandas", "pygame"] {
        fs::write(
            components.join(format!("{key}.md")),
            format!("# {key}\n\nUse {key} idiomatically.\n"),
        )
        .unwrap();
    }
}

fn config(root: &Path, overwrite: bool) -> GeneratorConfig {
    GeneratorConfig {
        fragments_dir: root.join("fragments"),
        output: root.join("copilot-instructions.md"),
        overwrite,
    }
}

fn selection(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

fn section_position(text: &str, title: &str) -> usize {
    text.find(&format!("## {title}"))
        .unwrap_or_else(|| panic!("missing section {title} in:\n{text}"))
}

// ─── Ordering ─────────────────────────────────────────────────────────────────

#[test]
fn registry_order_wins_over_pick_order() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path());
    let cfg = config(dir.path(), false);

    // Picked as "pandas, numpy" — output order must be registry order.
    copigen::generate(&cfg, &selection(&["pandas", "numpy"])).unwrap();
    let text = fs::read_to_string(&cfg.output).unwrap();

    let intro = section_position(&text, "intro");
    let style = section_position(&text, "style");
    let numpy = section_position(&text, "numpy");
    let pandas = section_position(&text, "pandas");
    assert!(intro < style, "core order fixed");
    assert!(style < numpy && numpy < pandas, "components follow core, registry order");
    assert!(!text.contains("## flask"), "unselected components excluded");
    assert!(!text.contains("## pygame"), "unselected components excluded");
}

#[test]
fn empty_selection_yields_core_only_document() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path());
    let cfg = config(dir.path(), false);

    copigen::generate(&cfg, &BTreeSet::new()).unwrap();
    let text = fs::read_to_string(&cfg.output).unwrap();

    assert!(text.contains("## intro"));
    assert!(text.contains("## style"));
    for key in ["flask", "numpy", "pandas", "pygame"] {
        assert!(!text.contains(&format!("## {key}")), "{key} must not appear");
    }
}

// ─── Determinism ──────────────────────────────────────────────────────────────

#[test]
fn identical_selection_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path());

    let cfg = config(dir.path(), false);
    copigen::generate(&cfg, &selection(&["numpy", "pandas"])).unwrap();
    let first = fs::read_to_string(&cfg.output).unwrap();

    let cfg = config(dir.path(), true);
    copigen::generate(&cfg, &selection(&["numpy", "pandas"])).unwrap();
    let second = fs::read_to_string(&cfg.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn set_equal_selections_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path());

    // Same set built from different pick orders.
    let a: BTreeSet<String> = ["pandas", "numpy", "flask"]
        .iter()
        .map(|k| k.to_string())
        .collect();
    let b: BTreeSet<String> = ["flask", "pandas", "numpy"]
        .iter()
        .map(|k| k.to_string())
        .collect();

    let cfg = config(dir.path(), false);
    copigen::generate(&cfg, &a).unwrap();
    let first = fs::read_to_string(&cfg.output).unwrap();

    let cfg = config(dir.path(), true);
    copigen::generate(&cfg, &b).unwrap();
    let second = fs::read_to_string(&cfg.output).unwrap();

    assert_eq!(first, second);
}

// ─── Error paths ──────────────────────────────────────────────────────────────

#[test]
fn unknown_key_fails_naming_every_offender() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path());
    let cfg = config(dir.path(), false);

    let err = copigen::generate(&cfg, &selection(&["flask", "bogus"])).unwrap_err();
    match err {
        Error::InvalidSelection { keys } => assert_eq!(keys, ["bogus"]),
        other => panic!("expected InvalidSelection, got {other:?}"),
    }
    assert!(!cfg.output.exists(), "no output written on failure");
}

#[test]
fn missing_store_fails_with_load_error() {
    let dir = TempDir::new().unwrap();
    let cfg = config(dir.path(), false);

    let err = copigen::generate(&cfg, &BTreeSet::new()).unwrap_err();
    assert!(matches!(err, Error::FragmentLoad { .. }), "got {err:?}");
}

#[test]
fn existing_output_is_left_untouched_without_overwrite() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path());
    let cfg = config(dir.path(), false);
    fs::write(&cfg.output, "hands off").unwrap();

    let err = copigen::generate(&cfg, &BTreeSet::new()).unwrap_err();
    assert!(matches!(err, Error::OutputExists { .. }), "got {err:?}");
    assert_eq!(
        fs::read_to_string(&cfg.output).unwrap(),
        "hands off",
        "existing file byte-identical"
    );
}

#[test]
fn overwrite_replaces_previous_document() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path());

    let cfg = config(dir.path(), false);
    copigen::generate(&cfg, &BTreeSet::new()).unwrap();

    let cfg = config(dir.path(), true);
    copigen::generate(&cfg, &selection(&["flask"])).unwrap();
    let text = fs::read_to_string(&cfg.output).unwrap();
    assert!(text.contains("## flask"));
}
