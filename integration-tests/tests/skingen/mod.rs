use integration_tests::{file_names, png_dimensions, Workdir};
use predicates::prelude::*;

#[test]
fn should_print_usage_without_arguments() {
    let workdir = Workdir::new();
    let before = workdir.snapshot();

    workdir
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:").and(predicate::str::contains(
            "<path_to_styles_root>",
        )));

    assert_eq!(workdir.snapshot(), before);
}

#[test]
fn should_reject_path_that_is_not_a_directory() {
    let workdir = Workdir::new().with_file("not-a-dir.txt", "text");
    let before = workdir.snapshot();

    workdir
        .command()
        .arg(workdir.styles_root().join("not-a-dir.txt"))
        .assert()
        .success()
        .stdout("Invalid path to styles folder\n");

    assert_eq!(workdir.snapshot(), before);
}

#[test]
fn should_reject_missing_path() {
    let workdir = Workdir::new();
    let before = workdir.snapshot();

    workdir
        .command()
        .arg(workdir.path().join("does-not-exist"))
        .assert()
        .success()
        .stdout("Invalid path to styles folder\n");

    assert_eq!(workdir.snapshot(), before);
}

#[test]
fn should_render_svgs_for_first_combination() {
    let workdir = Workdir::new()
        .with_svg("clear/style-clear/symbols", "a.svg")
        .with_svg("clear/style-clear/symbols", "b.svg");

    workdir
        .command()
        .arg("--first-only")
        .arg(workdir.styles_root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating for: -clear, mdpi,"));

    let output = workdir.output("mdpi_clear");
    assert_eq!(file_names(&output), vec!["a.png", "b.png"]);
    assert_eq!(png_dimensions(&output.join("a.png")), (18, 18));
    assert_eq!(png_dimensions(&output.join("b.png")), (18, 18));
    assert!(!workdir.scratch().exists());
}

#[test]
fn should_only_generate_first_combination_in_first_only_mode() {
    let workdir = Workdir::new()
        .with_symbol_dirs()
        .with_svg("clear/style-clear/symbols", "a.svg")
        .with_svg("clear/style-clear/symbols-ad", "promo.svg");

    workdir
        .command()
        .arg("--first-only")
        .arg(workdir.styles_root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating for:").count(1));

    assert_eq!(
        file_names(&workdir.path().join("data")),
        vec!["resources-mdpi_clear", "styles"]
    );
    assert_eq!(file_names(&workdir.output("mdpi_clear")), vec!["a.png"]);
}

#[test]
fn should_let_render_win_over_png_override() {
    let workdir = Workdir::new()
        .with_svg("clear/style-clear/symbols", "a.svg")
        .with_file("clear/style-clear/mdpi/a.png", "hand-drawn a")
        .with_file("clear/style-clear/mdpi/logo.png", "hand-drawn logo");

    workdir
        .command()
        .arg("--first-only")
        .arg(workdir.styles_root())
        .assert()
        .success();

    let output = workdir.output("mdpi_clear");
    assert_eq!(file_names(&output), vec!["a.png", "logo.png"]);
    assert_eq!(png_dimensions(&output.join("a.png")), (18, 18));
    assert_eq!(
        std::fs::read(output.join("logo.png")).unwrap(),
        b"hand-drawn logo"
    );
}

#[test]
fn should_generate_all_combinations_with_configured_sizes() {
    let workdir = Workdir::new()
        .with_symbol_dirs()
        .with_svg("clear/style-clear/symbols", "poi.svg")
        .with_svg("clear/style-clear/symbols-ad", "promo.svg")
        .with_svg("clear/style-night/symbols", "poi-night.svg")
        .with_file("clear/style-night/xxxhdpi/badge.png", "badge");

    workdir
        .command()
        .arg(workdir.styles_root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating for:").count(24));

    let expected = [
        ("mdpi_clear", "poi.png", 18),
        ("hdpi_clear", "poi.png", 27),
        ("xhdpi_clear", "poi.png", 36),
        ("xxhdpi_clear", "poi.png", 54),
        ("6plus_clear", "poi.png", 54),
        ("xxxhdpi_clear", "poi.png", 64),
        ("mdpi_clear", "promo.png", 22),
        ("hdpi_clear", "promo.png", 34),
        ("xhdpi_clear", "promo.png", 44),
        ("xxhdpi_clear", "promo.png", 68),
        ("6plus_clear", "promo.png", 68),
        ("xxxhdpi_clear", "promo.png", 78),
        ("mdpi_dark", "poi-night.png", 18),
        ("xxxhdpi_dark", "poi-night.png", 64),
    ];
    for (output, file, size) in expected {
        assert_eq!(
            png_dimensions(&workdir.output(output).join(file)),
            (size, size),
            "{}/{}",
            output,
            file
        );
    }
    assert_eq!(
        file_names(&workdir.output("xxxhdpi_dark")),
        vec!["badge.png", "poi-night.png"]
    );
    assert_eq!(file_names(&workdir.output("hdpi_dark")), vec!["poi-night.png"]);
    assert!(!workdir.scratch().exists());
}

#[test]
fn should_run_twice() {
    let workdir = Workdir::new()
        .with_symbol_dirs()
        .with_svg("clear/style-clear/symbols", "a.svg")
        .with_file("clear/style-clear/mdpi/logo.png", "logo");

    for _ in 0..2 {
        workdir
            .command()
            .arg(workdir.styles_root())
            .assert()
            .success();
        assert!(!workdir.scratch().exists());
    }

    assert_eq!(
        file_names(&workdir.output("mdpi_clear")),
        vec!["a.png", "logo.png"]
    );
}

#[test]
fn should_remove_leftover_scratch_directory() {
    let workdir = Workdir::new().with_svg("clear/style-clear/symbols", "a.svg");
    std::fs::create_dir(workdir.scratch()).unwrap();
    std::fs::write(workdir.scratch().join("stale.png"), "stale").unwrap();

    workdir
        .command()
        .arg("--first-only")
        .arg(workdir.styles_root())
        .assert()
        .success();

    assert_eq!(file_names(&workdir.output("mdpi_clear")), vec!["a.png"]);
    assert!(!workdir.scratch().exists());
}

#[test]
fn should_fail_on_malformed_svg() {
    let workdir = Workdir::new().with_file("clear/style-clear/symbols/broken.svg", "<svg");

    workdir
        .command()
        .arg(workdir.styles_root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.svg"));

    assert!(!workdir.scratch().exists());
}

#[test]
fn should_fail_without_svg_sources() {
    let workdir = Workdir::new();

    workdir
        .command()
        .arg(workdir.styles_root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to list SVG sources"));

    assert!(!workdir.scratch().exists());
}

#[test]
fn should_use_sizes_from_config_file() {
    let workdir = Workdir::new()
        .with_svg("clear/style-clear/symbols", "a.svg")
        .with_file(
            "../skingen.toml",
            "scratch-dir = \"staging\"\n\n[skins.default]\nmdpi = 20\n",
        );

    workdir
        .command()
        .arg("--config")
        .arg(workdir.path().join("data").join("skingen.toml"))
        .arg("--first-only")
        .arg(workdir.styles_root())
        .assert()
        .success();

    assert_eq!(
        png_dimensions(&workdir.output("mdpi_clear").join("a.png")),
        (20, 20)
    );
    assert!(!workdir.path().join("staging").exists());
}

#[test]
fn should_fail_on_invalid_config_file() {
    let workdir = Workdir::new()
        .with_svg("clear/style-clear/symbols", "a.svg")
        .with_file("../skingen.toml", "[skins.default]\nmdpi = 0\n");

    workdir
        .command()
        .arg("--config")
        .arg(workdir.path().join("data").join("skingen.toml"))
        .arg(workdir.styles_root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration file"));

    assert!(!workdir.output("mdpi_clear").exists());
}

#[test]
fn should_list_plan_in_dry_run() {
    let workdir = Workdir::new().with_symbol_dirs();
    let before = workdir.snapshot();

    let output = workdir
        .command()
        .arg("--dry-run")
        .arg(workdir.styles_root())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 24);
    assert!(lines[0].starts_with("-clear\tdefault\tmdpi\t18x18\t"));
    assert!(lines[0].ends_with("resources-mdpi_clear"));
    assert!(lines[6].starts_with("-clear\tads\tmdpi\t22x22\t"));
    assert!(lines[23].starts_with("-night\tads\txxxhdpi\t78x78\t"));
    assert_eq!(workdir.snapshot(), before);
}
