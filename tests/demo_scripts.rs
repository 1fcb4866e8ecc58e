//! Render every drawing script under `demos/`
//!
//! Each demo must load and produce at least one fragment per `[[draw]]`
//! entry. Escaped demos must not contain raw markup characters in text.

use std::fs;
use std::path::Path;

use markup_canvas::Script;

#[test]
fn test_all_demo_scripts_render() {
    let demos_dir = Path::new("demos");

    if !demos_dir.exists() {
        panic!("Demos directory not found at {:?}", demos_dir);
    }

    let mut tested = 0;
    let mut failures = Vec::new();

    for entry in fs::read_dir(demos_dir).expect("Failed to read demos directory") {
        let path = entry.expect("Failed to read entry").path();

        if path.extension().map_or(false, |ext| ext == "toml") {
            match Script::from_file(&path) {
                Ok(script) => {
                    let markup = script.render();
                    let fragments = markup.matches("/>").count() + markup.matches("</text>").count();
                    if fragments != script.commands.len() {
                        failures.push(format!(
                            "{}: expected {} fragments, found {}",
                            path.display(),
                            script.commands.len(),
                            fragments
                        ));
                    }
                    tested += 1;
                }
                Err(e) => {
                    failures.push(format!("Failed to load {}: {}", path.display(), e));
                }
            }
        }
    }

    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("  - {}", failure);
        }
        panic!("{} demo script(s) failed. See output above.", failures.len());
    }

    assert!(tested > 0, "No .toml files found in demos directory");
}

#[test]
fn test_escaped_labels_demo() {
    let script = Script::from_file(Path::new("demos/escaped-labels.toml")).expect("Should load");
    assert!(script.config.escape);

    let markup = script.render();
    assert!(markup.contains(">p &lt; 0.05 &amp; n &gt; 30</text>"));
}

#[test]
fn test_line_chart_demo_has_two_subpaths() {
    let script = Script::from_file(Path::new("demos/line-chart.toml")).expect("Should load");
    let markup = script.render();
    assert!(markup.contains("d='M30 120 L90 80 L150 95 M210 40 L270 60 L310 30'"));
    assert!(markup.contains("style='stroke:steelblue;stroke-width:2;fill:none'"));
}
