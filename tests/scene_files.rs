//! Rendering scene files end to end

use std::path::Path;

use insta::assert_snapshot;
use ortho_svg::{render, Scene, SceneError};

#[test]
fn test_demo_scene_renders() {
    let scene = Scene::from_file(Path::new("demos/square.toml")).expect("demo scene should load");
    let svg = scene.render().expect("demo scene should render");

    assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert_eq!(svg.matches("<circle").count(), 4);
    assert_eq!(svg.matches("<rect").count(), 1);
    assert_eq!(svg.matches("<path").count(), 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = Scene::from_file(Path::new("demos/does-not-exist.toml"));
    assert!(matches!(result, Err(SceneError::Io(_))));
}

#[test]
fn test_compact_output_snapshot() {
    let svg = render(
        r##"
[config]
smoothing_radius = 0.25
standalone = false
pretty_print = false
id = "out"

[[draw]]
type = "line"
stroke = "#000000"
points = [{ x = 10, y = 10 }, { x = 25, y = 10 }, { x = 25, y = 25 }]
"##,
    )
    .unwrap();

    assert_snapshot!(svg, @r##"<svg xmlns="http://www.w3.org/2000/svg" id="out" viewBox="0 0 100 100" width="1000px" height="1000px" stroke="#ff0000" style="background-color: #ffffff"><path d="M 10,10 L 24.75,10 Q 25,10 25,10.25" fill="none" stroke="#000000"/><path d="M 25,10.25 L 25,25" fill="none" stroke="#000000"/></svg>"##);
}

#[test]
fn test_diagonal_scene_produces_no_svg() {
    let source = r#"
[[draw]]
type = "circles"
items = [{ x = 1, y = 1, radius = 1 }]

[[draw]]
type = "line"
points = [{ x = 0, y = 0 }, { x = 3, y = 4 }]
"#;
    let err = render(source).unwrap_err();
    assert!(err.to_string().starts_with("draw operation 1:"));
}
