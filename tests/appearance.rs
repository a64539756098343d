//! Appearance derived from the modal component: size and style tokens.

mod helpers;

use converter::block::Appearance;
use converter::ids::SequentialIds;
use converter::parse::DocumentNode;
use converter::transform::transform;

use helpers::*;

fn appearance_of(component: DocumentNode) -> Appearance {
    let root = modal_tree(component, node("Body"), vec![node("Content")]);
    let converted = transform(&root, &mut SequentialIds::new()).unwrap();
    converted.modal().unwrap().component.appearance.clone()
}

#[test]
fn size_is_rounded_to_whole_pixels() {
    let appearance = appearance_of(sized(node("Modal"), 119.6, 200.0));
    assert_eq!(appearance.width.custom, "120px");
    assert_eq!(appearance.height.custom, "200px");
}

#[test]
fn missing_bounding_box_is_zero() {
    let appearance = appearance_of(node("Modal"));
    assert_eq!(appearance.width.custom, "0px");
    assert_eq!(appearance.height.custom, "0px");
}

#[test]
fn radius_maps_to_token() {
    let cases = [
        (Some(2.0), "rounded-xxs"),
        (Some(4.0), "rounded-xs"),
        (Some(8.0), "rounded-md"),
        (Some(10.0), "rounded-3xl"),
        (Some(12.0), "rounded-5xl"),
        (Some(7.0), "rounded-none"),
        (Some(6.0), "rounded-none"),
        (None, "rounded-none"),
    ];
    for (radius, expected) in cases {
        let mut component = node("Modal");
        component.corner_radius = radius;
        let appearance = appearance_of(component);
        assert_eq!(appearance.styles.border_radius.all, expected, "radius {:?}", radius);
    }
}

#[test]
fn decimal_radius_text_matches_table() {
    let root: DocumentNode = serde_json::from_str(
        r#"{"name": "Modal", "children": [{"name": "Frame", "children": [
            {"name": "Modal", "cornerRadius": 4.0, "children": [{"name": "Body", "children": []}]}
        ]}]}"#,
    )
    .unwrap();
    let converted = transform(&root, &mut SequentialIds::new()).unwrap();
    let styles = &converted.modal().unwrap().component.appearance.styles;
    assert_eq!(styles.border_radius.all, "rounded-xs");
}

#[test]
fn border_color_is_fixed() {
    let mut component = sized(node("Modal"), 300.0, 100.0);
    component.corner_radius = Some(8.0);
    let appearance = appearance_of(component);
    assert_eq!(appearance.styles.border_color, "border-transparent");
}
