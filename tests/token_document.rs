#![recursion_limit = "256"]

use chrono::{TimeZone, Utc};
use ftk_lib::figma::api_types::PublishedStyle;
use ftk_lib::{build_token_document, extract_screen, FigmaFile, FigmaNode};
use serde_json::{json, Value};

fn fixture() -> FigmaFile {
    serde_json::from_value(json!({
        "name": "Design System",
        "document": {
            "id": "0:0",
            "type": "DOCUMENT",
            "children": [{
                "id": "1:1",
                "name": "Page",
                "type": "CANVAS",
                "children": [
                    {
                        "id": "2:1",
                        "name": "Primary Button",
                        "type": "FRAME",
                        "layoutMode": "HORIZONTAL",
                        "paddingLeft": 16, "paddingRight": 16,
                        "paddingTop": 8, "paddingBottom": 8,
                        "itemSpacing": 8,
                        "cornerRadius": 8,
                        "absoluteBoundingBox": { "x": 0, "y": 0, "width": 120.4, "height": 40 },
                        "styles": { "fill": "S:fill" },
                        "fills": [{ "type": "SOLID", "color": { "r": 0.4, "g": 0.2, "b": 0.8, "a": 1 } }],
                        "effects": [{
                            "type": "DROP_SHADOW",
                            "color": { "r": 0, "g": 0, "b": 0, "a": 0.25 },
                            "offset": { "x": 0, "y": 4 },
                            "radius": 8
                        }],
                        "children": [{
                            "id": "2:2",
                            "name": "Label",
                            "type": "TEXT",
                            "characters": "Go",
                            "style": {
                                "fontFamily": "Inter",
                                "fontSize": 16,
                                "fontWeight": 600,
                                "lineHeightPx": 24
                            },
                            "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1 } }]
                        }]
                    },
                    {
                        "id": "3:1",
                        "name": "Search Icon",
                        "type": "VECTOR",
                        "absoluteBoundingBox": { "x": 0, "y": 0, "width": 24, "height": 24 }
                    },
                    {
                        "id": "4:1",
                        "name": "Hero",
                        "type": "RECTANGLE",
                        "fills": [{
                            "type": "GRADIENT_LINEAR",
                            "gradientStops": [
                                { "position": 0, "color": { "r": 1, "g": 0, "b": 0, "a": 1 } },
                                { "position": 1, "color": { "r": 0, "g": 0, "b": 1, "a": 0.5 } }
                            ],
                            "gradientHandlePositions": [
                                { "x": 0, "y": 0.5 }, { "x": 1, "y": 0.5 }, { "x": 0, "y": 1 }
                            ]
                        }]
                    }
                ]
            }]
        },
        "styles": {
            "S:fill": { "key": "k-fill", "name": "Brand/Primary", "styleType": "FILL" }
        }
    }))
    .expect("fixture")
}

fn published() -> Vec<PublishedStyle> {
    serde_json::from_value(json!([
        { "key": "k-fill", "node_id": "S:fill", "name": "Brand/Primary", "style_type": "FILL" }
    ]))
    .expect("published styles")
}

fn document_json() -> Value {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let doc = build_token_document(&fixture(), &published(), "FILE", at);
    serde_json::to_value(&doc).expect("serialize")
}

#[test]
fn document_sections_are_written_in_order() {
    let value = document_json();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(
        keys,
        [
            "colors",
            "typography",
            "effects",
            "spacing",
            "borderRadius",
            "dimensions",
            "gradients",
            "metadata"
        ]
    );
}

#[test]
fn styled_and_unstyled_colors_are_keyed_differently() {
    let value = document_json();

    assert_eq!(value["colors"]["Brand/Primary"]["value"], "#6633cc");
    assert_eq!(value["colors"]["Brand/Primary"]["opacity"], 1);
    assert_eq!(value["colors"]["#ffffff"]["type"], "SOLID");
}

#[test]
fn typography_and_effects_use_synthesized_keys() {
    let value = document_json();

    let text = &value["typography"]["text-16-600"];
    assert_eq!(text["fontFamily"], "Inter");
    assert_eq!(text["lineHeight"], "24px");

    let shadow = &value["effects"]["shadow-8"][0];
    assert_eq!(shadow["type"], "DROP_SHADOW");
    assert_eq!(shadow["offset"], json!({ "x": 0, "y": 4 }));
    assert_eq!(shadow["color"], "rgba(0, 0, 0, 0.25)");
}

#[test]
fn scales_and_dimensions_reflect_the_tree() {
    let value = document_json();

    assert_eq!(value["spacing"]["values"], json!([8, 16]));
    assert_eq!(value["borderRadius"]["values"], json!([8]));
    assert_eq!(value["dimensions"]["buttons"]["widths"], json!([120.4]));
    assert_eq!(value["dimensions"]["buttons"]["heights"], json!([40]));
    assert_eq!(value["dimensions"]["icons"]["sizes"], json!([24]));
}

#[test]
fn gradients_keep_stops_and_handles() {
    let value = document_json();
    let hero = &value["gradients"]["Hero"];

    assert_eq!(hero["type"], "GRADIENT_LINEAR");
    assert_eq!(hero["stops"][0]["color"], "#ff0000");
    assert_eq!(hero["stops"][1]["color"], "rgba(0, 0, 255, 0.5)");
    assert_eq!(hero["handles"].as_array().unwrap().len(), 3);
}

#[test]
fn metadata_records_key_count_and_timestamp() {
    let value = document_json();

    assert_eq!(
        value["metadata"],
        json!({
            "extractedAt": "2024-05-01T12:00:00.000Z",
            "fileKey": "FILE",
            "styleCount": 1
        })
    );
}

#[test]
fn screen_export_keeps_layout_and_children() {
    let file = fixture();
    let button: &FigmaNode = &file.document.children[0].children[0];
    let value = serde_json::to_value(extract_screen(button)).expect("serialize");

    assert_eq!(value["name"], "Primary Button");
    assert_eq!(value["layout"]["mode"], "HORIZONTAL");
    assert_eq!(value["layout"]["gap"], 8);
    assert_eq!(value["children"][0]["text"]["content"], "Go");
}
