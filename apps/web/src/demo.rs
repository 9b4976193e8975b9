//! Demo resume: a fixed single-page PDF used in place of a real upload.

use anyhow::{Context, Result};
use bytes::Bytes;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::extraction::Upload;

pub const DEMO_FILE_NAME: &str = "demo_resume.pdf";

/// The three lines printed on the demo page, top to bottom.
pub const DEMO_LINES: [&str; 3] = [
    "John Doe",
    "Software Engineer",
    "Skills: Python, SQL, Git, REST APIs",
];

// A4 in points, 10mm margin, 10mm line pitch.
const PAGE_WIDTH_PT: i64 = 595;
const PAGE_HEIGHT_PT: i64 = 842;
const MARGIN_PT: f32 = 28.35;
const LINE_PITCH_PT: f32 = 28.35;
const FONT_SIZE_PT: i64 = 12;

/// Builds the demo PDF. Output is byte-for-byte identical on every call.
pub fn generate_demo_resume() -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = Vec::with_capacity(DEMO_LINES.len() * 5);
    for (i, line) in DEMO_LINES.iter().enumerate() {
        // Baseline sits mid-cell, like a 10mm-high text cell.
        let baseline = PAGE_HEIGHT_PT as f32 - MARGIN_PT - LINE_PITCH_PT * (i as f32 + 0.5);
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), FONT_SIZE_PT.into()]));
        operations.push(Operation::new("Td", vec![MARGIN_PT.into(), baseline.into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("ET", vec![]));
    }
    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().context("Failed to encode demo page content")?,
    ));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH_PT.into(), PAGE_HEIGHT_PT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf)
        .context("Failed to serialize demo resume")?;
    Ok(buf)
}

/// Wraps the demo PDF as if the user had uploaded it.
pub fn demo_upload() -> Result<Upload> {
    Ok(Upload {
        file_name: Some(DEMO_FILE_NAME.to_string()),
        content_type: Some("application/pdf".to_string()),
        bytes: Bytes::from(generate_demo_resume()?),
    })
}
