//! SVG document rendering and export

use std::path::Path;

use crate::algorithm::paths::PathGroup;
use crate::algorithm::pipeline::VectorImage;
use crate::io::configuration::SVG_NAMESPACE;
use crate::io::error::{ConversionError, Result};

fn render_path(group: &PathGroup) -> String {
    let opacity = group
        .opacity()
        .map_or_else(String::new, |o| format!(" opacity=\"{o}\""));
    format!(
        "<path d=\"{}\" fill=\"{}\"{opacity}/>",
        group.data,
        group.fill()
    )
}

/// Render the full SVG document
///
/// One `<path>` per color in first-seen order, lines joined with `\n` and no
/// trailing newline. An image with no shapes renders as an empty `<svg>`.
pub fn render_svg(image: &VectorImage) -> String {
    let mut lines = Vec::with_capacity(image.shapes.len() + 2);
    lines.push(format!(
        "<svg xmlns=\"{SVG_NAMESPACE}\" viewBox=\"0 0 {} {}\">",
        image.width, image.height
    ));
    lines.extend(image.path_groups().iter().map(render_path));
    lines.push("</svg>".to_string());
    lines.join("\n")
}

/// Render and write the SVG document to `output_path`
///
/// The document is rendered in full before the file is created, and the
/// parent directory is created when missing.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn write_svg<P: AsRef<Path>>(image: &VectorImage, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let document = render_svg(image);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ConversionError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(output_path, document).map_err(|e| ConversionError::SvgExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
