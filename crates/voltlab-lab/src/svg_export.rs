//! SVG rendering of a session [`Snapshot`].
//!
//! Layers are drawn back to front: background and grid lines, committed
//! wires, the live wire preview, then components with their terminals on top.

use std::path::Path;

use anyhow::{Context, Result};
use svg::node::element::{Circle, Group, Line, Path as SvgPath, Rectangle, Text};
use svg::Document;

use crate::snapshot::{ComponentView, PreviewView, Snapshot, WireView};

const GRID_LINE_COLOR: &str = "#2A2A2A";
const TERMINAL_COLOR: &str = "#E5E7EB";
const HOVER_COLOR: &str = "#FBBF24";
const SELECTION_COLOR: &str = "#3B82F6";

/// Builds the SVG document for `snapshot`.
pub fn render(snapshot: &Snapshot) -> Document {
    let width = snapshot.pixel_width();
    let height = snapshot.pixel_height();

    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height));

    document = document.add(background(snapshot));

    for wire in &snapshot.wires {
        document = document.add(wire_group(wire));
    }

    if let Some(preview) = &snapshot.preview {
        document = document.add(preview_path(preview));
    }

    for component in &snapshot.components {
        document = document.add(component_group(component, snapshot.cell_size));
    }

    if let Some(hovered) = &snapshot.hovered {
        let center = hovered.position.to_pixel(snapshot.cell_size);
        document = document.add(
            Circle::new()
                .set("class", "hover")
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", snapshot.cell_size * 0.15)
                .set("fill", "none")
                .set("stroke", HOVER_COLOR)
                .set("stroke-width", 2),
        );
    }

    document
}

/// Renders `snapshot` and writes it to `output_path`.
pub fn save(snapshot: &Snapshot, output_path: &Path) -> Result<()> {
    let document = render(snapshot);
    svg::save(output_path, &document)
        .with_context(|| format!("Failed to save SVG to {}", output_path.display()))?;
    Ok(())
}

fn background(snapshot: &Snapshot) -> Group {
    let width = snapshot.pixel_width();
    let height = snapshot.pixel_height();
    let mut group = Group::new().set("class", "grid").add(
        Rectangle::new()
            .set("width", width)
            .set("height", height)
            .set("fill", snapshot.background.as_str()),
    );

    for x in 1..snapshot.width {
        let px = x as f64 * snapshot.cell_size;
        group = group.add(grid_line(px, 0.0, px, height));
    }
    for y in 1..snapshot.height {
        let py = y as f64 * snapshot.cell_size;
        group = group.add(grid_line(0.0, py, width, py));
    }
    group
}

fn grid_line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", GRID_LINE_COLOR)
        .set("stroke-width", 1)
}

fn wire_group(wire: &WireView) -> Group {
    let data = wire.drawable.to_svg_data();
    let shadow = SvgPath::new()
        .set("d", data.clone())
        .set("fill", "none")
        .set("stroke", "#000000")
        .set("stroke-opacity", 0.35)
        .set("stroke-width", 6)
        .set("stroke-linecap", "round")
        .set("stroke-linejoin", "round");
    let stroke = SvgPath::new()
        .set("d", data)
        .set("fill", "none")
        .set("stroke", wire.color.as_str())
        .set("stroke-width", if wire.selected { 4 } else { 3 })
        .set("stroke-linecap", "round")
        .set("stroke-linejoin", "round");

    Group::new()
        .set("class", "wire")
        .set("id", wire.id.to_string())
        .add(shadow)
        .add(stroke)
}

fn preview_path(preview: &PreviewView) -> SvgPath {
    SvgPath::new()
        .set("class", "preview")
        .set("d", preview.drawable.to_svg_data())
        .set("fill", "none")
        .set("stroke", preview.color.as_str())
        .set("stroke-width", 2)
        .set("stroke-dasharray", "6,4")
        .set("opacity", 0.8)
}

fn component_group(view: &ComponentView, cell_size: f64) -> Group {
    let center = view.component.position.center().to_pixel(cell_size);
    let body = cell_size * 0.8;

    // The body is drawn around the origin and rotated into place so that it
    // lines up with the rotated terminals.
    let mut rect = Rectangle::new()
        .set("x", -body / 2.0)
        .set("y", -body / 2.0)
        .set("width", body)
        .set("height", body)
        .set("rx", cell_size * 0.1)
        .set("fill", view.color)
        .set("fill-opacity", 0.85);
    if view.selected {
        rect = rect
            .set("stroke", SELECTION_COLOR)
            .set("stroke-width", 2);
    }

    let body_group = Group::new()
        .set(
            "transform",
            format!(
                "translate({} {}) rotate({})",
                center.x,
                center.y,
                view.component.rotation.degrees()
            ),
        )
        .add(rect);

    let label = Text::new()
        .set("x", center.x)
        .set("y", center.y + cell_size * 0.12)
        .set("font-size", cell_size * 0.3)
        .set("font-family", "sans-serif")
        .set("text-anchor", "middle")
        .set("fill", "#FFFFFF")
        .add(svg::node::Text::new(short_label(view.label)));

    let mut group = Group::new()
        .set("class", "component")
        .set("id", view.component.id.to_string())
        .set("data-kind", view.component.kind.as_str())
        .add(body_group)
        .add(label);

    for terminal in &view.terminals {
        group = group.add(
            Circle::new()
                .set("cx", terminal.pixel.x)
                .set("cy", terminal.pixel.y)
                .set("r", cell_size * 0.08)
                .set("fill", TERMINAL_COLOR),
        );
    }

    group
}

/// First word of a catalog label, e.g. `"NPN (BJT)"` becomes `"NPN"`.
fn short_label(label: &str) -> &str {
    label.split_whitespace().next().unwrap_or(label)
}
