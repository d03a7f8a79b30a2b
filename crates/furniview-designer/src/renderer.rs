//! 2D layout renderer
//!
//! Projects a design into a [`DisplayList`] of draw commands and rasterizes
//! that list into an image buffer using tiny-skia.
//!
//! Room geometry is emitted in scene units (1 unit = 1 cm) relative to the
//! room's top-left corner. One combined scale + translate transform, derived
//! from the viewport, maps scene units to canvas pixels. Rendering never
//! mutates the design.

use std::cell::Cell;
use std::rc::Rc;

use furniview_core::constants::{GRID_SPACING_UNITS, SLAB_THICKNESS_UNITS};
use furniview_core::units::format_footprint;
use furniview_core::{meters_to_units, Design, FurnitureId, Point, Rgba, Room, RoomShape};
use image::{Rgb, RgbImage};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};
use tracing::{trace, warn};

use crate::viewport::Viewport;

/// Text shown when there is nothing to draw.
pub const PLACEHOLDER_TEXT: &str = "No design loaded";

const GRID_COLOR: Rgba = Rgba::rgba(200, 200, 200, 100);
const LABEL_BACKGROUND: Rgba = Rgba::rgba(255, 255, 255, 200);
const SELECTION_COLOR: Rgba = Rgba::rgb(255, 235, 59);
const BACKGROUND: Rgba = Rgba::WHITE;

/// Scale + translate mapping scene units to canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ViewTransform {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }

    /// Transform for a room under the given viewport.
    ///
    /// ```text
    /// pixel = scene * zoom + room_top_left + pan
    /// ```
    pub fn for_room(viewport: &Viewport, design: &Design) -> Self {
        let origin = viewport.room_top_left(design.room());
        Self {
            scale: viewport.zoom(),
            translate_x: origin.x + f64::from(viewport.pan_x()),
            translate_y: origin.y + f64::from(viewport.pan_y()),
        }
    }

    /// Maps a scene-unit point to pixels.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale + self.translate_x,
            p.y * self.scale + self.translate_y,
        )
    }

    fn to_skia(self) -> Transform {
        Transform::from_row(
            self.scale as f32,
            0.0,
            0.0,
            self.scale as f32,
            self.translate_x as f32,
            self.translate_y as f32,
        )
    }
}

/// One draw command. Coordinates are in the display list's scene space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle, rotated by `rotation` degrees about its centre.
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotation: f64,
        color: Rgba,
    },
    /// Rectangle outline; `line_width` is in pixels.
    StrokeRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotation: f64,
        color: Rgba,
        line_width: f64,
    },
    /// Straight line; `line_width` is in pixels.
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        line_width: f64,
    },
    /// Text anchored at its baseline start. Positioned only; the rasterizer
    /// does not draw glyphs.
    Text {
        at: Point,
        text: String,
        size: f32,
        color: Rgba,
    },
}

/// Draw commands in paint order plus the transform that places them.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    pub transform: ViewTransform,
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    fn new(transform: ViewTransform) -> Self {
        Self {
            transform,
            commands: Vec::new(),
        }
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// All text items, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn is_placeholder(&self) -> bool {
        self.texts().any(|t| t == PLACEHOLDER_TEXT)
    }
}

/// Shared repaint request flag.
///
/// Controllers hold clones and call [`RepaintHandle::request`] after a
/// change; the host polls [`RepaintHandle::take`] before drawing.
#[derive(Debug, Clone, Default)]
pub struct RepaintHandle {
    pending: Rc<Cell<bool>>,
    requests: Rc<Cell<u64>>,
}

impl RepaintHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.pending.set(true);
        self.requests.set(self.requests.get() + 1);
    }

    /// Returns whether a repaint was pending and clears the flag.
    pub fn take(&self) -> bool {
        self.pending.replace(false)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Total repaint requests since creation.
    pub fn request_count(&self) -> u64 {
        self.requests.get()
    }
}

/// 2D renderer state: overlay toggles and the repaint handle.
#[derive(Debug, Clone)]
pub struct Renderer2D {
    show_grid: bool,
    show_labels: bool,
    repaint: RepaintHandle,
}

impl Default for Renderer2D {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl Renderer2D {
    pub fn new(show_grid: bool, show_labels: bool) -> Self {
        Self {
            show_grid,
            show_labels,
            repaint: RepaintHandle::new(),
        }
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
        self.repaint.request();
    }

    pub fn toggle_labels(&mut self) {
        self.show_labels = !self.show_labels;
        self.repaint.request();
    }

    pub fn repaint_handle(&self) -> RepaintHandle {
        self.repaint.clone()
    }

    pub fn request_repaint(&self) {
        self.repaint.request();
    }

    /// Build the draw commands for a design under a viewport.
    ///
    /// A missing design or a room with a non-positive dimension yields the
    /// placeholder list.
    pub fn build_display_list(
        &self,
        design: Option<&Design>,
        viewport: &Viewport,
        selected: Option<FurnitureId>,
    ) -> DisplayList {
        let Some(design) = design.filter(|d| d.room().has_valid_dimensions()) else {
            return placeholder(viewport);
        };

        let mut list = DisplayList::new(ViewTransform::for_room(viewport, design));
        self.push_room(&mut list, design);
        self.push_furniture(&mut list, design, selected);
        trace!("Built 2D display list with {} commands", list.commands.len());
        list
    }

    fn push_room(&self, list: &mut DisplayList, design: &Design) {
        let room = design.room();
        let scheme = &room.color_scheme;
        let width = meters_to_units(room.width);
        let height = meters_to_units(room.length);

        list.push(DrawCommand::FillRect {
            x: 0.0,
            y: 0.0,
            width,
            height,
            rotation: 0.0,
            color: scheme.floor,
        });

        if room.shape == RoomShape::LShaped {
            let ext_w = width / 3.0;
            let ext_h = height / 3.0;
            list.push(DrawCommand::FillRect {
                x: 0.0,
                y: height,
                width: ext_w,
                height: ext_h,
                rotation: 0.0,
                color: scheme.floor,
            });
            list.push(DrawCommand::StrokeRect {
                x: 0.0,
                y: height,
                width: ext_w,
                height: ext_h,
                rotation: 0.0,
                color: Rgba::BLACK,
                line_width: 2.0,
            });
        }

        list.push(DrawCommand::StrokeRect {
            x: 0.0,
            y: 0.0,
            width,
            height,
            rotation: 0.0,
            color: Rgba::BLACK,
            line_width: 2.0,
        });

        list.push(DrawCommand::FillRect {
            x: 0.0,
            y: height - SLAB_THICKNESS_UNITS,
            width,
            height: SLAB_THICKNESS_UNITS,
            rotation: 0.0,
            color: scheme.accent,
        });

        let grid_fits = Room::validate_dimensions(room.width, room.length, room.height).is_ok();
        if self.show_grid && !grid_fits {
            warn!("Room {} is out of range, skipping grid", room.id);
        }
        if self.show_grid && grid_fits {
            let mut x = 0.0;
            while x <= width {
                list.push(DrawCommand::Line {
                    from: Point::new(x, 0.0),
                    to: Point::new(x, height),
                    color: GRID_COLOR,
                    line_width: 1.0,
                });
                x += GRID_SPACING_UNITS;
            }
            let mut y = 0.0;
            while y <= height {
                list.push(DrawCommand::Line {
                    from: Point::new(0.0, y),
                    to: Point::new(width, y),
                    color: GRID_COLOR,
                    line_width: 1.0,
                });
                y += GRID_SPACING_UNITS;
            }
        }

        if self.show_labels {
            list.push(DrawCommand::Text {
                at: Point::new(10.0, 20.0),
                text: room.name.clone(),
                size: 14.0,
                color: Rgba::BLACK,
            });
            list.push(DrawCommand::Text {
                at: Point::new(10.0, 40.0),
                text: format_footprint(room.width, room.length),
                size: 12.0,
                color: Rgba::BLACK,
            });
        }
    }

    fn push_furniture(&self, list: &mut DisplayList, design: &Design, selected: Option<FurnitureId>) {
        for item in design.furniture() {
            let x = meters_to_units(item.pos_x);
            let y = meters_to_units(item.pos_y);
            let width = meters_to_units(item.width);
            let height = meters_to_units(item.length);

            list.push(DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                rotation: item.rotation,
                color: item.color,
            });
            list.push(DrawCommand::StrokeRect {
                x,
                y,
                width,
                height,
                rotation: item.rotation,
                color: Rgba::BLACK,
                line_width: 1.0,
            });

            if selected == Some(item.id) {
                list.push(DrawCommand::StrokeRect {
                    x,
                    y,
                    width,
                    height,
                    rotation: 0.0,
                    color: SELECTION_COLOR,
                    line_width: 2.0,
                });
            }

            if self.show_labels {
                // Rough label width: ~6 units per character at size 10.
                let label_width = item.name.chars().count() as f64 * 6.0 + 6.0;
                list.push(DrawCommand::FillRect {
                    x,
                    y: y - 20.0,
                    width: label_width,
                    height: 20.0,
                    rotation: 0.0,
                    color: LABEL_BACKGROUND,
                });
                list.push(DrawCommand::Text {
                    at: Point::new(x + 3.0, y - 5.0),
                    text: item.name.clone(),
                    size: 10.0,
                    color: Rgba::BLACK,
                });
            }
        }
    }
}

fn placeholder(viewport: &Viewport) -> DisplayList {
    let mut list = DisplayList::new(ViewTransform::identity());
    // Approximate centring: ~10 px per character at size 18.
    let text_width = PLACEHOLDER_TEXT.len() as f64 * 10.0;
    list.push(DrawCommand::Text {
        at: Point::new(
            (viewport.canvas_width() - text_width) / 2.0,
            viewport.canvas_height() / 2.0,
        ),
        text: PLACEHOLDER_TEXT.to_string(),
        size: 18.0,
        color: Rgba::LIGHT_GRAY,
    });
    list
}

fn skia_color(color: Rgba) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn paint_for(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = true;
    paint
}

/// Transform for a rect rotated about its own centre.
fn rect_transform(base: Transform, x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Transform {
    if rotation == 0.0 {
        return base;
    }
    let cx = (x + width / 2.0) as f32;
    let cy = (y + height / 2.0) as f32;
    base.pre_concat(Transform::from_rotate_at(rotation as f32, cx, cy))
}

/// Rasterize a display list onto a white canvas.
pub fn rasterize(list: &DisplayList, width: u32, height: u32) -> RgbImage {
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbImage::new(width, height);
    };
    pixmap.fill(skia_color(BACKGROUND));

    let transform = list.transform.to_skia();
    let scale = list.transform.scale.max(f64::EPSILON) as f32;

    for command in &list.commands {
        match command {
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                rotation,
                color,
            } => {
                if let Some(rect) = Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32) {
                    let path = PathBuilder::from_rect(rect);
                    let t = rect_transform(transform, *x, *y, *width, *height, *rotation);
                    pixmap.fill_path(&path, &paint_for(*color), FillRule::Winding, t, None);
                }
            }
            DrawCommand::StrokeRect {
                x,
                y,
                width,
                height,
                rotation,
                color,
                line_width,
            } => {
                if let Some(rect) = Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32) {
                    let path = PathBuilder::from_rect(rect);
                    let stroke = Stroke {
                        width: *line_width as f32 / scale,
                        ..Default::default()
                    };
                    let t = rect_transform(transform, *x, *y, *width, *height, *rotation);
                    pixmap.stroke_path(&path, &paint_for(*color), &stroke, t, None);
                }
            }
            DrawCommand::Line {
                from,
                to,
                color,
                line_width,
            } => {
                let mut pb = PathBuilder::new();
                pb.move_to(from.x as f32, from.y as f32);
                pb.line_to(to.x as f32, to.y as f32);
                if let Some(path) = pb.finish() {
                    let stroke = Stroke {
                        width: *line_width as f32 / scale,
                        ..Default::default()
                    };
                    pixmap.stroke_path(&path, &paint_for(*color), &stroke, transform, None);
                }
            }
            DrawCommand::Text { .. } => {}
        }
    }

    let data = pixmap.data();
    RgbImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}
