//! Drawing a tiling. Rendering happens in three full passes (bodies,
//! then outlines, then arcs) so strokes always sit on top of every
//! body. The cairo implementation writes PNG or PDF output.

use std::fs::File;
use std::path::Path;

use log::info;
use phf::phf_map;

use crate::config::TilingConfig;
use crate::errors::*;
use crate::geometry::*;
use crate::tiling::Tiling;
use crate::triangle::Color;

//////////////////////////////////////////////////////////////////////
// anything that can rasterize already computed geometry

pub trait DrawSurface {

    fn fill_polygon(&mut self, points: &[Point2d], color: Color) -> Result<()>;
    fn stroke_polyline(&mut self, points: &[Point2d], color: Color, width: f64) -> Result<()>;
    fn stroke_arc(&mut self, arc: &ArcGeometry, color: Color, width: f64) -> Result<()>;

}

pub fn render<S: DrawSurface>(surface: &mut S,
                              tiling: &Tiling,
                              line_width: f64) -> Result<()> {

    for body in tiling.bodies() {
        surface.fill_polygon(&body.points, body.fill)?;
    }

    for outline in tiling.outlines() {
        surface.stroke_polyline(&outline.points, outline.color, line_width)?;
    }

    for arc in tiling.arcs()? {
        surface.stroke_arc(&arc.geometry, arc.color, line_width)?;
    }

    Ok(())

}

//////////////////////////////////////////////////////////////////////
// cairo surface

impl DrawSurface for cairo::Context {

    fn fill_polygon(&mut self, points: &[Point2d], color: Color) -> Result<()> {

        let c = color.rgb();

        self.new_path();

        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                self.move_to(p.x, p.y);
            } else {
                self.line_to(p.x, p.y);
            }
        }

        self.close_path();
        self.set_source_rgb(c[0], c[1], c[2]);
        self.fill_preserve();

        // hairline in the fill color hides seams between neighbors
        self.set_line_width(1.0);
        self.stroke();

        Ok(())

    }

    fn stroke_polyline(&mut self, points: &[Point2d], color: Color, width: f64) -> Result<()> {

        let c = color.rgb();

        self.new_path();

        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                self.move_to(p.x, p.y);
            } else {
                self.line_to(p.x, p.y);
            }
        }

        self.set_source_rgb(c[0], c[1], c[2]);
        self.set_line_width(width);
        self.stroke();

        Ok(())

    }

    // cairo angles grow from +x towards +y just like angle_of, so a
    // positive sweep is drawn with arc() and a negative one with
    // arc_negative()
    fn stroke_arc(&mut self, arc: &ArcGeometry, color: Color, width: f64) -> Result<()> {

        let c = color.rgb();
        let center = arc.center();
        let start = arc.start_angle * DEG;
        let end = arc.end_angle() * DEG;

        self.new_path();

        if arc.sweep_angle >= 0.0 {
            self.arc(center.x, center.y, arc.radius(), start, end);
        } else {
            self.arc_negative(center.x, center.y, arc.radius(), start, end);
        }

        self.set_source_rgb(c[0], c[1], c[2]);
        self.set_line_width(width);
        self.stroke();

        Ok(())

    }

}

fn paint_background(ctx: &cairo::Context) {

    let c = Color::Black.rgb();

    ctx.set_source_rgb(c[0], c[1], c[2]);
    ctx.paint();

}

//////////////////////////////////////////////////////////////////////
// output files

#[derive(Debug, PartialEq, Clone, Copy)]
enum OutputFormat {
    Png,
    Pdf
}

static FORMAT_LOOKUP: phf::Map<&'static str, OutputFormat> = phf_map! {
    "png" => OutputFormat::Png,
    "pdf" => OutputFormat::Pdf,
};

fn output_format(filename: &str) -> Result<OutputFormat> {

    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref().and_then(|e| FORMAT_LOOKUP.get(e)) {
        Some(&format) => Ok(format),
        None => bail!(ErrorKind::Config(
            format!("can't tell output format of {:}, use .png or .pdf", filename)))
    }

}

pub fn write_png(tiling: &Tiling,
                 viewport: Vec2d,
                 line_width: f64,
                 filename: &str) -> Result<()> {

    let surface = cairo::ImageSurface::create(
        cairo::Format::Rgb24,
        viewport.x.ceil() as i32,
        viewport.y.ceil() as i32)?;

    let mut ctx = cairo::Context::new(&surface);

    paint_background(&ctx);
    render(&mut ctx, tiling, line_width)?;

    let mut file = File::create(filename).chain_err(|| format!("creating {:}", filename))?;

    surface.write_to_png(&mut file).map_err(|e| -> Error {
        match e {
            cairo::IoError::Io(e) => e.into(),
            cairo::IoError::Cairo(e) => e.into()
        }
    })?;

    Ok(())

}

pub fn write_pdf(tiling: &Tiling,
                 viewport: Vec2d,
                 line_width: f64,
                 filename: &str) -> Result<()> {

    let surface = cairo::PdfSurface::new(viewport.x, viewport.y, filename)?;

    let mut ctx = cairo::Context::new(&surface);

    paint_background(&ctx);
    render(&mut ctx, tiling, line_width)?;

    ctx.show_page();

    Ok(())

}

pub fn write_output(tiling: &Tiling, config: &TilingConfig) -> Result<()> {

    let filename = config.output();
    let viewport = config.viewport()?;

    match output_format(filename)? {
        OutputFormat::Png => write_png(tiling, viewport, config.line_width(), filename)?,
        OutputFormat::Pdf => write_pdf(tiling, viewport, config.line_width(), filename)?
    }

    info!("wrote {:} ({:} triangles at depth {:})",
          filename, tiling.len(), tiling.depth());

    Ok(())

}

//////////////////////////////////////////////////////////////////////
