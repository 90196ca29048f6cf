//! Settings for a tiling run, read from a keyword file:
//!
//! ```text
//! # comments run to end of line
//! viewport 750 750
//! depth 3
//! radius half_width        # or: radius diagonal / radius_length 300
//! line_width 2
//! output sun.pdf
//! actions grow grow shrink
//! ```
//!
//! Every keyword may appear at most once and every field has a
//! default, so an empty file (or no file) is fine.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use phf::phf_map;

use crate::errors::*;
use crate::geometry::*;
use crate::tiling::Action;

//////////////////////////////////////////////////////////////////////
// defaults

pub const DEFAULT_VIEWPORT: (f64, f64) = (750.0, 750.0);
pub const DEFAULT_DEPTH: i64 = 3;
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
pub const DEFAULT_OUTPUT: &str = "penrose.png";

//////////////////////////////////////////////////////////////////////
// how the seed radius is derived from the viewport; the two
// conventions are never mixed

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SeedRadius {
    HalfWidth,    // width / 2, the whole sun is visible
    Diagonal,     // sqrt(width^2 + height^2), the sun overfills the view
    Length(f64)   // explicit length in output units
}

impl Default for SeedRadius {
    fn default() -> Self { Self::HalfWidth }
}

// define some lookup tables matching strings to enumerations
static RADIUS_LOOKUP: phf::Map<&'static str, SeedRadius> = phf_map! {
    "half_width" => SeedRadius::HalfWidth,
    "diagonal" => SeedRadius::Diagonal,
};

static ACTION_LOOKUP: phf::Map<&'static str, Action> = phf_map! {
    "grow" => Action::Grow,
    "shrink" => Action::Shrink,
};

//////////////////////////////////////////////////////////////////////
// overengineered macro for parsing config lines

macro_rules! parse_tokens {

    // finalizer - no more input to match, just error if remaining
    // input or return collected outputs
    ($it:ident { } -> { $($tuple:ident,)* } ) => (
        match $it.next() {
            Some(value) => Err(format!("found extra token(s) starting with \"{:}\"", value)),
            None => Ok(($($tuple),*))
        }
    );

    // string map
    ($it:ident { $name:ident from $map:expr, $($ts:tt)* } -> { $($tuple:ident,)* } ) => (
        match $it.next() {
            None => Err(format!("missing token for {:}", stringify!($name)) ),
            Some(&value) => {
                if let Some(&k) = $map.get(value) {
                    let $name = k;
                    parse_tokens!( $it { $($ts)* } -> { $($tuple,)* $name, } )
                } else {
                    let mut extended: Vec<&str> = Vec::new();
                    extended.extend($map.keys());
                    extended.sort();
                    Err(format!("unexpected value \"{:}\" for {:}, expected one of: {{\"{:}\"}}",
                                value, stringify!($name), extended.join("\", \"") ))
                }
            }
        }
    );

    // name, type pair
    ($it:ident { $name:ident : $type:ident, $($ts:tt)* } -> { $($tuple:ident,)* } ) => (
        match $it.next() {
            None => Err(format!("missing token for {:}", stringify!($name)) ),
            Some(value) => if let Ok($name) = value.parse::<$type>() {
                parse_tokens!( $it { $($ts)* } -> { $($tuple,)* $name, } )
            } else {
                Err(format!("error parsing {:} as type {:}",
                            value, stringify!($type)))
            }
        }
    );

    // Entry point
    ($a:expr, { $($ts:tt)+ }) => (
        {
            let mut it = $a.iter();
            parse_tokens!( it { $($ts)* , } -> { } )
        }
    );

}

//////////////////////////////////////////////////////////////////////
// refuse to set a field twice

macro_rules! copy_field {

    ($dst:ident, $src:ident, $field:ident) => (
        if $src.$field.is_some() {
            if $dst.$field.is_some() {
                bail!("{:} is already set", stringify!($field));
            }
            $dst.$field = $src.$field;
        }
    )

}

//////////////////////////////////////////////////////////////////////

fn parse_actions(tokens: &[&str]) -> Result<Vec<Action>> {

    let mut rval = Vec::new();

    for value in tokens {
        match ACTION_LOOKUP.get(*value) {
            Some(&action) => rval.push(action),
            None => bail!("invalid action: {:}", value)
        }
    }

    Ok(rval)

}

fn check_positive(what: &str, value: f64) -> Result<f64> {

    if !(value > 0.0) || !value.is_finite() {
        bail!(ErrorKind::Config(format!("{:} must be positive, got {:}", what, value)));
    }

    Ok(value)

}

fn check_depth(depth: i64) -> Result<usize> {

    if depth <= 0 {
        bail!(ErrorKind::Config(format!("initial depth must be at least 1, got {:}", depth)));
    }

    Ok(depth as usize)

}

//////////////////////////////////////////////////////////////////////
// unset fields are None and fall back to defaults

#[derive(Debug, Default, PartialEq, Clone)]
pub struct TilingConfig {
    pub viewport: Option<Vec2d>,     // canvas width, height
    pub depth: Option<i64>,          // initial recursion depth
    pub radius: Option<SeedRadius>,  // seed radius convention
    pub line_width: Option<f64>,     // stroke width for outlines and arcs
    pub output: Option<String>,      // .png or .pdf
    pub actions: Option<Vec<Action>> // replayed after the initial build
}

impl TilingConfig {

    pub fn new() -> TilingConfig {
        Default::default()
    }

    fn update(&mut self, other: TilingConfig) -> Result<()> {

        copy_field!(self, other, viewport);
        copy_field!(self, other, depth);
        copy_field!(self, other, radius);
        copy_field!(self, other, line_width);
        copy_field!(self, other, output);
        copy_field!(self, other, actions);

        Ok(())

    }

    fn parse_keyword(keyword: &str, rest: &[&str]) -> Result<TilingConfig> {

        let mut update = TilingConfig::new();

        match keyword {

            "viewport" => {

                let (width, height) = parse_tokens!(rest, { width: f64, height: f64 })?;

                check_positive("viewport width", width)?;
                check_positive("viewport height", height)?;

                update.viewport = Some(Vec2d::new(width, height));

            },

            "depth" => {

                let depth = parse_tokens!(rest, { depth: i64 })?;

                check_depth(depth)?;

                update.depth = Some(depth);

            },

            "radius" => {

                let convention = parse_tokens!(rest, { convention from RADIUS_LOOKUP })?;

                update.radius = Some(convention);

            },

            "radius_length" => {

                let length = parse_tokens!(rest, { length: f64 })?;

                check_positive("seed radius", length)?;

                update.radius = Some(SeedRadius::Length(length));

            },

            "line_width" => {

                let width = parse_tokens!(rest, { width: f64 })?;

                check_positive("line width", width)?;

                update.line_width = Some(width);

            },

            "output" => {

                let filename = parse_tokens!(rest, { filename: String })?;

                update.output = Some(filename);

            },

            "actions" => {

                update.actions = Some(parse_actions(rest)?);

            },

            _ => {
                bail!("unrecognized keyword");
            }

        };

        Ok(update)

    }

    fn update_from(&mut self, line: &str) -> Result<()> {

        let mut trimmed = line.trim();

        if let Some(pos) = trimmed.find('#') {
            trimmed = &trimmed[0..pos];
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();

        if tokens.is_empty() {
            return Ok(());
        }

        let keyword = tokens[0];
        let rest = &tokens[1..];

        let update = Self::parse_keyword(keyword, rest).chain_err(
            || format!("while parsing keyword {:}", keyword))?;

        self.update(update)

    }

    pub fn parse(filename: &str, istr: &mut impl BufRead) -> Result<TilingConfig> {

        let mut config = TilingConfig::new();
        let mut lineno = 0;

        loop {

            let mut line = String::new();

            lineno += 1;

            let len = istr.read_line(&mut line).chain_err(|| format!("{:}:{:}: read error", filename, lineno))?;

            if len == 0 {
                break;
            }

            config.update_from(line.as_str()).chain_err(|| format!("{:}:{:}: parse error", filename, lineno))?;

        }

        Ok(config)

    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<TilingConfig> {

        let path = path.as_ref();
        let filename = path.to_string_lossy();

        let f = File::open(path).chain_err(|| format!("opening {:}", filename))?;
        let mut reader = BufReader::new(f);

        Self::parse(&filename, &mut reader)

    }

    //////////////////////////////////////////////////
    // resolved values

    pub fn viewport(&self) -> Result<Vec2d> {

        let v = self.viewport.unwrap_or_else(
            || Vec2d::new(DEFAULT_VIEWPORT.0, DEFAULT_VIEWPORT.1));

        check_positive("viewport width", v.x)?;
        check_positive("viewport height", v.y)?;

        Ok(v)

    }

    pub fn center(&self) -> Result<Point2d> {
        Ok(Point2d::origin() + 0.5*self.viewport()?)
    }

    pub fn initial_depth(&self) -> Result<usize> {
        check_depth(self.depth.unwrap_or(DEFAULT_DEPTH))
    }

    pub fn seed_radius(&self) -> Result<f64> {

        let v = self.viewport()?;

        let radius = match self.radius.unwrap_or_default() {
            SeedRadius::HalfWidth => 0.5*v.x,
            SeedRadius::Diagonal => v.norm(),
            SeedRadius::Length(length) => length
        };

        check_positive("seed radius", radius)

    }

    pub fn line_width(&self) -> f64 {
        self.line_width.unwrap_or(DEFAULT_LINE_WIDTH)
    }

    pub fn output(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    pub fn actions(&self) -> &[Action] {
        self.actions.as_deref().unwrap_or(&[])
    }

}

//////////////////////////////////////////////////////////////////////
