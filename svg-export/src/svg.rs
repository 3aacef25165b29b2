// A thin Rust wrapper over the handful of SVG tags the scene renderer
// emits, rendered to raw markup.

use std::fmt::Write;

pub type Params = std::collections::HashMap<String, String>;

const FAILED_STRING_WRITE: &str = "Failed to write into string.";

pub trait RenderTag: std::fmt::Debug {
    fn render(&self, buf: &mut String);
}

impl<T> RenderTag for Tag<T>
where
    T: Identifier + std::fmt::Debug,
{
    fn render(&self, buf: &mut String) {
        write!(buf, "<{}", self.kind.identifier()).expect(FAILED_STRING_WRITE);
        let mut keys: Vec<_> = self.parameters.keys().collect();
        keys.sort();
        for k in keys {
            write!(buf, " {}=\"{}\"", k, self.parameters[k]).expect(FAILED_STRING_WRITE);
        }
        if !self.style.is_empty() {
            write!(buf, " style=\"").expect(FAILED_STRING_WRITE);
            let mut keys: Vec<_> = self.style.keys().collect();
            keys.sort();
            for k in keys {
                write!(buf, "{}:{};", k, self.style[k]).expect(FAILED_STRING_WRITE);
            }
            write!(buf, "\"").expect(FAILED_STRING_WRITE);
        }
        if !self.closing {
            write!(buf, " /").expect(FAILED_STRING_WRITE);
        }
        write!(buf, ">").expect(FAILED_STRING_WRITE);
        for child in self.children.iter() {
            child.render(buf);
        }
        if self.closing {
            write!(buf, "</{}>", self.kind.identifier()).expect(FAILED_STRING_WRITE);
        }
    }
}

impl RenderTag for String {
    fn render(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

/// Render a root tag and everything below it to raw SVG markup.
pub fn render(svg_tag: &Tag<SVG>) -> String {
    let mut raw_svg = String::new();
    svg_tag.render(&mut raw_svg);
    raw_svg
}

#[derive(Debug)]
pub struct Tag<T>
where
    T: std::fmt::Debug,
{
    parameters: Params,
    style: Params,
    children: Vec<Box<dyn RenderTag>>,
    closing: bool,
    kind: T,
}

impl<T> Tag<T>
where
    T: std::fmt::Debug,
{
    pub fn add_child(&mut self, child: impl RenderTag + 'static) {
        self.children.push(Box::new(child));
    }
}

impl Tag<SVG> {
    pub fn new(width: u64, height: u64, style: Option<Params>) -> Self {
        let parameters = param_map(&[
            ("width", format!("{}", width)),
            ("height", format!("{}", height)),
            ("viewBox", format!("0 0 {} {}", width, height)),
            ("xmlns", "http://www.w3.org/2000/svg".to_string()),
        ]);
        Self {
            parameters,
            style: style.unwrap_or_default(),
            children: Vec::new(),
            closing: true,
            kind: SVG {},
        }
    }
}

impl Tag<Rect> {
    pub fn new(x: f64, y: f64, width: f64, height: f64, style: Option<Params>) -> Self {
        let parameters = param_map(&[
            ("x", format!("{}", x)),
            ("y", format!("{}", y)),
            ("width", format!("{}", width)),
            ("height", format!("{}", height)),
        ]);
        Self {
            parameters,
            style: style.unwrap_or_default(),
            children: Vec::new(),
            closing: false,
            kind: Rect {},
        }
    }
}

impl Tag<Line> {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, style: Option<Params>) -> Self {
        let parameters = param_map(&[
            ("x1", format!("{}", x1)),
            ("y1", format!("{}", y1)),
            ("x2", format!("{}", x2)),
            ("y2", format!("{}", y2)),
        ]);
        Self {
            parameters,
            style: style.unwrap_or_default(),
            children: Vec::new(),
            closing: false,
            kind: Line {},
        }
    }
}

impl Tag<Polygon> {
    pub fn new(points: impl IntoIterator<Item = (f64, f64)>, style: Option<Params>) -> Self {
        let mut raw_points = String::new();
        for (x, y) in points {
            write!(raw_points, "{},{} ", x, y).expect(FAILED_STRING_WRITE);
        }
        raw_points.pop();
        let parameters = param_map(&[("points", raw_points)]);
        Self {
            parameters,
            style: style.unwrap_or_default(),
            children: Vec::new(),
            closing: false,
            kind: Polygon {},
        }
    }
}

impl Tag<Text> {
    pub fn new(x: f64, y: f64, text: &str, style: Option<Params>) -> Self {
        let parameters = param_map(&[("x", format!("{}", x)), ("y", format!("{}", y))]);
        let mut res = Self {
            parameters,
            style: style.unwrap_or_default(),
            children: Vec::new(),
            closing: true,
            kind: Text {},
        };
        res.add_child(text.to_string());
        res
    }
}

fn param_map(items: &[(&str, String)]) -> Params {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

// ----------------------------------------------------------------------------
//
// SVG tag kinds and their str representation (`identifier`)
//
// ----------------------------------------------------------------------------

#[derive(Debug)]
pub struct SVG {}
#[derive(Debug)]
pub struct Rect {}
#[derive(Debug)]
pub struct Line {}
#[derive(Debug)]
pub struct Polygon {}
#[derive(Debug)]
pub struct Text {}

pub trait Identifier {
    fn identifier(&self) -> &'static str;
}

impl Identifier for SVG {
    fn identifier(&self) -> &'static str {
        "svg"
    }
}

impl Identifier for Rect {
    fn identifier(&self) -> &'static str {
        "rect"
    }
}

impl Identifier for Line {
    fn identifier(&self) -> &'static str {
        "line"
    }
}

impl Identifier for Polygon {
    fn identifier(&self) -> &'static str {
        "polygon"
    }
}

impl Identifier for Text {
    fn identifier(&self) -> &'static str {
        "text"
    }
}

pub fn opts(items: &[(&str, &str)]) -> Option<Params> {
    Some(
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_tags() {
        let mut svg = Tag::<SVG>::new(400, 300, None);
        svg.add_child(Tag::<Rect>::new(
            0.0,
            0.0,
            400.0,
            300.0,
            opts(&[("fill", "white")]),
        ));
        svg.add_child(Tag::<Text>::new(200.0, 150.0, "A(3, 4)", None));

        let raw = render(&svg);
        assert!(raw.starts_with("<svg"));
        assert!(raw.ends_with("</svg>"));
        assert!(raw.contains("<rect"));
        assert!(raw.contains("style=\"fill:white;\""));
        assert!(raw.contains(">A(3, 4)</text>"));
    }

    #[test]
    fn polygon_joins_points() {
        let tag = Tag::<Polygon>::new([(0.0, 0.0), (10.0, 0.0), (5.0, 5.0)], None);
        let mut raw = String::new();
        tag.render(&mut raw);
        assert!(raw.contains("points=\"0,0 10,0 5,5\""));
    }
}
