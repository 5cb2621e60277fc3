use crate::assets::ImageSource;
use crate::style::{
    Align, BoxStyle, FlexDirection, Justify, LengthSpec, Position, ResolvedStyle, Role,
    TextAlign, TextTransform,
};
use crate::types::{Pt, Size};
use base64::Engine;
use serde_json::{Map, Value, json};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
}

/// Renderer-ready description of the one-page sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentTree {
    pub info: DocumentInfo,
    pub page: Page,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub size: Size,
    pub role: Role,
    pub style: ResolvedStyle,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Section(Container),
    Row(Container),
    Column(Container),
    Text(TextLeaf),
    Image(ImageLeaf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub role: Role,
    pub style: ResolvedStyle,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLeaf {
    pub role: Role,
    pub style: ResolvedStyle,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageLeaf {
    pub role: Role,
    pub style: ResolvedStyle,
    pub source: ImageSource,
}

impl Node {
    pub fn role(&self) -> Role {
        match self {
            Node::Section(c) | Node::Row(c) | Node::Column(c) => c.role,
            Node::Text(leaf) => leaf.role,
            Node::Image(leaf) => leaf.role,
        }
    }

    pub fn style(&self) -> &ResolvedStyle {
        match self {
            Node::Section(c) | Node::Row(c) | Node::Column(c) => &c.style,
            Node::Text(leaf) => &leaf.style,
            Node::Image(leaf) => &leaf.style,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Section(c) | Node::Row(c) | Node::Column(c) => &c.children,
            Node::Text(_) | Node::Image(_) => &[],
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Node::Section(_) => "section",
            Node::Row(_) => "row",
            Node::Column(_) => "column",
            Node::Text(_) => "text",
            Node::Image(_) => "image",
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Text(leaf) => Some(&leaf.text),
            _ => None,
        }
    }

    /// Text of every leaf below (and including) this node, in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        walk_nodes(std::slice::from_ref(self), 0, &mut |node, _| {
            if let Some(text) = node.text() {
                out.push(text);
            }
        });
        out
    }

    pub fn find_all(&self, role: Role) -> Vec<&Node> {
        let mut out = Vec::new();
        walk_nodes(std::slice::from_ref(self), 0, &mut |node, _| {
            if node.role() == role {
                out.push(node);
            }
        });
        out
    }
}

fn walk_nodes<'a, F>(nodes: &'a [Node], depth: usize, visit: &mut F)
where
    F: FnMut(&'a Node, usize),
{
    for node in nodes {
        visit(node, depth);
        walk_nodes(node.children(), depth + 1, visit);
    }
}

impl ContentTree {
    /// Depth-first, document-order traversal of every node below the page.
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node, usize),
    {
        walk_nodes(&self.page.children, 1, &mut visit);
    }

    pub fn find_all(&self, role: Role) -> Vec<&Node> {
        let mut out = Vec::new();
        self.walk(|node, _| {
            if node.role() == role {
                out.push(node);
            }
        });
        out
    }

    pub fn find_first(&self, role: Role) -> Option<&Node> {
        self.find_all(role).into_iter().next()
    }

    pub fn texts(&self, role: Role) -> Vec<&str> {
        self.find_all(role)
            .into_iter()
            .filter_map(Node::text)
            .collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        let mut found = false;
        self.walk(|node, _| {
            if node.text().is_some_and(|text| text.contains(needle)) {
                found = true;
            }
        });
        found
    }

    /// Nodes including the page root.
    pub fn node_count(&self) -> usize {
        let mut count = 1;
        self.walk(|_, _| count += 1);
        count
    }

    /// Canonical JSON form. Lengths are integer millipoints and colours are
    /// hex strings so equal trees always serialize to equal bytes.
    pub fn to_json(&self) -> Value {
        json!({
            "info": {
                "title": self.info.title,
                "author": self.info.author,
            },
            "page": {
                "role": self.page.role.as_str(),
                "size": {
                    "width": self.page.size.width.to_milli_i64(),
                    "height": self.page.size.height.to_milli_i64(),
                },
                "style": style_json(&self.page.style),
                "children": self.page.children.iter().map(node_json).collect::<Vec<_>>(),
            },
        })
    }

    /// Hex SHA-256 of the canonical JSON form.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.to_json().to_string().as_bytes());
        let digest = hasher.finalize();
        let mut out = String::with_capacity(digest.len() * 2);
        for b in digest {
            use std::fmt::Write;
            let _ = write!(&mut out, "{:02x}", b);
        }
        out
    }
}

fn node_json(node: &Node) -> Value {
    let mut obj = Map::new();
    obj.insert("kind".into(), json!(node.kind()));
    obj.insert("role".into(), json!(node.role().as_str()));
    obj.insert("style".into(), style_json(node.style()));
    match node {
        Node::Section(c) | Node::Row(c) | Node::Column(c) => {
            obj.insert(
                "children".into(),
                Value::Array(c.children.iter().map(node_json).collect()),
            );
        }
        Node::Text(leaf) => {
            obj.insert("text".into(), json!(leaf.text));
        }
        Node::Image(leaf) => {
            obj.insert("source".into(), image_json(&leaf.source));
        }
    }
    Value::Object(obj)
}

fn image_json(source: &ImageSource) -> Value {
    match source {
        ImageSource::Url(url) => json!({ "url": url }),
        ImageSource::Placeholder => json!({ "url": source.url(), "placeholder": true }),
        ImageSource::Embedded { kind, data } => json!({
            "mime": kind.mime(),
            "base64": base64::engine::general_purpose::STANDARD.encode(data),
        }),
    }
}

fn style_json(style: &ResolvedStyle) -> Value {
    let layout = &style.layout;
    let text = &style.text;
    json!({
        "layout": layout_json(layout),
        "text": {
            "font": text.font_name,
            "size": text.font_size.to_milli_i64(),
            "weight": text.font_weight,
            "color": text.color.to_hex(),
            "alpha": milli(text.color.a),
            "align": match text.align {
                TextAlign::Left => "left",
                TextAlign::Center => "center",
                TextAlign::Right => "right",
            },
            "line_height": milli(text.line_height),
            "transform": match text.transform {
                TextTransform::None => "none",
                TextTransform::Uppercase => "uppercase",
            },
        },
    })
}

fn layout_json(layout: &BoxStyle) -> Value {
    let edges = |e: &crate::style::EdgeSizes| {
        json!([
            e.top.to_milli_i64(),
            e.right.to_milli_i64(),
            e.bottom.to_milli_i64(),
            e.left.to_milli_i64()
        ])
    };
    let position = match layout.position {
        Position::Flow => json!("flow"),
        Position::Absolute {
            top,
            right,
            bottom,
            left,
        } => {
            let side = |v: Option<Pt>| v.map(|v| v.to_milli_i64());
            json!({
                "top": side(top),
                "right": side(right),
                "bottom": side(bottom),
                "left": side(left),
            })
        }
    };
    json!({
        "width": length_json(layout.width),
        "height": length_json(layout.height),
        "min_height": length_json(layout.min_height),
        "margin": edges(&layout.margin),
        "padding": edges(&layout.padding),
        "direction": match layout.direction {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
        },
        "justify": match layout.justify {
            Justify::Start => "start",
            Justify::Center => "center",
            Justify::SpaceBetween => "space-between",
        },
        "align_items": align_str(layout.align_items),
        "align_self": layout.align_self.map(align_str),
        "wrap": layout.wrap,
        "grow": milli(layout.grow),
        "position": position,
        "background": layout.background.map(|c| json!({ "color": c.to_hex(), "alpha": milli(c.a) })),
        "border": layout.border.map(|b| json!({
            "widths": edges(&b.widths),
            "color": b.color.to_hex(),
            "alpha": milli(b.color.a),
        })),
        "radius": layout.border_radius.to_milli_i64(),
    })
}

fn length_json(length: LengthSpec) -> Value {
    match length {
        LengthSpec::Auto => json!("auto"),
        LengthSpec::Absolute(v) => json!({ "pt": v.to_milli_i64() }),
        LengthSpec::Percent(p) => json!({ "percent": milli(p) }),
    }
}

fn align_str(align: Align) -> &'static str {
    match align {
        Align::Stretch => "stretch",
        Align::Start => "start",
        Align::Center => "center",
        Align::End => "end",
    }
}

fn milli(value: f32) -> i64 {
    (value as f64 * 1000.0).round() as i64
}
