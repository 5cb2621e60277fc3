use crate::error::SheetError;
use crate::types::{Color, Pt};
use std::collections::BTreeMap;

pub const ACCENT: Color = Color::rgb8(0x36, 0xA0, 0x9C);
pub const SECONDARY: Color = Color::rgb8(0x33, 0x33, 0x33);
pub const LIGHT_GREY_BG: Color = Color::rgb8(0xF7, 0xF7, 0xF7);
pub const DARK_GREY_TEXT: Color = Color::rgb8(0x4A, 0x4A, 0x4A);
pub const MEDIUM_GREY_TEXT: Color = Color::rgb8(0x75, 0x75, 0x75);
pub const ECO_GREEN: Color = Color::rgb8(0x4C, 0xAF, 0x50);
pub const DIVIDER: Color = Color::rgb8(0xE0, 0xE0, 0xE0);

const REGULAR: &str = "Helvetica";
const BOLD: &str = "Helvetica-Bold";

/// Named visual identity of a node in the content tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Page,
    LeftBar,
    MainContent,
    HeaderSection,
    VehicleTitle,
    VehicleSubtitle,
    TopRow,
    PricingSection,
    SectionTitle,
    PricingGrid,
    PricingColumn,
    PricingHeaderMonths,
    PricingHeaderSubtext,
    PriceBox,
    PriceBoxKm,
    PriceBoxPrice,
    PriceBoxVat,
    ImagePanel,
    VehicleImage,
    EcoBadge,
    EcoBadgeText,
    EcoBadgeDetail,
    EcoBadgeDetailText,
    EcoBadgeDetailCaption,
    RequestModel,
    RequestModelText,
    EquipmentSection,
    EquipmentTitle,
    EquipmentList,
    EquipmentColumn,
    EquipmentItem,
    SpecsSection,
    SpecItem,
    SpecLabel,
    SpecValue,
    FooterSection,
    FooterContent,
    FooterConditions,
    FooterOptional,
    FooterTitle,
    FooterText,
    FooterBottom,
    FooterLogo,
    FooterDisclaimer,
}

impl Role {
    pub const ALL: [Role; 44] = [
        Role::Page,
        Role::LeftBar,
        Role::MainContent,
        Role::HeaderSection,
        Role::VehicleTitle,
        Role::VehicleSubtitle,
        Role::TopRow,
        Role::PricingSection,
        Role::SectionTitle,
        Role::PricingGrid,
        Role::PricingColumn,
        Role::PricingHeaderMonths,
        Role::PricingHeaderSubtext,
        Role::PriceBox,
        Role::PriceBoxKm,
        Role::PriceBoxPrice,
        Role::PriceBoxVat,
        Role::ImagePanel,
        Role::VehicleImage,
        Role::EcoBadge,
        Role::EcoBadgeText,
        Role::EcoBadgeDetail,
        Role::EcoBadgeDetailText,
        Role::EcoBadgeDetailCaption,
        Role::RequestModel,
        Role::RequestModelText,
        Role::EquipmentSection,
        Role::EquipmentTitle,
        Role::EquipmentList,
        Role::EquipmentColumn,
        Role::EquipmentItem,
        Role::SpecsSection,
        Role::SpecItem,
        Role::SpecLabel,
        Role::SpecValue,
        Role::FooterSection,
        Role::FooterContent,
        Role::FooterConditions,
        Role::FooterOptional,
        Role::FooterTitle,
        Role::FooterText,
        Role::FooterBottom,
        Role::FooterLogo,
        Role::FooterDisclaimer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Page => "page",
            Role::LeftBar => "left-bar",
            Role::MainContent => "main-content",
            Role::HeaderSection => "header-section",
            Role::VehicleTitle => "vehicle-title",
            Role::VehicleSubtitle => "vehicle-subtitle",
            Role::TopRow => "top-row",
            Role::PricingSection => "pricing-section",
            Role::SectionTitle => "section-title",
            Role::PricingGrid => "pricing-grid",
            Role::PricingColumn => "pricing-column",
            Role::PricingHeaderMonths => "pricing-header-months",
            Role::PricingHeaderSubtext => "pricing-header-subtext",
            Role::PriceBox => "price-box",
            Role::PriceBoxKm => "price-box-km",
            Role::PriceBoxPrice => "price-box-price",
            Role::PriceBoxVat => "price-box-vat",
            Role::ImagePanel => "image-panel",
            Role::VehicleImage => "vehicle-image",
            Role::EcoBadge => "eco-badge",
            Role::EcoBadgeText => "eco-badge-text",
            Role::EcoBadgeDetail => "eco-badge-detail",
            Role::EcoBadgeDetailText => "eco-badge-detail-text",
            Role::EcoBadgeDetailCaption => "eco-badge-detail-caption",
            Role::RequestModel => "request-model",
            Role::RequestModelText => "request-model-text",
            Role::EquipmentSection => "equipment-section",
            Role::EquipmentTitle => "equipment-title",
            Role::EquipmentList => "equipment-list",
            Role::EquipmentColumn => "equipment-column",
            Role::EquipmentItem => "equipment-item",
            Role::SpecsSection => "specs-section",
            Role::SpecItem => "spec-item",
            Role::SpecLabel => "spec-label",
            Role::SpecValue => "spec-value",
            Role::FooterSection => "footer-section",
            Role::FooterContent => "footer-content",
            Role::FooterConditions => "footer-conditions",
            Role::FooterOptional => "footer-optional",
            Role::FooterTitle => "footer-title",
            Role::FooterText => "footer-text",
            Role::FooterBottom => "footer-bottom",
            Role::FooterLogo => "footer-logo",
            Role::FooterDisclaimer => "footer-disclaimer",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = SheetError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == raw)
            .ok_or_else(|| SheetError::InvalidConfiguration(format!("unknown style role: {raw}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthSpec {
    Auto,
    Absolute(Pt),
    Percent(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSizes {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl EdgeSizes {
    pub fn zero() -> Self {
        Self::all(0.0)
    }

    pub fn all(value: f32) -> Self {
        Self::symmetric(value, value)
    }

    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: Pt::from_f32(vertical),
            right: Pt::from_f32(horizontal),
            bottom: Pt::from_f32(vertical),
            left: Pt::from_f32(horizontal),
        }
    }

    pub fn sides(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top: Pt::from_f32(top),
            right: Pt::from_f32(right),
            bottom: Pt::from_f32(bottom),
            left: Pt::from_f32(left),
        }
    }
}

impl Default for EdgeSizes {
    fn default() -> Self {
        Self::zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderSpec {
    pub widths: EdgeSizes,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Start,
    Center,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Stretch,
    Start,
    Center,
    End,
}

/// Placement of a box: in normal flow, anchored to page edges, or offset
/// from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    #[default]
    Flow,
    Absolute {
        top: Option<Pt>,
        right: Option<Pt>,
        bottom: Option<Pt>,
        left: Option<Pt>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
}

impl TextTransform {
    pub fn apply(&self, text: &str) -> String {
        match self {
            TextTransform::None => text.to_string(),
            TextTransform::Uppercase => text.to_uppercase(),
        }
    }
}

/// Box-level attributes of a role. These are not inherited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    pub width: LengthSpec,
    pub height: LengthSpec,
    pub min_height: LengthSpec,
    pub margin: EdgeSizes,
    pub padding: EdgeSizes,
    pub direction: FlexDirection,
    pub justify: Justify,
    pub align_items: Align,
    pub align_self: Option<Align>,
    pub wrap: bool,
    pub grow: f32,
    pub position: Position,
    pub background: Option<Color>,
    pub border: Option<BorderSpec>,
    pub border_radius: Pt,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            width: LengthSpec::Auto,
            height: LengthSpec::Auto,
            min_height: LengthSpec::Auto,
            margin: EdgeSizes::zero(),
            padding: EdgeSizes::zero(),
            direction: FlexDirection::Column,
            justify: Justify::Start,
            align_items: Align::Stretch,
            align_self: None,
            wrap: false,
            grow: 0.0,
            position: Position::Flow,
            background: None,
            border: None,
            border_radius: Pt::ZERO,
        }
    }
}

/// Text attributes a role declares. `None` inherits from the parent node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextProps {
    pub font_name: Option<&'static str>,
    pub font_size: Option<Pt>,
    pub font_weight: Option<u16>,
    pub color: Option<Color>,
    pub align: Option<TextAlign>,
    pub line_height: Option<f32>,
    pub transform: Option<TextTransform>,
}

/// Fully resolved text attributes carried by every node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_name: &'static str,
    pub font_size: Pt,
    pub font_weight: u16,
    pub color: Color,
    pub align: TextAlign,
    pub line_height: f32,
    pub transform: TextTransform,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_name: REGULAR,
            font_size: Pt::from_i32(12),
            font_weight: 400,
            color: Color::BLACK,
            align: TextAlign::Left,
            line_height: 1.2,
            transform: TextTransform::None,
        }
    }
}

impl TextStyle {
    fn inherit(&self, props: &TextProps) -> TextStyle {
        TextStyle {
            font_name: props.font_name.unwrap_or(self.font_name),
            font_size: props.font_size.unwrap_or(self.font_size),
            font_weight: props.font_weight.unwrap_or(self.font_weight),
            color: props.color.unwrap_or(self.color),
            align: props.align.unwrap_or(self.align),
            line_height: props.line_height.unwrap_or(self.line_height),
            // Transforms apply to the node's own text only.
            transform: props.transform.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleRule {
    pub layout: BoxStyle,
    pub text: TextProps,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub layout: BoxStyle,
    pub text: TextStyle,
}

impl ResolvedStyle {
    /// Context for resolving the page root.
    pub fn root() -> Self {
        Self {
            layout: BoxStyle::default(),
            text: TextStyle::default(),
        }
    }
}

/// Role table consulted by the document builder. Immutable once handed over.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleSheet {
    rules: BTreeMap<Role, StyleRule>,
}

impl StyleSheet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, role: Role, rule: StyleRule) -> Self {
        self.rules.insert(role, rule);
        self
    }

    pub fn without(mut self, role: Role) -> Self {
        self.rules.remove(&role);
        self
    }

    pub fn rule(&self, role: Role) -> Result<&StyleRule, SheetError> {
        self.rules
            .get(&role)
            .ok_or(SheetError::MissingStyleRole(role))
    }

    pub fn resolve(&self, role: Role, parent: &ResolvedStyle) -> Result<ResolvedStyle, SheetError> {
        let rule = self.rule(role)?;
        Ok(ResolvedStyle {
            layout: rule.layout,
            text: parent.text.inherit(&rule.text),
        })
    }

    pub fn missing_roles(&self) -> Vec<Role> {
        Role::ALL
            .iter()
            .copied()
            .filter(|role| !self.rules.contains_key(role))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The spec-sheet template: teal accent bar, two-column price grid,
    /// ten-cell spec strip and a footer band anchored to the page bottom.
    pub fn standard() -> Self {
        let mut rules = BTreeMap::new();
        let mut put = |role: Role, layout: BoxStyle, text: TextProps| {
            rules.insert(role, StyleRule { layout, text });
        };

        put(
            Role::Page,
            BoxStyle {
                direction: FlexDirection::Row,
                background: Some(LIGHT_GREY_BG),
                padding: EdgeSizes::sides(0.0, 0.0, 100.0, 0.0),
                ..BoxStyle::default()
            },
            TextProps {
                font_name: Some(REGULAR),
                font_size: Some(pt(9.0)),
                color: Some(DARK_GREY_TEXT),
                ..TextProps::default()
            },
        );
        put(
            Role::LeftBar,
            BoxStyle {
                width: abs(50.0),
                height: LengthSpec::Percent(100.0),
                background: Some(ACCENT),
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::MainContent,
            BoxStyle {
                grow: 1.0,
                padding: EdgeSizes::sides(20.0, 20.0, 20.0, 10.0),
                ..BoxStyle::default()
            },
            TextProps::default(),
        );

        put(
            Role::HeaderSection,
            BoxStyle {
                margin: bottom(15.0),
                ..BoxStyle::default()
            },
            TextProps {
                align: Some(TextAlign::Left),
                ..TextProps::default()
            },
        );
        put(Role::VehicleTitle, BoxStyle::default(), bold_text(28.0, SECONDARY));
        put(
            Role::VehicleSubtitle,
            BoxStyle::default(),
            TextProps {
                font_size: Some(pt(14.0)),
                color: Some(ACCENT),
                ..TextProps::default()
            },
        );

        put(
            Role::TopRow,
            BoxStyle {
                direction: FlexDirection::Row,
                justify: Justify::SpaceBetween,
                margin: bottom(15.0),
                min_height: abs(250.0),
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::PricingSection,
            BoxStyle {
                width: LengthSpec::Percent(48.0),
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::SectionTitle,
            BoxStyle {
                margin: bottom(8.0),
                ..BoxStyle::default()
            },
            TextProps {
                align: Some(TextAlign::Center),
                ..bold_text(12.0, SECONDARY)
            },
        );
        put(
            Role::PricingGrid,
            BoxStyle {
                direction: FlexDirection::Row,
                justify: Justify::SpaceBetween,
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::PricingColumn,
            BoxStyle {
                width: LengthSpec::Percent(48.0),
                align_items: Align::Center,
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(Role::PricingHeaderMonths, BoxStyle::default(), bold_text(20.0, ACCENT));
        put(
            Role::PricingHeaderSubtext,
            BoxStyle {
                margin: bottom(5.0),
                ..BoxStyle::default()
            },
            TextProps {
                font_size: Some(pt(9.0)),
                color: Some(MEDIUM_GREY_TEXT),
                ..TextProps::default()
            },
        );
        put(
            Role::PriceBox,
            BoxStyle {
                width: LengthSpec::Percent(100.0),
                min_height: abs(45.0),
                padding: EdgeSizes::symmetric(6.0, 8.0),
                margin: bottom(4.0),
                background: Some(ACCENT),
                border_radius: pt(4.0),
                justify: Justify::Center,
                align_items: Align::Center,
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(Role::PriceBoxKm, BoxStyle::default(), centered_text(8.0, Color::WHITE));
        put(
            Role::PriceBoxPrice,
            BoxStyle {
                margin: EdgeSizes::symmetric(1.0, 0.0),
                ..BoxStyle::default()
            },
            TextProps {
                align: Some(TextAlign::Center),
                ..bold_text(16.0, Color::WHITE)
            },
        );
        put(Role::PriceBoxVat, BoxStyle::default(), centered_text(7.0, Color::WHITE));

        put(
            Role::ImagePanel,
            BoxStyle {
                width: LengthSpec::Percent(50.0),
                align_items: Align::Center,
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::VehicleImage,
            BoxStyle {
                width: LengthSpec::Percent(100.0),
                height: abs(180.0),
                margin: bottom(5.0),
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::EcoBadge,
            BoxStyle {
                position: Position::Absolute {
                    top: Some(pt(120.0)),
                    right: None,
                    bottom: None,
                    left: Some(pt(10.0)),
                },
                width: abs(55.0),
                direction: FlexDirection::Row,
                align_items: Align::Center,
                padding: EdgeSizes::symmetric(3.0, 6.0),
                background: Some(ECO_GREEN),
                border_radius: pt(3.0),
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::EcoBadgeText,
            BoxStyle {
                margin: EdgeSizes::sides(0.0, 4.0, 0.0, 0.0),
                ..BoxStyle::default()
            },
            bold_text(10.0, Color::WHITE),
        );
        put(
            Role::EcoBadgeDetail,
            BoxStyle {
                background: Some(Color::WHITE),
                border_radius: pt(2.0),
                padding: EdgeSizes::symmetric(1.0, 3.0),
                justify: Justify::Center,
                align_items: Align::Center,
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(Role::EcoBadgeDetailText, BoxStyle::default(), bold_text(7.0, ECO_GREEN));
        put(
            Role::EcoBadgeDetailCaption,
            BoxStyle::default(),
            TextProps {
                font_size: Some(pt(4.0)),
                color: Some(ECO_GREEN),
                line_height: Some(1.0),
                ..TextProps::default()
            },
        );
        put(
            Role::RequestModel,
            BoxStyle {
                margin: EdgeSizes::sides(10.0, 10.0, 0.0, 0.0),
                padding: EdgeSizes::symmetric(6.0, 12.0),
                border: Some(BorderSpec {
                    widths: EdgeSizes::all(1.0),
                    color: DIVIDER,
                }),
                border_radius: pt(15.0),
                background: Some(Color::WHITE),
                align_self: Some(Align::End),
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::RequestModelText,
            BoxStyle::default(),
            TextProps {
                font_size: Some(pt(10.0)),
                color: Some(ACCENT),
                ..TextProps::default()
            },
        );

        put(
            Role::EquipmentSection,
            BoxStyle {
                margin: bottom(15.0),
                padding: EdgeSizes::sides(10.0, 0.0, 0.0, 0.0),
                border: Some(top_divider()),
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::EquipmentTitle,
            BoxStyle {
                margin: bottom(8.0),
                ..BoxStyle::default()
            },
            bold_text(11.0, DARK_GREY_TEXT),
        );
        put(
            Role::EquipmentList,
            BoxStyle {
                direction: FlexDirection::Row,
                justify: Justify::SpaceBetween,
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::EquipmentColumn,
            BoxStyle {
                width: LengthSpec::Percent(48.0),
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::EquipmentItem,
            BoxStyle {
                margin: bottom(3.0),
                ..BoxStyle::default()
            },
            TextProps {
                font_size: Some(pt(8.5)),
                line_height: Some(1.4),
                ..TextProps::default()
            },
        );

        put(
            Role::SpecsSection,
            BoxStyle {
                direction: FlexDirection::Row,
                wrap: true,
                justify: Justify::SpaceBetween,
                padding: EdgeSizes::sides(10.0, 0.0, 0.0, 0.0),
                margin: bottom(15.0),
                border: Some(top_divider()),
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::SpecItem,
            BoxStyle {
                width: LengthSpec::Percent(19.0),
                margin: bottom(8.0),
                align_items: Align::Center,
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::SpecLabel,
            BoxStyle {
                margin: bottom(2.0),
                ..BoxStyle::default()
            },
            centered_text(7.0, MEDIUM_GREY_TEXT),
        );
        put(
            Role::SpecValue,
            BoxStyle::default(),
            TextProps {
                align: Some(TextAlign::Center),
                ..bold_text(10.0, DARK_GREY_TEXT)
            },
        );

        put(
            Role::FooterSection,
            BoxStyle {
                position: Position::Absolute {
                    top: None,
                    right: Some(Pt::ZERO),
                    bottom: Some(Pt::ZERO),
                    left: Some(Pt::ZERO),
                },
                height: abs(90.0),
                background: Some(ACCENT),
                padding: EdgeSizes::sides(10.0, 20.0, 5.0, 20.0),
                ..BoxStyle::default()
            },
            TextProps {
                color: Some(Color::WHITE),
                ..TextProps::default()
            },
        );
        put(
            Role::FooterContent,
            BoxStyle {
                direction: FlexDirection::Row,
                justify: Justify::SpaceBetween,
                padding: EdgeSizes::sides(0.0, 0.0, 0.0, 40.0),
                margin: bottom(8.0),
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::FooterConditions,
            BoxStyle {
                width: LengthSpec::Percent(55.0),
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::FooterOptional,
            BoxStyle {
                width: LengthSpec::Percent(35.0),
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::FooterTitle,
            BoxStyle {
                margin: bottom(4.0),
                ..BoxStyle::default()
            },
            TextProps {
                font_name: Some(BOLD),
                font_size: Some(pt(9.0)),
                font_weight: Some(700),
                transform: Some(TextTransform::Uppercase),
                ..TextProps::default()
            },
        );
        put(
            Role::FooterText,
            BoxStyle {
                margin: bottom(2.0),
                ..BoxStyle::default()
            },
            TextProps {
                font_size: Some(pt(8.0)),
                line_height: Some(1.3),
                ..TextProps::default()
            },
        );
        put(
            Role::FooterBottom,
            BoxStyle {
                direction: FlexDirection::Row,
                justify: Justify::SpaceBetween,
                align_items: Align::Center,
                padding: EdgeSizes::sides(5.0, 0.0, 0.0, 40.0),
                margin: EdgeSizes::sides(5.0, 0.0, 0.0, 0.0),
                border: Some(BorderSpec {
                    widths: EdgeSizes::sides(0.5, 0.0, 0.0, 0.0),
                    color: Color::WHITE.with_alpha(0.3),
                }),
                ..BoxStyle::default()
            },
            TextProps::default(),
        );
        put(
            Role::FooterLogo,
            BoxStyle::default(),
            TextProps {
                font_name: Some(BOLD),
                font_size: Some(pt(12.0)),
                font_weight: Some(700),
                ..TextProps::default()
            },
        );
        put(
            Role::FooterDisclaimer,
            BoxStyle {
                width: LengthSpec::Percent(60.0),
                ..BoxStyle::default()
            },
            TextProps {
                font_size: Some(pt(6.5)),
                align: Some(TextAlign::Right),
                ..TextProps::default()
            },
        );

        Self { rules }
    }
}

fn pt(value: f32) -> Pt {
    Pt::from_f32(value)
}

fn abs(value: f32) -> LengthSpec {
    LengthSpec::Absolute(pt(value))
}

fn bottom(value: f32) -> EdgeSizes {
    EdgeSizes::sides(0.0, 0.0, value, 0.0)
}

fn top_divider() -> BorderSpec {
    BorderSpec {
        widths: EdgeSizes::sides(1.0, 0.0, 0.0, 0.0),
        color: DIVIDER,
    }
}

fn bold_text(size: f32, color: Color) -> TextProps {
    TextProps {
        font_name: Some(BOLD),
        font_size: Some(pt(size)),
        font_weight: Some(700),
        color: Some(color),
        ..TextProps::default()
    }
}

fn centered_text(size: f32, color: Color) -> TextProps {
    TextProps {
        font_size: Some(pt(size)),
        color: Some(color),
        align: Some(TextAlign::Center),
        ..TextProps::default()
    }
}
