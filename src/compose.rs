use crate::assets::ImageSource;
use crate::error::SheetError;
use crate::format::{
    MILLIMETRES, PLACEHOLDER, format_dimension, format_price, format_thousands, or_placeholder,
    present, surcharge, with_suffix,
};
use crate::record::{DistanceTier, Duration, VehicleConfig};
use crate::style::{ResolvedStyle, Role, StyleSheet};
use crate::tree::{Container, ContentTree, DocumentInfo, ImageLeaf, Node, Page, TextLeaf};
use crate::types::Size;

/// Tiers printed on the sheet. The record carries seven; only the first five
/// fit the grid.
pub const DISPLAY_TIERS: [DistanceTier; 5] = [
    DistanceTier::Km10000,
    DistanceTier::Km15000,
    DistanceTier::Km20000,
    DistanceTier::Km25000,
    DistanceTier::Km30000,
];

pub const MISSING_IDENTITY: &str = "N/A";
pub const DOCUMENT_AUTHOR: &str = "Configurador Vehículos";
pub const FOOTER_LOGO: &str = "proarenting.com";
pub const FOOTER_DISCLAIMER: &str =
    "*La fotografía del vehículo puede no coincidir con el modelo ofertado.";
pub const INSURANCE_NOT_SPECIFIED: &str = "Seguro no especificado";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposeOptions {
    pub page_size: Size,
    /// Treat an empty brand, model or version as a template-integrity error
    /// instead of printing `N/A`.
    pub strict_identity: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            page_size: Size::a4(),
            strict_identity: false,
        }
    }
}

/// Splits `items` into two columns; the first takes `ceil(n/2)`.
pub fn split_columns<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

pub fn title_text(brand: &str, model: &str) -> String {
    format!("{} {}", identity_or_na(brand), identity_or_na(model)).to_uppercase()
}

fn identity_or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        MISSING_IDENTITY
    } else {
        value
    }
}

/// Maps a record to the styled content tree of its spec sheet. Pure: equal
/// inputs give equal trees.
pub fn compose(
    config: &VehicleConfig,
    styles: &StyleSheet,
    options: &ComposeOptions,
) -> Result<ContentTree, SheetError> {
    if options.strict_identity {
        for (field, value) in [
            ("marca", &config.brand),
            ("modelo", &config.model),
            ("version", &config.version),
        ] {
            if value.trim().is_empty() {
                return Err(SheetError::MissingIdentity(field));
            }
        }
    }

    let composer = Composer { config, styles };
    let page_style = styles.resolve(Role::Page, &ResolvedStyle::root())?;

    let children = vec![
        composer.section(Role::LeftBar, &page_style, |_, _| Ok(Vec::new()))?,
        composer.section(Role::MainContent, &page_style, |c, style| {
            Ok(vec![
                c.header(style)?,
                c.top_row(style)?,
                c.equipment(style)?,
                c.specifications(style)?,
            ])
        })?,
        composer.footer(&page_style)?,
    ];

    Ok(ContentTree {
        info: DocumentInfo {
            title: format!(
                "Ficha Vehículo - {} {}",
                config.brand.trim(),
                config.model.trim()
            ),
            author: DOCUMENT_AUTHOR.to_string(),
        },
        page: Page {
            size: options.page_size,
            role: Role::Page,
            style: page_style,
            children,
        },
    })
}

struct Composer<'a> {
    config: &'a VehicleConfig,
    styles: &'a StyleSheet,
}

type Children = Result<Vec<Node>, SheetError>;

impl<'a> Composer<'a> {
    fn container(
        &self,
        role: Role,
        parent: &ResolvedStyle,
        build: impl FnOnce(&Self, &ResolvedStyle) -> Children,
    ) -> Result<Container, SheetError> {
        let style = self.styles.resolve(role, parent)?;
        let children = build(self, &style)?;
        Ok(Container {
            role,
            style,
            children,
        })
    }

    fn section(
        &self,
        role: Role,
        parent: &ResolvedStyle,
        build: impl FnOnce(&Self, &ResolvedStyle) -> Children,
    ) -> Result<Node, SheetError> {
        self.container(role, parent, build).map(Node::Section)
    }

    fn row(
        &self,
        role: Role,
        parent: &ResolvedStyle,
        build: impl FnOnce(&Self, &ResolvedStyle) -> Children,
    ) -> Result<Node, SheetError> {
        self.container(role, parent, build).map(Node::Row)
    }

    fn column(
        &self,
        role: Role,
        parent: &ResolvedStyle,
        build: impl FnOnce(&Self, &ResolvedStyle) -> Children,
    ) -> Result<Node, SheetError> {
        self.container(role, parent, build).map(Node::Column)
    }

    fn text(&self, role: Role, parent: &ResolvedStyle, text: &str) -> Result<Node, SheetError> {
        let style = self.styles.resolve(role, parent)?;
        Ok(Node::Text(TextLeaf {
            role,
            text: style.text.transform.apply(text),
            style,
        }))
    }

    fn header(&self, parent: &ResolvedStyle) -> Result<Node, SheetError> {
        let config = self.config;
        self.section(Role::HeaderSection, parent, |c, style| {
            Ok(vec![
                c.text(
                    Role::VehicleTitle,
                    style,
                    &title_text(&config.brand, &config.model),
                )?,
                c.text(
                    Role::VehicleSubtitle,
                    style,
                    identity_or_na(&config.version),
                )?,
            ])
        })
    }

    fn top_row(&self, parent: &ResolvedStyle) -> Result<Node, SheetError> {
        self.row(Role::TopRow, parent, |c, style| {
            Ok(vec![c.pricing(style)?, c.image_panel(style)?])
        })
    }

    fn pricing(&self, parent: &ResolvedStyle) -> Result<Node, SheetError> {
        self.section(Role::PricingSection, parent, |c, style| {
            Ok(vec![
                c.text(Role::SectionTitle, style, "PRECIOS RENTING")?,
                c.row(Role::PricingGrid, style, |c, style| {
                    Duration::ALL
                        .into_iter()
                        .map(|duration| c.price_column(duration, style))
                        .collect()
                })?,
            ])
        })
    }

    fn price_column(&self, duration: Duration, parent: &ResolvedStyle) -> Result<Node, SheetError> {
        self.column(Role::PricingColumn, parent, |c, style| {
            let mut children = Vec::with_capacity(DISPLAY_TIERS.len() + 2);
            children.push(c.text(
                Role::PricingHeaderMonths,
                style,
                &duration.months().to_string(),
            )?);
            children.push(c.text(Role::PricingHeaderSubtext, style, "meses")?);
            for tier in DISPLAY_TIERS {
                children.push(c.price_box(tier, duration, style)?);
            }
            Ok(children)
        })
    }

    fn price_box(
        &self,
        tier: DistanceTier,
        duration: Duration,
        parent: &ResolvedStyle,
    ) -> Result<Node, SheetError> {
        let prices = &self.config.prices;
        self.section(Role::PriceBox, parent, |c, style| {
            Ok(vec![
                c.text(
                    Role::PriceBoxKm,
                    style,
                    &format!("{} km/año", format_thousands(tier.km())),
                )?,
                c.text(Role::PriceBoxPrice, style, &format_price(prices, tier, duration))?,
                c.text(Role::PriceBoxVat, style, "+IVA")?,
            ])
        })
    }

    fn image_panel(&self, parent: &ResolvedStyle) -> Result<Node, SheetError> {
        let config = self.config;
        self.section(Role::ImagePanel, parent, |c, style| {
            let mut children = Vec::with_capacity(3);
            children.push(Node::Image(ImageLeaf {
                role: Role::VehicleImage,
                style: c.styles.resolve(Role::VehicleImage, style)?,
                source: ImageSource::resolve(config.image_url.as_deref()),
            }));
            if config.labels.eco {
                children.push(c.eco_badge(style)?);
            }
            children.push(c.section(Role::RequestModel, style, |c, style| {
                Ok(vec![c.text(
                    Role::RequestModelText,
                    style,
                    "Solicitar este modelo",
                )?])
            })?);
            Ok(children)
        })
    }

    fn eco_badge(&self, parent: &ResolvedStyle) -> Result<Node, SheetError> {
        self.section(Role::EcoBadge, parent, |c, style| {
            Ok(vec![
                c.text(Role::EcoBadgeText, style, "ECO")?,
                c.section(Role::EcoBadgeDetail, style, |c, style| {
                    Ok(vec![
                        c.text(Role::EcoBadgeDetailText, style, "0")?,
                        c.text(Role::EcoBadgeDetailCaption, style, "EMISIONES")?,
                    ])
                })?,
            ])
        })
    }

    fn equipment(&self, parent: &ResolvedStyle) -> Result<Node, SheetError> {
        let items = self.config.equipment.populated();
        let (first, second) = split_columns(&items);
        self.section(Role::EquipmentSection, parent, |c, style| {
            Ok(vec![
                c.text(Role::EquipmentTitle, style, "EQUIPAMIENTO DESTACADO")?,
                c.row(Role::EquipmentList, style, |c, style| {
                    [first, second]
                        .into_iter()
                        .map(|items| {
                            c.column(Role::EquipmentColumn, style, |c, style| {
                                items
                                    .iter()
                                    .map(|item| {
                                        c.text(Role::EquipmentItem, style, &format!("• {item}"))
                                    })
                                    .collect()
                            })
                        })
                        .collect()
                })?,
            ])
        })
    }

    fn specifications(&self, parent: &ResolvedStyle) -> Result<Node, SheetError> {
        let specs = &self.config.specs;
        let cells: [(&str, String); 10] = [
            (
                "POTENCIA",
                format!(
                    "{} kW {} CV",
                    or_placeholder(specs.power_kw.as_deref()),
                    or_placeholder(specs.power_hp.as_deref())
                ),
            ),
            (
                "TRANSMISIÓN",
                specs
                    .transmission
                    .as_ref()
                    .map(|t| t.label())
                    .unwrap_or_else(|| PLACEHOLDER.to_string()),
            ),
            (
                "MOTORIZACIÓN",
                specs
                    .engine
                    .as_ref()
                    .map(|e| e.label())
                    .unwrap_or_else(|| PLACEHOLDER.to_string()),
            ),
            ("ANCHO", format_dimension(specs.width_mm.as_deref(), MILLIMETRES)),
            ("ALTO", format_dimension(specs.height_mm.as_deref(), MILLIMETRES)),
            ("LARGO", format_dimension(specs.length_mm.as_deref(), MILLIMETRES)),
            ("CILINDRADA", or_placeholder(specs.displacement.as_deref())),
            ("DEPÓSITO", with_suffix(specs.tank_litres.as_deref(), "L")),
            ("EMISIONES", with_suffix(specs.emissions_gkm.as_deref(), "g/km")),
            (
                "CONSUMO WLTP",
                with_suffix(specs.consumption_wltp.as_deref(), "l/100km"),
            ),
        ];

        self.row(Role::SpecsSection, parent, |c, style| {
            cells
                .iter()
                .map(|(label, value)| {
                    c.section(Role::SpecItem, style, |c, style| {
                        Ok(vec![
                            c.text(Role::SpecLabel, style, label)?,
                            c.text(Role::SpecValue, style, value)?,
                        ])
                    })
                })
                .collect()
        })
    }

    fn footer(&self, parent: &ResolvedStyle) -> Result<Node, SheetError> {
        self.section(Role::FooterSection, parent, |c, style| {
            Ok(vec![
                c.row(Role::FooterContent, style, |c, style| {
                    Ok(vec![
                        c.column(Role::FooterConditions, style, |c, style| {
                            let mut children = vec![c.text(Role::FooterTitle, style, "Condiciones")?];
                            for line in base_condition_lines(c.config) {
                                children.push(c.text(Role::FooterText, style, &line)?);
                            }
                            Ok(children)
                        })?,
                        c.column(Role::FooterOptional, style, |c, style| {
                            let mut children = vec![c.text(Role::FooterTitle, style, "Opcional")?];
                            for line in optional_condition_lines(c.config) {
                                children.push(c.text(Role::FooterText, style, &line)?);
                            }
                            Ok(children)
                        })?,
                    ])
                })?,
                c.row(Role::FooterBottom, style, |c, style| {
                    Ok(vec![
                        c.text(Role::FooterLogo, style, FOOTER_LOGO)?,
                        c.text(Role::FooterDisclaimer, style, FOOTER_DISCLAIMER)?,
                    ])
                })?,
            ])
        })
    }
}

/// Lines under the "conditions" heading.
///
/// The insurance sentence is an if/else on the flag: a set flag with no
/// deductible amount prints neither sentence.
pub fn base_condition_lines(config: &VehicleConfig) -> Vec<String> {
    let terms = &config.base_terms;
    let mut lines = Vec::with_capacity(3);
    if terms.comprehensive_with_deductible {
        if let Some(deductible) = present(terms.deductible.as_deref()) {
            lines.push(format!("Seguro todo riesgo con franquicia de {deductible} €"));
        }
    } else {
        lines.push(INSURANCE_NOT_SPECIFIED.to_string());
    }
    lines.push(if terms.replacement_vehicle {
        "Con vehículo de sustitución".to_string()
    } else {
        "Sin vehículo de sustitución".to_string()
    });
    if let Some(tires) = present(terms.tires.as_deref()) {
        lines.push(format!("Nº de neumáticos: {tires}"));
    }
    lines
}

/// Lines under the "optional" heading; each appears only when its flag is
/// set, with the monthly surcharge appended when one was entered.
pub fn optional_condition_lines(config: &VehicleConfig) -> Vec<String> {
    let terms = &config.optional_terms;
    let mut lines = Vec::with_capacity(2);
    let with_surcharge = |text: &str, amount: Option<&str>| match surcharge(amount) {
        Some(suffix) => format!("{text} {suffix}"),
        None => text.to_string(),
    };
    if terms.comprehensive_without_deductible {
        lines.push(with_surcharge(
            "Seguro todo riesgo sin franquicia",
            terms.no_deductible_monthly.as_deref(),
        ));
    }
    if terms.replacement_vehicle {
        lines.push(with_surcharge(
            "Vehículo de sustitución",
            terms.replacement_monthly.as_deref(),
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Entered, Equipment};

    fn build(config: &VehicleConfig) -> ContentTree {
        compose(config, &StyleSheet::standard(), &ComposeOptions::default()).expect("compose")
    }

    fn bmw() -> VehicleConfig {
        let mut config = VehicleConfig::new("BMW", "118D", "Pack M");
        config.equipment = Equipment::from_items((1..=10).map(|i| format!("Item {i}")));
        config.base_terms.comprehensive_with_deductible = true;
        config.base_terms.deductible = Some("300".to_string());
        config.labels.eco = true;
        config
    }

    fn column_texts(tree: &ContentTree) -> Vec<Vec<String>> {
        tree.find_all(Role::EquipmentColumn)
            .into_iter()
            .map(|col| col.texts().into_iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn split_columns_balances_with_first_column_longer() {
        for n in 0..=10usize {
            let items: Vec<usize> = (0..n).collect();
            let (first, second) = split_columns(&items);
            assert_eq!(first.len(), n.div_ceil(2), "n = {n}");
            assert_eq!(second.len(), n - n.div_ceil(2), "n = {n}");
            let joined: Vec<usize> = first.iter().chain(second).copied().collect();
            assert_eq!(joined, items);
        }
    }

    #[test]
    fn end_to_end_bmw_scenario() {
        let tree = build(&bmw());
        assert_eq!(tree.texts(Role::VehicleTitle), vec!["BMW 118D"]);
        assert_eq!(tree.texts(Role::VehicleSubtitle), vec!["Pack M"]);

        let columns = column_texts(&tree);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].len(), 5);
        assert_eq!(columns[1].len(), 5);
        assert_eq!(columns[0][0], "• Item 1");
        assert_eq!(columns[1][0], "• Item 6");

        assert!(tree.find_first(Role::EcoBadge).is_some());
        let footer = tree.texts(Role::FooterText);
        assert!(footer.iter().any(|line| line.contains("300 €")), "{footer:?}");
    }

    #[test]
    fn title_uppercases_and_defaults_identity() {
        assert_eq!(title_text("Seat", "León"), "SEAT LEÓN");
        assert_eq!(title_text("", "  "), "N/A N/A");
        let tree = build(&VehicleConfig::default());
        assert_eq!(tree.texts(Role::VehicleTitle), vec!["N/A N/A"]);
        assert_eq!(tree.texts(Role::VehicleSubtitle), vec!["N/A"]);
    }

    #[test]
    fn strict_identity_rejects_empty_fields() {
        let options = ComposeOptions {
            strict_identity: true,
            ..ComposeOptions::default()
        };
        let config = VehicleConfig::new("BMW", " ", "Pack M");
        let err = compose(&config, &StyleSheet::standard(), &options).expect_err("strict");
        assert!(matches!(err, SheetError::MissingIdentity("modelo")));
        assert!(compose(&bmw(), &StyleSheet::standard(), &options).is_ok());
    }

    #[test]
    fn absent_prices_render_placeholders_in_all_ten_boxes() {
        let tree = build(&VehicleConfig::new("Seat", "Ibiza", "Style"));
        let prices = tree.texts(Role::PriceBoxPrice);
        assert_eq!(prices.len(), 10);
        assert!(prices.iter().all(|p| *p == "-"));
    }

    #[test]
    fn price_grid_shows_five_tiers_per_duration_in_order() {
        let tree = build(&VehicleConfig::sample());
        let columns = tree.find_all(Role::PricingColumn);
        assert_eq!(columns.len(), 2);

        let first = columns[0].texts();
        assert_eq!(&first[..2], &["36", "meses"]);
        assert_eq!(
            first[2..].chunks(3).map(|c| c[0]).collect::<Vec<_>>(),
            vec![
                "10.000 km/año",
                "15.000 km/año",
                "20.000 km/año",
                "25.000 km/año",
                "30.000 km/año"
            ]
        );
        assert_eq!(
            columns[1].find_all(Role::PriceBoxPrice)
                .iter()
                .filter_map(|n| n.text())
                .collect::<Vec<_>>(),
            vec!["515€", "530€", "545€", "560€", "575€"]
        );
        assert!(!tree.contains_text("35.000"));
        assert!(!tree.contains_text("640€"));
    }

    #[test]
    fn eco_badge_follows_only_the_eco_flag() {
        let mut config = bmw();
        config.labels.eco = false;
        config.labels.zero = true;
        config.labels.b = true;
        config.labels.c = true;
        let tree = build(&config);
        assert!(tree.find_first(Role::EcoBadge).is_none());
        assert!(tree.find_first(Role::RequestModel).is_some());
    }

    #[test]
    fn equipment_drops_blank_slots_and_keeps_order() {
        let mut config = VehicleConfig::new("Seat", "Leon", "FR");
        config.equipment.set(1, Some("A".to_string()));
        config.equipment.set(2, Some("  ".to_string()));
        config.equipment.set(5, Some("B".to_string()));
        config.equipment.set(9, Some("C".to_string()));
        let columns = column_texts(&build(&config));
        assert_eq!(columns, vec![vec!["• A", "• B"], vec!["• C"]]);

        let empty = column_texts(&build(&VehicleConfig::new("Seat", "Leon", "FR")));
        assert_eq!(empty, vec![Vec::<String>::new(), Vec::new()]);
    }

    #[test]
    fn specification_cells_are_never_omitted() {
        let tree = build(&VehicleConfig::new("Seat", "Leon", "FR"));
        let labels = tree.texts(Role::SpecLabel);
        assert_eq!(
            labels,
            vec![
                "POTENCIA",
                "TRANSMISIÓN",
                "MOTORIZACIÓN",
                "ANCHO",
                "ALTO",
                "LARGO",
                "CILINDRADA",
                "DEPÓSITO",
                "EMISIONES",
                "CONSUMO WLTP"
            ]
        );
        let values = tree.texts(Role::SpecValue);
        assert_eq!(values[0], "- kW - CV");
        assert!(values[1..].iter().all(|v| *v == "-"));
    }

    #[test]
    fn specification_values_carry_units() {
        let tree = build(&VehicleConfig::sample());
        assert_eq!(
            tree.texts(Role::SpecValue),
            vec![
                "110 kW 150 CV",
                "AUTOMÁTICO",
                "DIÉSEL",
                "1800mm",
                "1459mm",
                "4361mm",
                "4",
                "49 L",
                "124 g/km",
                "4,7 l/100km"
            ]
        );
    }

    #[test]
    fn transmission_and_engine_print_as_typed() {
        let mut config = VehicleConfig::sample();
        config.specs.transmission = Entered::transmission("automatic");
        config.specs.engine = Entered::engine("Mild Hybrid");
        let doc = build(&config);
        let values = doc.texts(Role::SpecValue);
        assert_eq!(values[1], "AUTOMATIC");
        assert_eq!(values[2], "MILD HYBRID");
    }

    #[test]
    fn base_conditions_truth_table() {
        let mut config = VehicleConfig::new("Seat", "Leon", "FR");

        config.base_terms.comprehensive_with_deductible = true;
        config.base_terms.deductible = Some("300".to_string());
        let lines = base_condition_lines(&config);
        assert_eq!(lines[0], "Seguro todo riesgo con franquicia de 300 €");

        config.base_terms.comprehensive_with_deductible = false;
        let lines = base_condition_lines(&config);
        assert_eq!(lines[0], INSURANCE_NOT_SPECIFIED);
        assert!(!lines.iter().any(|l| l.contains("300")));

        // A set flag without an amount prints neither insurance sentence.
        config.base_terms.comprehensive_with_deductible = true;
        config.base_terms.deductible = None;
        let lines = base_condition_lines(&config);
        assert!(!lines.iter().any(|l| l.starts_with("Seguro")));
        assert_eq!(lines, vec!["Sin vehículo de sustitución"]);
    }

    #[test]
    fn replacement_and_tires_lines() {
        let mut config = VehicleConfig::new("Seat", "Leon", "FR");
        config.base_terms.replacement_vehicle = true;
        config.base_terms.tires = Some("4-8-12".to_string());
        assert_eq!(
            base_condition_lines(&config),
            vec![
                INSURANCE_NOT_SPECIFIED,
                "Con vehículo de sustitución",
                "Nº de neumáticos: 4-8-12"
            ]
        );
    }

    #[test]
    fn optional_lines_omit_absent_surcharges() {
        let mut config = VehicleConfig::new("Seat", "Leon", "FR");
        assert!(optional_condition_lines(&config).is_empty());

        config.optional_terms.comprehensive_without_deductible = true;
        config.optional_terms.no_deductible_monthly = Some("25".to_string());
        config.optional_terms.replacement_vehicle = true;
        assert_eq!(
            optional_condition_lines(&config),
            vec!["Seguro todo riesgo sin franquicia + 25 €", "Vehículo de sustitución"]
        );

        config.optional_terms.comprehensive_without_deductible = false;
        config.optional_terms.replacement_monthly = Some("20".to_string());
        assert_eq!(
            optional_condition_lines(&config),
            vec!["Vehículo de sustitución + 20 €"]
        );
    }

    #[test]
    fn footer_titles_are_uppercased_by_style() {
        let tree = build(&bmw());
        assert_eq!(tree.texts(Role::FooterTitle), vec!["CONDICIONES", "OPCIONAL"]);
        assert_eq!(tree.texts(Role::FooterLogo), vec![FOOTER_LOGO]);
    }

    #[test]
    fn identical_records_build_identical_trees() {
        let config = VehicleConfig::sample();
        let a = build(&config);
        let b = build(&config);
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn every_role_in_the_tree_is_resolved_from_the_sheet() {
        let tree = build(&VehicleConfig::sample());
        let mut roles = std::collections::BTreeSet::new();
        tree.walk(|node, _| {
            roles.insert(node.role());
        });
        roles.insert(tree.page.role);
        assert_eq!(roles.len(), Role::ALL.len());
    }

    #[test]
    fn missing_role_aborts_the_build() {
        let sheet = StyleSheet::standard().without(Role::SpecValue);
        let err = compose(&bmw(), &sheet, &ComposeOptions::default()).expect_err("missing role");
        assert!(matches!(err, SheetError::MissingStyleRole(Role::SpecValue)));

        // Roles used only conditionally still fail when reached.
        let sheet = StyleSheet::standard().without(Role::EcoBadge);
        assert!(compose(&bmw(), &sheet, &ComposeOptions::default()).is_err());
        let mut no_eco = bmw();
        no_eco.labels.eco = false;
        assert!(compose(&no_eco, &sheet, &ComposeOptions::default()).is_ok());
    }

    #[test]
    fn document_info_names_the_vehicle() {
        let tree = build(&bmw());
        assert_eq!(tree.info.title, "Ficha Vehículo - BMW 118D");
        assert_eq!(tree.info.author, DOCUMENT_AUTHOR);
        assert_eq!(tree.page.size, Size::a4());
    }

    #[test]
    fn invalid_image_url_uses_placeholder() {
        let mut config = bmw();
        config.image_url = Some("nope".to_string());
        let tree = build(&config);
        match tree.find_first(Role::VehicleImage) {
            Some(Node::Image(leaf)) => assert!(leaf.source.is_placeholder()),
            other => panic!("expected image leaf, got {other:?}"),
        }
    }
}
