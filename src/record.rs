use crate::assets::ImageSource;
use crate::error::SheetError;
use crate::format::present;
use serde_json::{Map, Value};

pub const EQUIPMENT_SLOTS: usize = 10;

/// Annual-distance pricing bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DistanceTier {
    Km10000,
    Km15000,
    Km20000,
    Km25000,
    Km30000,
    Km35000,
    Km40000,
}

impl DistanceTier {
    pub const ALL: [DistanceTier; 7] = [
        DistanceTier::Km10000,
        DistanceTier::Km15000,
        DistanceTier::Km20000,
        DistanceTier::Km25000,
        DistanceTier::Km30000,
        DistanceTier::Km35000,
        DistanceTier::Km40000,
    ];

    pub fn km(&self) -> u32 {
        10_000 + 5_000 * self.index() as u32
    }

    fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_km(km: u32) -> Option<Self> {
        DistanceTier::ALL.iter().copied().find(|tier| tier.km() == km)
    }
}

/// Financing term length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Duration {
    Months36,
    Months48,
}

impl Duration {
    pub const ALL: [Duration; 2] = [Duration::Months36, Duration::Months48];

    pub fn months(&self) -> u32 {
        match self {
            Duration::Months36 => 36,
            Duration::Months48 => 48,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Monthly prices keyed by distance tier and duration; exactly 7x2 cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceMatrix {
    cells: [[Option<String>; 2]; 7],
}

impl PriceMatrix {
    pub fn get(&self, tier: DistanceTier, duration: Duration) -> Option<&str> {
        present(self.cells[tier.index()][duration.index()].as_deref())
    }

    pub fn set(&mut self, tier: DistanceTier, duration: Duration, value: Option<String>) {
        self.cells[tier.index()][duration.index()] = value;
    }

    pub fn with(mut self, tier: DistanceTier, duration: Duration, value: &str) -> Self {
        self.set(tier, duration, Some(value.to_string()));
        self
    }

    pub fn wire_key(tier: DistanceTier, duration: Duration) -> String {
        format!("price_{}_{}", tier.km(), duration.months())
    }

    pub fn entries(&self) -> impl Iterator<Item = (DistanceTier, Duration, Option<&str>)> + '_ {
        DistanceTier::ALL.into_iter().flat_map(move |tier| {
            Duration::ALL
                .into_iter()
                .map(move |duration| (tier, duration, self.get(tier, duration)))
        })
    }
}

/// Environmental sticker flags. Only `eco` is rendered; the rest are kept
/// for the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvironmentalLabels {
    pub zero: bool,
    pub eco: bool,
    pub b: bool,
    pub c: bool,
}

/// Ten ordered, sparse featured-equipment slots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Equipment {
    slots: [Option<String>; EQUIPMENT_SLOTS],
}

impl Equipment {
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut equipment = Equipment::default();
        for (idx, item) in items.into_iter().take(EQUIPMENT_SLOTS).enumerate() {
            equipment.slots[idx] = Some(item.into());
        }
        equipment
    }

    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|slot| slot.as_deref())
    }

    pub fn set(&mut self, index: usize, value: Option<String>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = value;
        }
    }

    /// Non-blank slots in slot order.
    pub fn populated(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter_map(|slot| present(slot.as_deref()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transmission {
    Automatic,
    Manual,
    Other,
}

impl Transmission {
    pub fn classify(raw: &str) -> Self {
        match fold_accents(raw.trim()).as_str() {
            "AUTOMATIC" | "AUTOMATICO" | "AUTOMATICA" => Transmission::Automatic,
            "MANUAL" => Transmission::Manual,
            _ => Transmission::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineType {
    Diesel,
    Gasoline,
    Hybrid,
    Electric,
    Other,
}

impl EngineType {
    pub fn classify(raw: &str) -> Self {
        match fold_accents(raw.trim()).as_str() {
            "DIESEL" => EngineType::Diesel,
            "GASOLINE" | "GASOLINA" | "PETROL" => EngineType::Gasoline,
            "HYBRID" | "HIBRIDO" => EngineType::Hybrid,
            "ELECTRIC" | "ELECTRICO" => EngineType::Electric,
            _ => EngineType::Other,
        }
    }
}

/// A classified value together with the text the operator typed. The sheet
/// prints the typed text, uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entered<T> {
    pub kind: T,
    pub raw: String,
}

impl<T> Entered<T> {
    pub fn label(&self) -> String {
        self.raw.trim().to_uppercase()
    }
}

impl Entered<Transmission> {
    pub fn transmission(raw: &str) -> Option<Self> {
        present(Some(raw)).map(|raw| Entered {
            kind: Transmission::classify(raw),
            raw: raw.to_string(),
        })
    }
}

impl Entered<EngineType> {
    pub fn engine(raw: &str) -> Option<Self> {
        present(Some(raw)).map(|raw| Entered {
            kind: EngineType::classify(raw),
            raw: raw.to_string(),
        })
    }
}

fn fold_accents(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .map(|ch| match ch {
            'Á' => 'A',
            'É' => 'E',
            'Í' => 'I',
            'Ó' => 'O',
            'Ú' => 'U',
            other => other,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TechnicalSpec {
    pub power_kw: Option<String>,
    pub power_hp: Option<String>,
    pub transmission: Option<Entered<Transmission>>,
    pub engine: Option<Entered<EngineType>>,
    pub width_mm: Option<String>,
    pub height_mm: Option<String>,
    pub length_mm: Option<String>,
    pub displacement: Option<String>,
    pub tank_litres: Option<String>,
    pub emissions_gkm: Option<String>,
    pub consumption_wltp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BaseTerms {
    pub comprehensive_with_deductible: bool,
    pub deductible: Option<String>,
    pub replacement_vehicle: bool,
    pub tires: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionalTerms {
    pub comprehensive_without_deductible: bool,
    pub no_deductible_monthly: Option<String>,
    pub replacement_vehicle: bool,
    pub replacement_monthly: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Everything the operator entered about one vehicle offer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VehicleConfig {
    pub brand: String,
    pub model: String,
    pub version: String,
    pub image_url: Option<String>,
    pub prices: PriceMatrix,
    pub down_payment_36: Option<String>,
    pub down_payment_48: Option<String>,
    pub incentive: bool,
    pub labels: EnvironmentalLabels,
    pub equipment: Equipment,
    pub specs: TechnicalSpec,
    pub base_terms: BaseTerms,
    pub optional_terms: OptionalTerms,
}

impl VehicleConfig {
    pub fn new(brand: impl Into<String>, model: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Reads the form payload. Unknown keys are ignored; string fields accept
    /// JSON numbers; wrongly typed values count as absent.
    pub fn from_value(value: &Value) -> Result<Self, SheetError> {
        let obj = value.as_object().ok_or_else(|| {
            SheetError::InvalidRecord("expected a JSON object at the top level".to_string())
        })?;

        let mut prices = PriceMatrix::default();
        for tier in DistanceTier::ALL {
            for duration in Duration::ALL {
                prices.set(tier, duration, text(obj, &PriceMatrix::wire_key(tier, duration)));
            }
        }

        let mut equipment = Equipment::default();
        for idx in 0..EQUIPMENT_SLOTS {
            equipment.set(idx, text(obj, &format!("elemento_destacado_{}", idx + 1)));
        }

        Ok(Self {
            brand: text(obj, "marca").unwrap_or_default(),
            model: text(obj, "modelo").unwrap_or_default(),
            version: text(obj, "version").unwrap_or_default(),
            image_url: text(obj, "main_image_url"),
            prices,
            down_payment_36: text(obj, "entrada_36"),
            down_payment_48: text(obj, "entrada_48"),
            incentive: flag(obj, "moves_checkbox"),
            labels: EnvironmentalLabels {
                zero: flag(obj, "label_O"),
                eco: flag(obj, "label_ECO"),
                b: flag(obj, "label_B"),
                c: flag(obj, "label_C"),
            },
            equipment,
            specs: TechnicalSpec {
                power_kw: text(obj, "potencia_kw"),
                power_hp: text(obj, "potencia_cv"),
                transmission: text(obj, "transmision").and_then(|raw| Entered::transmission(&raw)),
                engine: text(obj, "motorizacion").and_then(|raw| Entered::engine(&raw)),
                width_mm: text(obj, "dimensiones_ancho"),
                height_mm: text(obj, "dimensiones_alto"),
                length_mm: text(obj, "dimensiones_largo"),
                displacement: text(obj, "cilindrada"),
                tank_litres: text(obj, "deposito_l"),
                emissions_gkm: text(obj, "emisiones_gkm"),
                consumption_wltp: text(obj, "consumo_wltp_l100km"),
            },
            base_terms: BaseTerms {
                comprehensive_with_deductible: flag(obj, "seguro_todo_riesgo"),
                deductible: text(obj, "franquicia"),
                replacement_vehicle: flag(obj, "coche_sustitucion_1"),
                tires: text(obj, "neumaticos"),
            },
            optional_terms: OptionalTerms {
                comprehensive_without_deductible: flag(obj, "seguro_sin_franquicia"),
                no_deductible_monthly: text(obj, "precio_mes_sin_franquicia"),
                replacement_vehicle: flag(obj, "coche_sustitucion_2"),
                replacement_monthly: text(obj, "precio_mes_sustitucion_2"),
            },
        })
    }

    /// Field-presence checks the editing form applies before submitting.
    /// The document builder never calls this.
    pub fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("marca", &self.brand),
            ("modelo", &self.model),
            ("version", &self.version),
        ] {
            if value.trim().is_empty() {
                issues.push(FieldIssue::new(field, "required"));
            }
        }

        if let Some(url) = present(self.image_url.as_deref()) {
            if !ImageSource::is_acceptable(url) {
                issues.push(FieldIssue::new("main_image_url", "must be a valid URL"));
            }
        }

        for (field, value) in [
            ("dimensiones_ancho", &self.specs.width_mm),
            ("dimensiones_alto", &self.specs.height_mm),
            ("dimensiones_largo", &self.specs.length_mm),
        ] {
            if let Some(value) = present(value.as_deref()) {
                if !value.chars().all(|ch| ch.is_ascii_digit()) {
                    issues.push(FieldIssue::new(field, "digits only"));
                }
            }
        }

        for (tier, duration, value) in self.prices.entries() {
            if let Some(value) = value {
                if !is_amount(value) {
                    issues.push(FieldIssue::new(
                        PriceMatrix::wire_key(tier, duration),
                        "must be a number",
                    ));
                }
            }
        }

        for (field, value) in [
            ("franquicia", &self.base_terms.deductible),
            ("precio_mes_sin_franquicia", &self.optional_terms.no_deductible_monthly),
            ("precio_mes_sustitucion_2", &self.optional_terms.replacement_monthly),
        ] {
            if let Some(value) = present(value.as_deref()) {
                if !is_amount(value) {
                    issues.push(FieldIssue::new(field, "must be a number"));
                }
            }
        }

        issues
    }

    /// The record the editing form starts from.
    pub fn sample() -> Self {
        let mut prices = PriceMatrix::default();
        let mut base_36 = 565;
        let mut base_48 = 515;
        for tier in DistanceTier::ALL {
            prices.set(tier, Duration::Months36, Some(base_36.to_string()));
            prices.set(tier, Duration::Months48, Some(base_48.to_string()));
            base_36 += 15;
            base_48 += 15;
        }

        Self {
            brand: "BMW".to_string(),
            model: "118D".to_string(),
            version: "Pack M".to_string(),
            image_url: Some("https://placehold.co/600x400/E8F0FE/333333.png".to_string()),
            prices,
            labels: EnvironmentalLabels {
                eco: true,
                ..EnvironmentalLabels::default()
            },
            equipment: Equipment::from_items([
                "Equipamiento exterior del Paquete M Sport",
                "Llantas de aleación ligera",
                "Faros led y luces traseras led",
                "Calefacción de los asientos delanteros",
                "Parking Assistant",
                "BMW Live Cockpit Plus con BMW Curved Display",
                "BMW Operating System 9 con navegación",
                "Climatizador",
                "Volante deportivo",
                "Carga inalámbrica para dispositivos móviles",
            ]),
            specs: TechnicalSpec {
                power_kw: Some("110".to_string()),
                power_hp: Some("150".to_string()),
                transmission: Entered::transmission("AUTOMÁTICO"),
                engine: Entered::engine("DIÉSEL"),
                width_mm: Some("1800".to_string()),
                height_mm: Some("1459".to_string()),
                length_mm: Some("4361".to_string()),
                displacement: Some("4".to_string()),
                tank_litres: Some("49".to_string()),
                emissions_gkm: Some("124".to_string()),
                consumption_wltp: Some("4,7".to_string()),
            },
            base_terms: BaseTerms {
                comprehensive_with_deductible: true,
                deductible: Some("300".to_string()),
                replacement_vehicle: false,
                tires: Some("4-8-12".to_string()),
            },
            optional_terms: OptionalTerms {
                comprehensive_without_deductible: true,
                no_deductible_monthly: Some("25".to_string()),
                replacement_vehicle: true,
                replacement_monthly: Some("20".to_string()),
            },
            ..Self::default()
        }
    }
}

fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(raw) => Some(raw.clone()),
        Value::Number(num) => Some(num.to_string()),
        _ => None,
    }
}

fn flag(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn is_amount(raw: &str) -> bool {
    let mut separators = 0;
    let mut digits = 0;
    for ch in raw.chars() {
        match ch {
            '0'..='9' => digits += 1,
            ',' | '.' => separators += 1,
            _ => return false,
        }
    }
    digits > 0 && separators <= 1 && !raw.starts_with([',', '.']) && !raw.ends_with([',', '.'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn distance_tiers_cover_full_key_space() {
        let kms: Vec<u32> = DistanceTier::ALL.iter().map(|tier| tier.km()).collect();
        assert_eq!(kms, vec![10000, 15000, 20000, 25000, 30000, 35000, 40000]);
        assert_eq!(DistanceTier::from_km(35000), Some(DistanceTier::Km35000));
        assert_eq!(DistanceTier::from_km(12000), None);
        assert_eq!(PriceMatrix::default().entries().count(), 14);
        assert_eq!(
            PriceMatrix::wire_key(DistanceTier::Km40000, Duration::Months48),
            "price_40000_48"
        );
    }

    #[test]
    fn blank_price_cells_read_as_missing() {
        let matrix = PriceMatrix::default()
            .with(DistanceTier::Km10000, Duration::Months36, "565")
            .with(DistanceTier::Km10000, Duration::Months48, "  ");
        assert_eq!(matrix.get(DistanceTier::Km10000, Duration::Months36), Some("565"));
        assert_eq!(matrix.get(DistanceTier::Km10000, Duration::Months48), None);
        assert_eq!(matrix.get(DistanceTier::Km20000, Duration::Months36), None);
    }

    #[test]
    fn populated_equipment_keeps_slot_order() {
        let mut equipment = Equipment::default();
        equipment.set(0, Some("A".to_string()));
        equipment.set(3, Some("   ".to_string()));
        equipment.set(4, Some("B".to_string()));
        equipment.set(9, Some("C".to_string()));
        equipment.set(10, Some("ignored".to_string()));
        assert_eq!(equipment.populated(), vec!["A", "B", "C"]);
        assert_eq!(equipment.slot(3), Some("   "));
        assert_eq!(equipment.slot(11), None);
    }

    #[test]
    fn enumerations_classify_english_and_spanish() {
        assert_eq!(Transmission::classify("automático"), Transmission::Automatic);
        assert_eq!(Transmission::classify("MANUAL"), Transmission::Manual);
        assert_eq!(Transmission::classify("cvt"), Transmission::Other);
        assert_eq!(EngineType::classify("DIÉSEL"), EngineType::Diesel);
        assert_eq!(EngineType::classify("gasoline"), EngineType::Gasoline);
        assert_eq!(EngineType::classify("Híbrido"), EngineType::Hybrid);
        assert_eq!(EngineType::classify("electric"), EngineType::Electric);
    }

    #[test]
    fn entered_values_print_the_typed_text() {
        let automatic = Entered::transmission(" automatic ").expect("present");
        assert_eq!(automatic.kind, Transmission::Automatic);
        assert_eq!(automatic.label(), "AUTOMATIC");
        let cvt = Entered::transmission("cvt").expect("present");
        assert_eq!(cvt.kind, Transmission::Other);
        assert_eq!(cvt.label(), "CVT");
        assert_eq!(Entered::engine("Híbrido").map(|e| e.label()), Some("HÍBRIDO".to_string()));
        assert_eq!(Entered::transmission("  "), None);
    }

    #[test]
    fn from_json_reads_wire_keys() {
        let payload = json!({
            "marca": "Seat",
            "modelo": "Leon",
            "version": "FR",
            "price_10000_36": "399",
            "price_40000_48": 455,
            "label_ECO": true,
            "label_B": true,
            "elemento_destacado_2": "Navegador",
            "transmision": "MANUAL",
            "motorizacion": "gasolina",
            "dimensiones_ancho": "1799",
            "seguro_todo_riesgo": true,
            "franquicia": "300",
            "coche_sustitucion_2": "yes",
            "unknown_key": 1
        });
        let config = VehicleConfig::from_value(&payload).expect("parse");
        assert_eq!(config.brand, "Seat");
        assert_eq!(
            config.prices.get(DistanceTier::Km10000, Duration::Months36),
            Some("399")
        );
        assert_eq!(
            config.prices.get(DistanceTier::Km40000, Duration::Months48),
            Some("455")
        );
        assert!(config.labels.eco && config.labels.b);
        assert!(!config.labels.zero && !config.labels.c);
        assert_eq!(config.equipment.populated(), vec!["Navegador"]);
        assert_eq!(config.specs.transmission.as_ref().map(|t| t.kind), Some(Transmission::Manual));
        assert_eq!(config.specs.engine.as_ref().map(|e| e.kind), Some(EngineType::Gasoline));
        assert_eq!(config.specs.engine.as_ref().map(|e| e.label()), Some("GASOLINA".to_string()));
        assert!(config.base_terms.comprehensive_with_deductible);
        assert!(!config.optional_terms.replacement_vehicle);
    }

    #[test]
    fn from_json_rejects_non_objects() {
        let err = VehicleConfig::from_json("[1, 2]").expect_err("array payload");
        assert!(matches!(err, SheetError::InvalidRecord(_)));
        let err = VehicleConfig::from_json("{not json").expect_err("malformed payload");
        assert!(matches!(err, SheetError::InvalidRecord(_)));
    }

    #[test]
    fn sample_record_is_valid() {
        let sample = VehicleConfig::sample();
        assert!(sample.validate().is_empty(), "{:?}", sample.validate());
        assert_eq!(sample.prices.entries().filter(|(_, _, v)| v.is_some()).count(), 14);
        assert_eq!(
            sample.prices.get(DistanceTier::Km40000, Duration::Months48),
            Some("605")
        );
        assert_eq!(sample.equipment.populated().len(), 10);
    }

    #[test]
    fn validate_reports_each_offending_field() {
        let mut config = VehicleConfig::new("", "Ibiza", " ");
        config.image_url = Some("not a url".to_string());
        config.specs.width_mm = Some("1.8m".to_string());
        config.prices.set(DistanceTier::Km15000, Duration::Months48, Some("abc".to_string()));
        config.base_terms.deductible = Some("300,50".to_string());
        config.optional_terms.replacement_monthly = Some("20€".to_string());

        let fields: Vec<String> = config.validate().into_iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec![
                "marca",
                "version",
                "main_image_url",
                "dimensiones_ancho",
                "price_15000_48",
                "precio_mes_sustitucion_2",
            ]
        );
    }

    #[test]
    fn amount_grammar() {
        assert!(is_amount("300"));
        assert!(is_amount("4,7"));
        assert!(is_amount("12.5"));
        assert!(!is_amount("1.2.3"));
        assert!(!is_amount(",5"));
        assert!(!is_amount("5."));
        assert!(!is_amount(""));
        assert!(!is_amount("-3"));
    }
}
