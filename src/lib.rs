mod advisor;
mod assets;
mod compose;
mod debug;
mod error;
mod format;
mod metrics;
mod record;
mod render;
mod style;
mod tree;
mod types;

pub use advisor::{
    AdvisorFailure, ContentLength, LayoutAdvisor, LayoutSuggestion, SuggestionRequest,
    parse_suggestion, prompt_for, request_layout_suggestion,
};
pub use assets::{ImageKind, ImageSource, PLACEHOLDER_IMAGE_URL};
pub use compose::{
    ComposeOptions, DISPLAY_TIERS, DOCUMENT_AUTHOR, FOOTER_DISCLAIMER, FOOTER_LOGO,
    INSURANCE_NOT_SPECIFIED, MISSING_IDENTITY, base_condition_lines, compose,
    optional_condition_lines, split_columns, title_text,
};
use debug::DebugLogger;
pub use error::SheetError;
pub use format::{
    CURRENCY, MILLIMETRES, PLACEHOLDER, format_dimension, format_price, format_thousands,
    or_placeholder, present, surcharge, with_suffix,
};
pub use metrics::SheetMetrics;
pub use record::{
    BaseTerms, DistanceTier, Duration, EQUIPMENT_SLOTS, EngineType, Entered, EnvironmentalLabels,
    Equipment, FieldIssue, OptionalTerms, PriceMatrix, TechnicalSpec, Transmission, VehicleConfig,
};
pub use render::{
    OutputReport, PDF_CONTENT_TYPE, RenderFailure, RenderedSheet, Renderer, check_output, deliver,
    inspect_output, sheet_filename,
};
use std::sync::Arc;
pub use style::{
    Align, BorderSpec, BoxStyle, EdgeSizes, FlexDirection, Justify, LengthSpec, Position,
    ResolvedStyle, Role, StyleRule, StyleSheet, TextAlign, TextProps, TextStyle, TextTransform,
};
pub use tree::{Container, ContentTree, DocumentInfo, ImageLeaf, Node, Page, TextLeaf};
pub use types::{Color, Pt, Size};

/// Spec-sheet builder: one style sheet and page size shared by every record
/// it composes.
pub struct PrintForge {
    page_size: Size,
    styles: Arc<StyleSheet>,
    strict_identity: bool,
    debug: Option<Arc<DebugLogger>>,
}

#[derive(Clone)]
pub struct PrintForgeBuilder {
    page_size: Size,
    styles: StyleSheet,
    strict_identity: bool,
    require_complete_styles: bool,
    debug_path: Option<std::path::PathBuf>,
}

impl PrintForge {
    pub fn new() -> Result<Self, SheetError> {
        Self::builder().build()
    }

    pub fn builder() -> PrintForgeBuilder {
        PrintForgeBuilder::new()
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn style_sheet(&self) -> &StyleSheet {
        &self.styles
    }

    fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            page_size: self.page_size,
            strict_identity: self.strict_identity,
        }
    }

    pub fn build_sheet(&self, config: &VehicleConfig) -> Result<ContentTree, SheetError> {
        self.build_sheet_with_metrics(config).map(|(tree, _)| tree)
    }

    pub fn build_sheet_with_metrics(
        &self,
        config: &VehicleConfig,
    ) -> Result<(ContentTree, SheetMetrics), SheetError> {
        let started = std::time::Instant::now();
        let result = compose(config, &self.styles, &self.compose_options());
        let build_ms = started.elapsed().as_secs_f64() * 1000.0;
        match result {
            Ok(tree) => {
                let metrics = SheetMetrics::from_tree(&tree, build_ms);
                if let Some(logger) = self.debug.as_deref() {
                    logger.log_build(&tree.info.title, &tree.fingerprint(), &metrics);
                }
                Ok((tree, metrics))
            }
            Err(err) => {
                if let Some(logger) = self.debug.as_deref() {
                    logger.log_failure(&title_text(&config.brand, &config.model), &err.to_string());
                }
                Err(err)
            }
        }
    }

    /// Parses a wire-format JSON record and builds its sheet.
    pub fn build_from_json(&self, json: &str) -> Result<ContentTree, SheetError> {
        let config = VehicleConfig::from_json(json)?;
        self.build_sheet(&config)
    }

    // Builds in parallel; results keep input order.
    pub fn build_many_parallel(
        &self,
        configs: &[VehicleConfig],
    ) -> Vec<Result<ContentTree, SheetError>> {
        use rayon::prelude::*;

        let mut results: Vec<(usize, Result<ContentTree, SheetError>)> = configs
            .par_iter()
            .enumerate()
            .map(|(idx, config)| (idx, self.build_sheet(config)))
            .collect();
        results.sort_by_key(|(idx, _)| *idx);
        results.into_iter().map(|(_, res)| res).collect()
    }

    /// Builds the sheet and hands it to `renderer`, returning the checked PDF
    /// with its download filename.
    pub fn render_sheet(
        &self,
        config: &VehicleConfig,
        renderer: &dyn Renderer,
    ) -> Result<RenderedSheet, SheetError> {
        let tree = self.build_sheet(config)?;
        let delivered = deliver(&tree, config, renderer);
        if let (Err(err), Some(logger)) = (&delivered, self.debug.as_deref()) {
            logger.log_failure(&tree.info.title, &err.to_string());
        }
        delivered
    }

    pub fn emit_debug_summary(&self, context: &str) {
        if let Some(logger) = self.debug.as_deref() {
            logger.emit_summary(context);
            logger.flush();
        }
    }
}

impl PrintForgeBuilder {
    pub fn new() -> Self {
        Self {
            page_size: Size::a4(),
            styles: StyleSheet::standard(),
            strict_identity: false,
            require_complete_styles: true,
            debug_path: None,
        }
    }

    pub fn page_size(mut self, size: Size) -> Self {
        self.page_size = size;
        self
    }

    pub fn style_sheet(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Reject records with an empty brand, model or version instead of
    /// printing `N/A`.
    pub fn strict_identity(mut self, enabled: bool) -> Self {
        self.strict_identity = enabled;
        self
    }

    /// When disabled, an incomplete style sheet is only detected at build
    /// time of the first sheet that needs the missing role.
    pub fn require_complete_styles(mut self, enabled: bool) -> Self {
        self.require_complete_styles = enabled;
        self
    }

    pub fn debug_log(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.debug_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<PrintForge, SheetError> {
        if !self.page_size.is_positive() {
            return Err(SheetError::InvalidConfiguration(
                "page_size must have positive width and height".to_string(),
            ));
        }
        if self.require_complete_styles {
            let missing = self.styles.missing_roles();
            if !missing.is_empty() {
                let names: Vec<&str> = missing.iter().map(Role::as_str).collect();
                return Err(SheetError::InvalidConfiguration(format!(
                    "style_sheet is missing roles: {}",
                    names.join(", ")
                )));
            }
        }
        let debug = if let Some(path) = self.debug_path {
            Some(Arc::new(DebugLogger::new(path)?))
        } else {
            None
        };
        Ok(PrintForge {
            page_size: self.page_size,
            styles: Arc::new(self.styles),
            strict_identity: self.strict_identity,
            debug,
        })
    }
}

impl Default for PrintForgeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
