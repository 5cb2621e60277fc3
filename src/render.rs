use crate::error::SheetError;
use crate::record::VehicleConfig;
use crate::tree::ContentTree;
use crate::types::{Pt, Size};
use lopdf::{Dictionary, Document as LoDocument, Object};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

pub type RenderFailure = Box<dyn std::error::Error + Send + Sync>;

/// Turns a finished content tree into page bytes. Implementations are
/// expected to honour `tree.page.size`.
pub trait Renderer {
    fn render(&self, tree: &ContentTree) -> Result<Vec<u8>, RenderFailure>;
}

impl<F> Renderer for F
where
    F: Fn(&ContentTree) -> Result<Vec<u8>, RenderFailure>,
{
    fn render(&self, tree: &ContentTree) -> Result<Vec<u8>, RenderFailure> {
        self(tree)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputReport {
    pub pdf_version: String,
    pub page_count: usize,
    pub encrypted: bool,
    pub media_box: Option<Size>,
    pub byte_len: usize,
}

#[derive(Debug, Clone)]
pub struct RenderedSheet {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
    pub report: OutputReport,
}

/// `ficha_<brand>_<model>.pdf`, whitespace runs collapsed to `_`.
pub fn sheet_filename(brand: &str, model: &str) -> String {
    let brand = if brand.is_empty() { "vehiculo" } else { brand };
    format!(
        "ficha_{}_{}.pdf",
        underscore_whitespace(brand),
        underscore_whitespace(model)
    )
}

fn underscore_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

pub fn inspect_output(bytes: &[u8]) -> Result<OutputReport, SheetError> {
    let pdf = LoDocument::load_mem(bytes)
        .map_err(|err| SheetError::Output(format!("not a readable pdf: {err}")))?;
    let pages = pdf.get_pages();
    let media_box = pages
        .values()
        .next()
        .and_then(|page_id| pdf.get_dictionary(*page_id).ok())
        .and_then(|page| media_box(&pdf, page));

    Ok(OutputReport {
        pdf_version: pdf.version.clone(),
        page_count: pages.len(),
        encrypted: pdf.is_encrypted(),
        media_box,
        byte_len: bytes.len(),
    })
}

fn media_box(pdf: &LoDocument, page: &Dictionary) -> Option<Size> {
    let mut dict = page;
    // MediaBox is inheritable from the page tree and may be stored indirectly.
    for _ in 0..8 {
        if let Ok(raw) = dict.get(b"MediaBox") {
            let (_, rect) = pdf.dereference(raw).ok()?;
            let nums: Vec<f32> = rect
                .as_array()
                .ok()?
                .iter()
                .filter_map(|o| pdf.dereference(o).ok()?.1.as_float().ok())
                .collect();
            if nums.len() != 4 {
                return None;
            }
            return Some(Size {
                width: Pt::from_f32(nums[2] - nums[0]),
                height: Pt::from_f32(nums[3] - nums[1]),
            });
        }
        let parent = dict.get(b"Parent").and_then(Object::as_reference).ok()?;
        dict = pdf.get_dictionary(parent).ok()?;
    }
    None
}

/// Rejects output that is not a single unencrypted page of `expected` size.
pub fn check_output(report: &OutputReport, expected: Size) -> Result<(), SheetError> {
    if report.encrypted {
        return Err(SheetError::Output("encrypted output is not supported".to_string()));
    }
    if report.page_count != 1 {
        return Err(SheetError::Output(format!(
            "expected exactly one page, got {}",
            report.page_count
        )));
    }
    match report.media_box {
        Some(size) if size.approx_eq(&expected, Pt::from_i32(1)) => Ok(()),
        Some(size) => Err(SheetError::Output(format!(
            "page size {}x{} does not match {}x{}",
            size.width, size.height, expected.width, expected.height
        ))),
        None => Err(SheetError::Output("page has no media box".to_string())),
    }
}

/// Hands the tree to `renderer` and packages the checked result for download.
pub fn deliver(
    tree: &ContentTree,
    config: &VehicleConfig,
    renderer: &dyn Renderer,
) -> Result<RenderedSheet, SheetError> {
    let bytes = renderer
        .render(tree)
        .map_err(|err| SheetError::Render(err.to_string()))?;
    let report = inspect_output(&bytes)?;
    check_output(&report, tree.page.size)?;
    Ok(RenderedSheet {
        filename: sheet_filename(&config.brand, &config.model),
        content_type: PDF_CONTENT_TYPE,
        bytes,
        report,
    })
}


#[cfg(test)]
mod tests {
    use super::fixtures::{a4_renderer, title_page_pdf};
    use super::*;
    use crate::compose::{ComposeOptions, compose};
    use crate::style::StyleSheet;

    fn tree_for(config: &VehicleConfig) -> ContentTree {
        compose(config, &StyleSheet::standard(), &ComposeOptions::default()).expect("compose")
    }

    #[test]
    fn filename_replaces_whitespace_runs() {
        assert_eq!(sheet_filename("BMW", "118D"), "ficha_BMW_118D.pdf");
        assert_eq!(
            sheet_filename("Land Rover", "Range  Rover\tSport"),
            "ficha_Land_Rover_Range_Rover_Sport.pdf"
        );
        assert_eq!(sheet_filename("", ""), "ficha_vehiculo_.pdf");
    }

    #[test]
    fn inspect_reads_page_count_and_inherited_media_box() {
        let tree = tree_for(&VehicleConfig::sample());
        let bytes = title_page_pdf(&tree, 1, 595, 842);
        let report = inspect_output(&bytes).expect("inspect");
        assert_eq!(report.page_count, 1);
        assert!(!report.encrypted);
        assert_eq!(report.byte_len, bytes.len());
        assert_eq!(
            report.media_box,
            Some(Size {
                width: Pt::from_i32(595),
                height: Pt::from_i32(842),
            })
        );
    }

    fn indirect_media_box_pdf() -> Vec<u8> {
        use lopdf::{Object as LoObject, dictionary};

        let mut doc = LoDocument::with_version("1.7");
        let pages_id = doc.new_object_id();
        let width_id = doc.add_object(LoObject::Integer(595));
        let box_id = doc.add_object(LoObject::Array(vec![
            LoObject::Integer(0),
            LoObject::Integer(0),
            LoObject::Reference(width_id),
            LoObject::Integer(842),
        ]));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => box_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![LoObject::Reference(page_id)],
            "Count" => LoObject::Integer(1),
        };
        doc.objects.insert(pages_id, LoObject::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        doc.save_to(&mut out).expect("save");
        out
    }

    #[test]
    fn inspect_follows_indirect_media_box() {
        let report = inspect_output(&indirect_media_box_pdf()).expect("inspect");
        assert_eq!(report.page_count, 1);
        assert_eq!(
            report.media_box,
            Some(Size {
                width: Pt::from_i32(595),
                height: Pt::from_i32(842),
            })
        );
        assert!(check_output(&report, Size {
            width: Pt::from_i32(595),
            height: Pt::from_i32(842),
        })
        .is_ok());
    }

    #[test]
    fn inspect_rejects_non_pdf_bytes() {
        let err = inspect_output(b"not a pdf").expect_err("invalid");
        assert!(matches!(err, SheetError::Output(_)));
    }

    #[test]
    fn deliver_packages_checked_output() {
        let config = VehicleConfig::sample();
        let tree = tree_for(&config);
        let sheet = deliver(&tree, &config, &a4_renderer).expect("deliver");
        assert_eq!(sheet.filename, "ficha_BMW_118D.pdf");
        assert_eq!(sheet.content_type, PDF_CONTENT_TYPE);
        assert_eq!(sheet.report.page_count, 1);
        assert!(!sheet.bytes.is_empty());
    }

    #[test]
    fn deliver_rejects_multi_page_or_wrong_size_output() {
        let config = VehicleConfig::sample();
        let tree = tree_for(&config);

        let two_pages = |tree: &ContentTree| -> Result<Vec<u8>, RenderFailure> {
            Ok(title_page_pdf(tree, 2, 595, 842))
        };
        let err = deliver(&tree, &config, &two_pages).expect_err("two pages");
        assert!(err.to_string().contains("exactly one page"));

        let letter = |tree: &ContentTree| -> Result<Vec<u8>, RenderFailure> {
            Ok(title_page_pdf(tree, 1, 612, 792))
        };
        let err = deliver(&tree, &config, &letter).expect_err("letter size");
        assert!(matches!(err, SheetError::Output(_)));
    }

    #[test]
    fn renderer_failure_becomes_render_error() {
        let config = VehicleConfig::sample();
        let tree = tree_for(&config);
        let failing = |_: &ContentTree| -> Result<Vec<u8>, RenderFailure> {
            Err("font cache unavailable".into())
        };
        let err = deliver(&tree, &config, &failing).expect_err("render failure");
        assert!(matches!(err, SheetError::Render(ref m) if m.contains("font cache")));
        assert!(!err.is_template_integrity());
    }
}
