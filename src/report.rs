use std::{path::{Path, PathBuf}, sync::Arc};

use anyhow::{anyhow, Context, Result};
use image::RgbaImage;
use rayon::prelude::*;

use crate::{
    config::{Config, DEFAULT_SUBTITLE, DEFAULT_TITLE_SUFFIX},
    election::{Delegation, ElectionResults, Parties},
    error::{ReportError, ReportResult},
    infographic::render_infographic,
    io::png::{read_image, write_png},
    render::FontSet,
};

/// An asset loaded once per run. A failed load is kept and reported by each delegation needing it.
type Loaded<T> = Result<T, Arc<anyhow::Error>>;

fn loaded<T>(asset: &Loaded<T>) -> Result<&T> {
    asset.as_ref().map_err(|e| anyhow!("{e:#}"))
}

/// Run-wide, read-only state shared by every infographic.
#[derive(Clone, Debug)]
pub struct ReportContext {
    parties: Parties,
    output_directory: PathBuf,
    fonts: Loaded<FontSet>,
    watermark: Option<Loaded<Arc<RgbaImage>>>,
    title_suffix: String,
    subtitle: String,
}

impl ReportContext {
    pub fn new(parties: Parties, output_directory: impl Into<PathBuf>, fonts: FontSet) -> Self {
        Self {
            parties,
            output_directory: output_directory.into(),
            fonts: Ok(fonts),
            watermark: None,
            title_suffix: DEFAULT_TITLE_SUFFIX.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
        }
    }

    /// Build the context for `config`, loading fonts and the optional watermark.
    /// Assets that fail to load make every delegation fail to render, not the context.
    pub fn from_config(config: &Config) -> Self {
        let read_font = |path: &Path| std::fs::read(path)
            .map(Arc::new)
            .with_context(|| format!("[ReportContext::from_config] Failed to read font file: {}", path.display()));
        let fonts = read_font(&config.fonts.regular)
            .and_then(|regular| Ok(FontSet { regular, bold: read_font(&config.fonts.bold)? }))
            .map_err(|e| {
                tracing::error!("{e:#}");
                Arc::new(e)
            });

        let watermark = config.watermark.as_deref().map(|path| {
            read_image(path)
                .map(Arc::new)
                .context("[ReportContext::from_config] Failed to load watermark")
                .map_err(|e| {
                    tracing::error!("{e:#}");
                    Arc::new(e)
                })
        });

        Self {
            parties: config.parties(),
            output_directory: config.output_directory.clone(),
            fonts,
            watermark,
            title_suffix: config.title_suffix.clone(),
            subtitle: config.subtitle.clone(),
        }
    }

    pub fn with_watermark(mut self, watermark: Option<RgbaImage>) -> Self {
        self.watermark = watermark.map(|image| Ok(Arc::new(image)));
        self
    }

    pub fn with_title_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.title_suffix = suffix.into();
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    #[inline] pub fn parties(&self) -> &Parties { &self.parties }

    #[inline] pub fn output_directory(&self) -> &Path { &self.output_directory }

    /// Font faces, or the error that kept them from loading.
    #[inline] pub fn fonts(&self) -> Result<&FontSet> { loaded(&self.fonts) }

    /// The configured watermark, if any, or the error that kept it from loading.
    pub fn watermark(&self) -> Result<Option<&RgbaImage>> {
        self.watermark.as_ref()
            .map(|watermark| loaded(watermark).map(|image| &**image))
            .transpose()
    }

    #[inline] pub fn title_suffix(&self) -> &str { &self.title_suffix }

    #[inline] pub fn subtitle(&self) -> &str { &self.subtitle }

    /// Where the infographic of `delegation` is written.
    pub fn output_path(&self, delegation: &Delegation) -> PathBuf {
        self.output_directory.join(format!("{}.png", delegation.name()))
    }
}

/// Infographics written and delegations that failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportOutcome {
    pub written: Vec<PathBuf>,
    pub failed: Vec<String>,
}

impl ReportOutcome {
    #[inline] pub fn is_success(&self) -> bool { self.failed.is_empty() }
}

/// Render and write one delegation's infographic, returning the written path.
pub fn report_delegation(delegation: &Delegation, context: &ReportContext) -> ReportResult<PathBuf> {
    let image = render_infographic(delegation, context)?;
    let path = context.output_path(delegation);
    write_png(&image, &path).map_err(|e| ReportError::render(delegation.name(), e))?;

    tracing::info!("{}: {}", delegation.name(), delegation.score());
    Ok(path)
}

/// Report every delegation in parallel. A delegation that cannot be scored or drawn is logged and
/// skipped; the rest still run.
pub fn run_report(results: &ElectionResults, context: &ReportContext) -> ReportOutcome {
    let outcomes: Vec<(String, ReportResult<PathBuf>)> = results.delegations()
        .par_iter()
        .map(|delegation| (delegation.name().to_string(), report_delegation(delegation, context)))
        .collect();

    let mut outcome = ReportOutcome::default();
    for (name, result) in outcomes {
        match result {
            Ok(path) => {
                tracing::info!("[report::run_report] wrote {}", path.display());
                outcome.written.push(path);
            }
            Err(e) => {
                tracing::error!("[report::run_report] skipping {name}: {e}");
                outcome.failed.push(name);
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use geo::MultiPolygon;

    use super::*;
    use crate::{election::{District, Party}, render::Rgb};

    fn context(dir: &Path) -> ReportContext {
        let parties = Parties::new(Party::new("Left", Rgb::BLACK), Party::new("Right", Rgb::WHITE));
        let fonts = FontSet { regular: Arc::new(Vec::new()), bold: Arc::new(Vec::new()) };
        ReportContext::new(parties, dir, fonts)
    }

    #[test]
    fn output_path_uses_delegation_name() {
        let ctx = context(Path::new("/tmp/out"));
        let delegation = Delegation::new("New York", "NY", vec![]);
        assert_eq!(ctx.output_path(&delegation), PathBuf::from("/tmp/out/New York.png"));
        assert_eq!(ctx.title_suffix(), " Congressional Delegation");
        assert!(ctx.watermark().unwrap().is_none());
    }

    #[test]
    fn failures_are_collected_without_aborting() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        let district = District::new("1", [10, 20], MultiPolygon(vec![])).unwrap();
        let results = ElectionResults::new(
            ctx.parties().left.clone(),
            ctx.parties().right.clone(),
            vec![Delegation::new("Empty", "EM", vec![]), Delegation::new("Broken Fonts", "BF", vec![district])],
        );

        let outcome = run_report(&results, &ctx);
        assert!(outcome.written.is_empty());
        assert_eq!(outcome.failed, vec!["Empty".to_string(), "Broken Fonts".to_string()]);
        assert!(!outcome.is_success());
    }

    fn config(dir: &Path, assets: &str) -> Config {
        let yaml = format!(
            "filename: results.csv\ngeojson: districts.geojson\noutputDirectory: out\n\
             delegationIdentifier: state\ndelegationName: name\ndistrictIdentifier: district\n\
             partyLeftVotes: l\npartyRightVotes: r\npartyLeftName: Left\npartyRightName: Right\n{assets}"
        );
        Config::from_yaml(&yaml, dir).unwrap()
    }

    fn contested(name: &str) -> Delegation {
        Delegation::new(name, &name[..2], vec![District::new("1", [10, 20], MultiPolygon(vec![])).unwrap()])
    }

    #[test]
    fn missing_watermark_fails_each_delegation_not_the_run() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("font.ttf"), b"font bytes").unwrap();
        let config = config(dir.path(), "fonts:\n  regular: font.ttf\n  bold: font.ttf\nwatermark: missing_logo.png\n");

        let ctx = ReportContext::from_config(&config);
        assert!(ctx.fonts().is_ok());
        assert!(ctx.watermark().is_err());

        let results = ElectionResults::new(
            ctx.parties().left.clone(),
            ctx.parties().right.clone(),
            vec![contested("Ohio"), contested("Utah")],
        );
        let outcome = run_report(&results, &ctx);
        assert!(outcome.written.is_empty());
        assert_eq!(outcome.failed, vec!["Ohio", "Utah"]);

        match report_delegation(&results.delegations()[0], &ctx) {
            Err(ReportError::Render { delegation, source }) => {
                assert_eq!(delegation, "Ohio");
                assert!(format!("{source:#}").contains("missing_logo.png"), "{source:#}");
            }
            other => panic!("expected a render error, got {other:?}"),
        }
    }

    #[test]
    fn missing_font_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), "fonts:\n  regular: missing.ttf\n  bold: missing-bold.ttf\n");

        let ctx = ReportContext::from_config(&config);
        assert!(ctx.watermark().unwrap().is_none());

        let err = report_delegation(&contested("Iowa"), &ctx).unwrap_err();
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("missing.ttf"), "{err}");
    }
}
