use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use efficiency_gap::{
    render_infographic, report_delegation, Delegation, District, FontSet, Parties, Party, ReportContext, Rgb,
    HEIGHT, WIDTH,
};
use geo::{polygon, MultiPolygon};
use image::Rgba;

const FONT_DIRS: [&str; 3] = ["/usr/share/fonts", "/usr/local/share/fonts", "/Library/Fonts"];

/// First TrueType or OpenType font found under `dir`, searched depth first.
fn find_font(dir: &Path) -> Option<PathBuf> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir).ok()?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .collect();
    entries.sort();

    entries.iter()
        .find(|path| {
            path.is_file()
                && path.extension().and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf") || ext.eq_ignore_ascii_case("otf"))
        })
        .cloned()
        .or_else(|| entries.iter().filter(|path| path.is_dir()).find_map(|path| find_font(path)))
}

/// A context drawing with whatever system font is installed, or `None` on hosts without one.
fn system_context(output_directory: &Path) -> Option<ReportContext> {
    let path = FONT_DIRS.iter().find_map(|dir| find_font(Path::new(dir)))?;
    let data = Arc::new(std::fs::read(&path).ok()?);
    let fonts = FontSet { regular: data.clone(), bold: data };
    let parties = Parties::new(
        Party::new("Democratic", Rgb::new(0x45, 0xba, 0xe8)),
        Party::new("Republican", Rgb::new(0xff, 0x59, 0x5f)),
    );
    Some(ReportContext::new(parties, output_directory, fonts))
}

fn delegation() -> Delegation {
    let districts = [[60, 40], [0, 100], [30, 70]].iter().enumerate()
        .map(|(i, v)| {
            let x = -95.0 + i as f64;
            let boundary = MultiPolygon(vec![polygon![
                (x: x, y: 38.0),
                (x: x + 1.0, y: 38.0),
                (x: x + 1.0, y: 39.0),
                (x: x, y: 39.0),
                (x: x, y: 38.0),
            ]]);
            District::new(format!("{}", i + 1), *v, boundary).unwrap()
        })
        .collect();
    Delegation::new("Kansas", "KS", districts)
}

#[test]
fn infographic_rasterizes_with_a_system_font() {
    let dir = tempfile::tempdir().unwrap();
    let Some(context) = system_context(dir.path()) else {
        eprintln!("no system font found, skipping");
        return;
    };

    let image = render_infographic(&delegation(), &context).unwrap();
    assert_eq!(image.dimensions(), (WIDTH, HEIGHT));
    // left margin beside the graph is bare background
    assert_eq!(*image.get_pixel(10, 300), Rgba([0x29, 0x2d, 0x39, 255]));
}

#[test]
fn report_writes_a_decodable_png() {
    let dir = tempfile::tempdir().unwrap();
    let Some(context) = system_context(&dir.path().join("output")) else {
        eprintln!("no system font found, skipping");
        return;
    };

    let path = report_delegation(&delegation(), &context).unwrap();
    assert!(path.starts_with(dir.path().join("output")));
    let image = image::open(&path).unwrap();
    assert_eq!((image.width(), image.height()), (WIDTH, HEIGHT));
}
