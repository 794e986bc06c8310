use std::path::Path;

use console::Style;
use seatpick_core::config::PickerConfig;
use seatpick_core::geometry::{BoundingBox, GeometryStore, Section};

/// Mismatches listed before the rest are summarised as a count.
const MAX_LISTED_MISMATCHES: usize = 12;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    warn: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            warn: Style::new().yellow(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_geometry_summary(
    path: &Path,
    store: &GeometryStore,
    config: &PickerConfig,
    mismatches: &[(&Section, Option<BoundingBox>)],
    tolerance: f64,
) {
    let s = Styles::new();
    let size = store.source_size();

    println!();
    println!("  {}", s.title.apply_to("Stadium Geometry"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Canvas"),
        s.value.apply_to(format!("{}x{}", size.width, size.height))
    );
    println!();

    println!("  {}", s.header.apply_to("Sections"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Loaded"),
        s.value.apply_to(store.len())
    );
    if store.skipped() == 0 {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Skipped"),
            s.disabled.apply_to("none")
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Skipped"),
            s.warn.apply_to(format!("{} (malformed outline)", store.skipped()))
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Picker"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Loupe"),
        s.value.apply_to(format!("{} px", config.loupe_size))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(format!(
            "{} px at {}x",
            config.zoom_view_size, config.zoom_scale
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Radius"),
        s.value.apply_to(config.zoom_radius)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Fill rule"),
        s.value.apply_to(config.fill_rule)
    );
    println!();

    print_mismatches(&s, mismatches, tolerance);
}

fn print_mismatches(s: &Styles, mismatches: &[(&Section, Option<BoundingBox>)], tolerance: f64) {
    if mismatches.is_empty() {
        println!(
            "  {:<14}{}",
            s.header.apply_to("Boxes"),
            s.disabled.apply_to(format!("all within {tolerance} of their outlines"))
        );
        println!();
        return;
    }

    println!(
        "  {}",
        s.header.apply_to(format!("Box Mismatches ({})", mismatches.len()))
    );
    for (section, actual) in mismatches.iter().take(MAX_LISTED_MISMATCHES) {
        let b = section.bounding_box;
        let extent = match actual {
            Some(a) => format!(
                "outline {:.1},{:.1} {:.1}x{:.1}",
                a.x, a.y, a.width, a.height
            ),
            None => "empty outline".to_string(),
        };
        println!(
            "    {:<12}{}  {}",
            s.label.apply_to(&section.id),
            s.value
                .apply_to(format!("box {},{} {}x{}", b.x, b.y, b.width, b.height)),
            s.warn.apply_to(extent)
        );
    }
    if mismatches.len() > MAX_LISTED_MISMATCHES {
        println!(
            "    {}",
            s.label
                .apply_to(format!("... {} more", mismatches.len() - MAX_LISTED_MISMATCHES))
        );
    }
    println!();
}
