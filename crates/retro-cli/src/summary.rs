use std::path::Path;

use console::Style;
use retro_core::detection::{DetectorConfig, ThresholdSource};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

/// Print the effective detector settings to stderr, keeping stdout for JSON.
pub fn print_detect_summary(
    config: &DetectorConfig,
    image_count: usize,
    annotate_dir: Option<&Path>,
) {
    let s = Styles::new();

    eprintln!();
    eprintln!("  {}", s.title.apply_to("Retro Finder"));
    eprintln!();

    eprintln!(
        "  {:<12}{}",
        s.label.apply_to("Images"),
        s.value.apply_to(image_count)
    );
    eprintln!(
        "  {:<12}{}",
        s.label.apply_to("Frame"),
        s.value
            .apply_to(format!("{}x{}", config.frame_width, config.frame_height))
    );

    let threshold = match config.threshold_source {
        ThresholdSource::Fixed => format!("{} ({})", config.threshold, config.threshold_mode),
        ThresholdSource::Otsu => format!("Otsu ({})", config.threshold_mode),
    };
    eprintln!(
        "  {:<12}{}",
        s.label.apply_to("Threshold"),
        s.method.apply_to(threshold)
    );
    eprintln!(
        "  {:<12}{}",
        s.label.apply_to("Contours"),
        s.method.apply_to(config.retrieval)
    );
    eprintln!(
        "  {:<12}{}",
        s.label.apply_to("Rounding"),
        s.method.apply_to(config.rounding)
    );

    match annotate_dir {
        Some(dir) => eprintln!(
            "  {:<12}{} {}",
            s.label.apply_to("Debug"),
            s.method.apply_to(config.annotation),
            s.path.apply_to(dir.display())
        ),
        None => eprintln!(
            "  {:<12}{}",
            s.label.apply_to("Debug"),
            s.disabled.apply_to("off")
        ),
    }
    eprintln!();
}
