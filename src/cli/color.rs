//! Color conversion, derivation and contrast commands.

use crate::cli::common::{parse_color, print_json, CliError, CliResult};
use crate::heuristics::{derive_complementary_colors, harmony_set};
use crate::models::{Color, HslColor};
use clap::Args;
use serde::Serialize;

/// WCAG AA minimum for body text.
const AA_NORMAL: f64 = 4.5;
/// WCAG AA minimum for large text.
const AA_LARGE: f64 = 3.0;
/// WCAG AAA minimum for body text.
const AAA_NORMAL: f64 = 7.0;

/// Convert between hex and HSL
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Hex color to convert to HSL (e.g., "#3b82f6")
    #[arg(value_name = "HEX", required_unless_present = "hsl")]
    pub hex: Option<String>,

    /// HSL triple to convert to hex: hue in degrees, saturation and lightness in 0-1
    #[arg(long, num_args = 3, value_names = ["H", "S", "L"], conflicts_with = "hex", allow_negative_numbers = true)]
    pub hsl: Option<Vec<f64>>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ConversionResult {
    hex: Color,
    hsl: HslColor,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let (hex, hsl) = match (&self.hex, &self.hsl) {
            (Some(hex), _) => {
                let color = parse_color(hex)?;
                (color, color.to_hsl())
            }
            (None, Some(values)) => {
                let [h, s, l] = values[..] else {
                    return Err(CliError::validation("--hsl takes exactly three values"));
                };
                if !(0.0..=1.0).contains(&s) || !(0.0..=1.0).contains(&l) {
                    return Err(CliError::validation(
                        "Saturation and lightness must be between 0 and 1",
                    ));
                }
                let hsl = HslColor::new(h, s, l);
                (hsl.to_color(), hsl)
            }
            (None, None) => {
                return Err(CliError::validation("Provide a hex color or --hsl H S L"));
            }
        };

        let result = ConversionResult { hex, hsl };
        if self.json {
            print_json(&result)?;
        } else {
            println!("Hex: {}", result.hex);
            println!(
                "HSL: {:.1}°, {:.1}%, {:.1}%",
                result.hsl.h,
                result.hsl.s * 100.0,
                result.hsl.l * 100.0
            );
        }
        Ok(())
    }
}

/// Derive harmony colors from a primary color
#[derive(Debug, Clone, Args)]
pub struct DeriveArgs {
    /// Primary color (hex)
    #[arg(value_name = "HEX")]
    pub hex: String,

    /// Show every harmony, including the second analogous color
    #[arg(long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl DeriveArgs {
    /// Execute the derive command
    pub fn execute(&self) -> CliResult<()> {
        let primary = parse_color(&self.hex)?;

        if self.all {
            let set = harmony_set(primary);
            if self.json {
                return print_json(&set);
            }
            println!("Base:          {}", set.base);
            println!("Complementary: {}", set.complementary);
            println!("Triadic:       {}  {}", set.triadic[0], set.triadic[1]);
            println!("Analogous:     {}  {}", set.analogous[0], set.analogous[1]);
            return Ok(());
        }

        let derived = derive_complementary_colors(primary);
        if self.json {
            print_json(&derived)?;
        } else {
            for (label, color) in ["complementary", "triadic", "triadic", "analogous"]
                .iter()
                .zip(derived)
            {
                println!("{color}  {label}");
            }
        }
        Ok(())
    }
}

/// Check the contrast ratio between two colors
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Foreground color (hex)
    #[arg(value_name = "FOREGROUND")]
    pub foreground: String,

    /// Background color (hex)
    #[arg(value_name = "BACKGROUND")]
    pub background: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContrastResult {
    foreground: Color,
    background: Color,
    ratio: f64,
    aa_normal: bool,
    aa_large: bool,
    aaa_normal: bool,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let foreground = parse_color(&self.foreground)?;
        let background = parse_color(&self.background)?;
        let ratio = foreground.contrast_ratio(&background);

        let result = ContrastResult {
            foreground,
            background,
            ratio: (ratio * 100.0).round() / 100.0,
            aa_normal: ratio >= AA_NORMAL,
            aa_large: ratio >= AA_LARGE,
            aaa_normal: ratio >= AAA_NORMAL,
        };

        if self.json {
            print_json(&result)?;
        } else {
            let mark = |pass: bool| if pass { "pass" } else { "fail" };
            println!("Contrast ratio: {:.2}:1", result.ratio);
            println!("  AA (normal text):  {}", mark(result.aa_normal));
            println!("  AA (large text):   {}", mark(result.aa_large));
            println!("  AAA (normal text): {}", mark(result.aaa_normal));
        }
        Ok(())
    }
}
